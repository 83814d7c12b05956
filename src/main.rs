//! Main module for the wheel picker application using Yew.
//! Wires UI components, state hooks, and the spin timers.

use fortune_wheel::Wheel;
use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod config;
mod utils;

use components::{render_result, ItemList, WheelFace};
use config::{DEFAULT_ITEMS, SNAP_DELAY_MS};
use utils::validate_label;

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let wheel = use_state(|| Wheel::with_items(DEFAULT_ITEMS));
    let new_label = use_state(String::new);
    // Rotation actually applied to the DOM; trails the state machine so the
    // wheel can snap back to zero before each animated run-up.
    let css_rotation = use_state(|| 0.0f64);
    let animating = use_state(|| false);
    // Held so a torn-down page drops, and thereby cancels, pending timers.
    let launch_timer = use_state(|| None::<Timeout>);
    let reveal_timer = use_state(|| None::<Timeout>);

    let new_label_oninput = {
        let new_label_setter = new_label.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_label_setter.set(input.value());
        })
    };

    let add_item = {
        let wheel = wheel.clone();
        let new_label = new_label.clone();
        Callback::from(move |_: ()| {
            let label = match validate_label(&new_label, wheel.items()) {
                Ok(label) => label,
                Err(reason) => {
                    debug!("add rejected: {}", reason);
                    return;
                }
            };
            let mut next = (*wheel).clone();
            match next.add_item(&label) {
                Ok(()) => {
                    wheel.set(next);
                    new_label.set(String::new());
                }
                Err(err) => debug!("add rejected: {}", err),
            }
        })
    };

    let add_onkeydown = {
        let commit = add_item.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit.emit(());
            }
        })
    };

    let remove_item = {
        let wheel = wheel.clone();
        Callback::from(move |label: String| {
            let mut next = (*wheel).clone();
            match next.remove_item(&label) {
                Ok(()) => wheel.set(next),
                Err(err) => debug!("remove rejected: {}", err),
            }
        })
    };

    let spin = {
        let wheel = wheel.clone();
        let css_rotation = css_rotation.clone();
        let animating = animating.clone();
        let launch_timer = launch_timer.clone();
        let reveal_timer = reveal_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wheel).clone();
            let ticket = match next.spin(&mut rand::rng()) {
                Ok(ticket) => ticket,
                Err(err) => {
                    debug!("spin refused: {}", err);
                    return;
                }
            };
            // Mutation is refused while spinning, so this snapshot is still
            // the wheel's state when the reveal timer fires.
            let spun = next.clone();
            wheel.set(next);

            // Snap back to zero without a transition; the launch timer
            // applies the animated run-up one tick later.
            animating.set(false);
            css_rotation.set(0.0);

            let launch = {
                let css_rotation = css_rotation.clone();
                let animating = animating.clone();
                Timeout::new(SNAP_DELAY_MS, move || {
                    animating.set(true);
                    css_rotation.set(ticket.target_rotation);
                })
            };
            launch_timer.set(Some(launch));

            let reveal = {
                let wheel = wheel.clone();
                let animating = animating.clone();
                Timeout::new(ticket.duration_ms, move || {
                    let mut done = spun;
                    done.finish_spin(&ticket);
                    wheel.set(done);
                    animating.set(false);
                })
            };
            reveal_timer.set(Some(reveal));
        })
    };

    html! {
        <div class="container">
            <h1>{ "Wheel of Choices" }</h1>

            <WheelFace
                items={wheel.items().to_vec()}
                rotation={*css_rotation}
                animating={*animating}
                duration_ms={wheel.tuning().duration_ms}
            />

            { render_result(wheel.selected(), wheel.is_spinning()) }

            <button class="spin-button" onclick={spin} disabled={!wheel.can_spin()}>
                { if wheel.is_spinning() { "Spinning..." } else { "Spin the wheel" } }
            </button>

            <div class="item-management">
                <h2>{ "Items" }</h2>
                <div class="add-item">
                    <input
                        type="text"
                        value={(*new_label).clone()}
                        placeholder="Add an item"
                        oninput={new_label_oninput}
                        onkeydown={add_onkeydown}
                    />
                    <button onclick={add_item.reform(|_: MouseEvent| ())}>{ "Add" }</button>
                </div>
                <ItemList items={wheel.items().to_vec()} onremove={remove_item} />
            </div>
        </div>
    }
}

/// Entry point: panic hook, console logger, then the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    yew::Renderer::<Main>::new().render();
}
