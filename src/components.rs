//! Pure Yew view components for the wheel picker UI.
//!
//! Stateless components rendering from props only, so the spin logic stays
//! testable without a DOM.

use fortune_wheel::slice_color;
use yew::prelude::*;

use crate::config::SPIN_EASING;
use crate::utils::{label_transform, slice_transform};

/// Wheel face: one skewed sector per item plus the fixed pointer.
#[derive(Properties, PartialEq)]
pub struct WheelFaceProps {
    pub items: Vec<String>,
    /// Rotation currently applied to the DOM, in degrees. Trails the state
    /// machine's resting rotation during the run-up animation.
    pub rotation: f64,
    pub animating: bool,
    pub duration_ms: u32,
}

#[function_component(WheelFace)]
pub fn wheel_face(props: &WheelFaceProps) -> Html {
    let transition = if props.animating {
        format!("transform {}ms {}", props.duration_ms, SPIN_EASING)
    } else {
        "none".to_string()
    };
    let style = format!(
        "transform: rotate({}deg); transition: {};",
        props.rotation, transition
    );
    let count = props.items.len();

    html! {
        <div class="wheel-box">
            <div class="wheel" style={style}>
                { props.items.iter().enumerate().map(|(index, label)| {
                    html! {
                        <div key={label.as_str()}
                            class="slice"
                            style={format!("transform: {}; background-color: {};",
                                           slice_transform(index, count),
                                           slice_color(index))}
                        >
                            <span style={format!("transform: {}; display: block;",
                                                 label_transform(count))}>
                                { label }
                            </span>
                        </div>
                    }
                }).collect::<Html>() }
            </div>
            <div class="pointer"></div>
        </div>
    }
}

/// Item list with per-row remove buttons.
#[derive(Properties, PartialEq)]
pub struct ItemListProps {
    pub items: Vec<String>,
    pub onremove: Callback<String>,
}

#[function_component(ItemList)]
pub fn item_list(props: &ItemListProps) -> Html {
    html! {
        <ul class="item-list">
            { props.items.iter().map(|label| {
                let onremove = {
                    let onremove = props.onremove.clone();
                    let label = label.clone();
                    Callback::from(move |_: MouseEvent| onremove.emit(label.clone()))
                };
                html! {
                    <li key={label.as_str()}>
                        <span class="item-label">{ label }</span>
                        <button class="remove-button" onclick={onremove}>{ "Remove" }</button>
                    </li>
                }
            }).collect::<Html>() }
        </ul>
    }
}

/// Result banner, shown only once a finished spin has a winner to reveal.
pub fn render_result(selected: Option<&str>, spinning: bool) -> Html {
    match selected {
        Some(label) if !spinning => html! {
            <div class="result">
                { "Selected: " }<strong>{ label }</strong>
            </div>
        },
        _ => html! {},
    }
}
