use log::{debug, info};
use rand::Rng;
use std::fmt;

/// Default spin parameters
pub mod defaults {
    /// Spin duration consumed by both the visual transition and the
    /// completion timer, so the reveal cannot drift from the animation.
    pub const SPIN_DURATION_MS: u32 = 5_000;
    /// Full clockwise turns added to every target rotation.
    pub const EXTRA_FULL_TURNS: u32 = 10;
    /// Where inside the winning slice the pointer comes to rest, as a
    /// fraction of the slice measured from its leading edge.
    pub const LANDING_FRACTION: f64 = 1.0 / 6.0;
    /// A spin needs at least this many items to choose between.
    pub const MIN_ITEMS_FOR_SPIN: usize = 2;
}

/// Slice colors, assigned cyclically by slice index.
pub const PALETTE: [&str; 12] = [
    "#FF0000", // red
    "#00FF00", // green
    "#0000FF", // blue
    "#FFFF00", // yellow
    "#FF00FF", // magenta
    "#00FFFF", // cyan
    "#FF8000", // orange
    "#8000FF", // violet
    "#FF0080", // pink
    "#80FF00", // lime
    "#0080FF", // sky blue
    "#FF8080", // light red
];

/// Returns the color for an arbitrary slice index, wrapping around the palette.
#[inline]
pub fn slice_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

// Custom error type for wheel operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WheelError {
    EmptyLabel,
    DuplicateLabel(String),
    UnknownLabel(String),
    NotEnoughItems { have: usize, need: usize },
    SpinInProgress,
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelError::EmptyLabel => write!(f, "Item labels cannot be empty"),
            WheelError::DuplicateLabel(label) => {
                write!(f, "Item '{}' is already on the wheel", label)
            }
            WheelError::UnknownLabel(label) => {
                write!(f, "Item '{}' is not on the wheel", label)
            }
            WheelError::NotEnoughItems { have, need } => write!(
                f,
                "Spinning needs at least {} items, but only {} are on the wheel",
                need, have
            ),
            WheelError::SpinInProgress => write!(f, "The wheel is already spinning"),
        }
    }
}

impl std::error::Error for WheelError {}

/// Angular width of one slice in degrees.
///
/// # Panics
/// Panics if `item_count` is zero; an empty wheel has no slices to measure,
/// and spins are guarded at two items.
#[inline]
pub fn slice_arc(item_count: usize) -> f64 {
    assert!(item_count > 0, "wheel needs at least one slice");
    360.0 / item_count as f64
}

/// Map a resting rotation to the 0-based index of the slice under the fixed
/// pointer at 12 o'clock.
///
/// The wheel turns clockwise, so the rotation is reversed to find what the
/// pointer faces, and a half-slice offset accounts for slice 0 being centered
/// rather than started at angle 0. Any rotation is accepted, negative or far
/// beyond one turn.
pub fn pick_index_from_rotation(rotation_deg: f64, item_count: usize) -> usize {
    let arc = slice_arc(item_count);
    let final_rotation = rotation_deg.rem_euclid(360.0);
    let pointer_angle = (360.0 - final_rotation + arc / 2.0).rem_euclid(360.0);
    let index = (pointer_angle / arc).floor() as usize % item_count;
    debug!(
        "rotation {:.2}° -> pointer {:.2}° -> slice {}",
        final_rotation, pointer_angle, index
    );
    index
}

/// Tuning knobs for how a spin comes to rest.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinTuning {
    /// Full clockwise turns added on top of the landing angle.
    pub extra_turns: u32,
    /// Fraction of a slice past the winner's leading edge where the pointer
    /// lands. Must lie in `[0, 1)`; 0.5 would be the exact center.
    pub landing_fraction: f64,
    /// Spin duration driving both the transition and the reveal timer.
    pub duration_ms: u32,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            extra_turns: defaults::EXTRA_FULL_TURNS,
            landing_fraction: defaults::LANDING_FRACTION,
            duration_ms: defaults::SPIN_DURATION_MS,
        }
    }
}

/// Compute the absolute rotation that parks slice `index` under the pointer.
///
/// Inverse of [`pick_index_from_rotation`]: feeding the result back through it
/// recovers `index` for any landing fraction in `[0, 1)`. The extra turns keep
/// the value positive and give the animation its run-up; no further
/// normalization is applied.
pub fn pick_rotation_for_index(index: usize, item_count: usize, tuning: &SpinTuning) -> f64 {
    let arc = slice_arc(item_count);
    assert!(index < item_count, "slice index out of range");
    assert!(
        (0.0..1.0).contains(&tuning.landing_fraction),
        "landing fraction must lie in [0, 1)"
    );
    f64::from(tuning.extra_turns) * 360.0 + 360.0 + arc / 2.0
        - arc * (index as f64 + tuning.landing_fraction)
}

/// Everything the caller needs to drive one spin to completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinTicket {
    /// Index of the pre-chosen winning item.
    pub winner: usize,
    /// Absolute rotation the wheel comes to rest at.
    pub target_rotation: f64,
    /// Duration shared by the visual transition and the reveal timer.
    pub duration_ms: u32,
}

/// Wheel state machine: Idle -> Spinning -> Idle, one winner per spin.
///
/// The winner is chosen up front and the wheel is parked at the rotation that
/// puts it under the pointer. Rendering and timing stay outside: [`Wheel::spin`]
/// hands back a [`SpinTicket`] and the caller schedules the completion, feeding
/// the ticket into [`Wheel::finish_spin`] when its timer fires.
#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    items: Vec<String>,
    rotation: f64,
    spinning: bool,
    selected: Option<String>,
    tuning: SpinTuning,
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new()
    }
}

impl Wheel {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            rotation: 0.0,
            spinning: false,
            selected: None,
            tuning: SpinTuning::default(),
        }
    }

    /// Build a wheel pre-populated with labels; invalid ones are dropped.
    pub fn with_items<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut wheel = Self::new();
        for label in labels {
            if let Err(err) = wheel.add_item(label.as_ref()) {
                debug!("seed label skipped: {}", err);
            }
        }
        wheel
    }

    pub fn with_tuning(mut self, tuning: SpinTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Absolute rotation the wheel is parked at (the target while spinning).
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn tuning(&self) -> &SpinTuning {
        &self.tuning
    }

    /// The winning label of the last completed spin, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether a spin may start right now.
    pub fn can_spin(&self) -> bool {
        !self.spinning && self.items.len() >= defaults::MIN_ITEMS_FOR_SPIN
    }

    /// Append a trimmed label, rejecting empty strings and duplicates.
    pub fn add_item(&mut self, label: &str) -> Result<(), WheelError> {
        if self.spinning {
            return Err(WheelError::SpinInProgress);
        }
        let label = label.trim();
        if label.is_empty() {
            return Err(WheelError::EmptyLabel);
        }
        if self.items.iter().any(|existing| existing == label) {
            return Err(WheelError::DuplicateLabel(label.to_string()));
        }
        self.items.push(label.to_string());
        Ok(())
    }

    /// Remove a label. The list may shrink to empty; spinning stays guarded
    /// by the two-item minimum.
    pub fn remove_item(&mut self, label: &str) -> Result<(), WheelError> {
        if self.spinning {
            return Err(WheelError::SpinInProgress);
        }
        match self.items.iter().position(|existing| existing == label) {
            Some(pos) => {
                self.items.remove(pos);
                Ok(())
            }
            None => Err(WheelError::UnknownLabel(label.to_string())),
        }
    }

    /// Start a spin: draw the winner, park the wheel at its rotation.
    ///
    /// Clears the previous selection and refuses to start while a spin is in
    /// flight or fewer than two items are on the wheel.
    pub fn spin<R: Rng>(&mut self, rng: &mut R) -> Result<SpinTicket, WheelError> {
        if self.spinning {
            return Err(WheelError::SpinInProgress);
        }
        if self.items.len() < defaults::MIN_ITEMS_FOR_SPIN {
            return Err(WheelError::NotEnoughItems {
                have: self.items.len(),
                need: defaults::MIN_ITEMS_FOR_SPIN,
            });
        }

        let winner = rng.random_range(0..self.items.len());
        let target_rotation = pick_rotation_for_index(winner, self.items.len(), &self.tuning);

        self.selected = None;
        self.spinning = true;
        self.rotation = target_rotation;

        info!(
            "spin started: {} items, slice {} resting at {:.1}°",
            self.items.len(),
            winner,
            target_rotation
        );

        Ok(SpinTicket {
            winner,
            target_rotation,
            duration_ms: self.tuning.duration_ms,
        })
    }

    /// Complete the spin the ticket came from, revealing its winner.
    ///
    /// Item mutation is refused while spinning, so the ticket's index still
    /// names the item it was drawn for. Finishing an idle wheel is a no-op.
    pub fn finish_spin(&mut self, ticket: &SpinTicket) {
        if !self.spinning {
            debug!("finish_spin on an idle wheel, ignoring");
            return;
        }
        self.spinning = false;
        self.selected = self.items.get(ticket.winner).cloned();
        info!("spin finished: selected {:?}", self.selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn wheel_of(labels: &[&str]) -> Wheel {
        Wheel::with_items(labels.iter().copied())
    }

    #[test]
    fn five_full_turns_land_on_slice_zero() {
        // final = 0, arc = 60, pointer = 30 -> slice 0
        assert_eq!(pick_index_from_rotation(1800.0, 6), 0);
    }

    #[test]
    fn quarter_turn_past_a_full_turn_selects_last_slice() {
        // final = 90, arc = 90, pointer = 315 -> slice 3
        assert_eq!(pick_index_from_rotation(450.0, 4), 3);
    }

    #[test]
    fn negative_rotations_normalize() {
        assert_eq!(
            pick_index_from_rotation(-270.0, 4),
            pick_index_from_rotation(90.0, 4)
        );
    }

    #[test]
    fn single_slice_always_wins() {
        for rotation in [0.0, 123.4, 359.9, 7200.0] {
            assert_eq!(pick_index_from_rotation(rotation, 1), 0);
        }
    }

    #[test]
    fn default_tuning_round_trips_for_every_slice() {
        let tuning = SpinTuning::default();
        for count in 1..=24 {
            for index in 0..count {
                let target = pick_rotation_for_index(index, count, &tuning);
                assert_eq!(
                    pick_index_from_rotation(target, count),
                    index,
                    "count {} index {}",
                    count,
                    index
                );
            }
        }
    }

    #[test]
    fn target_for_five_items_includes_ten_turns() {
        let target = pick_rotation_for_index(2, 5, &SpinTuning::default());
        // arc = 72: ten run-up turns plus the landing angle for slice 2
        assert!((target - 3840.0).abs() < 1e-9);
        assert_eq!(pick_index_from_rotation(target, 5), 2);
    }

    #[test]
    fn add_trims_and_appends_in_order() {
        let mut wheel = Wheel::new();
        wheel.add_item("  tea  ").unwrap();
        wheel.add_item("coffee").unwrap();
        assert_eq!(wheel.items(), ["tea", "coffee"]);
    }

    #[test]
    fn duplicate_add_leaves_length_unchanged() {
        let mut wheel = wheel_of(&["tea", "coffee"]);
        assert_eq!(
            wheel.add_item(" tea "),
            Err(WheelError::DuplicateLabel("tea".into()))
        );
        assert_eq!(wheel.items().len(), 2);
    }

    #[test]
    fn empty_add_is_rejected() {
        let mut wheel = Wheel::new();
        assert_eq!(wheel.add_item("   "), Err(WheelError::EmptyLabel));
        assert!(wheel.items().is_empty());
    }

    #[test]
    fn removal_may_empty_the_wheel() {
        let mut wheel = wheel_of(&["solo"]);
        wheel.remove_item("solo").unwrap();
        assert!(wheel.items().is_empty());
        assert_eq!(
            wheel.remove_item("solo"),
            Err(WheelError::UnknownLabel("solo".into()))
        );
    }

    #[test]
    fn spinning_needs_two_items() {
        let mut wheel = wheel_of(&["a"]);
        assert!(!wheel.can_spin());
        assert_eq!(
            wheel.spin(&mut rng()),
            Err(WheelError::NotEnoughItems { have: 1, need: 2 })
        );
        assert!(wheel.selected().is_none());
        assert!(!wheel.is_spinning());
    }

    #[test]
    fn spin_reveals_exactly_the_prechosen_winner() {
        let mut wheel = wheel_of(&["a", "b", "c", "d"]);
        let mut rng = rng();

        let ticket = wheel.spin(&mut rng).unwrap();
        assert!(wheel.is_spinning());
        assert!(wheel.selected().is_none());
        assert_eq!(wheel.rotation(), ticket.target_rotation);
        assert_eq!(
            pick_index_from_rotation(ticket.target_rotation, 4),
            ticket.winner
        );

        wheel.finish_spin(&ticket);
        assert!(!wheel.is_spinning());
        assert_eq!(
            wheel.selected(),
            Some(wheel.items()[ticket.winner].as_str())
        );
    }

    #[test]
    fn reentry_and_mutation_are_refused_while_spinning() {
        let mut wheel = wheel_of(&["a", "b"]);
        let mut rng = rng();

        let ticket = wheel.spin(&mut rng).unwrap();
        assert_eq!(wheel.spin(&mut rng), Err(WheelError::SpinInProgress));
        assert_eq!(wheel.add_item("c"), Err(WheelError::SpinInProgress));
        assert_eq!(wheel.remove_item("a"), Err(WheelError::SpinInProgress));

        wheel.finish_spin(&ticket);
        wheel.add_item("c").unwrap();
        assert_eq!(wheel.items().len(), 3);
    }

    #[test]
    fn a_new_spin_clears_the_previous_selection() {
        let mut wheel = wheel_of(&["a", "b", "c"]);
        let mut rng = rng();

        let first = wheel.spin(&mut rng).unwrap();
        wheel.finish_spin(&first);
        assert!(wheel.selected().is_some());

        wheel.spin(&mut rng).unwrap();
        assert!(wheel.selected().is_none());
    }

    #[test]
    fn finishing_an_idle_wheel_changes_nothing() {
        let mut wheel = wheel_of(&["a", "b"]);
        let mut rng = rng();

        let ticket = wheel.spin(&mut rng).unwrap();
        wheel.finish_spin(&ticket);
        let after = wheel.clone();

        wheel.finish_spin(&ticket);
        assert_eq!(wheel, after);
    }

    #[test]
    fn palette_cycles_with_its_own_period() {
        assert_eq!(slice_color(0), PALETTE[0]);
        assert_eq!(slice_color(PALETTE.len()), PALETTE[0]);
        assert_eq!(slice_color(PALETTE.len() * 3 + 5), PALETTE[5]);
    }

    #[test]
    fn palette_entries_are_distinct() {
        for (i, a) in PALETTE.iter().enumerate() {
            for (j, b) in PALETTE.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "palette duplicates at {} and {}", i, j);
                }
            }
        }
    }

    proptest! {
        #[test]
        fn index_stays_in_range(rotation in -7200.0f64..7200.0, count in 1usize..=24) {
            prop_assert!(pick_index_from_rotation(rotation, count) < count);
        }

        #[test]
        fn a_full_turn_is_invisible(rotation in -7200.0f64..7200.0, count in 1usize..=24) {
            prop_assert_eq!(
                pick_index_from_rotation(rotation, count),
                pick_index_from_rotation(rotation + 360.0, count)
            );
        }

        #[test]
        fn any_tuning_round_trips_to_the_winner(
            count in 1usize..=24,
            landing in 0.01f64..0.99,
            turns in 0u32..=20,
        ) {
            let tuning = SpinTuning {
                extra_turns: turns,
                landing_fraction: landing,
                duration_ms: defaults::SPIN_DURATION_MS,
            };
            for index in 0..count {
                let target = pick_rotation_for_index(index, count, &tuning);
                prop_assert_eq!(pick_index_from_rotation(target, count), index);
            }
        }
    }
}
