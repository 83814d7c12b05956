//! Application-level configuration constants.

// Items the wheel starts with before the user edits the list.
pub const DEFAULT_ITEMS: [&str; 6] = [
    "Item 1", "Item 2", "Item 3", "Item 4", "Item 5", "Item 6",
];

// One tick between the snap-to-zero and the animated run-up, so the browser
// commits the un-transitioned rotation first.
pub const SNAP_DELAY_MS: u32 = 1;

// Easing curve for the spin transition.
pub const SPIN_EASING: &str = "cubic-bezier(0.25, 0.1, 0.25, 1)";
