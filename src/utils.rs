//! Label validation and slice geometry helpers for the view layer.

use fortune_wheel::slice_arc;

/// Validate a new item label: trimmed, non-empty, not already on the wheel.
pub fn validate_label(input: &str, existing: &[String]) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Label cannot be empty".to_string());
    }
    if existing.iter().any(|label| label == trimmed) {
        return Err(format!("'{}' is already on the wheel", trimmed));
    }
    Ok(trimmed.to_string())
}

/// CSS transform carving slice `index` out of the wheel disc.
///
/// Each slice is a quarter square rotated into place and skewed down to its
/// arc width, the classic CSS pie-slice construction.
pub fn slice_transform(index: usize, count: usize) -> String {
    let arc = slice_arc(count);
    format!("rotate({}deg) skewY({}deg)", arc * index as f64, 90.0 - arc)
}

/// Undoes the slice skew for its label and centers it along the arc.
pub fn label_transform(count: usize) -> String {
    let arc = slice_arc(count);
    format!("skewY({}deg) rotate({}deg)", arc - 90.0, arc / 2.0)
}
