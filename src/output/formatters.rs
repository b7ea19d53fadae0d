//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an expected value as a bar relative to the best achievable score
///
/// The ceiling is a full hand of the highest face.
#[must_use]
pub fn expected_value_bar(expected_value: f64, num_dice: usize, num_die_sides: u8, width: usize) -> String {
    let ceiling = num_dice as f64 * f64::from(num_die_sides);
    create_progress_bar(expected_value, ceiling, width)
}

/// Pluralize "die" for a count
#[must_use]
pub const fn dice_noun(count: usize) -> &'static str {
    if count == 1 { "die" } else { "dice" }
}
