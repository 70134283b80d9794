//! Formatting utilities for terminal output

/// A single board cell with its multiplier, e.g. `B` or `Bx3`
#[must_use]
pub fn format_cell(letter: char, multiplier: i64) -> String {
    if multiplier == 1 {
        letter.to_string()
    } else {
        format!("{letter}x{multiplier}")
    }
}

/// Group digits in threes: `1234567` becomes `1,234,567`
#[must_use]
pub fn format_count(value: u128) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(digit);
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_tags_multiplier() {
        assert_eq!(format_cell('B', 1), "B");
        assert_eq!(format_cell('B', 3), "Bx3");
    }

    #[test]
    fn count_grouping() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░".repeat(10));
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, format!("{}{}", "█".repeat(5), "░".repeat(5)));
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░".repeat(4));
    }
}
