//! Command handlers for the CLI.
//!
//! Errors bubble up to `main` and are rendered as a single inline message;
//! a failed list leaves the table unrendered rather than half-printed.

pub mod brands;
pub mod categories;
pub mod discounts;
pub mod products;

/// Truncates display text to `max` characters, appending an ellipsis.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_owned()
    }
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("Shirts", 10), "Shirts");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("Long category name", 4), "Long...");
    }

    #[test]
    fn yes_no_labels() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
    }
}
