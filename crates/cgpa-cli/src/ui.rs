//! UI helpers for CLI display.

use console::{style, Style};

use cgpa_core::classification::ColorTier;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Terminal style for a colour tier.
#[must_use]
pub fn tier_style(tier: ColorTier) -> Style {
    match tier {
        ColorTier::Excellent => Style::new().cyan().bold(),
        ColorTier::Good => Style::new().blue().bold(),
        ColorTier::Average => Style::new().yellow().bold(),
        ColorTier::Poor => Style::new().red().bold(),
    }
}

/// Apply the tier style to `text` when `color` is set.
#[must_use]
pub fn paint(text: &str, tier: ColorTier, color: bool) -> String {
    if color {
        tier_style(tier).apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
