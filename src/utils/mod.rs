//! Common utilities and helper functions
//!
//! Number and label formatting shared by the trend normalizer, the sample
//! data set and the CLI.

pub mod error;

/// Format a count as a short human-readable string
///
/// `>= 1_000_000` becomes `"{x:.1}M"`, `>= 1_000` becomes `"{x:.1}K"`,
/// anything smaller is printed as a plain integer. The tenths digit rounds
/// half up, so 1_250 is `"1.3K"`.
pub fn format_number(num: u64) -> String {
    if num >= 1_000_000 {
        format_tenths(num, 1_000_000, 'M')
    } else if num >= 1_000 {
        format_tenths(num, 1_000, 'K')
    } else {
        num.to_string()
    }
}

/// `num / unit` to one decimal place, ties rounded up
fn format_tenths(num: u64, unit: u64, suffix: char) -> String {
    let step = unit / 10;
    let tenths = num / step + u64::from(num % step >= step / 2);
    format!("{}.{}{suffix}", tenths / 10, tenths % 10)
}

/// Format a growth rate as a `+N%` label
///
/// Whole-number rates print without decimals.
pub fn format_growth(rate: f64) -> String {
    if rate.fract() == 0.0 && rate.abs() < 1e15 {
        format!("+{}%", rate as i64)
    } else {
        format!("+{rate}%")
    }
}

/// Prefix a hashtag with `#` unless it already has one
pub fn ensure_hash_prefix(name: &str) -> String {
    if name.starts_with('#') {
        name.to_string()
    } else {
        format!("#{name}")
    }
}

/// Truncate text to a maximum number of characters
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
