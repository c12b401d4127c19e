//! Manual page-number entry parsing.
//!
//! Typed text is sanitized in place: out-of-range numbers are pulled back to
//! the nearest valid page and anything that is not a number is rejected so
//! the caller can keep its current page. Besides decimal and exponent
//! forms, unsigned `0x`, `0o` and `0b` literals are accepted.

#[cfg(test)]
#[path = "page_input_test.rs"]
mod page_input_test;

/// Result of interpreting the entry box text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageInput {
    /// A usable page, already clamped into `[1, total]`.
    Page(u32),
    /// Empty or non-numeric text.
    Rejected,
}

/// Interpret `raw` as a page number for a list of `total_pages` pages.
pub fn parse_page_input(raw: &str, total_pages: u32) -> PageInput {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return PageInput::Rejected;
    }
    let parsed = match radix_literal(trimmed) {
        Some((radix, digits)) => parse_radix_digits(digits, radix),
        None => trimmed.parse::<f64>().ok(),
    };
    let Some(value) = parsed else {
        return PageInput::Rejected;
    };
    if value.is_nan() {
        return PageInput::Rejected;
    }
    PageInput::Page(page_from_number(value.floor(), total_pages))
}

/// Clamp `page` into `[1, total_pages]`, treating a zero total as one page.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Split a `0x`/`0o`/`0b` prefixed literal into radix and digits.
fn radix_literal(text: &str) -> Option<(u32, &str)> {
    let prefix = text.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &text[2..]))
}

/// Unsigned digits only; accumulates in `f64` so long literals saturate
/// to the last page instead of overflowing.
fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn page_from_number(value: f64, total_pages: u32) -> u32 {
    let total = total_pages.max(1);
    if value >= f64::from(total) {
        total
    } else if value < 1.0 {
        1
    } else {
        value as u32
    }
}
