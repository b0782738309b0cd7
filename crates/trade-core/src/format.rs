//! Display formatting for trade fields.
//!
//! Amounts arrive in 10,000-won units (만원). Anything at or above
//! 10,000 of those is shown in 억 (100 million won) with one decimal.

/// 1억 expressed in 만원 units.
pub const MAN_PER_EOK: u64 = 10_000;

/// Parse a comma-grouped amount string ("12,345") into an integer.
pub fn parse_amount(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    digits.trim().parse::<u64>().ok()
}

/// "12,345" -> "1.2억", "9,999" -> "9,999만".
///
/// Unparseable input is returned as-is.
pub fn format_amount(raw: &str) -> String {
    match parse_amount(raw) {
        Some(value) if value >= MAN_PER_EOK => {
            // tenths of 억, rounded half up; saturates near u64::MAX
            let tenths = value.saturating_add(MAN_PER_EOK / 20) / (MAN_PER_EOK / 10);
            format!("{}.{}억", tenths / 10, tenths % 10)
        }
        Some(value) => format!("{}만", group_thousands(value)),
        None => raw.to_string(),
    }
}

/// "20230115" -> "2023-01-15".
///
/// Only an 8-digit string is punctuated; anything else (shorter strings,
/// already formatted dates) passes through unchanged.
pub fn format_date(raw: &str) -> String {
    if raw.len() == 8 && raw.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}-{}-{}", &raw[0..4], &raw[4..6], &raw[6..8])
    } else {
        raw.to_string()
    }
}

pub fn format_area(area: f64) -> String {
    format!("{:.2}m²", area)
}

/// 1234567 -> "1,234,567"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
