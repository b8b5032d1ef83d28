//! Utility functions and helpers

use rust_decimal::Decimal;

/// Format a monetary amount with thousands separators
pub fn format_amount(amount: Decimal) -> String {
    let text = amount.to_string();
    let (number, fraction) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text, None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest.to_string()),
        None => ("", number),
    };

    let mut result = String::new();
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    let grouped: String = result.chars().rev().collect();

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Shorten text to at most `max_length` characters, appending an ellipsis
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() > max_length {
        let cut: String = text.chars().take(max_length).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

/// Generate a unique ID
pub fn generate_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis();
    format!("{}", now)
}
