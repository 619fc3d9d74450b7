//! # Formatting Utilities for the Dashboard
//!
//! View-level formatting on top of [`shared::utils`]. Address and number
//! formatting itself lives in the shared crate so it can be tested natively.

use shared::utils::format_percentage;

/// Native balance line, e.g. `2.5000 ETH`. Shows `0 ETH` before the first
/// balance query finishes.
pub fn format_balance(balance: Option<&str>, currency: &str) -> String {
    format!("{} {}", balance.unwrap_or("0"), currency)
}

/// Label and CSS class for a 24h change chip.
pub fn change_chip(pct: f64) -> (String, &'static str) {
    let class = if pct >= 0.0 { "chip chip-up" } else { "chip chip-down" };
    (format_percentage(pct, 1), class)
}

/// Token amount as shown in the table: whole numbers get separators, small
/// balances keep their fraction.
pub fn format_token_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        shared::utils::format_number(amount, 0)
    } else {
        let rendered = format!("{:.4}", amount);
        rendered.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(Some("2.5000"), "ETH"), "2.5000 ETH");
        assert_eq!(format_balance(None, "ETH"), "0 ETH");
    }

    #[test]
    fn test_change_chip() {
        assert_eq!(change_chip(12.5), ("+12.5%".to_string(), "chip chip-up"));
        assert_eq!(change_chip(0.0), ("0.0%".to_string(), "chip chip-up"));
        assert_eq!(change_chip(-3.0), ("-3.0%".to_string(), "chip chip-down"));
    }

    #[test]
    fn test_format_token_amount() {
        assert_eq!(format_token_amount(10_000.0), "10,000");
        assert_eq!(format_token_amount(2.5), "2.5");
        assert_eq!(format_token_amount(0.25), "0.25");
        assert_eq!(format_token_amount(1_250.0), "1,250");
    }
}
