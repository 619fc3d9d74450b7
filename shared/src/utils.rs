//! # Shared Utility Functions
//!
//! Formatting and parsing helpers used by the dashboard views and the wallet
//! bridge.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the header's 6/4 split
//!
//! ## Numbers
//!
//! - [`format_number`] - Thousands separators with fixed decimals
//! - [`format_usd`] - Dollar amounts as shown in the portfolio table
//! - [`format_percentage`] - Signed percentage change
//! - [`parse_hex_quantity`] / [`format_wei`] - JSON-RPC quantities to ETH
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! let address = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
//! assert_eq!(truncate_address(address), "0x71C7...976F");
//! ```

use crate::error::{AppError, Result};

/// Decimals of the native currency (ETH on Base).
pub const NATIVE_DECIMALS: u32 = 18;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
/// assert_eq!(format_address(addr, 6, 4), "0x71C7...976F");
/// assert_eq!(format_address("short", 6, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Header form of an address: `first6...last4`.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// ```rust
/// use shared::utils::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (formatted.as_str(), ""),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal_part)
    }
}

/// Dollar amount with two decimals and thousands separators.
pub fn format_usd(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_number(-value, 2))
    } else {
        format!("${}", format_number(value, 2))
    }
}

/// Signed percentage change, e.g. `+5.2%`, `0.0%`, `-1.3%`.
pub fn format_percentage(pct: f64, decimals: usize) -> String {
    let rendered = format!("{:.prec$}", pct, prec = decimals);
    if pct > 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("+{}%", rendered)
    } else if rendered.starts_with('-') && !rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
        // -0.0 rounds to zero; drop the sign
        format!("{}%", &rendered[1..])
    } else {
        format!("{}%", rendered)
    }
}

/// Parse a JSON-RPC hex quantity (`"0x1bc16d674ec80000"`).
pub fn parse_hex_quantity(raw: &str) -> Result<u128> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .ok_or_else(|| AppError::InvalidResponse(format!("expected hex quantity, got {raw:?}")))?;

    if digits.is_empty() {
        return Err(AppError::InvalidResponse("empty hex quantity".to_string()));
    }

    u128::from_str_radix(digits, 16)
        .map_err(|e| AppError::InvalidResponse(format!("bad hex quantity {raw:?}: {e}")))
}

/// Convert a wei amount to ETH with `precision` decimals, rounding half up.
///
/// ```rust
/// use shared::utils::format_wei;
///
/// assert_eq!(format_wei(2_500_000_000_000_000_000, 4), "2.5000");
/// assert_eq!(format_wei(0, 4), "0.0000");
/// ```
pub fn format_wei(wei: u128, precision: u32) -> String {
    let precision = precision.min(NATIVE_DECIMALS);
    let scale = 10u128.pow(NATIVE_DECIMALS - precision);
    let rounded = if scale > 1 {
        wei / scale + u128::from(wei % scale >= scale / 2)
    } else {
        wei
    };

    if precision == 0 {
        return rounded.to_string();
    }

    let unit = 10u128.pow(precision);
    format!(
        "{}.{:0width$}",
        rounded / unit,
        rounded % unit,
        width = precision as usize
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 6, 4), "0x71C7...976F");
        assert_eq!(format_address(ADDR, 4, 4), "0x71...976F");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0x1234567890", 6, 4), "0x1234567890");
        assert_eq!(format_address("abc", 6, 4), "abc");
    }

    #[test]
    fn test_truncate_address_is_first6_last4() {
        let truncated = truncate_address(ADDR);
        assert_eq!(&truncated[..6], &ADDR[..6]);
        assert!(truncated.ends_with(&ADDR[ADDR.len() - 4..]));
        assert_eq!(truncated.len(), 6 + 3 + 4);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(999.999, 2), "1,000.00");
        assert_eq!(format_number(10000.0, 0), "10,000");
        assert_eq!(format_number(-1234.5, 1), "-1,234.5");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(21875.0), "$21,875.00");
        assert_eq!(format_usd(4250.0), "$4,250.00");
        assert_eq!(format_usd(-12.5), "-$12.50");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(5.2, 1), "+5.2%");
        assert_eq!(format_percentage(0.0, 1), "0.0%");
        assert_eq!(format_percentage(-1.25, 2), "-1.25%");
        assert_eq!(format_percentage(-0.01, 1), "0.0%");
    }

    #[test]
    fn test_parse_hex_quantity() {
        assert_eq!(parse_hex_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_hex_quantity("0x2105").unwrap(), 8453);
        assert_eq!(
            parse_hex_quantity("0x22b1c8c1227a0000").unwrap(),
            2_500_000_000_000_000_000
        );
        assert!(parse_hex_quantity("2105").is_err());
        assert!(parse_hex_quantity("0x").is_err());
        assert!(parse_hex_quantity("0xzz").is_err());
    }

    #[test]
    fn test_format_wei_rounds_half_up() {
        assert_eq!(format_wei(1_000_000_000_000_000_000, 4), "1.0000");
        assert_eq!(format_wei(123_456_789_000_000_000, 4), "0.1235");
        assert_eq!(format_wei(49_999_999_999_999, 4), "0.0000");
        assert_eq!(format_wei(50_000_000_000_000, 4), "0.0001");
        assert_eq!(format_wei(1, 18), "0.000000000000000001");
        assert_eq!(format_wei(1_600_000_000_000_000_000, 0), "2");
    }
}
