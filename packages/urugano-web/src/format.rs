//! Price and email helpers shared by the site's scripts

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // something@something.something, no whitespace
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Rwandan Franc symbol under `en-RW` conventions
const CURRENCY_SYMBOL: &str = "RF";

/// Separates the symbol from the digits
const NO_BREAK_SPACE: char = '\u{a0}';

/// Format `amount` as Rwandan Francs the way `en-RW` displays them.
///
/// RWF has no minor unit, so amounts are rounded half away from zero to
/// whole francs and grouped by thousands: `1000.0` becomes `"RF\u{a0}1,000"`.
pub fn format_price(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{CURRENCY_SYMBOL}{NO_BREAK_SPACE}NaN");
    }

    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let digits = if amount.is_infinite() {
        "\u{221e}".to_string()
    } else {
        group_thousands(&format!("{:.0}", amount.abs().round()))
    };

    format!("{sign}{CURRENCY_SYMBOL}{NO_BREAK_SPACE}{digits}")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Loose email check: no whitespace, one `@`, and a dot in the domain part.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_francs() {
        assert_eq!(format_price(1000.0), "RF\u{a0}1,000");
        assert_eq!(format_price(0.0), "RF\u{a0}0");
        assert_eq!(format_price(999.0), "RF\u{a0}999");
        assert_eq!(format_price(1_250_000.0), "RF\u{a0}1,250,000");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_price(1499.5), "RF\u{a0}1,500");
        assert_eq!(format_price(1499.49), "RF\u{a0}1,499");
        assert_eq!(format_price(-2.5), "-RF\u{a0}3");
    }

    #[test]
    fn negative_and_non_finite() {
        assert_eq!(format_price(-45_000.0), "-RF\u{a0}45,000");
        assert_eq!(format_price(f64::INFINITY), "RF\u{a0}\u{221e}");
        assert_eq!(format_price(f64::NEG_INFINITY), "-RF\u{a0}\u{221e}");
        assert_eq!(format_price(f64::NAN), "RF\u{a0}NaN");
    }

    #[test]
    fn accepts_simple_addresses() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last+tag@mail.example.rw"));
        assert!(validate_email("a@b.c.d"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a b@c.co"));
        assert!(!validate_email("@b.co"));
        assert!(!validate_email("a@@b.co"));
        assert!(!validate_email("a@b."));
        assert!(!validate_email(""));
    }

    #[test]
    fn permissive_about_odd_characters() {
        assert!(validate_email("#!$@x.y"));
        assert!(validate_email("a@b..co"));
    }
}
