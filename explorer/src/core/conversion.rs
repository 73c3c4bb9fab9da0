//! # Conversion Engine
//!
//! Pure numeric conversion between USD and native token units.
//!
//! Two policies live here and nowhere else:
//!
//! - **Ceiling rule**: converting token -> USD always rounds *up* to the next
//!   cent, so a quoted USD amount is never too low to cover the actual cost.
//!   The USD -> token direction uses standard rounding.
//! - **Never throw**: every failure path (empty input, parse failure,
//!   non-positive price, non-finite arithmetic) degrades to an empty string
//!   or `None`. Callers treat empty as "no amount".

/// Absolute tolerance, in cents, for snapping float noise before the ceiling
/// is applied. Without it `0.00001 * 104000` scales to `104.00000000000001`
/// cents and would be quoted as `1.05` instead of `1.04`.
const CENT_NOISE: f64 = 1e-9;

/// Convert a native token amount to a USD string, rounded up to the cent.
///
/// Returns the empty string when the input is empty, unparsable, or the
/// result is not finite. The output always carries exactly two decimals.
pub fn usd_from_token(amount: &str, unit_price: f64) -> String {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let token_amount: f64 = match trimmed.parse() {
        Ok(value) => value,
        Err(_) => return String::new(),
    };

    let scaled = token_amount * unit_price * 100.0;
    if !scaled.is_finite() {
        tracing::debug!(amount = %trimmed, unit_price, "non-finite USD conversion result");
        return String::new();
    }

    let cents = if (scaled - scaled.round()).abs() < CENT_NOISE {
        scaled.round()
    } else {
        scaled.ceil()
    };

    format!("{:.2}", cents / 100.0)
}

/// Convert a USD amount to a native token string with `decimals` places.
///
/// Returns the empty string when the price is non-positive, the input is
/// empty or unparsable, or the result is not finite. Standard rounding; only
/// the USD-producing direction ceilings.
pub fn token_from_usd(usd: &str, unit_price: f64, decimals: u8) -> String {
    let trimmed = usd.trim();
    if trimmed.is_empty() || !unit_price.is_finite() || unit_price <= 0.0 {
        return String::new();
    }
    let usd_amount: f64 = match trimmed.parse() {
        Ok(value) => value,
        Err(_) => return String::new(),
    };

    let native = usd_amount / unit_price;
    if !native.is_finite() {
        tracing::debug!(usd = %trimmed, unit_price, "non-finite token conversion result");
        return String::new();
    }

    format!("{:.*}", decimals as usize, native)
}

/// Whether a proposed value carries more fractional digits than allowed.
///
/// Used to reject keystrokes before they land: 2 decimals in USD mode, the
/// token's own precision in native mode.
pub fn exceeds_decimals(value: &str, max_decimals: u32) -> bool {
    match value.split_once('.') {
        Some((_, fraction)) => fraction.len() as u32 > max_decimals,
        None => false,
    }
}

/// Exchange rate `price_a / price_b` formatted to six decimals.
///
/// Returns `None` instead of `Infinity`/`NaN` when the divisor is zero,
/// negative, or either price is not finite.
pub fn format_rate(price_a: f64, price_b: f64) -> Option<String> {
    if !price_a.is_finite() || !price_b.is_finite() || price_b <= 0.0 {
        return None;
    }
    let rate = price_a / price_b;
    if !rate.is_finite() {
        return None;
    }
    Some(format!("{:.6}", rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ========== usd_from_token ==========

    #[test]
    fn usd_conversion_rounds_up_to_next_cent() {
        assert_eq!(usd_from_token("1", 0.994), "1.00");
        assert_eq!(usd_from_token("1", 0.991), "1.00");
        assert_eq!(usd_from_token("3", 0.333), "1.00");
    }

    #[test]
    fn usd_conversion_snaps_float_noise_before_ceiling() {
        // 0.00001 * 104000 is 1.0400000000000002 in f64; the quote must still
        // be 1.04, not 1.05
        assert_eq!(usd_from_token("0.00001", 104_000.0), "1.04");
        assert_eq!(usd_from_token("10", 0.99), "9.90");
    }

    #[test]
    fn usd_conversion_handles_empty_and_malformed_input() {
        assert_eq!(usd_from_token("", 2700.0), "");
        assert_eq!(usd_from_token("   ", 2700.0), "");
        assert_eq!(usd_from_token("abc", 2700.0), "");
        assert_eq!(usd_from_token(".", 2700.0), "");
    }

    #[test]
    fn usd_conversion_handles_non_finite_results() {
        assert_eq!(usd_from_token("1", f64::INFINITY), "");
        assert_eq!(usd_from_token("1", f64::NAN), "");
    }

    // ========== token_from_usd ==========

    #[test]
    fn token_conversion_formats_to_token_decimals() {
        assert_eq!(token_from_usd("10", 2700.0, 8), "0.00370370");
        assert_eq!(token_from_usd("1", 0.99, 6), "1.010101");
        assert_eq!(token_from_usd("5", 1.0, 0), "5");
    }

    #[test]
    fn token_conversion_rejects_non_positive_price() {
        assert_eq!(token_from_usd("10", 0.0, 8), "");
        assert_eq!(token_from_usd("10", -1.0, 8), "");
        assert_eq!(token_from_usd("10", f64::NAN, 8), "");
    }

    #[test]
    fn token_conversion_handles_empty_and_malformed_input() {
        assert_eq!(token_from_usd("", 2700.0, 8), "");
        assert_eq!(token_from_usd("1.2.3", 2700.0, 8), "");
    }

    // ========== exceeds_decimals ==========

    #[test]
    fn decimal_clamp_boundaries() {
        assert!(exceeds_decimals("1.123", 2));
        assert!(!exceeds_decimals("1.12", 2));
        assert!(!exceeds_decimals("1.12345678", 8));
        assert!(exceeds_decimals("1.123456789", 8));
    }

    #[test]
    fn decimal_clamp_accepts_integers_and_trailing_dot() {
        assert!(!exceeds_decimals("123", 2));
        assert!(!exceeds_decimals("1.", 0));
        assert!(!exceeds_decimals("", 2));
        assert!(exceeds_decimals("1.5", 0));
    }

    // ========== format_rate ==========

    #[test]
    fn rate_formats_to_six_decimals() {
        assert_eq!(format_rate(0.99, 2700.0).as_deref(), Some("0.000367"));
        assert_eq!(format_rate(2700.0, 0.99).as_deref(), Some("2727.272727"));
    }

    #[test]
    fn rate_guards_division_by_zero() {
        assert_eq!(format_rate(2700.0, 0.0), None);
        assert_eq!(format_rate(2700.0, -1.0), None);
        assert_eq!(format_rate(f64::NAN, 1.0), None);
    }

    // ========== properties ==========

    proptest! {
        /// The ceiling rule never under-quotes: the USD amount always covers
        /// `amount * price` (up to float-noise slack).
        #[test]
        fn usd_quote_never_undercuts_exact_value(
            amount in 1e-6f64..1e6,
            price in 1e-3f64..1e6,
        ) {
            let quoted = usd_from_token(&amount.to_string(), price);
            prop_assume!(!quoted.is_empty());
            let quoted: f64 = quoted.parse().expect("quote should parse in test");
            let exact = amount * price;
            prop_assert!(quoted >= exact - exact * 1e-9 - 1e-9);
        }

        /// Converting native -> USD -> native drifts by at most the cent the
        /// ceiling may add, plus the rounding of the final format.
        #[test]
        fn round_trip_drift_is_bounded(
            amount in 1e-4f64..1e5,
            price in 1e-2f64..1e6,
            decimals in 0u8..=8,
        ) {
            let usd = usd_from_token(&amount.to_string(), price);
            prop_assume!(!usd.is_empty());
            let back = token_from_usd(&usd, price, decimals);
            prop_assume!(!back.is_empty());
            let back: f64 = back.parse().expect("round trip should parse in test");

            let ceiling_drift = 0.01 / price;
            let format_drift = 0.5 * 10f64.powi(-(decimals as i32));
            let slack = ceiling_drift + format_drift + amount * 1e-9 + 1e-9;
            prop_assert!((back - amount).abs() <= slack,
                "amount={amount} back={back} slack={slack}");
        }
    }
}
