//! Tip calculation

pub mod currency;

pub use currency::CurrencyFormat;

use serde::Serialize;

/// Tip percentage used when the caller does not supply one
pub const DEFAULT_TIP_PERCENT: f64 = 15.0;

/// Raw tip value: `tip_percent` of `amount`, ceiling'd when `round_up` is set.
///
/// Negative inputs are accepted and produce a negative tip.
pub fn compute_tip(amount: f64, tip_percent: f64, round_up: bool) -> f64 {
    let tip = tip_percent / 100.0 * amount;
    if round_up {
        tip.ceil()
    } else {
        tip
    }
}

/// Compute the tip and format it as currency
pub fn calculate_tip(
    amount: f64,
    tip_percent: f64,
    round_up: bool,
    currency: &CurrencyFormat,
) -> String {
    currency.format(compute_tip(amount, tip_percent, round_up))
}

/// Read a user-typed number. Anything that is not a finite decimal becomes 0.0.
pub fn parse_amount(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// A single tip calculation with the library defaults filled in
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TipRequest {
    pub amount: f64,
    pub tip_percent: f64,
    pub round_up: bool,
}

impl TipRequest {
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            tip_percent: DEFAULT_TIP_PERCENT,
            round_up: false,
        }
    }

    pub fn with_tip_percent(mut self, tip_percent: f64) -> Self {
        self.tip_percent = tip_percent;
        self
    }

    pub fn with_round_up(mut self, round_up: bool) -> Self {
        self.round_up = round_up;
        self
    }

    pub fn tip(&self) -> f64 {
        compute_tip(self.amount, self.tip_percent, self.round_up)
    }

    pub fn format(&self, currency: &CurrencyFormat) -> String {
        calculate_tip(self.amount, self.tip_percent, self.round_up, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn us(amount: f64, tip_percent: f64, round_up: bool) -> String {
        calculate_tip(amount, tip_percent, round_up, &CurrencyFormat::en_us())
    }

    #[test]
    fn test_fifteen_percent() {
        assert_eq!(us(100.0, 15.0, false), "$15.00");
    }

    #[test]
    fn test_round_up_on_whole_tip_is_noop() {
        assert_eq!(us(100.0, 15.0, true), "$15.00");
        assert_eq!(us(100.0, 18.0, true), "$18.00");
    }

    #[test]
    fn test_round_up_goes_to_next_unit() {
        assert_eq!(us(33.0, 10.0, true), "$4.00");
        assert_eq!(us(33.0, 10.0, false), "$3.30");
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(us(0.0, 20.0, false), "$0.00");
    }

    #[test]
    fn test_negative_inputs_are_not_rejected() {
        assert_eq!(us(-50.0, 10.0, false), "-$5.00");
        assert_eq!(us(50.0, -10.0, false), "-$5.00");
    }

    #[test]
    fn test_round_up_is_ceiling_for_negative_tips() {
        // -3.3 rounds toward positive infinity
        assert_eq!(compute_tip(-33.0, 10.0, true), -3.0);
        assert_eq!(us(-33.0, 10.0, true), "-$3.00");
    }

    #[test]
    fn test_round_up_never_decreases_tip() {
        let amounts = [0.0, 0.01, 1.0, 9.99, 33.0, 47.5, 123.45, 1000.0];
        let percents = [0.0, 5.0, 10.0, 12.5, 15.0, 18.0, 20.0, 33.3];
        for amount in amounts {
            for percent in percents {
                assert!(
                    compute_tip(amount, percent, true) >= compute_tip(amount, percent, false),
                    "amount={amount} percent={percent}"
                );
            }
        }
    }

    #[test]
    fn test_same_inputs_same_output() {
        assert_eq!(us(87.65, 17.5, true), us(87.65, 17.5, true));
        assert_eq!(us(87.65, 17.5, false), us(87.65, 17.5, false));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("42"), 42.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount("-3"), -3.0);
        assert_eq!(parse_amount("1e2"), 100.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("12,5"), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
    }

    #[test]
    fn test_parse_amount_rejects_non_finite() {
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("1e400"), 0.0);
    }

    #[test]
    fn test_request_defaults_to_fifteen_percent() {
        let request = TipRequest::new(100.0);
        assert_eq!(request.tip_percent, DEFAULT_TIP_PERCENT);
        assert!(!request.round_up);
        assert_eq!(request.format(&CurrencyFormat::en_us()), "$15.00");
    }

    #[test]
    fn test_request_builders() {
        let request = TipRequest::new(33.0)
            .with_tip_percent(10.0)
            .with_round_up(true);
        assert_eq!(request.tip(), 4.0);
        assert_eq!(request.format(&CurrencyFormat::for_locale("de-DE")), "4,00\u{a0}€");
    }
}
