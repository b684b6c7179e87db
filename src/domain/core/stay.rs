use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Money;

/// Prospective stay spanning check-in to check-out for one room.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stay {
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
}

impl Stay {
    pub fn new(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    pub fn check_in(&self) -> Option<NaiveDate> {
        self.check_in
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        self.check_out
    }

    /// Whole nights between the dates; zero when open-ended or inverted.
    pub fn nights(&self) -> u64 {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) if check_out > check_in => {
                (check_out - check_in).num_days() as u64
            }
            _ => 0,
        }
    }
}

/// Derived pricing shown in the booking summary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayQuote {
    nights: u64,
    total: Money,
}

impl StayQuote {
    /// Pure and total: a missing rate or an empty stay quotes to zero.
    pub fn compute(stay: &Stay, nightly_rate: Option<Money>) -> Self {
        let nights = stay.nights();
        let total = match nightly_rate {
            Some(rate) => rate * nights,
            None => Money::default(),
        };
        Self { nights, total }
    }

    pub fn nights(&self) -> u64 {
        self.nights
    }

    pub fn total(&self) -> Money {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::super::Currency;
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn rate(amount: u64) -> Option<Money> {
        Some(Money::new(amount, Currency::USD))
    }

    #[test]
    fn test_three_nights_at_one_hundred() {
        let stay = Stay::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 4)));
        let quote = StayQuote::compute(&stay, rate(100));
        assert_eq!(quote.nights(), 3);
        assert_eq!(quote.total(), Money::new(300, Currency::USD));
    }

    #[test]
    fn test_missing_check_in_quotes_zero() {
        let stay = Stay::new(None, Some(date(2024, 1, 4)));
        let quote = StayQuote::compute(&stay, rate(100));
        assert_eq!(quote.nights(), 0);
        assert_eq!(quote.total().amount(), 0);
    }

    #[test]
    fn test_check_out_before_check_in_quotes_zero() {
        let stay = Stay::new(Some(date(2024, 1, 4)), Some(date(2024, 1, 1)));
        let quote = StayQuote::compute(&stay, rate(100));
        assert_eq!(quote.nights(), 0);
        assert_eq!(quote.total().amount(), 0);
    }

    #[test]
    fn test_same_day_stay_quotes_zero() {
        let stay = Stay::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 1)));
        assert_eq!(StayQuote::compute(&stay, rate(100)).nights(), 0);
    }

    #[test]
    fn test_missing_rate_quotes_zero_total() {
        let stay = Stay::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 4)));
        let quote = StayQuote::compute(&stay, None);
        assert_eq!(quote.nights(), 3);
        assert_eq!(quote.total().amount(), 0);
    }
}
