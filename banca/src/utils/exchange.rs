use banca_data::models::{accounts::Account, pricing::ExchangeRates, Currency, Money};
use banca_data::Catalog;

/// Rate applied when converting out of `from`: the bank sells USD for PEN
/// at `sell` and buys USD for PEN at `buy`
pub fn rate_for(from: Currency, rates: &ExchangeRates) -> f64 {
    match from {
        Currency::Pen => rates.sell,
        Currency::Usd => rates.buy,
    }
}

/// Convert `amount` of `from` into the other currency, rounded to the cent
pub fn convert(amount: Money, from: Currency, rates: &ExchangeRates) -> Money {
    let rate = rate_for(from, rates);
    match from {
        Currency::Pen if rate > 0.0 => Money::from_f64(amount.as_f64() / rate),
        Currency::Pen => Money::ZERO,
        Currency::Usd => Money::from_f64(amount.as_f64() * rate),
    }
}

/// `percent` of a balance, rounded to the cent
pub fn share_of(balance: Money, percent: u8) -> Money {
    balance.scale(f64::from(percent.min(100)) / 100.0)
}

/// Deposit account debited when selling `from`
pub fn source_account(catalog: &Catalog, from: Currency) -> Option<&Account> {
    catalog.deposit_accounts().find(|a| a.currency == from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_to_usd_divides_by_sell() {
        let rates = ExchangeRates::default();
        let usd = convert(Money::from_units(100), Currency::Pen, &rates);
        assert_eq!(usd, Money::from_cents(2_667));
    }

    #[test]
    fn test_usd_to_pen_multiplies_by_buy() {
        let rates = ExchangeRates::default();
        let pen = convert(Money::from_cents(2_667), Currency::Usd, &rates);
        assert_eq!(pen, Money::from_cents(9_921));
    }

    #[test]
    fn test_round_trip_loses_the_spread() {
        let rates = ExchangeRates::default();
        for units in 2..=5_000 {
            let start = Money::from_units(units);
            let usd = convert(start, Currency::Pen, &rates);
            let back = convert(usd, Currency::Usd, &rates);
            assert!(back < start, "{} PEN came back as {}", start, back);
        }
        for cents in 1..=50_000 {
            let start = Money::from_cents(cents);
            let pen = convert(start, Currency::Usd, &rates);
            let back = convert(pen, Currency::Pen, &rates);
            assert!(back <= start, "{} USD came back as {}", start, back);
        }
    }

    #[test]
    fn test_rate_for() {
        let rates = ExchangeRates::default();
        assert_eq!(rate_for(Currency::Pen, &rates), 3.75);
        assert_eq!(rate_for(Currency::Usd, &rates), 3.72);
    }

    #[test]
    fn test_source_account_matches_currency() {
        let catalog = Catalog::builtin();
        let pen = source_account(&catalog, Currency::Pen).map(|a| a.id.as_str());
        let usd = source_account(&catalog, Currency::Usd).map(|a| a.id.as_str());
        assert_eq!(pen, Some("1"));
        assert_eq!(usd, Some("2"));
    }

    #[test]
    fn test_share_of_balance() {
        let balance = Money::from_cents(1_245_000);
        assert_eq!(share_of(balance, 25), Money::from_cents(311_250));
        assert_eq!(share_of(balance, 50), Money::from_cents(622_500));
        assert_eq!(share_of(balance, 100), balance);
        assert_eq!(share_of(balance, 250), balance);
    }
}
