use banca_data::models::{pricing::LoanOffer, Money};

/// Monthly rate equivalent to an effective annual rate (TEA)
pub fn monthly_rate(annual_rate: f64) -> f64 {
    (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0
}

/// Fixed installment of a French amortization schedule
pub fn installment(principal: Money, annual_rate: f64, months: u32) -> Money {
    if months == 0 {
        return principal;
    }
    let n = f64::from(months);
    let r = monthly_rate(annual_rate);
    if r.abs() < f64::EPSILON {
        return Money::from_f64(principal.as_f64() / n);
    }
    Money::from_f64(principal.as_f64() * r / (1.0 - (1.0 + r).powf(-n)))
}

/// Total paid over the life of the loan
pub fn total_cost(principal: Money, annual_rate: f64, months: u32) -> Money {
    let payment = installment(principal, annual_rate, months);
    Money::from_cents(payment.cents() * i64::from(months.max(1)))
}

/// Move the amount slider one step, within the offer bounds
pub fn adjust_amount(amount: i64, up: bool, offer: &LoanOffer) -> i64 {
    let step = offer.amount_step.max(1);
    let next = if up { amount + step } else { amount - step };
    next.clamp(offer.min_amount, offer.max_amount.max(offer.min_amount))
}

/// Move the term slider one month, within the offer bounds
pub fn adjust_months(months: u32, up: bool, offer: &LoanOffer) -> u32 {
    let next = if up {
        months.saturating_add(1)
    } else {
        months.saturating_sub(1)
    };
    next.clamp(offer.min_months, offer.max_months.max(offer.min_months))
}
