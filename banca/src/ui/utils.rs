use banca_data::models::{
    accounts::{Account, AccountType},
    transactions::Transaction,
    Currency, Money,
};
use chrono::{Datelike, Months, NaiveDate};

use super::view::Tone;

const MONTHS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// `S/ 12,450.00`
pub fn fmt_money(amount: Money, currency: Currency) -> String {
    if amount.is_negative() {
        format!("- {} {}", currency.symbol(), amount.abs())
    } else {
        format!("{} {}", currency.symbol(), amount)
    }
}

/// Keypad text shown with its currency, e.g. `S/ 5.5`
pub fn fmt_keypad(text: &str, currency: Currency) -> String {
    format!("{} {}", currency.symbol(), text)
}

/// Signed amount of a movement: `+ S/ 4,500.00` or `- S/ 18.50`
pub fn fmt_movement(transaction: &Transaction) -> String {
    let sign = if transaction.is_income() { "+" } else { "-" };
    format!("{} {}", sign, fmt_money(transaction.amount, transaction.currency))
}

pub fn movement_tone(transaction: &Transaction) -> Tone {
    if transaction.is_income() {
        Tone::Positive
    } else {
        Tone::Normal
    }
}

pub fn month_name(month: u32) -> &'static str {
    MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// `Mayo 2024` for the month `back` months before `today`
pub fn month_label(today: NaiveDate, back: u32) -> String {
    let date = today.checked_sub_months(Months::new(back)).unwrap_or(today);
    format!("{} {}", month_name(date.month()), date.year())
}

/// `Hoy`, `Ayer`, or `20 May` relative to `today`
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    match (today - date).num_days() {
        0 => "Hoy".to_string(),
        1 => "Ayer".to_string(),
        _ => {
            let short: String = month_name(date.month()).chars().take(3).collect();
            format!("{} {}", date.day(), short)
        }
    }
}

pub fn account_type_label(account_type: AccountType) -> &'static str {
    match account_type {
        AccountType::Savings => "Ahorros",
        AccountType::Checking => "Cuenta sueldo",
        AccountType::CreditCard => "Tarjeta de credito",
    }
}

/// Account name with its masked number, for choice lists
pub fn account_line(account: &Account) -> String {
    format!("{} {}", account.name, account.number)
}

/// Text progress bar, e.g. `[########----]`
pub fn progress_bar(percent: u16, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
