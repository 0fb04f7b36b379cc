//! Display formatting shared by the list pages

use chrono::NaiveDate;
use rust_decimal::Decimal;

pub fn money(amount: Decimal) -> String {
    format!("$ {:.2}", amount.round_dp(2))
}

pub fn opt_money(amount: Option<Decimal>) -> String {
    amount.map(money).unwrap_or_else(|| "-".to_string())
}

pub fn date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn yes_no(flag: bool) -> String {
    if flag { "Sí" } else { "No" }.to_string()
}

pub fn text(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
