use rust_decimal::Decimal;

/// Formats an amount as US dollars: two decimal places, comma-grouped
/// thousands, e.g. `$1,234.50`.
pub fn usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = match text.split_once('.') {
        Some(parts) => parts,
        None => (text.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{cents}")
}
