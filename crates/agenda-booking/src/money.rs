//! pt-BR currency formatting and lenient price parsing.

/// Formats centavos as pt-BR currency: `"R$ 1.234,56"`.
#[must_use]
pub fn format_brl(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let reais = abs / 100;
    let centavos = abs % 100;

    let digits = reais.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("R$ {sign}{grouped},{centavos:02}")
}

/// Parses a price the way the page script does: number in reais, or a
/// string with a single comma decimal separator. Anything else is zero.
#[must_use]
pub fn parse_price_cents(value: &serde_json::Value) -> i64 {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.replacen(',', ".", 1).parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(reais) if reais.is_finite() => (reais * 100.0).round() as i64,
        _ => 0,
    }
}
