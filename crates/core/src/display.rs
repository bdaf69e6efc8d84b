//! Display-only formatting. Nothing here is ever persisted.

/// Render a stored budget for display.
///
/// Text that already carries a `$` is shown as-is. Otherwise every
/// non-digit is stripped and the remaining integer is rendered as whole US
/// dollars (`"5000000"` -> `"$5,000,000"`). If no integer can be recovered
/// the raw text is returned unchanged.
pub fn format_budget(budget: &str) -> String {
    if budget.contains('$') {
        return budget.to_string();
    }

    let digits: String = budget.chars().filter(char::is_ascii_digit).collect();
    match digits.parse::<u128>() {
        Ok(amount) => format!("${}", group_thousands(amount)),
        Err(_) => budget.to_string(),
    }
}

fn group_thousands(amount: u128) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
