//! Форматирование чисел для карточек и таблиц

/// Group the integer part by thousands with a regular space and keep
/// `decimals` digits after the point.
///
/// ```
/// use contracts::shared::number_format::format_number;
/// assert_eq!(format_number(1234567.891, 2), "1 234 567.89");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn format_money(value: f64) -> String {
    format_number(value, 2)
}

pub fn format_integer(value: f64) -> String {
    format_number(value, 0)
}
