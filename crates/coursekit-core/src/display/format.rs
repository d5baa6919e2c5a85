//! Formatting helpers for durations and prices.

/// Format a duration in minutes as a short human-readable string.
///
/// # Examples
///
/// ```rust
/// use coursekit_core::display::format_duration;
///
/// assert_eq!(format_duration(0), "0 min");
/// assert_eq!(format_duration(60), "1 h");
/// assert_eq!(format_duration(75), "1 h 15 min");
/// assert_eq!(format_duration(240), "4 h");
/// ```
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;
    if remaining > 0 {
        format!("{hours} h {remaining} min")
    } else {
        format!("{hours} h")
    }
}

/// Format a price in rubles, grouping thousands with a space.
///
/// Zero prices read as "Free". Fractional prices keep two decimals.
///
/// # Examples
///
/// ```rust
/// use coursekit_core::display::format_price;
///
/// assert_eq!(format_price(0.0), "Free");
/// assert_eq!(format_price(1500.0), "1 500 ₽");
/// assert_eq!(format_price(99.5), "99,50 ₽");
/// ```
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "Free".to_string();
    }

    let cents = (price.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let fraction = cents % 100;
    let sign = if price < 0.0 { "-" } else { "" };

    if fraction == 0 {
        format!("{sign}{whole} ₽")
    } else {
        format!("{sign}{whole},{fraction:02} ₽")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_boundaries() {
        assert_eq!(format_duration(59), "59 min");
        assert_eq!(format_duration(60), "1 h");
        assert_eq!(format_duration(61), "1 h 1 min");
        assert_eq!(format_duration(119), "1 h 59 min");
        assert_eq!(format_duration(120), "2 h");
        assert_eq!(format_duration(505), "8 h 25 min");
    }

    #[test]
    fn test_format_price_grouping() {
        assert_eq!(format_price(5.0), "5 ₽");
        assert_eq!(format_price(999.0), "999 ₽");
        assert_eq!(format_price(1000.0), "1 000 ₽");
        assert_eq!(format_price(1234567.0), "1 234 567 ₽");
        assert_eq!(format_price(12.05), "12,05 ₽");
    }
}
