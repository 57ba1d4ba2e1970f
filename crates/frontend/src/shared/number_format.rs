//! Number formatting for the dashboard (en-IN conventions)
//!
//! Indian digit grouping: the last three digits form one group, every group
//! before that has two digits ("12,34,567").

/// Groups the digits of a non-negative integer string the en-IN way
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Formats an integer with en-IN grouping
///
/// # Examples
///
/// ```ignore
/// use frontend::shared::number_format::format_int;
/// assert_eq!(format_int(1234567), "12,34,567");
/// ```
pub fn format_int(value: i64) -> String {
    let grouped = group_indian(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Rupee amount without fraction digits, e.g. "₹12,34,568"
pub fn format_inr(value: f64) -> String {
    let rounded = value.round();
    let grouped = group_indian(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Amount with two decimals for table cells, e.g. "1,23,456.50"
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, group_indian(int_part), frac_part)
}

/// Quantity padded to two digits ("03")
pub fn format_quantity(quantity: i64) -> String {
    format!("{:02}", quantity)
}
