//! Normalization of values read from form controls and labels.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Apply `delta` to a displayed quantity, never going below 1.
///
/// Quantities are display-only; nothing here is persisted.
pub fn adjust_quantity(current: u32, delta: i32) -> u32 {
    let next = i64::from(current) + i64::from(delta);
    u32::try_from(next.max(1)).unwrap_or(u32::MAX)
}

/// Read a quantity from element text. Unreadable text counts as 1.
pub fn parse_quantity(text: &str) -> u32 {
    text.trim().parse::<u32>().map_or(1, |quantity| quantity.max(1))
}

/// Profile section id for a nav button label: `"Order History"` -> `"orderhistory"`.
pub fn section_id(label: &str) -> String {
    label.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect()
}

/// A form is valid only when every required value has non-blank text.
pub fn validate_required<'a, I>(values: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().all(|value| !value.trim().is_empty())
}
