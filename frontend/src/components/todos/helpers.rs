use chrono::NaiveDate;

/// Parses the value of the `<input type="date">`: empty means "no deadline".
pub fn parse_deadline_input(value: &str) -> Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("'{}' is not a valid date", value))
}

/// US style `M/D/YYYY`.
pub fn format_deadline(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
