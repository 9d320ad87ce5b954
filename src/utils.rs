use chrono::Local;

pub fn get_current_datetime() -> String {
    Local::now().format("%F %H:%M:%S").to_string()
}

pub fn format_hours(total_seconds: f64) -> String {
    format!("{:.2} hours", total_seconds / (60 * 60) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_have_two_decimals() {
        assert_eq!(format_hours(5400.0), "1.50 hours");
        assert_eq!(format_hours(0.0), "0.00 hours");
    }

    #[test]
    fn datetime_is_formatted() {
        let now = get_current_datetime();

        assert_eq!(now.len(), "2024-01-01 00:00:00".len());
    }
}
