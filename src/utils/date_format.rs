use chrono::{DateTime, Utc};

/// Formatear un timestamp para mostrar en pantalla: "12/08/2022 às 14:00"
pub fn format_when(ts: &DateTime<Utc>) -> String {
    ts.format("%d/%m/%Y às %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_day_month_year_and_time() {
        let ts = Utc.with_ymd_and_hms(2022, 8, 12, 14, 0, 0).unwrap();
        assert_eq!(format_when(&ts), "12/08/2022 às 14:00");
    }

    #[test]
    fn pads_single_digit_fields() {
        let ts = Utc.with_ymd_and_hms(2023, 1, 5, 9, 7, 30).unwrap();
        assert_eq!(format_when(&ts), "05/01/2023 às 09:07");
    }
}
