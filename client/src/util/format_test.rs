use super::*;

#[test]
fn currency_groups_thousands() {
    assert_eq!(format_currency(Some(1_000_000.0)), "$1.000.000");
    assert_eq!(format_currency(Some(1_234.0)), "$1.234");
    assert_eq!(format_currency(Some(999.0)), "$999");
}

#[test]
fn currency_keeps_significant_decimals_only() {
    assert_eq!(format_currency(Some(1_000_000.5)), "$1.000.000,5");
    assert_eq!(format_currency(Some(12.05)), "$12,05");
    assert_eq!(format_currency(Some(12.25)), "$12,25");
    assert_eq!(format_currency(Some(100.00)), "$100");
}

#[test]
fn currency_rounds_to_two_decimals() {
    assert_eq!(format_currency(Some(1.999)), "$2");
    assert_eq!(format_currency(Some(1.234)), "$1,23");
}

#[test]
fn currency_zero_and_missing() {
    assert_eq!(format_currency(Some(0.0)), "$0");
    assert_eq!(format_currency(None), "N/A");
    assert_eq!(format_currency(Some(f64::NAN)), "N/A");
}

#[test]
fn currency_negative_values() {
    assert_eq!(format_currency(Some(-2500.0)), "-$2.500");
    assert_eq!(format_currency(Some(-0.001)), "$0");
}

#[test]
fn dates_render_day_month_year() {
    assert_eq!(format_date(Some("2024-03-05")), "05/03/2024");
    assert_eq!(format_date(Some("2024-03-05T15:30:00.000Z")), "05/03/2024");
    assert_eq!(format_date(Some("2024-03-05T15:30:00")), "05/03/2024");
}

#[test]
fn missing_or_unparseable_dates() {
    assert_eq!(format_date(None), "N/A");
    assert_eq!(format_date(Some("  ")), "N/A");
    assert_eq!(format_date(Some("ayer")), "ayer");
}

#[test]
fn today_is_iso_formatted() {
    let today = today_iso();
    assert!(parse_date(&today).is_some());
    assert_eq!(today.len(), 10);
}
