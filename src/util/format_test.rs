use super::*;

#[test]
fn formats_afternoon_timestamp() {
    assert_eq!(format_date_time("2026-01-02T17:04:00Z"), "02 Jan 2026, 5:04 pm");
}

#[test]
fn formats_morning_timestamp_without_zero_padding_the_hour() {
    assert_eq!(format_date_time("2025-11-09T09:07:30Z"), "09 Nov 2025, 9:07 am");
}

#[test]
fn keeps_offset_timestamps_in_their_own_zone() {
    assert_eq!(format_date_time("2026-01-02T17:04:00+05:30"), "02 Jan 2026, 5:04 pm");
}

#[test]
fn falls_back_to_raw_input_when_unparseable() {
    assert_eq!(format_date_time("yesterday"), "yesterday");
    assert_eq!(format_date_time(""), "");
}
