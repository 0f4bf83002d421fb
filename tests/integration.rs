use chrono::{DateTime, Datelike, Timelike};
use julday::{
    calendar::day_of_year, clock, to_hms, to_julian, to_julian_hms, to_ymd, weekday, ClockConfig,
    DateComponent, DateFormat, EpochClock, FixedClock, JulianDate, ModifiedJulianDate, TimeError,
    UtcOffset, Weekday,
};

fn assert_ymd(jd: f64, year: i32, month: u32, day: f64) {
    let date = to_ymd(JulianDate::new(jd));
    assert_eq!((date.year, date.month), (year, month), "JD {jd}");
    assert!(
        (date.day - day).abs() < 1e-6,
        "JD {jd}: day {} != {day}",
        date.day
    );
}

fn assert_jd(year: i32, month: u32, day: f64, jd: f64) {
    let got = to_julian(year, month, day).unwrap().value();
    assert!((got - jd).abs() < 1e-6, "{year}-{month}-{day}: {got} != {jd}");
}

#[test]
fn reference_dates_to_civil() {
    assert_ymd(2_451_545.0, 2000, 1, 1.5);
    assert_ymd(2_451_179.5, 1999, 1, 1.0);
    assert_ymd(2_446_822.5, 1987, 1, 27.0);
    assert_ymd(2_446_966.0, 1987, 6, 19.5);
    assert_ymd(2_415_020.5, 1900, 1, 1.0);
    assert_ymd(2_305_447.5, 1600, 1, 1.0);
    assert_ymd(2_305_812.5, 1600, 12, 31.0);
    assert_ymd(2_026_871.8, 837, 4, 10.3);
    assert_ymd(1_676_496.5, -123, 12, 31.0);
    assert_ymd(1_676_497.5, -122, 1, 1.0);
    assert_ymd(1_356_001.0, -1000, 7, 12.5);
    assert_ymd(1_355_866.5, -1000, 2, 29.0);
    assert_ymd(1_355_671.4, -1001, 8, 17.9);
    assert_ymd(0.0, -4712, 1, 1.5);
}

#[test]
fn reference_dates_to_julian() {
    assert_jd(2000, 1, 1.5, 2_451_545.0);
    assert_jd(1999, 1, 1.0, 2_451_179.5);
    assert_jd(1987, 1, 27.0, 2_446_822.5);
    assert_jd(1987, 6, 19.5, 2_446_966.0);
    assert_jd(1900, 1, 1.0, 2_415_020.5);
    assert_jd(1600, 1, 1.0, 2_305_447.5);
    assert_jd(1600, 12, 31.0, 2_305_812.5);
    assert_jd(837, 4, 10.3, 2_026_871.8);
    assert_jd(-123, 12, 31.0, 1_676_496.5);
    assert_jd(-122, 1, 1.0, 1_676_497.5);
    assert_jd(-1000, 7, 12.5, 1_356_001.0);
    assert_jd(-1000, 2, 29.0, 1_355_866.5);
    assert_jd(-1001, 8, 17.9, 1_355_671.4);
    assert_jd(-4712, 1, 1.5, 0.0);
}

#[test]
fn one_decimal_day_matches_almanac_listing() {
    let date = to_ymd(JulianDate::new(2_026_871.8));
    assert_eq!(format!("{}-{:02}-{:.1}", date.year, date.month, date.day), "837-04-10.3");
}

#[test]
fn reform_boundary_is_contiguous() {
    let last_julian = to_julian(1582, 10, 4.0).unwrap();
    let first_gregorian = to_julian(1582, 10, 15.0).unwrap();
    assert_eq!((first_gregorian - last_julian).value(), 1.0);
    assert_eq!(first_gregorian.value(), 2_299_160.5);
}

#[test]
fn reform_gap_is_rejected() {
    for day in 5..=14 {
        let err = to_julian(1582, 10, f64::from(day)).unwrap_err();
        assert!(matches!(
            err,
            TimeError::InvalidDateComponent {
                component: DateComponent::Day,
                ..
            }
        ));
    }
}

#[test]
fn leap_day_boundaries() {
    // 1900 is not a Gregorian leap year; 2000 and 1500 (Julian) are.
    assert!(to_julian(1900, 2, 29.0).is_err());
    assert!(to_julian(2000, 2, 29.0).is_ok());
    assert!(to_julian(1500, 2, 29.0).is_ok());
    let march_first = to_julian(2000, 3, 1.0).unwrap();
    let leap_day = to_julian(2000, 2, 29.0).unwrap();
    assert_eq!((march_first - leap_day).value(), 1.0);
    assert_eq!(day_of_year(2000, 12, 31).unwrap(), 366);
    assert_eq!(day_of_year(1999, 12, 31).unwrap(), 365);
}

#[test]
fn invalid_components_report_which_field() {
    let component = |r: Result<JulianDate, TimeError>| match r {
        Err(TimeError::InvalidDateComponent { component, .. }) => component,
        other => panic!("expected InvalidDateComponent, got {other:?}"),
    };
    assert_eq!(component(to_julian(2024, 13, 1.0)), DateComponent::Month);
    assert_eq!(component(to_julian(2024, 0, 1.0)), DateComponent::Month);
    assert_eq!(component(to_julian(2024, 4, 31.0)), DateComponent::Day);
    assert_eq!(component(to_julian(2024, 4, 0.5)), DateComponent::Day);
    assert_eq!(component(to_julian_hms(2024, 4, 1, 24, 0, 0.0)), DateComponent::Hour);
    assert_eq!(component(to_julian_hms(2024, 4, 1, 0, 60, 0.0)), DateComponent::Minute);
    assert_eq!(component(to_julian_hms(2024, 4, 1, 0, 0, 60.0)), DateComponent::Second);
    assert_eq!(component(to_julian_hms(2024, 4, 1, 0, 0, -1.0)), DateComponent::Second);
}

#[test]
fn error_messages_name_the_field() {
    let err = to_julian(2024, 13, 1.0).unwrap_err();
    assert!(err.to_string().starts_with("invalid month 13"), "{err}");
}

#[test]
fn hms_of_reference_instants() {
    let t = to_hms(JulianDate::new(2_451_545.0));
    assert_eq!((t.hour, t.minute, t.second, t.millisecond), (12, 0, 0, 0));
    let t = to_hms(to_julian_hms(1987, 4, 10, 19, 21, 0.0).unwrap());
    assert_eq!((t.hour, t.minute, t.second), (19, 21, 0));
    let t = to_hms(to_julian_hms(1957, 10, 4, 19, 28, 34.25).unwrap());
    assert_eq!((t.hour, t.minute, t.second, t.millisecond), (19, 28, 34, 250));
}

#[test]
fn weekdays_of_reference_instants() {
    assert_eq!(weekday(JulianDate::new(2_434_923.5)), Weekday::Wednesday);
    assert_eq!(weekday(JulianDate::new(2_434_923.5)).index(), 3);
    assert_eq!(weekday(JulianDate::new(2_451_545.0)), Weekday::Saturday);
    assert_eq!(weekday(to_julian(1582, 10, 15.0).unwrap()), Weekday::Friday);
    assert_eq!(weekday(to_julian(1582, 10, 4.0).unwrap()), Weekday::Thursday);
}

#[test]
fn formatting_matches_chrono_for_modern_dates() {
    for secs in [0_i64, 86_399, 946_684_799, 1_234_567_890, 1_700_000_059] {
        let dt = DateTime::from_timestamp(secs, 0).unwrap();
        let jd = clock::from_epoch_seconds(secs as f64);
        assert_eq!(
            jd.format(DateFormat::YMDHM),
            dt.format("%Y-%m-%d %H:%M").to_string(),
            "{secs}"
        );
        assert_eq!(
            jd.format(DateFormat::MonDYHM),
            dt.format("%b %d %Y %H:%M").to_string(),
            "{secs}"
        );
        assert_eq!(
            jd.weekday().abbreviation(),
            dt.format("%a").to_string(),
            "{secs}"
        );
    }
}

#[test]
fn utc_roundtrip_j2000_is_stable() {
    let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
    let jd = JulianDate::from_utc(datetime);
    assert_eq!(jd, JulianDate::J2000);
    let back = jd.to_utc().expect("to_utc");
    let delta_ns = back.timestamp_nanos_opt().unwrap() - datetime.timestamp_nanos_opt().unwrap();
    assert!(delta_ns.abs() < 1_000);
}

#[test]
fn clock_agrees_with_chrono_breakdown() {
    let instant = DateTime::from_timestamp(1_234_567_890, 0).unwrap();
    let clock = EpochClock::new(FixedClock(instant), ClockConfig::default());
    let jd = clock.now_utc().unwrap();
    let (date, time) = jd.to_civil();
    assert_eq!(date.year, instant.year());
    assert_eq!(date.month, instant.month());
    assert_eq!(date.day_of_month(), instant.day());
    assert_eq!((time.hour, time.minute, time.second), (23, 31, 30));
    assert_eq!(time.hour, instant.hour());
    let seconds = clock.current_seconds().unwrap();
    assert!((clock.to_epoch_seconds(jd) - seconds).abs() < 1e-3);
}

#[test]
fn local_clock_crosses_midnight() {
    // 2009-02-13 23:31:30Z is already 2009-02-14 in UTC+02:00.
    let instant = DateTime::from_timestamp(1_234_567_890, 0).unwrap();
    let config = ClockConfig::new().with_utc_offset(UtcOffset::from_seconds(7_200).unwrap());
    let clock = EpochClock::new(FixedClock(instant), config);
    let local = clock.now_local().unwrap();
    assert_eq!(local.format(DateFormat::YMDHM), "2009-02-14 01:31");
    let utc = clock.now_utc().unwrap();
    assert!(((local - utc).value() - 2.0 / 24.0).abs() < 1e-9);
}

#[test]
fn mjd_scale_is_a_fixed_offset() {
    let mjd = ModifiedJulianDate::new(51_544.5);
    assert_eq!(mjd.to::<julday::JD>(), JulianDate::J2000);
    assert_eq!(JulianDate::J2000.to_mjd(), mjd);
}

#[test]
fn layout_names_parse_case_insensitively() {
    let layout: DateFormat = "mon_d_y_hm".parse().unwrap();
    assert_eq!(layout, DateFormat::MonDYHM);
    assert!(matches!(
        "HH:MM".parse::<DateFormat>(),
        Err(TimeError::UnsupportedFormat(_))
    ));
}

#[cfg(feature = "serde")]
#[test]
fn serde_roundtrip_of_config_and_values() {
    let config = ClockConfig::new()
        .with_utc_offset(UtcOffset::from_seconds(-18_000).unwrap())
        .with_convention(julday::EpochConvention::HalfDayShifted);
    let json = serde_json::to_string(&config).unwrap();
    let back: ClockConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    assert_eq!(
        serde_json::to_string(&DateFormat::YMDHM).unwrap(),
        "\"Y_M_D_HM\""
    );
    assert!(serde_json::from_str::<UtcOffset>("90000").is_err());
    assert_eq!(serde_json::to_string(&JulianDate::J2000).unwrap(), "2451545.0");
}
