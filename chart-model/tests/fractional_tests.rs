use chart_model::decimal::{round, round_to};
use chart_model::{convert_elapsed_time, splits, ChartError, Fractional, FractionalPoint};

#[test]
fn rounding_is_half_up_on_ties() {
    assert_eq!(round(0.0005).to_f64(), 0.001);
    assert_eq!(round_to(1.005, 2).to_f64(), 1.01);
}

#[test]
fn rounding_defaults_to_three_decimal_places() {
    assert_eq!(round(2.0004999).to_f64(), 2.0);
    assert_eq!(round(2.00051).to_f64(), 2.001);
    assert_eq!(round(8.0).to_f64(), 8.0);
}

#[test]
fn decimal_comparisons_align_scales() {
    assert_eq!(round_to(1.5, 1), round_to(1.5, 3));
    assert!(round_to(0.002, 3) > round_to(0.001, 3));
    assert!(round_to(0.001, 3) < round_to(3.0, 1));
}

#[test]
fn elapsed_time_formats_minutes_seconds_millis() {
    assert_eq!(convert_elapsed_time(Some(75_034)).as_deref(), Some("1:15.034"));
    assert_eq!(convert_elapsed_time(Some(13_500)).as_deref(), Some("0:13.500"));
    assert_eq!(convert_elapsed_time(Some(0)).as_deref(), Some("0:00.000"));
    assert_eq!(convert_elapsed_time(Some(600_000)).as_deref(), Some("10:00.000"));
    assert_eq!(convert_elapsed_time(None), None);
}

#[test]
fn furlongs_follow_feet() {
    let mut quarter = Fractional::new(1, "1/4", "1/4", 1_320);
    assert_eq!(quarter.furlongs(), 2.0);
    quarter.set_feet(660);
    assert_eq!(quarter.furlongs(), 1.0);
    quarter.set_feet(1_100);
    assert_eq!(quarter.furlongs(), 1.67);
}

#[test]
fn fractional_with_millis_but_no_time_is_a_valid_state() {
    let quarter = Fractional::with_time(1, "1/4", "1/4", 1_320, None, Some(15_000));
    assert!(quarter.has_fractional_value());
    assert!(!quarter.has_time_and_millis());
}

#[test]
fn empty_time_strings_do_not_count_as_formatted() {
    let quarter =
        Fractional::with_time(1, "1/4", "1/4", 1_320, Some(String::new()), Some(15_000));
    assert!(quarter.has_fractional_value());
    assert!(!quarter.has_time_and_millis());
}

#[test]
fn requiring_times_reports_the_missing_point() {
    let quarter = Fractional::new(1, "1/4", "1/4", 1_320);
    let err = quarter
        .require_time_and_millis()
        .expect_err("no time was recorded");
    match err {
        ChartError::MissingFractionalTime(message) => assert!(message.contains("1/4")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn start_split_takes_destination_values() {
    let quarter = Fractional::with_time(1, "1/4", "1/4", 1_320, None, Some(15_000));
    let split = splits::calculate(None, Some(&quarter)).expect("destination present");
    assert_eq!(split.text, "Start to 1/4");
    assert_eq!(split.compact, "Start to 1/4");
    assert_eq!(split.feet(), 1_320);
    assert_eq!(split.millis, Some(15_000));
    // The formatted time is copied as-is, not recomputed from millis.
    assert_eq!(split.time, None);
    let derivation = split.derivation().expect("splits carry provenance");
    assert!(derivation.from().is_none());
    assert_eq!(derivation.to().point, 1);
}

#[test]
fn split_between_points_is_a_difference() {
    let quarter =
        Fractional::with_time(1, "1/4", "1/4", 1_320, Some("0:15.000".into()), Some(15_000));
    let half =
        Fractional::with_time(2, "1/2", "1/2", 2_640, Some("0:28.500".into()), Some(28_500));
    let split = splits::calculate(Some(&quarter), Some(&half)).expect("both endpoints present");
    assert_eq!(split.text, "1/4 to 1/2");
    assert_eq!(split.compact, "1/4 to 1/2");
    assert_eq!(split.feet(), 1_320);
    assert_eq!(split.furlongs(), 2.0);
    assert_eq!(split.millis, Some(13_500));
    assert_eq!(split.time.as_deref(), Some("0:13.500"));
    let derivation = split.derivation().expect("splits carry provenance");
    assert_eq!(derivation.from().expect("from endpoint").point, 1);
    assert_eq!(derivation.to().point, 2);
}

#[test]
fn split_without_both_times_stays_untimed() {
    let quarter = Fractional::new(1, "1/4", "1/4", 1_320);
    let half =
        Fractional::with_time(2, "1/2", "1/2", 2_640, Some("0:28.500".into()), Some(28_500));
    let split = splits::calculate(Some(&quarter), Some(&half)).expect("both endpoints present");
    assert_eq!(split.millis, None);
    assert_eq!(split.time, None);
}

#[test]
fn split_without_destination_is_a_caller_error() {
    let quarter = Fractional::new(1, "1/4", "1/4", 1_320);
    let err = splits::calculate(Some(&quarter), None).expect_err("destination is required");
    match err {
        ChartError::InvalidInput(message) => assert!(message.contains("split")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn out_of_order_endpoints_surface_negative_differences() {
    let half = Fractional::with_time(2, "1/2", "1/2", 2_640, None, Some(28_500));
    let quarter = Fractional::with_time(1, "1/4", "1/4", 1_320, None, Some(15_000));
    let split = splits::calculate(Some(&half), Some(&quarter)).expect("both endpoints present");
    assert_eq!(split.feet(), -1_320);
    assert_eq!(split.millis, Some(-13_500));
}

#[test]
fn serialized_fields_keep_the_chart_order() {
    let quarter =
        Fractional::with_time(1, "1/4", "1/4", 1_320, Some("0:22.500".into()), Some(22_500));
    let json = serde_json::to_string(&quarter).expect("serializes");
    assert_eq!(
        json,
        r#"{"point":1,"text":"1/4","compact":"1/4","feet":1320,"furlongs":2.0,"time":"0:22.500","millis":22500}"#
    );
}

#[test]
fn serialized_splits_carry_their_endpoints() {
    let quarter = Fractional::with_time(1, "1/4", "1/4", 1_320, None, Some(15_000));
    let split = splits::calculate(None, Some(&quarter)).expect("destination present");
    let json = serde_json::to_string(&split).expect("serializes");
    assert!(json.contains(r#""from":null"#));
    assert!(json.contains(r#""to":{"point":1"#));
}

#[test]
fn fractional_distances_join_display_labels() {
    let point = FractionalPoint::with_fractionals(
        "6 Furlongs",
        3_960,
        vec![
            Fractional::new(1, "1/4", "1/4", 1_320),
            Fractional::new(2, "1/2", "1/2", 2_640),
            Fractional::new(3, "Fin", "Fin", 3_960),
        ],
    );
    assert_eq!(point.fractional_distances(), "1/4,1/2,Fin");
    assert_eq!(FractionalPoint::new(3_960).fractional_distances(), "");
}
