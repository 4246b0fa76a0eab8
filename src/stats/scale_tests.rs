use super::*;

#[test]
fn small_ratio_stays_linear() {
    assert_eq!(choose_scale([1.0, 2.0], LOG_RATIO_THRESHOLD), AxisScale::Linear);
}

#[test]
fn large_ratio_switches_to_log() {
    assert_eq!(choose_scale([1.0, 300.0], LOG_RATIO_THRESHOLD), AxisScale::Log);
}

#[test]
fn ratio_at_threshold_is_log() {
    assert_eq!(choose_scale([0.5, 100.0], LOG_RATIO_THRESHOLD), AxisScale::Log);
}

#[test]
fn zero_is_excluded_leaving_one_value() {
    assert_eq!(choose_scale([0.0, 5.0], LOG_RATIO_THRESHOLD), AxisScale::Linear);
}

#[test]
fn negative_and_non_finite_values_ignored() {
    let values = [-1000.0, f64::NAN, f64::INFINITY, 2.0, 3.0];
    assert_eq!(choose_scale(values, LOG_RATIO_THRESHOLD), AxisScale::Linear);
}

#[test]
fn empty_input_is_linear() {
    assert_eq!(
        choose_scale(std::iter::empty(), LOG_RATIO_THRESHOLD),
        AxisScale::Linear
    );
}

#[test]
fn custom_threshold() {
    assert_eq!(choose_scale([1.0, 20.0], 10.0), AxisScale::Log);
    assert!(!choose_scale([1.0, 20.0], 50.0).is_log());
}

#[test]
fn default_is_linear() {
    assert_eq!(AxisScale::default(), AxisScale::Linear);
}
