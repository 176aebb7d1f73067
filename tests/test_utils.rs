use assert_approx_eq::assert_approx_eq;
use price_pulse::error::ForecastError;
use price_pulse::utils::{holdout_train_size, mean, mean_absolute_error, population_std_dev};
use rstest::rstest;

#[test]
fn test_mean_absolute_error() {
    let forecast = vec![10.0, 12.0, 14.0];
    let actual = vec![11.0, 12.0, 12.0];

    let mae = mean_absolute_error(&forecast, &actual).unwrap();
    assert_approx_eq!(mae, 1.0);
}

#[test]
fn test_mean_absolute_error_rejects_length_mismatch() {
    let err = mean_absolute_error(&[1.0, 2.0], &[1.0]).unwrap_err();
    assert!(matches!(err, ForecastError::ValidationError(_)));

    let err = mean_absolute_error(&[], &[]).unwrap_err();
    assert!(matches!(err, ForecastError::ValidationError(_)));
}

#[test]
fn test_population_std_dev() {
    // Mean 5, population variance 4.
    let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_approx_eq!(population_std_dev(&values), 2.0);
}

#[test]
fn test_population_std_dev_empty_is_zero() {
    assert_eq!(population_std_dev(&[]), 0.0);
}

#[test]
fn test_mean() {
    assert_approx_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
    assert_eq!(mean(&[]), 0.0);
}

#[rstest]
#[case(6, 5)]
#[case(8, 6)]
#[case(9, 7)]
#[case(10, 8)]
#[case(100, 80)]
fn test_holdout_train_size(#[case] len: usize, #[case] expected: usize) {
    assert_eq!(holdout_train_size(len), expected);
}

#[test]
fn test_holdout_train_size_always_leaves_a_holdout_point() {
    for len in 2..200 {
        let train = holdout_train_size(len);
        assert!(train < len, "len {len} left no holdout");
    }
}
