//! Black-Scholes Delta
//!
//! Provides:
//! - Standard normal CDF/PDF
//! - The d1 term (no dividend yield)
//! - Delta for European calls and puts
//!
//! At or past expiry the model has no well-defined Delta, so a fixed
//! convention is returned instead: 1.0 for a call with spot above strike,
//! 0.0 for a put with spot below strike, 0.5 for everything else. This is a
//! known approximation, not a limit of the formula.

use std::f64::consts::{PI, SQRT_2};
use statrs::function::erf::erfc;

use crate::core::{DerivError, DerivResult, OptionType};

/// Delta returned at or past expiry when no other rule applies
pub const EXPIRED_DEFAULT_DELTA: f64 = 0.5;

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Delta convention for contracts with no time left
pub fn expired_delta(spot: f64, strike: f64, option_type: OptionType) -> f64 {
    match option_type {
        OptionType::Call if spot > strike => 1.0,
        OptionType::Put if spot < strike => 0.0,
        _ => EXPIRED_DEFAULT_DELTA,
    }
}

/// Black-Scholes Delta
///
/// `time` is in years and may be zero or negative, in which case
/// [`expired_delta`] applies and `vol` is not inspected. Otherwise `vol`
/// must be finite and positive.
pub fn delta(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> DerivResult<f64> {
    if !spot.is_finite() || spot <= 0.0 {
        return Err(DerivError::invalid_input(format!(
            "spot must be a positive number, got {}",
            spot
        )));
    }
    if !strike.is_finite() || strike <= 0.0 {
        return Err(DerivError::invalid_input(format!(
            "strike must be a positive number, got {}",
            strike
        )));
    }
    if time.is_nan() || time == f64::INFINITY || !rate.is_finite() {
        return Err(DerivError::invalid_input("time and rate must be finite numbers"));
    }

    if time <= 0.0 {
        return Ok(expired_delta(spot, strike, option_type));
    }

    if !vol.is_finite() || vol <= 0.0 {
        return Err(DerivError::invalid_input(format!(
            "volatility must be a positive number, got {}",
            vol
        )));
    }

    let n_d1 = norm_cdf(d1(spot, strike, rate, vol, time));

    Ok(match option_type {
        OptionType::Call => n_d1,
        OptionType::Put => n_d1 - 1.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use statrs::distribution::{ContinuousCDF, Normal};

    const RATE: f64 = 0.05;

    #[test]
    fn test_norm_cdf() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_cdf(1.96), 0.975, epsilon = 1e-3);
        assert_abs_diff_eq!(norm_cdf(-1.96), 0.025, epsilon = 1e-3);
    }

    #[test]
    fn test_norm_cdf_matches_reference() {
        let reference = Normal::new(0.0, 1.0).unwrap();
        for i in -40..=40 {
            let x = i as f64 * 0.1;
            assert_abs_diff_eq!(norm_cdf(x), reference.cdf(x), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_norm_pdf_peak() {
        assert_relative_eq!(norm_pdf(0.0), 0.398_942_280_4, epsilon = 1e-9);
    }

    #[test]
    fn test_atm_call_delta_is_cdf_of_d1() {
        let reference = Normal::new(0.0, 1.0).unwrap();
        for &(vol, time) in &[(0.2, 1.0), (0.35, 0.25), (0.8, 2.0), (0.1, 30.0 / 365.0)] {
            let expected_d1 = (RATE + 0.5 * vol * vol) * time / (vol * f64::sqrt(time));
            let expected = reference.cdf(expected_d1);

            let got = delta(100.0, 100.0, RATE, vol, time, OptionType::Call).unwrap();
            assert_abs_diff_eq!(got, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_known_value() {
        // S=K=100, r=5%, vol=20%, T=1: d1 = 0.35, N(0.35) = 0.63683
        let call = delta(100.0, 100.0, RATE, 0.20, 1.0, OptionType::Call).unwrap();
        assert_abs_diff_eq!(call, 0.636_830_651, epsilon = 1e-6);
    }

    #[test]
    fn test_put_is_call_minus_one() {
        for &(spot, strike, vol, time) in &[
            (100.0, 100.0, 0.2, 1.0),
            (80.0, 120.0, 0.45, 0.1),
            (150.0, 95.0, 0.15, 3.0),
        ] {
            let call = delta(spot, strike, RATE, vol, time, OptionType::Call).unwrap();
            let put = delta(spot, strike, RATE, vol, time, OptionType::Put).unwrap();
            assert_abs_diff_eq!(call - put, 1.0, epsilon = 1e-12);
            assert!((0.0..=1.0).contains(&call));
            assert!((-1.0..=0.0).contains(&put));
        }
    }

    #[test]
    fn test_expired_policy_ignores_vol() {
        for &vol in &[0.0, -1.0, f64::NAN, 0.3] {
            for &time in &[0.0, -0.5] {
                assert_eq!(delta(110.0, 100.0, RATE, vol, time, OptionType::Call).unwrap(), 1.0);
                assert_eq!(delta(90.0, 100.0, RATE, vol, time, OptionType::Call).unwrap(), 0.5);
                assert_eq!(delta(100.0, 100.0, RATE, vol, time, OptionType::Call).unwrap(), 0.5);
                assert_eq!(delta(90.0, 100.0, RATE, vol, time, OptionType::Put).unwrap(), 0.0);
                assert_eq!(delta(110.0, 100.0, RATE, vol, time, OptionType::Put).unwrap(), 0.5);
                assert_eq!(delta(100.0, 100.0, RATE, vol, time, OptionType::Put).unwrap(), 0.5);
            }
        }
    }

    #[test]
    fn test_delta_monotone_in_spot() {
        // Put Delta rises from -1 toward 0, so its magnitude shrinks
        let mut last_call = f64::NEG_INFINITY;
        let mut last_put_size = f64::INFINITY;
        for i in 1..=60 {
            let spot = 40.0 + i as f64 * 2.0;
            let call = delta(spot, 100.0, RATE, 0.25, 0.5, OptionType::Call).unwrap();
            let put = delta(spot, 100.0, RATE, 0.25, 0.5, OptionType::Put).unwrap();
            assert!(call >= last_call);
            assert!(put.abs() <= last_put_size);
            last_call = call;
            last_put_size = put.abs();
        }
    }

    #[test]
    fn test_rejects_zero_vol_before_expiry() {
        let err = delta(100.0, 100.0, RATE, 0.0, 0.5, OptionType::Call).unwrap_err();
        assert!(matches!(err, DerivError::InvalidInput(_)));
        assert!(delta(100.0, 100.0, RATE, f64::NAN, 0.5, OptionType::Put).is_err());
    }

    #[test]
    fn test_rejects_non_positive_prices() {
        assert!(delta(0.0, 100.0, RATE, 0.2, 0.5, OptionType::Call).is_err());
        assert!(delta(100.0, -5.0, RATE, 0.2, 0.5, OptionType::Call).is_err());
        assert!(delta(f64::INFINITY, 100.0, RATE, 0.2, 0.5, OptionType::Call).is_err());
        assert!(delta(100.0, 100.0, RATE, 0.2, f64::NAN, OptionType::Call).is_err());
    }

    #[test]
    fn test_rejects_unbounded_time_and_rate() {
        assert!(matches!(
            delta(100.0, 100.0, RATE, 0.2, f64::INFINITY, OptionType::Call),
            Err(DerivError::InvalidInput(_))
        ));
        assert!(delta(100.0, 100.0, f64::INFINITY, 0.2, 0.5, OptionType::Put).is_err());
        // Negative infinity is just a long-expired contract
        assert_eq!(
            delta(110.0, 100.0, RATE, 0.2, f64::NEG_INFINITY, OptionType::Call).unwrap(),
            1.0
        );
    }
}
