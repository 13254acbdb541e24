//! Tests for curve evaluation
//!
//! These tests verify that:
//! - Curves have exactly `steps` points spanning the domain
//! - Normal peaks at 1/sqrt(2π) and is symmetric about mu
//! - Poisson matches the PMF on integer grid points and is never negative
//! - Bernoulli interpolates between 1 - p and p

use std::f64::consts::PI;

use crate::evaluate::{Density, evaluate};
use crate::model::{DistributionKind, ParameterValues};

const TOLERANCE: f64 = 1e-9;

fn values(pairs: &[(&str, f64)]) -> ParameterValues {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

#[test]
fn test_default_curves_cover_domain() {
    for kind in DistributionKind::ALL {
        let domain = kind.spec().domain;
        let curve = evaluate(kind, &ParameterValues::new()).unwrap();

        assert_eq!(curve.len(), domain.steps, "{kind}");

        let xs: Vec<f64> = curve.xs().collect();
        assert!(xs.windows(2).all(|w| w[0] <= w[1]), "{kind}: x not monotone");
        assert_eq!(xs[0], domain.low, "{kind}");
        assert_eq!(xs[xs.len() - 1], domain.high, "{kind}");
    }
}

#[test]
fn test_default_curves_are_finite() {
    for kind in DistributionKind::ALL {
        let curve = evaluate(kind, &ParameterValues::new()).unwrap();
        assert!(curve.ys().all(f64::is_finite), "{kind}");
    }
}

#[test]
fn test_normal_peak_value() {
    let density = Density::Normal {
        mu: 0.0,
        sigma: 1.0,
    };
    let expected = 1.0 / (2.0 * PI).sqrt();
    assert!((density.at(0.0) - expected).abs() < TOLERANCE);
    assert!((expected - 0.3989).abs() < 1e-4);
}

#[test]
fn test_normal_symmetric_about_mu() {
    let density = Density::Normal {
        mu: 1.5,
        sigma: 2.0,
    };
    for d in [0.1, 0.5, 1.0, 3.7, 8.0] {
        assert!((density.at(1.5 + d) - density.at(1.5 - d)).abs() < TOLERANCE);
    }
}

#[test]
fn test_normal_curve_symmetric_on_grid() {
    // The default grid is symmetric around mu = 0
    let curve = evaluate(DistributionKind::Normal, &ParameterValues::new()).unwrap();
    let ys: Vec<f64> = curve.ys().collect();
    let n = ys.len();
    for i in 0..n / 2 {
        assert!((ys[i] - ys[n - 1 - i]).abs() < TOLERANCE);
    }
}

#[test]
fn test_poisson_at_lambda() {
    let curve = evaluate(DistributionKind::Poisson, &values(&[("lambda", 5.0)])).unwrap();
    let y = curve.y_at(5.0, TOLERANCE).expect("grid point at x = 5");
    let expected = 5f64.powi(5) * (-5f64).exp() / 120.0;
    assert!((y - expected).abs() < TOLERANCE);
    assert!((y - 0.1755).abs() < 1e-4);
}

#[test]
fn test_poisson_grid_lands_on_integers() {
    let curve = evaluate(DistributionKind::Poisson, &ParameterValues::new()).unwrap();
    for (i, x) in curve.xs().enumerate() {
        assert!((x - i as f64).abs() < TOLERANCE);
    }
}

#[test]
fn test_poisson_non_negative() {
    for lambda in [1.0, 3.0, 5.0, 10.0] {
        let curve = evaluate(DistributionKind::Poisson, &values(&[("lambda", lambda)])).unwrap();
        assert!(curve.ys().all(|y| y >= 0.0), "lambda = {lambda}");
    }
}

#[test]
fn test_poisson_between_integers_is_continuous() {
    let density = Density::Poisson { lambda: 4.0 };
    let mid = density.at(3.5);
    let lo = density.at(3.0);
    let hi = density.at(4.0);
    assert!(mid > 0.0);
    assert!(mid > lo.min(hi) * 0.9 && mid < lo.max(hi) * 1.1);
}

#[test]
fn test_bernoulli_even_coin() {
    let curve = evaluate(DistributionKind::Bernoulli, &values(&[("p", 0.5)])).unwrap();
    assert_eq!(curve.points(), &[(0.0, 0.5), (1.0, 0.5)]);
}

#[test]
fn test_bernoulli_certain() {
    let curve = evaluate(DistributionKind::Bernoulli, &values(&[("p", 1.0)])).unwrap();
    assert_eq!(curve.points(), &[(0.0, 0.0), (1.0, 1.0)]);
}

#[test]
fn test_out_of_range_values_are_clamped() {
    let clamped = evaluate(DistributionKind::Bernoulli, &values(&[("p", 3.0)])).unwrap();
    let certain = evaluate(DistributionKind::Bernoulli, &values(&[("p", 1.0)])).unwrap();
    assert_eq!(clamped, certain);
}

#[test]
fn test_foreign_values_are_ignored() {
    let with_noise = values(&[("lambda", 5.0), ("sigma", 3.0)]);
    let clean = values(&[("lambda", 5.0)]);
    assert_eq!(
        evaluate(DistributionKind::Poisson, &with_noise).unwrap(),
        evaluate(DistributionKind::Poisson, &clean).unwrap()
    );
}
