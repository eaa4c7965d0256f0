//! Number helpers shared by the simplifier and both printers: tolerant float
//! comparison and recovery of small rational numbers (so that `1.5` prints as
//! `3/2` and `0.333...` as `1/3`).
use num::rational::Rational64;
use num::{Signed, Zero};
use std::f64::consts::PI;

/// absolute tolerance used when comparing collected coefficients
pub const COEFF_TOLERANCE: f64 = 1e-12;
/// largest denominator a float is recognised as a "nice" fraction with
pub const MAX_DENOMINATOR: i64 = 1000;

pub fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= COEFF_TOLERANCE * scale
}

pub fn is_integer(value: f64) -> bool {
    value.is_finite() && approx_eq(value, value.round())
}

/// Best rational approximation with denominator <= MAX_DENOMINATOR, accepted only
/// if it reproduces the float to within 1e-9 (continued fraction expansion).
pub fn to_fraction(value: f64) -> Option<Rational64> {
    if !value.is_finite() || value.abs() > 1e12 {
        return None;
    }
    if is_integer(value) {
        return Some(Rational64::from_integer(value.round() as i64));
    }
    let negative = value < 0.0;
    let target = value.abs();
    // convergents h/k of the continued fraction of target
    let (mut h_prev, mut h) = (1i64, target.floor() as i64);
    let (mut k_prev, mut k) = (0i64, 1i64);
    let mut rest = target - target.floor();
    for _ in 0..32 {
        if (h as f64 / k as f64 - target).abs() < 1e-9 {
            break;
        }
        if rest.abs() < 1e-15 {
            break;
        }
        let inv = 1.0 / rest;
        let a = inv.floor() as i64;
        rest = inv - inv.floor();
        let h_next = a.checked_mul(h)?.checked_add(h_prev)?;
        let k_next = a.checked_mul(k)?.checked_add(k_prev)?;
        if k_next > MAX_DENOMINATOR {
            break;
        }
        h_prev = h;
        h = h_next;
        k_prev = k;
        k = k_next;
    }
    if (h as f64 / k as f64 - target).abs() >= 1e-9 {
        return None;
    }
    let ratio = Rational64::new(h, k);
    Some(if negative { -ratio } else { ratio })
}

fn format_decimal(value: f64) -> String {
    let text = format!("{:.6}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_string() } else { text.to_string() }
}

fn pi_multiple(value: f64) -> Option<Rational64> {
    if value.is_zero() {
        return None;
    }
    to_fraction(value / PI).filter(|r| *r.denom() <= 12 && r.numer().abs() <= 12)
}

/// Plain-text rendering of a numerical constant: `3`, `3/2`, `π`, `π/2`, `0.707107`.
pub fn format_number(value: f64) -> String {
    if let Some(ratio) = to_fraction(value) {
        return if ratio.is_integer() {
            ratio.numer().to_string()
        } else {
            format!("{}/{}", ratio.numer(), ratio.denom())
        };
    }
    if let Some(ratio) = pi_multiple(value) {
        let sign = if ratio.is_negative() { "-" } else { "" };
        let numer = ratio.numer().abs();
        let numer = if numer == 1 { String::new() } else { numer.to_string() };
        return if *ratio.denom() == 1 {
            format!("{}{}π", sign, numer)
        } else {
            format!("{}{}π/{}", sign, numer, ratio.denom())
        };
    }
    format_decimal(value)
}

/// LaTeX rendering of a numerical constant: `3`, `\frac{3}{2}`, `\pi`, `0.707107`.
pub fn format_number_latex(value: f64) -> String {
    if let Some(ratio) = to_fraction(value) {
        if ratio.is_integer() {
            return ratio.numer().to_string();
        }
        let sign = if ratio.is_negative() { "-" } else { "" };
        return format!("{}\\frac{{{}}}{{{}}}", sign, ratio.numer().abs(), ratio.denom());
    }
    if let Some(ratio) = pi_multiple(value) {
        let sign = if ratio.is_negative() { "-" } else { "" };
        let numer = ratio.numer().abs();
        let numer = if numer == 1 { String::new() } else { numer.to_string() };
        return if *ratio.denom() == 1 {
            format!("{}{}\\pi", sign, numer)
        } else {
            format!("{}\\frac{{{}\\pi}}{{{}}}", sign, numer, ratio.denom())
        };
    }
    format_decimal(value)
}

/// `num_values` evenly spaced points from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    if num_values < 2 {
        return vec![start; num_values];
    }
    let step = (end - start) / (num_values as f64 - 1.0);
    (0..num_values).map(|i| start + i as f64 * step).collect()
}

/// central difference approximation of f' on every point of `x_values`
pub fn numerical_derivative<F>(f: F, x_values: &[f64], h: f64) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    x_values
        .iter()
        .map(|&x| (f(x + h) - f(x - h)) / (2.0 * h))
        .collect()
}

/// scaled euclidean distance between two samples of equal length
pub fn norm(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    if x.is_empty() {
        return 0.0;
    }
    (1.0 / x.len() as f64)
        * x.iter()
            .zip(y.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
}
