use super::*;

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

// =====================================================================
// lgamma
// =====================================================================

#[test]
fn lgamma_matches_factorial_table() {
    // ln Γ(n + 1) = ln n!
    for n in 0..=20u64 {
        approx_eq(lgamma(n as f64 + 1.0), factorial::<f64>(n).ln(), 1e-12);
    }
}

#[test]
fn lgamma_half() {
    // ln Γ(0.5) = ½ ln π
    approx_eq(lgamma(0.5_f64), 0.5 * core::f64::consts::PI.ln(), 1e-14);
}

#[test]
fn lgamma_reflection() {
    // ln|Γ(−0.5)| = ln 2√π
    let expected = (2.0 * core::f64::consts::PI.sqrt()).ln();
    approx_eq(lgamma(-0.5_f64), expected, 1e-13);
}

#[test]
fn lgamma_poles_and_nan() {
    assert!(lgamma(0.0_f64).is_infinite());
    assert!(lgamma(-3.0_f64).is_infinite());
    assert!(lgamma(f64::NAN).is_nan());
}

// =====================================================================
// factorial
// =====================================================================

#[test]
fn factorial_small() {
    assert_eq!(factorial::<f64>(0), 1.0);
    assert_eq!(factorial::<f64>(1), 1.0);
    assert_eq!(factorial::<f64>(5), 120.0);
    assert_eq!(factorial::<f64>(18), 6402373705728000.0);
}

#[test]
fn factorial_beyond_table() {
    // 21! = 51090942171709440000
    let f = factorial::<f64>(21);
    assert!((f / 51090942171709440000.0 - 1.0).abs() < 1e-13);
    // 21! = 21 · 20!
    assert!((factorial::<f64>(21) / factorial::<f64>(20) - 21.0).abs() < 1e-11);
}

#[test]
fn factorial_overflow() {
    assert!(factorial::<f64>(170).is_finite());
    assert!(factorial::<f64>(171).is_infinite());
    assert!(factorial::<f32>(34).is_finite());
    assert!(factorial::<f32>(35).is_infinite());
}

// =====================================================================
// ln_factorial
// =====================================================================

#[test]
fn ln_factorial_table() {
    for n in 0..=20u64 {
        approx_eq(ln_factorial::<f64>(n), factorial::<f64>(n).ln(), 1e-14);
    }
}

#[test]
fn ln_factorial_continuity_at_table_edge() {
    // ln 21! − ln 20! = ln 21, across the table / lgamma boundary
    let d = ln_factorial::<f64>(21) - ln_factorial::<f64>(20);
    approx_eq(d, 21.0_f64.ln(), 1e-13);
}

#[test]
fn ln_factorial_recurrence() {
    for n in [25u64, 50, 100, 1000] {
        let d = ln_factorial::<f64>(n) - ln_factorial::<f64>(n - 1);
        approx_eq(d, (n as f64).ln(), 1e-11);
    }
}

#[test]
fn ln_factorial_large_no_overflow() {
    // ln 170! ≈ 706.5730622457874
    approx_eq(ln_factorial::<f64>(170), 706.5730622457874, 1e-9);
    assert!(ln_factorial::<f64>(1_000_000).is_finite());
}

#[test]
fn ln_factorial_f32() {
    assert!((ln_factorial::<f32>(10) - 15.104413).abs() < 1e-4);
}

// =====================================================================
// binomial
// =====================================================================

#[test]
fn binomial_pascal_row() {
    let row = [1.0, 6.0, 15.0, 20.0, 15.0, 6.0, 1.0];
    for (k, &c) in row.iter().enumerate() {
        assert_eq!(binomial::<f64>(6, k as u64), c);
    }
}

#[test]
fn binomial_past_n_is_zero() {
    assert_eq!(binomial::<f64>(3, 4), 0.0);
    assert_eq!(binomial::<f64>(0, 1), 0.0);
    assert_eq!(binomial::<f64>(0, 0), 1.0);
}

#[test]
fn binomial_pascal_identity() {
    // C(n, k) = C(n−1, k−1) + C(n−1, k)
    for n in 1..30u64 {
        for k in 1..n {
            let lhs = binomial::<f64>(n, k);
            let rhs = binomial::<f64>(n - 1, k - 1) + binomial::<f64>(n - 1, k);
            assert_eq!(lhs, rhs, "n={n}, k={k}");
        }
    }
}

#[test]
fn ln_binomial_matches_binomial() {
    for &(n, k) in &[(10u64, 3u64), (40, 20), (60, 1), (100, 50)] {
        let direct = binomial::<f64>(n, k);
        approx_eq(ln_binomial::<f64>(n, k), direct.ln(), 1e-10);
    }
    assert_eq!(ln_binomial::<f64>(5, 6), f64::NEG_INFINITY);
}
