use super::*;

fn approx_rel(a: f64, b: f64, tol: f64) {
    assert!(
        ((a - b) / b).abs() < tol,
        "approx_rel failed: {a} vs {b}, rel diff = {}, tol = {tol}",
        ((a - b) / b).abs()
    );
}

#[test]
fn factorial_table() {
    assert_eq!(factorial::<f64>(0), 1.0);
    assert_eq!(factorial::<f64>(1), 1.0);
    assert_eq!(factorial::<f64>(2), 2.0);
    assert_eq!(factorial::<f64>(3), 6.0);
    assert_eq!(factorial::<f64>(10), 3628800.0);
    assert_eq!(factorial::<f64>(18), 6402373705728000.0);
}

#[test]
fn factorial_beyond_table() {
    // 21! = 51090942171709440000
    approx_rel(factorial::<f64>(21), 51090942171709440000.0, 1e-15);
    // 25! = 15511210043330985984000000
    approx_rel(factorial::<f64>(25), 1.5511210043330986e25, 1e-14);
    // 170! is the largest finite f64 factorial
    assert!(factorial::<f64>(170).is_finite());
}

#[test]
fn factorial_overflow() {
    assert!(factorial::<f64>(171).is_infinite());
    assert!(factorial::<f32>(35).is_infinite());
    assert!(factorial::<f32>(34).is_finite());
}

#[test]
fn factorial_f32() {
    assert_eq!(factorial::<f32>(5), 120.0);
    assert!((factorial::<f32>(12) - 479001600.0).abs() < 64.0);
}
