//! tests for compiled-function evaluation
use approx::assert_abs_diff_eq;
use raices::expr::compile;

fn eval(expr: &str, x: f64) -> f64 {
    compile(expr).unwrap().eval(x)
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(eval("1 + 2 * 3", 0.0), 7.0);
    assert_eq!(eval("(1 + 2) * 3", 0.0), 9.0);
    assert_eq!(eval("8 / 2 / 2", 0.0), 2.0);
    assert_eq!(eval("2 - 3 - 4", 0.0), -5.0);
}

#[test]
fn caret_is_power() {
    assert_eq!(eval("x^2 - 4", 3.0), 5.0);
    assert_eq!(eval("2^3^2", 0.0), 512.0);
    assert_eq!(eval("2^-1", 0.0), 0.5);
    assert_eq!(eval("-x^2", 3.0), -9.0);
}

#[test]
fn constants() {
    assert_abs_diff_eq!(eval("pi", 0.0), std::f64::consts::PI);
    assert_abs_diff_eq!(eval("e", 0.0), std::f64::consts::E);
    assert_abs_diff_eq!(eval("sin(pi)", 0.0), 0.0, epsilon = 1e-15);
}

#[test]
fn logarithms_use_their_conventional_bases() {
    assert_abs_diff_eq!(eval("log(e)", 0.0), 1.0, epsilon = 1e-15);
    assert_abs_diff_eq!(eval("log2(8)", 0.0), 3.0, epsilon = 1e-15);
    assert_abs_diff_eq!(eval("log10(1000)", 0.0), 3.0, epsilon = 1e-12);
}

#[test]
fn named_functions() {
    assert_eq!(eval("abs(x)", -2.5), 2.5);
    assert_eq!(eval("cbrt(x)", 27.0), 3.0);
    assert_eq!(eval("sqrt(x)", 16.0), 4.0);
    assert_eq!(eval("pow(x, 10)", 2.0), 1024.0);
    assert_abs_diff_eq!(eval("tanh(x)", 0.0), 0.0);
    assert_abs_diff_eq!(eval("exp(log(x))", 5.0), 5.0, epsilon = 1e-12);
}

#[test]
fn nested_calls_and_composition() {
    assert_abs_diff_eq!(
        eval("sin(cos(x)) + cos(sin(x))", 1.0),
        (1.0f64.cos()).sin() + (1.0f64.sin()).cos(),
        epsilon = 1e-15
    );
}

#[test]
fn domain_errors_are_sentinels_not_panics() {
    assert!(eval("sqrt(x)", -1.0).is_nan());
    assert!(eval("log(x)", -1.0).is_nan());
    assert!(eval("1 / x", 0.0).is_infinite());
    assert!(eval("log(x)", 0.0).is_infinite());
    assert!(eval("asin(x)", 2.0).is_nan());
}

#[test]
fn evaluation_is_pure_over_x() {
    let f = compile("x^3 - x - 2").unwrap();
    let first = f.eval(1.5);
    for _ in 0..10 {
        assert_eq!(f.eval(1.5), first);
    }
    assert_abs_diff_eq!(f.eval(1.5), -0.125, epsilon = 1e-15);
}
