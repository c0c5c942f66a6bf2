use outcome_rail::{outcome, propagate, Outcome};

#[test]
fn test_outcome_macro_wraps_ok() {
    let o = outcome!("42".parse::<i32>());
    assert_eq!(o, Outcome::success(42));
}

#[test]
fn test_outcome_macro_wraps_err() {
    let o = outcome!("nope".parse::<i32>());
    assert!(o.is_failure());
}

#[test]
fn test_outcome_macro_accepts_blocks() {
    let o = outcome!({
        let raw = "21";
        raw.parse::<i32>().map(|v| v * 2)
    });
    assert_eq!(o.into_success(), Some(42));
}

fn checked_div(a: i32, b: i32) -> Outcome<i32, &'static str> {
    if b == 0 {
        Outcome::failure("division by zero")
    } else {
        Outcome::success(a / b)
    }
}

fn sum_of_quotients(a: i32, b: i32, divisor: i32) -> Outcome<i32, &'static str> {
    let left = propagate!(checked_div(a, divisor));
    let right = propagate!(checked_div(b, divisor));
    Outcome::success(left + right)
}

#[test]
fn test_propagate_unwraps_success() {
    assert_eq!(sum_of_quotients(10, 20, 2), Outcome::success(15));
}

#[test]
fn test_propagate_short_circuits_on_failure() {
    assert_eq!(
        sum_of_quotients(10, 20, 0),
        Outcome::failure("division by zero")
    );
}

#[test]
fn test_propagate_widens_the_failure_type() {
    // the inner failure is &'static str; the enclosing function fails with String
    fn widened(divisor: i32) -> Outcome<i32, String> {
        let v = propagate!(checked_div(10, divisor));
        Outcome::success(v * 2)
    }

    assert_eq!(widened(2), Outcome::success(10));
    assert_eq!(
        widened(0),
        Outcome::failure("division by zero".to_string())
    );
}

#[test]
fn test_propagate_runs_later_steps_only_after_success() {
    fn pipeline(first: Outcome<i32, &'static str>, ran: &mut bool) -> Outcome<i32, &'static str> {
        let v = propagate!(first);
        *ran = true;
        Outcome::success(v)
    }

    let mut ran = false;
    let _ = pipeline(Outcome::failure("stop"), &mut ran);
    assert!(!ran, "statements after propagate! must not run on failure");
}
