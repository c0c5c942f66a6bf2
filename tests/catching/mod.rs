use outcome_rail::catching::{attempt, attempt_result, Caught};

#[test]
fn test_attempt_wraps_a_normal_return() {
    let o = attempt(|| 21 * 2);
    assert_eq!(o.into_success(), Some(42));
}

#[test]
fn test_attempt_captures_a_str_panic() {
    let o = attempt(|| -> i32 { panic!("boom") });
    let captured = o.into_failure().expect("panic must land on the failure channel");
    assert_eq!(captured.message(), Some("boom"));
}

#[test]
fn test_attempt_captures_a_formatted_panic() {
    let o = attempt(|| -> i32 { panic!("bad input: {}", 7) });
    let captured = o.into_failure().unwrap();
    assert_eq!(captured.message(), Some("bad input: 7"));
}

#[test]
fn test_attempt_exposes_the_raw_payload() {
    let o = attempt(|| -> i32 { std::panic::panic_any(1234usize) });
    let captured = o.into_failure().unwrap();
    assert_eq!(captured.message(), None);
    let payload = captured.into_inner();
    assert_eq!(payload.downcast_ref::<usize>(), Some(&1234));
}

#[test]
fn test_captured_panic_display_includes_the_message() {
    let captured = attempt(|| -> i32 { panic!("boom") }).into_failure().unwrap();
    assert_eq!(captured.to_string(), "panicked: boom");
}

#[test]
fn test_attempt_result_flattens_ok() {
    let o = attempt_result(|| "42".parse::<i32>());
    assert_eq!(o.into_success(), Some(42));
}

#[test]
fn test_attempt_result_flattens_err() {
    let o = attempt_result(|| "nope".parse::<i32>());
    let caught = o.into_failure().unwrap();
    assert!(!caught.is_panic());
    assert!(caught.into_error().is_some());
}

#[test]
fn test_attempt_result_captures_a_panic() {
    let o = attempt_result(|| -> Result<i32, &str> { panic!("boom") });
    let caught = o.into_failure().unwrap();
    assert!(caught.is_panic());
    assert!(caught.into_error().is_none());
}

#[test]
fn test_caught_display_covers_both_modes() {
    let errored = attempt_result(|| "nope".parse::<i32>()).into_failure().unwrap();
    assert_eq!(errored.to_string(), "invalid digit found in string");

    let panicked = attempt_result(|| -> Result<i32, &str> { panic!("boom") })
        .into_failure()
        .unwrap();
    assert_eq!(panicked.to_string(), "panicked: boom");
}

#[test]
fn test_captured_outcomes_compose_with_combinators() {
    let value = attempt(|| -> i32 { panic!("boom") })
        .map_failure(|p| p.message().unwrap_or("unknown").to_string())
        .recover(|m| m == "boom", |_| 0)
        .success_or(-1);
    assert_eq!(value, 0);
}

#[test]
fn test_caught_display_matches_caught_variants() {
    match attempt_result(|| "nope".parse::<i32>()).into_failure().unwrap() {
        Caught::Error(e) => assert_eq!(e.to_string(), "invalid digit found in string"),
        Caught::Panic(_) => panic!("a returned Err must not be reported as a panic"),
    }
}
