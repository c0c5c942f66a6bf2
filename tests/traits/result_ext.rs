use outcome_rail::traits::ResultExt;
use outcome_rail::Outcome;

#[test]
fn test_into_outcome_on_ok() {
    let outcome = "42".parse::<i32>().into_outcome();
    assert_eq!(outcome.into_success(), Some(42));
}

#[test]
fn test_into_outcome_on_err() {
    let outcome = "nope".parse::<i32>().into_outcome();
    assert!(outcome.is_failure());
}

#[test]
fn test_into_outcome_preserves_payloads() {
    let outcome: Outcome<i32, &str> = Err("failed").into_outcome();
    assert_eq!(outcome, Outcome::failure("failed"));
}

#[test]
fn test_into_outcome_chains_with_combinators() {
    let value = "21"
        .parse::<i32>()
        .into_outcome()
        .map_success(|v| v * 2)
        .success_or(0);
    assert_eq!(value, 42);
}
