use outcome_rail::convert::*;
use outcome_rail::Outcome;

#[test]
fn test_result_to_outcome_ok() {
    let outcome = result_to_outcome::<i32, &str>(Ok(42));
    assert_eq!(outcome, Outcome::success(42));
}

#[test]
fn test_result_to_outcome_err() {
    let outcome = result_to_outcome::<i32, &str>(Err("failed"));
    assert_eq!(outcome, Outcome::failure("failed"));
}

#[test]
fn test_outcome_to_result_both_channels() {
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::success(42)), Ok(42));
    assert_eq!(
        outcome_to_result(Outcome::<i32, &str>::failure("e")),
        Err("e")
    );
}

#[test]
fn test_outcome_to_option_collapses_failure() {
    assert_eq!(outcome_to_option(Outcome::<i32, &str>::success(42)), Some(42));
    assert_eq!(outcome_to_option(Outcome::<i32, &str>::failure("e")), None);
}

#[test]
fn test_option_to_outcome_present_and_absent() {
    assert_eq!(
        option_to_outcome(Some(7), || "was absent"),
        Outcome::success(7)
    );
    assert_eq!(
        option_to_outcome(None::<i32>, || "was absent"),
        Outcome::failure("was absent")
    );
}

#[test]
fn test_swap_channels_transposes() {
    assert_eq!(
        swap_channels(Outcome::<i32, &str>::success(42)),
        Outcome::failure(42)
    );
    assert_eq!(
        swap_channels(Outcome::<i32, &str>::failure("e")),
        Outcome::success("e")
    );
}

#[test]
fn test_swap_channels_is_an_involution() {
    let o = Outcome::<i32, &str>::failure("e");
    assert_eq!(swap_channels(swap_channels(o)), o);
}

#[test]
fn test_from_impls_round_trip() {
    let o: Outcome<i32, &str> = Ok(42).into();
    assert_eq!(o, Outcome::success(42));

    let r: Result<i32, &str> = Outcome::<i32, &str>::failure("e").into();
    assert_eq!(r, Err("e"));
}
