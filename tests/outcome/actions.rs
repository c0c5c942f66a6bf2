use core::cell::Cell;
use outcome_rail::Outcome;

#[test]
fn test_on_success_runs_for_success() {
    let seen = Cell::new(None);
    let o = Outcome::<i32, &str>::success(42).on_success(|v| seen.set(Some(*v)));
    assert_eq!(seen.get(), Some(42));
    assert_eq!(o, Outcome::success(42));
}

#[test]
fn test_on_success_skipped_for_failure() {
    let ran = Cell::new(false);
    let o = Outcome::<i32, &str>::failure("error").on_success(|_| ran.set(true));
    assert!(!ran.get(), "action must not run for a failed outcome");
    assert_eq!(o, Outcome::failure("error"));
}

#[test]
fn test_on_failure_runs_for_failure() {
    let seen = Cell::new(None);
    let o = Outcome::<i32, &str>::failure("error").on_failure(|f| seen.set(Some(*f)));
    assert_eq!(seen.get(), Some("error"));
    assert_eq!(o, Outcome::failure("error"));
}

#[test]
fn test_on_failure_skipped_for_success() {
    let ran = Cell::new(false);
    let o = Outcome::<i32, &str>::success(42).on_failure(|_| ran.set(true));
    assert!(!ran.get(), "action must not run for a successful outcome");
    assert_eq!(o, Outcome::success(42));
}

#[test]
fn test_on_either_runs_exactly_the_success_action() {
    let success_runs = Cell::new(0);
    let failure_runs = Cell::new(0);
    let o = Outcome::<i32, &str>::success(42).on_either(
        |_| success_runs.set(success_runs.get() + 1),
        |_| failure_runs.set(failure_runs.get() + 1),
    );
    assert_eq!(success_runs.get(), 1);
    assert_eq!(failure_runs.get(), 0);
    assert_eq!(o, Outcome::success(42));
}

#[test]
fn test_on_either_runs_exactly_the_failure_action() {
    let success_runs = Cell::new(0);
    let failure_runs = Cell::new(0);
    let o = Outcome::<i32, &str>::failure("error").on_either(
        |_| success_runs.set(success_runs.get() + 1),
        |_| failure_runs.set(failure_runs.get() + 1),
    );
    assert_eq!(success_runs.get(), 0);
    assert_eq!(failure_runs.get(), 1);
    assert_eq!(o, Outcome::failure("error"));
}

#[test]
fn test_actions_chain() {
    let log = Cell::new(0);
    let o = Outcome::<i32, &str>::success(42)
        .on_success(|_| log.set(log.get() + 1))
        .on_failure(|_| log.set(log.get() + 100))
        .on_success(|_| log.set(log.get() + 10));
    assert_eq!(log.get(), 11);
    assert!(o.is_success());
}
