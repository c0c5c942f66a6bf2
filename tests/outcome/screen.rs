use core::cell::Cell;
use outcome_rail::Outcome;

#[test]
fn test_filter_rejects_unacceptable_success() {
    let o = Outcome::<i32, &str>::success(5).filter(|v| *v < 3, |_| "too big");
    assert_eq!(o, Outcome::failure("too big"));
}

#[test]
fn test_filter_keeps_acceptable_success() {
    let o = Outcome::<i32, &str>::success(2).filter(|v| *v < 3, |_| "too big");
    assert_eq!(o, Outcome::success(2));
}

#[test]
fn test_filter_mapper_sees_the_rejected_value() {
    let o = Outcome::<i32, String>::success(5).filter(|v| *v < 3, |v| format!("{v} too big"));
    assert_eq!(o, Outcome::failure("5 too big".to_string()));
}

#[test]
fn test_filter_is_a_noop_on_failure() {
    let predicate_ran = Cell::new(false);
    let mapper_ran = Cell::new(false);
    let o = Outcome::<i32, &str>::failure("error").filter(
        |_| {
            predicate_ran.set(true);
            true
        },
        |_| {
            mapper_ran.set(true);
            "other"
        },
    );
    assert_eq!(o, Outcome::failure("error"));
    assert!(!predicate_ran.get(), "predicate must not run on a failure");
    assert!(!mapper_ran.get(), "mapper must not run on a failure");
}

#[test]
fn test_recover_accepts_recoverable_failure() {
    let o = Outcome::<i32, &str>::failure("B").recover(|f| *f == "B", |_| 5);
    assert_eq!(o, Outcome::success(5));
}

#[test]
fn test_recover_keeps_unrecoverable_failure() {
    let o = Outcome::<i32, &str>::failure("A").recover(|f| *f == "B", |_| 5);
    assert_eq!(o, Outcome::failure("A"));
}

#[test]
fn test_recover_mapper_sees_the_failure_value() {
    let o = Outcome::<usize, &str>::failure("long enough").recover(|_| true, |f| f.len());
    assert_eq!(o, Outcome::success(11));
}

#[test]
fn test_recover_is_a_noop_on_success() {
    let predicate_ran = Cell::new(false);
    let mapper_ran = Cell::new(false);
    let o = Outcome::<i32, &str>::success(42).recover(
        |_| {
            predicate_ran.set(true);
            true
        },
        |_| {
            mapper_ran.set(true);
            0
        },
    );
    assert_eq!(o, Outcome::success(42));
    assert!(!predicate_ran.get(), "predicate must not run on a success");
    assert!(!mapper_ran.get(), "mapper must not run on a success");
}
