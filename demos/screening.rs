use outcome_rail::catching::{attempt, attempt_result};
use outcome_rail::prelude::*;

fn parse_header(raw: &str) -> Outcome<(String, String), String> {
    raw.split_once(':')
        .success_or_else(|| format!("malformed header: {raw:?}"))
        .map_success(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .filter(
            |(name, _)| !name.is_empty(),
            |_| "header name is empty".to_string(),
        )
}

fn divide_exact(a: i32, b: i32) -> i32 {
    assert!(a % b == 0, "{a} is not divisible by {b}");
    a / b
}

fn main() {
    println!("Running screening examples...");

    // 1. Filter rejects, recover repairs
    println!("\n1. Filter and recover:");
    for raw in ["Content-Length: 42", ": 42", "no-colon"] {
        let header = parse_header(raw)
            .recover(|e| e.starts_with("malformed"), |e| ("X-Invalid".to_string(), e));
        println!("  {raw:?} -> {header:?}");
    }

    // 2. Capturing a panicking computation
    println!("\n2. Capturing a panicking computation:");
    let divided = attempt(|| divide_exact(10, 3));
    let _ = divided.on_either(
        |v| println!("  read {v}"),
        |p| println!("  captured: {p}"),
    );

    // 3. Errors and panics on one rail
    println!("\n3. Errors and panics on one rail:");
    let parsed = attempt_result(|| "not a number".parse::<i32>());
    println!("  {}", parsed.map_failure(|c| c.to_string()));
}
