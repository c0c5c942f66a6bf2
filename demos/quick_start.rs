use outcome_rail::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Account {
    id: u64,
    balance: i64,
}

fn find_account(id: u64) -> Outcome<Account, String> {
    let accounts = [
        Account { id: 1, balance: 250 },
        Account { id: 2, balance: -40 },
    ];
    accounts
        .iter()
        .find(|a| a.id == id)
        .copied()
        .success_or_else(|| format!("no account with id {id}"))
}

fn withdraw(account: Account, amount: i64) -> Outcome<Account, String> {
    let updated = Account {
        id: account.id,
        balance: account.balance - amount,
    };
    Outcome::success(updated).filter(
        |a| a.balance >= 0,
        |a| format!("account {} would be overdrawn by {}", a.id, -a.balance),
    )
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Constructing and inspecting
    println!("\n1. Constructing and inspecting:");
    let found = find_account(1);
    println!("  find_account(1) -> {found:?}");
    println!("  is_success: {}", found.is_success());

    // 2. Chaining along the rails
    println!("\n2. Chaining along the rails:");
    let receipt = find_account(1)
        .flat_map_success(|a| withdraw(a, 100))
        .map_success(|a| format!("new balance: {}", a.balance));
    let _ = receipt.on_either(
        |msg| println!("  ok: {msg}"),
        |err| println!("  rejected: {err}"),
    );

    // 3. Screening an unacceptable success
    println!("\n3. Screening an unacceptable success:");
    let overdrawn = find_account(1).flat_map_success(|a| withdraw(a, 400));
    println!("  {overdrawn:?}");

    // 4. Recovering a failure
    println!("\n4. Recovering a failure:");
    let recovered = find_account(9)
        .recover(|e| e.contains("no account"), |_| Account { id: 0, balance: 0 });
    println!("  {recovered:?}");
}
