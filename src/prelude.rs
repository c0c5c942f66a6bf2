//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`outcome!`], [`propagate!`]
//! - **Types**: [`Outcome`], with its `Success`/`Failure` variants in scope
//! - **Traits**: [`ResultExt`], [`OptionExt`]
//! - **Constructors** (with the `std` feature): [`attempt`], [`attempt_result`]
//!
//! # Examples
//!
//! ## 30-Second Quick Start
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn find_user(id: u64) -> Outcome<&'static str, String> {
//!     let users = [(1, "alice"), (2, "bob")];
//!     users
//!         .iter()
//!         .find(|(uid, _)| *uid == id)
//!         .map(|(_, name)| *name)
//!         .success_or_else(|| format!("no user with id {id}"))
//! }
//!
//! assert_eq!(find_user(1), Success("alice"));
//! assert!(find_user(9).is_failure());
//! ```
//!
//! ## Chaining Along the Rails
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! let o = "21".parse::<i32>()
//!     .into_outcome()
//!     .map_failure(|e| e.to_string())
//!     .map_success(|v| v * 2)
//!     .filter(|v| *v < 100, |v| format!("{v} out of range"));
//! assert_eq!(o.success_or(0), 42);
//! ```

// Macros
pub use crate::{outcome, propagate};

// Core type, with variants usable unqualified
pub use crate::outcome::core::Outcome;
pub use crate::outcome::core::Outcome::{Failure, Success};

// Traits
pub use crate::traits::{OptionExt, ResultExt};

// Panic-capturing constructors
#[cfg(feature = "std")]
pub use crate::catching::{attempt, attempt_result};
