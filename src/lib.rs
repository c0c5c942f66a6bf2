//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Success and Failure as Values
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32, &'static str> {
//!     if b == 0 {
//!         Outcome::failure("division by zero")
//!     } else {
//!         Outcome::success(a / b)
//!     }
//! }
//!
//! let doubled = divide(10, 2).map_success(|v| v * 2);
//! assert_eq!(doubled, Outcome::success(10));
//!
//! let failed = divide(10, 0).map_success(|v| v * 2);
//! assert_eq!(failed, Outcome::failure("division by zero"));
//! ```
//!
//! ## Screening and Recovery
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let screened = Outcome::<i32, &str>::success(5)
//!     .filter(|v| *v < 3, |_| "too big");
//! assert_eq!(screened, Outcome::failure("too big"));
//!
//! let recovered = Outcome::<i32, &str>::failure("B")
//!     .recover(|f| *f == "B", |_| 5);
//! assert_eq!(recovered, Outcome::success(5));
//! ```
//!
//! ## Adapting Foreign Shapes
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! // From a possibly-absent value
//! let o = Outcome::from_option(Some(7), || "was absent");
//! assert_eq!(o, Success(7));
//!
//! // From a plain Result, in method position
//! let o = "42".parse::<i32>().into_outcome();
//! assert!(o.is_success());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Conversion helpers between `Outcome`, `Result`, and `Option`
pub mod convert;
/// Macros for producing and chaining outcomes
pub mod macros;
/// The success/failure container and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for `Result` and `Option`
pub mod traits;

/// Panic-capturing companion constructors (requires `std` feature)
#[cfg(feature = "std")]
pub mod catching;

// Re-export common items that might be needed at root,
// but encourage using the prelude for application code.
pub use convert::*;
pub use outcome::*;
pub use traits::*;

#[cfg(feature = "std")]
pub use catching::{attempt, attempt_result, CapturedPanic, Caught};
