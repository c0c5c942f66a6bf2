//! Extension traits bridging core types onto the outcome rails.
//!
//! This module defines the adapters that let existing `Result`- and
//! `Option`-shaped code produce outcomes in method position:
//!
//! - [`ResultExt`]: converts a `Result` into an [`Outcome`](crate::Outcome)
//! - [`OptionExt`]: converts an `Option` into an [`Outcome`](crate::Outcome),
//!   supplying the failure value for the empty case
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{OptionExt, ResultExt};
//!
//! let parsed = "7".parse::<i32>().into_outcome();
//! assert!(parsed.is_success());
//!
//! let first = [1, 2, 3].first().copied().success_or("empty slice");
//! assert!(first.is_success());
//! ```

pub mod option_ext;
pub mod result_ext;

pub use option_ext::OptionExt;
pub use result_ext::ResultExt;
