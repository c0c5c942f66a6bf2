//! The success/failure container and its combinator algebra.
//!
//! This module provides the [`Outcome`] type, an immutable two-channel
//! container that carries either a success value or a failure value. Every
//! operation on it is a pure function from one outcome to another (or to a
//! plain value), so anticipated failures travel through return values rather
//! than thrown errors.
//!
//! # Key Components
//!
//! - [`Outcome`] - Core type holding exactly one of two typed payloads
//! - Mapping and flat-mapping combinators over either channel
//! - Iterator adapters exposing each channel as a 0-or-1-element sequence
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let o = Outcome::<i32, &str>::success(3)
//!     .map_success(|v| v * 2)
//!     .filter(|v| *v < 10, |_| "too big");
//! assert_eq!(o, Outcome::success(6));
//! ```
pub mod core;
pub mod iter;
pub mod map;
pub mod traits;

pub use self::core::*;
pub use self::iter::*;
// Note: map and traits modules extend Outcome with impl blocks which are
// automatically available when this module is compiled
