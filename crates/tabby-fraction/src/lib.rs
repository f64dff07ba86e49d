//! # tabby-fraction
//!
//! Rational numbers kept in canonical form, for the tabby demos.
//!
//! This crate provides:
//! - [`Fraction`]: a numerator/denominator pair that is always reduced and
//!   carries its sign in the numerator
//! - [`CachedFraction`]: a decorator memoizing the real value of a wrapped
//!   fraction
//! - [`FractionOps`]: the capability both of them share
//!
//! ## Example
//!
//! ```
//! use tabby_fraction::Fraction;
//!
//! let a = Fraction::new(1, 3)?;
//! let b = Fraction::new(2, 3)?;
//! assert_eq!(a.add(&b)?, Fraction::from_integer(1));
//! assert_eq!((a + b).to_string(), "1/1");
//! # Ok::<(), tabby_fraction::FractionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod cached;
pub mod error;
pub mod fraction;
pub mod ops;

#[cfg(test)]
mod proptests;

pub use cached::CachedFraction;
pub use error::{FractionError, Result};
pub use fraction::Fraction;
pub use ops::FractionOps;
