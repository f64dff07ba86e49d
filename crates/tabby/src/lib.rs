//! # Tabby
//!
//! Two small domains side by side: exact fractions with memoized real values,
//! and cats that meow.
//!
//! ## Quick Start
//!
//! ```
//! use tabby::prelude::*;
//!
//! let f1 = Fraction::new(1, 3)?;
//! let f2 = Fraction::new(2, 3)?;
//! let f3 = Fraction::new(3, 4)?;
//! let result = (f1 + f2) / f3 - 5;
//! assert_eq!(result.to_string(), "-11/3");
//! # Ok::<(), FractionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tabby_fraction as fraction;
pub use tabby_meow as meow;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tabby_fraction::{CachedFraction, Fraction, FractionError, FractionOps};
    pub use tabby_meow::{make_all_meow, Cat, Kitty, MeowCounter, MeowError, Meowable, RobotCat};
}
