//! # tabby-meow
//!
//! Things that can meow.
//!
//! - [`Meowable`]: the capability itself
//! - [`Cat`] and [`RobotCat`]: the two concrete kinds, also available as the
//!   closed [`Kitty`] enum
//! - [`MeowCounter`]: a decorator counting how often something meowed
//! - [`make_all_meow`]: meows every item of a collection

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cat;
pub mod counter;
pub mod error;
pub mod robot;
pub mod service;

pub use cat::{Cat, Kitty};
pub use counter::MeowCounter;
pub use error::MeowError;
pub use robot::RobotCat;
pub use service::{make_all_meow, Meowable};
