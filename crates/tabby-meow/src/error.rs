//! Errors for the meow collaborators.

use thiserror::Error;

/// Errors raised while creating or meowing cats.
#[derive(Debug, Error)]
pub enum MeowError {
    /// The cat's name is empty or whitespace only.
    #[error("cat name cannot be empty or whitespace")]
    EmptyName,

    /// The cat's name is longer than allowed.
    #[error("cat name is {len} characters long, at most {max} allowed")]
    NameTooLong {
        /// Length of the rejected name, in characters.
        len: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// A meow count of zero was requested.
    #[error("meow count must be positive, got {0}")]
    InvalidMeowCount(u32),

    /// More meows in a row than a cat can manage.
    #[error("a cat cannot meow {count} times in a row, at most {max}")]
    TooManyMeows {
        /// Requested count.
        count: u32,
        /// Maximum accepted count.
        max: u32,
    },

    /// The robot cat's model is empty or whitespace only.
    #[error("robot cat model cannot be empty")]
    EmptyModel,

    /// Writing the meow failed.
    #[error("failed to write meow: {0}")]
    Io(#[from] std::io::Error),
}
