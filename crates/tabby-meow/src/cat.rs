//! Cats, and the closed set of things that are cat-like.

use std::fmt;
use std::io::Write;
use tracing::debug;

use crate::service::Meowable;
use crate::{MeowError, RobotCat};

/// A named cat that keeps count of its own meows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cat {
    name: String,
    meow_count: u32,
}

impl Cat {
    /// Longest accepted name, in characters.
    pub const MAX_NAME_LEN: usize = 50;

    /// Most meows a cat will produce in one go.
    pub const MAX_MEOWS: u32 = 100;

    /// Creates a cat.
    ///
    /// # Errors
    ///
    /// Returns [`MeowError::EmptyName`] for a blank name and
    /// [`MeowError::NameTooLong`] for one over [`Cat::MAX_NAME_LEN`] characters.
    pub fn new(name: impl Into<String>) -> Result<Self, MeowError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MeowError::EmptyName);
        }
        let len = name.chars().count();
        if len > Self::MAX_NAME_LEN {
            return Err(MeowError::NameTooLong {
                len,
                max: Self::MAX_NAME_LEN,
            });
        }
        Ok(Self {
            name,
            meow_count: 0,
        })
    }

    /// Returns the cat's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns how many meows this cat has produced.
    #[must_use]
    pub fn meow_count(&self) -> u32 {
        self.meow_count
    }

    /// Meows `count` times on one line, e.g. `Barsik: meow-meow-meow!`.
    ///
    /// # Errors
    ///
    /// Returns [`MeowError::InvalidMeowCount`] for zero,
    /// [`MeowError::TooManyMeows`] above [`Cat::MAX_MEOWS`], and
    /// [`MeowError::Io`] if writing fails.
    pub fn meow_times(&mut self, count: u32, out: &mut dyn Write) -> Result<(), MeowError> {
        if count == 0 {
            return Err(MeowError::InvalidMeowCount(count));
        }
        if count > Self::MAX_MEOWS {
            return Err(MeowError::TooManyMeows {
                count,
                max: Self::MAX_MEOWS,
            });
        }

        let meows = vec!["meow"; count as usize].join("-");
        writeln!(out, "{}: {meows}!", self.name)?;

        self.meow_count += count;
        debug!(cat = %self.name, total = self.meow_count, "meowed");
        Ok(())
    }
}

impl Meowable for Cat {
    fn meow(&mut self, out: &mut dyn Write) -> Result<(), MeowError> {
        self.meow_times(1, out)
    }
}

impl fmt::Display for Cat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cat: {}", self.name)
    }
}

/// Every kind of cat there is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Kitty {
    /// A living cat.
    Cat(Cat),
    /// A robot cat.
    Robot(RobotCat),
}

impl Meowable for Kitty {
    fn meow(&mut self, out: &mut dyn Write) -> Result<(), MeowError> {
        match self {
            Kitty::Cat(cat) => cat.meow(out),
            Kitty::Robot(robot) => robot.meow(out),
        }
    }
}

impl From<Cat> for Kitty {
    fn from(cat: Cat) -> Self {
        Kitty::Cat(cat)
    }
}

impl From<RobotCat> for Kitty {
    fn from(robot: RobotCat) -> Self {
        Kitty::Robot(robot)
    }
}

impl fmt::Display for Kitty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kitty::Cat(cat) => fmt::Display::fmt(cat, f),
            Kitty::Robot(robot) => fmt::Display::fmt(robot, f),
        }
    }
}
