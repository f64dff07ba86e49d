//! Robot cats.

use std::fmt;
use std::io::Write;

use crate::service::Meowable;
use crate::MeowError;

/// A robot cat identified by its model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobotCat {
    model: String,
}

impl RobotCat {
    /// Creates a robot cat.
    ///
    /// # Errors
    ///
    /// Returns [`MeowError::EmptyModel`] for a blank model.
    pub fn new(model: impl Into<String>) -> Result<Self, MeowError> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(MeowError::EmptyModel);
        }
        Ok(Self { model })
    }

    /// Returns the model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Meowable for RobotCat {
    fn meow(&mut self, out: &mut dyn Write) -> Result<(), MeowError> {
        writeln!(out, "{}: BEEP-MEOW!", self.model)?;
        Ok(())
    }
}

impl fmt::Display for RobotCat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "robot cat: {}", self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robot_meow() {
        let mut robot = RobotCat::new("AI-Cat").unwrap();
        let mut out: Vec<u8> = Vec::new();
        robot.meow(&mut out).unwrap();
        assert_eq!(out, b"AI-Cat: BEEP-MEOW!\n");
        assert_eq!(robot.model(), "AI-Cat");
    }

    #[test]
    fn test_empty_model() {
        assert!(matches!(RobotCat::new(" \t"), Err(MeowError::EmptyModel)));
    }
}
