//! The meow capability and the bulk helper.

use std::io::Write;

use crate::MeowError;

/// Something that can meow.
pub trait Meowable {
    /// Writes one meow to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`MeowError::Io`] if writing fails.
    fn meow(&mut self, out: &mut dyn Write) -> Result<(), MeowError>;
}

impl<M: Meowable + ?Sized> Meowable for Box<M> {
    fn meow(&mut self, out: &mut dyn Write) -> Result<(), MeowError> {
        (**self).meow(out)
    }
}

/// Makes every item meow once, in order.
///
/// Stops at the first error.
///
/// # Errors
///
/// Returns the first error raised by an item.
pub fn make_all_meow<'a, I, M>(meowables: I, out: &mut dyn Write) -> Result<(), MeowError>
where
    I: IntoIterator<Item = &'a mut M>,
    M: Meowable + ?Sized + 'a,
{
    for meowable in meowables {
        meowable.meow(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cat, Kitty, MeowCounter, RobotCat};

    #[test]
    fn test_make_all_meow_mixed() {
        let mut meowables: Vec<Box<dyn Meowable>> = vec![
            Box::new(Cat::new("Murzik").unwrap()),
            Box::new(Cat::new("Vaska").unwrap()),
            Box::new(RobotCat::new("RX-78").unwrap()),
            Box::new(Cat::new("Ryzhik").unwrap()),
        ];

        let mut out: Vec<u8> = Vec::new();
        make_all_meow(&mut meowables, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Murzik: meow!\nVaska: meow!\nRX-78: BEEP-MEOW!\nRyzhik: meow!\n"
        );
    }

    #[test]
    fn test_make_all_meow_counts_twice() {
        let mut counters = vec![
            MeowCounter::new(Kitty::from(Cat::new("Barsik").unwrap())),
            MeowCounter::new(Kitty::from(Cat::new("Murzik").unwrap())),
            MeowCounter::new(Kitty::from(RobotCat::new("AI-Cat").unwrap())),
        ];

        let mut out: Vec<u8> = Vec::new();
        make_all_meow(&mut counters, &mut out).unwrap();
        make_all_meow(&mut counters, &mut out).unwrap();

        assert!(counters.iter().all(|c| c.meow_count() == 2));
    }

    #[test]
    fn test_make_all_meow_empty() {
        let mut none: Vec<Cat> = Vec::new();
        let mut out: Vec<u8> = Vec::new();
        make_all_meow(&mut none, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
