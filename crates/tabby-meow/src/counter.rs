//! A decorator that counts meows.

use std::fmt;
use std::io::Write;
use tracing::debug;

use crate::service::Meowable;
use crate::MeowError;

/// Wraps a [`Meowable`] and counts successful calls to [`Meowable::meow`].
#[derive(Clone, Debug)]
pub struct MeowCounter<M> {
    inner: M,
    meow_count: u32,
}

impl<M: Meowable> MeowCounter<M> {
    /// Starts counting meows of `inner` from zero.
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            meow_count: 0,
        }
    }

    /// Returns the decorated value.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Unwraps the decorated value.
    pub fn into_inner(self) -> M {
        self.inner
    }

    /// Returns how many times `meow` succeeded through this counter.
    pub fn meow_count(&self) -> u32 {
        self.meow_count
    }
}

impl<M: Meowable> Meowable for MeowCounter<M> {
    fn meow(&mut self, out: &mut dyn Write) -> Result<(), MeowError> {
        self.inner.meow(out)?;
        self.meow_count += 1;
        debug!(count = self.meow_count, "counted meow");
        Ok(())
    }
}

impl<M: fmt::Display> fmt::Display for MeowCounter<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "meow counter for {}", self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cat, RobotCat};
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_counts_calls() {
        let mut counter = MeowCounter::new(Cat::new("Murzik").unwrap());
        assert_eq!(counter.meow_count(), 0);

        let mut out: Vec<u8> = Vec::new();
        for _ in 0..3 {
            counter.meow(&mut out).unwrap();
        }
        assert_eq!(counter.meow_count(), 3);
        assert_eq!(counter.inner().meow_count(), 3);
        assert_eq!(counter.to_string(), "meow counter for cat: Murzik");
    }

    #[test]
    fn test_counters_stack() {
        let mut outer = MeowCounter::new(MeowCounter::new(RobotCat::new("RX-78").unwrap()));
        let mut out: Vec<u8> = Vec::new();
        outer.meow(&mut out).unwrap();
        outer.meow(&mut out).unwrap();
        assert_eq!(outer.meow_count(), 2);
        assert_eq!(outer.into_inner().meow_count(), 2);
    }

    #[test]
    fn test_failed_meow_not_counted() {
        let mut counter = MeowCounter::new(RobotCat::new("RX-78").unwrap());
        assert!(matches!(
            counter.meow(&mut BrokenPipe),
            Err(MeowError::Io(_))
        ));
        assert_eq!(counter.meow_count(), 0);
    }
}
