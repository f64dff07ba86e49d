//! Console walkthroughs of both domains.
//!
//! Errors from the library are part of the show: they are caught and printed
//! as `Error: ...` lines. Only failures to write the output abort a walkthrough.

pub mod cats;
pub mod fractions;
