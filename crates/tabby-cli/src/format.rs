//! Formatting helpers for the walkthroughs.

use std::fmt::Display;
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

pub fn banner(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "========== {} ==========", title.to_uppercase())?;
    writeln!(out)
}

pub fn section(out: &mut dyn Write, number: usize, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{number}. {}:", title.to_uppercase())?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

pub fn subsection(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {title} ---")
}

/// Renders `lhs op rhs = result`.
pub fn operation(lhs: &dyn Display, op: &str, rhs: &dyn Display, result: &dyn Display) -> String {
    format!("{lhs} {op} {rhs} = {result}")
}
