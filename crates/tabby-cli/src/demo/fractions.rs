use std::io::Write;
use tabby::prelude::*;
use tracing::info;

use crate::format::{self, operation};

pub fn run(out: &mut dyn Write) -> anyhow::Result<()> {
    format::section(out, 1, "creating fractions")?;
    let f1 = Fraction::new(1, 3)?;
    let f2 = Fraction::new(2, 3)?;
    let f3 = Fraction::new(3, 4)?;
    let f4 = Fraction::new(-2, 5)?;
    let f5 = Fraction::from_integer(4);
    for (name, f) in [("f1", &f1), ("f2", &f2), ("f3", &f3), ("f4", &f4), ("f5", &f5)] {
        writeln!(out, "{name} = {f}")?;
    }

    format::section(out, 2, "operations")?;
    writeln!(out, "f1.add(f2) = {}", operation(&f1, "+", &f2, &f1.add(&f2)?))?;
    writeln!(out, "f3.subtract(f1) = {}", operation(&f3, "-", &f1, &f3.subtract(&f1)?))?;
    writeln!(out, "f1.multiply(f2) = {}", operation(&f1, "*", &f2, &f1.multiply(&f2)?))?;
    writeln!(out, "f2.divide(f1) = {}", operation(&f2, "/", &f1, &f2.divide(&f1)?))?;
    writeln!(out)?;
    writeln!(out, "With integers:")?;
    writeln!(out, "f1.add_int(2) = {}", operation(&f1, "+", &2, &f1.add_int(2)?))?;
    writeln!(out, "f3.subtract_int(1) = {}", operation(&f3, "-", &1, &f3.subtract_int(1)?))?;
    writeln!(out, "f2.multiply_int(3) = {}", operation(&f2, "*", &3, &f2.multiply_int(3)?))?;
    writeln!(out, "f5.divide_int(2) = {}", operation(&f5, "/", &2, &f5.divide_int(2)?))?;

    format::section(out, 3, "operators")?;
    writeln!(out, "{f1} + {f2} = {}", &f1 + &f2)?;
    writeln!(out, "{f3} - {f1} = {}", &f3 - &f1)?;
    writeln!(out, "{f1} * {f2} = {}", &f1 * &f2)?;
    writeln!(out, "{f2} / {f1} = {}", &f2 / &f1)?;
    writeln!(out, "{f1} + 2 = {}", f1.clone() + 2)?;
    writeln!(out, "3 * {f2} = {}", 3 * f2.clone())?;
    writeln!(out, "{f4} * {f3} = {} (negative operand)", &f4 * &f3)?;

    format::section(out, 4, "chained expression")?;
    writeln!(out, "Fractions: f1={f1}, f2={f2}, f3={f3}")?;
    writeln!(out, "Computing f1.add(f2).divide(f3).subtract_int(5)")?;
    let step1 = f1.add(&f2)?;
    writeln!(out, "  Step 1: f1.add(f2) = {step1}")?;
    let step2 = step1.divide(&f3)?;
    writeln!(out, "  Step 2: {step1}.divide(f3) = {step2}")?;
    let result = step2.subtract_int(5)?;
    writeln!(out, "  Step 3: {step2}.subtract_int(5) = {result}")?;
    writeln!(out)?;
    writeln!(out, "In one line: ({f1} + {f2}) / {f3} - 5 = {}", (f1.clone() + &f2) / &f3 - 5)?;
    writeln!(out, "Real value: {:.4}", result.real_value())?;

    format::section(out, 5, "comparison")?;
    let f6 = Fraction::new(2, 4)?;
    let f7 = Fraction::new(1, 2)?;
    let f8 = Fraction::new(3, 4)?;
    writeln!(out, "f6 = {f6} (from 2/4)")?;
    writeln!(out, "f7 = {f7}")?;
    writeln!(out, "f8 = {f8}")?;
    writeln!(out)?;
    writeln!(out, "f6 == f7: {}", f6 == f7)?;
    writeln!(out, "f6 == f8: {}", f6 == f8)?;
    writeln!(out, "f6.compare(f8): {:?}", f6.compare(&f8))?;
    writeln!(out, "f8.compare(f6): {:?}", f8.compare(&f6))?;
    writeln!(out, "f6.compare(f7): {:?}", f6.compare(&f7))?;

    format::section(out, 6, "cloning")?;
    let original = Fraction::new(3, 5)?;
    let mut clone = original.clone();
    writeln!(out, "Original: {original}")?;
    writeln!(out, "Clone: {clone}")?;
    writeln!(out, "Original == clone: {}", original == clone)?;
    writeln!(out, "Same object: {}", std::ptr::eq(&original, &clone))?;
    clone.set_numerator(6)?;
    writeln!(out)?;
    writeln!(out, "After changing the clone:")?;
    writeln!(out, "Original: {original} (unchanged)")?;
    writeln!(out, "Clone: {clone} (changed)")?;

    format::section(out, 7, "through the FractionOps interface")?;
    let mut plain = Fraction::new(2, 3)?;
    drive(out, &mut plain)?;

    format::section(out, 8, "cached fraction")?;
    let mut cached = CachedFraction::from_parts(1, 3)?;
    writeln!(out, "Fraction: {cached}")?;
    writeln!(out, "First read (computed):")?;
    let v1 = cached.real_value();
    writeln!(out, "  Value: {v1:.6}")?;
    writeln!(out, "Second read (cache valid: {}):", cached.is_cache_valid())?;
    let v2 = cached.real_value();
    writeln!(out, "  Value: {v2:.6}")?;
    writeln!(out, "  Identical: {}", v1.to_bits() == v2.to_bits())?;
    writeln!(out)?;
    writeln!(out, "Changing the fraction:")?;
    cached.set_numerator(2)?;
    cached.set_denominator(5)?;
    writeln!(out, "New fraction: {cached} (cache valid: {})", cached.is_cache_valid())?;
    writeln!(out, "  Value: {:.6}", cached.real_value())?;

    format::section(out, 9, "error handling")?;
    report(out, "creating 1/0", Fraction::new(1, 0))?;
    report(out, "dividing f1 by 0", f1.divide_int(0))?;
    report(out, "dividing f1 by 0/5", Fraction::new(0, 5).and_then(|zero| f1.divide(&zero)))?;
    let mut settable = Fraction::new(1, 2)?;
    report(out, "setting denominator to 0", settable.set_denominator(0).map(|()| settable.clone()))?;
    let normalized = Fraction::new(3, -5)?;
    writeln!(out, "Negative denominator is moved to the numerator: {normalized}")?;

    info!("fraction walkthrough finished");
    Ok(())
}

fn drive(out: &mut dyn Write, ops: &mut dyn FractionOps) -> anyhow::Result<()> {
    writeln!(out, "Real value: {:.4}", ops.real_value())?;
    writeln!(out, "Setting numerator 5 and denominator 8")?;
    ops.set_numerator(5)?;
    ops.set_denominator(8)?;
    writeln!(out, "New real value: {:.4}", ops.real_value())?;
    Ok(())
}

fn report(out: &mut dyn Write, what: &str, result: Result<Fraction, FractionError>) -> anyhow::Result<()> {
    match result {
        Ok(f) => writeln!(out, "{what}: {f}")?,
        Err(err) => writeln!(out, "Error: {what}: {err}")?,
    }
    Ok(())
}
