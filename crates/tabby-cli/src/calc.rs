use anyhow::Context;
use std::io::Write;
use tabby::prelude::*;
use tracing::debug;

use crate::commands::Operator;
use crate::format;

pub fn evaluate(lhs: &Fraction, op: Operator, rhs: &Fraction) -> Result<Fraction, FractionError> {
    match op {
        Operator::Add => lhs.add(rhs),
        Operator::Sub => lhs.subtract(rhs),
        Operator::Mul => lhs.multiply(rhs),
        Operator::Div => lhs.divide(rhs),
    }
}

pub fn run(out: &mut dyn Write, lhs: &str, op: Operator, rhs: &str) -> anyhow::Result<()> {
    let a: Fraction = lhs.parse().with_context(|| format!("invalid left operand {lhs:?}"))?;
    let b: Fraction = rhs.parse().with_context(|| format!("invalid right operand {rhs:?}"))?;
    debug!(%a, op = op.symbol(), %b, "evaluating");

    let result = evaluate(&a, op, &b).with_context(|| format!("cannot evaluate {a} {} {b}", op.symbol()))?;
    writeln!(
        out,
        "{} (= {:.6})",
        format::operation(&a, op.symbol(), &b, &result),
        result.real_value()
    )?;
    Ok(())
}
