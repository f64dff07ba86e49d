use std::io::Write;
use tabby::prelude::*;

use crate::format;

pub fn run(out: &mut dyn Write) -> anyhow::Result<()> {
    let mut barsik = Cat::new("Barsik")?;
    writeln!(out, "Created: {barsik}")?;
    write!(out, "Meows once: ")?;
    barsik.meow(out)?;
    write!(out, "Meows three times: ")?;
    barsik.meow_times(3, out)?;

    format::subsection(out, "make_all_meow")?;
    let mut meowables: Vec<Box<dyn Meowable>> = vec![
        Box::new(Cat::new("Murzik")?),
        Box::new(Cat::new("Vaska")?),
        Box::new(RobotCat::new("RX-78")?),
        Box::new(Cat::new("Ryzhik")?),
    ];
    writeln!(out, "Everybody meows:")?;
    make_all_meow(&mut meowables, out)?;

    format::subsection(out, "Counting meows")?;
    let mut counter = MeowCounter::new(Cat::new("Murzik")?);
    writeln!(out, "Before: count = {}", counter.meow_count())?;
    for _ in 0..3 {
        counter.meow(out)?;
    }
    writeln!(out, "After: count = {}", counter.meow_count())?;

    format::subsection(out, "Counting meows in make_all_meow")?;
    let mut counters = vec![
        MeowCounter::new(Kitty::from(Cat::new("Barsik")?)),
        MeowCounter::new(Kitty::from(Cat::new("Murzik")?)),
        MeowCounter::new(Kitty::from(RobotCat::new("AI-Cat")?)),
    ];
    writeln!(out, "Before:")?;
    report_counts(out, &counters)?;
    writeln!(out)?;
    writeln!(out, "Calling make_all_meow twice:")?;
    make_all_meow(&mut counters, out)?;
    make_all_meow(&mut counters, out)?;
    writeln!(out)?;
    writeln!(out, "After:")?;
    report_counts(out, &counters)?;

    format::subsection(out, "Error handling")?;
    if let Err(err) = Cat::new("") {
        writeln!(out, "Error: creating a cat: {err}")?;
    }
    let mut barsik2 = Cat::new("Barsik")?;
    if let Err(err) = barsik2.meow_times(0, out) {
        writeln!(out, "Error: meowing: {err}")?;
    }
    if let Err(err) = RobotCat::new("  ") {
        writeln!(out, "Error: building a robot cat: {err}")?;
    }

    Ok(())
}

fn report_counts(out: &mut dyn Write, counters: &[MeowCounter<Kitty>]) -> anyhow::Result<()> {
    for counter in counters {
        writeln!(out, "{counter}: meowed {} times", counter.meow_count())?;
    }
    Ok(())
}
