mod calc;
mod commands;
mod demo;
mod format;
mod logger;

use std::io::{self, Write};

use commands::{CommandLine, Commands};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    logger::init_logger(commands.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match commands.command.unwrap_or(Commands::All) {
        Commands::Cats => demo::cats::run(&mut out)?,
        Commands::Fractions => demo::fractions::run(&mut out)?,
        Commands::All => {
            format::banner(&mut out, "cats")?;
            demo::cats::run(&mut out)?;
            writeln!(out)?;
            format::banner(&mut out, "fractions")?;
            demo::fractions::run(&mut out)?;
        }
        Commands::Calc { lhs, op, rhs } => calc::run(&mut out, &lhs, op, &rhs)?,
    }

    out.flush()?;
    Ok(())
}
