use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "tabby")]
#[command(about = "Fractions and cats, demonstrated.")]
pub struct CommandLine {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through cats, robot cats and meow counters
    #[command(alias = "c")]
    Cats,
    /// Walk through fraction arithmetic, comparison and caching
    #[command(alias = "f")]
    Fractions,
    /// Run both walkthroughs (default)
    All,
    /// Evaluate a single fraction operation, e.g. `tabby calc 1/3 + 2/3`
    #[command(alias = "x")]
    Calc {
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        #[arg(value_enum)]
        op: Operator,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Operator {
    #[value(name = "+")]
    Add,
    #[value(name = "-")]
    Sub,
    #[value(name = "*", alias = "x")]
    Mul,
    #[value(name = "/")]
    Div,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
