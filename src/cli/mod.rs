use clap::{Parser, Subcommand};

mod sweep;
mod table;

#[derive(Parser, Debug)]
#[command(name = "relay-curves", version, about = "Relay Curves CLI")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Sweep(sweep::SweepArgs),
    Table(table::TableArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Sweep(args) => sweep::handle(args),
            Command::Table(args) => table::handle(args),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
