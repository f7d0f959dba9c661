use clap::Parser;
use miette::Result;
use swatch::cli::{Cli, Commands};
use swatch::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    swatch::logging::init_logging("warn");

    let printer = Printer::new();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Convert(args) => swatch::cli::convert::run(args, &printer)?,
        Commands::Hsl(args) => swatch::cli::convert::run_hsl(args, &printer)?,
        Commands::Wheel(args) => swatch::cli::wheel::run(args, config, &printer)?,
        Commands::Sample(args) => swatch::cli::sample::run(args, &printer)?,
        Commands::Palette(args) => swatch::cli::palette::run(args, config, &printer)?,
        Commands::Completions(args) => swatch::cli::completions::run(args)?,
    }

    Ok(())
}
