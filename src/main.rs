use clap::Parser;
use miette::Result;
use tokex::cli::{Cli, Commands};
use tokex::output::Printer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // RUST_LOG controls diagnostics; status lines come from the printer.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Colors(args) => tokex::cli::colors::run(args, &printer)?,
        Commands::CssColors(args) => tokex::cli::css_colors::run(args, &printer)?,
        Commands::Icons(args) => tokex::cli::icons::run(args, &printer)?,
        Commands::Images(args) => tokex::cli::images::run(args, &printer)?,
        Commands::Typography(args) => tokex::cli::typography::run(args, &printer)?,
        Commands::Spacing(args) => tokex::cli::spacing::run(args, &printer)?,
        Commands::Validate(args) => tokex::cli::validate::run(args, &printer)?,
        Commands::Completions(args) => tokex::cli::completions::run(args)?,
    }

    Ok(())
}
