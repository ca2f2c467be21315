pub mod colors;
pub mod completions;
pub mod css_colors;
pub mod icons;
pub mod images;
pub mod spacing;
pub mod typography;
pub mod validate;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, DEFAULT_CONFIG};
use crate::error::{Result, TokexError};
use crate::output::{display_path, plural, Printer};
use crate::processor::ProcessResult;
use crate::render::{write_files, FileContents};

/// tokex - Design token exporter for Xcode and Android
#[derive(Parser, Debug)]
#[command(name = "tokex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export colour tokens
    Colors(ExportArgs),

    /// Export light/dark colours from a theme stylesheet
    CssColors(ExportArgs),

    /// Export SVG icons
    Icons(ExportArgs),

    /// Export raster and vector images
    Images(ExportArgs),

    /// Export typography styles
    Typography(ExportArgs),

    /// Export spacing and corner radius tokens
    Spacing(ExportArgs),

    /// Validate every configured input without writing files
    Validate(ExportArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options shared by every export command.
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Configuration file
    #[arg(long, short, default_value = DEFAULT_CONFIG)]
    pub input: PathBuf,

    /// Only export this project
    #[arg(long, short)]
    pub project: Option<String>,

    /// Show what would be written without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    pub fn load_config(&self) -> Result<Config> {
        Config::load(&self.input)
    }
}

/// Read a project input, resolved against the config directory.
pub(crate) fn read_input(config: &Config, path: &Path) -> Result<String> {
    let path = config.resolve(path);
    fs::read_to_string(&path).map_err(|e| TokexError::Io {
        path,
        message: format!("Failed to read input: {}", e),
    })
}

/// Unwrap a processing pass, reporting every error of a failed one.
pub(crate) fn checked<T>(printer: &Printer, category: &str, result: ProcessResult<T>) -> Result<T> {
    result.map_err(|errors| {
        printer.validation_errors(category, &errors);
        TokexError::validation(category, errors)
    })
}

/// Write rendered files, or list them on a dry run.
pub(crate) fn emit(printer: &Printer, args: &ExportArgs, files: &[FileContents]) -> Result<()> {
    if args.dry_run {
        for file in files {
            printer.info("Would write", &printer.cyan(&display_path(&file.destination)));
        }
        printer.success(
            "Checked",
            &format!("{} {}", plural(files.len(), "file", "files"), printer.dim("(dry run)")),
        );
        return Ok(());
    }

    let written = write_files(files)?;
    printer.success("Wrote", &plural(written, "file", "files"));
    Ok(())
}
