//! Spacing command implementation.
//!
//! Each platform picks its own rounded theme.

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::parser::parse_space_tokens;
use crate::processor::{AssetsProcessor, NameStyle};
use crate::render::{render_android_dimens, render_swift_spacing};
use crate::types::Platform;

use super::{checked, emit, read_input, ExportArgs};

const SWIFT_FILE: &str = "SpaceTokens.swift";
const DIMENS_FILE: &str = "dimens.xml";

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let config = args.load_config()?;
    let mut files = Vec::new();

    for project in config.projects(args.project.as_deref())? {
        let Some(path) = &project.spacing else {
            continue;
        };
        printer.status("Processing", &format!("spacing ({})", project.name));
        let json = read_input(&config, path)?;
        let category = format!("spacing ({})", project.name);

        if let Some(ios) = &config.ios {
            let settings = ios.spacing.clone().unwrap_or_default();
            let tokens = parse_space_tokens(&json, settings.rounded_theme)?;
            let processor = AssetsProcessor::new(Platform::Ios);
            let tokens = checked(printer, &category, processor.process_assets(tokens))?;
            printer.info("Rendering", &format!("{} for iOS", plural(tokens.len(), "token", "tokens")));

            let file = settings.output_file.as_deref().unwrap_or(SWIFT_FILE);
            files.push(render_swift_spacing(&tokens, &config.resolve(&ios.output).join(file)));
        }

        if let Some(android) = &config.android {
            let settings = android.spacing.clone().unwrap_or_default();
            let tokens = parse_space_tokens(&json, settings.rounded_theme)?;
            let processor =
                AssetsProcessor::new(Platform::Android).with_style(Some(NameStyle::SnakeCase));
            let tokens = checked(printer, &category, processor.process_assets(tokens))?;
            printer.info(
                "Rendering",
                &format!("{} for Android", plural(tokens.len(), "token", "tokens")),
            );

            let file = settings.output_file.as_deref().unwrap_or(DIMENS_FILE);
            files.push(render_android_dimens(
                &tokens,
                &config.resolve(&android.output).join("values").join(file),
            ));
        }
    }

    emit(printer, &args, &files)
}
