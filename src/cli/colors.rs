//! Colors command implementation.
//!
//! Decodes colour-token JSON and writes platform colour sources.

use crate::config::{Config, ProjectConfig};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::parser::parse_color_tokens;
use crate::processor::{AssetsProcessor, NameStyle};
use crate::render::{
    render_android_colors, render_compose_colors, render_xcode_colors, FileContents,
};
use crate::types::{Color, Platform};

use super::{checked, emit, read_input, ExportArgs};

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let config = args.load_config()?;
    let mut files = Vec::new();

    for project in config.projects(args.project.as_deref())? {
        let Some(path) = &project.colors else {
            continue;
        };
        printer.status("Processing", &format!("colors ({})", project.name));
        let colors = parse_color_tokens(&read_input(&config, path)?)?;
        files.extend(render_colors(&config, project, colors, None, printer)?);
    }

    emit(printer, &args, &files)
}

/// Process `light` (and `dark` when present) for every configured platform
/// and render the results.
pub(crate) fn render_colors(
    config: &Config,
    project: &ProjectConfig,
    light: Vec<Color>,
    dark: Option<Vec<Color>>,
    printer: &Printer,
) -> Result<Vec<FileContents>> {
    let category = format!("colors ({})", project.name);
    let mut files = Vec::new();

    if let Some(ios) = &config.ios {
        let colors_config = ios.colors.clone().unwrap_or_default();
        let processor = AssetsProcessor::from_rules(
            Platform::Ios,
            &config.common.colors,
            Some(colors_config.name_style),
        )?;
        let pairs = checked(
            printer,
            &category,
            processor.process_optional(light.clone(), dark.clone()),
        )?;
        printer.info("Rendering", &format!("{} for iOS", plural(pairs.len(), "color", "colors")));
        files.extend(render_xcode_colors(
            &pairs,
            &config.resolve(&ios.output),
            &colors_config,
        )?);
    }

    if let Some(android) = &config.android {
        let processor = AssetsProcessor::from_rules(
            Platform::Android,
            &config.common.colors,
            Some(NameStyle::SnakeCase),
        )?;
        let pairs = checked(printer, &category, processor.process_optional(light, dark))?;
        printer.info(
            "Rendering",
            &format!("{} for Android", plural(pairs.len(), "color", "colors")),
        );
        files.extend(render_android_colors(&pairs, &config.resolve(&android.output)));
        if let Some(compose) = &android.compose {
            files.push(render_compose_colors(
                &pairs,
                &config.resolve(&compose.output),
                &compose.package,
            ));
        }
    }

    Ok(files)
}
