//! Icons command implementation.
//!
//! Android drawables get `currentColor` replaced by the configured colour
//! reference; asset catalogs keep it, since icons render as templates.

use crate::error::Result;
use crate::output::Printer;
use crate::parser::parse_icons;

use super::images::{render_android_drawables, render_ios_images, ImageTarget};
use super::{emit, read_input, ExportArgs};

/// Fill kept in catalog icons.
const TEMPLATE_COLOR: &str = "currentColor";

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let config = args.load_config()?;
    let mut files = Vec::new();

    for project in config.projects(args.project.as_deref())? {
        let Some(path) = &project.icons else {
            continue;
        };
        printer.status("Processing", &format!("icons ({})", project.name));
        let json = read_input(&config, path)?;

        let target = ImageTarget {
            category: format!("icons ({})", project.name),
            rules: &config.common.icons,
            ios: config.ios.as_ref().and_then(|ios| ios.icons.as_ref()),
            default_folder: "Icons",
            template: true,
        };

        if config.ios.is_some() {
            let icons = parse_icons(&json, TEMPLATE_COLOR)?;
            files.extend(render_ios_images(&config, &target, icons, None, printer)?);
        }
        if let Some(android) = &config.android {
            let icons = parse_icons(&json, &android.icon_color)?;
            files.extend(render_android_drawables(&config, &target, icons, None, printer)?);
        }
    }

    emit(printer, &args, &files)
}
