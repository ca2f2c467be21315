//! CSS colors command implementation.
//!
//! A stylesheet with a dark block is exported as light/dark pairs; one with
//! only `.light` is exported as a single collection.

use crate::error::Result;
use crate::output::Printer;
use crate::parser::parse_css_colors;

use super::colors::render_colors;
use super::{emit, read_input, ExportArgs};

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let config = args.load_config()?;
    let mut files = Vec::new();

    for project in config.projects(args.project.as_deref())? {
        let Some(path) = &project.css else {
            continue;
        };
        printer.status("Processing", &format!("theme css ({})", project.name));
        let theme = parse_css_colors(&read_input(&config, path)?)?;
        let dark = theme.dark_or_none();
        files.extend(render_colors(&config, project, theme.light, dark, printer)?);
    }

    emit(printer, &args, &files)
}
