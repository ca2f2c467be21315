//! Typography command implementation.

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::parser::parse_typography;
use crate::processor::AssetsProcessor;
use crate::render::render_swift_typography;
use crate::types::Platform;

use super::{checked, emit, read_input, ExportArgs};

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let config = args.load_config()?;
    let mut files = Vec::new();

    let Some(ios) = &config.ios else {
        printer.warning("Skipping", "typography is only exported for iOS");
        return Ok(());
    };
    let settings = ios.typography.clone().unwrap_or_default();
    let processor = AssetsProcessor::new(Platform::Ios);

    for project in config.projects(args.project.as_deref())? {
        let Some(path) = &project.typography else {
            continue;
        };
        printer.status("Processing", &format!("typography ({})", project.name));

        let styles = parse_typography(&read_input(&config, path)?, &settings.font_family)?;
        let category = format!("typography ({})", project.name);
        let styles = checked(printer, &category, processor.process_assets(styles))?;
        printer.info("Rendering", &plural(styles.len(), "text style", "text styles"));

        files.push(render_swift_typography(
            &styles,
            &config.resolve(&ios.output).join(&settings.output_file),
        ));
    }

    emit(printer, &args, &files)
}
