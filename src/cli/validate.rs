//! Validate command implementation.
//!
//! Decodes and processes every configured input without rendering, and
//! reports all failing categories before exiting.

use crate::config::{Config, NameRules};
use crate::error::{Result, TokexError};
use crate::output::{plural, Printer};
use crate::parser::{
    parse_color_tokens, parse_css_colors, parse_icons, parse_space_tokens, parse_typography,
    scan_renditions, DEFAULT_FORMATS,
};
use crate::processor::{AssetsProcessor, ErrorGroup};
use crate::types::{Asset, Platform};

use super::{read_input, ExportArgs};

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let config = args.load_config()?;
    let mut check = Check {
        printer,
        platform: primary_platform(&config),
        failed: ErrorGroup::new(),
        failed_categories: 0,
        checked: 0,
    };
    let no_rules = NameRules::default();

    for project in config.projects(args.project.as_deref())? {
        let name = &project.name;

        if let Some(path) = &project.colors {
            let colors = parse_color_tokens(&read_input(&config, path)?)?;
            check.run(&format!("colors ({})", name), &config.common.colors, colors, None)?;
        }

        if let Some(path) = &project.css {
            let theme = parse_css_colors(&read_input(&config, path)?)?;
            let dark = theme.dark_or_none();
            check.run(&format!("theme css ({})", name), &config.common.colors, theme.light, dark)?;
        }

        if let Some(path) = &project.typography {
            let family = config
                .ios
                .as_ref()
                .and_then(|ios| ios.typography.clone())
                .unwrap_or_default()
                .font_family;
            let styles = parse_typography(&read_input(&config, path)?, &family)?;
            check.run(&format!("typography ({})", name), &no_rules, styles, None)?;
        }

        if let Some(path) = &project.spacing {
            let theme = config
                .ios
                .as_ref()
                .and_then(|ios| ios.spacing.clone())
                .unwrap_or_default()
                .rounded_theme;
            let tokens = parse_space_tokens(&read_input(&config, path)?, theme)?;
            check.run(&format!("spacing ({})", name), &no_rules, tokens, None)?;
        }

        if let Some(path) = &project.icons {
            let icons = parse_icons(&read_input(&config, path)?, "currentColor")?;
            check.run(&format!("icons ({})", name), &config.common.icons, icons, None)?;
        }

        if let Some(dir) = &project.images {
            let light = scan_renditions(&config.resolve(dir), DEFAULT_FORMATS)?;
            printer.collisions(&light.collisions);
            let dark = match &project.dark_images {
                Some(dir) => {
                    let scan = scan_renditions(&config.resolve(dir), DEFAULT_FORMATS)?;
                    printer.collisions(&scan.collisions);
                    Some(scan.packs)
                }
                None => None,
            };
            check.run(&format!("images ({})", name), &config.common.images, light.packs, dark)?;
        }
    }

    check.finish()
}

/// The platform validation filters for: iOS unless only Android is configured.
fn primary_platform(config: &Config) -> Platform {
    if config.ios.is_none() && config.android.is_some() {
        Platform::Android
    } else {
        Platform::Ios
    }
}

struct Check<'a> {
    printer: &'a Printer,
    platform: Platform,
    failed: ErrorGroup,
    failed_categories: usize,
    checked: usize,
}

impl Check<'_> {
    fn run<T: Asset>(
        &mut self,
        category: &str,
        rules: &NameRules,
        base: Vec<T>,
        target: Option<Vec<T>>,
    ) -> Result<()> {
        let processor = AssetsProcessor::from_rules(self.platform, rules, None)?;
        self.checked += 1;

        match processor.process_optional(base, target) {
            Ok(pairs) => self.printer.success(
                "Checked",
                &format!("{}: {}", category, plural(pairs.len(), "asset", "assets")),
            ),
            Err(errors) => {
                self.printer.validation_errors(category, &errors);
                self.failed_categories += 1;
                self.failed.extend(errors);
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        if self.failed.is_empty() {
            self.printer.success(
                "Finished",
                &format!("{} valid", plural(self.checked, "category", "categories")),
            );
            return Ok(());
        }

        Err(TokexError::validation(
            plural(self.failed_categories, "category", "categories"),
            self.failed,
        ))
    }
}
