//! Images command implementation.
//!
//! Scans rendition directories, pairs light and dark images by name and
//! writes asset catalogs and drawables.

use crate::config::{Config, IosImagesConfig, NameRules};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::parser::{scan_renditions, DEFAULT_FORMATS};
use crate::processor::{AssetsProcessor, NameStyle};
use crate::render::{render_android_images, render_xcode_images, FileContents, XcodeImagesOutput};
use crate::types::{ImagePack, Platform};

use super::{checked, emit, ExportArgs};

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let config = args.load_config()?;
    let mut files = Vec::new();

    for project in config.projects(args.project.as_deref())? {
        let Some(dir) = &project.images else {
            continue;
        };
        printer.status("Scanning", &format!("images ({})", project.name));

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

        let target = ImageTarget {
            category: format!("images ({})", project.name),
            rules: &config.common.images,
            ios: config.ios.as_ref().and_then(|ios| ios.images.as_ref()),
            default_folder: "Images",
            template: false,
        };
        files.extend(render_images(&config, &target, light.packs, dark, printer)?);
    }

    emit(printer, &args, &files)
}

/// One image category's settings.
pub(crate) struct ImageTarget<'a> {
    pub category: String,
    pub rules: &'a NameRules,
    pub ios: Option<&'a IosImagesConfig>,
    pub default_folder: &'a str,
    pub template: bool,
}

/// Process image packs for every configured platform and render them.
pub(crate) fn render_images(
    config: &Config,
    target: &ImageTarget<'_>,
    light: Vec<ImagePack>,
    dark: Option<Vec<ImagePack>>,
    printer: &Printer,
) -> Result<Vec<FileContents>> {
    let mut files = render_ios_images(config, target, light.clone(), dark.clone(), printer)?;
    files.extend(render_android_drawables(config, target, light, dark, printer)?);
    Ok(files)
}

/// Asset catalog output; nothing when iOS is not configured.
pub(crate) fn render_ios_images(
    config: &Config,
    target: &ImageTarget<'_>,
    light: Vec<ImagePack>,
    dark: Option<Vec<ImagePack>>,
    printer: &Printer,
) -> Result<Vec<FileContents>> {
    let Some(ios) = &config.ios else {
        return Ok(Vec::new());
    };

    let settings = target.ios.cloned().unwrap_or_default();
    let processor =
        AssetsProcessor::from_rules(Platform::Ios, target.rules, Some(settings.name_style))?;
    let pairs = checked(printer, &target.category, processor.process_optional(light, dark))?;
    printer.info("Rendering", &format!("{} for iOS", plural(pairs.len(), "image", "images")));

    let output = config.resolve(&ios.output);
    let folder = settings.assets_folder_or(target.default_folder);
    let xcode = XcodeImagesOutput {
        assets_folder: output.join(&folder),
        swift_file: output.join(settings.image_swift_or(&folder)),
        template: target.template,
    };
    render_xcode_images(&pairs, &xcode)
}

/// Drawable output; nothing when Android is not configured.
pub(crate) fn render_android_drawables(
    config: &Config,
    target: &ImageTarget<'_>,
    light: Vec<ImagePack>,
    dark: Option<Vec<ImagePack>>,
    printer: &Printer,
) -> Result<Vec<FileContents>> {
    let Some(android) = &config.android else {
        return Ok(Vec::new());
    };

    let processor =
        AssetsProcessor::from_rules(Platform::Android, target.rules, Some(NameStyle::SnakeCase))?;
    let pairs = checked(printer, &target.category, processor.process_optional(light, dark))?;
    printer.info(
        "Rendering",
        &format!("{} for Android", plural(pairs.len(), "image", "images")),
    );
    render_android_images(&pairs, &config.resolve(&android.output))
}
