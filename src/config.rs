//! Export configuration (tokex.yaml) parsing.
//!
//! The configuration lists the token projects to export and, per platform,
//! where and how generated sources are written. A missing platform section
//! means that platform is skipped.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokexError};
use crate::processor::NameStyle;
use crate::types::RoundedTheme;

/// Default configuration file name.
pub const DEFAULT_CONFIG: &str = "tokex.yaml";

/// Export configuration loaded from tokex.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Token projects, each a set of input files.
    pub projects: Vec<ProjectConfig>,

    /// Name rules shared by both platforms.
    #[serde(default)]
    pub common: CommonConfig,

    #[serde(default)]
    pub ios: Option<IosConfig>,

    #[serde(default)]
    pub android: Option<AndroidConfig>,

    /// Directory relative paths are resolved against.
    #[serde(skip)]
    pub root: PathBuf,
}

/// Input files of one token project. Every input is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
    /// Colour-token JSON.
    pub colors: Option<PathBuf>,
    /// Light/dark theme CSS.
    pub css: Option<PathBuf>,
    pub typography: Option<PathBuf>,
    pub spacing: Option<PathBuf>,
    /// Icon JSON.
    pub icons: Option<PathBuf>,
    /// Rendition directory.
    pub images: Option<PathBuf>,
    /// Dark rendition directory, paired with `images` by name.
    pub dark_images: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonConfig {
    pub colors: NameRules,
    pub icons: NameRules,
    pub images: NameRules,
}

/// Name validation and rewriting rules for one asset category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameRules {
    /// Every asset name must contain a match.
    pub name_validate_regexp: Option<String>,
    /// Replacement template applied to matches, `$1`..`$9` for groups.
    pub name_replace_regexp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IosConfig {
    /// Directory generated Swift files and asset catalogs go to.
    pub output: PathBuf,
    #[serde(default)]
    pub colors: Option<IosColorsConfig>,
    #[serde(default)]
    pub icons: Option<IosImagesConfig>,
    #[serde(default)]
    pub images: Option<IosImagesConfig>,
    #[serde(default)]
    pub typography: Option<IosTypographyConfig>,
    #[serde(default)]
    pub spacing: Option<SpacingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IosColorsConfig {
    pub name_style: NameStyle,
    /// Also write `.colorset` catalogs and load colours by name.
    pub use_color_assets: bool,
    pub assets_folder: String,
    pub color_swift: String,
    /// Also write a SwiftUI `Color` extension.
    pub swiftui: bool,
    pub swiftui_swift: String,
}

impl Default for IosColorsConfig {
    fn default() -> Self {
        Self {
            name_style: NameStyle::CamelCase,
            use_color_assets: false,
            assets_folder: "Colors".to_string(),
            color_swift: "UIColor+Tokens.swift".to_string(),
            swiftui: false,
            swiftui_swift: "Color+Tokens.swift".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IosImagesConfig {
    pub name_style: NameStyle,
    /// Asset catalog folder; the category name when unset.
    pub assets_folder: Option<String>,
    /// Swift accessor file; `UIImage+<Folder>.swift` when unset.
    pub image_swift: Option<String>,
}

impl Default for IosImagesConfig {
    fn default() -> Self {
        Self {
            name_style: NameStyle::CamelCase,
            assets_folder: None,
            image_swift: None,
        }
    }
}

impl IosImagesConfig {
    pub fn assets_folder_or(&self, fallback: &str) -> String {
        self.assets_folder
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn image_swift_or(&self, folder: &str) -> String {
        self.image_swift
            .clone()
            .unwrap_or_else(|| format!("UIImage+{}.swift", folder))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IosTypographyConfig {
    pub font_family: String,
    pub output_file: String,
}

impl Default for IosTypographyConfig {
    fn default() -> Self {
        Self {
            font_family: "SFProDisplay".to_string(),
            output_file: "UIFont+Tokens.swift".to_string(),
        }
    }
}

/// Spacing export settings, shared by both platforms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingConfig {
    pub rounded_theme: RoundedTheme,
    /// Output file name; the platform default when unset.
    pub output_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AndroidConfig {
    /// The `res` directory.
    pub output: PathBuf,
    #[serde(default)]
    pub compose: Option<ComposeConfig>,
    /// Colour reference substituted for `currentColor` in icons.
    #[serde(default = "default_icon_color")]
    pub icon_color: String,
    #[serde(default)]
    pub spacing: Option<SpacingConfig>,
}

/// Jetpack Compose colour system output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeConfig {
    pub package: String,
    pub output: PathBuf,
}

fn default_icon_color() -> String {
    "@color/defaultIconColor".to_string()
}

impl Config {
    /// Load configuration from a YAML file. Relative paths inside it resolve
    /// against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TokexError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let mut config = Self::parse(&content)?;
        config.root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        tracing::debug!(path = %path.display(), projects = config.projects.len(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content).map_err(|e| TokexError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", DEFAULT_CONFIG)),
        })?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if self.projects.is_empty() {
            return Err(TokexError::Config {
                message: "No projects configured".to_string(),
                help: Some("Add at least one entry under 'projects'".to_string()),
            });
        }

        for (i, project) in self.projects.iter().enumerate() {
            if project.name.is_empty() {
                return Err(TokexError::Config {
                    message: format!("Project #{} has no name", i + 1),
                    help: None,
                });
            }
            if self.projects[..i].iter().any(|p| p.name == project.name) {
                return Err(TokexError::Config {
                    message: format!("Duplicate project name: {}", project.name),
                    help: None,
                });
            }
        }

        Ok(())
    }

    /// Projects selected by `name`, or every project when `name` is `None`.
    pub fn projects(&self, name: Option<&str>) -> Result<Vec<&ProjectConfig>> {
        match name {
            Some(name) => Ok(vec![self.project(name)?]),
            None => Ok(self.projects.iter().collect()),
        }
    }

    /// Look up one project by name.
    pub fn project(&self, name: &str) -> Result<&ProjectConfig> {
        self.projects
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| TokexError::Config {
                message: format!("Unknown project: {}", name),
                help: Some(format!(
                    "Configured projects: {}",
                    self.projects
                        .iter()
                        .map(|p| p.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )),
            })
    }

    /// Resolve a configured path against the config directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let yaml = "projects:\n  - name: shop\n    colors: tokens/colors.json\n";
        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.projects[0].name, "shop");
        assert_eq!(
            config.projects[0].colors,
            Some(PathBuf::from("tokens/colors.json"))
        );
        assert!(config.projects[0].css.is_none());
        assert!(config.ios.is_none());
        assert!(config.android.is_none());
        assert_eq!(config.common.colors, NameRules::default());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
projects:
  - name: shop
    colors: tokens/colors.json
    css: tokens/theme.css
    icons: tokens/icons.json
    images: assets/light
    dark_images: assets/dark
common:
  colors:
    name_validate_regexp: "^color_(.*)$"
    name_replace_regexp: "$1"
ios:
  output: ios/Generated
  colors:
    name_style: snake_case
    use_color_assets: true
    swiftui: true
  icons:
    assets_folder: Glyphs
  typography:
    font_family: Inter
  spacing:
    rounded_theme: rounded
android:
  output: android/res
  compose:
    package: com.example.theme
    output: android/java/theme
"#;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(
            config.common.colors.name_validate_regexp.as_deref(),
            Some("^color_(.*)$")
        );
        assert_eq!(config.common.colors.name_replace_regexp.as_deref(), Some("$1"));
        assert!(config.common.icons.name_validate_regexp.is_none());

        let ios = config.ios.unwrap();
        assert_eq!(ios.output, PathBuf::from("ios/Generated"));
        let colors = ios.colors.unwrap();
        assert_eq!(colors.name_style, NameStyle::SnakeCase);
        assert!(colors.use_color_assets);
        assert!(colors.swiftui);
        assert_eq!(colors.assets_folder, "Colors");

        let icons = ios.icons.unwrap();
        assert_eq!(icons.name_style, NameStyle::CamelCase);
        assert_eq!(icons.assets_folder_or("Icons"), "Glyphs");
        assert_eq!(icons.image_swift_or("Glyphs"), "UIImage+Glyphs.swift");

        assert_eq!(ios.typography.unwrap().font_family, "Inter");
        assert_eq!(ios.spacing.unwrap().rounded_theme, RoundedTheme::Rounded);

        let android = config.android.unwrap();
        assert_eq!(android.icon_color, "@color/defaultIconColor");
        assert_eq!(android.compose.unwrap().package, "com.example.theme");
        assert!(android.spacing.is_none());
    }

    #[test]
    fn test_rejects_empty_projects() {
        assert!(Config::parse("projects: []").is_err());
        assert!(Config::parse("").is_err());
    }

    #[test]
    fn test_rejects_duplicate_project_names() {
        let yaml = "projects:\n  - name: a\n  - name: a\n";
        let err = Config::parse(yaml).unwrap_err();
        assert!(err.to_string().contains("Duplicate project name: a"));
    }

    #[test]
    fn test_rejects_unknown_name_style() {
        let yaml = "projects:\n  - name: a\nios:\n  output: out\n  colors:\n    name_style: kebab\n";
        assert!(Config::parse(yaml).is_err());
    }

    #[test]
    fn test_project_selection() {
        let yaml = "projects:\n  - name: a\n  - name: b\n";
        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.projects(None).unwrap().len(), 2);
        assert_eq!(config.projects(Some("b")).unwrap()[0].name, "b");

        let err = config.project("c").unwrap_err();
        assert!(err.to_string().contains("Unknown project: c"));
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG);
        std::fs::write(&path, "projects:\n  - name: a\n    css: theme.css\n").unwrap();

        let config = Config::load(&path).unwrap();
        let css = config.projects[0].css.as_deref().unwrap();
        assert_eq!(config.resolve(css), dir.path().join("theme.css"));
        assert_eq!(
            config.resolve(Path::new("/abs/file.css")),
            PathBuf::from("/abs/file.css")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/tokex.yaml")).unwrap_err();
        assert!(matches!(err, TokexError::Io { .. }));
    }
}
