//! tokex - Design token exporter
//!
//! A library for turning design-token exports (colour tokens, theme CSS,
//! typography, spacing, icons and image renditions) into validated,
//! consistently named Xcode and Android sources.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod processor;
pub mod render;
pub mod types;

pub use config::{Config, ProjectConfig, DEFAULT_CONFIG};
pub use error::{Result, TokexError};
pub use processor::{AssetsProcessor, AssetsValidatorError, ErrorGroup, NameStyle, ProcessResult};
pub use render::{write_files, FileContents, FileSource};
pub use types::{
    Asset, AssetPair, Color, FontWeight, Image, ImagePack, ImageSource, Platform, RoundedTheme,
    Scale, ScaledImages, SpaceToken, TextStyle,
};
