//! Configuration file for the regiontree tool.

use anyhow::{Context, Result};
use regiontree::{PaintOptions, ParseOptions, QuadrantOrder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "regiontree.toml";

/// Largest canvas side accepted for rendering, in pixels.
pub const MAX_SIZE: u32 = 4096;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Canvas side for rendering, in pixels.
    pub size: u32,
    /// Draw a border around every leaf.
    pub outline: bool,
    /// Quadrant order of notation lists.
    pub order: QuadrantOrder,
    /// Maximum list nesting accepted by the parser.
    pub max_depth: usize,
    /// Palette for rendered images.
    pub colors: Colors,
}

/// RGB colours used when rendering to an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Colors {
    /// Fill for black leaves.
    pub black: [u8; 3],
    /// Fill for white leaves (light grey by default).
    pub white: [u8; 3],
    /// Leaf borders.
    pub outline: [u8; 3],
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            black: [0, 0, 0],
            white: [211, 211, 211],
            outline: [0, 0, 0],
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let paint = PaintOptions::default();
        let parse = ParseOptions::default();
        Self {
            size: paint.size,
            outline: paint.outline,
            order: parse.order,
            max_depth: parse.max_depth,
            colors: Colors::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Use `explicit` if given, else `regiontree.toml` in `dir` if it exists, else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using config from working directory");
            return Self::load(&candidate);
        }
        Ok(Self::default())
    }

    fn validate(&self) -> Result<()> {
        check_size(self.size)?;
        if self.max_depth == 0 {
            anyhow::bail!("max_depth must be greater than 0");
        }
        Ok(())
    }

    /// Parser settings from this configuration.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::new()
            .with_order(self.order)
            .with_max_depth(self.max_depth)
    }

    /// Painter settings from this configuration.
    pub fn paint_options(&self) -> PaintOptions {
        PaintOptions {
            size: self.size,
            outline: self.outline,
        }
    }
}

/// Reject canvas sides of zero or above [`MAX_SIZE`].
pub fn check_size(size: u32) -> Result<()> {
    if size == 0 {
        anyhow::bail!("size must be greater than 0");
    }
    if size > MAX_SIZE {
        anyhow::bail!("size {} is larger than the maximum of {}", size, MAX_SIZE);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
        assert_eq!(Config::default().size, 400);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            size = 256
            outline = false
            order = "row-major"
            max_depth = 12

            [colors]
            white = [255, 255, 255]
            "#,
        )
        .unwrap();

        assert_eq!(config.size, 256);
        assert!(!config.outline);
        assert_eq!(config.order, QuadrantOrder::RowMajor);
        assert_eq!(config.parse_options().max_depth, 12);
        assert_eq!(config.colors.white, [255, 255, 255]);
        assert_eq!(config.colors.black, [0, 0, 0]);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(Config::from_toml("size = 0").is_err());
        assert!(Config::from_toml("size = 4097").is_err());
        assert_eq!(Config::from_toml("size = 4096").unwrap().size, MAX_SIZE);
        assert!(Config::from_toml("max_depth = 0").is_err());
        assert!(Config::from_toml("order = \"spiral\"").is_err());
        assert!(Config::from_toml("colour = 1").is_err());
    }

    #[test]
    fn test_discover() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            Config::discover(None, dir.path()).unwrap(),
            Config::default()
        );

        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "size = 64\n").unwrap();
        assert_eq!(Config::discover(None, dir.path()).unwrap().size, 64);

        let explicit = dir.path().join("other.toml");
        std::fs::write(&explicit, "size = 32\n").unwrap();
        assert_eq!(
            Config::discover(Some(explicit.as_path()), dir.path()).unwrap().size,
            32
        );
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::discover(Some(missing.as_path()), dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
