//! Mesh settings: defaults, TOML file, command line overrides.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Smallest accepted span count per curve.
pub const MIN_SEGMENTS: u32 = 2;
/// Largest accepted span count per curve.
pub const MAX_SEGMENTS: u32 = 1000;

/// Host-side settings for building a mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Spans per curve; each curve is resampled into `segments + 1` points.
    pub segments: u32,
    /// Close every curve unless the curve says otherwise.
    pub cyclic: bool,
    /// Name of the created mesh object.
    pub object_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            segments: 50,
            cyclic: false,
            object_name: "mesh_from_curve_object".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text).context("invalid settings file")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_toml(&text)
    }

    /// Check the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&self.segments) {
            anyhow::bail!(
                "segments must be between {} and {}, got {}",
                MIN_SEGMENTS,
                MAX_SEGMENTS,
                self.segments
            );
        }
        if self.object_name.trim().is_empty() {
            anyhow::bail!("object_name must not be empty");
        }
        Ok(())
    }

    /// Apply command line overrides on top of file or default values.
    ///
    /// `cyclic` is tri-state: `None` keeps the current value, so a settings
    /// file can turn it on and the command line can still turn it off.
    pub fn with_overrides(
        mut self,
        segments: Option<u32>,
        cyclic: Option<bool>,
        object_name: Option<String>,
    ) -> Result<Self> {
        if let Some(segments) = segments {
            self.segments = segments;
        }
        if let Some(cyclic) = cyclic {
            self.cyclic = cyclic;
        }
        if let Some(name) = object_name {
            self.object_name = name;
        }
        self.validate()?;
        Ok(self)
    }

    /// Points per curve handed to the resampler.
    pub fn points_per_curve(&self) -> usize {
        self.segments as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.segments, 50);
        assert!(!settings.cyclic);
        assert_eq!(settings.points_per_curve(), 51);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_file() {
        let settings = Settings::from_toml("segments = 8\n").unwrap();
        assert_eq!(settings.segments, 8);
        assert!(!settings.cyclic);
        assert_eq!(settings.object_name, "mesh_from_curve_object");
    }

    #[test]
    fn test_full_file() {
        let text = r#"
            segments = 120
            cyclic = true
            object_name = "tube"
        "#;
        let settings = Settings::from_toml(text).unwrap();
        assert_eq!(
            settings,
            Settings {
                segments: 120,
                cyclic: true,
                object_name: "tube".to_string(),
            }
        );
    }

    #[test]
    fn test_out_of_range() {
        assert!(Settings::from_toml("segments = 1").is_err());
        assert!(Settings::from_toml("segments = 1001").is_err());
        assert!(Settings::from_toml("segments = 1000").is_ok());
        assert!(Settings::from_toml("object_name = \"  \"").is_err());
    }

    #[test]
    fn test_overrides() {
        let file = Settings::from_toml("segments = 8\ncyclic = true\n").unwrap();

        let kept = file.clone().with_overrides(None, None, None).unwrap();
        assert_eq!(kept, file);

        let open = file.clone().with_overrides(None, Some(false), None).unwrap();
        assert!(!open.cyclic);
        assert_eq!(open.segments, 8);

        let renamed = file
            .clone()
            .with_overrides(Some(12), Some(true), Some("tube".to_string()))
            .unwrap();
        assert_eq!(renamed.segments, 12);
        assert!(renamed.cyclic);
        assert_eq!(renamed.object_name, "tube");

        assert!(file.clone().with_overrides(Some(1), None, None).is_err());
        assert!(file.with_overrides(None, None, Some(String::new())).is_err());
    }

    #[test]
    fn test_malformed() {
        assert!(Settings::from_toml("segments = \"many\"").is_err());
    }
}
