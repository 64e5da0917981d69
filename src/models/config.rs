use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::codec::DEFAULT_JPEG_QUALITY;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "MASHUP_CONFIG";

/// Defaults for the `mashup` command, loaded from a YAML file.
///
/// ```yaml
/// max_colors: 8
/// jpeg_quality: 90
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct MashupConfig {
    /// How many top colors to swap
    #[serde(default = "default_max_colors")]
    pub max_colors: usize,

    /// Quality for JPEG output (1-100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

fn default_max_colors() -> usize {
    5
}

fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

impl Default for MashupConfig {
    fn default() -> Self {
        Self {
            max_colors: default_max_colors(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

impl MashupConfig {
    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // an empty document deserializes as null, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// The config path to use: the explicit one, else [`CONFIG_ENV`].
    pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// Load configuration from `path`, or defaults when `path` is `None`.
    ///
    /// Unreadable or invalid files are logged and replaced by defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::trace!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        max_colors = config.max_colors,
                        jpeg_quality = config.jpeg_quality,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = MashupConfig::default();
        assert_eq!(config.max_colors, 5);
        assert_eq!(config.jpeg_quality, 75);
    }

    #[test]
    fn test_parse_full() {
        let config = MashupConfig::from_yaml_str("max_colors: 12\njpeg_quality: 90\n").unwrap();
        assert_eq!(
            config,
            MashupConfig {
                max_colors: 12,
                jpeg_quality: 90
            }
        );
    }

    #[test]
    fn test_parse_partial_and_empty() {
        let config = MashupConfig::from_yaml_str("jpeg_quality: 40").unwrap();
        assert_eq!(config.max_colors, 5);
        assert_eq!(config.jpeg_quality, 40);

        assert_eq!(
            MashupConfig::from_yaml_str("  \n").unwrap(),
            MashupConfig::default()
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(MashupConfig::from_yaml_str("max_colors: lots").is_err());
        assert!(MashupConfig::from_yaml_str("jpeg_quality: 1000").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_colors: 3").unwrap();
        let config = MashupConfig::load(Some(file.path()));
        assert_eq!(config.max_colors, 3);
        assert_eq!(config.jpeg_quality, 75);
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert_eq!(MashupConfig::load(Some(&missing)), MashupConfig::default());

        let broken = dir.path().join("broken.yaml");
        std::fs::write(&broken, "max_colors: [").unwrap();
        assert_eq!(MashupConfig::load(Some(&broken)), MashupConfig::default());

        assert_eq!(MashupConfig::load(None), MashupConfig::default());
    }

    #[test]
    fn test_explicit_path_wins() {
        let explicit = PathBuf::from("/etc/mashup.yaml");
        assert_eq!(
            MashupConfig::resolve_path(Some(explicit.clone())),
            Some(explicit)
        );
    }
}
