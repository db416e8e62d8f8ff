//! Configuration and display constants.
//!
//! - `seed` - layout of the class every new project starts with
//! - `display` - digit widths used when formatting offsets and addresses
//! - `strings` - limits for following string pointers
//! - [`MemclassConfig`] - user-overridable settings, loadable from TOML

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::field::PointerWidth;

/// Default class created together with a project.
pub mod seed {
    use crate::field::FieldKind;

    pub const CLASS_NAME: &str = "NewClass";

    /// Number of placeholder properties in the seeded class.
    pub const PLACEHOLDER_COUNT: usize = 10;

    pub const PLACEHOLDER_KIND: FieldKind = FieldKind::Unk16;
}

/// Minimum hex digit counts for display.
pub mod display {
    pub const OFFSET_DIGITS: usize = 4;

    /// Wide enough for a 48-bit user-space address.
    pub const ADDRESS_DIGITS: usize = 12;
}

pub mod strings {
    /// Bytes read behind a string pointer.
    pub const MAX_STRING_LEN: usize = 64;

    pub const INVALID_UTF8: &str = "non utf-8 sequence";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemclassConfig {
    pub pointer_width: PointerWidth,
    pub seed_class_name: String,
    pub seed_placeholders: usize,
}

impl Default for MemclassConfig {
    fn default() -> Self {
        Self {
            pointer_width: PointerWidth::default(),
            seed_class_name: seed::CLASS_NAME.to_string(),
            seed_placeholders: seed::PLACEHOLDER_COUNT,
        }
    }
}

impl MemclassConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.seed_class_name.trim().is_empty() {
            return Err(Error::ConfigParseError(
                "seed_class_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_constants() {
        assert_eq!(seed::CLASS_NAME, "NewClass");
        assert_eq!(seed::PLACEHOLDER_COUNT, 10);
    }

    #[test]
    fn test_default_config() {
        let config = MemclassConfig::default();
        assert_eq!(config.pointer_width, PointerWidth::Bits64);
        assert_eq!(config.seed_class_name, "NewClass");
        assert_eq!(config.seed_placeholders, 10);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = MemclassConfig::from_toml_str("pointer_width = 4\n").unwrap();
        assert_eq!(config.pointer_width, PointerWidth::Bits32);
        assert_eq!(config.seed_class_name, "NewClass");
    }

    #[test]
    fn test_from_toml_full() {
        let text = r#"
pointer_width = 8
seed_class_name = "Player"
seed_placeholders = 4
"#;
        let config = MemclassConfig::from_toml_str(text).unwrap();
        assert_eq!(config.seed_class_name, "Player");
        assert_eq!(config.seed_placeholders, 4);
    }

    #[test]
    fn test_from_toml_rejects_bad_pointer_width() {
        let result = MemclassConfig::from_toml_str("pointer_width = 6\n");
        assert!(matches!(result, Err(Error::ConfigParseError(_))));
    }

    #[test]
    fn test_from_toml_rejects_empty_seed_name() {
        let result = MemclassConfig::from_toml_str("seed_class_name = \"  \"\n");
        assert!(matches!(result, Err(Error::ConfigParseError(_))));
    }
}
