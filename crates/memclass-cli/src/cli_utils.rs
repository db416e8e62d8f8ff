//! Common CLI utility functions shared across commands.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use memclass_core::{Class, FieldKind, MemclassConfig, PointerWidth, parse_address};
use tracing::info;

/// Load the config file if given, then apply the command-line pointer width.
pub fn load_config(path: Option<&Path>, pointer_width: Option<usize>) -> Result<MemclassConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            let config = MemclassConfig::from_toml_str(&text)?;
            info!("Loaded config from {:?}", path);
            config
        }
        None => MemclassConfig::default(),
    };

    if let Some(width) = pointer_width {
        config.pointer_width = PointerWidth::try_from(width)?;
    }
    Ok(config)
}

/// Parse hex bytes, ignoring whitespace and an optional `0x` prefix.
pub fn parse_hex_bytes(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);

    hex::decode(digits).with_context(|| format!("Invalid hex bytes: {text:?}"))
}

/// A property given on the command line as `OFFSET:KIND[:NAME]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub offset: u64,
    pub kind: FieldKind,
    pub name: Option<String>,
}

impl FromStr for FieldSpec {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self> {
        let mut parts = text.splitn(3, ':');
        let (Some(offset), Some(kind)) = (parts.next(), parts.next()) else {
            bail!("Expected OFFSET:KIND[:NAME], got {text:?}");
        };

        let offset = parse_address(offset)?;
        let kind = FieldKind::from_str(kind.trim())
            .with_context(|| format!("Unknown field kind {kind:?}"))?;
        let name = parts
            .next()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(Self { offset, kind, name })
    }
}

impl FieldSpec {
    pub fn apply(&self, class: &mut Class) {
        match &self.name {
            Some(name) => {
                class.push_named_property(self.offset, self.kind, name.clone());
            }
            None => {
                class.push_property(self.offset, self.kind);
            }
        }
    }
}

pub fn parse_field_specs(fields: &[String]) -> Result<Vec<FieldSpec>> {
    fields.iter().map(|f| f.parse()).collect()
}
