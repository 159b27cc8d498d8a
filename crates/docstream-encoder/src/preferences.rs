//! Encoding preferences
//!
//! Preferences are plain values: build them once, hand them to
//! [`YamlEncoder::new`](crate::YamlEncoder::new), and they never change for
//! the life of that encoder. They can also be read from TOML:
//!
//! ```
//! use docstream_encoder::YamlPreferences;
//!
//! let prefs = YamlPreferences::from_toml_str("indent = -3\ncolorize = true\n").unwrap();
//! assert_eq!(prefs.indent, 0);
//! assert!(prefs.colorize);
//! assert!(prefs.print_doc_separators);
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

const DEFAULT_INDENT: usize = 2;

fn default_indent() -> usize {
    DEFAULT_INDENT
}

fn default_true() -> bool {
    true
}

/// Negative widths behave like 0
pub fn clamp_indent(indent: i64) -> usize {
    usize::try_from(indent.max(0)).unwrap_or(usize::MAX)
}

fn deserialize_indent<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(clamp_indent)
}

/// Output preferences for [`YamlEncoder`](crate::YamlEncoder)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YamlPreferences {
    /// Columns per nesting level
    #[serde(default = "default_indent", deserialize_with = "deserialize_indent")]
    pub indent: usize,

    /// Whether `---` separators between documents are ever written
    #[serde(default = "default_true")]
    pub print_doc_separators: bool,

    /// Write top-level scalars as raw text instead of YAML
    #[serde(default = "default_true")]
    pub unwrap_scalar: bool,

    /// Pass rendered output through the colorizer
    #[serde(default)]
    pub colorize: bool,
}

impl Default for YamlPreferences {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            print_doc_separators: true,
            unwrap_scalar: true,
            colorize: false,
        }
    }
}

impl YamlPreferences {
    /// Parse preferences from TOML; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_indent(mut self, indent: i64) -> Self {
        self.indent = clamp_indent(indent);
        self
    }

    pub fn with_doc_separators(mut self, enabled: bool) -> Self {
        self.print_doc_separators = enabled;
        self
    }

    pub fn with_unwrap_scalar(mut self, enabled: bool) -> Self {
        self.unwrap_scalar = enabled;
        self
    }

    pub fn with_colorize(mut self, enabled: bool) -> Self {
        self.colorize = enabled;
        self
    }
}
