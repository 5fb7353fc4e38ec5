//! Render configuration.
//!
//! Defaults suit an interactive terminal. [`Config::from_env`] lets the
//! environment turn colors off or change indentation:
//!
//! - `NO_COLOR` / `SPARK_FLOW_NO_COLOR` - any value disables ANSI attributes
//! - `SPARK_FLOW_INDENT` - spaces per nesting level

use tracing::warn;

/// Default spaces per nesting level.
pub const DEFAULT_INDENT: usize = 2;

/// Terminal output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Emit ANSI attribute sequences.
    pub ansi: bool,
    /// Spaces per element nesting level.
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ansi: true,
            indent: DEFAULT_INDENT,
        }
    }
}

impl Config {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // An empty value counts as unset.
        let set = |key: &str| lookup(key).is_some_and(|value| !value.is_empty());
        if set("NO_COLOR") || set("SPARK_FLOW_NO_COLOR") {
            config.ansi = false;
        }

        if let Some(raw) = lookup("SPARK_FLOW_INDENT") {
            match raw.trim().parse::<usize>() {
                Ok(indent) => config.indent = indent,
                Err(err) => warn!(
                    value = %raw,
                    error = %err,
                    "ignoring invalid SPARK_FLOW_INDENT, using {DEFAULT_INDENT}"
                ),
            }
        }

        config
    }
}
