//! CNLang Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all CNLang crates.
//! Every struct deserializes from a partial JSON document: missing fields fall
//! back to their `Default`.

use serde::Deserialize;

/// Configuration for value rendering (`print`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Digits after the decimal point for numbers (`%f` uses 6)
    pub precision: usize,
    /// Reproduce the old renderer, which ended every nested element with `\n`
    pub legacy_nested_newlines: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            precision: 6,
            legacy_nested_newlines: false,
        }
    }
}

/// Configuration for console line input
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Also strip a `\r` that precedes the trailing newline
    pub strip_carriage_return: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            strip_carriage_return: true,
        }
    }
}

/// Log verbosity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Silent,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" => Some(LogLevel::Silent),
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Silent => "silent",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Logging configuration with per-component overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub value: Option<LogLevel>,
    pub array: Option<LogLevel>,
    pub ops: Option<LogLevel>,
    pub io: Option<LogLevel>,
}

impl LoggingConfig {
    /// Get log level for a specific component
    pub fn level_for(&self, component: Component) -> LogLevel {
        let overridden = match component {
            Component::Value => self.value,
            Component::Array => self.array,
            Component::Ops => self.ops,
            Component::Io => self.io,
        };
        overridden.unwrap_or(self.level)
    }
}

/// Runtime component enum for component-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    Value,
    Array,
    Ops,
    Io,
}

impl Component {
    pub const ALL: [Component; 4] = [
        Component::Value,
        Component::Array,
        Component::Ops,
        Component::Io,
    ];

    /// Get the string name of the component
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Value => "value",
            Component::Array => "array",
            Component::Ops => "ops",
            Component::Io => "io",
        }
    }

    /// Get the log target name for this component
    pub fn target(&self) -> String {
        format!("cnlang::{}", self.as_str())
    }
}

/// Top-level runtime configuration (the `cnlang.json` document)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub format: FormatConfig,
    pub console: ConsoleConfig,
    pub logging: LoggingConfig,
}
