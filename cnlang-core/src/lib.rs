//! CNLang Core - Value runtime for compiled CNLang programs
//!
//! Tagged dynamic values, growable arrays, weak comparison, arithmetic with a
//! Null error sentinel, builtin dispatch and line-oriented console I/O.
//!
//! Configuration is passed explicitly via parameters, not via global state.
//! Diagnostics are emitted as `tracing` events under the `cnlang::*` targets;
//! installing a subscriber is left to the embedding binary.

pub mod runtime;

// Re-export common types
pub use runtime::array::Array;
pub use runtime::error::{ConsoleError, ValueError, ValueResult};
pub use runtime::format::Renderer;
pub use runtime::io::Console;
pub use runtime::operators::Operator;
pub use runtime::builtins::Builtin;
pub use runtime::value::Value;

// Re-export config types from cnlang-config
pub use cnlang_config::{Component, ConsoleConfig, FormatConfig, LogLevel, LoggingConfig, RuntimeConfig};
