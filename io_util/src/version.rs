use serde::{Deserialize, Serialize};

/// How a decoder treats a header whose identity or version it does not recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionPolicy {
  /// Fail with an unsupported version error.
  #[default]
  Strict,
  /// Log a warning and decode anyway.
  Lenient
}
