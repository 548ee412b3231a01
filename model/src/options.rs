use io_util::VersionPolicy;
use serde::{Deserialize, Serialize};

/// Knobs for [`crate::ModelDescriptor::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
  pub version_policy: VersionPolicy,
  /// Reject a strip file compiled against a different studio model.
  pub verify_checksums: bool,
  /// Reject meshes whose vertex range does not fit the vertex buffer.
  pub validate_vertex_ranges: bool
}

impl Default for DecodeOptions {
  fn default() -> Self {
    Self {
      version_policy: VersionPolicy::Strict,
      verify_checksums: true,
      validate_vertex_ranges: true
    }
  }
}
