use io_util::ReadError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MdlError {
  #[error(transparent)]
  Read(#[from] ReadError),

  #[error("unsupported studio model: id {id:#010x}, version {version}")]
  UnsupportedVersion {
    id: i32,
    version: i32
  },

  #[error("bone {bone} has invalid parent {parent}")]
  InvalidBoneParent {
    bone: usize,
    parent: i32
  }
}

pub type MdlResult<T> = Result<T, MdlError>;
