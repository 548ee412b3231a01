use io_util::ReadError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VtxError {
  #[error(transparent)]
  Read(#[from] ReadError),

  #[error("unsupported strip file version {version}")]
  UnsupportedVersion {
    version: i32
  }
}

pub type VtxResult<T> = Result<T, VtxError>;
