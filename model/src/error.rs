use studiomodel_mdl::MdlError;
use studiomodel_vtx::VtxError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
  #[error("studio model: {0}")]
  Studio(#[from] MdlError),

  #[error("strip file: {0}")]
  Strips(#[from] VtxError),

  #[error("{what} count differs: studio model has {studio}, strip file has {render}")]
  CrossReference {
    what: &'static str,
    studio: usize,
    render: usize
  },

  #[error("checksum mismatch: studio model {studio}, strip file {render}")]
  ChecksumMismatch {
    studio: i32,
    render: i32
  },

  #[error("mesh {mesh} of model {model} in body part {body_part} uses vertices {start}..{end} of {len}")]
  VertexRange {
    body_part: usize,
    model: usize,
    mesh: usize,
    start: i64,
    end: i64,
    len: usize
  },

  #[error("strip vertex refers to studio vertex {index} of {len}")]
  VertexOutOfRange {
    index: i64,
    len: usize
  }
}

pub type ModelResult<T> = Result<T, ModelError>;
