use io_util::RecordReader;

use crate::record::read_child_records;
use crate::{MeshHeader, VtxRecord, VtxResult};

/// ModelLODHeader_t
#[derive(Debug, Clone, PartialEq)]
pub struct ModelLODHeader {
  pub meshes: Vec<MeshHeader>,
  /// Camera distance at which this LOD takes over.
  pub switch_point: f32
}

impl VtxRecord for ModelLODHeader {
  const SIZE: usize = 12;
  const NAME: &'static str = "render LODs";

  fn read(data: &[u8], offset: usize) -> VtxResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let meshes_count = read.read_i32()?;
    let mesh_offset = read.read_i32()?;
    let switch_point = read.read_f32()?;
    Ok(Self {
      meshes: read_child_records(&read, meshes_count, mesh_offset)?,
      switch_point
    })
  }
}
