use bevy_math::Vec3;
use io_util::RecordReader;

use crate::read_util::VectorRead;
use crate::{MdlResult, StudioRecord};

pub const MAX_NUM_LODS: usize = 8;

/// mstudio_meshvertexdata_t without its runtime pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshVertexData {
  pub lod_vertices: [i32; MAX_NUM_LODS]
}

impl MeshVertexData {
  fn read(read: &mut RecordReader) -> MdlResult<Self> {
    // modelvertexdata pointer
    read.skip(4);
    let mut lod_vertices = [0i32; MAX_NUM_LODS];
    for count in &mut lod_vertices {
      *count = read.read_i32()?;
    }
    Ok(Self { lod_vertices })
  }
}

/// mstudiomesh_t
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
  /// Index into a skin family row, not directly into the texture array.
  pub material: i32,
  pub model_index: i32,
  pub vertices_count: i32,
  pub vertex_offset: i32,
  pub flexes_count: i32,
  pub flex_index: i32,
  pub material_type: i32,
  pub material_param: i32,
  pub mesh_id: i32,
  pub center: Vec3,
  pub vertex_data: MeshVertexData
}

impl StudioRecord for Mesh {
  const SIZE: usize = 116;
  const NAME: &'static str = "meshes";

  fn read(data: &[u8], offset: usize) -> MdlResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let material = read.read_i32()?;
    let model_index = read.read_i32()?;
    let vertices_count = read.read_i32()?;
    let vertex_offset = read.read_i32()?;
    let flexes_count = read.read_i32()?;
    let flex_index = read.read_i32()?;
    let material_type = read.read_i32()?;
    let material_param = read.read_i32()?;
    let mesh_id = read.read_i32()?;
    let center = read.read_vec3()?;
    let vertex_data = MeshVertexData::read(&mut read)?;
    // unused[8]
    Ok(Self {
      material,
      model_index,
      vertices_count,
      vertex_offset,
      flexes_count,
      flex_index,
      material_type,
      material_param,
      mesh_id,
      center,
      vertex_data
    })
  }
}
