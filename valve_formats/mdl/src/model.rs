use io_util::RecordReader;

use crate::record::read_child_records;
use crate::{MdlResult, Mesh, StudioRecord};

/// mstudiomodel_t
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
  pub name: String,
  pub model_type: i32,
  pub bounding_radius: f32,
  pub meshes: Vec<Mesh>,

  pub vertices_count: i32,
  /// Byte offset into the vertex file's vertex block.
  pub vertex_index: i32,
  pub tangents_index: i32,

  pub attachments_count: i32,
  pub attachment_index: i32,

  pub eye_balls_count: i32,
  pub eye_ball_index: i32
}

impl StudioRecord for Model {
  const SIZE: usize = 148;
  const NAME: &'static str = "models";

  fn read(data: &[u8], offset: usize) -> MdlResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let name = read.read_fixed_length_string(64)?;
    let model_type = read.read_i32()?;
    let bounding_radius = read.read_f32()?;
    let meshes_count = read.read_i32()?;
    let mesh_index = read.read_i32()?;

    let vertices_count = read.read_i32()?;
    let vertex_index = read.read_i32()?;
    let tangents_index = read.read_i32()?;

    let attachments_count = read.read_i32()?;
    let attachment_index = read.read_i32()?;

    let eye_balls_count = read.read_i32()?;
    let eye_ball_index = read.read_i32()?;
    // mstudio_modelvertexdata_t (two pointers), unused[8]

    Ok(Self {
      name,
      model_type,
      bounding_radius,
      meshes: read_child_records(&read, meshes_count, mesh_index)?,
      vertices_count,
      vertex_index,
      tangents_index,
      attachments_count,
      attachment_index,
      eye_balls_count,
      eye_ball_index
    })
  }
}
