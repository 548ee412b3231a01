use bevy_math::{Quat, Vec3, Vec4};
use io_util::RecordReader;

use crate::read_util::VectorRead;
use crate::{MdlResult, StudioRecord};

/// mstudiobone_t
#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
  pub name: String,
  /// -1 for root bones.
  pub parent: i32,
  pub bone_controller: [i32; 6],

  pub position: Vec3,
  pub quaternion: Quat,
  pub rotation: Vec3,

  pub pos_scale: Vec3,
  pub rot_scale: Vec3,

  /// Rows of the 3x4 pose-to-bone matrix.
  pub pose_to_bone: [Vec4; 3],
  pub alignment: Quat,

  pub flags: i32,
  pub proc_type: i32,
  pub proc_index: i32,
  pub physics_bone: i32,
  pub surface_prop: Option<String>,
  pub contents: i32
}

impl Bone {
  pub fn is_root(&self) -> bool {
    self.parent == -1
  }
}

impl StudioRecord for Bone {
  const SIZE: usize = 216;
  const NAME: &'static str = "bones";

  fn read(data: &[u8], offset: usize) -> MdlResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let name_offset = read.read_i32()?;
    let parent = read.read_i32()?;
    let mut bone_controller = [0i32; 6];
    for controller in &mut bone_controller {
      *controller = read.read_i32()?;
    }

    let position = read.read_vec3()?;
    let quaternion = read.read_quat()?;
    let rotation = read.read_vec3()?;

    let pos_scale = read.read_vec3()?;
    let rot_scale = read.read_vec3()?;

    let pose_to_bone = read.read_matrix3x4()?;
    let alignment = read.read_quat()?;

    let flags = read.read_i32()?;
    let proc_type = read.read_i32()?;
    let proc_index = read.read_i32()?;
    let physics_bone = read.read_i32()?;
    let surface_prop_offset = read.read_i32()?;
    let contents = read.read_i32()?;
    // unused[8]

    Ok(Self {
      name: read.read_relative_string(name_offset)?.unwrap_or_default(),
      parent,
      bone_controller,
      position,
      quaternion,
      rotation,
      pos_scale,
      rot_scale,
      pose_to_bone,
      alignment,
      flags,
      proc_type,
      proc_index,
      physics_bone,
      surface_prop: read.read_relative_string(surface_prop_offset)?,
      contents
    })
  }
}
