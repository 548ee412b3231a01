use bevy_math::Vec3;
use io_util::RecordReader;

use crate::read_util::VectorRead;
use crate::record::read_child_records;
use crate::{MdlResult, StudioRecord};

/// mstudiobbox_t
#[derive(Debug, Clone, PartialEq)]
pub struct Hitbox {
  pub bone: i32,
  pub group: i32,
  pub bb_min: Vec3,
  pub bb_max: Vec3,
  pub name: Option<String>
}

impl StudioRecord for Hitbox {
  const SIZE: usize = 68;
  const NAME: &'static str = "hitboxes";

  fn read(data: &[u8], offset: usize) -> MdlResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let bone = read.read_i32()?;
    let group = read.read_i32()?;
    let bb_min = read.read_vec3()?;
    let bb_max = read.read_vec3()?;
    let name_index = read.read_i32()?;
    Ok(Self {
      bone,
      group,
      bb_min,
      bb_max,
      name: read.read_relative_string(name_index)?
    })
  }
}

/// mstudiohitboxset_t
#[derive(Debug, Clone, PartialEq)]
pub struct HitboxSet {
  pub name: String,
  pub hitboxes: Vec<Hitbox>
}

impl StudioRecord for HitboxSet {
  const SIZE: usize = 12;
  const NAME: &'static str = "hitbox sets";

  fn read(data: &[u8], offset: usize) -> MdlResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let name_index = read.read_i32()?;
    let hitboxes_count = read.read_i32()?;
    let hitboxes_index = read.read_i32()?;

    Ok(Self {
      name: read.read_relative_string(name_index)?.unwrap_or_default(),
      hitboxes: read_child_records(&read, hitboxes_count, hitboxes_index)?
    })
  }
}
