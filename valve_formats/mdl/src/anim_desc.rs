use bevy_math::Vec3;
use io_util::RecordReader;

use crate::read_util::VectorRead;
use crate::record::read_child_records;
use crate::{MdlResult, StudioRecord};

/// mstudiomovement_t, one motion extraction sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Movement {
  pub end_frame: i32,
  pub motion_flags: i32,
  pub v0: f32,
  pub v1: f32,
  pub angle: f32,
  pub vector: Vec3,
  pub position: Vec3
}

impl StudioRecord for Movement {
  const SIZE: usize = 44;
  const NAME: &'static str = "movements";

  fn read(data: &[u8], offset: usize) -> MdlResult<Self> {
    let mut read = RecordReader::new(data, offset);
    Ok(Self {
      end_frame: read.read_i32()?,
      motion_flags: read.read_i32()?,
      v0: read.read_f32()?,
      v1: read.read_f32()?,
      angle: read.read_f32()?,
      vector: read.read_vec3()?,
      position: read.read_vec3()?
    })
  }
}

/// Animation payload references that are kept as raw record-relative values and not decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct UndecodedAnimData {
  pub anim_block: i32,
  pub anim_index: i32,

  pub ik_rules_count: i32,
  pub ik_rule_index: i32,
  pub anim_block_ik_rule_index: i32,

  pub local_hierarchy_count: i32,
  pub local_hierarchy_index: i32,

  pub section_index: i32,
  pub section_frames: i32,

  pub zero_frame_span: i16,
  pub zero_frame_count: i16,
  pub zero_frame_index: i32,
  pub zero_frame_stall_time: f32
}

/// mstudioanimdesc_t
#[derive(Debug, Clone, PartialEq)]
pub struct AnimDesc {
  pub base_ptr: i32,
  pub name: String,

  pub fps: f32,
  pub flags: i32,

  pub frames_count: i32,
  pub movements: Vec<Movement>,

  pub undecoded: UndecodedAnimData
}

impl StudioRecord for AnimDesc {
  const SIZE: usize = 100;
  const NAME: &'static str = "animation descriptions";

  fn read(data: &[u8], offset: usize) -> MdlResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let base_ptr = read.read_i32()?;
    let name_index = read.read_i32()?;

    let fps = read.read_f32()?;
    let flags = read.read_i32()?;

    let frames_count = read.read_i32()?;
    let movements_count = read.read_i32()?;
    let movement_index = read.read_i32()?;

    // unused1[6]
    read.skip(6 * 4);

    let anim_block = read.read_i32()?;
    let anim_index = read.read_i32()?;

    let ik_rules_count = read.read_i32()?;
    let ik_rule_index = read.read_i32()?;
    let anim_block_ik_rule_index = read.read_i32()?;

    let local_hierarchy_count = read.read_i32()?;
    let local_hierarchy_index = read.read_i32()?;

    let section_index = read.read_i32()?;
    let section_frames = read.read_i32()?;

    let zero_frame_span = read.read_i16()?;
    let zero_frame_count = read.read_i16()?;
    let zero_frame_index = read.read_i32()?;

    let zero_frame_stall_time = read.read_f32()?;

    Ok(Self {
      base_ptr,
      name: read.read_relative_string(name_index)?.unwrap_or_default(),
      fps,
      flags,
      frames_count,
      movements: read_child_records(&read, movements_count, movement_index)?,
      undecoded: UndecodedAnimData {
        anim_block,
        anim_index,
        ik_rules_count,
        ik_rule_index,
        anim_block_ik_rule_index,
        local_hierarchy_count,
        local_hierarchy_index,
        section_index,
        section_frames,
        zero_frame_span,
        zero_frame_count,
        zero_frame_index,
        zero_frame_stall_time
      }
    })
  }
}
