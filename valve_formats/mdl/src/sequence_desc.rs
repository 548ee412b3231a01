use bevy_math::Vec3;
use io_util::RecordReader;

use crate::read_util::VectorRead;
use crate::{MdlResult, StudioRecord};

/// Sub-lumps of a sequence that are kept as raw record-relative values and not decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct UndecodedSequenceData {
  pub events_count: i32,
  pub event_index: i32,

  pub blends_count: i32,
  pub anim_index_index: i32,
  pub movement_index: i32,

  pub auto_layers_count: i32,
  pub auto_layer_index: i32,

  pub weight_list_index: i32,
  pub pose_key_index: i32,

  pub ik_locks_count: i32,
  pub ik_lock_index: i32,

  pub key_value_index: i32,
  pub key_value_size: i32,

  pub cycle_pose_index: i32
}

/// mstudioseqdesc_t
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceDesc {
  pub base_ptr: i32,

  pub label: String,
  pub activity_name: String,

  pub flags: i32,

  pub activity: i32,
  pub activity_weight: i32,

  pub bb_min: Vec3,
  pub bb_max: Vec3,

  pub group_size: [i32; 2],
  pub param_index: [i32; 2],
  pub param_start: [f32; 2],
  pub param_end: [f32; 2],
  pub param_parent: i32,

  pub fade_in_time: f32,
  pub fade_out_time: f32,

  pub local_entry_node: i32,
  pub local_exit_node: i32,
  pub node_flags: i32,

  pub entry_phase: f32,
  pub exit_phase: f32,

  pub last_frame: f32,

  pub next_sequence: i32,
  pub pose: i32,

  pub ik_rules_count: i32,

  pub undecoded: UndecodedSequenceData
}

impl StudioRecord for SequenceDesc {
  const SIZE: usize = 212;
  const NAME: &'static str = "sequence descriptions";

  fn read(data: &[u8], offset: usize) -> MdlResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let base_ptr = read.read_i32()?;

    let label_index = read.read_i32()?;
    let activity_name_index = read.read_i32()?;

    let flags = read.read_i32()?;

    let activity = read.read_i32()?;
    let activity_weight = read.read_i32()?;

    let events_count = read.read_i32()?;
    let event_index = read.read_i32()?;

    let bb_min = read.read_vec3()?;
    let bb_max = read.read_vec3()?;

    let blends_count = read.read_i32()?;
    let anim_index_index = read.read_i32()?;

    let movement_index = read.read_i32()?;
    let group_size = [read.read_i32()?, read.read_i32()?];
    let param_index = [read.read_i32()?, read.read_i32()?];
    let param_start = [read.read_f32()?, read.read_f32()?];
    let param_end = [read.read_f32()?, read.read_f32()?];
    let param_parent = read.read_i32()?;

    let fade_in_time = read.read_f32()?;
    let fade_out_time = read.read_f32()?;

    let local_entry_node = read.read_i32()?;
    let local_exit_node = read.read_i32()?;
    let node_flags = read.read_i32()?;

    let entry_phase = read.read_f32()?;
    let exit_phase = read.read_f32()?;

    let last_frame = read.read_f32()?;

    let next_sequence = read.read_i32()?;
    let pose = read.read_i32()?;

    let ik_rules_count = read.read_i32()?;

    let auto_layers_count = read.read_i32()?;
    let auto_layer_index = read.read_i32()?;

    let weight_list_index = read.read_i32()?;

    let pose_key_index = read.read_i32()?;

    let ik_locks_count = read.read_i32()?;
    let ik_lock_index = read.read_i32()?;

    let key_value_index = read.read_i32()?;
    let key_value_size = read.read_i32()?;

    let cycle_pose_index = read.read_i32()?;
    // unused[7]

    Ok(Self {
      base_ptr,
      label: read.read_relative_string(label_index)?.unwrap_or_default(),
      activity_name: read.read_relative_string(activity_name_index)?.unwrap_or_default(),
      flags,
      activity,
      activity_weight,
      bb_min,
      bb_max,
      group_size,
      param_index,
      param_start,
      param_end,
      param_parent,
      fade_in_time,
      fade_out_time,
      local_entry_node,
      local_exit_node,
      node_flags,
      entry_phase,
      exit_phase,
      last_frame,
      next_sequence,
      pose,
      ik_rules_count,
      undecoded: UndecodedSequenceData {
        events_count,
        event_index,
        blends_count,
        anim_index_index,
        movement_index,
        auto_layers_count,
        auto_layer_index,
        weight_list_index,
        pose_key_index,
        ik_locks_count,
        ik_lock_index,
        key_value_index,
        key_value_size,
        cycle_pose_index
      }
    })
  }
}
