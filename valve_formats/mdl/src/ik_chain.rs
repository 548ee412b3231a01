use bevy_math::Vec3;
use io_util::RecordReader;

use crate::read_util::VectorRead;
use crate::record::read_child_records;
use crate::{MdlResult, StudioRecord};

/// mstudioiklink_t
#[derive(Debug, Clone, PartialEq)]
pub struct IKLink {
  pub bone: i32,
  pub knee_dir: Vec3
}

impl StudioRecord for IKLink {
  const SIZE: usize = 28;
  const NAME: &'static str = "ik links";

  fn read(data: &[u8], offset: usize) -> MdlResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let bone = read.read_i32()?;
    let knee_dir = read.read_vec3()?;
    // unused0
    Ok(Self { bone, knee_dir })
  }
}

/// mstudioikchain_t
#[derive(Debug, Clone, PartialEq)]
pub struct IKChain {
  pub name: String,
  pub link_type: i32,
  pub links: Vec<IKLink>
}

impl StudioRecord for IKChain {
  const SIZE: usize = 16;
  const NAME: &'static str = "ik chains";

  fn read(data: &[u8], offset: usize) -> MdlResult<Self> {
    let mut read = RecordReader::new(data, offset);
    let name_offset = read.read_i32()?;
    let link_type = read.read_i32()?;
    let links_count = read.read_i32()?;
    let link_index = read.read_i32()?;
    Ok(Self {
      name: read.read_relative_string(name_offset)?.unwrap_or_default(),
      link_type,
      links: read_child_records(&read, links_count, link_index)?
    })
  }
}
