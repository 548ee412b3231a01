use std::ops::RangeInclusive;

use io_util::{resolve, StringRead, VersionPolicy};
use log::{debug, warn};

use crate::header::STUDIO_ID;
use crate::record::read_records;
use crate::{
  AnimDesc,
  BodyPart,
  Bone,
  BoneController,
  Header,
  Header2,
  HitboxSet,
  IKChain,
  IncludeModel,
  MdlError,
  MdlResult,
  SequenceDesc,
  SkinTable,
  Texture,
  TextureDirectory
};

pub const SUPPORTED_VERSIONS: RangeInclusive<i32> = 44..=49;

/// Everything decoded from one `.mdl` buffer.
///
/// Holds no references into the source buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioModel {
  pub header: Header,
  pub header2: Option<Header2>,
  pub bones: Vec<Bone>,
  pub bone_controllers: Vec<BoneController>,
  pub hitbox_sets: Vec<HitboxSet>,
  pub animations: Vec<AnimDesc>,
  pub sequences: Vec<SequenceDesc>,
  pub textures: Vec<Texture>,
  pub texture_dirs: Vec<TextureDirectory>,
  pub include_models: Vec<IncludeModel>,
  pub body_parts: Vec<BodyPart>,
  pub ik_chains: Vec<IKChain>,
  pub skin_table: SkinTable,
  pub surface_prop: String,
  pub key_values: Option<String>,
  pub anim_block_name: Option<String>
}

impl StudioModel {
  pub fn read(data: &[u8]) -> MdlResult<Self> {
    Self::read_with(data, VersionPolicy::default())
  }

  pub fn read_with(data: &[u8], policy: VersionPolicy) -> MdlResult<Self> {
    let header = Header::read(data)?;
    check_version(&header, policy)?;

    let header2 = match resolve(0, header.studio_hdr2_index)? {
      Some(offset) => Some(Header2::read(data, offset)?),
      None => None
    };

    let file_relative = |count: i32, offset: i32| -> MdlResult<Option<usize>> {
      if count == 0 {
        Ok(None)
      } else {
        Ok(resolve(0, offset)?)
      }
    };

    let textures = read_records::<Texture>(data, file_relative(header.texture_count, header.texture_offset)?, header.texture_count)?;
    let texture_dirs = read_records::<TextureDirectory>(data, file_relative(header.texture_dir_count, header.texture_dir_offset)?, header.texture_dir_count)?;
    let include_models = read_records::<IncludeModel>(data, file_relative(header.include_model_count, header.include_model_offset)?, header.include_model_count)?;
    let body_parts = read_records::<BodyPart>(data, file_relative(header.body_part_count, header.body_part_offset)?, header.body_part_count)?;
    let bones = read_records::<Bone>(data, file_relative(header.bone_count, header.bone_offset)?, header.bone_count)?;
    validate_bone_parents(&bones)?;
    let bone_controllers = read_records::<BoneController>(data, file_relative(header.bone_controller_count, header.bone_controller_offset)?, header.bone_controller_count)?;
    let hitbox_sets = read_records::<HitboxSet>(data, file_relative(header.hitbox_set_count, header.hitbox_set_offset)?, header.hitbox_set_count)?;
    let animations = read_records::<AnimDesc>(data, file_relative(header.local_anim_count, header.local_anim_offset)?, header.local_anim_count)?;
    let sequences = read_records::<SequenceDesc>(data, file_relative(header.local_seq_count, header.local_seq_offset)?, header.local_seq_count)?;
    let ik_chains = read_records::<IKChain>(data, file_relative(header.ik_chain_count, header.ik_chain_offset)?, header.ik_chain_count)?;

    let skin_table = SkinTable::read(
      data,
      file_relative(header.skin_family_count, header.skin_offset)?,
      header.skin_reference_count,
      header.skin_family_count
    )?;

    let surface_prop = match resolve(0, header.surface_prop_index)? {
      Some(offset) => data.read_null_terminated_string(offset)?,
      None => String::new()
    };

    let key_values = match file_relative(header.key_value_size.max(0), header.key_value_index)? {
      Some(offset) => Some(data.read_fixed_length_null_terminated_string(offset, header.key_value_size as usize)?),
      None => None
    };

    let anim_block_name = match resolve(0, header.anim_block_name_index)? {
      Some(offset) => Some(data.read_null_terminated_string(offset)?),
      None => None
    };

    debug!(
      "Decoded studio model {}: {} bones, {} body parts, {} textures, {} animations, {} sequences",
      header.name,
      bones.len(),
      body_parts.len(),
      textures.len(),
      animations.len(),
      sequences.len()
    );

    Ok(Self {
      header,
      header2,
      bones,
      bone_controllers,
      hitbox_sets,
      animations,
      sequences,
      textures,
      texture_dirs,
      include_models,
      body_parts,
      ik_chains,
      skin_table,
      surface_prop,
      key_values,
      anim_block_name
    })
  }

  pub fn root_bones(&self) -> impl Iterator<Item = usize> + '_ {
    self.bones.iter().enumerate().filter(|(_, bone)| bone.is_root()).map(|(index, _)| index)
  }

  /// Number of ancestors of `bone`. Terminates because parents are validated while decoding.
  pub fn bone_depth(&self, bone: usize) -> Option<usize> {
    let mut current = self.bones.get(bone)?;
    let mut depth = 0;
    while !current.is_root() {
      current = &self.bones[current.parent as usize];
      depth += 1;
    }
    Some(depth)
  }

  pub fn bone_by_name(&self, name: &str) -> Option<usize> {
    self.bones.iter().position(|bone| bone.name == name)
  }
}

fn check_version(header: &Header, policy: VersionPolicy) -> MdlResult<()> {
  if header.id == STUDIO_ID && SUPPORTED_VERSIONS.contains(&header.version) {
    return Ok(());
  }
  match policy {
    VersionPolicy::Strict => Err(MdlError::UnsupportedVersion {
      id: header.id,
      version: header.version
    }),
    VersionPolicy::Lenient => {
      warn!("Unrecognized studio model id {:#010x} version {}, decoding anyway", header.id, header.version);
      Ok(())
    }
  }
}

/// Bones must form a forest: every parent is -1 or an in-range index and no chain loops.
pub(crate) fn validate_bone_parents(bones: &[Bone]) -> MdlResult<()> {
  for (index, bone) in bones.iter().enumerate() {
    if bone.parent != -1 && (bone.parent < 0 || bone.parent as usize >= bones.len()) {
      return Err(MdlError::InvalidBoneParent {
        bone: index,
        parent: bone.parent
      });
    }
  }

  #[derive(Clone, Copy, PartialEq)]
  enum Visit {
    New,
    InProgress,
    Done
  }

  let mut visits = vec![Visit::New; bones.len()];
  let mut path = Vec::<usize>::new();
  for start in 0..bones.len() {
    path.clear();
    let mut current = start;
    loop {
      match visits[current] {
        Visit::Done => break,
        Visit::InProgress => {
          return Err(MdlError::InvalidBoneParent {
            bone: current,
            parent: bones[current].parent
          })
        }
        Visit::New => {}
      }
      visits[current] = Visit::InProgress;
      path.push(current);
      if bones[current].is_root() {
        break;
      }
      current = bones[current].parent as usize;
    }
    for &bone in &path {
      visits[bone] = Visit::Done;
    }
  }
  Ok(())
}
