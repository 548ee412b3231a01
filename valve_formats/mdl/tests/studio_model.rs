use io_util::ReadError;
use studiomodel_mdl::{Header, MdlError, StudioModel, VersionPolicy, STUDIO_ID};

const BONES: usize = 408;
const BODY_PART: usize = BONES + 2 * 216;
const MODEL: usize = BODY_PART + 16;
const MESH: usize = MODEL + 148;
const TEXTURE: usize = MESH + 116;
const SKIN_TABLE: usize = TEXTURE + 64;
const STRINGS: usize = 1200;
const HEADER2: usize = 1300;
const BONE_CONTROLLER: usize = 1700;
const HITBOX_SET: usize = BONE_CONTROLLER + 56;
const HITBOX: usize = HITBOX_SET + 12;
const ANIM: usize = HITBOX + 68;
const MOVEMENT: usize = ANIM + 100;
const SEQUENCE: usize = MOVEMENT + 44;
const IK_CHAIN: usize = SEQUENCE + 212;
const IK_LINK: usize = IK_CHAIN + 16;
const INCLUDE_MODEL: usize = IK_LINK + 28;
const TEXTURE_DIR: usize = INCLUDE_MODEL + 8;
const NAMES: usize = 2300;
const KEY_VALUES: usize = 2620;
const ANIM_BLOCK_NAME: usize = 2660;
const FILE_SIZE: usize = 2700;

struct Bytes(Vec<u8>);

impl Bytes {
  fn new(len: usize) -> Self {
    Self(vec![0u8; len])
  }

  fn i32(&mut self, offset: usize, value: i32) -> &mut Self {
    self.0[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    self
  }

  fn f32(&mut self, offset: usize, value: f32) -> &mut Self {
    self.0[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    self
  }

  fn u16(&mut self, offset: usize, value: u16) -> &mut Self {
    self.0[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
    self
  }

  fn str(&mut self, offset: usize, value: &str) -> &mut Self {
    self.0[offset..offset + value.len()].copy_from_slice(value.as_bytes());
    self.0[offset + value.len()] = 0;
    self
  }

  /// Record-relative offset from `record` to `target`.
  fn rel(&mut self, offset: usize, record: usize, target: usize) -> &mut Self {
    self.i32(offset, target as i32 - record as i32)
  }
}

fn header_only() -> Bytes {
  let mut bytes = Bytes::new(Header::SIZE);
  bytes.i32(0, STUDIO_ID).i32(4, 48).i32(8, 0x1234).str(12, "empty");
  bytes
}

/// Two bones, one body part with one model and one mesh, one texture and two skin families,
/// plus one record of every other lump.
fn character() -> Bytes {
  let mut bytes = Bytes::new(FILE_SIZE);
  bytes.i32(0, STUDIO_ID).i32(4, 48).i32(8, 0x1234).str(12, "character");

  bytes.i32(156, 2).i32(160, BONES as i32);
  bytes.i32(204, 1).i32(208, TEXTURE as i32);
  bytes.i32(220, 1).i32(224, 2).i32(228, SKIN_TABLE as i32);
  bytes.i32(232, 1).i32(236, BODY_PART as i32);
  bytes.i32(308, (STRINGS + 40) as i32);
  bytes.i32(400, HEADER2 as i32);

  let root = BONES;
  let child = BONES + 216;
  bytes.rel(root, root, STRINGS).i32(root + 4, -1);
  bytes.rel(child, child, STRINGS + 8).i32(child + 4, 0);

  bytes.rel(BODY_PART, BODY_PART, STRINGS + 16).i32(BODY_PART + 4, 1).i32(BODY_PART + 8, 1);
  bytes.rel(BODY_PART + 12, BODY_PART, MODEL);

  bytes.str(MODEL, "body_reference").i32(MODEL + 72, 1).rel(MODEL + 76, MODEL, MESH);
  bytes.i32(MODEL + 80, 3);

  bytes.i32(MESH, 0).i32(MESH + 8, 3).i32(MESH + 12, 0);
  // lod vertex counts follow the center and the runtime pointer
  bytes.i32(MESH + 52, 3);

  bytes.rel(TEXTURE, TEXTURE, STRINGS + 24);

  bytes.u16(SKIN_TABLE, 0).u16(SKIN_TABLE + 2, 0);

  bytes.str(STRINGS, "root").str(STRINGS + 8, "child").str(STRINGS + 16, "body");
  bytes.str(STRINGS + 24, "skin_diffuse").str(STRINGS + 40, "flesh");

  bytes.f32(HEADER2 + 12, 0.5).i32(HEADER2 + 16, 4);
  bytes.i32(HEADER2 + 20, 280).str(HEADER2 + 280, "models/long_character_name");

  bytes.i32(164, 1).i32(168, BONE_CONTROLLER as i32);
  bytes.i32(172, 1).i32(176, HITBOX_SET as i32);
  bytes.i32(180, 1).i32(184, ANIM as i32);
  bytes.i32(188, 1).i32(192, SEQUENCE as i32);
  bytes.i32(212, 1).i32(216, TEXTURE_DIR as i32);
  bytes.i32(284, 1).i32(288, IK_CHAIN as i32);
  bytes.i32(312, KEY_VALUES as i32).i32(316, 20);
  bytes.i32(336, 1).i32(340, INCLUDE_MODEL as i32);
  bytes.i32(348, ANIM_BLOCK_NAME as i32);

  bytes.i32(BONE_CONTROLLER, 1).i32(BONE_CONTROLLER + 4, 2);
  bytes.f32(BONE_CONTROLLER + 8, -45.0).f32(BONE_CONTROLLER + 12, 45.0);
  bytes.i32(BONE_CONTROLLER + 16, 0).i32(BONE_CONTROLLER + 20, 3);

  bytes.rel(HITBOX_SET, HITBOX_SET, NAMES).i32(HITBOX_SET + 4, 1).rel(HITBOX_SET + 8, HITBOX_SET, HITBOX);
  bytes.i32(HITBOX, 1).i32(HITBOX + 4, 2);
  bytes.f32(HITBOX + 8, -1.0).f32(HITBOX + 20, 1.0);
  bytes.rel(HITBOX + 32, HITBOX, NAMES + 32);

  bytes.rel(ANIM + 4, ANIM, NAMES + 64).f32(ANIM + 8, 30.0).i32(ANIM + 16, 24);
  bytes.i32(ANIM + 20, 1).rel(ANIM + 24, ANIM, MOVEMENT);
  bytes.i32(MOVEMENT, 23).i32(MOVEMENT + 4, 1).f32(MOVEMENT + 32, 64.0);

  bytes.rel(SEQUENCE + 4, SEQUENCE, NAMES + 96).rel(SEQUENCE + 8, SEQUENCE, NAMES + 128);
  bytes.i32(SEQUENCE + 16, 1).i32(SEQUENCE + 20, 1).f32(SEQUENCE + 44, 16.0);

  bytes.rel(IK_CHAIN, IK_CHAIN, NAMES + 160).i32(IK_CHAIN + 8, 1).rel(IK_CHAIN + 12, IK_CHAIN, IK_LINK);
  bytes.i32(IK_LINK, 1).f32(IK_LINK + 12, 1.0);

  bytes.rel(INCLUDE_MODEL, INCLUDE_MODEL, NAMES + 192).rel(INCLUDE_MODEL + 4, INCLUDE_MODEL, NAMES + 224);
  // texture directories point at file-relative strings
  bytes.i32(TEXTURE_DIR, (NAMES + 256) as i32);

  bytes.str(NAMES, "default").str(NAMES + 32, "head").str(NAMES + 64, "@idle");
  bytes.str(NAMES + 96, "idle").str(NAMES + 128, "ACT_IDLE").str(NAMES + 160, "left_leg");
  bytes.str(NAMES + 192, "anims").str(NAMES + 224, "models/character_anims.mdl");
  bytes.str(NAMES + 256, "models/character/");
  bytes.str(KEY_VALUES, "mdlkeyvalue{prop}");
  bytes.str(ANIM_BLOCK_NAME, "models/character_blocks.ani");
  bytes
}

#[test]
fn test_header_only_model() {
  let model = StudioModel::read(&header_only().0).unwrap();
  assert_eq!(model.header.name, "empty");
  assert_eq!(model.header.checksum, 0x1234);
  assert!(model.header2.is_none());
  assert!(model.bones.is_empty());
  assert!(model.body_parts.is_empty());
  assert!(model.textures.is_empty());
  assert_eq!(model.skin_table.family_count(), 0);
  assert_eq!(model.surface_prop, "");
  assert_eq!(model.key_values, None);
}

#[test]
fn test_truncated_header() {
  let mut bytes = header_only();
  bytes.0.truncate(Header::SIZE - 1);
  assert!(matches!(StudioModel::read(&bytes.0), Err(MdlError::Read(ReadError::Bounds { .. }))));
}

#[test]
fn test_character() {
  let model = StudioModel::read(&character().0).unwrap();

  assert_eq!(model.bones.len(), 2);
  assert_eq!(model.bones[0].name, "root");
  assert_eq!(model.bones[0].parent, -1);
  assert_eq!(model.bones[1].name, "child");
  assert_eq!(model.bones[1].parent, 0);
  assert_eq!(model.root_bones().collect::<Vec<_>>(), vec![0]);
  assert_eq!(model.bone_depth(1), Some(1));
  assert_eq!(model.bone_depth(2), None);
  assert_eq!(model.bone_by_name("child"), Some(1));

  assert_eq!(model.body_parts.len(), 1);
  let body_part = &model.body_parts[0];
  assert_eq!(body_part.name, "body");
  assert_eq!(body_part.models.len(), 1);
  let studio_model = &body_part.models[0];
  assert_eq!(studio_model.name, "body_reference");
  assert_eq!(studio_model.vertices_count, 3);
  assert_eq!(studio_model.meshes.len(), 1);
  assert_eq!(studio_model.meshes[0].vertices_count, 3);
  assert_eq!(studio_model.meshes[0].vertex_data.lod_vertices[0], 3);

  assert_eq!(model.textures.len(), 1);
  assert_eq!(model.textures[0].name, "skin_diffuse");
  assert_eq!(model.skin_table.family_count(), 2);
  assert!(model.skin_table.families().all(|row| row.len() == 1));

  assert_eq!(model.surface_prop, "flesh");
  let header2 = model.header2.as_ref().unwrap();
  assert_eq!(header2.name.as_deref(), Some("models/long_character_name"));
  assert_eq!(header2.max_eye_deflection, 0.5);
  assert_eq!(header2.linear_bone_index, 4);
}

#[test]
fn test_every_lump_matches_its_count() {
  let model = StudioModel::read(&character().0).unwrap();
  let header = &model.header;
  assert_eq!(model.bones.len(), header.bone_count as usize);
  assert_eq!(model.bone_controllers.len(), header.bone_controller_count as usize);
  assert_eq!(model.hitbox_sets.len(), header.hitbox_set_count as usize);
  assert_eq!(model.animations.len(), header.local_anim_count as usize);
  assert_eq!(model.sequences.len(), header.local_seq_count as usize);
  assert_eq!(model.textures.len(), header.texture_count as usize);
  assert_eq!(model.texture_dirs.len(), header.texture_dir_count as usize);
  assert_eq!(model.include_models.len(), header.include_model_count as usize);
  assert_eq!(model.body_parts.len(), header.body_part_count as usize);
  assert_eq!(model.ik_chains.len(), header.ik_chain_count as usize);
  assert_eq!(model.skin_table.family_count(), header.skin_family_count as usize);
}

#[test]
fn test_bone_controller() {
  let model = StudioModel::read(&character().0).unwrap();
  let controller = &model.bone_controllers[0];
  assert_eq!(controller.bone, 1);
  assert_eq!(controller.bone_controller_type, 2);
  assert_eq!(controller.start, -45.0);
  assert_eq!(controller.end, 45.0);
  assert_eq!(controller.input_field, 3);
}

#[test]
fn test_hitboxes() {
  let model = StudioModel::read(&character().0).unwrap();
  let set = &model.hitbox_sets[0];
  assert_eq!(set.name, "default");
  assert_eq!(set.hitboxes.len(), 1);
  let hitbox = &set.hitboxes[0];
  assert_eq!(hitbox.bone, 1);
  assert_eq!(hitbox.group, 2);
  assert_eq!(hitbox.bb_min.x, -1.0);
  assert_eq!(hitbox.bb_max.x, 1.0);
  assert_eq!(hitbox.name.as_deref(), Some("head"));
}

#[test]
fn test_animation_with_movement() {
  let model = StudioModel::read(&character().0).unwrap();
  let animation = &model.animations[0];
  assert_eq!(animation.name, "@idle");
  assert_eq!(animation.fps, 30.0);
  assert_eq!(animation.frames_count, 24);
  assert_eq!(animation.movements.len(), 1);
  assert_eq!(animation.movements[0].end_frame, 23);
  assert_eq!(animation.movements[0].motion_flags, 1);
  assert_eq!(animation.movements[0].position.x, 64.0);
}

#[test]
fn test_sequence() {
  let model = StudioModel::read(&character().0).unwrap();
  let sequence = &model.sequences[0];
  assert_eq!(sequence.label, "idle");
  assert_eq!(sequence.activity_name, "ACT_IDLE");
  assert_eq!(sequence.activity, 1);
  assert_eq!(sequence.activity_weight, 1);
  assert_eq!(sequence.bb_max.x, 16.0);
}

#[test]
fn test_ik_chain() {
  let model = StudioModel::read(&character().0).unwrap();
  let chain = &model.ik_chains[0];
  assert_eq!(chain.name, "left_leg");
  assert_eq!(chain.links.len(), 1);
  assert_eq!(chain.links[0].bone, 1);
  assert_eq!(chain.links[0].knee_dir.z, 1.0);
}

#[test]
fn test_include_models_and_texture_dirs() {
  let model = StudioModel::read(&character().0).unwrap();
  assert_eq!(model.include_models[0].label, "anims");
  assert_eq!(model.include_models[0].name, "models/character_anims.mdl");
  assert_eq!(model.texture_dirs[0].path, "models/character/");
}

#[test]
fn test_key_values_and_anim_block_name() {
  let model = StudioModel::read(&character().0).unwrap();
  assert_eq!(model.key_values.as_deref(), Some("mdlkeyvalue{prop}"));
  assert_eq!(model.anim_block_name.as_deref(), Some("models/character_blocks.ani"));
}

#[test]
fn test_ik_links_past_end() {
  let mut bytes = character();
  bytes.i32(IK_CHAIN + 8, 1000);
  assert!(matches!(
    StudioModel::read(&bytes.0),
    Err(MdlError::Read(ReadError::MalformedCount { what: "ik links", .. }))
  ));
}

#[test]
fn test_zero_width_skin_rows() {
  let mut bytes = header_only();
  bytes.i32(220, 0).i32(224, i32::MAX).i32(228, Header::SIZE as i32 - 4);
  let model = StudioModel::read(&bytes.0).unwrap();
  assert_eq!(model.skin_table.family_count(), 0);
  assert_eq!(model.skin_table.families().len(), 0);
}

#[test]
fn test_truncated_secondary_header() {
  let mut bytes = character();
  bytes.0.truncate(HEADER2 + 100);
  assert!(matches!(
    StudioModel::read(&bytes.0),
    Err(MdlError::Read(ReadError::Bounds { offset, .. })) if offset == HEADER2 as i64
  ));
}

#[test]
fn test_decoding_is_deterministic() {
  let bytes = character();
  assert_eq!(StudioModel::read(&bytes.0).unwrap(), StudioModel::read(&bytes.0).unwrap());
}

#[test]
fn test_unsupported_version() {
  let mut bytes = header_only();
  bytes.i32(4, 37);
  assert_eq!(
    StudioModel::read(&bytes.0),
    Err(MdlError::UnsupportedVersion { id: STUDIO_ID, version: 37 })
  );
  let model = StudioModel::read_with(&bytes.0, VersionPolicy::Lenient).unwrap();
  assert_eq!(model.header.version, 37);
}

#[test]
fn test_wrong_magic() {
  let mut bytes = header_only();
  bytes.i32(0, 0x50534449);
  assert!(matches!(StudioModel::read(&bytes.0), Err(MdlError::UnsupportedVersion { .. })));
}

#[test]
fn test_bone_parent_out_of_range() {
  let mut bytes = character();
  bytes.i32(BONES + 216 + 4, 2);
  assert_eq!(StudioModel::read(&bytes.0), Err(MdlError::InvalidBoneParent { bone: 1, parent: 2 }));
}

#[test]
fn test_bone_cycle() {
  let mut bytes = character();
  bytes.i32(BONES + 4, 1);
  assert!(matches!(StudioModel::read(&bytes.0), Err(MdlError::InvalidBoneParent { .. })));
}

#[test]
fn test_huge_mesh_count() {
  let mut bytes = character();
  bytes.i32(MODEL + 72, 0x00ff_ffff);
  assert!(matches!(
    StudioModel::read(&bytes.0),
    Err(MdlError::Read(ReadError::MalformedCount { what: "meshes", .. }))
  ));
}

#[test]
fn test_count_without_offset() {
  let mut bytes = header_only();
  bytes.i32(232, 1);
  assert!(matches!(
    StudioModel::read(&bytes.0),
    Err(MdlError::Read(ReadError::MalformedCount { what: "body parts", .. }))
  ));
}

#[test]
fn test_lump_past_end() {
  let mut bytes = header_only();
  bytes.i32(156, 1).i32(160, Header::SIZE as i32);
  assert!(matches!(StudioModel::read(&bytes.0), Err(MdlError::Read(ReadError::Bounds { .. }))));
}
