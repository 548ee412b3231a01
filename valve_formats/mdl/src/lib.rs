#[macro_use]
extern crate bitflags;

mod error;
mod read_util;
mod record;
mod header;
mod header2;
mod texture;
mod include_model;
mod skin_table;
mod bone;
mod bone_controller;
mod hitbox_set;
mod ik_chain;
mod anim_desc;
mod sequence_desc;
mod model_file;
mod body_part;
mod model;
mod mesh;

pub use self::error::{MdlError, MdlResult};
pub use self::record::StudioRecord;
pub use self::header::{Header, StudioHDRFlags, STUDIO_ID};
pub use self::header2::Header2;
pub use self::texture::{Texture, TextureDirectory};
pub use self::include_model::IncludeModel;
pub use self::skin_table::SkinTable;
pub use self::bone::Bone;
pub use self::bone_controller::BoneController;
pub use self::hitbox_set::{Hitbox, HitboxSet};
pub use self::ik_chain::{IKChain, IKLink};
pub use self::anim_desc::{AnimDesc, Movement, UndecodedAnimData};
pub use self::sequence_desc::{SequenceDesc, UndecodedSequenceData};
pub use self::model_file::{StudioModel, SUPPORTED_VERSIONS};
pub use self::body_part::BodyPart;
pub use self::model::Model;
pub use self::mesh::{Mesh, MeshVertexData, MAX_NUM_LODS};

pub use io_util::VersionPolicy;
