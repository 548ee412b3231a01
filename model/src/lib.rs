mod error;
mod options;
mod vertex;
mod weights;
mod descriptor;
mod geometry;

pub use self::error::{ModelError, ModelResult};
pub use self::options::DecodeOptions;
pub use self::vertex::{BoneWeight, SkinnedVertex};
pub use self::weights::{bone_weight_distribution, unselectable_bones, BoneShare};
pub use self::descriptor::ModelDescriptor;
pub use self::geometry::MeshDraw;

pub use io_util::VersionPolicy;
pub use studiomodel_mdl as mdl;
pub use studiomodel_vtx as vtx;
