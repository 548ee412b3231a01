#[macro_use]
extern crate bitflags;

mod error;
mod record;
mod header;
mod body_part_header;
mod model_header;
mod model_lod_header;
mod mesh_header;
mod strip_group_header;
mod strip_header;
mod vertex;
mod material_replacement;
mod strip_file;

pub use self::error::{VtxError, VtxResult};
pub use self::record::VtxRecord;
pub use self::header::{Header, VTX_VERSION};
pub use self::body_part_header::BodyPartHeader;
pub use self::model_header::ModelHeader;
pub use self::model_lod_header::ModelLODHeader;
pub use self::mesh_header::{MeshHeader, MeshFlags};
pub use self::strip_group_header::{StripGroupHeader, StripGroupFlags};
pub use self::strip_header::{StripHeader, StripFlags};
pub use self::vertex::Vertex;
pub use self::material_replacement::{MaterialReplacement, MaterialReplacementList};
pub use self::strip_file::StripFile;

pub use io_util::VersionPolicy;
