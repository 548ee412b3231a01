use io_util::{resolve, VersionPolicy};
use log::{debug, warn};

use crate::header::VTX_VERSION;
use crate::record::read_records;
use crate::{BodyPartHeader, Header, MaterialReplacementList, VtxError, VtxResult};

/// The render hierarchy decoded from one `.vtx` buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct StripFile {
  pub header: Header,
  pub body_parts: Vec<BodyPartHeader>,
  /// One list per LOD. Empty when the file has no replacement table.
  pub material_replacements: Vec<MaterialReplacementList>
}

impl StripFile {
  pub fn read(data: &[u8]) -> VtxResult<Self> {
    Self::read_with(data, VersionPolicy::default())
  }

  pub fn read_with(data: &[u8], policy: VersionPolicy) -> VtxResult<Self> {
    let header = Header::read(data)?;
    if header.version != VTX_VERSION {
      match policy {
        VersionPolicy::Strict => return Err(VtxError::UnsupportedVersion { version: header.version }),
        VersionPolicy::Lenient => warn!("Unrecognized strip file version {}, decoding anyway", header.version)
      }
    }

    let body_parts_start = if header.body_parts_count > 0 { resolve(0, header.body_parts_offset)? } else { None };
    let body_parts = read_records::<BodyPartHeader>(data, body_parts_start, header.body_parts_count)?;

    let material_replacements = match resolve(0, header.material_replacement_list_offset)? {
      Some(start) => read_records::<MaterialReplacementList>(data, Some(start), header.lods_count)?,
      None => Vec::new()
    };

    debug!(
      "Decoded strip file: {} body parts, {} LODs, checksum {}",
      body_parts.len(),
      header.lods_count,
      header.checksum
    );

    Ok(Self {
      header,
      body_parts,
      material_replacements
    })
  }

  pub fn lod_count(&self) -> usize {
    self.header.lods_count.max(0) as usize
  }
}
