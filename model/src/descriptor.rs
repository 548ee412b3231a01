use std::ops::Range;

use log::debug;
use studiomodel_mdl::{Mesh, Model, StudioModel, Texture};
use studiomodel_vtx::StripFile;

use crate::{DecodeOptions, ModelError, ModelResult, SkinnedVertex};

/// A studio model joined with its strip file and vertex buffer.
///
/// Body parts, models and meshes of the two files are matched by position.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDescriptor {
  pub studio: StudioModel,
  pub strips: StripFile,
  pub vertices: Vec<SkinnedVertex>
}

impl ModelDescriptor {
  pub fn decode(mdl_data: &[u8], vtx_data: &[u8], vertices: Vec<SkinnedVertex>, options: &DecodeOptions) -> ModelResult<Self> {
    let studio = StudioModel::read_with(mdl_data, options.version_policy)?;
    let strips = StripFile::read_with(vtx_data, options.version_policy)?;
    Self::assemble(studio, strips, vertices, options)
  }

  pub fn assemble(studio: StudioModel, strips: StripFile, vertices: Vec<SkinnedVertex>, options: &DecodeOptions) -> ModelResult<Self> {
    if options.verify_checksums && studio.header.checksum != strips.header.checksum {
      return Err(ModelError::ChecksumMismatch {
        studio: studio.header.checksum,
        render: strips.header.checksum
      });
    }
    check_counts(&studio, &strips)?;
    if options.validate_vertex_ranges {
      check_vertex_ranges(&studio, vertices.len())?;
    }

    debug!(
      "Assembled model {}: {} body parts, {} LODs, {} vertices, {} skins",
      studio.header.name,
      studio.body_parts.len(),
      strips.lod_count(),
      vertices.len(),
      studio.skin_table.family_count()
    );

    Ok(Self {
      studio,
      strips,
      vertices
    })
  }

  pub fn skin_count(&self) -> usize {
    self.studio.skin_table.family_count()
  }

  /// Texture index used by `mesh` when skin family `skin` is active.
  pub fn material_for(&self, skin: usize, mesh: &Mesh) -> Option<u16> {
    let material = usize::try_from(mesh.material).ok()?;
    let skin_table = &self.studio.skin_table;
    if skin_table.family_count() == 0 {
      return u16::try_from(material).ok().filter(|&index| (index as usize) < self.studio.textures.len());
    }
    skin_table.texture_index(skin, material)
  }

  pub fn texture_for(&self, skin: usize, mesh: &Mesh) -> Option<&Texture> {
    self.studio.textures.get(self.material_for(skin, mesh)? as usize)
  }

  /// Range of `mesh`'s vertices inside [`ModelDescriptor::vertices`].
  pub fn mesh_vertex_range(&self, model: &Model, mesh: &Mesh) -> Option<Range<usize>> {
    let (start, end) = mesh_vertex_bounds(model, mesh);
    let range = usize::try_from(start).ok()?..usize::try_from(end).ok()?;
    (range.start <= range.end && range.end <= self.vertices.len()).then_some(range)
  }

  pub fn mesh_vertices(&self, model: &Model, mesh: &Mesh) -> Option<&[SkinnedVertex]> {
    self.mesh_vertex_range(model, mesh).map(|range| &self.vertices[range])
  }
}

/// First vertex of `mesh` and one past its last, as indices into the vertex buffer.
pub(crate) fn mesh_vertex_bounds(model: &Model, mesh: &Mesh) -> (i64, i64) {
  let start = model.vertex_index as i64 / SkinnedVertex::SIZE as i64 + mesh.vertex_offset as i64;
  (start, start + mesh.vertices_count as i64)
}

fn check_count(what: &'static str, studio: usize, render: usize) -> ModelResult<()> {
  if studio != render {
    return Err(ModelError::CrossReference { what, studio, render });
  }
  Ok(())
}

fn check_counts(studio: &StudioModel, strips: &StripFile) -> ModelResult<()> {
  check_count("body part", studio.body_parts.len(), strips.body_parts.len())?;
  for (studio_body_part, render_body_part) in studio.body_parts.iter().zip(&strips.body_parts) {
    check_count("model", studio_body_part.models.len(), render_body_part.models.len())?;
    for (studio_model, render_model) in studio_body_part.models.iter().zip(&render_body_part.models) {
      for lod in &render_model.lods {
        check_count("mesh", studio_model.meshes.len(), lod.meshes.len())?;
      }
    }
  }
  Ok(())
}

fn check_vertex_ranges(studio: &StudioModel, len: usize) -> ModelResult<()> {
  for (body_part_index, body_part) in studio.body_parts.iter().enumerate() {
    for (model_index, model) in body_part.models.iter().enumerate() {
      for (mesh_index, mesh) in model.meshes.iter().enumerate() {
        let (start, end) = mesh_vertex_bounds(model, mesh);
        if start < 0 || end < start || end > len as i64 {
          return Err(ModelError::VertexRange {
            body_part: body_part_index,
            model: model_index,
            mesh: mesh_index,
            start,
            end,
            len
          });
        }
      }
    }
  }
  Ok(())
}
