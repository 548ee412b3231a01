use log::trace;
use studiomodel_vtx::{StripFlags, StripGroupHeader};

use crate::descriptor::mesh_vertex_bounds;
use crate::{ModelDescriptor, ModelError, ModelResult};

/// Triangle list of one studio mesh at one LOD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshDraw {
  pub body_part: usize,
  pub model: usize,
  pub mesh: usize,
  pub texture: Option<u16>,
  /// Indices into [`ModelDescriptor::vertices`].
  pub indices: Vec<u32>
}

impl ModelDescriptor {
  /// Resolves every strip of `lod` into triangles over the studio vertex buffer.
  ///
  /// `vtx_data` must be the buffer the strip file was decoded from. Models without
  /// that LOD contribute nothing.
  pub fn lod_draws(&self, vtx_data: &[u8], lod: usize, skin: usize) -> ModelResult<Vec<MeshDraw>> {
    let mut draws = Vec::new();
    for (body_part_index, (studio_body_part, render_body_part)) in self.studio.body_parts.iter().zip(&self.strips.body_parts).enumerate() {
      for (model_index, (studio_model, render_model)) in studio_body_part.models.iter().zip(&render_body_part.models).enumerate() {
        let Some(render_lod) = render_model.lods.get(lod) else {
          continue;
        };
        for (mesh_index, (studio_mesh, render_mesh)) in studio_model.meshes.iter().zip(&render_lod.meshes).enumerate() {
          let (vertex_start, _) = mesh_vertex_bounds(studio_model, studio_mesh);
          let mut indices = Vec::new();
          for strip_group in &render_mesh.strip_groups {
            self.append_strip_group(vtx_data, strip_group, vertex_start, &mut indices)?;
          }
          trace!("LOD {} mesh {}/{}/{}: {} indices", lod, body_part_index, model_index, mesh_index, indices.len());
          draws.push(MeshDraw {
            body_part: body_part_index,
            model: model_index,
            mesh: mesh_index,
            texture: self.material_for(skin, studio_mesh),
            indices
          });
        }
      }
    }
    Ok(draws)
  }

  fn append_strip_group(&self, vtx_data: &[u8], strip_group: &StripGroupHeader, vertex_start: i64, indices: &mut Vec<u32>) -> ModelResult<()> {
    let group_vertices = strip_group.read_vertices(vtx_data)?;
    let group_indices = strip_group.read_indices(vtx_data)?;

    let resolve = |group_index: u16| -> ModelResult<u32> {
      let vertex = group_vertices.get(group_index as usize).ok_or(ModelError::VertexOutOfRange {
        index: group_index as i64,
        len: group_vertices.len()
      })?;
      let index = vertex_start + vertex.orig_mesh_vert_id as i64;
      if index < 0 || index >= self.vertices.len() as i64 {
        return Err(ModelError::VertexOutOfRange {
          index,
          len: self.vertices.len()
        });
      }
      Ok(index as u32)
    };

    for strip in &strip_group.strips {
      let strip_indices = strip
        .index_range()
        .and_then(|range| group_indices.get(range))
        .ok_or(ModelError::VertexOutOfRange {
          index: strip.index_offset as i64 + strip.indices_count as i64,
          len: group_indices.len()
        })?;

      if strip.flags.contains(StripFlags::IS_TRI_STRIP) {
        for (triangle, window) in strip_indices.windows(3).enumerate() {
          if window[0] == window[1] || window[1] == window[2] || window[0] == window[2] {
            continue;
          }
          let (a, b) = if triangle % 2 == 0 { (window[0], window[1]) } else { (window[1], window[0]) };
          indices.push(resolve(a)?);
          indices.push(resolve(b)?);
          indices.push(resolve(window[2])?);
        }
      } else {
        for &group_index in strip_indices {
          indices.push(resolve(group_index)?);
        }
      }
    }
    Ok(())
  }
}
