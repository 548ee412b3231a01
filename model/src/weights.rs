use crate::SkinnedVertex;

/// How much of a vertex buffer a bone dominates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoneShare {
  /// Vertices whose largest weight belongs to this bone.
  pub vertex_count: usize,
  /// Sum of those largest weights.
  pub total_weight: f32,
  /// `total_weight` divided by the sum over all bones.
  pub share: f32
}

/// Attributes every vertex to its dominant bone and returns one entry per bone
/// index up to the highest dominant bone.
pub fn bone_weight_distribution(vertices: &[SkinnedVertex]) -> Vec<BoneShare> {
  let mut shares = Vec::<BoneShare>::new();
  let mut overall_weight = 0f32;
  for vertex in vertices {
    let Some((bone, weight)) = vertex.bone_weights.dominant() else {
      continue;
    };
    if bone >= shares.len() {
      shares.resize(bone + 1, BoneShare::default());
    }
    let entry = &mut shares[bone];
    entry.vertex_count += 1;
    entry.total_weight += weight;
    overall_weight += weight;
  }

  if overall_weight > 0f32 {
    for entry in &mut shares {
      entry.share = entry.total_weight / overall_weight;
    }
  }
  shares
}

/// Bones in `0..bone_count` that dominate no vertex at all.
pub fn unselectable_bones(distribution: &[BoneShare], bone_count: usize) -> Vec<usize> {
  (0..bone_count)
    .filter(|&bone| distribution.get(bone).map_or(true, |entry| entry.share == 0f32))
    .collect()
}
