use bevy_math::{Vec2, Vec3};

/// Up to three bone influences of one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoneWeight {
  pub weight: [f32; 3],
  pub bone: [i8; 3],
  pub bones_count: u8
}

impl BoneWeight {
  /// Bone with the largest positive weight, if any.
  pub fn dominant(&self) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for slot in 0..(self.bones_count as usize).min(3) {
      let weight = self.weight[slot];
      let bone = self.bone[slot];
      if bone < 0 || weight <= best.map_or(0f32, |(_, max)| max) {
        continue;
      }
      best = Some((bone as usize, weight));
    }
    best
  }
}

/// A skinned vertex as produced by the vertex file decoder.
///
/// Studio models address these through `Model::vertex_index`, which counts bytes
/// of this layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SkinnedVertex {
  pub bone_weights: BoneWeight,
  pub position: Vec3,
  pub normal: Vec3,
  pub tex_coord: Vec2
}

impl SkinnedVertex {
  pub const SIZE: usize = 48;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_dominant_bone() {
    let weights = BoneWeight {
      weight: [0.25, 0.6, 0.15],
      bone: [3, 7, 1],
      bones_count: 3
    };
    assert_eq!(weights.dominant(), Some((7, 0.6)));
  }

  #[test]
  fn test_dominant_ignores_unused_slots() {
    let weights = BoneWeight {
      weight: [0.4, 0.6, 0.0],
      bone: [2, 5, 0],
      bones_count: 1
    };
    assert_eq!(weights.dominant(), Some((2, 0.4)));
    assert_eq!(BoneWeight::default().dominant(), None);
  }
}
