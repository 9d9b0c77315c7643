use glam::Vec3;

/// Static set of point positions rendered as the background.
///
/// Positions are fixed at construction; only the aggregate rotation changes.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
}

impl ParticleField {
    /// Sample `count` points uniformly from a cube of side `extent` centred
    /// on the origin.
    pub fn generate(count: usize, extent: f32, rng: &mut fastrand::Rng) -> Self {
        let mut sample = || (rng.f32() - 0.5) * extent;
        let positions = (0..count)
            .map(|_| Vec3::new(sample(), sample(), sample()))
            .collect();
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Interleaved `x, y, z` for vertex buffer upload.
    pub fn to_flat(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| p.to_array()).collect()
    }
}
