use glam::Vec2;

/// Speed helpers for velocity vectors
pub trait Magnitude {
    /// Euclidean norm
    fn magnitude(&self) -> f32;

    /// Scale to `new_magnitude` keeping direction. A zero vector has no
    /// direction, so it is left untouched and `false` is returned.
    fn rescale_magnitude(&mut self, new_magnitude: f32) -> bool;
}

impl Magnitude for Vec2 {
    fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    fn rescale_magnitude(&mut self, new_magnitude: f32) -> bool {
        let current = self.magnitude();
        if current == 0.0 || !current.is_finite() {
            return false;
        }
        *self *= new_magnitude / current;
        true
    }
}
