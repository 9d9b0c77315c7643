/// Trailing cursor ring that eases toward the pointer each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorTrail {
    pub pointer: (f64, f64),
    pub ring: (f64, f64),
}

impl CursorTrail {
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    /// Move the ring `factor` of the way to the pointer.
    pub fn step(&mut self, factor: f64) -> (f64, f64) {
        self.ring.0 += (self.pointer.0 - self.ring.0) * factor;
        self.ring.1 += (self.pointer.1 - self.ring.1) * factor;
        self.ring
    }
}

pub fn enabled(has_elements: bool, viewport_w: f64, min_width: f64) -> bool {
    has_elements && viewport_w >= min_width
}
