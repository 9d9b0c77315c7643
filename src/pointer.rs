/// Last known pointer offset from the viewport centre, in CSS pixels.
///
/// Written by the pointer-move handler, read (never reset) by the frame
/// update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    pub fn from_client(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> Self {
        Self {
            x: client_x - viewport_w / 2.0,
            y: client_y - viewport_h / 2.0,
        }
    }
}
