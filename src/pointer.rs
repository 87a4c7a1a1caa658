/// Last observed pointer position, normalized to `[-1, 1]` per axis.
///
/// `-1` is the left/top edge of the viewport and `1` the right/bottom edge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub mouse_x: f64,
    pub mouse_y: f64,
}

impl PointerState {
    /// Record a pointer event at client coordinates `(x, y)` in a viewport of
    /// `width × height`. Earlier positions are discarded. An axis with a zero
    /// extent keeps its previous value.
    pub fn update(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if let Some(nx) = normalize(x, width) {
            self.mouse_x = nx;
        }
        if let Some(ny) = normalize(y, height) {
            self.mouse_y = ny;
        }
    }
}

/// Map `0..=extent` onto `-1..=1`.
pub fn normalize(coord: f64, extent: f64) -> Option<f64> {
    (extent > 0.0).then(|| (coord / extent) * 2.0 - 1.0)
}
