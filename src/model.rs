//! Overlay transform model.
//! The translate/scale/rotate state applied to the traced image, plus the
//! pure update functions every gesture and control call funnels through.


pub const MIN_SCALE: f64 = 0.1;
pub const MAX_SCALE: f64 = 5.0;
/// Wheel step when scrolling up (deltaY <= 0).
pub const WHEEL_ZOOM_IN: f64 = 1.1;
/// Wheel step when scrolling down (deltaY > 0).
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Clamp a requested scale into [MIN_SCALE, MAX_SCALE]. Never rejects:
/// NaN and anything <= 0 land on the minimum, +inf on the maximum.
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return MIN_SCALE;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Offset from the container center, in pixels.
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    /// Degrees. Accumulates; never normalized.
    pub rotation: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

impl Transform {
    pub fn translate_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = clamp_scale(scale);
    }

    pub fn scale_by(&mut self, factor: f64) {
        self.set_scale(self.scale * factor);
    }

    pub fn rotate_by(&mut self, degrees: f64) {
        self.rotation += degrees;
    }

    /// Absolute reset to the origin; ignores container geometry.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Re-initialization used when a new image is shown: centered on the
    /// container midpoint rather than the origin.
    pub fn recenter(&mut self, container_width: f64, container_height: f64) {
        *self = Self {
            x: container_width / 2.0,
            y: container_height / 2.0,
            ..Self::default()
        };
    }

    /// Rotation folded into [0, 360) for display purposes. The stored value is untouched.
    pub fn visual_rotation(&self) -> f64 {
        self.rotation.rem_euclid(360.0)
    }
}
