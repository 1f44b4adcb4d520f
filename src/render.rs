// Projection of the overlay transform onto the <img> inline style.
use crate::model::Transform;

/// Visual placement of the overlay image relative to its container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
    pub rotation: f64,
    pub alpha: f64,
    /// False while locked: the image must not intercept pointer events.
    pub interactive: bool,
}

impl Placement {
    pub fn project(transform: &Transform, opacity: u8, locked: bool) -> Self {
        Self {
            offset_x: transform.x,
            offset_y: transform.y,
            scale: transform.scale,
            rotation: transform.visual_rotation(),
            alpha: f64::from(opacity.min(100)) / 100.0,
            interactive: !locked,
        }
    }

    /// Anchors the image center on the container center, then offsets,
    /// scales and rotates about that center.
    pub fn css_transform(&self) -> String {
        format!(
            "translate(-50%, -50%) translate({}px, {}px) scale({}) rotate({}deg)",
            self.offset_x, self.offset_y, self.scale, self.rotation
        )
    }

    pub fn style(&self) -> String {
        let (pointer_events, cursor) = if self.interactive {
            ("auto", "move")
        } else {
            ("none", "not-allowed")
        };
        format!(
            "position:absolute; left:50%; top:50%; max-width:none; user-select:none; transform-origin:center; transform:{}; opacity:{}; pointer-events:{}; cursor:{};",
            self.css_transform(),
            self.alpha,
            pointer_events,
            cursor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_transform_and_opacity() {
        let t = Transform {
            x: 12.5,
            y: -4.0,
            scale: 1.5,
            rotation: 30.0,
        };
        let p = Placement::project(&t, 50, false);
        assert_eq!(p.alpha, 0.5);
        assert!(p.interactive);
        assert_eq!(
            p.css_transform(),
            "translate(-50%, -50%) translate(12.5px, -4px) scale(1.5) rotate(30deg)"
        );
        let style = p.style();
        assert!(style.contains("opacity:0.5;"));
        assert!(style.contains("pointer-events:auto;"));
        assert!(style.contains("cursor:move;"));
    }

    #[test]
    fn locked_placement_passes_pointer_events_through() {
        let p = Placement::project(&Transform::default(), 100, true);
        assert!(!p.interactive);
        assert_eq!(p.alpha, 1.0);
        let style = p.style();
        assert!(style.contains("pointer-events:none;"));
        assert!(style.contains("cursor:not-allowed;"));
    }

    #[test]
    fn opacity_above_range_is_capped() {
        let p = Placement::project(&Transform::default(), 250, false);
        assert_eq!(p.alpha, 1.0);
        let p = Placement::project(&Transform::default(), 0, false);
        assert_eq!(p.alpha, 0.0);
    }

    #[test]
    fn rotation_renders_folded_into_one_turn() {
        let t = Transform {
            rotation: -45.0,
            ..Transform::default()
        };
        let p = Placement::project(&t, 50, false);
        assert_eq!(p.rotation, 315.0);
        assert!(p.css_transform().ends_with("rotate(315deg)"));
    }
}
