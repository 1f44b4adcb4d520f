// Gesture recognition: turns raw pointer/touch input into transform updates.
use crate::model::{clamp_scale, Transform, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};

/// One contact point in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub x: f64,
    pub y: f64,
}

impl Contact {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Contact) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PointerInput {
    TouchStart(Vec<Contact>),
    TouchMove(Vec<Contact>),
    /// Touch end or cancel.
    TouchEnd,
    MouseDown(Contact),
    MouseMove(Contact),
    MouseUp,
    /// Only the sign of `delta_y` matters.
    Wheel { delta_y: f64 },
}

impl PointerInput {
    /// Whether the browser's own scroll/zoom handling should be suppressed for
    /// this input while the overlay is unlocked.
    pub fn suppresses_default(&self) -> bool {
        matches!(
            self,
            PointerInput::TouchStart(_) | PointerInput::TouchMove(_) | PointerInput::Wheel { .. }
        )
    }

    /// End events that only tear down a session.
    pub fn is_release(&self) -> bool {
        matches!(self, PointerInput::TouchEnd | PointerInput::MouseUp)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformUpdate {
    TranslateBy { dx: f64, dy: f64 },
    /// Absolute scale, already clamped.
    SetScale(f64),
    ScaleBy(f64),
}

impl TransformUpdate {
    pub fn apply(self, transform: &mut Transform) {
        match self {
            TransformUpdate::TranslateBy { dx, dy } => transform.translate_by(dx, dy),
            TransformUpdate::SetScale(scale) => transform.set_scale(scale),
            TransformUpdate::ScaleBy(factor) => transform.scale_by(factor),
        }
    }
}

/// In-progress interaction. Drag and pinch are mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureSession {
    #[default]
    Idle,
    Dragging {
        last_x: f64,
        last_y: f64,
    },
    /// A zero `initial_distance` means the pinch is not established yet.
    Pinching {
        initial_distance: f64,
        initial_scale: f64,
    },
}

impl GestureSession {
    pub fn is_active(&self) -> bool {
        !matches!(self, GestureSession::Idle)
    }

    /// Advance the session with one input and return the transform update it
    /// produces, if any. `current_scale` is only read when a pinch begins.
    pub fn recognize(&mut self, input: &PointerInput, current_scale: f64) -> Option<TransformUpdate> {
        match input {
            PointerInput::TouchStart(contacts) => {
                match contacts.as_slice() {
                    [only] => self.begin_drag(only),
                    [a, b] => {
                        *self = GestureSession::Pinching {
                            initial_distance: a.distance_to(b),
                            initial_scale: current_scale,
                        };
                    }
                    _ => {}
                }
                None
            }
            PointerInput::TouchMove(contacts) => match contacts.as_slice() {
                [only] => self.drag_to(only),
                [a, b] => self.pinch_to(a.distance_to(b)),
                _ => None,
            },
            PointerInput::TouchEnd | PointerInput::MouseUp => {
                *self = GestureSession::Idle;
                None
            }
            PointerInput::MouseDown(at) => {
                self.begin_drag(at);
                None
            }
            PointerInput::MouseMove(at) => self.drag_to(at),
            PointerInput::Wheel { delta_y } => {
                let factor = if *delta_y > 0.0 {
                    WHEEL_ZOOM_OUT
                } else {
                    WHEEL_ZOOM_IN
                };
                Some(TransformUpdate::ScaleBy(factor))
            }
        }
    }

    fn begin_drag(&mut self, at: &Contact) {
        *self = GestureSession::Dragging {
            last_x: at.x,
            last_y: at.y,
        };
    }

    fn drag_to(&mut self, at: &Contact) -> Option<TransformUpdate> {
        let GestureSession::Dragging { last_x, last_y } = *self else {
            return None;
        };
        self.begin_drag(at);
        Some(TransformUpdate::TranslateBy {
            dx: at.x - last_x,
            dy: at.y - last_y,
        })
    }

    fn pinch_to(&mut self, distance: f64) -> Option<TransformUpdate> {
        let GestureSession::Pinching {
            initial_distance,
            initial_scale,
        } = *self
        else {
            return None;
        };
        if initial_distance.is_nan() || initial_distance <= 0.0 {
            // First non-degenerate distance becomes the baseline.
            if distance > 0.0 {
                *self = GestureSession::Pinching {
                    initial_distance: distance,
                    initial_scale,
                };
            }
            return None;
        }
        Some(TransformUpdate::SetScale(clamp_scale(
            initial_scale * (distance / initial_distance),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touches(points: &[(f64, f64)]) -> Vec<Contact> {
        points.iter().map(|&(x, y)| Contact::new(x, y)).collect()
    }

    #[test]
    fn single_touch_drag_emits_deltas() {
        let mut s = GestureSession::default();
        assert_eq!(s.recognize(&PointerInput::TouchStart(touches(&[(100.0, 100.0)])), 1.0), None);
        assert_eq!(
            s.recognize(&PointerInput::TouchMove(touches(&[(150.0, 140.0)])), 1.0),
            Some(TransformUpdate::TranslateBy { dx: 50.0, dy: 40.0 })
        );
        assert_eq!(
            s.recognize(&PointerInput::TouchMove(touches(&[(145.0, 150.0)])), 1.0),
            Some(TransformUpdate::TranslateBy { dx: -5.0, dy: 10.0 })
        );
        s.recognize(&PointerInput::TouchEnd, 1.0);
        assert_eq!(s, GestureSession::Idle);
        assert_eq!(s.recognize(&PointerInput::TouchMove(touches(&[(0.0, 0.0)])), 1.0), None);
    }

    #[test]
    fn mouse_drag_requires_button_down() {
        let mut s = GestureSession::default();
        assert_eq!(s.recognize(&PointerInput::MouseMove(Contact::new(5.0, 5.0)), 1.0), None);
        s.recognize(&PointerInput::MouseDown(Contact::new(10.0, 10.0)), 1.0);
        assert_eq!(
            s.recognize(&PointerInput::MouseMove(Contact::new(13.0, 6.0)), 1.0),
            Some(TransformUpdate::TranslateBy { dx: 3.0, dy: -4.0 })
        );
        s.recognize(&PointerInput::MouseUp, 1.0);
        assert!(!s.is_active());
        assert_eq!(s.recognize(&PointerInput::MouseMove(Contact::new(20.0, 20.0)), 1.0), None);
    }

    #[test]
    fn pinch_scales_by_distance_ratio_and_clamps() {
        let mut s = GestureSession::default();
        s.recognize(&PointerInput::TouchStart(touches(&[(0.0, 0.0), (100.0, 0.0)])), 1.0);
        let at = |d: f64| PointerInput::TouchMove(touches(&[(0.0, 0.0), (d, 0.0)]));
        assert_eq!(s.recognize(&at(200.0), 1.0), Some(TransformUpdate::SetScale(2.0)));
        assert_eq!(s.recognize(&at(50.0), 2.0), Some(TransformUpdate::SetScale(0.5)));
        assert_eq!(s.recognize(&at(1000.0), 0.5), Some(TransformUpdate::SetScale(5.0)));
        assert_eq!(s.recognize(&at(1.0), 5.0), Some(TransformUpdate::SetScale(0.1)));
    }

    #[test]
    fn pinch_baseline_is_fixed_at_start() {
        let mut s = GestureSession::default();
        s.recognize(&PointerInput::TouchStart(touches(&[(0.0, 0.0), (0.0, 100.0)])), 2.0);
        // The scale passed on move is ignored; only the captured one counts.
        assert_eq!(
            s.recognize(&PointerInput::TouchMove(touches(&[(0.0, 0.0), (0.0, 150.0)])), 4.0),
            Some(TransformUpdate::SetScale(3.0))
        );
    }

    #[test]
    fn coincident_pinch_contacts_defer_until_distance_is_positive() {
        let mut s = GestureSession::default();
        s.recognize(&PointerInput::TouchStart(touches(&[(50.0, 50.0), (50.0, 50.0)])), 1.5);
        assert_eq!(
            s.recognize(&PointerInput::TouchMove(touches(&[(50.0, 50.0), (50.0, 50.0)])), 1.5),
            None
        );
        assert_eq!(
            s.recognize(&PointerInput::TouchMove(touches(&[(0.0, 0.0), (40.0, 0.0)])), 1.5),
            None
        );
        assert_eq!(
            s,
            GestureSession::Pinching {
                initial_distance: 40.0,
                initial_scale: 1.5
            }
        );
        assert_eq!(
            s.recognize(&PointerInput::TouchMove(touches(&[(0.0, 0.0), (80.0, 0.0)])), 1.5),
            Some(TransformUpdate::SetScale(3.0))
        );
    }

    #[test]
    fn second_finger_converts_drag_into_pinch() {
        let mut s = GestureSession::default();
        s.recognize(&PointerInput::TouchStart(touches(&[(10.0, 10.0)])), 1.0);
        s.recognize(&PointerInput::TouchMove(touches(&[(20.0, 10.0)])), 1.0);
        s.recognize(&PointerInput::TouchStart(touches(&[(20.0, 10.0), (20.0, 70.0)])), 1.8);
        assert_eq!(
            s,
            GestureSession::Pinching {
                initial_distance: 60.0,
                initial_scale: 1.8
            }
        );
        // A one-finger move no longer drags.
        assert_eq!(s.recognize(&PointerInput::TouchMove(touches(&[(30.0, 10.0)])), 1.8), None);
    }

    #[test]
    fn unsupported_contact_counts_are_ignored() {
        let mut s = GestureSession::default();
        s.recognize(&PointerInput::TouchStart(touches(&[(1.0, 1.0)])), 1.0);
        let three = touches(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        assert_eq!(s.recognize(&PointerInput::TouchStart(three.clone()), 1.0), None);
        assert_eq!(s.recognize(&PointerInput::TouchMove(three), 1.0), None);
        assert_eq!(s, GestureSession::Dragging { last_x: 1.0, last_y: 1.0 });
    }

    #[test]
    fn wheel_direction_picks_zoom_factor() {
        let mut s = GestureSession::default();
        assert_eq!(
            s.recognize(&PointerInput::Wheel { delta_y: 10.0 }, 1.0),
            Some(TransformUpdate::ScaleBy(WHEEL_ZOOM_OUT))
        );
        assert_eq!(
            s.recognize(&PointerInput::Wheel { delta_y: -10.0 }, 1.0),
            Some(TransformUpdate::ScaleBy(WHEEL_ZOOM_IN))
        );
        assert!(!s.is_active());
    }

    #[test]
    fn only_touch_and_wheel_suppress_browser_defaults() {
        assert!(PointerInput::TouchStart(vec![]).suppresses_default());
        assert!(PointerInput::TouchMove(vec![]).suppresses_default());
        assert!(PointerInput::Wheel { delta_y: 1.0 }.suppresses_default());
        assert!(!PointerInput::TouchEnd.suppresses_default());
        assert!(!PointerInput::MouseDown(Contact::new(0.0, 0.0)).suppresses_default());
    }
}
