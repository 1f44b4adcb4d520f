//! Transform engine: owns the overlay transform and the gesture session and
//! applies pointer input and control commands to them.
//!
//! The overlay component owns one engine and feeds it every event as an
//! [`EngineAction`], synchronously and in arrival order. The lock flag lives
//! only here; DOM listeners ask [`TransformEngine::prevents_default`] before
//! suppressing browser scrolling or zooming.

use log::debug;

use super::controller::ControlCommand;
use super::gesture::{GestureSession, PointerInput};
use crate::model::Transform;

#[derive(Clone, Debug, PartialEq)]
pub enum EngineAction {
    Input(PointerInput),
    Control(ControlCommand),
    /// A new image is shown; center on the container midpoint.
    Recenter { width: f64, height: f64 },
    SetLocked(bool),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformEngine {
    pub transform: Transform,
    pub session: GestureSession,
    pub locked: bool,
}

impl TransformEngine {
    pub fn new(locked: bool) -> Self {
        Self {
            locked,
            ..Self::default()
        }
    }

    /// Apply one action in place. Returns true when the transform changed.
    pub fn apply(&mut self, action: EngineAction) -> bool {
        let before = self.transform;
        match action {
            EngineAction::Input(input) => self.handle_input(&input),
            EngineAction::Control(cmd) => self.handle_control(cmd),
            EngineAction::Recenter { width, height } => {
                debug!("recentering overlay in {width}x{height} container");
                self.session = GestureSession::Idle;
                self.transform.recenter(width, height);
            }
            EngineAction::SetLocked(locked) => {
                if locked != self.locked {
                    debug!("overlay lock -> {locked}");
                    self.locked = locked;
                    // A session started before locking must not resume afterwards.
                    if self.session.is_active() {
                        debug!("dropping in-progress gesture {:?}", self.session);
                        self.session = GestureSession::Idle;
                    }
                }
            }
        }
        self.transform != before
    }

    /// Whether the listener should call `preventDefault` for this input.
    /// Never while locked, so the page scrolls and zooms normally.
    pub fn prevents_default(&self, input: &PointerInput) -> bool {
        !self.locked && input.suppresses_default()
    }

    fn handle_input(&mut self, input: &PointerInput) {
        if self.locked {
            // Releases still end a stale session; they never touch the transform.
            if input.is_release() {
                self.session = GestureSession::Idle;
            }
            return;
        }
        if let Some(update) = self.session.recognize(input, self.transform.scale) {
            update.apply(&mut self.transform);
        }
    }

    fn handle_control(&mut self, cmd: ControlCommand) {
        match cmd {
            ControlCommand::ResetTransform => {
                debug!("overlay transform reset");
                self.transform.reset();
            }
            _ if self.locked => debug!("overlay locked; ignoring {cmd:?}"),
            ControlCommand::Rotate(degrees) => self.transform.rotate_by(degrees),
            ControlCommand::SetScale(scale) => self.transform.set_scale(scale),
        }
    }
}
