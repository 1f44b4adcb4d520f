//! Control handle for driving the overlay from sibling UI (zoom/rotate/reset
//! buttons) without synthesizing pointer events.
//!
//! The app creates one [`OverlayController`] and passes it to both the overlay
//! and the control panel. The overlay attaches its dispatcher while mounted;
//! calls made while nothing is attached are dropped.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use yew::Callback;

use super::engine::EngineAction;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlCommand {
    /// Relative rotation in degrees.
    Rotate(f64),
    /// Absolute scale; clamped by the engine.
    SetScale(f64),
    /// Back to the origin at scale 1. Allowed even while locked.
    ResetTransform,
}

impl From<ControlCommand> for EngineAction {
    fn from(cmd: ControlCommand) -> Self {
        EngineAction::Control(cmd)
    }
}

#[derive(Clone, Default)]
pub struct OverlayController {
    sink: Rc<RefCell<Option<Callback<ControlCommand>>>>,
}

impl PartialEq for OverlayController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.sink, &other.sink)
    }
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotate(&self, degrees: f64) {
        self.send(ControlCommand::Rotate(degrees));
    }

    pub fn set_scale(&self, scale: f64) {
        self.send(ControlCommand::SetScale(scale));
    }

    pub fn reset_transform(&self) {
        self.send(ControlCommand::ResetTransform);
    }

    pub fn is_attached(&self) -> bool {
        self.sink.borrow().is_some()
    }

    pub(crate) fn attach(&self, sink: Callback<ControlCommand>) {
        *self.sink.borrow_mut() = Some(sink);
    }

    pub(crate) fn detach(&self) {
        self.sink.borrow_mut().take();
    }

    fn send(&self, cmd: ControlCommand) {
        // Clone out first so the borrow is released before the sink runs.
        let sink = self.sink.borrow().clone();
        match sink {
            Some(sink) => sink.emit(cmd),
            None => debug!("overlay not mounted; dropping {cmd:?}"),
        }
    }
}
