//! Live camera stream plus the torch flag that belongs to it.

use std::rc::Rc;

use log::debug;
use web_sys::MediaStream;
use yew::Reducible;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CameraSession {
    pub stream: Option<MediaStream>,
    pub torch_on: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CameraAction {
    /// A (re)started camera delivered a stream, or `None` after a failure.
    Connected(Option<MediaStream>),
    TorchSwitched(bool),
}

impl Reducible for CameraSession {
    type Action = CameraAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CameraAction::Connected(stream) => {
                debug!("camera stream replaced (live: {})", stream.is_some());
                // A fresh track always starts with the torch off.
                next.stream = stream;
                next.torch_on = false;
            }
            CameraAction::TorchSwitched(on) => {
                if next.stream.is_none() {
                    return self;
                }
                next.torch_on = on;
            }
        }
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stream_resets_torch() {
        let lit = Rc::new(CameraSession {
            stream: None,
            torch_on: true,
        });
        let next = lit.reduce(CameraAction::Connected(None));
        assert!(!next.torch_on);
        assert!(next.stream.is_none());
    }

    #[test]
    fn torch_without_stream_is_ignored() {
        let idle = Rc::new(CameraSession::default());
        let next = idle.clone().reduce(CameraAction::TorchSwitched(true));
        assert!(Rc::ptr_eq(&idle, &next));
        assert!(!next.torch_on);
    }
}
