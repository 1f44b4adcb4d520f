use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, TouchEvent, WheelEvent};
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;

use crate::model::Transform;
use crate::render::Placement;
use crate::state::{Contact, ControlCommand, EngineAction, OverlayController, PointerInput, TransformEngine};

#[derive(Properties, PartialEq, Clone)]
pub struct ArOverlayProps {
    pub image_url: AttrValue,
    /// 0-100.
    pub opacity: u8,
    pub locked: bool,
    pub controller: OverlayController,
    #[prop_or_default]
    pub on_transform_change: Option<Callback<Transform>>,
}

fn touch_contacts(e: &TouchEvent) -> Vec<Contact> {
    let touches = e.touches();
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| Contact::new(t.client_x() as f64, t.client_y() as f64))
        .collect()
}

fn mouse_contact(e: &MouseEvent) -> Contact {
    Contact::new(e.client_x() as f64, e.client_y() as f64)
}

/// Apply one action and redraw only if the transform moved.
fn drive(engine: &RefCell<TransformEngine>, redraw: &UseForceUpdateHandle, action: EngineAction) {
    let changed = engine.borrow_mut().apply(action);
    if changed {
        redraw.force_update();
    }
}

#[function_component(ArOverlay)]
pub fn ar_overlay(props: &ArOverlayProps) -> Html {
    let container_ref = use_node_ref();
    let engine: Rc<RefCell<TransformEngine>> = {
        let locked = props.locked;
        use_mut_ref(move || TransformEngine::new(locked))
    };
    let redraw = use_force_update();

    // Applied during render so listeners never see a stale lock.
    if engine.borrow().locked != props.locked {
        engine.borrow_mut().apply(EngineAction::SetLocked(props.locked));
    }

    // New image: center it in the container.
    {
        let engine = engine.clone();
        let redraw = redraw.clone();
        let container_ref = container_ref.clone();
        use_effect_with(props.image_url.clone(), move |_| {
            if let Some(el) = container_ref.cast::<HtmlElement>() {
                let action = EngineAction::Recenter {
                    width: el.client_width() as f64,
                    height: el.client_height() as f64,
                };
                drive(&engine, &redraw, action);
            }
            || ()
        });
    }

    // Expose the control handle while mounted.
    {
        let engine = engine.clone();
        let redraw = redraw.clone();
        use_effect_with(props.controller.clone(), move |controller| {
            if controller.is_attached() {
                debug!("overlay controller was already attached; rebinding");
            }
            controller.attach(Callback::from(move |cmd: ControlCommand| {
                drive(&engine, &redraw, cmd.into());
            }));
            let controller = controller.clone();
            move || controller.detach()
        });
    }

    let transform = engine.borrow().transform;
    {
        let on_change = props.on_transform_change.clone();
        use_effect_with(transform, move |transform| {
            if let Some(cb) = &on_change {
                cb.emit(*transform);
            }
            || ()
        });
    }

    // Raw listeners, so touchmove/wheel can be non-passive and preventDefault works.
    {
        let container_ref = container_ref.clone();
        let engine = engine.clone();
        let redraw = redraw.clone();
        use_effect_with((), move |_| {
            let container = container_ref.cast::<HtmlElement>();
            let window = web_sys::window();

            let feed = move |event: &web_sys::Event, input: PointerInput| {
                if engine.borrow().prevents_default(&input) {
                    event.prevent_default();
                }
                drive(&engine, &redraw, EngineAction::Input(input));
            };

            let touch_start_cb = {
                let feed = feed.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    feed(&e, PointerInput::TouchStart(touch_contacts(&e)));
                }) as Box<dyn FnMut(_)>)
            };
            let touch_move_cb = {
                let feed = feed.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    feed(&e, PointerInput::TouchMove(touch_contacts(&e)));
                }) as Box<dyn FnMut(_)>)
            };
            let touch_end_cb = {
                let feed = feed.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    feed(&e, PointerInput::TouchEnd);
                }) as Box<dyn FnMut(_)>)
            };
            let mousedown_cb = {
                let feed = feed.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    feed(&e, PointerInput::MouseDown(mouse_contact(&e)));
                }) as Box<dyn FnMut(_)>)
            };
            let mousemove_cb = {
                let feed = feed.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    feed(&e, PointerInput::MouseMove(mouse_contact(&e)));
                }) as Box<dyn FnMut(_)>)
            };
            let mouseup_cb = {
                let feed = feed.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    feed(&e, PointerInput::MouseUp);
                }) as Box<dyn FnMut(_)>)
            };
            let wheel_cb = {
                let feed = feed.clone();
                Closure::wrap(Box::new(move |e: WheelEvent| {
                    feed(&e, PointerInput::Wheel { delta_y: e.delta_y() });
                }) as Box<dyn FnMut(_)>)
            };

            let on_container = [
                ("touchstart", touch_start_cb.as_ref()),
                ("touchmove", touch_move_cb.as_ref()),
                ("touchend", touch_end_cb.as_ref()),
                ("touchcancel", touch_end_cb.as_ref()),
                ("mousedown", mousedown_cb.as_ref()),
                ("mousemove", mousemove_cb.as_ref()),
                ("wheel", wheel_cb.as_ref()),
            ]
            .map(|(name, cb)| (name, cb.unchecked_ref::<js_sys::Function>().clone()));
            let mouseup_fn = mouseup_cb.as_ref().unchecked_ref::<js_sys::Function>().clone();

            if let Some(el) = &container {
                for (name, f) in &on_container {
                    let _ = el.add_event_listener_with_callback(name, f);
                }
            }
            // Released anywhere ends the drag, not just over the overlay.
            if let Some(win) = &window {
                let _ = win.add_event_listener_with_callback("mouseup", &mouseup_fn);
            }

            move || {
                if let Some(el) = &container {
                    for (name, f) in &on_container {
                        let _ = el.remove_event_listener_with_callback(name, f);
                    }
                }
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback("mouseup", &mouseup_fn);
                }
                let _keep_alive = (
                    &touch_start_cb,
                    &touch_move_cb,
                    &touch_end_cb,
                    &mousedown_cb,
                    &mousemove_cb,
                    &mouseup_cb,
                    &wheel_cb,
                );
            }
        });
    }

    let placement = Placement::project(&transform, props.opacity, props.locked);
    html! {
        <div ref={container_ref} style="position:absolute; inset:0; overflow:hidden; touch-action:none; pointer-events:auto;">
            <img
                src={props.image_url.clone()}
                alt="AR Overlay"
                draggable="false"
                style={placement.style()}
            />
        </div>
    }
}
