use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Entrance animations fire a little before the section bottom enters the
/// viewport.
const VISIBILITY_THRESHOLD: f64 = 0.1;
const VISIBILITY_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Latches to `true` the first time `node` intersects the viewport and
/// stays there; scrolling away never resets it. The observer is created on
/// mount and disconnected on unmount.
#[hook]
pub fn use_visible_once(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::wrap(Box::new(
                    move |entries: Vec<IntersectionObserverEntry>| {
                        if entries.iter().any(|entry| entry.is_intersecting()) {
                            visible.set(true);
                        }
                    },
                )
                    as Box<dyn FnMut(Vec<IntersectionObserverEntry>)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
                options.set_root_margin(VISIBILITY_ROOT_MARGIN);

                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .ok();
                if let (Some(observer), Some(element)) =
                    (observer.as_ref(), node.cast::<Element>())
                {
                    observer.observe(&element);
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    *visible
}

/// Strictly past the threshold: an offset sitting exactly on it counts as
/// not scrolled.
pub fn past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// `true` while the vertical scroll offset is past `threshold`, re-read on
/// every scroll event. The listener is removed on unmount.
#[hook]
pub fn use_scroll_flag(threshold: f64) -> bool {
    let past = use_state_eq(|| false);

    {
        let past = past.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let listener_target = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window.scroll_y().unwrap_or(0.0);
                    past.set(past_threshold(offset, threshold));
                }) as Box<dyn FnMut()>);

                listener_target
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    listener_target
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    *past
}
