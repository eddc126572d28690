//! Custom Yew hooks: document-level outside-click detection and a
//! self-clearing flag for transient feedback.

use gloo_timers::callback::Timeout;
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;

/// Invoke `on_outside` whenever a pointer-down lands outside `container`.
///
/// The document listener is installed on mount and removed on unmount.
#[hook]
pub fn use_outside_click(container: NodeRef, on_outside: Callback<()>) {
    use_effect_with((), move |_| {
        let listener = Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
            let Some(root) = container.cast::<Node>() else {
                return;
            };
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !root.contains(target.as_ref()) {
                on_outside.emit(());
            }
        });

        let document = gloo_utils::document();
        if let Err(err) = document
            .add_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref())
        {
            warn!("Could not install outside-click listener: {:?}", err);
        }

        move || {
            let _ = document
                .remove_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref());
            drop(listener);
        }
    });
}

/// A boolean that switches itself back off after a delay.
#[derive(Clone)]
pub struct TransientFlag {
    /// Whether the flag is currently raised.
    pub active: bool,
    /// Raise the flag and (re)start the countdown.
    pub raise: Callback<()>,
    /// Lower the flag immediately and cancel any countdown.
    pub clear: Callback<()>,
}

/// Custom hook for short-lived UI feedback such as "copied!" indicators.
/// The pending timer is owned by the component and cancelled on unmount.
#[hook]
pub fn use_transient_flag(duration_ms: u32) -> TransientFlag {
    let active = use_state(|| false);
    let timer = use_mut_ref(|| None::<Timeout>);

    let raise = {
        let active = active.clone();
        let timer = timer.clone();
        Callback::from(move |_: ()| {
            active.set(true);
            let lower = active.clone();
            // Replacing the handle drops (and cancels) the previous countdown.
            *timer.borrow_mut() = Some(Timeout::new(duration_ms, move || lower.set(false)));
        })
    };

    let clear = {
        let active = active.clone();
        let timer = timer.clone();
        Callback::from(move |_: ()| {
            timer.borrow_mut().take();
            active.set(false);
        })
    };

    TransientFlag {
        active: *active,
        raise,
        clear,
    }
}
