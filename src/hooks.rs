use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent};
use yew::prelude::*;

use crate::interaction::{HoverAction, HoverState, StartupAction, StartupGate};
use crate::reveal::{Delivery, IntersectionSample, Observation, ObserverHandle, Threshold};
use crate::style::Phase;

impl ObserverHandle for IntersectionObserver {
    fn disconnect(&self) {
        IntersectionObserver::disconnect(self);
    }
}

/// Returned by [`use_reveal`]. Attach `node` to the region's root element.
#[derive(Clone, PartialEq)]
pub struct Reveal {
    pub node: NodeRef,
    pub visible: bool,
    /// False when the browser could not observe the region.
    pub supported: bool,
}

impl Reveal {
    pub fn phase(&self) -> Phase {
        Phase::from_flags(self.visible, self.supported)
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;
type ObservationSlot = Rc<RefCell<Option<Observation<IntersectionObserver>>>>;

// Keeps the JS callback alive for as long as the observer may call it.
struct Subscription {
    observation: ObservationSlot,
    _callback: ObserverCallback,
}

impl Subscription {
    fn cancel(self) {
        let mut slot = self.observation.borrow_mut();
        if let Some(observation) = slot.as_mut() {
            if observation.is_open() {
                debug!("Region unmounted before it was revealed");
            }
            observation.cancel();
        }
    }
}

/// Reports whether the attached region has ever been `threshold` visible.
///
/// Observation starts when the component mounts and stops on the first
/// qualifying intersection or on unmount, whichever is first.
#[hook]
pub fn use_reveal(threshold: Threshold) -> Reveal {
    let node = use_node_ref();
    let visible = use_state(|| false);
    let supported = use_state(|| true);

    {
        let node = node.clone();
        let visible = visible.setter();
        let supported = supported.setter();
        use_effect_with_deps(
            move |_| {
                let subscription = match node.cast::<Element>() {
                    Some(element) => match observe(&element, threshold, visible) {
                        Ok(subscription) => Some(subscription),
                        Err(err) => {
                            warn!("IntersectionObserver unavailable, showing content without animation: {:?}", err);
                            supported.set(false);
                            None
                        }
                    },
                    None => {
                        warn!("Reveal region is not attached to an element");
                        supported.set(false);
                        None
                    }
                };

                move || {
                    if let Some(subscription) = subscription {
                        subscription.cancel();
                    }
                }
            },
            (), // Observe once per mount
        );
    }

    Reveal {
        node,
        visible: *visible,
        supported: *supported,
    }
}

fn observe(
    element: &Element,
    threshold: Threshold,
    visible: UseStateSetter<bool>,
) -> Result<Subscription, JsValue> {
    let slot: ObservationSlot = Rc::new(RefCell::new(None));

    let callback = {
        let slot = slot.clone();
        Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let revealed = match slot.borrow_mut().as_mut() {
                Some(observation) => entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| {
                        let sample = IntersectionSample {
                            ratio: entry.intersection_ratio(),
                            is_intersecting: entry.is_intersecting(),
                        };
                        observation.deliver(sample) == Delivery::Revealed
                    }),
                None => false,
            };
            if revealed {
                debug!("Region revealed");
                visible.set(true);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold.value()));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    *slot.borrow_mut() = Some(Observation::new(threshold, observer.clone()));
    observer.observe(element);

    Ok(Subscription {
        observation: slot,
        _callback: callback,
    })
}

/// False until `delay_ms` after mount, then true for good.
#[hook]
pub fn use_loaded(delay_ms: u32) -> bool {
    let gate = use_reducer(move || StartupGate::new(delay_ms));

    {
        let gate = gate.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(delay_ms, move || {
                    gate.dispatch(StartupAction::Elapsed(delay_ms));
                });
                // Dropping the handle clears the timer if we unmount first
                move || drop(timeout)
            },
            (),
        );
    }

    gate.is_loaded()
}

#[hook]
pub fn use_hover() -> UseReducerHandle<HoverState> {
    use_reducer(HoverState::default)
}

/// `(onmouseenter, onmouseleave)` for the element identified by `id`.
pub fn hover_callbacks(
    hover: &UseReducerHandle<HoverState>,
    id: &str,
) -> (Callback<MouseEvent>, Callback<MouseEvent>) {
    let enter = {
        let hover = hover.clone();
        let id = id.to_string();
        Callback::from(move |_: MouseEvent| hover.dispatch(HoverAction::Enter(id.clone())))
    };
    let leave = {
        let hover = hover.clone();
        let id = id.to_string();
        Callback::from(move |_: MouseEvent| hover.dispatch(HoverAction::Leave(id.clone())))
    };
    (enter, leave)
}
