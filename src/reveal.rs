use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// One-way visibility flag: once an element has been seen it stays revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, revealed: false }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed the current intersection ratio. Returns true only on the call
    /// that flips the latch.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.revealed || ratio <= 0.0 || ratio < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}

struct Watch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

fn watch(element: &Element, revealed: UseStateHandle<bool>) -> Result<Watch, JsValue> {
    let mut latch = RevealLatch::new(config::REVEAL_THRESHOLD);
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() && latch.observe(entry.intersection_ratio()) {
                revealed.set(true);
                observer.disconnect();
            }
            if latch.is_revealed() {
                break;
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(Watch { observer, _callback: callback })
}

/// Returns whether the element behind `node` has scrolled into view yet.
/// With `enabled` false the element counts as visible from the start.
#[hook]
pub fn use_reveal(node: NodeRef, enabled: bool) -> bool {
    let revealed = use_state_eq(|| !enabled);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, enabled)| {
                let mut active = None;
                if !*enabled {
                    revealed.set(true);
                } else if !*revealed {
                    if let Some(element) = node.cast::<Element>() {
                        match watch(&element, revealed.clone()) {
                            Ok(w) => active = Some(w),
                            Err(e) => {
                                // Old browsers: show everything rather than leave it hidden
                                warn!("IntersectionObserver unavailable: {:?}", e);
                                revealed.set(true);
                            }
                        }
                    } else {
                        debug!("Reveal target not mounted, showing it directly");
                        revealed.set(true);
                    }
                }
                move || {
                    if let Some(w) = active {
                        w.observer.disconnect();
                    }
                }
            },
            (node, enabled),
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(true)]
    pub enabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), props.enabled);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), visible.then(|| "visible"))}
        >
            { for props.children.iter() }
        </div>
    }
}
