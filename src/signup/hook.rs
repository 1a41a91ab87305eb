use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::config;
use crate::signup::controller::{FormState, SignupController};
use crate::signup::store::LocalStorageStore;

#[derive(Clone, PartialEq)]
pub struct SignupHandle {
    pub state: FormState,
    pub on_input: Callback<String>,
    pub on_submit: Callback<String>,
}

/// Wires a `SignupController` backed by localStorage into a component.
#[hook]
pub fn use_signup() -> SignupHandle {
    let state = use_state(FormState::default);
    let controller = use_mut_ref(|| SignupController::new(LocalStorageStore::default()));
    // Only one confirmation timer lives at a time; dropping a Timeout cancels it.
    let confirmation_timer = use_mut_ref(|| None::<Timeout>);

    {
        let controller = controller.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let mut controller = controller.borrow_mut();
                controller.subscribe(move |next: &FormState| state.set(next.clone()));
                controller.on_load();
                || ()
            },
            (),
        );
    }

    let on_input = {
        let controller = controller.clone();
        Callback::from(move |value: String| {
            controller.borrow_mut().on_input(value);
        })
    };

    let on_submit = {
        let controller = controller.clone();
        let confirmation_timer = confirmation_timer.clone();
        Callback::from(move |raw: String| {
            let now = Date::now();
            let outcome = controller.borrow_mut().on_submit(&raw, now);
            debug!("Signup submitted: {:?}", outcome);
            if !controller.borrow().is_confirming(now) {
                return;
            }

            let deadline = controller.borrow().confirmation_deadline();
            if let Some(deadline) = deadline {
                let controller = controller.clone();
                let timeout = Timeout::new(config::CONFIRMATION_WINDOW_MS, move || {
                    let mut controller = controller.borrow_mut();
                    if controller.on_confirmation_elapsed(deadline) {
                        debug!("Confirmation closed, {} signups", controller.state().signup_count);
                    }
                });
                *confirmation_timer.borrow_mut() = Some(timeout);
            }
        })
    };

    SignupHandle {
        state: (*state).clone(),
        on_input,
        on_submit,
    }
}
