use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::signup::controller::FormState;

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub state: FormState,
    pub on_input: Callback<String>,
    pub on_submit: Callback<String>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let SignupFormProps { state, on_input, on_submit } = props;
    let input_ref = use_node_ref();

    let oninput = {
        let on_input = on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let onsubmit = {
        let on_submit = on_submit.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = input_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            on_submit.emit(email);
        })
    };

    let button_label = if state.submitted { "✓ You're In!" } else { "Get Early Access" };

    html! {
        <>
            <form class="signup-form" onsubmit={onsubmit}>
                <input
                    ref={input_ref}
                    type="email"
                    placeholder="Enter your email"
                    class="signup-input"
                    value={state.email_input.clone()}
                    oninput={oninput}
                    required={true}
                />
                <button type="submit" class={classes!("signup-btn", state.submitted.then(|| "confirmed"))}>
                    {button_label}
                </button>
            </form>
            {
                if state.submitted {
                    html! { <p class="signup-confirm">{"Welcome to the arena 🎮"}</p> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(warning) = &state.warning {
                    html! { <p class="signup-warning" role="status">{warning}</p> }
                } else {
                    html! {}
                }
            }
        </>
    }
}
