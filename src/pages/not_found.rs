use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::use_mount;
use log::info;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location();

    use_mount(move || {
        if let Some(location) = location {
            info!("No page at {}", location.path());
        }
    });

    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This arena doesn't exist yet."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to VROlympics"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: #0b0b14;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .not-found h1 {
                    font-size: 5rem;
                    margin: 0;
                    background: linear-gradient(45deg, #7e57ff, #00d4ff);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .not-found-link {
                    margin-top: 1.5rem;
                    color: #7EB2FF;
                }
                "#}
            </style>
        </div>
    }
}
