use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod reveal;
mod signup {
    pub mod email;
    pub mod store;
    pub mod controller;
    pub mod hook;
}
mod components {
    pub mod signup_form;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{
    landing::Landing,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/classic")]
    Classic,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing animated={true} /> }
        },
        Route::Classic => {
            info!("Rendering classic landing page");
            html! { <Landing animated={false} /> }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
