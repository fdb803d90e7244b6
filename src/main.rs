use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod color;
mod config;
mod hooks;
mod icons;
mod text_gradient;

mod components {
    pub mod footer;
    pub mod navigation;
}

mod pages {
    pub mod home;
}

mod sections {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod hero;
    pub mod inspirational;
    pub mod maintenance;
    pub mod photo_carousel;
    pub mod pixels;
    pub mod services;
    pub mod testimonials;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        // Single-page site: anything unknown lands on the home page.
        Route::NotFound => html! { <Home /> },
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
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
