use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dom;
mod feedback;
mod reveal;
mod ui_state;
mod components {
    pub mod status_toast;
    pub mod topbar;
    pub mod vertical_timeline;
}
mod sections {
    pub mod courses;
    pub mod feedback;
    pub mod footer;
    pub mod hero;
    pub mod key_features;
    pub mod testimonials;
    pub mod timeline;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests;

use pages::{home::Home, not_found::NotFound};

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
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
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

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
