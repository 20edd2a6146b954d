use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod collection;
mod config;
mod hooks;
mod mock_data;
mod prediction;
mod sequence;
mod timing;
mod components {
    pub mod animated_album;
    pub mod floating_button;
    pub mod hero;
    pub mod leaderboard;
    pub mod match_prediction;
    pub mod navigation;
    pub mod player_card;
    pub mod prediction_history;
    pub mod recent_collections;
    pub mod toast;
}
mod pages {
    pub mod home;
}

use config::DemoConfig;
use pages::home::{Home, NotFound};

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
    let config = use_state(DemoConfig::load);

    html! {
        <ContextProvider<DemoConfig> context={*config}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<DemoConfig>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting Predict & Win");
    yew::Renderer::<App>::new().render();
}
