use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <nav class="top-nav">
            <style>
                {r#"
                    .top-nav { position: sticky; top: 0; z-index: 30; display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1.25rem; background: rgba(255, 255, 255, 0.7); backdrop-filter: blur(12px); }
                    .nav-brand { font-weight: 900; font-size: 1.125rem; color: #2563eb; text-decoration: none; }
                    .nav-links { display: flex; gap: 1.25rem; font-size: 0.875rem; font-weight: 600; }
                    .nav-links a { color: #374151; text-decoration: none; }
                    .nav-burger { display: none; border: none; background: none; font-size: 1.5rem; }
                    @media (max-width: 640px) {
                        .nav-burger { display: block; }
                        .nav-links { display: none; position: absolute; top: 100%; right: 1rem; flex-direction: column; padding: 1rem; border-radius: 1rem; background: white; }
                        .nav-links.open { display: flex; }
                    }
                "#}
            </style>
            <Link<Route> to={Route::Home} classes="nav-brand">{"⚽ Predict & Win"}</Link<Route>>
            <button class="nav-burger" onclick={toggle_menu} aria-label="Menu">{"☰"}</button>
            <div class={classes!("nav-links", menu_open.then(|| "open"))}>
                <a href="#prediction-section">{"Predict"}</a>
                <a href="#collections">{"Collection"}</a>
                <a href="#leaderboard">{"Leaders"}</a>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer { margin-top: 4rem; padding: 2rem 1rem; text-align: center; font-size: 0.75rem; color: #6b7280; }
                "#}
            </style>
            <p>{"Predict & Win is a demo. No predictions are stored and no prizes are awarded."}</p>
            <p>{"Made with ⚽ by Kheder & Ranem · WIP • Mock data"}</p>
        </footer>
    }
}
