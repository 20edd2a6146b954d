use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    floating_button::FloatingButton,
    hero::{Hero, PREDICTION_SECTION_ID},
    leaderboard::Leaderboard,
    match_prediction::MatchPrediction,
    navigation::{Footer, Navigation},
    prediction_history::PredictionHistory,
    recent_collections::RecentCollections,
    toast::{Toast, ToastBanner, ToastKind},
};
use crate::config::DemoConfig;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<DemoConfig>().unwrap_or_default();
    let toast = use_state(|| None::<Toast>);
    let next_toast_id = use_mut_ref(|| 0u32);

    let on_toast = {
        let toast = toast.clone();
        Callback::from(move |(kind, message): (ToastKind, String)| {
            let id = {
                let mut next = next_toast_id.borrow_mut();
                *next = next.wrapping_add(1);
                *next
            };
            toast.set(Some(Toast { id, kind, message }));
        })
    };
    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |id: u32| {
            // Only the toast that scheduled this dismissal may clear itself.
            if (*toast).as_ref().map(|t| t.id) == Some(id) {
                toast.set(None);
            }
        })
    };

    html! {
        <div class="page">
            <style>
                {r#"
                    .page {
                        position: relative;
                        min-height: 100vh;
                        overflow-x: hidden;
                        font-family: system-ui, -apple-system, sans-serif;
                        color: #111827;
                        background: linear-gradient(180deg, #eff6ff 0%, #eef2ff 50%, #ecfeff 100%);
                    }
                    .page-decor { position: absolute; border-radius: 9999px; filter: blur(60px); opacity: 0.35; pointer-events: none; }
                    .decor-one { top: 10rem; left: -6rem; width: 18rem; height: 18rem; background: #93c5fd; }
                    .decor-two { top: 40rem; right: -6rem; width: 22rem; height: 22rem; background: #c4b5fd; }
                    .decor-three { bottom: 10rem; left: 20%; width: 16rem; height: 16rem; background: #67e8f9; }
                    .page-sections { position: relative; max-width: 56rem; margin: 0 auto; padding: 0 1rem; display: flex; flex-direction: column; gap: 2rem; }
                    .fade-in { animation: fadeIn 0.4s ease-out; }
                    @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
                    @keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.5; } }
                "#}
            </style>
            <div class="page-decor decor-one"></div>
            <div class="page-decor decor-two"></div>
            <div class="page-decor decor-three"></div>

            <Navigation />
            <ToastBanner toast={(*toast).clone()} duration_ms={config.toast_ms} on_dismiss={on_dismiss} />
            <Hero />
            <div class="page-sections">
                <section id={PREDICTION_SECTION_ID}>
                    <MatchPrediction on_toast={on_toast} />
                </section>
                <section id="collections">
                    <RecentCollections />
                </section>
                <section id="leaderboard">
                    <Leaderboard />
                </section>
                <PredictionHistory />
            </div>
            <Footer />
            <FloatingButton />
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found" style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem;">
            <h1 style="font-size: 3rem; font-weight: 900; color: #2563eb;">{"404"}</h1>
            <p>{"Looks like this ball went out of play."}</p>
            <Link<Route> to={Route::Home}>{"Back to the pitch"}</Link<Route>>
        </div>
    }
}
