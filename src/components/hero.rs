use log::debug;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::components::animated_album::AnimatedAlbum;
use crate::config::DemoConfig;
use crate::hooks::use_typewriter;
use crate::mock_data::HERO_PHRASES;

pub const PREDICTION_SECTION_ID: &str = "prediction-section";

fn scroll_to_prediction() {
    let Some(section) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(PREDICTION_SECTION_ID))
    else {
        debug!("prediction section not mounted, nothing to scroll to");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let config = use_context::<DemoConfig>().unwrap_or_default();
    let headline = use_typewriter(HERO_PHRASES, config.typewriter);

    let on_start = Callback::from(|_: MouseEvent| scroll_to_prediction());

    html! {
        <div class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        width: 100%;
                        min-height: 100vh;
                        padding: 1rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        overflow: hidden;
                    }
                    .hero-greeting { display: flex; align-items: center; justify-content: center; gap: 0.5rem; }
                    .hero-greeting h1 { font-size: 1.25rem; font-weight: 800; }
                    .ball-rotate { display: inline-block; animation: rotate-continuous 2s linear infinite; }
                    .hero-typewriter {
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: #2563eb;
                        min-height: 1.5rem;
                        text-align: center;
                    }
                    .hero-caret { margin-left: 0.25rem; animation: pulse 1s ease-in-out infinite; }
                    .hero-album { width: 100%; max-width: 56rem; margin-top: 1.5rem; }
                    .hero-start {
                        margin-top: 4rem;
                        padding: 0.75rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        color: white;
                        font-weight: 600;
                        background: linear-gradient(135deg, #3b82f6 0%, #6366f1 100%);
                        animation: pulse-glow 2s ease-in-out infinite;
                    }
                    .fade-in-up { animation: fadeInUp 0.8s ease-out forwards; }
                    @keyframes rotate-continuous { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
                    @keyframes fadeInUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes pulse-glow {
                        0%, 100% { box-shadow: 0 0 20px rgba(59, 130, 246, 0.5), 0 0 40px rgba(59, 130, 246, 0.25); }
                        50% { box-shadow: 0 0 30px rgba(59, 130, 246, 0.8), 0 0 60px rgba(59, 130, 246, 0.4); }
                    }
                "#}
            </style>
            <div class="fade-in-up">
                <div class="hero-greeting">
                    <span class="ball-rotate">{"⚽"}</span>
                    <h1>{"Hi There!"}</h1>
                    <span class="ball-rotate">{"⚽"}</span>
                </div>
                <h2 class="hero-typewriter">
                    { headline }
                    <span class="hero-caret">{"|"}</span>
                </h2>
            </div>
            <div class="hero-album fade-in-up" style="animation-delay: 0.2s;">
                <AnimatedAlbum />
            </div>
            <div class="fade-in-up" style="animation-delay: 0.4s;">
                <button class="hero-start" onclick={on_start}>
                    {"Get started ↓"}
                </button>
            </div>
        </div>
    }
}
