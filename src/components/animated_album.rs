use yew::prelude::*;

use crate::config::DemoConfig;
use crate::hooks::use_album_cycle;
use crate::mock_data::{HeroSlot, HERO_LEFT_PAGE, HERO_RIGHT_PAGE};

fn render_slot(slot: &HeroSlot) -> Html {
    match slot.image {
        Some(image) => html! {
            <div key={slot.id.to_string()} class="album-slot">
                <div class="album-slot-backing"></div>
                <div
                    class="album-slot-card"
                    style={format!("animation: cardFlyInOut 6s ease-in-out {}s infinite both;", slot.delay_s)}
                >
                    <img src={image} alt={format!("Player card {}", slot.id)} />
                </div>
            </div>
        },
        None => html! {
            <div key={slot.id.to_string()} class="album-slot album-slot-empty">
                <div class="album-slot-shimmer"></div>
                <div class="album-slot-mark">{"?"}</div>
                <div class="album-slot-caption">{"Empty"}</div>
            </div>
        },
    }
}

/// The floating 3D album in the hero. Its right page flips shut and open on a timer.
#[function_component(AnimatedAlbum)]
pub fn animated_album() -> Html {
    let config = use_context::<DemoConfig>().unwrap_or_default();
    let is_open = use_album_cycle(config.album);

    let left_page_class = classes!("album-page", "album-left", is_open.then(|| "open"));
    let right_page_class = classes!("album-page", "album-right", (!is_open).then(|| "closed"));

    html! {
        <>
            <style>
                {r#"
                    .album-stage {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        pointer-events: none;
                        perspective: 2500px;
                    }
                    .album-book {
                        position: relative;
                        display: flex;
                        transform-style: preserve-3d;
                        animation: float 4s ease-in-out infinite;
                        scale: 0.35;
                    }
                    @media (min-width: 768px) { .album-book { scale: 0.65; } }
                    .album-page {
                        position: relative;
                        width: 14rem;
                        height: 21rem;
                        transform-style: preserve-3d;
                        transition: all 3s ease-in-out;
                    }
                    .album-left { border-radius: 1.5rem; overflow: hidden; }
                    .album-left.open { border-radius: 1.5rem 0 0 1.5rem; }
                    .album-right { transform-origin: left; transform: rotateY(0deg); z-index: 1; }
                    .album-right.closed { transform: rotateY(-180deg); z-index: 3; }
                    .album-face {
                        position: absolute;
                        inset: 0;
                        padding: 1rem;
                        backface-visibility: hidden;
                        background: linear-gradient(135deg, rgba(239, 246, 255, 0.95), rgba(238, 242, 255, 0.95));
                        border: 2px solid rgba(191, 219, 254, 0.4);
                    }
                    .album-left .album-face { position: relative; height: 100%; }
                    .album-right .album-face { border-radius: 0 1.5rem 1.5rem 0; }
                    .album-cover {
                        transform: rotateY(180deg);
                        border-radius: 1.5rem;
                        background: linear-gradient(135deg, #2563eb, #4f46e5, #7e22ce);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        color: white;
                    }
                    .album-page-number { text-align: center; font-weight: 700; font-size: 0.875rem; color: #4f46e5; }
                    .album-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 0.5rem;
                        justify-items: center;
                        align-items: center;
                        height: 100%;
                        padding-bottom: 1rem;
                    }
                    .album-slot { position: relative; width: 3rem; height: 4rem; border-radius: 0.75rem; overflow: hidden; }
                    .album-slot-backing { position: absolute; inset: 0; border: 2px solid rgba(147, 197, 253, 0.6); border-radius: 0.75rem; }
                    .album-slot-card { position: absolute; inset: 0; border-radius: 0.75rem; }
                    .album-slot-card img { width: 100%; height: 100%; object-fit: cover; border-radius: 0.75rem; }
                    .album-slot-empty {
                        border: 2px dashed rgba(59, 130, 246, 0.3);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        animation: emptySlotPulse 2s ease-in-out infinite;
                    }
                    .album-slot-shimmer {
                        position: absolute;
                        inset: 0;
                        opacity: 0.3;
                        background: linear-gradient(90deg, transparent, rgba(59, 130, 246, 0.3), transparent);
                        background-size: 200% 100%;
                        animation: shimmer 3s ease-in-out infinite;
                    }
                    .album-slot-mark { font-weight: 700; color: rgba(96, 165, 250, 0.6); }
                    .album-slot-caption { font-size: 7px; font-weight: 600; color: rgba(96, 165, 250, 0.7); }
                    .album-progress { margin-top: 0.5rem; text-align: center; font-size: 0.75rem; font-weight: 600; color: #4b5563; }
                    .album-progress-bar { width: 100%; height: 6px; border-radius: 9999px; background: #e5e7eb; margin-top: 0.25rem; }
                    .album-progress-fill { height: 6px; border-radius: 9999px; background: linear-gradient(90deg, #3b82f6, #6366f1); }
                    .album-sparkle { position: absolute; color: #fde047; animation: sparkle 3s ease-in-out infinite; }
                    @keyframes cardFlyInOut {
                        0% { opacity: 0; transform: translateY(-300px) translateX(200px) rotateZ(45deg) scale(0.2); }
                        15% { opacity: 1; }
                        25% { transform: none; opacity: 1; }
                        75% { transform: none; opacity: 1; }
                        85% { opacity: 1; }
                        100% { opacity: 0; transform: translateY(300px) translateX(-200px) rotateZ(-45deg) scale(0.2); }
                    }
                    @keyframes emptySlotPulse {
                        0%, 100% { border-color: rgba(59, 130, 246, 0.3); box-shadow: 0 0 0 0 rgba(59, 130, 246, 0.4); }
                        50% { border-color: rgba(59, 130, 246, 0.6); box-shadow: 0 0 20px 5px rgba(59, 130, 246, 0.2); }
                    }
                    @keyframes shimmer {
                        0% { background-position: -200% center; }
                        100% { background-position: 200% center; }
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0px); }
                        50% { transform: translateY(-10px); }
                    }
                    @keyframes sparkle {
                        0%, 100% { opacity: 0; transform: scale(0) rotate(0deg); }
                        50% { opacity: 1; transform: scale(1) rotate(180deg); }
                    }
                "#}
            </style>
            <div class="album-stage">
                <div class="album-book">
                    <div class={left_page_class}>
                        <div class="album-face">
                            <h3 class="album-page-number">{"1"}</h3>
                            <div class="album-grid">
                                { for HERO_LEFT_PAGE.iter().map(render_slot) }
                            </div>
                        </div>
                    </div>
                    <div class={right_page_class}>
                        <div class="album-face">
                            <h3 class="album-page-number">{"2"}</h3>
                            <div class="album-grid">
                                { for HERO_RIGHT_PAGE.iter().map(render_slot) }
                            </div>
                            <div class="album-progress">
                                {"5/12 Collected"}
                                <div class="album-progress-bar">
                                    <div class="album-progress-fill" style="width: 42%;"></div>
                                </div>
                            </div>
                        </div>
                        <div class="album-face album-cover">
                            <div class="album-sparkle" style="top: 2rem; right: 2rem;">{"✨"}</div>
                            <div class="album-sparkle" style="bottom: 3rem; left: 2rem; animation-delay: 1s;">{"✨"}</div>
                            <div class="album-sparkle" style="top: 33%; right: 1.5rem; animation-delay: 2s;">{"⭐"}</div>
                            <div style="font-size: 3.75rem;">{"⚽"}</div>
                            <h2 style="font-weight: 900; letter-spacing: 0.1em;">{"PLAYER"}</h2>
                            <h2 style="font-weight: 900; letter-spacing: 0.1em; color: #fde047;">{"ALBUM"}</h2>
                            <p style="font-size: 0.875rem; font-weight: 600;">{"Collect & Win"}</p>
                        </div>
                    </div>
                </div>
            </div>
        </>
    }
}
