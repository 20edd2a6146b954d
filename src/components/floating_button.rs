use yew::prelude::*;

use crate::config::DemoConfig;
use crate::hooks::use_chance_sequence;
use crate::sequence::{ChanceEvent, Outcome, Stage};

fn ball_animation(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Goal => "animation: ball-to-goal 2.5s ease-in forwards;",
        Outcome::Miss => "animation: ball-near-miss 2.5s ease-in forwards;",
    }
}

fn render_event(event: &ChanceEvent) -> Html {
    let stage_view = match event.stage {
        Stage::Intro => html! {
            <div class="chance-center fade-in">
                <p class="chance-intro">{"Let's test your chance today!"}</p>
            </div>
        },
        Stage::Countdown => match event.countdown {
            // Keyed so the pop animation replays on every number.
            Some(n) => html! {
                <div class="chance-center">
                    <p key={n.to_string()} class="chance-countdown">{n.to_string()}</p>
                </div>
            },
            None => html! {},
        },
        Stage::Animation | Stage::Result => html! {
            <div class="chance-pitch">
                <div class="chance-goal-icon">{"🥅"}</div>
                <div class="chance-ball" style={ball_animation(event.outcome())}>{"⚽"}</div>
            </div>
        },
    };

    let result_view = match (event.stage, event.result) {
        (Stage::Result, Some(Outcome::Goal)) => html! {
            <div class="chance-center fade-in">
                <p class="chance-result goal">{"GOOOAAL! 🎉"}</p>
            </div>
        },
        (Stage::Result, Some(Outcome::Miss)) => html! {
            <div class="chance-center fade-in">
                <p class="chance-result miss">{"Sorry, try again! 😅"}</p>
            </div>
        },
        _ => html! {},
    };

    html! {
        <div key={event.id.to_string()}>
            <div class="chance-overlay fade-in"></div>
            { stage_view }
            { result_view }
        </div>
    }
}

#[function_component(FloatingButton)]
pub fn floating_button() -> Html {
    let config = use_context::<DemoConfig>().unwrap_or_default();
    let chance = use_chance_sequence(config.chance);
    let is_active = chance.view.is_active;

    let onclick = {
        let trigger = chance.trigger.clone();
        Callback::from(move |_: MouseEvent| trigger.emit(()))
    };

    html! {
        <>
            <style>
                {r#"
                    .chance-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.45);
                        backdrop-filter: blur(4px);
                        z-index: 40;
                    }
                    .chance-center {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        pointer-events: none;
                        z-index: 50;
                        text-align: center;
                    }
                    .chance-intro { font-size: 2.25rem; font-weight: 700; color: #60a5fa; }
                    .chance-countdown {
                        font-size: 200px;
                        line-height: 1;
                        font-weight: 900;
                        color: #60a5fa;
                        animation: countdown-pop 0.6s ease-out;
                    }
                    .chance-result { font-weight: 700; }
                    .chance-result.goal { font-size: 3.75rem; color: #4ade80; }
                    .chance-result.miss { font-size: 3rem; color: #f87171; }
                    .chance-pitch { position: fixed; inset: 0; pointer-events: none; z-index: 50; }
                    .chance-goal-icon {
                        position: fixed;
                        top: 10vh;
                        left: 50%;
                        transform: translateX(-50%);
                        font-size: 4rem;
                        animation: pulse 2s ease-in-out infinite;
                    }
                    .chance-ball { position: fixed; font-size: 2.25rem; transform: translate(-50%, 0); }
                    .floating-button {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        z-index: 40;
                        width: 4rem;
                        height: 4rem;
                        border: none;
                        background: none;
                        transition: transform 0.3s ease-out, opacity 0.3s;
                    }
                    .floating-button:hover:not(:disabled) { transform: scale(1.1); }
                    .floating-button:disabled { opacity: 0.5; cursor: not-allowed; }
                    .floating-button img { width: 100%; height: 100%; object-fit: contain; }
                    @keyframes ball-to-goal {
                        0% { left: calc(100vw - 32px); bottom: 32px; opacity: 1; }
                        30% { left: 50%; bottom: 40%; opacity: 1; }
                        70% { left: 50%; bottom: 65%; opacity: 1; }
                        100% { left: 50%; bottom: calc(100vh - 96px); opacity: 0; }
                    }
                    @keyframes ball-near-miss {
                        0% { left: calc(100vw - 32px); bottom: 32px; opacity: 1; }
                        25% { left: 50%; bottom: 35%; opacity: 1; }
                        60% { left: 45%; bottom: 60%; opacity: 1; }
                        80% { left: 25%; bottom: 55%; opacity: 1; }
                        100% { left: 10%; bottom: 70%; opacity: 0; }
                    }
                    @keyframes countdown-pop {
                        0% { transform: scale(0.5); opacity: 0; }
                        50% { transform: scale(1.1); opacity: 1; }
                        100% { transform: scale(1); opacity: 1; }
                    }
                "#}
            </style>
            { for chance.view.events.iter().map(render_event) }
            <button
                class="floating-button"
                onclick={onclick}
                disabled={is_active}
                aria-label="Test your chance"
            >
                <img src="/assets/floating_button.png" alt="Test your chance" />
            </button>
        </>
    }
}
