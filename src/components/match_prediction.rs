use yew::prelude::*;

use crate::components::toast::ToastKind;
use crate::mock_data::{COMMUNITY_SPLIT, TODAYS_MATCH};
use crate::prediction::{
    wheel_offset, wheel_rotation, Mode, PredictionForm, Team, MAX_SCORE,
};

const WHEEL_RADIUS: f64 = 78.0;

#[derive(Clone, Copy, PartialEq)]
struct WheelAccent {
    class: &'static str,
}

const HOME_ACCENT: WheelAccent = WheelAccent { class: "wheel-home" };
const AWAY_ACCENT: WheelAccent = WheelAccent { class: "wheel-away" };

#[derive(Properties, PartialEq)]
struct ScoreWheelProps {
    label: &'static str,
    selected: Option<u8>,
    accent: WheelAccent,
    on_select: Callback<u8>,
    on_nudge: Callback<bool>,
}

#[function_component(ScoreWheel)]
fn score_wheel(props: &ScoreWheelProps) -> Html {
    let rotation = wheel_rotation(props.selected);
    let current = props.selected.unwrap_or(0);
    let can_decrease = current > 0;
    let can_increase = current < MAX_SCORE;
    let rotation_style = format!(
        "transform: rotate({}deg); transition: transform 650ms cubic-bezier(0.22, 0.61, 0.36, 1);",
        rotation
    );

    let decrement = {
        let on_nudge = props.on_nudge.clone();
        Callback::from(move |_: MouseEvent| on_nudge.emit(false))
    };
    let increment = {
        let on_nudge = props.on_nudge.clone();
        Callback::from(move |_: MouseEvent| on_nudge.emit(true))
    };

    let status = match props.selected {
        Some(score) => format!("{} locked", score),
        None => "Waiting".to_string(),
    };

    html! {
        <div class={classes!("wheel-card", props.accent.class)}>
            <div class="wheel-header">
                <div>
                    <p class="wheel-eyebrow">{"Spin to set"}</p>
                    <p class="wheel-title">{format!("{} goals", props.label)}</p>
                </div>
                <div class="wheel-status">{status}</div>
            </div>
            <div class="wheel">
                <button
                    class="wheel-nudge wheel-minus"
                    onclick={decrement}
                    disabled={!can_decrease}
                    aria-label={format!("Decrease {} goals", props.label)}
                >
                    {"−"}
                </button>
                <button
                    class="wheel-nudge wheel-plus"
                    onclick={increment}
                    disabled={!can_increase}
                    aria-label={format!("Increase {} goals", props.label)}
                >
                    {"+"}
                </button>
                <div class="wheel-glow" style={rotation_style.clone()}></div>
                <div class="wheel-center">
                    <span class="wheel-center-caption">{"now"}</span>
                    <span class="wheel-center-score">
                        { props.selected.map(|s| s.to_string()).unwrap_or_else(|| "?".to_string()) }
                    </span>
                    <span class="wheel-center-caption">{"goals"}</span>
                </div>
                <div class="wheel-ring" style={rotation_style}>
                    { for (0..=MAX_SCORE).map(|score| {
                        let (x, y) = wheel_offset(score, WHEEL_RADIUS);
                        let is_selected = props.selected == Some(score);
                        let on_select = props.on_select.clone();
                        html! {
                            <button
                                key={score.to_string()}
                                class={classes!("wheel-option", is_selected.then(|| "selected"))}
                                aria-pressed={is_selected.to_string()}
                                aria-label={format!("{} {} goals", props.label, score)}
                                style={format!(
                                    "transform: translate(-50%, -50%) translate({}px, {}px) rotate({}deg);",
                                    x, y, -rotation
                                )}
                                onclick={Callback::from(move |_: MouseEvent| on_select.emit(score))}
                            >
                                { score.to_string() }
                            </button>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MatchPredictionProps {
    pub on_toast: Callback<(ToastKind, String)>,
}

#[function_component(MatchPrediction)]
pub fn match_prediction(props: &MatchPredictionProps) -> Html {
    let form = use_state(PredictionForm::default);

    let on_select = |team: Team| {
        let form = form.clone();
        Callback::from(move |score: u8| {
            let mut next = *form;
            next.select(team, score);
            form.set(next);
        })
    };
    let on_nudge = |team: Team| {
        let form = form.clone();
        Callback::from(move |up: bool| {
            let mut next = *form;
            if next.nudge(team, up) {
                form.set(next);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *form;
            match next.submit() {
                Ok(line) => {
                    form.set(next);
                    on_toast.emit((
                        ToastKind::Success,
                        format!("Prediction locked: {} - {}", line.home, line.away),
                    ));
                }
                Err(e) => on_toast.emit((ToastKind::Error, e.to_string())),
            }
        })
    };
    let on_edit = {
        let form = form.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *form;
            next.edit();
            form.set(next);
            on_toast.emit((ToastKind::Info, "Update your scoreline before kickoff.".to_string()));
        })
    };
    let on_clear = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *form;
            next.clear();
            form.set(next);
        })
    };

    let body = match (form.mode(), form.locked()) {
        (Mode::Review, Some(line)) => html! {
            <div class="prediction-review">
                <div class="prediction-saved">
                    <div>
                        <p class="prediction-saved-title">{"Prediction locked in"}</p>
                        <p class="prediction-saved-note">{"You can update it until kickoff."}</p>
                    </div>
                    <span class="badge badge-saved">{"🔒 Saved"}</span>
                </div>
                <div class="prediction-scores">
                    <div class="prediction-score home">
                        <p>{TODAYS_MATCH.home}</p>
                        <p class="prediction-score-value">{line.home.to_string()}</p>
                    </div>
                    <div class="prediction-score away">
                        <p>{TODAYS_MATCH.away}</p>
                        <p class="prediction-score-value">{line.away.to_string()}</p>
                    </div>
                </div>
                <p class="prediction-analyst">{form.analyst_copy()}</p>
                <div class="prediction-actions">
                    <button class="button-outline" onclick={on_edit}>{"✎ Edit"}</button>
                    <button class="button-ghost" onclick={on_clear}>{"Clear"}</button>
                </div>
                <div class="prediction-share">
                    <span>{"Share your call"}</span>
                    <span aria-hidden="true">{"𝕏 · f"}</span>
                </div>
            </div>
        },
        _ => html! {
            <>
                <p class="section-eyebrow">{"Spin the score wheels"}</p>
                <ScoreWheel
                    label={TODAYS_MATCH.home_short}
                    selected={form.score(Team::Home)}
                    accent={HOME_ACCENT}
                    on_select={on_select(Team::Home)}
                    on_nudge={on_nudge(Team::Home)}
                />
                <ScoreWheel
                    label={TODAYS_MATCH.away_short}
                    selected={form.score(Team::Away)}
                    accent={AWAY_ACCENT}
                    on_select={on_select(Team::Away)}
                    on_nudge={on_nudge(Team::Away)}
                />
                <div class="community">
                    <p class="section-eyebrow">{"Community picks"}</p>
                    { for COMMUNITY_SPLIT.iter().map(|pick| html! {
                        <div key={pick.label} class="community-row">
                            <div class="community-label">
                                <span>{pick.label}</span>
                                <span>{format!("{}%", pick.percent)}</span>
                            </div>
                            <div class="community-track">
                                <div
                                    class={classes!("community-fill", pick.tone)}
                                    style={format!("width: {}%;", pick.percent)}
                                ></div>
                            </div>
                        </div>
                    }) }
                </div>
                <button
                    class="button-primary prediction-submit"
                    onclick={on_submit}
                    disabled={!form.can_submit()}
                >
                    {"Predict Now"}
                </button>
            </>
        },
    };

    html! {
        <div class="prediction-card">
            <style>
                {r#"
                    .prediction-card {
                        border-radius: 1.5rem;
                        border: 1px solid rgba(96, 165, 250, 0.3);
                        background: linear-gradient(135deg, rgba(59, 130, 246, 0.1), rgba(99, 102, 241, 0.1), rgba(6, 182, 212, 0.1));
                        padding: 1.5rem;
                    }
                    .prediction-head { display: flex; justify-content: space-between; align-items: center; gap: 0.75rem; }
                    .prediction-head h2 { font-size: 1.25rem; font-weight: 700; color: #2563eb; }
                    .prediction-kickoff { border-radius: 9999px; border: 1px solid rgba(96, 165, 250, 0.4); padding: 0.25rem 0.75rem; font-size: 0.75rem; }
                    .fixture { margin-top: 1.25rem; display: grid; grid-template-columns: repeat(3, 1fr); align-items: center; text-align: center; gap: 1rem; }
                    .fixture-crest { margin: 0 auto 0.5rem; width: 4rem; height: 4rem; border-radius: 9999px; display: flex; align-items: center; justify-content: center; font-size: 1.5rem; background: linear-gradient(135deg, #60a5fa, #22d3ee); }
                    .fixture-vs { font-size: 1.875rem; font-weight: 900; color: #4f46e5; }
                    .section-eyebrow { margin-top: 1.5rem; font-size: 0.75rem; font-weight: 600; text-transform: uppercase; letter-spacing: 0.1em; }
                    .wheel-card { margin-top: 1rem; border-radius: 1rem; border: 1px solid rgba(147, 197, 253, 0.4); padding: 1rem; }
                    .wheel-away { border-color: rgba(165, 180, 252, 0.4); }
                    .wheel-header { display: flex; justify-content: space-between; align-items: center; }
                    .wheel-eyebrow { font-size: 11px; font-weight: 700; text-transform: uppercase; letter-spacing: 0.4em; color: #4b5563; }
                    .wheel-title { font-size: 1.125rem; font-weight: 700; }
                    .wheel-status { border-radius: 9999px; padding: 0.25rem 0.75rem; font-size: 0.75rem; font-weight: 600; background: rgba(255, 255, 255, 0.7); }
                    .wheel { position: relative; margin: 1.25rem auto 0; width: 12rem; height: 12rem; }
                    .wheel-glow { position: absolute; inset: 0.75rem; border-radius: 9999px; opacity: 0.7; filter: blur(16px); background: linear-gradient(135deg, rgba(59,130,246,0.25), rgba(14,165,233,0.4), rgba(59,130,246,0.2)); }
                    .wheel-away .wheel-glow { background: linear-gradient(135deg, rgba(129,140,248,0.25), rgba(192,132,252,0.4), rgba(129,140,248,0.2)); }
                    .wheel-center { position: absolute; inset: 2.5rem; border-radius: 9999px; background: rgba(255, 255, 255, 0.8); display: flex; flex-direction: column; align-items: center; justify-content: center; z-index: 10; }
                    .wheel-center-caption { font-size: 10px; text-transform: uppercase; letter-spacing: 0.3em; color: #6b7280; }
                    .wheel-center-score { font-size: 2.25rem; font-weight: 900; }
                    .wheel-ring { position: absolute; inset: 0; z-index: 10; }
                    .wheel-option { position: absolute; top: 50%; left: 50%; width: 2.5rem; height: 2.5rem; border-radius: 9999px; border: 1px solid rgba(191, 219, 254, 0.4); background: rgba(255, 255, 255, 0.8); font-weight: 700; font-size: 0.875rem; }
                    .wheel-home .wheel-option.selected { color: white; border-color: transparent; background: linear-gradient(90deg, #3b82f6, #22d3ee); }
                    .wheel-away .wheel-option.selected { color: white; border-color: transparent; background: linear-gradient(90deg, #6366f1, #c084fc); }
                    .wheel-nudge { position: absolute; top: 50%; transform: translateY(-50%); width: 3rem; height: 3rem; border-radius: 9999px; border: 1px solid rgba(255, 255, 255, 0.3); color: white; font-size: 1.5rem; font-weight: 900; background: linear-gradient(135deg, #3b82f6, #06b6d4); }
                    .wheel-away .wheel-nudge { background: linear-gradient(135deg, #6366f1, #a855f7); }
                    .wheel-nudge:disabled { opacity: 0.3; pointer-events: none; }
                    .wheel-minus { left: -4rem; }
                    .wheel-plus { right: -4rem; }
                    .community { margin-top: 1.5rem; border-radius: 1rem; border: 1px solid rgba(165, 180, 252, 0.4); padding: 1rem; }
                    .community-row { margin-top: 0.75rem; }
                    .community-label { display: flex; justify-content: space-between; font-size: 0.75rem; font-weight: 600; }
                    .community-track { margin-top: 0.5rem; height: 0.5rem; border-radius: 9999px; background: rgba(229, 231, 235, 0.6); overflow: hidden; }
                    .community-fill { height: 0.5rem; border-radius: 9999px; }
                    .tone-green { background: #4ade80; }
                    .tone-amber { background: #fbbf24; }
                    .tone-blue { background: #60a5fa; }
                    .button-primary { width: 100%; margin-top: 1.5rem; padding: 1.25rem; border: none; border-radius: 1rem; color: white; font-size: 1.125rem; font-weight: 700; background: linear-gradient(90deg, #3b82f6, #6366f1); }
                    .button-primary:disabled { opacity: 0.5; }
                    .prediction-review { margin-top: 1.5rem; display: flex; flex-direction: column; gap: 1.5rem; }
                    .prediction-saved { display: flex; justify-content: space-between; align-items: center; border-radius: 1rem; padding: 1rem; border: 1px solid rgba(134, 239, 172, 0.4); background: rgba(220, 252, 231, 0.4); }
                    .prediction-saved-title { font-weight: 700; color: #14532d; }
                    .prediction-saved-note { font-size: 0.75rem; color: #166534; }
                    .badge-saved { border-radius: 9999px; padding: 0.25rem 0.75rem; color: white; font-weight: 700; background: linear-gradient(90deg, #22c55e, #10b981); }
                    .prediction-scores { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
                    .prediction-score { border-radius: 1rem; padding: 1rem; text-align: center; font-size: 0.75rem; font-weight: 700; text-transform: uppercase; }
                    .prediction-score.home { background: rgba(191, 219, 254, 0.5); }
                    .prediction-score.away { background: rgba(199, 210, 254, 0.5); }
                    .prediction-score-value { font-size: 3rem; font-weight: 900; }
                    .prediction-analyst { font-size: 0.875rem; color: #374151; }
                    .prediction-actions { display: flex; gap: 0.75rem; }
                    .button-outline, .button-ghost { flex: 1; padding: 0.75rem; border-radius: 1rem; font-weight: 600; }
                    .button-outline { border: 1px solid #93c5fd; background: white; }
                    .button-ghost { border: none; background: transparent; }
                    .prediction-share { display: flex; justify-content: space-between; font-size: 0.75rem; color: #6b7280; }
                "#}
            </style>
            <div class="prediction-head">
                <div>
                    <h2>{"Today's Match"}</h2>
                    <p style="font-size: 0.75rem; color: #4b5563;">{"Lock your scoreline before kickoff."}</p>
                </div>
                <div class="prediction-kickoff">{format!("⏱ {}", TODAYS_MATCH.kickoff_in)}</div>
            </div>
            <div class="fixture">
                <div>
                    <div class="fixture-crest">{"⚽"}</div>
                    <p>{TODAYS_MATCH.home}</p>
                </div>
                <div>
                    <span class="badge">{TODAYS_MATCH.competition}</span>
                    <div class="fixture-vs">{"VS"}</div>
                    <p style="font-size: 11px; text-transform: uppercase;">{TODAYS_MATCH.venue}</p>
                </div>
                <div>
                    <div class="fixture-crest">{"⚽"}</div>
                    <p>{TODAYS_MATCH.away}</p>
                </div>
            </div>
            { body }
        </div>
    }
}
