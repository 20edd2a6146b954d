use yew::prelude::*;

use crate::mock_data::{sorted_history, HistoryItem, MatchOutcome};

fn render_item(item: &HistoryItem) -> Html {
    let final_class = match item.outcome {
        MatchOutcome::Pending => "history-final muted",
        _ => "history-final",
    };

    html! {
        <div key={item.id.to_string()} class={item.outcome.card_class()}>
            <div class="history-icon">{ item.outcome.icon() }</div>
            <div class="history-match">
                <p class="history-opponent">{ format!("vs {}", item.opponent) }</p>
                <p class="history-competition">{ item.competition }</p>
            </div>
            <div class="history-scores">
                <p>{"Predicted "}<strong>{ item.predicted_label() }</strong></p>
                <p class={final_class}>{"Final "}<strong>{ item.final_label() }</strong></p>
            </div>
        </div>
    }
}

#[function_component(PredictionHistory)]
pub fn prediction_history() -> Html {
    let items = use_memo(|_| sorted_history(), ());

    html! {
        <section class="history">
            <style>
                {r#"
                    .history { border-radius: 1.5rem; padding: 1.5rem; background: rgba(255, 255, 255, 0.6); border: 1px solid rgba(191, 219, 254, 0.5); }
                    .history h2 { font-size: 1.25rem; font-weight: 700; color: #2563eb; }
                    .history-card { margin-top: 0.75rem; display: flex; align-items: center; gap: 0.75rem; border-radius: 1rem; padding: 0.75rem; border-left: 4px solid transparent; }
                    .outcome-win { border-left-color: #22c55e; background: rgba(220, 252, 231, 0.5); }
                    .outcome-loss { border-left-color: #ef4444; background: rgba(254, 226, 226, 0.5); }
                    .outcome-pending { border-left-color: #f59e0b; background: rgba(254, 243, 199, 0.5); }
                    .history-icon { font-size: 1.25rem; width: 2rem; text-align: center; }
                    .history-match { flex: 1; }
                    .history-opponent { font-weight: 700; }
                    .history-competition { font-size: 0.75rem; color: #6b7280; }
                    .history-scores { text-align: right; font-size: 0.75rem; }
                    .history-final.muted { color: #9ca3af; }
                "#}
            </style>
            <h2>{"Your Prediction History"}</h2>
            { for items.iter().map(render_item) }
        </section>
    }
}
