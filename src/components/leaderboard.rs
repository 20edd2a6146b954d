use yew::prelude::*;

use crate::mock_data::{Leader, LEADERBOARD};

fn render_leader(rank: usize, leader: &Leader) -> Html {
    html! {
        <div key={leader.id.to_string()} class="leader-card">
            if rank == 0 {
                <div class="leader-badge">{"👑"}</div>
            }
            <div class="leader-rank">{ format!("#{}", rank + 1) }</div>
            <img class="leader-avatar" src={leader.image} alt={leader.name} />
            <div class="leader-info">
                <p class="leader-name">{ leader.name }</p>
                <p class="leader-tagline">{ leader.tagline }</p>
                <p class="leader-streak">{ format!("🔥 {}", leader.streak) }</p>
            </div>
            <div class="leader-stats">
                <p class="leader-accuracy">{ format!("{}%", leader.accuracy) }</p>
                <p class="leader-cards">{ format!("{} cards", leader.cards) }</p>
            </div>
        </div>
    }
}

#[function_component(Leaderboard)]
pub fn leaderboard() -> Html {
    html! {
        <section class="leaderboard">
            <style>
                {r#"
                    .leaderboard { border-radius: 1.5rem; padding: 1.5rem; background: rgba(255, 255, 255, 0.6); border: 1px solid rgba(253, 230, 138, 0.6); }
                    .leaderboard h2 { font-size: 1.25rem; font-weight: 700; color: #d97706; }
                    .leader-card { position: relative; margin-top: 1rem; display: flex; align-items: center; gap: 0.75rem; border-radius: 1rem; padding: 0.75rem; background: linear-gradient(90deg, rgba(254, 243, 199, 0.6), rgba(255, 255, 255, 0.6)); }
                    .leader-badge { position: absolute; top: -0.5rem; left: -0.5rem; font-size: 1.25rem; }
                    .leader-rank { font-size: 1.125rem; font-weight: 900; color: #b45309; }
                    .leader-avatar { width: 3rem; height: 3rem; border-radius: 9999px; object-fit: cover; border: 2px solid #fbbf24; }
                    .leader-info { flex: 1; }
                    .leader-name { font-weight: 700; }
                    .leader-tagline, .leader-streak { font-size: 0.75rem; color: #6b7280; }
                    .leader-stats { text-align: right; }
                    .leader-accuracy { font-size: 1.25rem; font-weight: 800; color: #16a34a; }
                    .leader-cards { font-size: 0.75rem; color: #6b7280; }
                "#}
            </style>
            <h2>{"🏆 Top Predictors"}</h2>
            { for LEADERBOARD.iter().enumerate().map(|(rank, leader)| render_leader(rank, leader)) }
        </section>
    }
}
