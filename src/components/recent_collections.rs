use yew::prelude::*;

use crate::collection::{
    album_slots, completion_percent, has_more_missing, missing_slots, visible_missing, AlbumSlot,
    Pager, SLOTS_PER_PAGE, TOTAL_SLOTS,
};
use crate::components::player_card::PlayerCard;
use crate::mock_data::{ALBUM_STATS, OWNED_CARDS};

fn render_album_slot(slot: &AlbumSlot) -> Html {
    match slot.card {
        Some(card) => html! {
            <div key={slot.slot.to_string()} class="collection-slot owned">
                <img src={card.image} alt={card.name} />
                <span class="collection-slot-label">{ slot.label() }</span>
            </div>
        },
        None => html! {
            <div key={slot.slot.to_string()} class="collection-slot missing">
                <span class="collection-slot-mark">{"?"}</span>
                <span class="collection-slot-label">{ slot.label() }</span>
            </div>
        },
    }
}

#[function_component(RecentCollections)]
pub fn recent_collections() -> Html {
    let slots = use_memo(|_| album_slots(OWNED_CARDS), ());
    let pager = use_state(|| Pager::new(TOTAL_SLOTS, SLOTS_PER_PAGE));
    let show_all_missing = use_state(|| false);

    let missing = missing_slots(slots.as_slice());
    let shown_missing = visible_missing(&missing, *show_all_missing);
    let percent = completion_percent(OWNED_CARDS.len(), TOTAL_SLOTS);

    let on_prev = {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| pager.set(pager.prev()))
    };
    let on_next = {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| pager.set(pager.next()))
    };
    let toggle_missing = {
        let show_all_missing = show_all_missing.clone();
        Callback::from(move |_: MouseEvent| show_all_missing.set(!*show_all_missing))
    };

    html! {
        <section class="collections">
            <style>
                {r#"
                    .collections { border-radius: 1.5rem; padding: 1.5rem; background: rgba(255, 255, 255, 0.6); border: 1px solid rgba(191, 219, 254, 0.5); }
                    .collections h2 { font-size: 1.25rem; font-weight: 700; color: #4f46e5; }
                    .collection-stats { margin-top: 1rem; display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; }
                    .collection-stat { border-radius: 1rem; padding: 0.75rem; background: rgba(238, 242, 255, 0.7); }
                    .collection-stat-label { font-size: 0.75rem; color: #6b7280; }
                    .collection-stat-value { font-size: 1.25rem; font-weight: 800; }
                    .collection-stat-note { font-size: 0.75rem; color: #16a34a; }
                    .collection-progress { margin-top: 1rem; height: 0.5rem; border-radius: 9999px; background: #e5e7eb; overflow: hidden; }
                    .collection-progress-fill { height: 100%; background: linear-gradient(90deg, #3b82f6, #6366f1); }
                    .owned-strip { margin-top: 1.25rem; display: flex; gap: 0.75rem; overflow-x: auto; padding-bottom: 0.5rem; }
                    .player-card { flex: 0 0 8rem; border-radius: 1rem; overflow: hidden; background: white; border: 2px solid transparent; }
                    .player-card-image { position: relative; height: 10rem; }
                    .player-card-image img { width: 100%; height: 100%; object-fit: cover; }
                    .player-card-body { padding: 0.5rem; }
                    .player-card-name { font-size: 0.875rem; font-weight: 700; }
                    .player-card-number { font-size: 0.75rem; font-weight: 600; }
                    .rarity-common { border-color: #d1d5db; }
                    .rarity-rare { border-color: #60a5fa; box-shadow: 0 0 12px rgba(59, 130, 246, 0.3); }
                    .rarity-legendary { border-color: #fbbf24; box-shadow: 0 0 16px rgba(251, 191, 36, 0.45); }
                    .rarity-badge { position: absolute; top: 0.5rem; left: 0.5rem; border-radius: 9999px; padding: 0.125rem 0.5rem; font-size: 10px; font-weight: 700; color: white; }
                    .badge-common { background: #6b7280; }
                    .badge-rare { background: linear-gradient(90deg, #3b82f6, #06b6d4); }
                    .badge-legendary { background: linear-gradient(90deg, #f59e0b, #f97316); }
                    .accent-common { color: #6b7280; }
                    .accent-rare { color: #2563eb; }
                    .accent-legendary { color: #d97706; }
                    .collection-pager { margin-top: 1.25rem; display: flex; justify-content: space-between; align-items: center; font-size: 0.875rem; }
                    .collection-pager button { border: 1px solid #c7d2fe; border-radius: 9999px; padding: 0.25rem 0.75rem; background: white; }
                    .collection-pager button:disabled { opacity: 0.4; }
                    .collection-grid { margin-top: 0.75rem; display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; }
                    .collection-slot { position: relative; aspect-ratio: 3 / 4; border-radius: 0.75rem; overflow: hidden; display: flex; align-items: center; justify-content: center; }
                    .collection-slot.owned img { width: 100%; height: 100%; object-fit: cover; }
                    .collection-slot.missing { border: 2px dashed rgba(59, 130, 246, 0.35); background: rgba(239, 246, 255, 0.6); }
                    .collection-slot-mark { font-size: 1.5rem; font-weight: 700; color: rgba(96, 165, 250, 0.7); }
                    .collection-slot-label { position: absolute; bottom: 0.25rem; right: 0.5rem; font-size: 10px; font-weight: 700; color: #4b5563; }
                    .collection-dots { display: flex; gap: 0.5rem; }
                    .collection-pager .collection-dot { width: 0.5rem; height: 0.5rem; padding: 0; border: none; border-radius: 9999px; background: #c7d2fe; }
                    .collection-pager .collection-dot.current { width: 1.5rem; background: #4f46e5; }
                    .missing-grid { margin-top: 0.75rem; display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.5rem; }
                    .missing-toggle { margin-top: 0.75rem; border: none; background: none; color: #2563eb; font-weight: 600; }
                "#}
            </style>
            <h2>{"Recent Collections"}</h2>
            <div class="collection-stats">
                { for ALBUM_STATS.iter().map(|stat| html! {
                    <div key={stat.label} class="collection-stat">
                        <p class="collection-stat-label">{ stat.label }</p>
                        <p class="collection-stat-value">{ stat.value }</p>
                        <p class="collection-stat-note">{ stat.note }</p>
                    </div>
                }) }
            </div>
            <div class="collection-progress">
                <div class="collection-progress-fill" style={format!("width: {}%;", percent)}></div>
            </div>

            <div class="owned-strip">
                { for OWNED_CARDS.iter().map(|card| html! {
                    <PlayerCard key={card.number.to_string()} card={card} />
                }) }
            </div>

            <div class="collection-pager">
                <button onclick={on_prev} disabled={!pager.has_prev()}>{"‹ Prev"}</button>
                <div class="collection-dots">
                    { for (0..pager.pages()).map(|page| {
                        let pager = pager.clone();
                        let is_current = page == pager.page();
                        html! {
                            <button
                                key={page.to_string()}
                                class={classes!("collection-dot", is_current.then(|| "current"))}
                                aria-label={format!("Page {}", page + 1)}
                                onclick={Callback::from(move |_: MouseEvent| pager.set(pager.go_to(page)))}
                            ></button>
                        }
                    }) }
                </div>
                <button onclick={on_next} disabled={!pager.has_next()}>{"Next ›"}</button>
            </div>
            <div class="collection-grid">
                { for pager.slice(slots.as_slice(), SLOTS_PER_PAGE).iter().map(render_album_slot) }
            </div>

            <h3 style="margin-top: 1.5rem; font-weight: 700;">
                { format!("Still needed ({})", missing.len()) }
            </h3>
            <div class="missing-grid">
                { for shown_missing.iter().map(render_album_slot) }
            </div>
            if has_more_missing(&missing) {
                <button class="missing-toggle" onclick={toggle_missing}>
                    { if *show_all_missing { "Show less" } else { "View all missing" } }
                </button>
            }
        </section>
    }
}
