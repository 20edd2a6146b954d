use yew::prelude::*;

use crate::collection::Card;

#[derive(Properties, PartialEq)]
pub struct PlayerCardProps {
    pub card: &'static Card,
}

#[function_component(PlayerCard)]
pub fn player_card(props: &PlayerCardProps) -> Html {
    let card = props.card;
    let style = card.rarity.style();

    html! {
        <div class={style.card}>
            <div class="player-card-image">
                <img src={card.image} alt={card.name} />
                <span class={style.badge}>
                    { card.rarity.icon() }{" "}{ style.label }
                </span>
            </div>
            <div class="player-card-body">
                <p class="player-card-name">{ card.name }</p>
                <p class={classes!("player-card-number", style.accent)}>
                    { format!("#{}", card.number) }
                </p>
            </div>
        </div>
    }
}
