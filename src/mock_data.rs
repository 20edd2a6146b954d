//! Hard-coded demo content. Nothing here is fetched or saved.

use crate::collection::{Card, Rarity};

pub const HERO_PHRASES: &[&str] = &[
    "Score & Predict",
    "Collect & Win",
    "Win & Celebrate",
    "Kheder & Ranem",
    "Predict & Win",
    "Powered by MatchSense AI",
];

pub const OWNED_CARDS: &[Card] = &[
    Card { name: "Rosa Strike", number: 1, rarity: Rarity::Legendary, image: "/assets/player-card-1.png" },
    Card { name: "Azure Ace", number: 7, rarity: Rarity::Rare, image: "/assets/player-card-2.png" },
    Card { name: "Violet Power", number: 5, rarity: Rarity::Rare, image: "/assets/player-card-3.png" },
    Card { name: "Golden Star", number: 2, rarity: Rarity::Legendary, image: "/assets/player-card-4.png" },
    Card { name: "Green Thunder", number: 9, rarity: Rarity::Rare, image: "/assets/player-card-5.png" },
];

/// A slot on one page of the hero album. `delay_s` staggers the fly-in animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroSlot {
    pub id: u8,
    pub image: Option<&'static str>,
    pub delay_s: f32,
}

const fn filled(id: u8, image: &'static str, delay_s: f32) -> HeroSlot {
    HeroSlot { id, image: Some(image), delay_s }
}

const fn empty(id: u8) -> HeroSlot {
    HeroSlot { id, image: None, delay_s: 0.0 }
}

pub const HERO_LEFT_PAGE: [HeroSlot; 6] = [
    filled(1, "/assets/player-card-1.png", 0.0),
    empty(2),
    filled(3, "/assets/player-card-2.png", 1.5),
    empty(4),
    filled(5, "/assets/player-card-3.png", 3.0),
    empty(6),
];

pub const HERO_RIGHT_PAGE: [HeroSlot; 6] = [
    filled(7, "/assets/player-card-4.png", 4.5),
    empty(8),
    filled(9, "/assets/player-card-5.png", 6.0),
    empty(10),
    empty(11),
    empty(12),
];

pub struct Fixture {
    pub home: &'static str,
    pub home_short: &'static str,
    pub away: &'static str,
    pub away_short: &'static str,
    pub competition: &'static str,
    pub venue: &'static str,
    pub kickoff_in: &'static str,
}

pub const TODAYS_MATCH: Fixture = Fixture {
    home: "Barcelona",
    home_short: "Barcelona",
    away: "Real Madrid",
    away_short: "Madrid",
    competition: "La Liga",
    venue: "Camp Nou",
    kickoff_in: "3h 24m",
};

pub struct CommunityPick {
    pub label: &'static str,
    pub percent: u8,
    pub tone: &'static str,
}

pub const COMMUNITY_SPLIT: [CommunityPick; 3] = [
    CommunityPick { label: "Barcelona win", percent: 68, tone: "tone-green" },
    CommunityPick { label: "Draw", percent: 20, tone: "tone-amber" },
    CommunityPick { label: "Madrid win", percent: 12, tone: "tone-blue" },
];

pub struct AlbumStat {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

pub const ALBUM_STATS: [AlbumStat; 3] = [
    AlbumStat { label: "Album completion", value: "5 / 12", note: "42% complete" },
    AlbumStat { label: "Legendary owned", value: "2 / 4", note: "50% legendary rate" },
    AlbumStat { label: "Collection value", value: "2,450", note: "+180 this week" },
];

pub struct Leader {
    pub id: u32,
    pub name: &'static str,
    pub tagline: &'static str,
    pub cards: u32,
    pub streak: &'static str,
    pub accuracy: u8,
    pub image: &'static str,
}

pub const LEADERBOARD: [Leader; 2] = [
    Leader {
        id: 1,
        name: "Sarah",
        tagline: "Precision Queen",
        cards: 38,
        streak: "7 perfect calls",
        accuracy: 96,
        image: "/assets/sarah.png",
    },
    Leader {
        id: 2,
        name: "Kheder",
        tagline: "Comeback Pro",
        cards: 33,
        streak: "4 match streak",
        accuracy: 92,
        image: "/assets/kheder.png",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win,
    Loss,
    Pending,
}

impl MatchOutcome {
    pub fn icon(self) -> &'static str {
        match self {
            MatchOutcome::Win => "✔",
            MatchOutcome::Loss => "✖",
            MatchOutcome::Pending => "⏱",
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            MatchOutcome::Win => "history-card outcome-win",
            MatchOutcome::Loss => "history-card outcome-loss",
            MatchOutcome::Pending => "history-card outcome-pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryItem {
    pub id: u32,
    pub opponent: &'static str,
    pub competition: &'static str,
    pub predicted: (u8, u8),
    pub actual: Option<(u8, u8)>,
    pub outcome: MatchOutcome,
}

impl HistoryItem {
    pub fn predicted_label(&self) -> String {
        format!("{}-{}", self.predicted.0, self.predicted.1)
    }

    pub fn final_label(&self) -> String {
        match self.actual {
            Some((home, away)) => format!("{}-{}", home, away),
            None => "—".to_string(),
        }
    }
}

pub const HISTORY: [HistoryItem; 4] = [
    HistoryItem {
        id: 1,
        opponent: "Manchester City",
        competition: "UCL Semi",
        predicted: (2, 1),
        actual: Some((2, 1)),
        outcome: MatchOutcome::Win,
    },
    HistoryItem {
        id: 2,
        opponent: "Atletico Madrid",
        competition: "La Liga",
        predicted: (1, 0),
        actual: Some((1, 2)),
        outcome: MatchOutcome::Loss,
    },
    HistoryItem {
        id: 3,
        opponent: "Sevilla",
        competition: "La Liga",
        predicted: (3, 1),
        actual: Some((3, 1)),
        outcome: MatchOutcome::Win,
    },
    HistoryItem {
        id: 4,
        opponent: "Real Betis",
        competition: "Copa del Rey",
        predicted: (2, 2),
        actual: None,
        outcome: MatchOutcome::Pending,
    },
];

/// Newest first.
pub fn sorted_history() -> Vec<HistoryItem> {
    let mut items = HISTORY.to_vec();
    items.sort_by(|a, b| b.id.cmp(&a.id));
    items
}
