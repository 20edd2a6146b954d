//! The sticker album: which slots are filled, how they page, how rarity looks.

pub const TOTAL_SLOTS: usize = 12;
pub const SLOTS_PER_PAGE: usize = 6;
/// Missing slots shown before the "view all" toggle appears.
pub const MISSING_PREVIEW: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

/// CSS classes for one rarity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RarityStyle {
    pub label: &'static str,
    pub card: &'static str,
    pub badge: &'static str,
    pub accent: &'static str,
}

impl Rarity {
    pub fn style(self) -> RarityStyle {
        match self {
            Rarity::Common => RarityStyle {
                label: "Common",
                card: "player-card rarity-common",
                badge: "rarity-badge badge-common",
                accent: "accent-common",
            },
            Rarity::Rare => RarityStyle {
                label: "Rare",
                card: "player-card rarity-rare",
                badge: "rarity-badge badge-rare",
                accent: "accent-rare",
            },
            Rarity::Legendary => RarityStyle {
                label: "Legendary",
                card: "player-card rarity-legendary",
                badge: "rarity-badge badge-legendary",
                accent: "accent-legendary",
            },
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Rarity::Common => "☆",
            Rarity::Rare => "🏆",
            Rarity::Legendary => "★",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub name: &'static str,
    pub number: u8,
    pub rarity: Rarity,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlbumSlot {
    pub slot: usize,
    pub card: Option<&'static Card>,
}

impl AlbumSlot {
    pub fn is_owned(&self) -> bool {
        self.card.is_some()
    }

    pub fn label(&self) -> String {
        format!("{:02}", self.slot)
    }
}

/// Slots 1..=TOTAL_SLOTS, the first `owned.len()` filled in order.
pub fn album_slots(owned: &'static [Card]) -> Vec<AlbumSlot> {
    (0..TOTAL_SLOTS)
        .map(|i| AlbumSlot {
            slot: i + 1,
            card: owned.get(i),
        })
        .collect()
}

pub fn completion_percent(owned: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((owned as f64 / total as f64) * 100.0).round() as u32
}

pub fn missing_slots(slots: &[AlbumSlot]) -> Vec<AlbumSlot> {
    slots.iter().filter(|s| !s.is_owned()).copied().collect()
}

/// Missing slots to render, truncated unless expanded.
pub fn visible_missing(missing: &[AlbumSlot], show_all: bool) -> &[AlbumSlot] {
    if show_all {
        missing
    } else {
        &missing[..missing.len().min(MISSING_PREVIEW)]
    }
}

pub fn has_more_missing(missing: &[AlbumSlot]) -> bool {
    missing.len() > MISSING_PREVIEW
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    pages: usize,
}

impl Pager {
    pub fn new(items: usize, per_page: usize) -> Self {
        let pages = if per_page == 0 {
            1
        } else {
            items.div_ceil(per_page).max(1)
        };
        Self { page: 0, pages }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.pages
    }

    pub fn prev(self) -> Self {
        self.go_to(self.page.saturating_sub(1))
    }

    pub fn next(self) -> Self {
        self.go_to(self.page + 1)
    }

    pub fn go_to(self, page: usize) -> Self {
        Self {
            page: page.min(self.pages - 1),
            ..self
        }
    }

    pub fn slice<'a, T>(&self, items: &'a [T], per_page: usize) -> &'a [T] {
        let start = (self.page * per_page).min(items.len());
        let end = (start + per_page).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::OWNED_CARDS;

    #[test]
    fn first_five_slots_are_owned() {
        let slots = album_slots(OWNED_CARDS);
        assert_eq!(slots.len(), TOTAL_SLOTS);
        assert!(slots[..5].iter().all(AlbumSlot::is_owned));
        assert!(slots[5..].iter().all(|s| !s.is_owned()));
        assert_eq!(slots[0].card.map(|c| c.name), Some("Rosa Strike"));
        assert_eq!(slots[11].label(), "12");
        assert_eq!(slots[2].label(), "03");
    }

    #[test]
    fn completion_rounds_like_the_badge() {
        assert_eq!(completion_percent(5, 12), 42);
        assert_eq!(completion_percent(2, 4), 50);
        assert_eq!(completion_percent(0, 0), 0);
    }

    #[test]
    fn pager_clamps_and_slices() {
        let slots = album_slots(OWNED_CARDS);
        let pager = Pager::new(slots.len(), SLOTS_PER_PAGE);
        assert_eq!(pager.pages(), 2);
        assert!(!pager.has_prev());
        assert_eq!(pager.prev().page(), 0);

        let last = pager.next().next().next();
        assert_eq!(last.page(), 1);
        assert!(!last.has_next());
        assert_eq!(last.slice(&slots, SLOTS_PER_PAGE)[0].slot, 7);
        assert_eq!(pager.go_to(9).page(), 1);
    }

    #[test]
    fn missing_preview_is_capped() {
        let slots = album_slots(OWNED_CARDS);
        let missing = missing_slots(&slots);
        assert_eq!(missing.len(), 7);
        assert!(!has_more_missing(&missing));
        assert_eq!(visible_missing(&missing, false).len(), 7);

        let none_owned = album_slots(&[]);
        let missing = missing_slots(&none_owned);
        assert!(has_more_missing(&missing));
        assert_eq!(visible_missing(&missing, false).len(), MISSING_PREVIEW);
        assert_eq!(visible_missing(&missing, true).len(), TOTAL_SLOTS);
    }

    #[test]
    fn rarity_styles_are_distinct() {
        let labels: Vec<&str> = [Rarity::Common, Rarity::Rare, Rarity::Legendary]
            .iter()
            .map(|r| r.style().label)
            .collect();
        assert_eq!(labels, vec!["Common", "Rare", "Legendary"]);
        assert_ne!(Rarity::Rare.style().card, Rarity::Legendary.style().card);
    }
}
