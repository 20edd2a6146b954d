use yew::prelude::*;

use crate::config::{AlbumTiming, ChanceTiming, TypewriterTiming};
use crate::sequence::{AlbumCycle, ChanceEvent, ChanceSequence, ThreadRoll, Typewriter};
use crate::timing::{BrowserScheduler, Driver};

/// `true` while the hero album is open. Timers die with the component.
#[hook]
pub fn use_album_cycle(timing: AlbumTiming) -> bool {
    let is_open = use_state(|| false);

    {
        let is_open = is_open.clone();
        use_effect_with_deps(
            move |timing| {
                let setter = is_open.setter();
                let driver = Driver::start(
                    AlbumCycle::new(*timing),
                    BrowserScheduler,
                    move |album: &AlbumCycle| setter.set(album.is_open()),
                );
                move || drop(driver)
            },
            timing,
        );
    }

    *is_open
}

#[hook]
pub fn use_typewriter(phrases: &'static [&'static str], timing: TypewriterTiming) -> String {
    let text = use_state(String::new);

    {
        let text = text.clone();
        use_effect_with_deps(
            move |timing| {
                let setter = text.setter();
                let driver = Driver::start(
                    Typewriter::new(phrases, *timing),
                    BrowserScheduler,
                    move |tw: &Typewriter| setter.set(tw.text()),
                );
                move || drop(driver)
            },
            timing,
        );
    }

    (*text).clone()
}

#[derive(Clone, PartialEq, Default)]
pub struct ChanceView {
    pub events: Vec<ChanceEvent>,
    pub is_active: bool,
}

impl ChanceView {
    fn of(sequence: &ChanceSequence) -> Self {
        Self {
            events: sequence.events().to_vec(),
            is_active: sequence.is_active(),
        }
    }
}

pub struct ChanceHandle {
    pub view: ChanceView,
    pub trigger: Callback<()>,
}

/// The floating button's mini-game. `trigger` is a no-op while a run is live.
#[hook]
pub fn use_chance_sequence(timing: ChanceTiming) -> ChanceHandle {
    let view = use_state(ChanceView::default);
    let driver = use_mut_ref(|| None::<Driver<ChanceSequence, BrowserScheduler>>);

    {
        let view = view.clone();
        let driver = driver.clone();
        use_effect_with_deps(
            move |timing| {
                let setter = view.setter();
                *driver.borrow_mut() = Some(Driver::start(
                    ChanceSequence::new(*timing, ThreadRoll),
                    BrowserScheduler,
                    move |seq: &ChanceSequence| setter.set(ChanceView::of(seq)),
                ));
                move || {
                    let old = driver.borrow_mut().take();
                    drop(old);
                }
            },
            timing,
        );
    }

    let trigger = {
        let driver = driver.clone();
        Callback::from(move |_| {
            if let Some(driver) = driver.borrow().as_ref() {
                driver.update(|seq| seq.trigger().is_some());
            }
        })
    };

    ChanceHandle {
        view: (*view).clone(),
        trigger,
    }
}
