//! Dioxus hooks binding the core state machines to component lifetimes.
//!
//! Each hook acquires its resource (timer, scroll listener) once per mount and
//! releases it in `use_drop`, so a discarded view never receives another tick
//! or scroll callback.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::config;
use crate::core::carousel::CarouselController;
use crate::core::hover::HoverRegistry;
use crate::core::locale::{Locale, LocaleStore};
use crate::core::platform::{self, ScrollSubscription};
use crate::core::rotation::RotationState;
use crate::core::scroll::ScrollFlag;
use crate::core::timer::IntervalTimer;
use crate::core::timing;
use crate::i18n;

/// Run `on_tick` every `interval_ms` for as long as the calling component is
/// mounted. A zero interval is logged and no timer is started.
pub fn use_interval(interval_ms: u64, on_tick: impl FnMut() + 'static) -> Option<IntervalTimer> {
    let timer = use_hook(move || match IntervalTimer::new(interval_ms) {
        Ok(timer) => {
            let runner = timer.clone();
            spawn(async move {
                let ticks = runner.run(timing::sleep_ms, on_tick).await;
                tracing::debug!(ticks, "interval loop finished");
            });
            Some(timer)
        }
        Err(err) => {
            tracing::error!("{err}; rotation disabled");
            None
        }
    });

    let releasing = timer.clone();
    use_drop(move || {
        if let Some(timer) = releasing {
            timer.stop();
        }
    });

    timer
}

/// Auto-advancing index over `total` items (hero titles).
pub fn use_rotator(interval_ms: u64, total: usize) -> Signal<RotationState> {
    let mut state = use_signal(|| RotationState::new(total));
    if state.peek().total() != total {
        state.with_mut(|s| s.set_total(total));
    }

    use_interval(interval_ms, move || {
        state.with_mut(|s| {
            s.tick();
        });
    });

    state
}

/// Auto-advancing carousel with manual navigation (services).
pub fn use_carousel(interval_ms: u64, total: usize) -> Signal<CarouselController> {
    let mut carousel = use_signal(|| CarouselController::new(total));
    if carousel.peek().total() != total {
        carousel.with_mut(|c| c.set_total(total));
    }

    use_interval(interval_ms, move || {
        carousel.with_mut(|c| {
            c.tick();
        });
    });

    carousel
}

/// `true` once the window has scrolled past `threshold_px`.
pub fn use_scroll_flag(threshold_px: f64) -> Signal<bool> {
    let initial = {
        let mut flag = ScrollFlag::new(threshold_px);
        flag.observe(ScrollSubscription::current_offset());
        flag
    };
    let past = use_signal(move || initial.past_threshold());

    let subscription = use_hook(move || {
        let mut flag = initial;
        let mut past = past;
        let sub = ScrollSubscription::attach(move |offset| {
            if flag.observe(offset) {
                past.set(flag.past_threshold());
            }
        });
        Rc::new(RefCell::new(sub))
    });

    use_drop(move || {
        if let Some(sub) = subscription.borrow_mut().as_mut() {
            sub.detach();
        }
    });

    past
}

/// Per-list hover state (experience timeline).
pub fn use_hover<Id: PartialEq + Clone + 'static>() -> Signal<HoverRegistry<Id>> {
    use_signal(HoverRegistry::new)
}

/// Resolve the page locale from its route segment, select the matching
/// Fluent bundle and share the store with every section below.
///
/// Route changes reach the store through an effect, so rendering never writes
/// to the signal it reads.
pub fn use_page_locale(segment: &str) -> Signal<LocaleStore> {
    let default = config::site().default_locale();
    let mut store = use_signal(|| LocaleStore::from_path(segment, default));

    let route_segment = segment.to_string();
    use_effect(use_reactive((&route_segment,), move |(route_segment,)| {
        let Some(target) = store.peek().route_change(&route_segment) else {
            return;
        };
        store.with_mut(|s| {
            s.switch_to(target.code());
        });
    }));

    use_effect(move || {
        let current = store.read().current();
        platform::apply_document_locale(current.code(), current.direction().as_str());
    });

    // The bundle must be active before the sections below render their text.
    let current = store.read().current();
    if let Err(err) = i18n::set_locale(current) {
        tracing::warn!("{err}; keeping previous bundle");
    }

    use_context_provider(|| store);
    store
}

/// Current locale for a section. Subscribes the caller to locale switches.
pub fn use_locale() -> Locale {
    match try_use_context::<Signal<LocaleStore>>() {
        Some(store) => store.read().current(),
        None => i18n::active_locale(),
    }
}

/// Switch locale from a UI control: update the store, swap the bundle and
/// ask the platform router for the matching URL.
pub fn switch_locale(mut store: Signal<LocaleStore>, code: &str) -> Locale {
    let resolved = store.with_mut(|s| s.switch_to(code));
    if let Err(err) = i18n::set_locale(resolved) {
        tracing::warn!("{err}; keeping previous bundle");
    }
    if !crate::core::locale::navigate_with_locale(resolved) {
        tracing::debug!(locale = %resolved, "no locale router registered; store updated in place");
    }
    resolved
}
