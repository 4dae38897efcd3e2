use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;

/// Vertically stacked regions of the home page, in highlight priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Work,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::About, Section::Work, Section::Contact];

    /// Element id of the section on the page.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Work => "work",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Work => "Work",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// First section in `layout` whose `[top, top + height)` holds `probe_y`.
/// Keeps `previous` when nothing matches.
pub fn active_section(
    probe_y: f64,
    layout: &[SectionBounds],
    previous: Option<Section>,
) -> Option<Section> {
    layout
        .iter()
        .find(|bounds| bounds.contains(probe_y))
        .map(|bounds| bounds.section)
        .or(previous)
}

fn section_element(document: &Document, section: Section) -> Option<HtmlElement> {
    document
        .get_element_by_id(section.id())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Reads the current layout of every section present in the document, in
/// priority order. Sections that are not rendered are left out.
pub fn measure_sections(document: &Document) -> Vec<SectionBounds> {
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            section_element(document, section).map(|el| SectionBounds {
                section,
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
        })
        .collect()
}

/// Jumps to a section, leaving room for the fixed nav.
/// Does nothing if the section is not on the page.
pub fn scroll_to_section(section: Section) {
    let Some(window) = web_sys::window() else { return };
    let Some(el) = window.document().and_then(|d| section_element(&d, section)) else {
        debug!("Section #{} not rendered, skipping scroll", section.id());
        return;
    };
    let top = (f64::from(el.offset_top()) - config::NAV_OFFSET_PX).max(0.0);
    window.scroll_to_with_x_and_y(0.0, top);
}

fn current_scroll_y() -> Option<f64> {
    web_sys::window().and_then(|w| w.scroll_y().ok())
}

/// Trailing-edge throttle for scroll work. At most one run is pending.
#[derive(Default)]
struct Throttle {
    armed: Rc<Cell<bool>>,
    // Replaced on each arm; a fired timer is dropped only after it has run.
    timer: RefCell<Option<Timeout>>,
}

impl Throttle {
    fn schedule(&self, run: Rc<dyn Fn()>) {
        if self.armed.replace(true) {
            return;
        }
        let armed = self.armed.clone();
        let timeout = Timeout::new(config::SCROLL_THROTTLE_MS, move || {
            armed.set(false);
            run();
        });
        *self.timer.borrow_mut() = Some(timeout);
    }

    fn cancel(&self) {
        self.armed.set(false);
        self.timer.borrow_mut().take();
    }
}

/// Tracks the section under the nav bar while the window scrolls.
///
/// Scroll events are coalesced: a recomputation runs `SCROLL_THROTTLE_MS`
/// after the first event of a burst, so it sees the latest position.
#[hook]
pub fn use_active_section() -> Option<Section> {
    let active = use_state(|| None::<Section>);
    let throttle = use_mut_ref(Throttle::default);
    // Latest value, readable from the timer without re-registering the listener.
    let latest = use_mut_ref(|| None::<Section>);

    let recompute: Rc<dyn Fn()> = {
        let active = active.clone();
        let latest = latest.clone();
        Rc::new(move || {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
            let Some(scroll_y) = current_scroll_y() else { return };
            let layout = measure_sections(&document);
            let previous = *latest.borrow();
            let next = active_section(scroll_y + config::NAV_OFFSET_PX, &layout, previous);
            if next != previous {
                debug!("Active section {:?} -> {:?}", previous, next);
                *latest.borrow_mut() = next;
                active.set(next);
            }
        })
    };

    {
        let recompute = recompute.clone();
        let throttle = throttle.clone();
        use_event_with_window("scroll", move |_: Event| {
            throttle.borrow().schedule(recompute.clone());
        });
    }

    // Initial check once the sections are mounted; cancel any pending run on unmount.
    {
        let throttle = throttle.clone();
        use_effect_with_deps(
            move |_| {
                recompute();
                move || throttle.borrow().cancel()
            },
            (),
        );
    }

    *active
}

/// True once the window has scrolled past `threshold` pixels.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state(|| current_scroll_y().unwrap_or(0.0) > threshold);
    {
        let scrolled = scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let past = current_scroll_y().unwrap_or(0.0) > threshold;
            if past != *scrolled {
                scrolled.set(past);
            }
        });
    }
    *scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds { section: Section::Home, top: 0.0, height: 800.0 },
            SectionBounds { section: Section::About, top: 800.0, height: 600.0 },
            SectionBounds { section: Section::Work, top: 1400.0, height: 1200.0 },
            SectionBounds { section: Section::Contact, top: 2600.0, height: 500.0 },
        ]
    }

    #[test]
    fn picks_section_containing_probe() {
        let layout = layout();
        assert_eq!(active_section(0.0, &layout, None), Some(Section::Home));
        assert_eq!(active_section(900.0, &layout, None), Some(Section::About));
        assert_eq!(active_section(2599.0, &layout, None), Some(Section::Work));
        assert_eq!(active_section(3000.0, &layout, None), Some(Section::Contact));
    }

    #[test]
    fn bottom_edge_belongs_to_next_section() {
        let layout = layout();
        assert_eq!(active_section(800.0, &layout, Some(Section::Home)), Some(Section::About));
    }

    #[test]
    fn no_match_keeps_previous() {
        let layout = layout();
        assert_eq!(active_section(5000.0, &layout, Some(Section::Work)), Some(Section::Work));
        assert_eq!(active_section(-10.0, &layout, None), None);
        assert_eq!(active_section(100.0, &[], Some(Section::About)), Some(Section::About));
    }

    #[test]
    fn overlap_resolves_by_priority_order() {
        let layout = vec![
            SectionBounds { section: Section::About, top: 0.0, height: 500.0 },
            SectionBounds { section: Section::Work, top: 300.0, height: 500.0 },
        ];
        assert_eq!(active_section(400.0, &layout, None), Some(Section::About));
    }

    #[test]
    fn zero_height_section_never_matches() {
        let layout = vec![SectionBounds { section: Section::Contact, top: 100.0, height: 0.0 }];
        assert_eq!(active_section(100.0, &layout, Some(Section::Home)), Some(Section::Home));
    }
}
