use std::rc::Rc;

use log::{debug, info, warn};
use yew::prelude::*;

use crate::pages::{
    about::About,
    case_studies::CaseStudies,
    home::Home,
    projects::Projects,
    websites::Websites,
};

/// Full-screen views. Selected by in-memory state, never by URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    CaseStudies,
    Projects,
    Websites,
    About,
}

impl Page {
    /// Menu order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::CaseStudies,
        Page::Projects,
        Page::Websites,
        Page::About,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::CaseStudies => "case-studies",
            Page::Projects => "projects",
            Page::Websites => "websites",
            Page::About => "about",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::CaseStudies => "Case Studies",
            Page::Projects => "Projects",
            Page::Websites => "Websites",
            Page::About => "About",
        }
    }

    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.id() == id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub current: Page,
    /// Bumped on every navigation, including to the page already shown.
    pub visits: u32,
}

impl ViewState {
    /// Unknown ids fall back to the default page rather than keeping the
    /// current one.
    pub fn navigate(&self, id: &str) -> ViewState {
        match Page::from_id(id) {
            Some(page) => self.show(page),
            None => {
                warn!("Unknown page id {:?}, showing {:?}", id, Page::default());
                self.show(Page::default())
            }
        }
    }

    pub fn show(&self, page: Page) -> ViewState {
        debug!("Navigating {:?} -> {:?}", self.current, page);
        ViewState {
            current: page,
            visits: self.visits.wrapping_add(1),
        }
    }
}

pub enum ViewAction {
    Navigate(String),
    Show(Page),
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ViewAction::Navigate(id) => self.navigate(&id),
            ViewAction::Show(page) => self.show(page),
        };
        Rc::new(next)
    }
}

/// Callback handed to views so they can switch pages without knowing about
/// the reducer.
pub type Navigator = Callback<Page>;

pub fn switch(page: Page, navigate: Navigator) -> Html {
    match page {
        Page::Home => {
            info!("Rendering Home page");
            html! { <Home navigate={navigate} /> }
        }
        Page::CaseStudies => {
            info!("Rendering Case Studies page");
            html! { <CaseStudies /> }
        }
        Page::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        }
        Page::Websites => {
            info!("Rendering Websites page");
            html! { <Websites /> }
        }
        Page::About => {
            info!("Rendering About page");
            html! { <About navigate={navigate} /> }
        }
    }
}

/// Resets the viewport to the top after every navigation.
#[hook]
pub fn use_scroll_top_on_navigate(visits: u32) {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        visits,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_id_round_trips() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), Some(page));
        }
    }

    #[test]
    fn navigate_to_known_page() {
        let state = ViewState::default();
        let state = state.navigate("projects");
        assert_eq!(state.current, Page::Projects);
        let state = state.navigate("about");
        assert_eq!(state.current, Page::About);
    }

    #[test]
    fn unknown_id_falls_back_to_home() {
        let state = ViewState::default().show(Page::Websites);
        assert_eq!(state.navigate("pricing").current, Page::Home);
        assert_eq!(state.navigate("").current, Page::Home);
        assert_eq!(state.navigate("Projects").current, Page::Home);
    }

    #[test]
    fn same_page_navigation_is_a_new_state() {
        let home = Rc::new(ViewState::default());
        let again = home.clone().reduce(ViewAction::Navigate("home".to_string()));
        assert_eq!(again.current, Page::Home);
        assert_ne!(*again, *home);

        let again = again.clone().reduce(ViewAction::Show(Page::Home));
        assert_eq!(again.current, Page::Home);
        assert_eq!(again.visits, 2);
    }

    #[test]
    fn reducer_applies_actions() {
        let state = Rc::new(ViewState::default());
        let state = state.reduce(ViewAction::Show(Page::CaseStudies));
        assert_eq!(state.current, Page::CaseStudies);
        let state = state.reduce(ViewAction::Navigate("websites".to_string()));
        assert_eq!(state.current, Page::Websites);
        let state = state.reduce(ViewAction::Navigate("nope".to_string()));
        assert_eq!(state.current, Page::Home);
    }
}
