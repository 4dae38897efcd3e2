use log::info;
use yew::prelude::*;

mod accessibility;
mod catalog;
mod config;
mod router;
mod scroll;
mod components {
    pub mod accessibility_panel;
    pub mod cards;
    pub mod footer;
    pub mod nav;
}
mod pages {
    pub mod about;
    pub mod case_studies;
    pub mod home;
    pub mod projects;
    pub mod websites;
}

use accessibility::use_accessibility;
use components::{
    accessibility_panel::AccessibilityPanel,
    footer::Footer,
    nav::Nav,
};
use router::{switch, use_scroll_top_on_navigate, Page, ViewAction, ViewState};

#[function_component]
fn App() -> Html {
    let view = use_reducer_eq(ViewState::default);
    let prefs = use_accessibility();
    use_scroll_top_on_navigate(view.visits);

    let show_page = {
        let view = view.dispatcher();
        Callback::from(move |page: Page| view.dispatch(ViewAction::Show(page)))
    };

    html! {
        <>
            <Nav current={view.current} navigate={show_page.clone()} />
            <main class="page">
                { switch(view.current, show_page.clone()) }
            </main>
            <Footer navigate={show_page} />
            <AccessibilityPanel prefs={*prefs} dispatch={prefs.dispatcher()} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {} portfolio", config::OWNER_NAME);
    yew::Renderer::<App>::new().render();
}
