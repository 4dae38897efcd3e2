use chrono::{Datelike, Local};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::cards::external_link;
use crate::config;
use crate::router::{Navigator, Page};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub navigate: Navigator,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();
    let go = |page: Page| {
        let navigate = props.navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(page);
        })
    };

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-links">
                    { for Page::ALL.into_iter().map(|page| html! {
                        <a href="#" onclick={go(page)}>{page.title()}</a>
                    }) }
                </div>
                <div class="footer-links">
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    { external_link(config::LINKEDIN_URL, "LinkedIn") }
                    { external_link(config::DRIBBBLE_URL, "Dribbble") }
                </div>
                <p class="footer-copy">{format!("© {} {}", year, config::OWNER_NAME)}</p>
            </div>
        </footer>
    }
}
