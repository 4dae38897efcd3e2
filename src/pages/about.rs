use web_sys::MouseEvent;
use yew::prelude::*;

use crate::catalog::SKILLS;
use crate::components::cards::{external_link, TagList};
use crate::config;
use crate::router::{Navigator, Page};

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub navigate: Navigator,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let to_case_studies = {
        let navigate = props.navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(Page::CaseStudies);
        })
    };

    html! {
        <div class="list-page about-page">
            <section class="page-hero">
                <h1>{format!("Hi, I'm {}", config::OWNER_NAME)}</h1>
                <p>{"Product designer based in Helsinki, working remotely with teams across Europe."}</p>
            </section>
            <section class="prose">
                <p>
                    {"I started out in customer support, which is where I learned how much a confusing screen costs. "}
                    {"Since then I have designed payroll, healthcare and grocery products, usually joining early and staying until the design system is in place."}
                </p>
                <p>
                    {"I run research myself, prototype in Figma and code, and care a lot about accessibility. "}
                    {"This site has a display settings panel in the corner for that reason."}
                </p>
                <h2>{"What I work on"}</h2>
                <TagList tags={SKILLS} />
                <div class="hero-cta-group">
                    <a href="#" class="hero-cta" onclick={to_case_studies}>{"Read the case studies"}</a>
                    { external_link(config::RESUME_URL, "Resume") }
                    { external_link(config::SCHEDULING_URL, "Book a call") }
                </div>
            </section>
        </div>
    }
}
