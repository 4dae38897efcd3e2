use yew::prelude::*;

use crate::catalog::CASE_STUDIES;
use crate::components::cards::CaseStudyCard;

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    html! {
        <div class="list-page">
            <section class="page-hero">
                <h1>{"Case studies"}</h1>
                <p>{"How I worked through three product problems, and what changed once the designs shipped."}</p>
            </section>
            <div class="stack">
                { for CASE_STUDIES.iter().map(|study| html! {
                    <CaseStudyCard study={*study} detailed={true} />
                }) }
            </div>
        </div>
    }
}
