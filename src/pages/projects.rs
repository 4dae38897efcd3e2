use yew::prelude::*;

use crate::catalog::PROJECTS;
use crate::components::cards::ProjectCard;

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <div class="list-page">
            <section class="page-hero">
                <h1>{"Side projects"}</h1>
                <p>{"Small tools and experiments, mostly about accessibility and research ops."}</p>
            </section>
            <div class="card-grid">
                { for PROJECTS.iter().map(|project| html! { <ProjectCard project={*project} /> }) }
            </div>
        </div>
    }
}
