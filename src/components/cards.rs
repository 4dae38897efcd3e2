use yew::prelude::*;

use crate::catalog::{CaseStudy, Project, Website};

#[derive(Properties, PartialEq)]
pub struct TagListProps {
    pub tags: &'static [&'static str],
}

#[function_component(TagList)]
pub fn tag_list(props: &TagListProps) -> Html {
    html! {
        <ul class="tag-list">
            { for props.tags.iter().map(|tag| html! { <li class="tag">{*tag}</li> }) }
        </ul>
    }
}

/// Outbound link, always in a new browsing context.
pub fn external_link(url: &'static str, label: &'static str) -> Html {
    html! {
        <a href={url} target="_blank" rel="noopener noreferrer" class="external-link">
            {label}{" ↗"}
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct CaseStudyCardProps {
    pub study: CaseStudy,
    #[prop_or_default]
    pub detailed: bool,
}

#[function_component(CaseStudyCard)]
pub fn case_study_card(props: &CaseStudyCardProps) -> Html {
    let study = &props.study;
    html! {
        <article class={classes!("card", "case-study", props.detailed.then_some("detailed"))}>
            <p class="card-eyebrow">{study.client}</p>
            <h3>{study.title}</h3>
            <p>{study.summary}</p>
            if props.detailed {
                <h4>{"The problem"}</h4>
                <p>{study.problem}</p>
                <h4>{"What I did"}</h4>
                <ol class="approach">
                    { for study.approach.iter().map(|step| html! { <li>{*step}</li> }) }
                </ol>
            }
            <ul class="impact">
                { for study.impact.iter().map(|line| html! { <li>{*line}</li> }) }
            </ul>
            <TagList tags={study.tags} />
            if let Some(url) = study.url {
                { external_link(url, "View artefacts") }
            }
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    html! {
        <article class="card project">
            <h3>{project.title}</h3>
            <p>{project.description}</p>
            <p class="metric">{project.metric}</p>
            <TagList tags={project.tags} />
            if let Some(url) = project.url {
                { external_link(url, "Open project") }
            }
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct WebsiteCardProps {
    pub site: Website,
}

#[function_component(WebsiteCard)]
pub fn website_card(props: &WebsiteCardProps) -> Html {
    let site = &props.site;
    html! {
        <article class="card website">
            <h3>{site.title}</h3>
            <p>{site.description}</p>
            <TagList tags={site.tags} />
            { external_link(site.url, "Visit site") }
        </article>
    }
}
