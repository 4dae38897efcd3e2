use web_sys::MouseEvent;
use yew::prelude::*;

use crate::catalog::{CASE_STUDIES, SKILLS, STATS};
use crate::components::cards::{external_link, CaseStudyCard};
use crate::config;
use crate::router::{Navigator, Page};
use crate::scroll::{scroll_to_section, use_active_section, Section};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub navigate: Navigator,
}

#[derive(Properties, PartialEq)]
struct SectionDotsProps {
    active: Option<Section>,
}

/// Fixed side rail that follows the scroll position.
#[function_component(SectionDots)]
fn section_dots(props: &SectionDotsProps) -> Html {
    html! {
        <nav class="section-dots" aria-label="Sections">
            { for Section::ALL.into_iter().map(|section| {
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    scroll_to_section(section);
                });
                let is_active = props.active == Some(section);
                html! {
                    <a
                        href={format!("#{}", section.id())}
                        class={classes!("dot", is_active.then_some("active"))}
                        aria-current={if is_active { "true" } else { "false" }}
                        title={section.label()}
                        onclick={onclick}
                    >
                        <span class="dot-label">{section.label()}</span>
                    </a>
                }
            }) }
        </nav>
    }
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let active = use_active_section();

    let show = |page: Page| {
        let navigate = props.navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(page);
        })
    };
    let to_work = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(Section::Work);
    });

    html! {
        <div class="home-page">
            <SectionDots active={active} />

            <section id={Section::Home.id()} class="hero">
                <p class="hero-eyebrow">{"Product designer"}</p>
                <h1>{"I design calm, usable software for complicated jobs."}</h1>
                <p class="hero-subtitle">
                    {"I help product teams turn messy workflows into interfaces people trust, from first research call to shipped design system."}
                </p>
                <div class="hero-cta-group">
                    <a href="#work" class="hero-cta" onclick={to_work}>{"See my work"}</a>
                    <a href={config::SCHEDULING_URL} target="_blank" rel="noopener noreferrer" class="hero-secondary">
                        {"Book a 20 minute call"}
                    </a>
                </div>
            </section>

            <section id={Section::About.id()} class="home-section">
                <h2>{"About"}</h2>
                <p>
                    {format!("I'm {}, a product designer working with B2B and health teams. ", config::OWNER_NAME)}
                    {"I like the unglamorous parts: the admin screens, the edge cases and the settings page nobody wanted to own."}
                </p>
                <div class="stats">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat">
                            <span class="stat-value">{stat.value}</span>
                            <span class="stat-label">{stat.label}</span>
                        </div>
                    }) }
                </div>
                <ul class="tag-list">
                    { for SKILLS.iter().map(|skill| html! { <li class="tag">{*skill}</li> }) }
                </ul>
                <a href="#" class="text-link" onclick={show(Page::About)}>{"More about me →"}</a>
            </section>

            <section id={Section::Work.id()} class="home-section">
                <h2>{"Selected work"}</h2>
                <div class="card-grid">
                    { for CASE_STUDIES.iter().map(|study| html! { <CaseStudyCard study={*study} /> }) }
                </div>
                <div class="section-links">
                    <a href="#" class="text-link" onclick={show(Page::CaseStudies)}>{"Read the case studies →"}</a>
                    <a href="#" class="text-link" onclick={show(Page::Projects)}>{"Side projects →"}</a>
                    <a href="#" class="text-link" onclick={show(Page::Websites)}>{"Websites →"}</a>
                </div>
            </section>

            <section id={Section::Contact.id()} class="home-section contact">
                <h2>{"Let's talk"}</h2>
                <p>{"Hiring for a product design role or need a hand with a tricky flow? I usually reply within a day."}</p>
                <div class="hero-cta-group">
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="hero-cta">{"Email me"}</a>
                    { external_link(config::RESUME_URL, "Resume") }
                    { external_link(config::LINKEDIN_URL, "LinkedIn") }
                </div>
            </section>

            <style>
                {r#"
                    .section-dots {
                        position: fixed;
                        right: 1.5rem;
                        top: 50%;
                        transform: translateY(-50%);
                        display: flex;
                        flex-direction: column;
                        gap: 0.9rem;
                        z-index: 50;
                    }
                    .section-dots .dot {
                        position: relative;
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        background: var(--border);
                        transition: transform 0.2s ease, background 0.2s ease;
                    }
                    .section-dots .dot.active {
                        background: var(--accent);
                        transform: scale(1.4);
                    }
                    .dot-label {
                        position: absolute;
                        right: 1.25rem;
                        top: 50%;
                        transform: translateY(-50%);
                        white-space: nowrap;
                        font-size: 0.8rem;
                        color: var(--text-muted);
                        opacity: 0;
                        transition: opacity 0.2s ease;
                    }
                    .section-dots .dot:hover .dot-label,
                    .section-dots .dot.active .dot-label {
                        opacity: 1;
                    }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        max-width: 820px;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .hero h1 {
                        font-size: 3rem;
                        line-height: 1.15;
                        margin: 0.5rem 0 1.25rem;
                    }
                    .hero-eyebrow {
                        text-transform: uppercase;
                        letter-spacing: 0.12em;
                        color: var(--accent);
                        font-weight: 600;
                    }
                    .hero-subtitle {
                        font-size: 1.2rem;
                        color: var(--text-muted);
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 1.25rem;
                        margin-top: 2rem;
                    }
                    .hero-cta {
                        background: var(--accent);
                        color: var(--on-accent);
                        padding: 0.8rem 1.6rem;
                        border-radius: 999px;
                        text-decoration: none;
                        font-weight: 600;
                    }
                    .hero-secondary {
                        color: var(--text);
                    }
                    .stats {
                        display: flex;
                        gap: 2.5rem;
                        margin: 2rem 0;
                    }
                    .stat {
                        display: flex;
                        flex-direction: column;
                    }
                    .stat-value {
                        font-size: 2rem;
                        font-weight: 700;
                    }
                    .stat-label {
                        color: var(--text-muted);
                        font-size: 0.9rem;
                    }
                    .section-links {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1.5rem;
                        margin-top: 2rem;
                    }
                    @media (max-width: 768px) {
                        .section-dots {
                            display: none;
                        }
                        .hero h1 {
                            font-size: 2.1rem;
                        }
                        .stats {
                            flex-direction: column;
                            gap: 1rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
