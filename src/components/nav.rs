use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::router::{Navigator, Page};
use crate::scroll::use_scrolled_past;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current: Page,
    pub navigate: Navigator,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { current, navigate } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled_past(config::NAV_SCROLLED_THRESHOLD_PX);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Closes the mobile menu on the way out.
    let go = |page: Page| {
        let menu_open = menu_open.clone();
        let navigate = navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            navigate.emit(page);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={go(Page::Home)}>
                    {config::OWNER_NAME}
                </a>

                <button class="burger-menu" aria-label="Toggle menu" aria-expanded={menu_open.to_string()} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        Page::ALL.into_iter().map(|page| html! {
                            <a
                                href="#"
                                key={page.id()}
                                class={classes!("nav-link", (page == *current).then_some("active"))}
                                onclick={go(page)}
                            >
                                {page.title()}
                            </a>
                        }).collect::<Html>()
                    }
                    <a href={config::SCHEDULING_URL} target="_blank" rel="noopener noreferrer" class="nav-cta">
                        {"Book a call"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 1.25rem 2rem;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: var(--surface);
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                    }
                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-weight: 700;
                        font-size: 1.1rem;
                        color: var(--text);
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        color: var(--text-muted);
                        text-decoration: none;
                        padding-bottom: 2px;
                        border-bottom: 2px solid transparent;
                    }
                    .nav-link:hover,
                    .nav-link.active {
                        color: var(--text);
                        border-bottom-color: var(--accent);
                    }
                    .nav-cta {
                        background: var(--accent);
                        color: var(--on-accent);
                        padding: 0.5rem 1.1rem;
                        border-radius: 999px;
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: var(--text);
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            background: var(--surface);
                            padding: 1.5rem;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
