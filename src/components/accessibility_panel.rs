use web_sys::{HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::accessibility::{AccessibilityPrefs, ColorBlindMode, PrefsAction};

#[derive(Properties, PartialEq)]
pub struct AccessibilityPanelProps {
    pub prefs: AccessibilityPrefs,
    pub dispatch: UseReducerDispatcher<AccessibilityPrefs>,
}

fn on<E: 'static>(dispatch: &UseReducerDispatcher<AccessibilityPrefs>, action: PrefsAction) -> Callback<E> {
    let dispatch = dispatch.clone();
    Callback::from(move |_: E| dispatch.dispatch(action))
}

#[function_component(AccessibilityPanel)]
pub fn accessibility_panel(props: &AccessibilityPanelProps) -> Html {
    let AccessibilityPanelProps { prefs, dispatch } = props;
    let is_open = use_state(|| false);

    let toggle_open = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    let on_color_mode = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mode = ColorBlindMode::from_value(&select.value());
            dispatch.dispatch(PrefsAction::SetColorBlindMode(mode));
        })
    };

    html! {
        <div class={classes!("a11y", (*is_open).then_some("open"))}>
            <button
                class="a11y-toggle"
                aria-label="Accessibility settings"
                aria-expanded={is_open.to_string()}
                onclick={toggle_open}
            >
                {"Aa"}
            </button>
            if *is_open {
                <div class="a11y-panel" role="dialog" aria-label="Accessibility settings">
                    <h3>{"Display settings"}</h3>

                    <div class="a11y-row">
                        <span>{"Text size"}</span>
                        <div class="a11y-stepper">
                            <button
                                aria-label="Decrease text size"
                                disabled={!prefs.font_size.can_step_down()}
                                onclick={on(dispatch, PrefsAction::DecrementFontSize)}
                            >
                                {"A-"}
                            </button>
                            <span class="a11y-value">{format!("{}px", prefs.font_size.px())}</span>
                            <button
                                aria-label="Increase text size"
                                disabled={!prefs.font_size.can_step_up()}
                                onclick={on(dispatch, PrefsAction::IncrementFontSize)}
                            >
                                {"A+"}
                            </button>
                        </div>
                    </div>

                    <label class="a11y-row">
                        <span>{"Dyslexia-friendly font"}</span>
                        <input
                            type="checkbox"
                            checked={prefs.dyslexia_font}
                            onchange={on(dispatch, PrefsAction::ToggleDyslexiaFont)}
                        />
                    </label>

                    <label class="a11y-row">
                        <span>{"High contrast"}</span>
                        <input
                            type="checkbox"
                            checked={prefs.high_contrast}
                            onchange={on(dispatch, PrefsAction::ToggleHighContrast)}
                        />
                    </label>

                    <label class="a11y-row">
                        <span>{"Colour vision"}</span>
                        // Keyed on the mode so a user-picked option can't outlive the stored state.
                        <select key={prefs.color_blind_mode.value()} onchange={on_color_mode}>
                            {
                                ColorBlindMode::ALL.into_iter().map(|mode| html! {
                                    <option
                                        value={mode.value()}
                                        selected={mode == prefs.color_blind_mode}
                                    >
                                        {mode.label()}
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                    </label>

                    <button class="a11y-reset" onclick={on(dispatch, PrefsAction::Reset)}>
                        {"Reset to defaults"}
                    </button>
                </div>
            }
            <style>
                {r#"
                    .a11y {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 200;
                        display: flex;
                        flex-direction: column-reverse;
                        align-items: flex-end;
                        gap: 0.75rem;
                    }
                    .a11y-toggle {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        border: none;
                        background: var(--accent);
                        color: var(--on-accent);
                        font-weight: 700;
                        cursor: pointer;
                        box-shadow: 0 4px 14px rgba(0, 0, 0, 0.2);
                    }
                    .a11y-panel {
                        width: 17rem;
                        background: var(--surface);
                        color: var(--text);
                        border: 1px solid var(--border);
                        border-radius: 12px;
                        padding: 1.25rem;
                        box-shadow: 0 12px 32px rgba(0, 0, 0, 0.15);
                    }
                    .a11y-panel h3 {
                        margin: 0 0 1rem;
                        font-size: 1rem;
                    }
                    .a11y-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 0.85rem;
                        gap: 0.5rem;
                    }
                    .a11y-stepper {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .a11y-stepper button,
                    .a11y-reset {
                        border: 1px solid var(--border);
                        background: transparent;
                        color: var(--text);
                        border-radius: 6px;
                        padding: 0.25rem 0.6rem;
                        cursor: pointer;
                    }
                    .a11y-stepper button:disabled {
                        opacity: 0.4;
                        cursor: default;
                    }
                    .a11y-value {
                        min-width: 2.75rem;
                        text-align: center;
                    }
                    .a11y-reset {
                        width: 100%;
                        margin-top: 0.5rem;
                    }
                "#}
            </style>
        </div>
    }
}
