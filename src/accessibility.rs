//! Display preferences applied to the whole document.
//!
//! Every change goes through [`AccessibilityPrefs`] transitions, then the
//! complete desired state of the root element is computed by
//! [`RootAttributes::from_prefs`] and written in one idempotent
//! [`RootAttributes::apply`].

use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";
pub const DYSLEXIA_FONT_STACK: &str = "'OpenDyslexic', 'Comic Sans MS', sans-serif";

/// Root font size in pixels. Always within `[MIN, MAX]` and an even step
/// away from `DEFAULT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontSize(u8);

impl FontSize {
    pub const MIN: FontSize = FontSize(12);
    pub const MAX: FontSize = FontSize(24);
    pub const DEFAULT: FontSize = FontSize(16);
    pub const STEP: u8 = 2;

    pub fn px(self) -> u8 {
        self.0
    }

    pub fn step_up(self) -> FontSize {
        FontSize((self.0 + Self::STEP).min(Self::MAX.0))
    }

    pub fn step_down(self) -> FontSize {
        FontSize(self.0.saturating_sub(Self::STEP).max(Self::MIN.0))
    }

    pub fn can_step_up(self) -> bool {
        self < Self::MAX
    }

    pub fn can_step_down(self) -> bool {
        self > Self::MIN
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorBlindMode {
    #[default]
    None,
    Protanopia,
    Deuteranopia,
    Tritanopia,
}

impl ColorBlindMode {
    pub const ALL: [ColorBlindMode; 4] = [
        ColorBlindMode::None,
        ColorBlindMode::Protanopia,
        ColorBlindMode::Deuteranopia,
        ColorBlindMode::Tritanopia,
    ];

    /// Marker class on the root element, if any.
    pub fn class(self) -> Option<&'static str> {
        match self {
            ColorBlindMode::None => None,
            ColorBlindMode::Protanopia => Some("protanopia"),
            ColorBlindMode::Deuteranopia => Some("deuteranopia"),
            ColorBlindMode::Tritanopia => Some("tritanopia"),
        }
    }

    pub fn value(self) -> &'static str {
        self.class().unwrap_or("none")
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorBlindMode::None => "None",
            ColorBlindMode::Protanopia => "Protanopia (red-blind)",
            ColorBlindMode::Deuteranopia => "Deuteranopia (green-blind)",
            ColorBlindMode::Tritanopia => "Tritanopia (blue-blind)",
        }
    }

    /// Select values outside the known set coerce to `None`.
    pub fn from_value(value: &str) -> ColorBlindMode {
        ColorBlindMode::ALL
            .into_iter()
            .find(|mode| mode.value() == value)
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessibilityPrefs {
    pub font_size: FontSize,
    pub dyslexia_font: bool,
    pub high_contrast: bool,
    pub color_blind_mode: ColorBlindMode,
}

impl AccessibilityPrefs {
    pub fn increment_font_size(self) -> Self {
        Self { font_size: self.font_size.step_up(), ..self }
    }

    pub fn decrement_font_size(self) -> Self {
        Self { font_size: self.font_size.step_down(), ..self }
    }

    pub fn toggle_dyslexia_font(self) -> Self {
        Self { dyslexia_font: !self.dyslexia_font, ..self }
    }

    pub fn toggle_high_contrast(self) -> Self {
        Self { high_contrast: !self.high_contrast, ..self }
    }

    pub fn set_color_blind_mode(self, color_blind_mode: ColorBlindMode) -> Self {
        Self { color_blind_mode, ..self }
    }

    pub fn reset(self) -> Self {
        Self::default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefsAction {
    IncrementFontSize,
    DecrementFontSize,
    ToggleDyslexiaFont,
    ToggleHighContrast,
    SetColorBlindMode(ColorBlindMode),
    Reset,
}

impl Reducible for AccessibilityPrefs {
    type Action = PrefsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let prefs = *self;
        let next = match action {
            PrefsAction::IncrementFontSize => prefs.increment_font_size(),
            PrefsAction::DecrementFontSize => prefs.decrement_font_size(),
            PrefsAction::ToggleDyslexiaFont => prefs.toggle_dyslexia_font(),
            PrefsAction::ToggleHighContrast => prefs.toggle_high_contrast(),
            PrefsAction::SetColorBlindMode(mode) => prefs.set_color_blind_mode(mode),
            PrefsAction::Reset => prefs.reset(),
        };
        debug!("{:?}: {:?} -> {:?}", action, prefs, next);
        if next == prefs {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Minimal view of the element the preferences are written to.
pub trait RootElement {
    fn set_style(&mut self, property: &str, value: &str);
    fn remove_style(&mut self, property: &str);
    fn set_class(&mut self, class: &str, present: bool);
}

impl RootElement for HtmlElement {
    fn set_style(&mut self, property: &str, value: &str) {
        if let Err(err) = self.style().set_property(property, value) {
            warn!("Failed to set {}: {:?}", property, err);
        }
    }

    fn remove_style(&mut self, property: &str) {
        if let Err(err) = self.style().remove_property(property) {
            warn!("Failed to remove {}: {:?}", property, err);
        }
    }

    fn set_class(&mut self, class: &str, present: bool) {
        if let Err(err) = self.class_list().toggle_with_force(class, present) {
            warn!("Failed to toggle class {}: {:?}", class, err);
        }
    }
}

/// Everything the preferences dictate about the root element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootAttributes {
    pub font_size: String,
    pub font_family: Option<&'static str>,
    pub high_contrast: bool,
    pub color_blind_class: Option<&'static str>,
}

impl RootAttributes {
    pub fn from_prefs(prefs: &AccessibilityPrefs) -> Self {
        Self {
            font_size: format!("{}px", prefs.font_size.px()),
            font_family: prefs.dyslexia_font.then_some(DYSLEXIA_FONT_STACK),
            high_contrast: prefs.high_contrast,
            color_blind_class: prefs.color_blind_mode.class(),
        }
    }

    /// Writes the full attribute set. Every managed property and class is
    /// set to its desired value, so repeated applies are no-ops.
    pub fn apply<E: RootElement + ?Sized>(&self, root: &mut E) {
        root.set_style("font-size", &self.font_size);
        match self.font_family {
            Some(family) => root.set_style("font-family", family),
            None => root.remove_style("font-family"),
        }
        root.set_class(HIGH_CONTRAST_CLASS, self.high_contrast);
        for class in ColorBlindMode::ALL.into_iter().filter_map(ColorBlindMode::class) {
            root.set_class(class, self.color_blind_class == Some(class));
        }
    }
}

fn document_root() -> Option<HtmlElement> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Preference store for the app. Applies the root attributes after every
/// change.
#[hook]
pub fn use_accessibility() -> UseReducerHandle<AccessibilityPrefs> {
    let prefs = use_reducer_eq(AccessibilityPrefs::default);
    use_effect_with_deps(
        |prefs: &AccessibilityPrefs| {
            let attributes = RootAttributes::from_prefs(prefs);
            match document_root() {
                Some(mut root) => attributes.apply(&mut root),
                None => warn!("No document element, accessibility settings not applied"),
            }
            || ()
        },
        *prefs,
    );
    prefs
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct FakeRoot {
        style: BTreeMap<String, String>,
        classes: BTreeSet<String>,
    }

    impl RootElement for FakeRoot {
        fn set_style(&mut self, property: &str, value: &str) {
            self.style.insert(property.to_string(), value.to_string());
        }

        fn remove_style(&mut self, property: &str) {
            self.style.remove(property);
        }

        fn set_class(&mut self, class: &str, present: bool) {
            if present {
                self.classes.insert(class.to_string());
            } else {
                self.classes.remove(class);
            }
        }
    }

    fn apply(prefs: &AccessibilityPrefs, root: &mut FakeRoot) {
        RootAttributes::from_prefs(prefs).apply(root);
    }

    fn color_blind_classes(root: &FakeRoot) -> Vec<&str> {
        ColorBlindMode::ALL
            .into_iter()
            .filter_map(ColorBlindMode::class)
            .filter(|c| root.classes.contains(*c))
            .collect()
    }

    #[test]
    fn defaults() {
        let prefs = AccessibilityPrefs::default();
        assert_eq!(prefs.font_size.px(), 16);
        assert!(!prefs.dyslexia_font);
        assert!(!prefs.high_contrast);
        assert_eq!(prefs.color_blind_mode, ColorBlindMode::None);
    }

    #[test]
    fn font_size_steps_and_clamps() {
        let mut prefs = AccessibilityPrefs::default();
        for _ in 0..3 {
            prefs = prefs.increment_font_size();
        }
        assert_eq!(prefs.font_size.px(), 22);
        for _ in 0..5 {
            prefs = prefs.decrement_font_size();
        }
        assert_eq!(prefs.font_size.px(), 12);
        for _ in 0..10 {
            prefs = prefs.increment_font_size();
        }
        assert_eq!(prefs.font_size.px(), 24);
        assert!(!prefs.font_size.can_step_up());
        assert!(prefs.font_size.can_step_down());
    }

    #[test]
    fn font_size_stays_on_even_grid_for_any_sequence() {
        // Walk every up/down sequence of length 10.
        for bits in 0u32..(1 << 10) {
            let mut size = FontSize::default();
            for i in 0..10 {
                size = if bits & (1 << i) != 0 { size.step_up() } else { size.step_down() };
                assert!(size >= FontSize::MIN && size <= FontSize::MAX);
                assert_eq!((i16::from(size.px()) - 16) % 2, 0);
            }
        }
    }

    #[test]
    fn reset_restores_defaults_from_any_state() {
        let prefs = AccessibilityPrefs::default()
            .increment_font_size()
            .increment_font_size()
            .toggle_dyslexia_font()
            .toggle_high_contrast()
            .set_color_blind_mode(ColorBlindMode::Deuteranopia);
        assert_eq!(
            prefs.reset(),
            AccessibilityPrefs {
                font_size: FontSize(16),
                dyslexia_font: false,
                high_contrast: false,
                color_blind_mode: ColorBlindMode::None,
            }
        );
    }

    #[test]
    fn switching_color_blind_mode_leaves_only_latest_class() {
        let mut root = FakeRoot::default();
        let prefs = AccessibilityPrefs::default().set_color_blind_mode(ColorBlindMode::Protanopia);
        apply(&prefs, &mut root);
        assert_eq!(color_blind_classes(&root), vec!["protanopia"]);

        let prefs = prefs.set_color_blind_mode(ColorBlindMode::Tritanopia);
        apply(&prefs, &mut root);
        assert_eq!(color_blind_classes(&root), vec!["tritanopia"]);
        assert!(!root.classes.contains("protanopia"));

        let prefs = prefs.set_color_blind_mode(ColorBlindMode::None);
        apply(&prefs, &mut root);
        assert!(color_blind_classes(&root).is_empty());
    }

    #[test]
    fn apply_is_idempotent() {
        let prefs = AccessibilityPrefs::default()
            .increment_font_size()
            .toggle_dyslexia_font()
            .toggle_high_contrast()
            .set_color_blind_mode(ColorBlindMode::Deuteranopia);
        let mut once = FakeRoot::default();
        apply(&prefs, &mut once);
        let mut twice = once.clone();
        apply(&prefs, &mut twice);
        assert_eq!(once, twice);
        assert_eq!(once.style.get("font-size").map(String::as_str), Some("18px"));
        assert_eq!(once.style.get("font-family").map(String::as_str), Some(DYSLEXIA_FONT_STACK));
        assert!(once.classes.contains(HIGH_CONTRAST_CLASS));
    }

    #[test]
    fn apply_leaves_unmanaged_classes_alone() {
        let mut root = FakeRoot::default();
        root.classes.insert("js-loaded".to_string());
        apply(&AccessibilityPrefs::default().toggle_high_contrast(), &mut root);
        apply(&AccessibilityPrefs::default(), &mut root);
        assert!(root.classes.contains("js-loaded"));
        assert!(!root.classes.contains(HIGH_CONTRAST_CLASS));
        assert!(!root.style.contains_key("font-family"));
    }

    #[test]
    fn toggles_flip_back() {
        let prefs = AccessibilityPrefs::default();
        assert_eq!(prefs.toggle_dyslexia_font().toggle_dyslexia_font(), prefs);
        assert_eq!(prefs.toggle_high_contrast().toggle_high_contrast(), prefs);
    }

    #[test]
    fn select_values_coerce() {
        assert_eq!(ColorBlindMode::from_value("tritanopia"), ColorBlindMode::Tritanopia);
        assert_eq!(ColorBlindMode::from_value("none"), ColorBlindMode::None);
        assert_eq!(ColorBlindMode::from_value("sepia"), ColorBlindMode::None);
    }

    #[test]
    fn every_mode_has_its_own_select_value() {
        let values: BTreeSet<&str> = ColorBlindMode::ALL.into_iter().map(ColorBlindMode::value).collect();
        assert_eq!(values.len(), ColorBlindMode::ALL.len());
        for mode in ColorBlindMode::ALL {
            assert_eq!(ColorBlindMode::from_value(mode.value()), mode);
        }
    }

    #[test]
    fn reset_after_picking_a_mode_changes_the_select_value() {
        let picked = AccessibilityPrefs::default().set_color_blind_mode(ColorBlindMode::Protanopia);
        let reset = picked.reset();
        assert_ne!(picked.color_blind_mode.value(), reset.color_blind_mode.value());
        assert_eq!(reset.color_blind_mode.value(), "none");
    }

    #[test]
    fn reducer_returns_same_rc_when_unchanged() {
        let prefs = Rc::new(AccessibilityPrefs::default());
        let next = prefs.clone().reduce(PrefsAction::Reset);
        assert!(Rc::ptr_eq(&prefs, &next));
        let next = next.reduce(PrefsAction::IncrementFontSize);
        assert_eq!(next.font_size.px(), 18);
    }
}
