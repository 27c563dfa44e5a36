use serde_json::json;

use crate::log::{log_event, LogLevel};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    /// The icon shows the theme a click switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

/// Key/value persistence for the theme preference. Failures are swallowed.
pub trait ThemeStorage {
    fn load(&self) -> Option<String>;
    fn store(&self, value: &str);
}

#[derive(Clone, Debug)]
pub struct ThemeStore<S> {
    theme: Theme,
    storage: S,
}

impl<S: ThemeStorage> ThemeStore<S> {
    pub fn open(storage: S) -> Self {
        let theme = storage
            .load()
            .and_then(|value| Theme::from_str(value.trim()))
            .unwrap_or_default();

        Self { theme, storage }
    }

    pub fn get(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.storage.store(self.theme.as_str());
        log_event(
            LogLevel::Debug,
            "theme_toggled",
            json!({ "theme": self.theme.as_str() }),
        );
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStorage {
        value: Rc<RefCell<Option<String>>>,
    }

    impl MemoryStorage {
        fn with(value: &str) -> Self {
            Self {
                value: Rc::new(RefCell::new(Some(value.to_string()))),
            }
        }

        fn current(&self) -> Option<String> {
            self.value.borrow().clone()
        }
    }

    impl ThemeStorage for MemoryStorage {
        fn load(&self) -> Option<String> {
            self.current()
        }

        fn store(&self, value: &str) {
            *self.value.borrow_mut() = Some(value.to_string());
        }
    }

    #[test]
    fn missing_preference_defaults_to_dark() {
        let store = ThemeStore::open(MemoryStorage::default());
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn unknown_preference_defaults_to_dark() {
        let store = ThemeStore::open(MemoryStorage::with("sepia"));
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn stored_preference_is_restored() {
        let store = ThemeStore::open(MemoryStorage::with("light"));
        assert_eq!(store.get(), Theme::Light);
    }

    #[test]
    fn toggle_parity_and_persistence_hold_for_every_step() {
        let storage = MemoryStorage::default();
        let mut store = ThemeStore::open(storage.clone());

        for step in 1..=9 {
            let theme = store.toggle();
            let expected = if step % 2 == 0 { Theme::Dark } else { Theme::Light };

            assert_eq!(theme, expected);
            assert_eq!(store.get(), expected);
            assert_eq!(storage.current().as_deref(), Some(expected.as_str()));
        }
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    }
}
