use super::storage::{KeyValueStore, THEME_KEY};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour scheme of the page. Dark unless the visitor chose light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Only the exact stored value `"light"` selects the light theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon on the toggle button: the theme you would switch to.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "fa-sun",
            Theme::Light => "fa-moon",
        }
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self::from_stored(store.get(THEME_KEY).as_deref())
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), AppError> {
        store.set(THEME_KEY, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::storage::MemoryStore;

    #[test]
    fn test_unknown_values_fall_back_to_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("LIGHT")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        Theme::Light.save(&store).unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.icon(), "fa-sun");
    }
}
