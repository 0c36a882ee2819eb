use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::detect::{detect_color_mode, ColorMode};

/// The user's theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the operating system.
    #[default]
    System,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl From<ColorMode> for ThemeMode {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => ThemeMode::Light,
            ColorMode::Dark => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode '{other}'")),
        }
    }
}

/// Persistent key-value storage for the theme preference.
///
/// Hosts back this with whatever survives a reload (browser local storage,
/// a settings file). [`MemoryStorage`] keeps values for the process only.
pub trait ThemeStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`ThemeStorage`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Options for a [`ThemeController`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    pub default_mode: ThemeMode,
    /// Storage key the preference is saved under.
    pub storage_key: String,
    /// Attribute set on the root element to the resolved mode.
    pub attribute: String,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            default_mode: ThemeMode::System,
            storage_key: "soave-ui-theme".to_string(),
            attribute: "data-theme".to_string(),
        }
    }
}

/// What the host applies to its root element for the resolved mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootAttributes {
    /// Attribute name, e.g. `data-theme`.
    pub attribute: String,
    /// Attribute value: `light` or `dark`.
    pub value: ColorMode,
    /// Whether the `dark` class should be present.
    pub dark_class: bool,
}

/// Tracks the theme preference and resolves it against the system mode.
///
/// # Example
///
/// ```rust
/// use soave_ui::theme::{ColorMode, MemoryStorage, ThemeController, ThemeMode, ThemeOptions};
///
/// let mut theme = ThemeController::with_system_mode(
///     ThemeOptions::default(),
///     MemoryStorage::new(),
///     ColorMode::Dark,
/// );
/// assert_eq!(theme.mode(), ThemeMode::System);
/// assert_eq!(theme.resolved_mode(), ColorMode::Dark);
///
/// let attrs = theme.toggle_mode();
/// assert_eq!(theme.mode(), ThemeMode::Light);
/// assert!(!attrs.dark_class);
/// ```
#[derive(Debug)]
pub struct ThemeController<S: ThemeStorage = MemoryStorage> {
    options: ThemeOptions,
    storage: S,
    mode: ThemeMode,
    system: ColorMode,
}

impl<S: ThemeStorage> ThemeController<S> {
    /// Creates a controller, reading the system mode from the detector.
    pub fn new(options: ThemeOptions, storage: S) -> Self {
        Self::with_system_mode(options, storage, detect_color_mode())
    }

    /// Creates a controller with a known system mode.
    ///
    /// A valid stored preference wins over `options.default_mode`; an
    /// unreadable one is ignored.
    pub fn with_system_mode(options: ThemeOptions, storage: S, system: ColorMode) -> Self {
        let mode = storage
            .get(&options.storage_key)
            .and_then(|stored| stored.parse().ok())
            .unwrap_or(options.default_mode);
        tracing::debug!(%mode, system = system.as_str(), "theme controller initialized");
        Self {
            options,
            storage,
            mode,
            system,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn options(&self) -> &ThemeOptions {
        &self.options
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The mode actually shown: the preference, or the system mode for `system`.
    pub fn resolved_mode(&self) -> ColorMode {
        match self.mode {
            ThemeMode::Light => ColorMode::Light,
            ThemeMode::Dark => ColorMode::Dark,
            ThemeMode::System => self.system,
        }
    }

    /// Stores a new preference and returns the attributes to apply.
    pub fn set_mode(&mut self, mode: ThemeMode) -> RootAttributes {
        self.mode = mode;
        self.storage.set(&self.options.storage_key, mode.as_str());
        tracing::debug!(%mode, "theme mode changed");
        self.root_attributes()
    }

    /// Switches to the opposite of the resolved mode.
    ///
    /// From `system` this picks an explicit mode, so toggling always leaves
    /// system-following behind.
    pub fn toggle_mode(&mut self) -> RootAttributes {
        self.set_mode(self.resolved_mode().toggled().into())
    }

    /// Records a change of the system preference.
    ///
    /// Returns the attributes to apply when the controller follows the
    /// system, `None` when an explicit mode hides the change.
    pub fn system_changed(&mut self, system: ColorMode) -> Option<RootAttributes> {
        self.system = system;
        (self.mode == ThemeMode::System).then(|| self.root_attributes())
    }

    /// Attributes for the current resolved mode.
    pub fn root_attributes(&self) -> RootAttributes {
        let value = self.resolved_mode();
        RootAttributes {
            attribute: self.options.attribute.clone(),
            value,
            dark_class: value == ColorMode::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(system: ColorMode) -> ThemeController {
        ThemeController::with_system_mode(ThemeOptions::default(), MemoryStorage::new(), system)
    }

    #[test]
    fn test_defaults() {
        let options = ThemeOptions::default();
        assert_eq!(options.default_mode, ThemeMode::System);
        assert_eq!(options.storage_key, "soave-ui-theme");
        assert_eq!(options.attribute, "data-theme");
    }

    #[test]
    fn test_system_resolution() {
        assert_eq!(controller(ColorMode::Dark).resolved_mode(), ColorMode::Dark);
        assert_eq!(controller(ColorMode::Light).resolved_mode(), ColorMode::Light);
    }

    #[test]
    fn test_set_mode_persists() {
        let mut theme = controller(ColorMode::Light);
        let attrs = theme.set_mode(ThemeMode::Dark);
        assert_eq!(attrs.attribute, "data-theme");
        assert_eq!(attrs.value, ColorMode::Dark);
        assert!(attrs.dark_class);
        assert_eq!(theme.storage().get("soave-ui-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_stored_mode_restored() {
        let mut storage = MemoryStorage::new();
        storage.set("soave-ui-theme", "dark");
        let theme =
            ThemeController::with_system_mode(ThemeOptions::default(), storage, ColorMode::Light);
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_invalid_stored_mode_ignored() {
        let mut storage = MemoryStorage::new();
        storage.set("soave-ui-theme", "sepia");
        let options = ThemeOptions {
            default_mode: ThemeMode::Light,
            ..Default::default()
        };
        let theme = ThemeController::with_system_mode(options, storage, ColorMode::Dark);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_from_system() {
        let mut theme = controller(ColorMode::Dark);
        theme.toggle_mode();
        assert_eq!(theme.mode(), ThemeMode::Light);
        theme.toggle_mode();
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_system_change_only_applies_when_following() {
        let mut theme = controller(ColorMode::Light);
        let attrs = theme.system_changed(ColorMode::Dark).unwrap();
        assert!(attrs.dark_class);

        theme.set_mode(ThemeMode::Light);
        assert_eq!(theme.system_changed(ColorMode::Light), None);
        assert_eq!(theme.system_changed(ColorMode::Dark), None);
        assert_eq!(theme.resolved_mode(), ColorMode::Light);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("system".parse::<ThemeMode>(), Ok(ThemeMode::System));
        assert!("auto".parse::<ThemeMode>().is_err());
    }
}
