//! Theme modes, preference sources, and the resolution rule.
//!
//! DESIGN
//! ======
//! The stored value and the OS signal are both reduced to a single
//! [`ThemePreference`] here so the pre-paint script, the mounted manager, and
//! the tests all agree on one precedence rule: stored choice first, OS second.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

/// One of the two theme states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Where the current mode came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeSource {
    /// Explicit choice persisted in storage (or made this session).
    UserOverride,
    /// Derived from the OS `prefers-color-scheme` signal.
    #[default]
    SystemDefault,
}

/// Background/foreground custom property values written to the root element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootPalette {
    pub background: &'static str,
    pub foreground: &'static str,
}

const LIGHT_PALETTE: RootPalette = RootPalette { background: "white", foreground: "black" };
const DARK_PALETTE: RootPalette = RootPalette {
    background: "oklch(0.145 0 0)",
    foreground: "oklch(0.985 0 0)",
};

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value persisted under the storage key and written to `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn palette(self) -> RootPalette {
        match self {
            Self::Light => LIGHT_PALETTE,
            Self::Dark => DARK_PALETTE,
        }
    }

    /// Interpret a raw stored value by walking [`STORED_OVERRIDES`].
    ///
    /// `"dark"` is a dark override, an empty value counts as no override, and
    /// any other value is an explicit light override.
    pub fn from_stored(raw: &str) -> Option<Self> {
        STORED_OVERRIDES
            .iter()
            .find(|(check, _)| check.matches(raw))
            .map(|&(_, mode)| mode)
    }
}

/// Test applied to a raw stored value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoredMatch {
    /// Exactly the storage value of this mode.
    Is(ThemeMode),
    /// Any non-empty value.
    NonEmpty,
}

impl StoredMatch {
    pub fn matches(self, raw: &str) -> bool {
        match self {
            Self::Is(mode) => raw == mode.as_str(),
            Self::NonEmpty => !raw.is_empty(),
        }
    }
}

/// Stored-value overrides in evaluation order. The first match wins; a value
/// matching none of them defers to the OS signal. The pre-paint script is
/// generated from this table.
pub const STORED_OVERRIDES: [(StoredMatch, ThemeMode); 2] = [
    (StoredMatch::Is(ThemeMode::Dark), ThemeMode::Dark),
    (StoredMatch::NonEmpty, ThemeMode::Light),
];

/// Current theme mode together with its source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemePreference {
    pub mode: ThemeMode,
    pub source: ThemeSource,
}

impl ThemePreference {
    pub fn user(mode: ThemeMode) -> Self {
        Self { mode, source: ThemeSource::UserOverride }
    }

    pub fn system(is_dark: bool) -> Self {
        Self { mode: ThemeMode::from_dark(is_dark), source: ThemeSource::SystemDefault }
    }

    /// Resolve the initial preference from the stored value and the OS signal.
    pub fn resolve(stored: Option<&str>, system_dark: bool) -> Self {
        match stored.and_then(ThemeMode::from_stored) {
            Some(mode) => Self::user(mode),
            None => Self::system(system_dark),
        }
    }

    pub fn is_dark(self) -> bool {
        self.mode.is_dark()
    }

    pub fn is_user_override(self) -> bool {
        self.source == ThemeSource::UserOverride
    }
}
