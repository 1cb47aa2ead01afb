//! Overlay state.
//!
//! The browser has three modal surfaces. Each is a plain open/closed flag
//! with no further transition logic:
//! - **Search**: the filter form (opened from the header, closed by cancel or
//!   a successful search)
//! - **Settings**: the theme form (opened from the header, closed by cancel or
//!   a theme submission)
//! - **Detail**: the selected book (opened by clicking a preview, closed by
//!   its close control)

use std::fmt;
use std::str::FromStr;

/// A modal surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Search,
    Settings,
    Detail,
}

impl Overlay {
    pub const ALL: [Self; 3] = [Self::Search, Self::Settings, Self::Detail];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Settings => "settings",
            Self::Detail => "detail",
        }
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Overlay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "search" => Ok(Self::Search),
            "settings" => Ok(Self::Settings),
            "detail" => Ok(Self::Detail),
            other => Err(format!("unknown overlay: {other}")),
        }
    }
}

/// One open flag per overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlays {
    search: bool,
    settings: bool,
    detail: bool,
}

impl Overlays {
    #[must_use]
    pub const fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Search => self.search,
            Overlay::Settings => self.settings,
            Overlay::Detail => self.detail,
        }
    }

    /// Sets the flag for `overlay`, returning `true` if it changed.
    pub fn set(&mut self, overlay: Overlay, open: bool) -> bool {
        let flag = match overlay {
            Overlay::Search => &mut self.search,
            Overlay::Settings => &mut self.settings,
            Overlay::Detail => &mut self.detail,
        };
        let changed = *flag != open;
        *flag = open;
        changed
    }

    /// The topmost open overlay, if any. Detail sits above the forms.
    #[must_use]
    pub fn topmost(&self) -> Option<Overlay> {
        [Overlay::Detail, Overlay::Settings, Overlay::Search]
            .into_iter()
            .find(|o| self.is_open(*o))
    }
}
