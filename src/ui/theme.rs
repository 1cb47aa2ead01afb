//! Day/night theme state and ANSI escape sequence generation.
//!
//! The whole visual scheme hangs off two named color roles, `dark` and
//! `light`. Day mode uses them as configured; night mode swaps them, so dark
//! text on a light background becomes light text on a dark background. Every
//! other token (dimmed text, borders, accents) is blended from those two.
//!
//! # TOML Palette Format
//!
//! ```toml
//! name = "sepia"
//!
//! [colors]
//! dark = "40, 30, 20"
//! light = "#f4ecd8"
//! ```

use crate::domain::error::{BrowserError, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// The two display modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = BrowserError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "light" => Ok(Self::Day),
            "night" | "dark" => Ok(Self::Night),
            other => Err(BrowserError::Config(format!("unknown theme: {other}"))),
        }
    }
}

/// An RGB color, written either as `"r, g, b"` or `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear blend towards `other`; `weight` is the share of `other` in
    /// percent (0..=100).
    #[must_use]
    pub fn blend(self, other: Self, weight: u8) -> Self {
        let weight = u16::from(weight.min(100));
        let mix = |a: u8, b: u8| -> u8 {
            let mixed = (u16::from(a) * (100 - weight) + u16::from(b) * weight) / 100;
            u8::try_from(mixed).unwrap_or(u8::MAX)
        };
        Self(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    /// ANSI 24-bit foreground escape sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(self) -> String {
        format!("\u{001b}[38;2;{};{};{}m", self.0, self.1, self.2)
    }

    /// ANSI 24-bit background escape sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(self) -> String {
        format!("\u{001b}[48;2;{};{};{}m", self.0, self.1, self.2)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self(r, g, b))
    }

    fn parse_triple(triple: &str) -> Option<Self> {
        let parts: Vec<u8> = triple
            .split(',')
            .map(|p| p.trim().parse::<u8>())
            .collect::<std::result::Result<_, _>>()
            .ok()?;
        match parts.as_slice() {
            [r, g, b] => Some(Self(*r, *g, *b)),
            _ => None,
        }
    }
}

impl FromStr for Rgb {
    type Err = BrowserError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parsed = s
            .strip_prefix('#')
            .map_or_else(|| Self::parse_triple(s), Self::parse_hex);
        parsed.ok_or_else(|| BrowserError::Theme(format!("invalid color: {s:?}")))
    }
}

impl TryFrom<String> for Rgb {
    type Error = BrowserError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// Named palette: the default values of the two color roles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Palette {
    pub name: String,
    pub colors: PaletteColors,
}

/// The two color roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PaletteColors {
    pub dark: Rgb,
    pub light: Rgb,
}

impl Palette {
    /// Near-black on white.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            colors: PaletteColors {
                dark: Rgb(10, 10, 20),
                light: Rgb(255, 255, 255),
            },
        }
    }

    /// Brown ink on cream paper.
    #[must_use]
    pub fn sepia() -> Self {
        Self {
            name: "sepia".to_string(),
            colors: PaletteColors {
                dark: Rgb(40, 30, 20),
                light: Rgb(244, 236, 216),
            },
        }
    }

    /// Looks up a built-in palette: `classic` or `sepia`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "sepia" => Some(Self::sepia()),
            _ => None,
        }
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Io`] if the file cannot be read and
    /// [`BrowserError::Theme`] if it is not a valid palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| BrowserError::Theme(format!("failed to parse palette TOML: {e}")))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

/// Resolved color roles for the active mode.
///
/// `dark` is always the foreground role and `light` the background role;
/// night mode is expressed purely by swapping their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub dark: Rgb,
    pub light: Rgb,
}

impl ThemeTokens {
    #[must_use]
    pub const fn text(&self) -> Rgb {
        self.dark
    }

    #[must_use]
    pub const fn background(&self) -> Rgb {
        self.light
    }

    /// Secondary text (authors, hints).
    #[must_use]
    pub fn dim(&self) -> Rgb {
        self.dark.blend(self.light, 45)
    }

    /// Borders and separators.
    #[must_use]
    pub fn border(&self) -> Rgb {
        self.dark.blend(self.light, 75)
    }

    /// Selected or highlighted surfaces.
    #[must_use]
    pub fn surface(&self) -> Rgb {
        self.light.blend(self.dark, 10)
    }
}

/// The active mode plus the palette it resolves against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
    palette: Palette,
}

impl ThemeState {
    #[must_use]
    pub const fn new(palette: Palette, mode: ThemeMode) -> Self {
        Self { mode, palette }
    }

    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Switches mode, returning `true` if anything changed.
    ///
    /// Setting the active mode again is a no-op.
    pub fn set(&mut self, mode: ThemeMode) -> bool {
        if self.mode == mode {
            tracing::debug!(mode = %mode, "theme unchanged");
            return false;
        }
        tracing::debug!(from = %self.mode, to = %mode, "theme changed");
        self.mode = mode;
        true
    }

    /// Color roles for the active mode.
    #[must_use]
    pub const fn tokens(&self) -> ThemeTokens {
        let PaletteColors { dark, light } = self.palette.colors;
        match self.mode {
            ThemeMode::Day => ThemeTokens { dark, light },
            ThemeMode::Night => ThemeTokens {
                dark: light,
                light: dark,
            },
        }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(Palette::default(), ThemeMode::Day)
    }
}

/// ANSI bold (`\x1b[1m`).
#[must_use]
pub const fn bold() -> &'static str {
    "\u{001b}[1m"
}

/// ANSI reverse video (`\x1b[7m`).
#[must_use]
pub const fn reverse() -> &'static str {
    "\u{001b}[7m"
}

/// ANSI reset (`\x1b[0m`).
#[must_use]
pub const fn reset() -> &'static str {
    "\u{001b}[0m"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn night_swaps_the_roles() {
        let mut state = ThemeState::default();
        let day = state.tokens();
        assert_eq!(day.dark, Rgb(10, 10, 20));
        assert_eq!(day.light, Rgb(255, 255, 255));

        assert!(state.set(ThemeMode::Night));
        let night = state.tokens();
        assert_eq!(night.dark, day.light);
        assert_eq!(night.light, day.dark);

        assert!(state.set(ThemeMode::Day));
        assert_eq!(state.tokens(), day);
    }

    #[test]
    fn setting_same_mode_twice_is_idempotent() {
        let mut state = ThemeState::default();
        assert!(state.set(ThemeMode::Night));
        let first = state.tokens();
        assert!(!state.set(ThemeMode::Night));
        assert_eq!(state.tokens(), first);
    }

    #[test]
    fn parses_both_color_notations() {
        assert_eq!("10, 10, 20".parse::<Rgb>().unwrap(), Rgb(10, 10, 20));
        assert_eq!("#0a0a14".parse::<Rgb>().unwrap(), Rgb(10, 10, 20));
        assert!("#0a0a".parse::<Rgb>().is_err());
        assert!("10, 10".parse::<Rgb>().is_err());
        assert!("300, 0, 0".parse::<Rgb>().is_err());
    }

    #[test]
    fn rgb_displays_as_triple() {
        assert_eq!(Rgb(255, 255, 255).to_string(), "255, 255, 255");
    }

    #[test]
    fn blend_endpoints() {
        let black = Rgb(0, 0, 0);
        let white = Rgb(255, 255, 255);
        assert_eq!(black.blend(white, 0), black);
        assert_eq!(black.blend(white, 100), white);
        assert_eq!(black.blend(white, 50), Rgb(127, 127, 127));
    }

    #[test]
    fn parses_theme_mode_names() {
        assert_eq!("Night".parse::<ThemeMode>().unwrap(), ThemeMode::Night);
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Day);
        assert!(matches!(
            "dusk".parse::<ThemeMode>(),
            Err(BrowserError::Config(_))
        ));
    }

    #[test]
    fn loads_palette_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "name = \"sepia\"\n\n[colors]\ndark = \"40, 30, 20\"\nlight = \"#f4ecd8\""
        )
        .unwrap();

        let palette = Palette::from_file(file.path()).unwrap();
        assert_eq!(palette, Palette::sepia());
    }

    #[test]
    fn invalid_palette_color_is_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"bad\"\n\n[colors]\ndark = \"nope\"\nlight = \"#ffffff\"").unwrap();

        assert!(matches!(
            Palette::from_file(file.path()),
            Err(BrowserError::Theme(_))
        ));
    }
}
