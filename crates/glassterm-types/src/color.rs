//! The terminal's text color table.

use std::fmt;

use serde::Deserialize;

/// A text color the `color` command can select.
///
/// The table is fixed at three entries; anything else is not a color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    #[default]
    Green,
    Blue,
    Purple,
}

impl TextColor {
    /// Every entry of the table, in the order `help` lists them.
    pub const ALL: [TextColor; 3] = [TextColor::Green, TextColor::Blue, TextColor::Purple];

    /// Look up a color by name (ASCII case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// The token users type and renderers key on.
    pub fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }

    /// RGB triple for the rendering surface.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Green => (0, 255, 65),
            Self::Blue => (0, 153, 255),
            Self::Purple => (191, 64, 255),
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_names() {
        assert_eq!(TextColor::from_name("green"), Some(TextColor::Green));
        assert_eq!(TextColor::from_name("blue"), Some(TextColor::Blue));
        assert_eq!(TextColor::from_name("purple"), Some(TextColor::Purple));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(TextColor::from_name("BLUE"), Some(TextColor::Blue));
        assert_eq!(TextColor::from_name("Purple"), Some(TextColor::Purple));
    }

    #[test]
    fn unknown_names_rejected() {
        assert_eq!(TextColor::from_name("ultraviolet"), None);
        assert_eq!(TextColor::from_name(""), None);
        assert_eq!(TextColor::from_name("red"), None);
    }

    #[test]
    fn default_is_green() {
        assert_eq!(TextColor::default(), TextColor::Green);
    }

    #[test]
    fn deserialize_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            color: TextColor,
        }
        let w: Wrapper = toml::from_str("color = \"purple\"").unwrap();
        assert_eq!(w.color, TextColor::Purple);
    }
}
