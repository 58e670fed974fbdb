use std::str::FromStr;

use crate::core::colour_palette::errors::PaletteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteKinds {
    #[default]
    Hue,
    PowerHue,
    Gradient,
}

impl PaletteKinds {
    pub const ALL: &'static [Self] = &[Self::Hue, Self::PowerHue, Self::Gradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Hue => "Hue",
            Self::PowerHue => "Power hue",
            Self::Gradient => "Gradient",
        }
    }

    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Hue => "hue",
            Self::PowerHue => "power-hue",
            Self::Gradient => "gradient",
        }
    }
}

impl std::fmt::Display for PaletteKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for PaletteKinds {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.cli_name().eq_ignore_ascii_case(s) || kind.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PaletteError::UnknownKind(s.to_string()))
    }
}
