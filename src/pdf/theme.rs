use serde::{Deserialize, Serialize};

/// Visual style of a generated document. Styles only change table
/// theming (ruled grid vs. plain rows) — never section ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleVariant {
    #[default]
    Modern,
    Classic,
    Minimal,
}

impl StyleVariant {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Minimal => "minimal",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "modern" => Some(Self::Modern),
            "classic" => Some(Self::Classic),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }

    /// Whether the line-item table draws cell rules. Minimal renders a
    /// plain table.
    pub fn ruled_table(&self) -> bool {
        !matches!(self, Self::Minimal)
    }
}

/// Closed set of document color schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
}

/// The fixed color tuple a scheme maps to. Values are 8-bit RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Header band, accent rules, table header fill.
    pub primary: (u8, u8, u8),
    /// Darker companion of the primary.
    pub secondary: (u8, u8, u8),
    /// Footer accents.
    pub accent: (u8, u8, u8),
    /// Body text.
    pub text: (u8, u8, u8),
    /// Alternating row tint.
    pub light: (u8, u8, u8),
}

impl ColorScheme {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "blue" => Some(Self::Blue),
            "green" => Some(Self::Green),
            "purple" => Some(Self::Purple),
            "orange" => Some(Self::Orange),
            _ => None,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Blue => Palette {
                primary: (59, 130, 246),
                secondary: (37, 99, 235),
                accent: (147, 197, 253),
                text: (15, 23, 42),
                light: (248, 250, 252),
            },
            Self::Green => Palette {
                primary: (34, 197, 94),
                secondary: (22, 163, 74),
                accent: (134, 239, 172),
                text: (15, 23, 42),
                light: (240, 253, 244),
            },
            Self::Purple => Palette {
                primary: (168, 85, 247),
                secondary: (147, 51, 234),
                accent: (196, 181, 253),
                text: (15, 23, 42),
                light: (250, 245, 255),
            },
            Self::Orange => Palette {
                primary: (249, 115, 22),
                secondary: (234, 88, 12),
                accent: (253, 186, 116),
                text: (15, 23, 42),
                light: (255, 247, 237),
            },
        }
    }
}
