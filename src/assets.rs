//! Bundled language artwork.
//!
//! Each [`crate::catalog::LanguageRecord`] carries an image key which is
//! resolved here. Unknown keys resolve to `None`; the detail screen leaves
//! the image region blank in that case.

use indoc::indoc;
use ratatui::style::Color;

/// A block-art image for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artwork {
    /// Image key this artwork is registered under
    pub key: &'static str,
    /// Accent color used when the theme allows colors
    pub color: Color,
    art: &'static str,
}

impl Artwork {
    /// Lines of the artwork, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = &'static str> {
        self.art.lines()
    }

    /// Width in terminal cells (all artwork glyphs are one cell wide)
    pub fn width(&self) -> u16 {
        self.lines().map(|l| l.chars().count()).max().unwrap_or(0) as u16
    }

    /// Height in lines
    pub fn height(&self) -> u16 {
        self.lines().count() as u16
    }
}

const ARTWORK: &[Artwork] = &[
    Artwork {
        key: "rust",
        color: Color::Rgb(222, 165, 132),
        art: indoc! {"
            ▄▀▀▀▀▀▀▀▀▀▄
            █ █▀▀▀▀▄  █
            █ █▄▄▄▄▀  █
            █ █   ▀▄  █
            ▀▄▄▄▄▄▄▄▄▄▀
        "},
    },
    Artwork {
        key: "kotlin",
        color: Color::Rgb(127, 82, 255),
        art: indoc! {"
            █▀▀▀▀▀▀▀▀▀█
            █ █   ▄▀  █
            █ █▄▄▀    █
            █ █   ▀▄  █
            █▄▄▄▄▄▄▄▄▄█
        "},
    },
    Artwork {
        key: "swift",
        color: Color::Rgb(240, 81, 56),
        art: indoc! {"
            ▄▀▀▀▀▀▀▀▀▀▄
            █  ▄▀▀▀▀  █
            █   ▀▀▀▄  █
            █  ▄▄▄▄▀  █
            ▀▄▄▄▄▄▄▄▄▄▀
        "},
    },
    Artwork {
        key: "javascript",
        color: Color::Rgb(247, 223, 30),
        art: indoc! {"
            █▀▀▀▀▀▀▀▀▀█
            █   ▀▀█   █
            █     █   █
            █   ▀▄▀ JS█
            █▄▄▄▄▄▄▄▄▄█
        "},
    },
    Artwork {
        key: "python",
        color: Color::Rgb(55, 118, 171),
        art: indoc! {"
            ▄▀▀▀▀▀▀▀▀▀▄
            █ █▀▀▀▀▄  █
            █ █▄▄▄▄▀  █
            █ █       █
            ▀▄▄▄▄▄▄▄▄▄▀
        "},
    },
    Artwork {
        key: "ruby",
        color: Color::Rgb(204, 52, 45),
        art: indoc! {"
              ▄▀▀▀▀▀▄
             █▀▀▀█▀▀▀█
             ▀▄  █  ▄▀
               ▀▄█▄▀
                 ▀
        "},
    },
];

/// Resolve an image key against the bundled artwork
pub fn lookup(key: &str) -> Option<&'static Artwork> {
    ARTWORK.iter().find(|a| a.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    #[test]
    fn test_every_catalog_image_resolves() {
        for record in catalog().records() {
            assert!(
                lookup(record.image).is_some(),
                "no artwork for {}",
                record.image
            );
        }
    }

    #[test]
    fn test_unknown_key_is_none() {
        assert!(lookup("cobol").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_dimensions_match_content() {
        for artwork in ARTWORK {
            assert_eq!(artwork.height(), 5, "{} height", artwork.key);
            assert!(artwork.width() > 0, "{} width", artwork.key);
            assert!(artwork.width() <= 11, "{} width", artwork.key);
        }
    }
}
