//! Deterministic SVG rendering of a token.
//!
//! The output depends only on the arguments: identical inputs give
//! byte-identical documents, so consumers can cache images by URL. Every
//! color-dependent value lives in the leading `<defs>` block; the rest of
//! the document only depends on the token id and the date.

use crate::calendar::{month_name, weekday, CalendarDate, TokenId};
use crate::token::Material;

use super::error::{ImageError, Result};

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Colors used to paint a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub light: &'static str,
    pub dark: &'static str,
    pub accent: &'static str,
}

pub fn palette(material: Material) -> Palette {
    let (light, dark, accent) = match material {
        Material::Paper => ("#f5f1e6", "#d8cfb8", "#8a7f66"),
        Material::Wood => ("#c8915a", "#7a4b24", "#6b3f1d"),
        Material::Bronze => ("#e3a869", "#8c5323", "#a0612b"),
        Material::Silver => ("#f0f0f0", "#9ea4aa", "#6f777f"),
        Material::Gold => ("#ffe79a", "#c79a1e", "#b8860b"),
        Material::Diamond => ("#e8fbff", "#8fd3e8", "#2b8fb3"),
    };
    Palette {
        light,
        dark,
        accent,
    }
}

/// Renders the image for the given coordinates.
///
/// The date fields must be within the encoding ranges and name a real day.
pub fn render(id: TokenId, year: u64, month: u8, day: u8, color: u8) -> Result<String> {
    let date = CalendarDate::new(year, month, day)?;
    render_svg(id, &date, color)
}

/// Renders the image of a token as an SVG document.
pub fn render_svg(id: TokenId, date: &CalendarDate, color: u8) -> Result<String> {
    let material = Material::try_from(color).map_err(|_| ImageError::InvalidColor(color))?;
    let weekday = weekday(date)?;
    let month = month_name(date.month).unwrap_or_default().to_uppercase();
    let Palette {
        light,
        dark,
        accent,
    } = palette(material);

    Ok(format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="350" height="350" viewBox="0 0 350 350">"##,
            r##"<defs>"##,
            r##"<linearGradient id="material" x1="0" y1="0" x2="1" y2="1">"##,
            r##"<stop offset="0%" stop-color="{light}"/><stop offset="100%" stop-color="{dark}"/>"##,
            r##"</linearGradient>"##,
            r##"<style>.accent{{fill:{accent}}}</style>"##,
            r##"</defs>"##,
            r##"<rect width="350" height="350" rx="24" fill="url(#material)"/>"##,
            r##"<rect x="25" y="25" width="300" height="300" rx="16" fill="#ffffff"/>"##,
            r##"<rect x="25" y="25" width="300" height="70" rx="16" class="accent"/>"##,
            r##"<g font-family="Helvetica, Arial, sans-serif" text-anchor="middle">"##,
            r##"<text x="175" y="72" font-size="30" font-weight="bold" fill="#ffffff">{month}</text>"##,
            r##"<text x="175" y="215" font-size="110" font-weight="bold" class="accent">{day}</text>"##,
            r##"<text x="175" y="262" font-size="22" fill="#333333">{weekday}</text>"##,
            r##"<text x="175" y="300" font-size="20" fill="#666666">{year}</text>"##,
            r##"<text x="330" y="342" font-size="10" text-anchor="end" fill="#ffffff">#{id}</text>"##,
            r##"</g>"##,
            r##"</svg>"##,
        ),
        light = light,
        dark = dark,
        accent = accent,
        month = month,
        day = date.day,
        weekday = weekday.name(),
        year = date.year,
        id = id,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarError;

    fn origin() -> CalendarDate {
        CalendarDate::new(1, 1, 1).unwrap()
    }

    /// Splits a document into its color-dependent head and the remainder.
    fn split_defs(svg: &str) -> (&str, &str) {
        let end = svg.find("</defs>").expect("document should have defs");
        svg.split_at(end)
    }

    #[test]
    fn test_render_is_byte_identical() {
        let first = render(TokenId(0), 1, 1, 1, 4).unwrap();
        let second = render(TokenId(0), 1, 1, 1, 4).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_render_contents() {
        let svg = render_svg(TokenId(745_795), &CalendarDate::new(2005, 10, 29).unwrap(), 2)
            .unwrap();

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(">OCTOBER</text>"));
        assert!(svg.contains(">29</text>"));
        assert!(svg.contains(">Saturday</text>"));
        assert!(svg.contains(">2005</text>"));
        assert!(svg.contains(">#745795</text>"));
        assert!(svg.contains(".accent{fill:#a0612b}"));
    }

    #[test]
    fn test_color_only_changes_defs() {
        let date = origin();
        let gold = render_svg(TokenId(0), &date, Material::Gold.code()).unwrap();

        for material in Material::ALL {
            let other = render_svg(TokenId(0), &date, material.code()).unwrap();
            let (gold_defs, gold_body) = split_defs(&gold);
            let (other_defs, other_body) = split_defs(&other);

            assert_eq!(gold_body, other_body);
            if material != Material::Gold {
                assert_ne!(gold_defs, other_defs);
            }
        }
    }

    #[test]
    fn test_palettes_are_distinct() {
        for (i, a) in Material::ALL.iter().enumerate() {
            for b in &Material::ALL[i + 1..] {
                assert_ne!(palette(*a), palette(*b));
            }
        }
    }

    #[test]
    fn test_render_invalid_color() {
        assert_eq!(
            render(TokenId(0), 1, 1, 1, 6),
            Err(ImageError::InvalidColor(6))
        );
    }

    #[test]
    fn test_render_invalid_date() {
        assert_eq!(
            render(TokenId(0), 1, 13, 1, 4),
            Err(ImageError::InvalidDate(CalendarError::InvalidDate {
                year: 1,
                month: 13,
                day: 1
            }))
        );
        assert!(render(TokenId(0), 2021, 2, 29, 4).is_err());
        assert!(render(TokenId(0), 0, 1, 1, 4).is_err());
    }

    #[test]
    fn test_render_leap_day() {
        let svg = render(TokenId(0), 2000, 2, 29, 5).unwrap();
        assert!(svg.contains(">FEBRUARY</text>"));
        assert!(svg.contains(">Tuesday</text>"));
    }
}
