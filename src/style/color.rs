//! Color-reference resolution.
//!
//! Cell styles reference colors in one of three mutually exclusive
//! encodings: a literal RGB/ARGB hex string, an index into the legacy fixed
//! palette, or a theme-palette index with an optional tint. The encoding is
//! carried by the [`ColorRef`] variant, so resolution is a total function
//! over a closed set of cases. Unresolvable input (unknown index, malformed
//! hex) yields "no color" rather than an error; color resolution is
//! best-effort and must never abort a conversion.

use crate::common::Rgb;

/// A color reference as recorded in a cell style.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorRef {
    /// 6-digit `RRGGBB` or 8-digit `AARRGGBB` hex string
    Rgb(String),
    /// Index into the legacy fixed palette
    Indexed(u32),
    /// Theme palette index with an optional tint in `[-1, 1]`
    Theme {
        /// Index into [`THEME_PALETTE`]
        index: u32,
        /// Signed lightening (positive) or darkening (negative) factor
        tint: Option<f64>,
    },
}

/// Legacy indexed palette.
///
/// The classic fixed palette: the eight EGA colors twice (indices 0-7 and
/// 8-15 are historically identical), then the dark primaries/secondaries and
/// the two grays. Indices outside this table resolve to no color.
pub const INDEXED_PALETTE: [Rgb; 24] = [
    Rgb::new(0x00, 0x00, 0x00), // 0: black
    Rgb::new(0xFF, 0xFF, 0xFF), // 1: white
    Rgb::new(0xFF, 0x00, 0x00), // 2: red
    Rgb::new(0x00, 0xFF, 0x00), // 3: green
    Rgb::new(0x00, 0x00, 0xFF), // 4: blue
    Rgb::new(0xFF, 0xFF, 0x00), // 5: yellow
    Rgb::new(0xFF, 0x00, 0xFF), // 6: magenta
    Rgb::new(0x00, 0xFF, 0xFF), // 7: cyan
    Rgb::new(0x00, 0x00, 0x00), // 8: black
    Rgb::new(0xFF, 0xFF, 0xFF), // 9: white
    Rgb::new(0xFF, 0x00, 0x00), // 10: red
    Rgb::new(0x00, 0xFF, 0x00), // 11: green
    Rgb::new(0x00, 0x00, 0xFF), // 12: blue
    Rgb::new(0xFF, 0xFF, 0x00), // 13: yellow
    Rgb::new(0xFF, 0x00, 0xFF), // 14: magenta
    Rgb::new(0x00, 0xFF, 0xFF), // 15: cyan
    Rgb::new(0x80, 0x00, 0x00), // 16: maroon
    Rgb::new(0x00, 0x80, 0x00), // 17: dark green
    Rgb::new(0x00, 0x00, 0x80), // 18: navy
    Rgb::new(0x80, 0x80, 0x00), // 19: olive
    Rgb::new(0x80, 0x00, 0x80), // 20: purple
    Rgb::new(0x00, 0x80, 0x80), // 21: teal
    Rgb::new(0xC0, 0xC0, 0xC0), // 22: silver
    Rgb::new(0x80, 0x80, 0x80), // 23: gray
];

/// Theme palette in cell-theme index order.
///
/// Roles: `lt1`, `dk1`, `lt2`, `dk2`, then `accent1` through `accent6`, with
/// the default Office theme colors. Many workbooks omit the full theme
/// definition and rely on these defaults.
pub const THEME_PALETTE: [Rgb; 10] = [
    Rgb::new(0xFF, 0xFF, 0xFF), // 0: lt1 (background 1)
    Rgb::new(0x00, 0x00, 0x00), // 1: dk1 (text 1)
    Rgb::new(0xEE, 0xEC, 0xE1), // 2: lt2 (background 2)
    Rgb::new(0x1F, 0x49, 0x7D), // 3: dk2 (text 2)
    Rgb::new(0x4F, 0x81, 0xBD), // 4: accent1
    Rgb::new(0xC0, 0x50, 0x4D), // 5: accent2
    Rgb::new(0x9B, 0xBB, 0x59), // 6: accent3
    Rgb::new(0x80, 0x64, 0xA2), // 7: accent4
    Rgb::new(0x4B, 0xAC, 0xC6), // 8: accent5
    Rgb::new(0xF7, 0x96, 0x46), // 9: accent6
];

/// Resolve one color reference to an RGB triple, or no color.
///
/// # Examples
///
/// ```rust
/// use quire::style::color::{ColorRef, resolve};
/// use quire::Rgb;
///
/// assert_eq!(resolve(&ColorRef::Rgb("FF1F497D".into())), Some(Rgb::new(31, 73, 125)));
/// assert_eq!(resolve(&ColorRef::Indexed(2)), Some(Rgb::new(255, 0, 0)));
/// assert_eq!(resolve(&ColorRef::Indexed(900)), None);
/// ```
pub fn resolve(color: &ColorRef) -> Option<Rgb> {
    match color {
        ColorRef::Rgb(hex) => Rgb::from_hex(hex),
        ColorRef::Indexed(index) => INDEXED_PALETTE.get(*index as usize).copied(),
        ColorRef::Theme { index, tint } => {
            let base = THEME_PALETTE.get(*index as usize).copied()?;
            Some(match tint {
                Some(t) if *t != 0.0 => apply_tint(base, *t),
                _ => base,
            })
        },
    }
}

/// Apply a theme tint to a base color.
///
/// Negative tints darken toward black: each channel is scaled by
/// `1 + tint`. Positive tints lighten toward white: each channel `c` becomes
/// `c * (1 - tint) + 255 * tint`. Results are rounded to nearest.
fn apply_tint(color: Rgb, tint: f64) -> Rgb {
    let tint = tint.clamp(-1.0, 1.0);
    Rgb::new(
        tint_channel(color.r, tint),
        tint_channel(color.g, tint),
        tint_channel(color.b, tint),
    )
}

fn tint_channel(channel: u8, tint: f64) -> u8 {
    let c = channel as f64;
    let adjusted = if tint < 0.0 {
        c * (1.0 + tint)
    } else {
        c * (1.0 - tint) + 255.0 * tint
    };

    adjusted.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_resolve_hex() {
        let color = resolve(&ColorRef::Rgb("4F81BD".into()));
        assert_eq!(color, Some(Rgb::new(0x4F, 0x81, 0xBD)));

        // 8-digit ARGB drops the alpha byte
        let argb = resolve(&ColorRef::Rgb("804F81BD".into()));
        assert_eq!(argb, color);
    }

    #[test]
    fn test_resolve_malformed_hex_is_no_color() {
        assert_eq!(resolve(&ColorRef::Rgb(String::new())), None);
        assert_eq!(resolve(&ColorRef::Rgb("XYZXYZ".into())), None);
        assert_eq!(resolve(&ColorRef::Rgb("12345".into())), None);
    }

    #[test]
    fn test_resolve_indexed() {
        assert_eq!(resolve(&ColorRef::Indexed(0)), Some(Rgb::new(0, 0, 0)));
        assert_eq!(resolve(&ColorRef::Indexed(22)), Some(Rgb::new(0xC0, 0xC0, 0xC0)));
        // Unknown indices resolve to no color, never an error
        assert_eq!(resolve(&ColorRef::Indexed(24)), None);
        assert_eq!(resolve(&ColorRef::Indexed(u32::MAX)), None);
    }

    #[test]
    fn test_resolve_theme_without_tint() {
        let accent1 = ColorRef::Theme {
            index: 4,
            tint: None,
        };
        assert_eq!(resolve(&accent1), Some(Rgb::new(0x4F, 0x81, 0xBD)));

        let zero_tint = ColorRef::Theme {
            index: 4,
            tint: Some(0.0),
        };
        assert_eq!(resolve(&zero_tint), resolve(&accent1));

        let unknown = ColorRef::Theme {
            index: 10,
            tint: None,
        };
        assert_eq!(resolve(&unknown), None);
    }

    #[test]
    fn test_tint_extremes() {
        let base = Rgb::new(0x00, 0x00, 0xFF);
        assert_eq!(apply_tint(base, -1.0), Rgb::new(0, 0, 0));
        assert_eq!(apply_tint(base, 1.0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_tint_lighten_and_darken() {
        // Darken pure blue by 50%.
        assert_eq!(apply_tint(Rgb::new(0, 0, 255), -0.5), Rgb::new(0, 0, 0x80));
        // Lighten pure blue by 50%.
        assert_eq!(
            apply_tint(Rgb::new(0, 0, 255), 0.5),
            Rgb::new(0x80, 0x80, 0xFF)
        );
        // Black and white tint symmetrically toward mid-gray.
        assert_eq!(apply_tint(Rgb::new(0, 0, 0), 0.5), Rgb::new(0x80, 0x80, 0x80));
        assert_eq!(
            apply_tint(Rgb::new(255, 255, 255), -0.5),
            Rgb::new(0x80, 0x80, 0x80)
        );
    }

    #[test]
    fn test_out_of_range_tint_is_clamped() {
        let spilled = ColorRef::Theme {
            index: 9,
            tint: Some(4.0),
        };
        assert_eq!(resolve(&spilled), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let reference = ColorRef::Theme {
            index: 6,
            tint: Some(-0.25),
        };
        assert_eq!(resolve(&reference), resolve(&reference));
    }

    proptest! {
        #[test]
        fn six_digit_hex_decodes_directly((r, g, b) in any::<(u8, u8, u8)>()) {
            let hex = format!("{r:02X}{g:02X}{b:02X}");
            prop_assert_eq!(resolve(&ColorRef::Rgb(hex)), Some(Rgb::new(r, g, b)));
        }

        #[test]
        fn argb_alpha_is_ignored((a, r, g, b) in any::<(u8, u8, u8, u8)>()) {
            let argb = format!("{a:02X}{r:02X}{g:02X}{b:02X}");
            let rgb = format!("{r:02X}{g:02X}{b:02X}");
            prop_assert_eq!(
                resolve(&ColorRef::Rgb(argb)),
                resolve(&ColorRef::Rgb(rgb))
            );
        }
    }
}
