//! Box-shadow values derived from a numeric scale.

use crate::domain::color::HexColor;
use crate::domain::scale::{format_number, round2};
use crate::domain::value_objects::ShadowVariant;

/// CSS `box-shadow` for one elevation stop.
///
/// Offset-y is the stop, blur twice the stop. Outer shadows spread
/// `-stop / 2`; inner shadows are inset with no spread.
pub fn box_shadow(stop: f64, variant: ShadowVariant, color: HexColor, opacity: f64) -> String {
    let (r, g, b) = color.channels();
    let alpha = format_number(round2(opacity.clamp(0.0, 1.0)));
    let (inset, spread) = match variant {
        ShadowVariant::Outer => ("", -stop / 2.0),
        ShadowVariant::Inner => ("inset ", 0.0),
    };
    format!(
        "{inset}0 {}px {}px {}px rgba({r}, {g}, {b}, {alpha})",
        format_number(stop),
        format_number(stop * 2.0),
        format_number(spread),
    )
}
