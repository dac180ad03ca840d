use crate::geometry::primitives::{Position, Rect};
use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the area within the wall clearance, where element centers are searched
    #[serde(default)]
    pub clearance_area: bool,
    ///Draw the zone around each element that other elements must stay out of
    #[serde(default)]
    pub collision_zones: bool,
    ///Draw dashed lines between overlapping elements and mark elements crossing the walls
    #[serde(default)]
    pub highlight_collisions: bool,
    ///Write the label of each element on top of it
    #[serde(default)]
    pub labels: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            clearance_area: true,
            collision_zones: false,
            highlight_collisions: true,
            labels: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub floor_fill: Color,
    pub wall_stroke: Color,
    ///Used for elements without a valid color of their own
    pub element_fill: Color,
    pub element_opacity: f64,
    pub collision_zone_color: Color,
    pub collision_highlight_color: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::SHOWROOM
    }
}

impl SvgLayoutTheme {
    pub const SHOWROOM: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        floor_fill: Color(0xF3, 0xF4, 0xF6),
        wall_stroke: Color(0x37, 0x41, 0x51),
        element_fill: Color(0x3B, 0x82, 0xF6),
        element_opacity: 0.7,
        collision_zone_color: Color(0xF5, 0x9E, 0x0B), // AMBER
        collision_highlight_color: Color(0xEF, 0x44, 0x44), // RED
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        floor_fill: Color(0xD3, 0xD3, 0xD3),
        wall_stroke: Color(0x00, 0x00, 0x00),
        element_fill: Color(0x7A, 0x7A, 0x7A),
        element_opacity: 0.9,
        collision_zone_color: Color(0x63, 0x63, 0x63),
        collision_highlight_color: Color(0xD0, 0x00, 0x00),
    };
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f64 * fraction) as u8;
    let g = (g as f64 * fraction) as u8;
    let b = (b as f64 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    /// Parses `#RRGGBB` (or `RRGGBB`) hex colors.
    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid hex color: {s}"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

/// A point on the floor, `z` is drawn along the vertical axis of the svg
pub fn point(p: Position, fill: Option<&str>, rad: Option<f64>) -> Circle {
    Circle::new()
        .set("cx", p.x())
        .set("cy", p.z())
        .set("r", rad.unwrap_or(0.05))
        .set("fill", fill.unwrap_or("black"))
}

pub fn line_data(start: Position, end: Position) -> Data {
    Data::new()
        .move_to((start.x(), start.z()))
        .line_to((end.x(), end.z()))
}

pub fn aa_rect_data(rect: Rect) -> Data {
    Data::new()
        .move_to((rect.x_min, rect.z_min))
        .line_to((rect.x_max, rect.z_min))
        .line_to((rect.x_max, rect.z_max))
        .line_to((rect.x_min, rect.z_max))
        .close()
}
