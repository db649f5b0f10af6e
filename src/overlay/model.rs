use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OVERLAY_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(u64);

impl OverlayId {
    pub fn next() -> Self {
        Self(NEXT_OVERLAY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OverlayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "overlay-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Axis-aligned box in canvas coordinates. `width`/`height` may be negative
/// when a resize gesture runs under [`crate::overlay::interaction::ResizePolicy::Flip`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Same area with non-negative extents.
    pub fn normalized(&self) -> Bounds {
        let (left, width) = if self.width < 0.0 {
            (self.left + self.width, -self.width)
        } else {
            (self.left, self.width)
        };
        let (top, height) = if self.height < 0.0 {
            (self.top + self.height, -self.height)
        } else {
            (self.top, self.height)
        };
        Bounds::new(left, top, width, height)
    }

    pub fn contains(&self, point: Point) -> bool {
        let b = self.normalized();
        point.x >= b.left
            && point.x < b.left + b.width
            && point.y >= b.top
            && point.y < b.top + b.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FontFamily {
    #[default]
    Poppins,
    Arial,
    Roboto,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [FontFamily::Poppins, FontFamily::Arial, FontFamily::Roboto];

    pub fn name(self) -> &'static str {
        match self {
            FontFamily::Poppins => "Poppins",
            FontFamily::Arial => "Arial",
            FontFamily::Roboto => "Roboto",
        }
    }
}

impl std::fmt::Display for FontFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FontFamily {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontFamily::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    pub const ALL: [FontWeight; 2] = [FontWeight::Regular, FontWeight::Bold];

    pub fn name(self) -> &'static str {
        match self {
            FontWeight::Regular => "Regular",
            FontWeight::Bold => "Bold",
        }
    }
}

impl std::fmt::Display for FontWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FontWeight {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontWeight::ALL
            .into_iter()
            .find(|weight| weight.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// Opaque `#RRGGBB` color. Serialized as the hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_array(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for HexColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| format!("color '{trimmed}' must start with '#'"))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("color '{trimmed}' is not in #RRGGBB form"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| e.to_string())
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.to_string()
    }
}

/// Initial attribute values used when a session is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayDefaults {
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_size")]
    pub width: f32,
    #[serde(default = "default_size")]
    pub height: f32,
    #[serde(default = "default_top")]
    pub top: f32,
    #[serde(default = "default_left")]
    pub left: f32,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default)]
    pub font_family: FontFamily,
    #[serde(default)]
    pub font_weight: FontWeight,
    #[serde(default = "default_fill_color")]
    pub fill_color: HexColor,
    #[serde(default = "default_stroke_color")]
    pub stroke_color: HexColor,
}

fn default_text() -> String {
    "Text Sample".into()
}

fn default_size() -> f32 {
    150.0
}

fn default_top() -> f32 {
    200.0
}

fn default_left() -> f32 {
    500.0
}

fn default_font_size() -> f32 {
    36.0
}

fn default_fill_color() -> HexColor {
    HexColor::rgb(0xFF, 0x00, 0x00)
}

fn default_stroke_color() -> HexColor {
    HexColor::rgb(0x00, 0x00, 0x00)
}

impl Default for OverlayDefaults {
    fn default() -> Self {
        Self {
            text: default_text(),
            width: default_size(),
            height: default_size(),
            top: default_top(),
            left: default_left(),
            font_size: default_font_size(),
            font_family: FontFamily::default(),
            font_weight: FontWeight::default(),
            fill_color: default_fill_color(),
            stroke_color: default_stroke_color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayAttributes {
    id: OverlayId,
    pub text: String,
    pub width: f32,
    pub height: f32,
    pub top: f32,
    pub left: f32,
    pub font_size: f32,
    pub font_family: FontFamily,
    pub font_weight: FontWeight,
    pub fill_color: HexColor,
    pub stroke_color: HexColor,
}

impl OverlayAttributes {
    pub fn from_defaults(defaults: &OverlayDefaults) -> Self {
        Self {
            id: OverlayId::next(),
            text: defaults.text.clone(),
            width: defaults.width,
            height: defaults.height,
            top: defaults.top,
            left: defaults.left,
            font_size: defaults.font_size,
            font_family: defaults.font_family,
            font_weight: defaults.font_weight,
            fill_color: defaults.fill_color,
            stroke_color: defaults.stroke_color,
        }
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.left, self.top, self.width, self.height)
    }
}

impl Default for OverlayAttributes {
    fn default() -> Self {
        Self::from_defaults(&OverlayDefaults::default())
    }
}
