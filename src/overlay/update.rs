use crate::overlay::model::{FontFamily, FontWeight, HexColor, OverlayAttributes};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeField {
    Left,
    Top,
    Width,
    Height,
    Text,
    FontFamily,
    FontWeight,
    FontSize,
    FillColor,
    StrokeColor,
}

impl AttributeField {
    /// Panel order.
    pub const ALL: [AttributeField; 10] = [
        AttributeField::Left,
        AttributeField::Top,
        AttributeField::Width,
        AttributeField::Height,
        AttributeField::Text,
        AttributeField::FontFamily,
        AttributeField::FontWeight,
        AttributeField::FontSize,
        AttributeField::FillColor,
        AttributeField::StrokeColor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AttributeField::Left => "left",
            AttributeField::Top => "top",
            AttributeField::Width => "width",
            AttributeField::Height => "height",
            AttributeField::Text => "text",
            AttributeField::FontFamily => "font_family",
            AttributeField::FontWeight => "font_weight",
            AttributeField::FontSize => "font_size",
            AttributeField::FillColor => "fill_color",
            AttributeField::StrokeColor => "stroke_color",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttributeField::Left => "X",
            AttributeField::Top => "Y",
            AttributeField::Width => "W",
            AttributeField::Height => "H",
            AttributeField::Text => "Text",
            AttributeField::FontFamily => "Font Family",
            AttributeField::FontWeight => "Font Weight",
            AttributeField::FontSize => "Font Size",
            AttributeField::FillColor => "Fill",
            AttributeField::StrokeColor => "Stroke",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            AttributeField::Left
                | AttributeField::Top
                | AttributeField::Width
                | AttributeField::Height
                | AttributeField::FontSize
        )
    }
}

impl std::fmt::Display for AttributeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for AttributeField {
    type Err = UpdateError;

    /// Accepts snake_case names as well as the camelCase keys used by web hosts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let field = match key {
            "left" => AttributeField::Left,
            "top" => AttributeField::Top,
            "width" => AttributeField::Width,
            "height" => AttributeField::Height,
            "text" => AttributeField::Text,
            "font_family" | "fontFamily" => AttributeField::FontFamily,
            "font_weight" | "fontWeight" => AttributeField::FontWeight,
            "font_size" | "fontSize" => AttributeField::FontSize,
            "fill_color" | "fillColor" => AttributeField::FillColor,
            "stroke_color" | "strokeColor" => AttributeField::StrokeColor,
            _ => return Err(UpdateError::UnknownField(key.to_string())),
        };
        Ok(field)
    }
}

/// One replacement of one overlay field. Every write into
/// [`OverlayAttributes`] goes through this type.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeUpdate {
    Left(f32),
    Top(f32),
    Width(f32),
    Height(f32),
    Text(String),
    FontFamily(FontFamily),
    FontWeight(FontWeight),
    FontSize(f32),
    FillColor(HexColor),
    StrokeColor(HexColor),
}

impl AttributeUpdate {
    pub fn field(&self) -> AttributeField {
        match self {
            AttributeUpdate::Left(_) => AttributeField::Left,
            AttributeUpdate::Top(_) => AttributeField::Top,
            AttributeUpdate::Width(_) => AttributeField::Width,
            AttributeUpdate::Height(_) => AttributeField::Height,
            AttributeUpdate::Text(_) => AttributeField::Text,
            AttributeUpdate::FontFamily(_) => AttributeField::FontFamily,
            AttributeUpdate::FontWeight(_) => AttributeField::FontWeight,
            AttributeUpdate::FontSize(_) => AttributeField::FontSize,
            AttributeUpdate::FillColor(_) => AttributeField::FillColor,
            AttributeUpdate::StrokeColor(_) => AttributeField::StrokeColor,
        }
    }

    /// Coerces textual input into a typed update. Numbers are not range
    /// checked; only values that cannot be represented are rejected.
    pub fn parse(field: AttributeField, raw: &str) -> Result<Self, UpdateError> {
        let number = || -> Result<f32, UpdateError> {
            match raw.trim().parse::<f32>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(UpdateError::InvalidNumber {
                    field,
                    raw: raw.to_string(),
                }),
            }
        };
        let color = || -> Result<HexColor, UpdateError> {
            raw.parse().map_err(|_| UpdateError::InvalidColor {
                field,
                raw: raw.to_string(),
            })
        };

        let update = match field {
            AttributeField::Left => AttributeUpdate::Left(number()?),
            AttributeField::Top => AttributeUpdate::Top(number()?),
            AttributeField::Width => AttributeUpdate::Width(number()?),
            AttributeField::Height => AttributeUpdate::Height(number()?),
            AttributeField::FontSize => AttributeUpdate::FontSize(number()?),
            AttributeField::Text => AttributeUpdate::Text(raw.to_string()),
            AttributeField::FontFamily => AttributeUpdate::FontFamily(
                raw.parse()
                    .map_err(|_| UpdateError::UnknownFontFamily(raw.to_string()))?,
            ),
            AttributeField::FontWeight => AttributeUpdate::FontWeight(
                raw.parse()
                    .map_err(|_| UpdateError::UnknownFontWeight(raw.to_string()))?,
            ),
            AttributeField::FillColor => AttributeUpdate::FillColor(color()?),
            AttributeField::StrokeColor => AttributeUpdate::StrokeColor(color()?),
        };
        Ok(update)
    }

    /// Replaces exactly the addressed field. Returns whether the value changed.
    pub fn apply_to(self, attrs: &mut OverlayAttributes) -> bool {
        fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
            if *slot == value {
                false
            } else {
                *slot = value;
                true
            }
        }

        match self {
            AttributeUpdate::Left(v) => replace(&mut attrs.left, v),
            AttributeUpdate::Top(v) => replace(&mut attrs.top, v),
            AttributeUpdate::Width(v) => replace(&mut attrs.width, v),
            AttributeUpdate::Height(v) => replace(&mut attrs.height, v),
            AttributeUpdate::Text(v) => replace(&mut attrs.text, v),
            AttributeUpdate::FontFamily(v) => replace(&mut attrs.font_family, v),
            AttributeUpdate::FontWeight(v) => replace(&mut attrs.font_weight, v),
            AttributeUpdate::FontSize(v) => replace(&mut attrs.font_size, v),
            AttributeUpdate::FillColor(v) => replace(&mut attrs.fill_color, v),
            AttributeUpdate::StrokeColor(v) => replace(&mut attrs.stroke_color, v),
        }
    }
}

/// Current value of `field` as the text a panel input would show.
pub fn display_value(attrs: &OverlayAttributes, field: AttributeField) -> String {
    match field {
        AttributeField::Left => attrs.left.to_string(),
        AttributeField::Top => attrs.top.to_string(),
        AttributeField::Width => attrs.width.to_string(),
        AttributeField::Height => attrs.height.to_string(),
        AttributeField::Text => attrs.text.clone(),
        AttributeField::FontFamily => attrs.font_family.to_string(),
        AttributeField::FontWeight => attrs.font_weight.to_string(),
        AttributeField::FontSize => attrs.font_size.to_string(),
        AttributeField::FillColor => attrs.fill_color.to_string(),
        AttributeField::StrokeColor => attrs.stroke_color.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    UnknownField(String),
    InvalidNumber { field: AttributeField, raw: String },
    InvalidColor { field: AttributeField, raw: String },
    UnknownFontFamily(String),
    UnknownFontWeight(String),
}

impl std::fmt::Display for UpdateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateError::UnknownField(name) => write!(f, "unknown overlay field '{name}'"),
            UpdateError::InvalidNumber { field, raw } => {
                write!(f, "'{raw}' is not a number for field {field}")
            }
            UpdateError::InvalidColor { field, raw } => {
                write!(f, "'{raw}' is not a #RRGGBB color for field {field}")
            }
            UpdateError::UnknownFontFamily(raw) => write!(f, "unknown font family '{raw}'"),
            UpdateError::UnknownFontWeight(raw) => write!(f, "unknown font weight '{raw}'"),
        }
    }
}

impl std::error::Error for UpdateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_replaces_only_the_addressed_field() {
        let mut attrs = OverlayAttributes::default();
        let before = attrs.clone();

        assert!(AttributeUpdate::Width(320.0).apply_to(&mut attrs));
        assert_eq!(attrs.width, 320.0);
        assert_eq!(attrs.height, before.height);
        assert_eq!(attrs.left, before.left);
        assert_eq!(attrs.top, before.top);
        assert_eq!(attrs.text, before.text);
        assert_eq!(attrs.id(), before.id());
    }

    #[test]
    fn apply_reports_unchanged_values() {
        let mut attrs = OverlayAttributes::default();
        assert!(!AttributeUpdate::Left(attrs.left).apply_to(&mut attrs));
    }

    #[test]
    fn field_names_accept_snake_and_camel_case() {
        assert_eq!("fontSize".parse::<AttributeField>(), Ok(AttributeField::FontSize));
        assert_eq!("font_size".parse::<AttributeField>(), Ok(AttributeField::FontSize));
        assert_eq!(
            "strokeColor".parse::<AttributeField>(),
            Ok(AttributeField::StrokeColor)
        );
        assert_eq!(
            "opacity".parse::<AttributeField>(),
            Err(UpdateError::UnknownField("opacity".into()))
        );
    }

    #[test]
    fn numeric_parse_accepts_out_of_range_values() {
        assert_eq!(
            AttributeUpdate::parse(AttributeField::Width, " -40 "),
            Ok(AttributeUpdate::Width(-40.0))
        );
    }

    #[test]
    fn numeric_parse_rejects_text_and_non_finite_values() {
        for raw in ["", "abc", "NaN", "inf"] {
            assert!(
                matches!(
                    AttributeUpdate::parse(AttributeField::Top, raw),
                    Err(UpdateError::InvalidNumber { .. })
                ),
                "expected '{raw}' to be rejected"
            );
        }
    }

    #[test]
    fn enumerated_fields_parse_known_names_only() {
        assert_eq!(
            AttributeUpdate::parse(AttributeField::FontFamily, "roboto"),
            Ok(AttributeUpdate::FontFamily(FontFamily::Roboto))
        );
        assert_eq!(
            AttributeUpdate::parse(AttributeField::FontWeight, "Heavy"),
            Err(UpdateError::UnknownFontWeight("Heavy".into()))
        );
        assert!(matches!(
            AttributeUpdate::parse(AttributeField::FillColor, "red"),
            Err(UpdateError::InvalidColor { .. })
        ));
    }

    #[test]
    fn display_value_mirrors_every_field() {
        let attrs = OverlayAttributes::default();
        let values: Vec<String> = AttributeField::ALL
            .iter()
            .map(|field| display_value(&attrs, *field))
            .collect();
        assert_eq!(
            values,
            vec![
                "500", "200", "150", "150", "Text Sample", "Poppins", "Regular", "36",
                "#FF0000", "#000000"
            ]
        );
    }
}
