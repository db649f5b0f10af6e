use crate::overlay::model::{FontFamily, FontWeight, HexColor, OverlayAttributes};
use crate::overlay::update::{AttributeField, AttributeUpdate};
use eframe::egui;

pub const PANEL_TITLE: &str = "Add Text";

/// Renders one labelled input per overlay attribute. Inputs show the live
/// attribute values; edits are returned rather than written so that the
/// caller routes them through the session's single write path.
pub fn render_attribute_panel(
    ui: &mut egui::Ui,
    attrs: &OverlayAttributes,
    id_source: &str,
) -> Vec<AttributeUpdate> {
    let mut updates = Vec::new();

    ui.vertical_centered(|ui| {
        ui.heading(PANEL_TITLE);
    });
    ui.separator();

    ui.horizontal(|ui| {
        number_input(ui, AttributeField::Left, attrs.left, &mut updates);
        number_input(ui, AttributeField::Top, attrs.top, &mut updates);
    });
    ui.horizontal(|ui| {
        number_input(ui, AttributeField::Width, attrs.width, &mut updates);
        number_input(ui, AttributeField::Height, attrs.height, &mut updates);
    });

    ui.label(AttributeField::Text.label());
    let mut text = attrs.text.clone();
    if ui
        .add(
            egui::TextEdit::singleline(&mut text)
                .id_source(format!("{id_source}_text"))
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        updates.push(AttributeUpdate::Text(text));
    }

    ui.label(AttributeField::FontFamily.label());
    let mut family = attrs.font_family;
    egui::ComboBox::from_id_source(format!("{id_source}_font_family"))
        .selected_text(family.name())
        .show_ui(ui, |ui| {
            for option in FontFamily::ALL {
                ui.selectable_value(&mut family, option, option.name());
            }
        });
    if family != attrs.font_family {
        updates.push(AttributeUpdate::FontFamily(family));
    }

    ui.label(AttributeField::FontWeight.label());
    let mut weight = attrs.font_weight;
    egui::ComboBox::from_id_source(format!("{id_source}_font_weight"))
        .selected_text(weight.name())
        .show_ui(ui, |ui| {
            for option in FontWeight::ALL {
                ui.selectable_value(&mut weight, option, option.name());
            }
        });
    if weight != attrs.font_weight {
        updates.push(AttributeUpdate::FontWeight(weight));
    }

    ui.horizontal(|ui| {
        number_input(ui, AttributeField::FontSize, attrs.font_size, &mut updates);
    });

    ui.horizontal(|ui| {
        color_input(ui, AttributeField::FillColor, attrs.fill_color, &mut updates);
        color_input(ui, AttributeField::StrokeColor, attrs.stroke_color, &mut updates);
    });

    updates
}

fn number_input(
    ui: &mut egui::Ui,
    field: AttributeField,
    current: f32,
    updates: &mut Vec<AttributeUpdate>,
) {
    ui.label(field.label());
    let mut value = current;
    if ui
        .add(egui::DragValue::new(&mut value).speed(1.0))
        .changed()
    {
        if let Some(update) = numeric_update(field, value) {
            updates.push(update);
        }
    }
}

fn color_input(
    ui: &mut egui::Ui,
    field: AttributeField,
    current: HexColor,
    updates: &mut Vec<AttributeUpdate>,
) {
    ui.label(field.label());
    let mut rgb = current.to_array();
    if ui.color_edit_button_srgb(&mut rgb).changed() {
        let color = HexColor::from_array(rgb);
        match field {
            AttributeField::FillColor => updates.push(AttributeUpdate::FillColor(color)),
            AttributeField::StrokeColor => updates.push(AttributeUpdate::StrokeColor(color)),
            _ => {}
        }
    }
}

pub fn numeric_update(field: AttributeField, value: f32) -> Option<AttributeUpdate> {
    let update = match field {
        AttributeField::Left => AttributeUpdate::Left(value),
        AttributeField::Top => AttributeUpdate::Top(value),
        AttributeField::Width => AttributeUpdate::Width(value),
        AttributeField::Height => AttributeUpdate::Height(value),
        AttributeField::FontSize => AttributeUpdate::FontSize(value),
        _ => return None,
    };
    Some(update)
}
