use crate::overlay::model::{Bounds, FontFamily, FontWeight, HexColor, Point};
use crate::overlay::session::{EditKey, OverlaySession};
use crate::overlay::view::{cursor_hint, CursorHint, OverlayView};
use eframe::egui;

const DASH_LENGTH: f32 = 6.0;
const GAP_LENGTH: f32 = 4.0;
const MAX_RENDER_FONT_SIZE: f32 = 512.0;

/// Registers the overlay font names with egui. They alias the default
/// proportional font.
pub fn install_overlay_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let proportional = fonts
        .families
        .get(&egui::FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();
    for family in FontFamily::ALL {
        fonts
            .families
            .insert(egui::FontFamily::Name(family.name().into()), proportional.clone());
    }
    ctx.set_fonts(fonts);
}

pub fn to_color32(color: HexColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

fn font_id(family: FontFamily, size: f32) -> egui::FontId {
    let size = if size.is_finite() {
        size.clamp(1.0, MAX_RENDER_FONT_SIZE)
    } else {
        1.0
    };
    egui::FontId::new(size, egui::FontFamily::Name(family.name().into()))
}

fn cursor_icon(hint: CursorHint) -> egui::CursorIcon {
    match hint {
        CursorHint::Default => egui::CursorIcon::Default,
        CursorHint::Move => egui::CursorIcon::Move,
        CursorHint::ResizeEast => egui::CursorIcon::ResizeEast,
        CursorHint::ResizeSouth => egui::CursorIcon::ResizeSouth,
        CursorHint::ResizeSouthEast => egui::CursorIcon::ResizeSouthEast,
    }
}

/// Draws the overlay and turns raw pointer input into session calls.
#[derive(Default)]
pub struct OverlayCanvas {
    focus_requested: bool,
}

impl OverlayCanvas {
    pub fn ui(&mut self, ui: &mut egui::Ui, session: &mut OverlaySession) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        let origin = rect.min;
        let to_canvas = |pos: egui::Pos2| Point::new(pos.x - origin.x, pos.y - origin.y);
        let to_screen = |b: Bounds| {
            egui::Rect::from_min_size(
                egui::pos2(origin.x + b.left, origin.y + b.top),
                egui::vec2(b.width, b.height),
            )
        };

        let (pressed, released, press_origin, latest_pos, hover_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
                i.pointer.hover_pos(),
            )
        });

        if pressed {
            if let Some(pos) = press_origin.filter(|pos| rect.contains(*pos)) {
                session.pointer_down(to_canvas(pos));
            }
        }
        if session.is_dragging() || session.is_resizing() {
            if let Some(pos) = latest_pos {
                session.pointer_move(to_canvas(pos));
            }
        }
        if released {
            session.pointer_up();
        }

        let mut view = OverlayView::from_session(session);
        let overlay_rect = to_screen(view.bounds);
        let font = font_id(view.font_family, view.font_size);
        let text_color = to_color32(view.text_color);
        let galley = ui.fonts(|f| f.layout_no_wrap(view.text.clone(), font.clone(), text_color));
        let text_rect = egui::Rect::from_min_size(
            overlay_rect.min,
            egui::vec2(overlay_rect.width(), galley.size().y),
        );

        if response.clicked() {
            let on_text = response
                .interact_pointer_pos()
                .is_some_and(|pos| text_rect.contains(pos));
            if on_text && session.text_click() {
                view = OverlayView::from_session(session);
            }
        }

        let painter = ui.painter_at(rect);
        if !view.editing {
            painter.galley(overlay_rect.min, galley.clone(), text_color);
            if view.font_weight == FontWeight::Bold {
                painter.galley(overlay_rect.min + egui::vec2(1.0, 0.0), galley, text_color);
            }
        }

        if let Some(border) = view.border {
            let stroke = egui::Stroke::new(border.width, to_color32(border.color));
            let corners = [
                overlay_rect.left_top(),
                overlay_rect.right_top(),
                overlay_rect.right_bottom(),
                overlay_rect.left_bottom(),
                overlay_rect.left_top(),
            ];
            if border.dashed {
                painter.extend(egui::Shape::dashed_line(
                    &corners,
                    stroke,
                    DASH_LENGTH,
                    GAP_LENGTH,
                ));
            } else {
                painter.add(egui::Shape::line(corners.to_vec(), stroke));
            }
        }

        for handle in &view.handles {
            painter.rect_filled(
                to_screen(handle.bounds),
                0.0,
                to_color32(crate::overlay::view::HANDLE_COLOR),
            );
        }

        if view.editing {
            self.text_editor(ui, session, overlay_rect, font, text_color);
        } else {
            self.focus_requested = false;
        }

        let hover = hover_pos.filter(|pos| rect.contains(*pos)).map(to_canvas);
        let hint = cursor_hint(session, hover);
        if hint != CursorHint::Default {
            ui.ctx().set_cursor_icon(cursor_icon(hint));
        }

        response
    }

    fn text_editor(
        &mut self,
        ui: &mut egui::Ui,
        session: &mut OverlaySession,
        overlay_rect: egui::Rect,
        font: egui::FontId,
        text_color: egui::Color32,
    ) {
        let mut text = session.attributes().text.clone();
        let edit = egui::TextEdit::singleline(&mut text)
            .font(font)
            .text_color(text_color)
            .frame(false)
            .desired_width(overlay_rect.width());
        let response = ui.put(overlay_rect, edit);

        if !self.focus_requested {
            response.request_focus();
            self.focus_requested = true;
        }
        if response.changed() {
            session.text_input(text);
        }
        if response.lost_focus() {
            if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                session.key_press(EditKey::Enter);
            } else {
                session.text_blur();
            }
        }
    }
}
