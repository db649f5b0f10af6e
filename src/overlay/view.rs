use crate::overlay::interaction::{handle_bounds, hit_test, HitTarget, ResizeDirection};
use crate::overlay::model::{Bounds, FontFamily, FontWeight, HexColor, Point};
use crate::overlay::session::OverlaySession;

pub const BORDER_WIDTH: f32 = 2.0;
pub const HANDLE_COLOR: HexColor = HexColor::rgb(0, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Move,
    ResizeEast,
    ResizeSouth,
    ResizeSouthEast,
}

impl CursorHint {
    fn for_direction(direction: ResizeDirection) -> Self {
        match direction {
            ResizeDirection::Right => CursorHint::ResizeEast,
            ResizeDirection::Bottom => CursorHint::ResizeSouth,
            ResizeDirection::Corner => CursorHint::ResizeSouthEast,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    pub color: HexColor,
    pub width: f32,
    pub dashed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleView {
    pub direction: ResizeDirection,
    pub bounds: Bounds,
}

/// Everything a renderer needs to draw the overlay for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub bounds: Bounds,
    pub text: String,
    pub font_size: f32,
    pub font_family: FontFamily,
    pub font_weight: FontWeight,
    pub text_color: HexColor,
    pub border: Option<BorderStyle>,
    pub handles: Vec<HandleView>,
    pub editing: bool,
}

impl OverlayView {
    pub fn from_session(session: &OverlaySession) -> Self {
        let attrs = session.attributes();
        let playing = session.is_video_playing();
        let bounds = attrs.bounds().normalized();

        let border = (!playing).then_some(BorderStyle {
            color: attrs.stroke_color,
            width: BORDER_WIDTH,
            dashed: true,
        });
        let handles = if playing {
            Vec::new()
        } else {
            ResizeDirection::ALL
                .into_iter()
                .map(|direction| HandleView {
                    direction,
                    bounds: handle_bounds(attrs.bounds(), direction, session.handle_size()),
                })
                .collect()
        };

        Self {
            bounds,
            text: attrs.text.clone(),
            font_size: attrs.font_size,
            font_family: attrs.font_family,
            font_weight: attrs.font_weight,
            text_color: attrs.fill_color,
            border,
            handles,
            editing: session.is_editing(),
        }
    }
}

/// Cursor to show for a pointer at `point`. An active gesture keeps its
/// cursor even when the pointer leaves the overlay.
pub fn cursor_hint(session: &OverlaySession, point: Option<Point>) -> CursorHint {
    if session.is_video_playing() {
        return CursorHint::Default;
    }
    if let Some(direction) = session.controller().resize_direction() {
        return CursorHint::for_direction(direction);
    }
    if session.is_dragging() {
        return CursorHint::Move;
    }
    let Some(point) = point else {
        return CursorHint::Default;
    };
    match hit_test(session.attributes().bounds(), point, session.handle_size()) {
        Some(HitTarget::Handle(direction)) => CursorHint::for_direction(direction),
        Some(HitTarget::Body) if session.is_editing() => CursorHint::Default,
        Some(HitTarget::Body) => CursorHint::Move,
        None => CursorHint::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_view_has_dashed_border_and_three_handles() {
        let session = OverlaySession::default();
        let view = OverlayView::from_session(&session);

        assert_eq!(
            view.border,
            Some(BorderStyle {
                color: HexColor::rgb(0, 0, 0),
                width: BORDER_WIDTH,
                dashed: true
            })
        );
        assert_eq!(view.handles.len(), 3);
        assert_eq!(view.bounds, Bounds::new(500.0, 200.0, 150.0, 150.0));
        assert_eq!(view.text, "Text Sample");
        assert_eq!(view.text_color, HexColor::rgb(255, 0, 0));
    }

    #[test]
    fn playing_view_hides_chrome_and_ignores_pointer() {
        let mut session = OverlaySession::default();
        session.video_play();
        let view = OverlayView::from_session(&session);

        assert_eq!(view.border, None);
        assert!(view.handles.is_empty());
        assert_eq!(
            cursor_hint(&session, Some(Point::new(510.0, 210.0))),
            CursorHint::Default
        );
    }

    #[test]
    fn cursor_follows_hover_target() {
        let session = OverlaySession::default();
        assert_eq!(
            cursor_hint(&session, Some(Point::new(510.0, 210.0))),
            CursorHint::Move
        );
        assert_eq!(
            cursor_hint(&session, Some(Point::new(645.0, 345.0))),
            CursorHint::ResizeSouthEast
        );
        assert_eq!(
            cursor_hint(&session, Some(Point::new(0.0, 0.0))),
            CursorHint::Default
        );
    }

    #[test]
    fn resize_cursor_sticks_during_gesture() {
        let mut session = OverlaySession::default();
        session.pointer_down(Point::new(645.0, 280.0));
        assert_eq!(
            cursor_hint(&session, Some(Point::new(0.0, 0.0))),
            CursorHint::ResizeEast
        );
    }
}
