use crate::overlay::edit_mode::EditModeGate;
use crate::overlay::model::{Bounds, Point};
use crate::overlay::update::AttributeUpdate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HANDLE_SIZE: f32 = 10.0;
pub const DEFAULT_MIN_SIZE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeDirection {
    Right,
    Bottom,
    Corner,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 3] = [
        ResizeDirection::Corner,
        ResizeDirection::Right,
        ResizeDirection::Bottom,
    ];

    fn moves_width(self) -> bool {
        matches!(self, ResizeDirection::Right | ResizeDirection::Corner)
    }

    fn moves_height(self) -> bool {
        matches!(self, ResizeDirection::Bottom | ResizeDirection::Corner)
    }
}

/// What a resize gesture does when the pointer crosses the anchor corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ResizePolicy {
    Clamp { min_size: f32 },
    Flip,
}

impl Default for ResizePolicy {
    fn default() -> Self {
        ResizePolicy::Clamp {
            min_size: DEFAULT_MIN_SIZE,
        }
    }
}

impl ResizePolicy {
    pub fn apply(self, extent: f32) -> f32 {
        match self {
            ResizePolicy::Clamp { min_size } => extent.max(min_size),
            ResizePolicy::Flip => extent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        offset: Point,
    },
    Resizing {
        direction: ResizeDirection,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitTarget {
    Handle(ResizeDirection),
    Body,
}

/// Handle squares: corner at bottom-right, right at the right edge starting
/// at half height, bottom at the bottom edge starting at half width.
pub fn handle_bounds(bounds: Bounds, direction: ResizeDirection, handle_size: f32) -> Bounds {
    let b = bounds.normalized();
    let right = b.left + b.width - handle_size;
    let bottom = b.top + b.height - handle_size;
    match direction {
        ResizeDirection::Corner => Bounds::new(right, bottom, handle_size, handle_size),
        ResizeDirection::Right => {
            Bounds::new(right, b.top + b.height / 2.0, handle_size, handle_size)
        }
        ResizeDirection::Bottom => {
            Bounds::new(b.left + b.width / 2.0, bottom, handle_size, handle_size)
        }
    }
}

/// Handles win over the body.
pub fn hit_test(bounds: Bounds, point: Point, handle_size: f32) -> Option<HitTarget> {
    ResizeDirection::ALL
        .into_iter()
        .find(|direction| handle_bounds(bounds, *direction, handle_size).contains(point))
        .map(HitTarget::Handle)
        .or_else(|| bounds.contains(point).then_some(HitTarget::Body))
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionController {
    gesture: Gesture,
    policy: ResizePolicy,
}

impl InteractionController {
    pub fn new(policy: ResizePolicy) -> Self {
        Self {
            gesture: Gesture::Idle,
            policy,
        }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, Gesture::Resizing { .. })
    }

    pub fn drag_offset(&self) -> Option<Point> {
        match self.gesture {
            Gesture::Dragging { offset } => Some(offset),
            _ => None,
        }
    }

    pub fn resize_direction(&self) -> Option<ResizeDirection> {
        match self.gesture {
            Gesture::Resizing { direction } => Some(direction),
            _ => None,
        }
    }

    pub fn begin_drag(&mut self, gate: &EditModeGate, pointer: Point, bounds: Bounds) -> bool {
        if !self.can_begin(gate) {
            return false;
        }
        let offset = pointer.offset_from(bounds.top_left());
        tracing::debug!(x = offset.x, y = offset.y, "drag started");
        self.gesture = Gesture::Dragging { offset };
        true
    }

    pub fn begin_resize(&mut self, gate: &EditModeGate, direction: ResizeDirection) -> bool {
        if !self.can_begin(gate) {
            return false;
        }
        tracing::debug!(?direction, "resize started");
        self.gesture = Gesture::Resizing { direction };
        true
    }

    fn can_begin(&self, gate: &EditModeGate) -> bool {
        if !gate.permits_gesture() {
            tracing::debug!(mode=?gate.mode(), "gesture refused by edit mode");
            return false;
        }
        matches!(self.gesture, Gesture::Idle)
    }

    /// Updates the pointer move produces. Drag only yields position updates,
    /// resize only yields size updates anchored at the live top-left corner.
    pub fn on_pointer_move(&self, pointer: Point, bounds: Bounds) -> Vec<AttributeUpdate> {
        match self.gesture {
            Gesture::Idle => Vec::new(),
            Gesture::Dragging { offset } => vec![
                AttributeUpdate::Left(pointer.x - offset.x),
                AttributeUpdate::Top(pointer.y - offset.y),
            ],
            Gesture::Resizing { direction } => {
                let mut updates = Vec::with_capacity(2);
                if direction.moves_width() {
                    updates.push(AttributeUpdate::Width(
                        self.policy.apply(pointer.x - bounds.left),
                    ));
                }
                if direction.moves_height() {
                    updates.push(AttributeUpdate::Height(
                        self.policy.apply(pointer.y - bounds.top),
                    ));
                }
                updates
            }
        }
    }

    pub fn end_gesture(&mut self) {
        if !matches!(self.gesture, Gesture::Idle) {
            tracing::debug!(gesture=?self.gesture, "gesture ended");
        }
        self.gesture = Gesture::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::edit_mode::EditModeEvent;

    fn overlay_bounds() -> Bounds {
        Bounds::new(500.0, 200.0, 150.0, 150.0)
    }

    #[test]
    fn drag_offset_is_pointer_minus_top_left() {
        let gate = EditModeGate::new();
        let mut controller = InteractionController::default();
        assert!(controller.begin_drag(&gate, Point::new(520.0, 230.0), overlay_bounds()));
        assert_eq!(controller.drag_offset(), Some(Point::new(20.0, 30.0)));

        let updates = controller.on_pointer_move(Point::new(600.0, 100.0), overlay_bounds());
        assert_eq!(
            updates,
            vec![AttributeUpdate::Left(580.0), AttributeUpdate::Top(70.0)]
        );
    }

    #[test]
    fn resize_directions_touch_only_their_extent() {
        let gate = EditModeGate::new();
        let pointer = Point::new(800.0, 420.0);
        let cases = [
            (ResizeDirection::Right, vec![AttributeUpdate::Width(300.0)]),
            (ResizeDirection::Bottom, vec![AttributeUpdate::Height(220.0)]),
            (
                ResizeDirection::Corner,
                vec![AttributeUpdate::Width(300.0), AttributeUpdate::Height(220.0)],
            ),
        ];
        for (direction, expected) in cases {
            let mut controller = InteractionController::default();
            assert!(controller.begin_resize(&gate, direction));
            assert!(!controller.is_dragging());
            assert_eq!(controller.on_pointer_move(pointer, overlay_bounds()), expected);
        }
    }

    #[test]
    fn clamp_policy_keeps_extent_positive() {
        let gate = EditModeGate::new();
        let mut controller = InteractionController::new(ResizePolicy::Clamp { min_size: 1.0 });
        controller.begin_resize(&gate, ResizeDirection::Corner);
        let updates = controller.on_pointer_move(Point::new(450.0, 150.0), overlay_bounds());
        assert_eq!(
            updates,
            vec![AttributeUpdate::Width(1.0), AttributeUpdate::Height(1.0)]
        );
    }

    #[test]
    fn flip_policy_keeps_raw_negative_extent() {
        let gate = EditModeGate::new();
        let mut controller = InteractionController::new(ResizePolicy::Flip);
        controller.begin_resize(&gate, ResizeDirection::Right);
        let updates = controller.on_pointer_move(Point::new(450.0, 150.0), overlay_bounds());
        assert_eq!(updates, vec![AttributeUpdate::Width(-50.0)]);
    }

    #[test]
    fn idle_move_is_a_no_op_and_end_is_idempotent() {
        let mut controller = InteractionController::default();
        assert!(controller
            .on_pointer_move(Point::new(1.0, 1.0), overlay_bounds())
            .is_empty());
        controller.end_gesture();
        controller.end_gesture();
        assert_eq!(controller.gesture(), Gesture::Idle);
    }

    #[test]
    fn second_begin_during_gesture_is_refused() {
        let gate = EditModeGate::new();
        let mut controller = InteractionController::default();
        assert!(controller.begin_resize(&gate, ResizeDirection::Bottom));
        assert!(!controller.begin_drag(&gate, Point::new(510.0, 210.0), overlay_bounds()));
        assert_eq!(controller.resize_direction(), Some(ResizeDirection::Bottom));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn gestures_are_refused_while_video_plays_or_text_is_edited() {
        let mut gate = EditModeGate::new();
        let mut controller = InteractionController::default();

        gate.handle(EditModeEvent::TextClick);
        assert!(!controller.begin_drag(&gate, Point::new(510.0, 210.0), overlay_bounds()));

        gate.handle(EditModeEvent::VideoPlay);
        assert!(!controller.begin_resize(&gate, ResizeDirection::Corner));
        assert_eq!(controller.gesture(), Gesture::Idle);
    }

    #[test]
    fn hit_test_prefers_handles_over_body() {
        let bounds = overlay_bounds();
        assert_eq!(
            hit_test(bounds, Point::new(645.0, 345.0), DEFAULT_HANDLE_SIZE),
            Some(HitTarget::Handle(ResizeDirection::Corner))
        );
        assert_eq!(
            hit_test(bounds, Point::new(645.0, 280.0), DEFAULT_HANDLE_SIZE),
            Some(HitTarget::Handle(ResizeDirection::Right))
        );
        assert_eq!(
            hit_test(bounds, Point::new(580.0, 345.0), DEFAULT_HANDLE_SIZE),
            Some(HitTarget::Handle(ResizeDirection::Bottom))
        );
        assert_eq!(
            hit_test(bounds, Point::new(510.0, 210.0), DEFAULT_HANDLE_SIZE),
            Some(HitTarget::Body)
        );
        assert_eq!(hit_test(bounds, Point::new(10.0, 10.0), DEFAULT_HANDLE_SIZE), None);
    }
}
