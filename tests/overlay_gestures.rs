use video_text_overlay::overlay::{
    OverlayDefaults, OverlaySession, Point, ResizePolicy, SessionEvent, SessionOptions,
};

fn session_with(policy: ResizePolicy) -> OverlaySession {
    OverlaySession::new(
        &OverlayDefaults::default(),
        SessionOptions {
            resize_policy: policy,
            ..SessionOptions::default()
        },
    )
}

fn exactly_one_gesture(session: &OverlaySession) -> bool {
    session.is_dragging() != session.is_resizing()
}

#[test]
fn drag_keeps_pointer_attached_to_the_same_overlay_point() {
    let mut session = OverlaySession::default();
    let p0 = Point::new(530.0, 260.0);
    let l0 = session.attributes().bounds().top_left();

    assert!(session.handle(SessionEvent::PointerDown(p0)));
    for (x, y) in [(540.0, 250.0), (100.0, 40.0), (-20.0, 900.0), (700.0, 300.0)] {
        session.handle(SessionEvent::PointerMove(Point::new(x, y)));
        assert!(exactly_one_gesture(&session));
        let attrs = session.attributes();
        assert_eq!(attrs.left, x - (p0.x - l0.x));
        assert_eq!(attrs.top, y - (p0.y - l0.y));
        assert_eq!(attrs.width, 150.0);
        assert_eq!(attrs.height, 150.0);
    }

    session.handle(SessionEvent::PointerUp);
    assert!(!session.is_dragging());
    assert!(!session.is_resizing());
}

#[test]
fn corner_resize_scenario_sets_size_and_keeps_position() {
    let mut session = OverlaySession::default();
    assert_eq!(session.attributes().bounds().top_left(), Point::new(500.0, 200.0));

    assert!(session.pointer_down(Point::new(645.0, 345.0)));
    assert!(session.is_resizing());
    assert!(!session.is_dragging());

    session.pointer_move(Point::new(700.0, 380.0));
    session.pointer_move(Point::new(800.0, 420.0));
    session.pointer_up();

    let attrs = session.attributes();
    assert_eq!(attrs.width, 300.0);
    assert_eq!(attrs.height, 220.0);
    assert_eq!(attrs.left, 500.0);
    assert_eq!(attrs.top, 200.0);
    assert!(!session.is_resizing());
}

#[test]
fn resize_is_recomputed_from_the_anchor_not_accumulated() {
    let mut session = OverlaySession::default();
    session.pointer_down(Point::new(645.0, 280.0));
    for _ in 0..5 {
        session.pointer_move(Point::new(760.0, 10.0));
    }
    assert_eq!(session.attributes().width, 260.0);
    assert_eq!(session.attributes().height, 150.0);
}

#[test]
fn handle_presses_never_register_as_drags() {
    for point in [
        Point::new(645.0, 345.0),
        Point::new(645.0, 280.0),
        Point::new(580.0, 345.0),
    ] {
        let mut session = OverlaySession::default();
        assert!(session.pointer_down(point));
        assert!(session.is_resizing());
        assert!(!session.is_dragging());
        session.pointer_up();
    }
}

#[test]
fn crossing_the_anchor_clamps_by_default() {
    let mut session = session_with(ResizePolicy::default());
    session.pointer_down(Point::new(645.0, 345.0));
    session.pointer_move(Point::new(400.0, 100.0));
    assert_eq!(session.attributes().width, 1.0);
    assert_eq!(session.attributes().height, 1.0);
}

#[test]
fn crossing_the_anchor_flips_under_flip_policy() {
    let mut session = session_with(ResizePolicy::Flip);
    session.pointer_down(Point::new(645.0, 345.0));
    session.pointer_move(Point::new(400.0, 100.0));
    assert_eq!(session.attributes().width, -100.0);
    assert_eq!(session.attributes().height, -100.0);
    assert_eq!(session.attributes().left, 500.0);
    assert_eq!(session.attributes().top, 200.0);
}

#[test]
fn flipped_box_resizes_again_from_its_drawn_corner() {
    let mut session = session_with(ResizePolicy::Flip);
    session.pointer_down(Point::new(645.0, 345.0));
    session.pointer_move(Point::new(400.0, 100.0));
    session.pointer_up();

    // Drawn box is 100x100 at (400, 100); its corner handle covers (490..500, 190..200).
    assert!(session.pointer_down(Point::new(495.0, 195.0)));
    assert!(session.is_resizing());
    session.pointer_move(Point::new(496.0, 196.0));

    let attrs = session.attributes();
    assert_eq!(attrs.left, 400.0);
    assert_eq!(attrs.top, 100.0);
    assert_eq!(attrs.width, 96.0);
    assert_eq!(attrs.height, 96.0);
}

#[test]
fn pointer_up_without_gesture_is_harmless() {
    let mut session = OverlaySession::default();
    let before = session.attributes().clone();
    assert!(!session.handle(SessionEvent::PointerUp));
    assert!(!session.handle(SessionEvent::PointerMove(Point::new(1.0, 1.0))));
    assert_eq!(session.attributes(), &before);
}
