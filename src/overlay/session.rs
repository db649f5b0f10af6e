use crate::overlay::edit_mode::{EditMode, EditModeEvent, EditModeGate};
use crate::overlay::interaction::{
    hit_test, HitTarget, InteractionController, ResizePolicy, DEFAULT_HANDLE_SIZE,
};
use crate::overlay::model::{OverlayAttributes, OverlayDefaults, Point};
use crate::overlay::update::{AttributeField, AttributeUpdate, UpdateError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    pub resize_policy: ResizePolicy,
    pub handle_size: f32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            resize_policy: ResizePolicy::default(),
            handle_size: DEFAULT_HANDLE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Other,
}

/// Input the host feeds into a session, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    TextClick,
    TextBlur,
    TextInput(String),
    KeyPress(EditKey),
    VideoPlay,
    VideoPause,
    PanelEdit(AttributeUpdate),
}

/// One overlay editing session: the attribute record, the gesture in
/// flight and the edit-mode gate. Every attribute write goes through
/// [`OverlaySession::apply`].
#[derive(Debug, Clone)]
pub struct OverlaySession {
    attributes: OverlayAttributes,
    controller: InteractionController,
    gate: EditModeGate,
    handle_size: f32,
}

impl OverlaySession {
    pub fn new(defaults: &OverlayDefaults, options: SessionOptions) -> Self {
        let attributes = OverlayAttributes::from_defaults(defaults);
        tracing::info!(id = %attributes.id(), policy = ?options.resize_policy, "overlay session started");
        Self {
            attributes,
            controller: InteractionController::new(options.resize_policy),
            gate: EditModeGate::new(),
            handle_size: options.handle_size,
        }
    }

    pub fn attributes(&self) -> &OverlayAttributes {
        &self.attributes
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn gate(&self) -> &EditModeGate {
        &self.gate
    }

    pub fn mode(&self) -> EditMode {
        self.gate.mode()
    }

    pub fn handle_size(&self) -> f32 {
        self.handle_size
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    pub fn is_resizing(&self) -> bool {
        self.controller.is_resizing()
    }

    pub fn is_editing(&self) -> bool {
        self.gate.is_editing()
    }

    pub fn is_video_playing(&self) -> bool {
        self.gate.is_video_playing()
    }

    pub fn panel_visible(&self) -> bool {
        self.gate.panel_visible()
    }

    pub fn apply(&mut self, update: AttributeUpdate) -> bool {
        let field = update.field();
        let changed = update.apply_to(&mut self.attributes);
        if changed && !field.is_numeric() {
            tracing::debug!(%field, "overlay attribute updated");
        }
        changed
    }

    /// Textual variant of [`OverlaySession::apply`] for hosts that only have
    /// a field name and raw input.
    pub fn set_attribute(&mut self, name: &str, raw: &str) -> Result<bool, UpdateError> {
        let parsed = name
            .parse::<AttributeField>()
            .and_then(|field| AttributeUpdate::parse(field, raw));
        match parsed {
            Ok(update) => Ok(self.apply(update)),
            Err(err) => {
                tracing::warn!(%err, "rejected overlay attribute update");
                Err(err)
            }
        }
    }

    /// Returns whether a drag or resize started.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        if self.gate.is_video_playing() {
            return false;
        }
        let hit = hit_test(self.attributes.bounds(), point, self.handle_size);
        if self.gate.is_editing() {
            // The text input owns presses on the overlay; elsewhere it loses focus.
            if hit.is_none() {
                self.text_blur();
            }
            return false;
        }
        if hit.is_some() {
            self.normalize_bounds();
        }
        match hit {
            Some(HitTarget::Handle(direction)) => {
                self.controller.begin_resize(&self.gate, direction)
            }
            Some(HitTarget::Body) => {
                self.controller
                    .begin_drag(&self.gate, point, self.attributes.bounds())
            }
            None => false,
        }
    }

    /// A flipped box (negative width or height) is rewritten with its visual
    /// top-left as the anchor, so a new gesture starts from what is drawn.
    fn normalize_bounds(&mut self) {
        let raw = self.attributes.bounds();
        let visual = raw.normalized();
        if raw == visual {
            return;
        }
        tracing::debug!(?raw, ?visual, "normalizing flipped overlay bounds");
        self.apply(AttributeUpdate::Left(visual.left));
        self.apply(AttributeUpdate::Top(visual.top));
        self.apply(AttributeUpdate::Width(visual.width));
        self.apply(AttributeUpdate::Height(visual.height));
    }

    pub fn pointer_move(&mut self, point: Point) -> bool {
        let updates = self
            .controller
            .on_pointer_move(point, self.attributes.bounds());
        let mut changed = false;
        for update in updates {
            changed |= self.apply(update);
        }
        changed
    }

    pub fn pointer_up(&mut self) {
        self.controller.end_gesture();
    }

    pub fn text_click(&mut self) -> bool {
        if self.controller.is_dragging() || self.controller.is_resizing() {
            return false;
        }
        if !self.gate.permits_edit_entry() {
            return false;
        }
        self.gate.handle(EditModeEvent::TextClick).changed()
    }

    pub fn text_blur(&mut self) -> bool {
        self.gate.handle(EditModeEvent::Blur).changed()
    }

    /// In-canvas text edits. Only the live edit input produces these.
    pub fn text_input(&mut self, text: String) -> bool {
        if !self.gate.is_editing() {
            return false;
        }
        self.apply(AttributeUpdate::Text(text))
    }

    pub fn key_press(&mut self, key: EditKey) -> bool {
        match key {
            EditKey::Enter => self.gate.handle(EditModeEvent::CommitKey).changed(),
            EditKey::Other => false,
        }
    }

    pub fn video_play(&mut self) -> bool {
        self.controller.end_gesture();
        let transition = self.gate.handle(EditModeEvent::VideoPlay);
        if transition.changed() {
            tracing::info!("video playing; overlay editing suppressed");
        }
        transition.changed()
    }

    pub fn video_pause(&mut self) -> bool {
        let transition = self.gate.handle(EditModeEvent::VideoPause);
        if transition.changed() {
            tracing::info!("video paused; overlay editing enabled");
        }
        transition.changed()
    }

    pub fn handle(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::PointerDown(point) => self.pointer_down(point),
            SessionEvent::PointerMove(point) => self.pointer_move(point),
            SessionEvent::PointerUp => {
                let active = self.is_dragging() || self.is_resizing();
                self.pointer_up();
                active
            }
            SessionEvent::TextClick => self.text_click(),
            SessionEvent::TextBlur => self.text_blur(),
            SessionEvent::TextInput(text) => self.text_input(text),
            SessionEvent::KeyPress(key) => self.key_press(key),
            SessionEvent::VideoPlay => self.video_play(),
            SessionEvent::VideoPause => self.video_pause(),
            SessionEvent::PanelEdit(update) => self.apply(update),
        }
    }

    /// Drops any gesture or live edit in flight. The attribute record is kept.
    pub fn teardown(&mut self) {
        self.controller.end_gesture();
        self.gate.handle(EditModeEvent::Blur);
        tracing::info!(id = %self.attributes.id(), "overlay session finished");
    }

    /// Ends the session and hands back the final attribute record.
    pub fn finish(mut self) -> OverlayAttributes {
        self.teardown();
        self.attributes
    }
}

impl Default for OverlaySession {
    fn default() -> Self {
        Self::new(&OverlayDefaults::default(), SessionOptions::default())
    }
}
