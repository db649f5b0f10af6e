#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Display,
    Editing,
    /// The host video is playing. Dominates the other two states.
    Suppressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditModeEvent {
    TextClick,
    Blur,
    CommitKey,
    VideoPlay,
    VideoPause,
}

/// Total transition function of the edit-mode machine.
pub fn next_mode(from: EditMode, event: EditModeEvent) -> EditMode {
    match (from, event) {
        (_, EditModeEvent::VideoPlay) => EditMode::Suppressed,
        (EditMode::Suppressed, EditModeEvent::VideoPause) => EditMode::Display,
        (EditMode::Suppressed, _) => EditMode::Suppressed,
        (EditMode::Display, EditModeEvent::TextClick) => EditMode::Editing,
        (EditMode::Editing, EditModeEvent::Blur | EditModeEvent::CommitKey) => EditMode::Display,
        (mode, _) => mode,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: EditMode,
    pub to: EditMode,
}

impl Transition {
    pub fn changed(self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditModeGate {
    mode: EditMode,
}

impl EditModeGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn handle(&mut self, event: EditModeEvent) -> Transition {
        let from = self.mode;
        let to = next_mode(from, event);
        if from != to {
            tracing::debug!(from=?from, to=?to, event=?event, "edit mode updated");
        }
        self.mode = to;
        Transition { from, to }
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    pub fn is_video_playing(&self) -> bool {
        self.mode == EditMode::Suppressed
    }

    /// Drag and resize may only start from the plain display state.
    pub fn permits_gesture(&self) -> bool {
        self.mode == EditMode::Display
    }

    pub fn permits_edit_entry(&self) -> bool {
        self.mode == EditMode::Display
    }

    pub fn panel_visible(&self) -> bool {
        self.mode != EditMode::Suppressed
    }
}
