pub mod edit_mode;
pub mod interaction;
pub mod model;
pub mod session;
pub mod update;
pub mod view;

pub use edit_mode::{EditMode, EditModeEvent, EditModeGate};
pub use interaction::{HitTarget, InteractionController, ResizeDirection, ResizePolicy};
pub use model::{Bounds, FontFamily, FontWeight, HexColor, OverlayAttributes, OverlayDefaults, Point};
pub use session::{EditKey, OverlaySession, SessionEvent, SessionOptions};
pub use update::{AttributeField, AttributeUpdate, UpdateError};
pub use view::{CursorHint, OverlayView};
