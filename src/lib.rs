pub mod gui;
pub mod logging;
pub mod overlay;
pub mod settings;
pub mod video;
