use crate::video::{format_timestamp, MediaEvent, VideoPlayback};
use eframe::egui;

const SURFACE_COLOR: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);
const FRAME_COLOR: egui::Color32 = egui::Color32::from_rgb(24, 24, 27);
const SURFACE_PADDING: f32 = 24.0;

/// Play/pause button, progress and timestamp for the placeholder clip.
pub fn video_controls(ui: &mut egui::Ui, video: &mut VideoPlayback) -> Option<MediaEvent> {
    let mut event = None;
    ui.horizontal(|ui| {
        let label = if video.is_playing() { "Pause" } else { "Play" };
        if ui.button(label).clicked() {
            event = video.toggle();
        }
        ui.label(format!(
            "{} / {}",
            format_timestamp(video.position()),
            format_timestamp(video.duration())
        ));
        ui.add(egui::ProgressBar::new(video.progress()).desired_width(ui.available_width()));
    });
    event
}

pub fn paint_video_frame(
    painter: &egui::Painter,
    rect: egui::Rect,
    video: &VideoPlayback,
    label: &str,
) {
    painter.rect_filled(rect, 0.0, SURFACE_COLOR);
    let frame = rect.shrink(SURFACE_PADDING);
    if frame.width() <= 0.0 || frame.height() <= 0.0 {
        return;
    }
    painter.rect_filled(frame, 4.0, FRAME_COLOR);
    let caption = if video.is_playing() {
        format!("{label} (playing)")
    } else {
        label.to_string()
    };
    painter.text(
        frame.center(),
        egui::Align2::CENTER_CENTER,
        caption,
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(200),
    );
}
