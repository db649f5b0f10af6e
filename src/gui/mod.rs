mod canvas;
mod panel;
mod video_surface;

pub use canvas::{install_overlay_fonts, OverlayCanvas};
pub use panel::{numeric_update, render_attribute_panel, PANEL_TITLE};
pub use video_surface::{paint_video_frame, video_controls};

use crate::overlay::session::OverlaySession;
use crate::settings::Settings;
use crate::video::{MediaEvent, VideoPlayback};
use eframe::egui;

pub const APP_TITLE: &str = "Video Text Overlay";

pub struct OverlayEditorApp {
    settings: Settings,
    session: OverlaySession,
    video: VideoPlayback,
    canvas: OverlayCanvas,
}

impl OverlayEditorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        install_overlay_fonts(&cc.egui_ctx);
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: Settings) -> Self {
        let session = OverlaySession::new(&settings.overlay, settings.session_options());
        let video = VideoPlayback::new(settings.video_duration_secs);
        Self {
            settings,
            session,
            video,
            canvas: OverlayCanvas::default(),
        }
    }

    pub fn session(&self) -> &OverlaySession {
        &self.session
    }

    pub fn video(&self) -> &VideoPlayback {
        &self.video
    }

    /// Routes play/pause from the video surface into the edit-mode gate.
    pub fn dispatch_media(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::Play => self.session.video_play(),
            MediaEvent::Pause => self.session.video_pause(),
        };
    }

    pub fn toggle_playback(&mut self) {
        if let Some(event) = self.video.toggle() {
            self.dispatch_media(event);
        }
    }

    fn attribute_panel(&mut self, ctx: &egui::Context) {
        if !self.session.panel_visible() {
            return;
        }
        egui::SidePanel::right("attribute_panel")
            .resizable(false)
            .exact_width(self.settings.panel_width)
            .show(ctx, |ui| {
                let updates = render_attribute_panel(ui, self.session.attributes(), "attribute_panel");
                for update in updates {
                    self.session.apply(update);
                }
            });
    }
}

impl eframe::App for OverlayEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt);
        if let Some(event) = self.video.tick(dt) {
            self.dispatch_media(event);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(APP_TITLE);
            });
        });

        self.attribute_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(event) = video_controls(ui, &mut self.video) {
                self.dispatch_media(event);
            }
            let rect = ui.available_rect_before_wrap();
            paint_video_frame(ui.painter(), rect, &self.video, &self.settings.video_label);
            self.canvas.ui(ui, &mut self.session);
        });

        if self.video.is_playing() || self.session.is_dragging() || self.session.is_resizing() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.session.teardown();
    }
}
