//! Placeholder playback clock standing in for the embedded video element.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    Play,
    Pause,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoPlayback {
    playing: bool,
    position: f32,
    duration: f32,
}

impl VideoPlayback {
    pub fn new(duration_secs: f32) -> Self {
        let duration = if duration_secs.is_finite() && duration_secs > 0.0 {
            duration_secs
        } else {
            0.0
        };
        Self {
            playing: false,
            position: 0.0,
            duration,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn progress(&self) -> f32 {
        if self.duration > 0.0 {
            (self.position / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Starting at the end rewinds first.
    pub fn play(&mut self) -> Option<MediaEvent> {
        if self.playing || self.duration <= 0.0 {
            return None;
        }
        if self.position >= self.duration {
            self.position = 0.0;
        }
        self.playing = true;
        Some(MediaEvent::Play)
    }

    pub fn pause(&mut self) -> Option<MediaEvent> {
        if !self.playing {
            return None;
        }
        self.playing = false;
        Some(MediaEvent::Pause)
    }

    pub fn toggle(&mut self) -> Option<MediaEvent> {
        if self.playing {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Advances the clock; reaching the end pauses playback.
    pub fn tick(&mut self, dt_secs: f32) -> Option<MediaEvent> {
        if !self.playing || !dt_secs.is_finite() || dt_secs <= 0.0 {
            return None;
        }
        self.position = (self.position + dt_secs).min(self.duration);
        if self.position >= self.duration {
            return self.pause();
        }
        None
    }
}

pub fn format_timestamp(secs: f32) -> String {
    let total = secs.max(0.0).floor() as u32;
    format!("{}:{:02}", total / 60, total % 60)
}
