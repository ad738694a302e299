#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackMode {
    Stopped,
    Playing,
    Paused,
}

impl PlaybackMode {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackMode::Stopped => "Stopped",
            PlaybackMode::Playing => "Playing",
            PlaybackMode::Paused => "Paused",
        }
    }
}

/// Frame-stepping state machine for one animation run.
///
/// Owns the current frame index; callers only drive it through the
/// transitions. `tick` advances one frame per call while Playing and stops on
/// the last frame, so the final rendered frame is always a valid sample.
#[derive(Clone, Copy, Debug)]
pub struct PlaybackController {
    mode: PlaybackMode,
    frame_index: usize,
    frame_count: usize,
}

impl PlaybackController {
    pub fn new(frame_count: usize) -> Self {
        Self {
            mode: PlaybackMode::Stopped,
            frame_index: 0,
            frame_count: frame_count.max(1),
        }
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index.min(self.frame_count - 1)
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn is_playing(&self) -> bool {
        self.mode == PlaybackMode::Playing
    }

    pub fn at_last_frame(&self) -> bool {
        self.frame_index() + 1 == self.frame_count
    }

    pub fn start(&mut self) {
        if matches!(self.mode, PlaybackMode::Stopped | PlaybackMode::Paused) {
            self.mode = PlaybackMode::Playing;
        }
    }

    pub fn pause(&mut self) {
        if self.mode == PlaybackMode::Playing {
            self.mode = PlaybackMode::Paused;
        }
    }

    pub fn reset(&mut self) {
        self.mode = PlaybackMode::Stopped;
        self.frame_index = 0;
    }

    pub fn tick(&mut self) {
        if self.mode != PlaybackMode::Playing {
            return;
        }
        self.frame_index += 1;
        if self.frame_index >= self.frame_count {
            self.frame_index = self.frame_count - 1;
            self.mode = PlaybackMode::Stopped;
        }
    }
}
