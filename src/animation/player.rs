use crate::animation::container::ContainerHandle;
use crate::animation::document::AnimationDocument;
use std::time::Duration;

/// Animation playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
    Finished,
}

/// A running animation bound to one container
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    container: ContainerHandle,
    asset: String,
    frames: Vec<Vec<String>>,
    frame_duration: Duration,
    size: (u16, u16),
    looping: bool,
    state: PlaybackState,
    elapsed: Duration,
    current_frame: usize,
}

impl AnimationPlayer {
    /// Create a player for a document that has already been validated
    pub fn new(
        container: ContainerHandle,
        asset: impl Into<String>,
        document: &AnimationDocument,
        looping: bool,
        autoplay: bool,
    ) -> Self {
        Self {
            container,
            asset: asset.into(),
            frames: document.frames.clone(),
            frame_duration: document.frame_duration(),
            size: document.size(),
            looping,
            state: if autoplay {
                PlaybackState::Playing
            } else {
                PlaybackState::Paused
            },
            elapsed: Duration::ZERO,
            current_frame: 0,
        }
    }

    pub fn container(&self) -> &ContainerHandle {
        &self.container
    }

    pub fn asset(&self) -> &str {
        &self.asset
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Bounding box of the animation as (columns, rows)
    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn frame_lines(&self) -> &[String] {
        self.frames
            .get(self.current_frame)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn play(&mut self) {
        if self.state == PlaybackState::Finished {
            self.elapsed = Duration::ZERO;
            self.current_frame = 0;
        }
        self.state = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Move playback forward by a wall-clock delta
    pub fn advance(&mut self, delta: Duration) {
        if self.state != PlaybackState::Playing || self.frames.is_empty() {
            return;
        }

        self.elapsed += delta;
        let step = self.frame_duration.as_nanos().max(1);
        let index = (self.elapsed.as_nanos() / step) as usize;
        let count = self.frames.len();

        if self.looping {
            self.current_frame = index % count;
            // Keep the accumulator bounded for long-running loops.
            let cycle = step * count as u128;
            if self.elapsed.as_nanos() >= cycle {
                let remainder = self.elapsed.as_nanos() % cycle;
                self.elapsed = Duration::from_nanos(remainder as u64);
            }
        } else if index >= count - 1 {
            self.current_frame = count - 1;
            self.state = PlaybackState::Finished;
        } else {
            self.current_frame = index;
        }
    }
}
