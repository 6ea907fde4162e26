//! Frame-animation documents and the bundles that group them
//!
//! A document is a list of text frames played back at a fixed rate. A bundle
//! maps asset references to documents and is what an animation library
//! source ultimately yields.

use crate::animation::error::{AnimationError, AnimationResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Highest frame rate a document may ask for
pub const MAX_FPS: u32 = 60;

/// A single text animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub fps: u32,
    pub frames: Vec<Vec<String>>,
}

impl AnimationDocument {
    pub fn new(fps: u32, frames: Vec<Vec<String>>) -> Self {
        Self {
            name: None,
            fps,
            frames,
        }
    }

    /// Check that the document can be played back
    pub fn validate(&self, asset: &str) -> AnimationResult<()> {
        if self.fps == 0 {
            return Err(AnimationError::malformed(asset, "fps must be greater than zero"));
        }
        if self.fps > MAX_FPS {
            return Err(AnimationError::malformed(
                asset,
                format!("fps {} exceeds the maximum of {}", self.fps, MAX_FPS),
            ));
        }
        if self.frames.is_empty() {
            return Err(AnimationError::malformed(asset, "document has no frames"));
        }
        if let Some(index) = self.frames.iter().position(|frame| frame.is_empty()) {
            return Err(AnimationError::malformed(
                asset,
                format!("frame {} has no lines", index),
            ));
        }
        Ok(())
    }

    /// Time each frame stays on screen
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    /// Bounding box of all frames as (columns, rows)
    pub fn size(&self) -> (u16, u16) {
        let width = self
            .frames
            .iter()
            .flat_map(|frame| frame.iter())
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let height = self.frames.iter().map(Vec::len).max().unwrap_or(0);
        (clamp_u16(width), clamp_u16(height))
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn default_version() -> u32 {
    1
}

/// A set of animation documents keyed by asset reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationBundle {
    #[serde(default = "default_version")]
    pub version: u32,
    pub animations: BTreeMap<String, AnimationDocument>,
}

impl AnimationBundle {
    pub fn from_json(data: &str) -> AnimationResult<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn insert(&mut self, asset: impl Into<String>, document: AnimationDocument) {
        self.animations.insert(asset.into(), document);
    }

    pub fn get(&self, asset: &str) -> Option<&AnimationDocument> {
        self.animations.get(asset)
    }

    pub fn assets(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}
