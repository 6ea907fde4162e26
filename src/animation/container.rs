use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three screen regions that host an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSlot {
    Construction,
    Loading,
    Code,
}

impl AnimationSlot {
    pub const ALL: [AnimationSlot; 3] = [
        AnimationSlot::Construction,
        AnimationSlot::Loading,
        AnimationSlot::Code,
    ];

    fn index(self) -> usize {
        match self {
            AnimationSlot::Construction => 0,
            AnimationSlot::Loading => 1,
            AnimationSlot::Code => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnimationSlot::Construction => "construction",
            AnimationSlot::Loading => "loading",
            AnimationSlot::Code => "code",
        }
    }
}

impl fmt::Display for AnimationSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A container as it was laid out when an animation got bound to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHandle {
    pub slot: AnimationSlot,
    pub area: Rect,
}

/// Tracks which containers the page has laid out so far
///
/// A slot only counts as mounted when it received a non-empty area; a
/// terminal too small to show a region leaves that slot absent.
#[derive(Debug, Clone, Default)]
pub struct ContainerRegistry {
    areas: [Option<Rect>; 3],
}

impl ContainerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, slot: AnimationSlot, area: Rect) {
        self.areas[slot.index()] = if area.width > 0 && area.height > 0 {
            Some(area)
        } else {
            None
        };
    }

    pub fn unmount(&mut self, slot: AnimationSlot) {
        self.areas[slot.index()] = None;
    }

    pub fn clear(&mut self) {
        self.areas = [None; 3];
    }

    pub fn get(&self, slot: AnimationSlot) -> Option<ContainerHandle> {
        self.areas[slot.index()].map(|area| ContainerHandle { slot, area })
    }

    pub fn all_mounted(&self) -> bool {
        self.areas.iter().all(Option::is_some)
    }
}
