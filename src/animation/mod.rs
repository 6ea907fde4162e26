//! Decorative frame animations for the landing page
//!
//! The library (a bundle of text animations) loads in the background. Once it
//! is available the [`AnimationLoader`] binds one [`AnimationPlayer`] to each of
//! the page's three containers.

pub mod container;
pub mod document;
pub mod error;
pub mod library;
pub mod loader;
pub mod player;

pub use container::{AnimationSlot, ContainerHandle, ContainerRegistry};
pub use document::{AnimationBundle, AnimationDocument};
pub use error::{AnimationError, AnimationResult};
pub use library::{BundleLoader, FrameLibrary, LibraryLoader, LibrarySource};
pub use loader::{AnimationFactory, AnimationLoader, AnimationSpec, LoadOptions, LoaderState};
pub use player::{AnimationPlayer, PlaybackState};
