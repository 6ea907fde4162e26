//! One-shot creation of the page's animation players
//!
//! The loader waits for the animation library to arrive, then binds one player
//! to each of the three containers exactly once. Its lifecycle is an explicit
//! state machine:
//!
//! ```text
//! WaitingForScript --library_loaded--> Initializing
//! Initializing --reconcile (ok)------> Ready
//! Initializing --reconcile (error)---> Failed
//! Failed --library_loaded------------> Initializing
//! ```

use crate::animation::container::{AnimationSlot, ContainerHandle, ContainerRegistry};
use crate::animation::error::{AnimationError, AnimationResult};
use crate::animation::player::AnimationPlayer;
use std::sync::Arc;
use std::time::Duration;

/// Parameters for creating one animation instance
#[derive(Debug, Clone)]
pub struct LoadOptions<'a> {
    pub container: ContainerHandle,
    pub asset: &'a str,
    pub looping: bool,
    pub autoplay: bool,
}

/// Capability that turns an asset reference into a running player
///
/// Handed to the loader once the animation library is available.
pub trait AnimationFactory: Send + Sync {
    fn load_animation(&self, options: &LoadOptions<'_>) -> AnimationResult<AnimationPlayer>;
}

/// Which asset goes into which container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSpec {
    pub slot: AnimationSlot,
    pub asset: String,
    pub looping: bool,
    pub autoplay: bool,
}

impl AnimationSpec {
    pub fn new(slot: AnimationSlot, asset: impl Into<String>) -> Self {
        Self {
            slot,
            asset: asset.into(),
            looping: true,
            autoplay: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderState {
    WaitingForScript,
    Initializing,
    Ready,
    Failed { reason: String },
}

pub struct AnimationLoader {
    specs: [AnimationSpec; 3],
    state: LoaderState,
    factory: Option<Arc<dyn AnimationFactory>>,
    players: Vec<AnimationPlayer>,
}

impl AnimationLoader {
    pub fn new(specs: [AnimationSpec; 3]) -> Self {
        Self {
            specs,
            state: LoaderState::WaitingForScript,
            factory: None,
            players: Vec::new(),
        }
    }

    pub fn state(&self) -> &LoaderState {
        &self.state
    }

    /// Whether the animation library has become available
    pub fn script_loaded(&self) -> bool {
        self.state != LoaderState::WaitingForScript
    }

    /// Whether all three players exist; never reverts once true
    pub fn animations_ready(&self) -> bool {
        self.state == LoaderState::Ready
    }

    pub fn players(&self) -> &[AnimationPlayer] {
        &self.players
    }

    pub fn player(&self, slot: AnimationSlot) -> Option<&AnimationPlayer> {
        self.players.iter().find(|player| player.container().slot == slot)
    }

    pub fn advance(&mut self, delta: Duration) {
        for player in &mut self.players {
            player.advance(delta);
        }
    }

    /// The library finished loading
    pub fn library_loaded(&mut self, factory: Arc<dyn AnimationFactory>) {
        match self.state {
            LoaderState::Ready => {
                tracing::debug!("Animation library reported loaded again; players already exist");
            }
            LoaderState::WaitingForScript | LoaderState::Initializing | LoaderState::Failed { .. } => {
                tracing::debug!("Animation library loaded, waiting for containers");
                self.factory = Some(factory);
                self.state = LoaderState::Initializing;
            }
        }
    }

    /// The library could not be loaded; the page carries on without animations
    pub fn library_failed(&mut self, error: &AnimationError) {
        tracing::warn!("Animation library failed to load, continuing without animations: {}", error);
    }

    /// Re-evaluate the trigger conditions and create the players if they hold
    ///
    /// Returns true when this call created the players.
    pub fn reconcile(&mut self, containers: &ContainerRegistry) -> bool {
        if self.state != LoaderState::Initializing || !containers.all_mounted() {
            return false;
        }
        let Some(factory) = self.factory.clone() else {
            return false;
        };

        match self.create_players(factory.as_ref(), containers) {
            Ok(players) => {
                tracing::info!("Created {} animation players", players.len());
                self.players = players;
                self.state = LoaderState::Ready;
                true
            }
            Err(error) => {
                tracing::error!("Error initializing animations: {}", error);
                self.players.clear();
                self.state = LoaderState::Failed {
                    reason: error.to_string(),
                };
                false
            }
        }
    }

    fn create_players(
        &self,
        factory: &dyn AnimationFactory,
        containers: &ContainerRegistry,
    ) -> AnimationResult<Vec<AnimationPlayer>> {
        self.specs
            .iter()
            .map(|spec| {
                let container = containers.get(spec.slot).ok_or_else(|| {
                    AnimationError::Unavailable(format!("{} container is not mounted", spec.slot))
                })?;
                factory.load_animation(&LoadOptions {
                    container,
                    asset: &spec.asset,
                    looping: spec.looping,
                    autoplay: spec.autoplay,
                })
            })
            .collect()
    }
}
