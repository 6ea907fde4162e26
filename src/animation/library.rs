//! Animation library sources
//!
//! Loading the library is the asynchronous step the page waits on before any
//! animation can be created. A library is a bundle of frame documents that
//! comes from the binary itself, the filesystem, or a remote URL.

use crate::animation::container::{AnimationSlot, ContainerHandle};
use crate::animation::document::{AnimationBundle, AnimationDocument};
use crate::animation::error::{AnimationError, AnimationResult};
use crate::animation::loader::{AnimationFactory, LoadOptions};
use crate::animation::player::AnimationPlayer;
use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// The bundle shipped inside the binary
pub const BUILTIN_BUNDLE: &str = include_str!("../../assets/animations.json");

/// Where the animation library comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibrarySource {
    Builtin,
    BundleFile(PathBuf),
    Directory(PathBuf),
    Remote(Url),
}

impl FromStr for LibrarySource {
    type Err = AnimationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return Err(AnimationError::InvalidSource {
                location: value.to_string(),
                reason: "library source is empty".to_string(),
            });
        }
        if value.eq_ignore_ascii_case("builtin") {
            return Ok(Self::Builtin);
        }
        if value.starts_with("http://") || value.starts_with("https://") {
            let url = Url::parse(value).map_err(|e| AnimationError::InvalidSource {
                location: value.to_string(),
                reason: e.to_string(),
            })?;
            return Ok(Self::Remote(url));
        }

        let path = PathBuf::from(value);
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Ok(Self::BundleFile(path))
        } else {
            Ok(Self::Directory(path))
        }
    }
}

impl fmt::Display for LibrarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibrarySource::Builtin => f.write_str("builtin"),
            LibrarySource::BundleFile(path) | LibrarySource::Directory(path) => {
                write!(f, "{}", path.display())
            }
            LibrarySource::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// Asynchronously makes the animation library available
#[async_trait]
pub trait LibraryLoader: Send + Sync {
    /// Human readable origin, used in logs
    fn describe(&self) -> String;

    async fn load(&self) -> AnimationResult<Arc<dyn AnimationFactory>>;
}

/// Loads a [`FrameLibrary`] from a [`LibrarySource`]
#[derive(Debug, Clone)]
pub struct BundleLoader {
    source: LibrarySource,
    request_timeout: Duration,
}

impl BundleLoader {
    pub fn new(source: LibrarySource, request_timeout: Duration) -> Self {
        Self {
            source,
            request_timeout,
        }
    }

    pub async fn fetch_bundle(&self) -> AnimationResult<AnimationBundle> {
        match &self.source {
            LibrarySource::Builtin => AnimationBundle::from_json(BUILTIN_BUNDLE),
            LibrarySource::BundleFile(path) => {
                let content = tokio::fs::read_to_string(path).await?;
                AnimationBundle::from_json(&content)
            }
            LibrarySource::Directory(path) => Self::read_directory(path).await,
            LibrarySource::Remote(url) => {
                let client = reqwest::Client::builder()
                    .timeout(self.request_timeout)
                    .build()?;
                let bundle = client
                    .get(url.clone())
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<AnimationBundle>()
                    .await?;
                Ok(bundle)
            }
        }
    }

    /// Every `*.json` file in the directory is one document keyed by its file stem
    async fn read_directory(path: &Path) -> AnimationResult<AnimationBundle> {
        let mut bundle = AnimationBundle::default();
        let mut entries = tokio::fs::read_dir(path).await?;

        while let Some(entry) = entries.next_entry().await? {
            let file = entry.path();
            let is_json = file
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false);
            if !is_json {
                continue;
            }
            let Some(stem) = file.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = tokio::fs::read_to_string(&file).await?;
            let document: AnimationDocument = serde_json::from_str(&content)?;
            bundle.insert(stem, document);
        }

        if bundle.is_empty() {
            return Err(AnimationError::Unavailable(format!(
                "no animation documents in {}",
                path.display()
            )));
        }
        Ok(bundle)
    }
}

#[async_trait]
impl LibraryLoader for BundleLoader {
    fn describe(&self) -> String {
        self.source.to_string()
    }

    async fn load(&self) -> AnimationResult<Arc<dyn AnimationFactory>> {
        let bundle = self.fetch_bundle().await?;
        tracing::info!(
            "Loaded animation library from {} ({} animations)",
            self.source,
            bundle.len()
        );
        Ok(Arc::new(FrameLibrary::new(bundle)))
    }
}

/// A loaded animation library
#[derive(Debug, Clone)]
pub struct FrameLibrary {
    bundle: AnimationBundle,
}

impl FrameLibrary {
    pub fn new(bundle: AnimationBundle) -> Self {
        Self { bundle }
    }

    pub fn builtin() -> AnimationResult<Self> {
        Ok(Self::new(AnimationBundle::from_json(BUILTIN_BUNDLE)?))
    }

    pub fn bundle(&self) -> &AnimationBundle {
        &self.bundle
    }

    /// Check that every asset can be instantiated without a live page
    pub fn verify(&self, assets: &[(AnimationSlot, &str)]) -> AnimationResult<Vec<AnimationPlayer>> {
        assets
            .iter()
            .map(|(slot, asset)| {
                self.load_animation(&LoadOptions {
                    container: ContainerHandle {
                        slot: *slot,
                        area: Default::default(),
                    },
                    asset: *asset,
                    looping: true,
                    autoplay: true,
                })
            })
            .collect()
    }
}

impl AnimationFactory for FrameLibrary {
    fn load_animation(&self, options: &LoadOptions<'_>) -> AnimationResult<AnimationPlayer> {
        let document = self
            .bundle
            .get(options.asset)
            .ok_or_else(|| AnimationError::AssetNotFound(options.asset.to_string()))?;
        document.validate(options.asset)?;

        tracing::debug!(
            "Binding animation '{}' to the {} container",
            options.asset,
            options.container.slot
        );
        Ok(AnimationPlayer::new(
            options.container,
            options.asset,
            document,
            options.looping,
            options.autoplay,
        ))
    }
}
