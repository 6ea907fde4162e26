use buildsite::animation::{
    AnimationBundle, AnimationDocument, AnimationError, AnimationSlot, BundleLoader, FrameLibrary,
    LibraryLoader, LibrarySource,
};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;
use tokio_test::assert_ok;

const TIMEOUT: Duration = Duration::from_secs(2);

fn document_json(fps: u32, frames: &[&[&str]]) -> String {
    let frames: Vec<Vec<String>> = frames
        .iter()
        .map(|frame| frame.iter().map(|line| line.to_string()).collect())
        .collect();
    serde_json::to_string(&AnimationDocument::new(fps, frames)).unwrap()
}

#[tokio::test]
async fn test_directory_source_keys_documents_by_file_stem() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("crane.json"), document_json(4, &[&["/\\"], &["\\/"]])).unwrap();
    fs::write(dir.path().join("dots.json"), document_json(12, &[&["."], &[".."]])).unwrap();
    fs::write(dir.path().join("README.txt"), "not an animation").unwrap();

    let loader = BundleLoader::new(LibrarySource::Directory(dir.path().to_path_buf()), TIMEOUT);
    let bundle = assert_ok!(loader.fetch_bundle().await);

    assert_eq!(bundle.len(), 2);
    assert_eq!(bundle.assets().collect::<Vec<_>>(), vec!["crane", "dots"]);
    assert_eq!(bundle.get("dots").unwrap().fps, 12);
}

#[tokio::test]
async fn test_empty_directory_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let loader = BundleLoader::new(LibrarySource::Directory(dir.path().to_path_buf()), TIMEOUT);

    assert!(matches!(
        loader.load().await,
        Err(AnimationError::Unavailable(_))
    ));
}

#[tokio::test]
async fn test_bundle_file_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bundle.json");

    let mut bundle = AnimationBundle::default();
    bundle.insert(
        "blink",
        AnimationDocument::new(2, vec![vec!["o".to_string()], vec!["-".to_string()]]),
    );
    fs::write(&path, serde_json::to_string(&bundle).unwrap()).unwrap();

    let source: LibrarySource = path.to_str().unwrap().parse().unwrap();
    assert_eq!(source, LibrarySource::BundleFile(path.clone()));

    let loader = BundleLoader::new(source, TIMEOUT);
    assert_eq!(loader.fetch_bundle().await.unwrap(), bundle);
    assert_ok!(loader.load().await);
}

#[tokio::test]
async fn test_bundle_without_version_defaults_to_one() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bundle.json");
    fs::write(
        &path,
        r#"{"animations": {"dot": {"fps": 1, "frames": [["."]]}}}"#,
    )
    .unwrap();

    let loader = BundleLoader::new(LibrarySource::BundleFile(path), TIMEOUT);
    let bundle = loader.fetch_bundle().await.unwrap();
    assert_eq!(bundle.version, 1);
    assert_eq!(bundle.len(), 1);
}

#[tokio::test]
async fn test_broken_sources_fail_to_load() {
    let dir = TempDir::new().unwrap();

    let missing = BundleLoader::new(
        LibrarySource::BundleFile(dir.path().join("missing.json")),
        TIMEOUT,
    );
    assert!(matches!(missing.load().await, Err(AnimationError::Io(_))));

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "{ not json").unwrap();
    let garbage = BundleLoader::new(LibrarySource::BundleFile(garbage), TIMEOUT);
    assert!(matches!(garbage.load().await, Err(AnimationError::Bundle(_))));
}

#[test]
fn test_builtin_assets_verify() {
    let library = FrameLibrary::builtin().unwrap();
    let players = library
        .verify(&[
            (AnimationSlot::Construction, "developer-building-site"),
            (AnimationSlot::Loading, "code-loading-spinner"),
            (AnimationSlot::Code, "coding-terminal"),
        ])
        .unwrap();

    assert_eq!(players.len(), 3);
    assert_eq!(players[0].frame_count(), 4);
    assert_eq!(players[1].size(), (1, 1));
    assert_eq!(players[2].frame_count(), 35);
    assert!(players.iter().all(|player| player.is_playing()));
}
