//! Prioritized sound-source resolution with graceful fallback.
//!
//! For each cue an ordered candidate list is tried: bundled files first, then
//! (when a remote pack is configured) a probed download. The first acceptable
//! candidate wins; if everything fails the cue resolves to the placeholder
//! chime, and if even that file is missing the cue simply stays silent.
//! Resolution runs once at startup and never gates gameplay.
use std::{
    collections::HashMap,
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use bevy::prelude::*;
use reqwest::blocking::Client;

use crate::{
    audio::events::SfxCue,
    npc::components::Species,
};

const REMOTE_BASE_ENV: &str = "RALPH_SFX_BASE_URL";
const PROBE_TIMEOUT: Duration = Duration::from_secs(4);
const CACHE_SUBDIR: &str = "sounds/cache";
const PLACEHOLDER_CHIME: &str = "sounds/chime.ogg";

const ALL_SPECIES: [Species; 6] = [
    Species::Cow,
    Species::Manatee,
    Species::Pig,
    Species::Unicorn,
    Species::Zebra,
    Species::Donkey,
];

/// Resolved asset paths per cue, relative to the assets root. `None` means
/// the cue stays silent.
#[derive(Resource, Debug, Default)]
pub struct SfxManifest {
    sources: HashMap<SfxCue, String>,
}

impl SfxManifest {
    pub fn source(&self, cue: SfxCue) -> Option<&str> {
        self.sources.get(&cue).map(String::as_str)
    }

    fn insert(&mut self, cue: SfxCue, path: String) {
        self.sources.insert(cue, path);
    }
}

/// A response is acceptable unless it looks like an HTML page; servers that
/// rewrite unknown paths to an app shell answer 200 with `text/html`.
pub fn acceptable_content_type(content_type: Option<&str>) -> bool {
    match content_type {
        Some(value) => !value.to_ascii_lowercase().contains("text/html"),
        None => true,
    }
}

/// Ordered candidate file names for an approval cue.
pub fn approval_candidates(species: Species) -> [String; 2] {
    let name = species.label();
    [
        format!("approve-{name}.ogg"),
        format!("{name}-approve.ogg"),
    ]
}

/// Builds the manifest by probing candidates for every cue.
pub fn resolve_manifest(assets_root: &Path) -> SfxManifest {
    let remote = RemotePack::from_env();
    let mut manifest = SfxManifest::default();

    for species in ALL_SPECIES {
        let candidates = approval_candidates(species);
        let resolved = resolve_cue(assets_root, &candidates, remote.as_ref())
            .or_else(|| placeholder(assets_root));
        match resolved {
            Some(path) => manifest.insert(SfxCue::Approval(species), path),
            None => debug!("No sound source for {} approval; cue stays silent", species.label()),
        }
    }

    let bark = resolve_cue(assets_root, &["bark.ogg".to_string()], remote.as_ref())
        .or_else(|| placeholder(assets_root));
    match bark {
        Some(path) => manifest.insert(SfxCue::Bark, path),
        None => debug!("No bark sound source; cue stays silent"),
    }

    manifest
}

fn resolve_cue(
    assets_root: &Path,
    candidates: &[String],
    remote: Option<&RemotePack>,
) -> Option<String> {
    for candidate in candidates {
        let relative = format!("sounds/{candidate}");
        if assets_root.join(&relative).is_file() {
            return Some(relative);
        }
    }
    let remote = remote?;
    for candidate in candidates {
        if let Some(path) = remote.fetch_into_cache(assets_root, candidate) {
            return Some(path);
        }
    }
    None
}

fn placeholder(assets_root: &Path) -> Option<String> {
    assets_root
        .join(PLACEHOLDER_CHIME)
        .is_file()
        .then(|| PLACEHOLDER_CHIME.to_string())
}

/// Optional remote sound pack, configured via `RALPH_SFX_BASE_URL`. Missing
/// configuration or a client that fails to build both mean "local only".
struct RemotePack {
    base_url: String,
    client: Client,
}

impl RemotePack {
    fn from_env() -> Option<Self> {
        let base_url = env::var(REMOTE_BASE_ENV).ok()?;
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return None;
        }
        match Client::builder().timeout(PROBE_TIMEOUT).build() {
            Ok(client) => Some(Self { base_url, client }),
            Err(err) => {
                warn!(
                    "Failed to build HTTP client for the sound pack ({}); using local sounds only.",
                    err
                );
                None
            }
        }
    }

    /// Downloads one candidate into the asset cache, returning its relative
    /// path, or `None` when the probe rejects or errors.
    fn fetch_into_cache(&self, assets_root: &Path, candidate: &str) -> Option<String> {
        let url = format!("{}/{}", self.base_url, candidate);
        let response = match self.client.get(&url).send() {
            Ok(response) => response,
            Err(err) => {
                debug!("Sound probe failed for {} ({})", url, err);
                return None;
            }
        };
        if !response.status().is_success() {
            return None;
        }
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        if !acceptable_content_type(content_type.as_deref()) {
            debug!("Rejected {} (content type {:?})", url, content_type);
            return None;
        }
        let bytes = match response.bytes() {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!("Failed to read {} ({})", url, err);
                return None;
            }
        };

        let cache_dir = assets_root.join(CACHE_SUBDIR);
        if let Err(err) = fs::create_dir_all(&cache_dir) {
            warn!("Failed to create {} ({})", cache_dir.display(), err);
            return None;
        }
        let out: PathBuf = cache_dir.join(candidate);
        if let Err(err) = fs::write(&out, &bytes) {
            warn!("Failed to write {} ({})", out.display(), err);
            return None;
        }
        info!("Fetched sound {} into cache", candidate);
        Some(format!("{CACHE_SUBDIR}/{candidate}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_content_types_are_rejected() {
        assert!(!acceptable_content_type(Some("text/html")));
        assert!(!acceptable_content_type(Some("Text/HTML; charset=utf-8")));
    }

    #[test]
    fn binary_and_missing_content_types_are_accepted() {
        assert!(acceptable_content_type(Some("audio/ogg")));
        assert!(acceptable_content_type(Some("application/octet-stream")));
        assert!(acceptable_content_type(None));
    }

    #[test]
    fn approval_candidates_try_both_naming_schemes() {
        let candidates = approval_candidates(Species::Cow);
        assert_eq!(candidates[0], "approve-cow.ogg");
        assert_eq!(candidates[1], "cow-approve.ogg");
    }

    #[test]
    fn missing_assets_resolve_to_silence_not_error() {
        let manifest = resolve_manifest(Path::new("/nonexistent-assets-root"));
        assert!(manifest.source(SfxCue::Bark).is_none());
        assert!(manifest.source(SfxCue::Approval(Species::Pig)).is_none());
    }
}
