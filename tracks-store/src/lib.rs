//! Keyed lookups over the track catalog consumed while parsing charts.

use serde::{Deserialize, Serialize};

/// One row of the track catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub code: String,
    pub name: String,
    pub state: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TrackStoreError {
    #[error("catalog error: {0}")]
    Catalog(#[from] serde_json::Error),
}

/// Thin abstraction over wherever the track catalog lives.
pub trait TrackRepository {
    fn find_by_code(&self, code: &str) -> Option<Track>;
    fn find_by_name(&self, name: &str) -> Option<Track>;
    fn find_by_state(&self, state: &str) -> Vec<Track>;
    fn find_all(&self) -> Vec<Track>;
}

/// Catalog held in memory, loaded from a JSON array of tracks.
#[derive(Debug)]
pub struct InMemoryTrackRepository {
    tracks: Vec<Track>,
}

impl InMemoryTrackRepository {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn from_json(catalog: &str) -> Result<Self, TrackStoreError> {
        let tracks: Vec<Track> = serde_json::from_str(catalog)?;
        Ok(Self { tracks })
    }
}

impl TrackRepository for InMemoryTrackRepository {
    fn find_by_code(&self, code: &str) -> Option<Track> {
        self.tracks.iter().find(|track| track.code == code).cloned()
    }

    fn find_by_name(&self, name: &str) -> Option<Track> {
        self.tracks.iter().find(|track| track.name == name).cloned()
    }

    fn find_by_state(&self, state: &str) -> Vec<Track> {
        self.tracks
            .iter()
            .filter(|track| track.state == state)
            .cloned()
            .collect()
    }

    fn find_all(&self) -> Vec<Track> {
        self.tracks.clone()
    }
}

/// Answers track lookups through the configured repository.
pub struct TrackService<R> {
    repository: R,
}

impl<R: TrackRepository> TrackService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn track(&self, track_code: &str) -> Option<Track> {
        self.repository.find_by_code(track_code)
    }

    pub fn track_with_name(&self, track_name: &str) -> Option<Track> {
        self.repository.find_by_name(track_name)
    }

    pub fn tracks_with_state(&self, state: &str) -> Vec<Track> {
        self.repository.find_by_state(state)
    }

    pub fn tracks(&self) -> Vec<Track> {
        self.repository.find_all()
    }
}
