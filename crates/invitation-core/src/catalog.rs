//! Track catalog and card content.
//!
//! Both are static for the lifetime of a card: the catalog is an ordered,
//! non-empty list of tracks and [`EventDetails`] holds every piece of text
//! shown on the invitation.

use serde::{Deserialize, Serialize};

use crate::error::{InvitationError, InvitationResult};

/// A single entry in the track catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: u32,
    pub name: String,
    pub artist: String,
    /// Path or URL handed to the media element when this track is selected
    pub source: String,
}

impl Track {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        artist: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            artist: artist.into(),
            source: source.into(),
        }
    }
}

/// The tracks shipped with the default invitation.
pub fn default_tracks() -> Vec<Track> {
    vec![Track::new(1, "夕阳无限好", "Eason Chan", "songs/sun.mp3")]
}

/// Ordered, non-empty sequence of tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackCatalog {
    tracks: Vec<Track>,
}

impl TrackCatalog {
    /// Build a catalog, rejecting an empty track list.
    pub fn new(tracks: Vec<Track>) -> InvitationResult<Self> {
        if tracks.is_empty() {
            return Err(InvitationError::EmptyCatalog);
        }
        Ok(Self { tracks })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Index that follows `index`, wrapping at the end of the catalog.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.tracks.len()
    }
}

impl Default for TrackCatalog {
    fn default() -> Self {
        Self {
            tracks: default_tracks(),
        }
    }
}

/// All text shown on the invitation card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDetails {
    pub artist: String,
    pub title: String,
    pub tour: String,
    pub city: String,
    pub city_subtitle: String,
    pub date: String,
    pub venue: String,
    pub start_time: String,
    pub guest_heading: String,
    pub guest_text: String,
    pub notice: String,
    pub accept_label: String,
    pub accepted_label: String,
    pub track_list_heading: String,
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            artist: "EASON CHAN".to_string(),
            title: "FEAR AND DREAMS".to_string(),
            tour: "CONCERT TOUR 2025".to_string(),
            city: "北京站".to_string(),
            city_subtitle: "BEIJING".to_string(),
            date: "2025年7月25日".to_string(),
            venue: "待定".to_string(),
            start_time: "19:00 开始".to_string(),
            guest_heading: "特别嘉宾".to_string(),
            guest_text: "将会有神秘嘉宾出场".to_string(),
            notice: "本次演唱会将严格按照实名制购票，入场时需出示身份证与票券。".to_string(),
            accept_label: "接收邀请".to_string(),
            accepted_label: "已接受邀请".to_string(),
            track_list_heading: "选择曲目".to_string(),
        }
    }
}
