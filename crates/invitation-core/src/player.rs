//! Audio player widget state.
//!
//! [`AudioPlayer`] owns the widget flags and issues operations against the
//! injected [`MediaElement`]. The displayed `is_playing` follows intent when
//! a play request is handed off, then is reconciled by [`MediaEvent`]s.

use std::sync::Arc;

use crate::catalog::{Track, TrackCatalog};
use crate::media::{MediaElement, MediaEvent};

/// Flags rendered by the player widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerState {
    /// Always a valid index into the catalog
    pub current_track: usize,
    pub is_playing: bool,
    pub is_muted: bool,
    /// Only consulted on narrow viewports
    pub is_expanded: bool,
    pub track_list_open: bool,
}

impl PlayerState {
    /// Wide viewports always get the expanded layout.
    pub fn expanded_layout(&self, narrow: bool) -> bool {
        !narrow || self.is_expanded
    }
}

pub struct AudioPlayer {
    state: PlayerState,
    catalog: TrackCatalog,
    media: Arc<dyn MediaElement>,
}

impl AudioPlayer {
    pub fn new(catalog: TrackCatalog, media: Arc<dyn MediaElement>) -> Self {
        Self {
            state: PlayerState::default(),
            catalog,
            media,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn catalog(&self) -> &TrackCatalog {
        &self.catalog
    }

    pub fn current(&self) -> &Track {
        // current_track is kept in range by select_track
        &self.catalog.tracks()[self.state.current_track]
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Request playback. Returns true if the request was handed off.
    ///
    /// A refused request is logged and leaves `is_playing` false.
    pub fn play(&mut self) -> bool {
        match self.media.play() {
            Ok(()) => {
                self.state.is_playing = true;
                true
            }
            Err(e) => {
                tracing::warn!("Audio play failed: {}", e);
                self.state.is_playing = false;
                false
            }
        }
    }

    pub fn pause(&mut self) {
        self.media.pause();
        self.state.is_playing = false;
    }

    pub fn toggle_play(&mut self) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn toggle_mute(&mut self) {
        self.state.is_muted = !self.state.is_muted;
        self.media.set_muted(self.state.is_muted);
    }

    /// Switch to `index`, restarting from the top if playing. Closes the
    /// track list. Out-of-range indices are ignored.
    pub fn select_track(&mut self, index: usize) -> bool {
        let Some(track) = self.catalog.get(index) else {
            tracing::warn!(
                "Ignoring track index {} (catalog has {} tracks)",
                index,
                self.catalog.len()
            );
            return false;
        };

        if index != self.state.current_track {
            self.media.set_source(&track.source);
        }
        self.state.current_track = index;
        tracing::debug!("Selected track {}: {}", index, track.name);

        if self.state.is_playing {
            self.media.seek(0.0);
            if let Err(e) = self.media.play() {
                tracing::warn!("Audio play failed: {}", e);
                self.state.is_playing = false;
            }
        }
        self.state.track_list_open = false;
        true
    }

    pub fn next_track(&mut self) {
        let next = self.catalog.next_index(self.state.current_track);
        self.select_track(next);
    }

    pub fn toggle_expand(&mut self) {
        self.state.is_expanded = !self.state.is_expanded;
    }

    pub fn expand(&mut self) {
        self.state.is_expanded = true;
    }

    pub fn toggle_track_list(&mut self) {
        self.state.track_list_open = !self.state.track_list_open;
    }

    /// Returns true if the list was open.
    pub fn close_track_list(&mut self) -> bool {
        std::mem::replace(&mut self.state.track_list_open, false)
    }

    /// Reconcile with what the media element reports.
    pub fn handle_event(&mut self, event: &MediaEvent) {
        match event {
            MediaEvent::Play => self.state.is_playing = true,
            MediaEvent::Pause | MediaEvent::Ended => self.state.is_playing = false,
            MediaEvent::PlaybackRejected(reason) => {
                tracing::warn!("Audio play failed: {}", reason);
                self.state.is_playing = false;
            }
        }
    }
}
