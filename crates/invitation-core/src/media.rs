//! Media capability.
//!
//! The card never touches an audio element directly. It issues operations
//! through [`MediaElement`] and learns what actually happened through
//! [`MediaEvent`]s reported back by whoever owns the element.
//!
//! ```text
//! InvitationCard ──MediaCommand──► ChannelMedia ──mpsc──► UI task ──► <audio>
//!       ▲                                                      │
//!       └──────────────────── MediaEvent ◄─────────────────────┘
//! ```

use tokio::sync::mpsc;

use crate::error::{InvitationError, InvitationResult};

/// Operations the player issues against a single looping audio element.
pub trait MediaElement: Send + Sync {
    /// Request playback. `Ok` means the request was handed off; the element
    /// may still reject it later (reported as [`MediaEvent::PlaybackRejected`]).
    fn play(&self) -> InvitationResult<()>;
    fn pause(&self);
    fn seek(&self, position_secs: f64);
    fn set_muted(&self, muted: bool);
    fn set_source(&self, source: &str);
}

/// Notifications from the media element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaEvent {
    Play,
    Pause,
    Ended,
    /// The platform refused a play request (autoplay policy, missing file)
    PlaybackRejected(String),
}

/// A single operation to apply to the audio element.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    Play,
    Pause,
    Seek(f64),
    SetMuted(bool),
    SetSource(String),
}

/// [`MediaElement`] that forwards every operation over an unbounded channel.
///
/// The receiving half lives in the UI, which owns the real element. Once the
/// receiver is dropped every operation becomes a no-op and `play` reports
/// [`InvitationError::MediaDetached`].
#[derive(Debug, Clone)]
pub struct ChannelMedia {
    tx: mpsc::UnboundedSender<MediaCommand>,
}

impl ChannelMedia {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<MediaCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, command: MediaCommand) -> InvitationResult<()> {
        self.tx.send(command).map_err(|e| {
            tracing::debug!("Media command {:?} dropped: receiver closed", e.0);
            InvitationError::MediaDetached
        })
    }
}

impl MediaElement for ChannelMedia {
    fn play(&self) -> InvitationResult<()> {
        self.send(MediaCommand::Play)
    }

    fn pause(&self) {
        let _ = self.send(MediaCommand::Pause);
    }

    fn seek(&self, position_secs: f64) {
        let _ = self.send(MediaCommand::Seek(position_secs));
    }

    fn set_muted(&self, muted: bool) {
        let _ = self.send(MediaCommand::SetMuted(muted));
    }

    fn set_source(&self, source: &str) {
        let _ = self.send(MediaCommand::SetSource(source.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_forwarded_in_order() {
        let (media, mut rx) = ChannelMedia::new();

        media.set_source("songs/sun.mp3");
        media.play().unwrap();
        media.seek(0.0);
        media.set_muted(true);
        media.pause();

        assert_eq!(rx.try_recv().unwrap(), MediaCommand::SetSource("songs/sun.mp3".into()));
        assert_eq!(rx.try_recv().unwrap(), MediaCommand::Play);
        assert_eq!(rx.try_recv().unwrap(), MediaCommand::Seek(0.0));
        assert_eq!(rx.try_recv().unwrap(), MediaCommand::SetMuted(true));
        assert_eq!(rx.try_recv().unwrap(), MediaCommand::Pause);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_play_after_receiver_dropped_is_detached() {
        let (media, rx) = ChannelMedia::new();
        drop(rx);

        assert!(matches!(media.play(), Err(InvitationError::MediaDetached)));
        // Fire-and-forget operations stay silent
        media.pause();
        media.set_muted(false);
    }
}
