//! Recording test doubles for the media and particle capabilities.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tokio::time::Instant;

use crate::celebration::{Burst, ParticleEffect};
use crate::error::{InvitationError, InvitationResult};
use crate::media::{MediaCommand, MediaElement};

/// Records every media operation; `play` can be made to fail.
#[derive(Debug, Default)]
pub struct RecordingMedia {
    commands: Mutex<Vec<MediaCommand>>,
    fail_play: AtomicBool,
}

impl RecordingMedia {
    pub fn fail_play(&self, fail: bool) {
        self.fail_play.store(fail, Ordering::SeqCst);
    }

    pub fn commands(&self) -> Vec<MediaCommand> {
        self.commands.lock().clone()
    }

    pub fn play_count(&self) -> usize {
        self.commands
            .lock()
            .iter()
            .filter(|c| matches!(c, MediaCommand::Play))
            .count()
    }

    pub fn clear(&self) {
        self.commands.lock().clear();
    }
}

impl MediaElement for RecordingMedia {
    fn play(&self) -> InvitationResult<()> {
        self.commands.lock().push(MediaCommand::Play);
        if self.fail_play.load(Ordering::SeqCst) {
            return Err(InvitationError::Playback("NotAllowedError".to_string()));
        }
        Ok(())
    }

    fn pause(&self) {
        self.commands.lock().push(MediaCommand::Pause);
    }

    fn seek(&self, position_secs: f64) {
        self.commands.lock().push(MediaCommand::Seek(position_secs));
    }

    fn set_muted(&self, muted: bool) {
        self.commands.lock().push(MediaCommand::SetMuted(muted));
    }

    fn set_source(&self, source: &str) {
        self.commands
            .lock()
            .push(MediaCommand::SetSource(source.to_string()));
    }
}

/// Records each burst together with the (tokio) time it was fired.
#[derive(Debug)]
pub struct RecordingParticles {
    started: Instant,
    bursts: Mutex<Vec<(std::time::Duration, Burst)>>,
}

impl Default for RecordingParticles {
    fn default() -> Self {
        Self {
            started: Instant::now(),
            bursts: Mutex::new(Vec::new()),
        }
    }
}

impl RecordingParticles {
    /// Bursts fired so far, with their offset from construction.
    pub fn bursts(&self) -> Vec<(std::time::Duration, Burst)> {
        self.bursts.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.bursts.lock().len()
    }
}

impl ParticleEffect for RecordingParticles {
    fn burst(&self, burst: &Burst) {
        let offset = self.started.elapsed();
        self.bursts.lock().push((offset, burst.clone()));
    }
}
