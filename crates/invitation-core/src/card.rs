//! The invitation card controller.
//!
//! [`InvitationCard`] composes the player, the RSVP state machine, the star
//! field and the celebration schedule. Every mutation goes through one lock
//! and ends by publishing a fresh [`CardSnapshot`] on a watch channel, which
//! is all the UI ever reads.
//!
//! ## Lifetime
//!
//! ```text
//! new()      mounted=false, stars scattered, nothing scheduled
//! mount()    mounted=true, star drift timer + outside-pointer listener
//! accept()   bursts at 0/250/400/600ms, playback, maybe auto-expand at +1s
//! unmount()  timers aborted, listener released, mounted=false
//! drop       same as unmount for anything still alive
//! ```

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::catalog::Track;
use crate::celebration::{celebration_schedule, ParticleEffect};
use crate::config::{InvitationConfig, LayoutConfig, TimingConfig};
use crate::error::InvitationResult;
use crate::media::{MediaElement, MediaEvent};
use crate::player::{AudioPlayer, PlayerState};
use crate::pointer::{PointerEvent, PointerHub, PointerKind, PointerSubscription, PointerTarget};
use crate::rsvp::Invitation;
use crate::scheduler::TaskScope;
use crate::stars::{StarField, StarMarker};
use crate::viewport::ViewportObserver;

/// Everything the UI needs to render one frame of the card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSnapshot {
    pub mounted: bool,
    pub accepted: bool,
    pub narrow: bool,
    pub player: PlayerState,
    pub current_track: Track,
    pub tracks: Vec<Track>,
    pub stars: Vec<StarMarker>,
}

impl CardSnapshot {
    pub fn expanded_layout(&self) -> bool {
        self.player.expanded_layout(self.narrow)
    }
}

/// Result of an RSVP click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptOutcome {
    Accepted {
        /// A play request was handed to the media element
        playback_requested: bool,
        /// The collapsed player will expand after the configured delay
        auto_expand_scheduled: bool,
    },
    /// Already accepted; nothing happened
    AlreadyAccepted,
}

struct CardState {
    mounted: bool,
    invitation: Invitation,
    player: AudioPlayer,
    stars: StarField,
}

impl CardState {
    fn snapshot(&self, narrow: bool) -> CardSnapshot {
        CardSnapshot {
            mounted: self.mounted,
            accepted: self.invitation.is_accepted(),
            narrow,
            player: self.player.state(),
            current_track: self.player.current().clone(),
            tracks: self.player.catalog().tracks().to_vec(),
            stars: self.stars.markers().to_vec(),
        }
    }
}

struct CardShared {
    state: Mutex<CardState>,
    particles: Arc<dyn ParticleEffect>,
    viewport: Arc<dyn ViewportObserver>,
    timing: TimingConfig,
    layout: LayoutConfig,
    snapshots: watch::Sender<CardSnapshot>,
}

impl CardShared {
    /// Mutate under the lock, then publish.
    fn update<R>(&self, f: impl FnOnce(&mut CardState) -> R) -> R {
        let mut state = self.state.lock();
        let result = f(&mut state);
        let snapshot = state.snapshot(self.viewport.is_narrow());
        drop(state);
        self.snapshots.send_replace(snapshot);
        result
    }
}

pub struct InvitationCard {
    shared: Arc<CardShared>,
    timers: TaskScope,
    pointer_hub: PointerHub,
    pointer_subscription: Mutex<Option<PointerSubscription>>,
}

impl InvitationCard {
    pub fn new(
        config: &InvitationConfig,
        media: Arc<dyn MediaElement>,
        particles: Arc<dyn ParticleEffect>,
        viewport: Arc<dyn ViewportObserver>,
    ) -> InvitationResult<Self> {
        config.validate()?;
        let catalog = config.catalog()?;
        let narrow = viewport.is_narrow();

        let state = CardState {
            mounted: false,
            invitation: Invitation::new(),
            player: AudioPlayer::new(catalog, media),
            stars: StarField::scatter(config.layout.star_count(narrow), &mut rand::rng()),
        };
        let (snapshots, _) = watch::channel(state.snapshot(narrow));

        Ok(Self {
            shared: Arc::new(CardShared {
                state: Mutex::new(state),
                particles,
                viewport,
                timing: config.timing.clone(),
                layout: config.layout.clone(),
                snapshots,
            }),
            timers: TaskScope::new("invitation-card"),
            pointer_hub: PointerHub::new(),
            pointer_subscription: Mutex::new(None),
        })
    }

    /// Receive every snapshot published from now on.
    pub fn subscribe(&self) -> watch::Receiver<CardSnapshot> {
        self.shared.snapshots.subscribe()
    }

    pub fn snapshot(&self) -> CardSnapshot {
        self.shared.snapshots.borrow().clone()
    }

    pub fn pointer_hub(&self) -> &PointerHub {
        &self.pointer_hub
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// First-paint hook. Starts the star drift and the outside-pointer
    /// listener. Repeated calls while mounted do nothing.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&self) {
        let first = self
            .shared
            .update(|state| !std::mem::replace(&mut state.mounted, true));
        if !first {
            return;
        }

        let weak = Arc::downgrade(&self.shared);
        self.timers.every(self.shared.timing.star_refresh(), move || {
            if let Some(shared) = weak.upgrade() {
                shared.update(|state| state.stars.drift(&mut rand::rng()));
            }
        });

        let weak = Arc::downgrade(&self.shared);
        let subscription = self.pointer_hub.subscribe(move |event| {
            if event.is_outside() {
                close_track_list_if_open(&weak);
            }
        });
        *self.pointer_subscription.lock() = Some(subscription);

        tracing::info!("Invitation card mounted");
    }

    /// Teardown hook. Aborts every timer and releases the pointer listener.
    pub fn unmount(&self) {
        self.timers.cancel_all();
        self.pointer_subscription.lock().take();
        self.shared.update(|state| state.mounted = false);
        tracing::info!("Invitation card unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.state.lock().mounted
    }

    /// RSVP. Only the first call has any effect.
    pub fn accept(&self) -> AcceptOutcome {
        let narrow = self.shared.viewport.is_narrow();
        let outcome = self.shared.update(|state| {
            if !state.invitation.accept() {
                return AcceptOutcome::AlreadyAccepted;
            }
            let mut playback_requested = false;
            let mut auto_expand_scheduled = false;
            if !state.player.is_playing() {
                playback_requested = state.player.play();
                auto_expand_scheduled = narrow && !state.player.state().is_expanded;
            }
            AcceptOutcome::Accepted {
                playback_requested,
                auto_expand_scheduled,
            }
        });

        match outcome {
            AcceptOutcome::AlreadyAccepted => {
                tracing::debug!("Invitation already accepted");
            }
            AcceptOutcome::Accepted {
                auto_expand_scheduled,
                ..
            } => {
                tracing::info!("Invitation accepted");
                self.trigger_celebration();
                if auto_expand_scheduled {
                    let weak = Arc::downgrade(&self.shared);
                    self.timers.after(self.shared.timing.auto_expand_delay(), move || {
                        if let Some(shared) = weak.upgrade() {
                            shared.update(|state| state.player.expand());
                        }
                    });
                }
            }
        }
        outcome
    }

    /// Fire the four confetti bursts. The first fires immediately.
    pub fn trigger_celebration(&self) {
        let narrow = self.shared.viewport.is_narrow();
        for scheduled in celebration_schedule(narrow) {
            if scheduled.delay.is_zero() {
                self.shared.particles.burst(&scheduled.burst);
                continue;
            }
            let particles = self.shared.particles.clone();
            self.timers
                .after(scheduled.delay, move || particles.burst(&scheduled.burst));
        }
    }

    pub fn toggle_play(&self) {
        self.shared.update(|state| state.player.toggle_play());
    }

    pub fn toggle_mute(&self) {
        self.shared.update(|state| state.player.toggle_mute());
    }

    pub fn select_track(&self, index: usize) {
        self.shared.update(|state| state.player.select_track(index));
    }

    pub fn next_track(&self) {
        self.shared.update(|state| state.player.next_track());
    }

    pub fn toggle_expand(&self) {
        self.shared.update(|state| state.player.toggle_expand());
    }

    pub fn toggle_track_list(&self) {
        self.shared.update(|state| state.player.toggle_track_list());
    }

    pub fn close_track_list(&self) {
        self.shared.update(|state| state.player.close_track_list());
    }

    /// Report a notification from the media element.
    pub fn media_event(&self, event: MediaEvent) {
        tracing::debug!("Media event: {:?}", event);
        self.shared.update(|state| state.player.handle_event(&event));
    }

    /// Report a pointer-down anywhere in the window.
    pub fn pointer_down(&self, kind: PointerKind, target: PointerTarget) {
        self.pointer_hub.dispatch(&PointerEvent::new(kind, target));
    }

    /// Re-read the viewport. Re-scatters the stars when the breakpoint was
    /// crossed and republishes the narrow flag.
    pub fn viewport_changed(&self) {
        let narrow = self.shared.viewport.is_narrow();
        let count = self.shared.layout.star_count(narrow);
        self.shared.update(|state| {
            if state.stars.len() != count {
                tracing::debug!("Viewport narrow={}, scattering {} stars", narrow, count);
                state.stars = StarField::scatter(count, &mut rand::rng());
            }
        });
    }
}

fn close_track_list_if_open(shared: &Weak<CardShared>) {
    let Some(shared) = shared.upgrade() else {
        return;
    };
    // Skip the publish when nothing changes
    if !shared.state.lock().player.state().track_list_open {
        return;
    }
    shared.update(|state| state.player.close_track_list());
}

impl std::fmt::Debug for InvitationCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvitationCard")
            .field("snapshot", &self.snapshot())
            .field("timers", &self.timers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaCommand;
    use crate::testing::{RecordingMedia, RecordingParticles};
    use crate::viewport::SharedViewport;

    struct Fixture {
        card: InvitationCard,
        media: Arc<RecordingMedia>,
        particles: Arc<RecordingParticles>,
        viewport: Arc<SharedViewport>,
    }

    fn fixture(width: u32) -> Fixture {
        let config = InvitationConfig::default();
        let media = Arc::new(RecordingMedia::default());
        let particles = Arc::new(RecordingParticles::default());
        let viewport = Arc::new(SharedViewport::new(
            width,
            800,
            config.layout.narrow_breakpoint_px,
        ));
        let card = InvitationCard::new(&config, media.clone(), particles.clone(), viewport.clone())
            .unwrap();
        Fixture {
            card,
            media,
            particles,
            viewport,
        }
    }

    #[tokio::test]
    async fn test_fresh_card_unmounted() {
        let f = fixture(1280);
        let snapshot = f.card.snapshot();
        assert!(!snapshot.mounted);
        assert!(!snapshot.accepted);
        assert_eq!(snapshot.stars.len(), 8);
        assert_eq!(f.card.pending_timers(), 0);

        f.card.mount();
        assert!(f.card.snapshot().mounted);
        assert!(f.card.is_mounted());
    }

    #[tokio::test]
    async fn test_narrow_starts_collapsed() {
        let f = fixture(390);
        let snapshot = f.card.snapshot();
        assert!(snapshot.narrow);
        assert!(!snapshot.expanded_layout());
        assert_eq!(snapshot.stars.len(), 5);

        f.card.toggle_expand();
        assert!(f.card.snapshot().expanded_layout());
    }

    #[tokio::test]
    async fn test_wide_always_expanded_layout() {
        let f = fixture(1280);
        assert!(f.card.snapshot().expanded_layout());
        f.card.toggle_expand();
        f.card.toggle_expand();
        assert!(f.card.snapshot().expanded_layout());
    }

    #[tokio::test]
    async fn test_accept_is_idempotent() {
        let f = fixture(1280);

        let first = f.card.accept();
        assert_eq!(
            first,
            AcceptOutcome::Accepted {
                playback_requested: true,
                auto_expand_scheduled: false
            }
        );
        assert_eq!(f.card.accept(), AcceptOutcome::AlreadyAccepted);

        assert_eq!(f.media.play_count(), 1);
        // Only the immediate burst so far, and only one of it
        assert_eq!(f.particles.count(), 1);
        assert!(f.card.snapshot().accepted);
    }

    #[tokio::test]
    async fn test_accept_while_playing_does_not_restart() {
        let f = fixture(390);
        f.card.toggle_play();
        f.media.clear();

        let outcome = f.card.accept();

        assert_eq!(
            outcome,
            AcceptOutcome::Accepted {
                playback_requested: false,
                auto_expand_scheduled: false
            }
        );
        assert!(f.media.commands().is_empty());
    }

    #[tokio::test]
    async fn test_outside_pointer_only_after_mount() {
        let f = fixture(1280);
        f.card.toggle_track_list();

        // Not mounted yet: nobody listens
        f.card.pointer_down(PointerKind::MouseDown, PointerTarget::Outside);
        assert!(f.card.snapshot().player.track_list_open);

        f.card.mount();
        f.card.pointer_down(PointerKind::MouseDown, PointerTarget::Player);
        assert!(f.card.snapshot().player.track_list_open);

        f.card.pointer_down(PointerKind::TouchStart, PointerTarget::Outside);
        assert!(!f.card.snapshot().player.track_list_open);
    }

    #[tokio::test]
    async fn test_unmount_releases_everything() {
        let f = fixture(1280);
        f.card.mount();
        assert_eq!(f.card.pointer_hub().listener_count(), 1);
        assert_eq!(f.card.pending_timers(), 1);

        f.card.unmount();
        assert_eq!(f.card.pointer_hub().listener_count(), 0);
        assert_eq!(f.card.pending_timers(), 0);
        assert!(!f.card.snapshot().mounted);
    }

    #[tokio::test]
    async fn test_viewport_change_rescatters() {
        let f = fixture(1280);
        assert_eq!(f.card.snapshot().stars.len(), 8);

        f.viewport.resize(400, 800);
        f.card.viewport_changed();

        let snapshot = f.card.snapshot();
        assert!(snapshot.narrow);
        assert_eq!(snapshot.stars.len(), 5);
    }

    #[tokio::test]
    async fn test_media_events_reconcile() {
        let f = fixture(1280);
        f.card.toggle_play();
        assert!(f.card.snapshot().player.is_playing);

        f.card
            .media_event(MediaEvent::PlaybackRejected("NotAllowedError".into()));
        assert!(!f.card.snapshot().player.is_playing);
        assert_eq!(f.media.commands(), vec![MediaCommand::Play]);
    }

    #[tokio::test]
    async fn test_subscribers_see_updates() {
        let f = fixture(1280);
        let mut rx = f.card.subscribe();

        f.card.toggle_mute();

        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().player.is_muted);
    }
}
