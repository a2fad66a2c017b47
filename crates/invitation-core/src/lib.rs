//! Concert Invitation Core Library
//!
//! Headless state for a single animated concert invitation card: the
//! background audio player, the RSVP flow, the confetti celebration, the
//! ambient star field and the reveal sequence.
//!
//! ## Overview
//!
//! Nothing here draws anything. The rendering shell injects three
//! capabilities and reads back immutable [`CardSnapshot`]s:
//!
//! - [`MediaElement`]: play/pause/seek/mute on one looping audio element
//! - [`ParticleEffect`]: fire-and-forget confetti bursts
//! - [`ViewportObserver`]: the "is narrow" signal
//!
//! Timers and pointer listeners are owned by the card and released when it
//! is unmounted or dropped.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use invitation_core::{
//!     ChannelMedia, ConfettiCannon, InvitationCard, InvitationConfig, SharedViewport,
//! };
//!
//! let config = InvitationConfig::default();
//! let (media, commands) = ChannelMedia::new();
//! let viewport = Arc::new(SharedViewport::new(1280, 900, config.layout.narrow_breakpoint_px));
//! let cannon = Arc::new(ConfettiCannon::new(1280.0, 900.0));
//!
//! let card = InvitationCard::new(&config, Arc::new(media), cannon, viewport)?;
//! card.mount();
//! card.accept();
//! ```

pub mod card;
pub mod catalog;
pub mod celebration;
pub mod config;
pub mod error;
pub mod media;
pub mod particles;
pub mod player;
pub mod pointer;
pub mod reveal;
pub mod rsvp;
pub mod scheduler;
pub mod stars;
pub mod testing;
pub mod viewport;

// Re-exports
pub use card::{AcceptOutcome, CardSnapshot, InvitationCard};
pub use catalog::{EventDetails, Track, TrackCatalog};
pub use celebration::{celebration_schedule, Burst, Origin, ParticleEffect, ScheduledBurst};
pub use config::{InvitationConfig, LayoutConfig, TimingConfig};
pub use error::{InvitationError, InvitationResult};
pub use media::{ChannelMedia, MediaCommand, MediaElement, MediaEvent};
pub use particles::{ConfettiCannon, ConfettiSprite, ParticleField};
pub use player::{AudioPlayer, PlayerState};
pub use pointer::{PointerEvent, PointerHub, PointerKind, PointerSubscription, PointerTarget};
pub use reveal::{reveal_step, reveal_style, RevealAnimation, RevealBlock, RevealStep, REVEAL_SEQUENCE};
pub use rsvp::{Invitation, RsvpState};
pub use scheduler::TaskScope;
pub use stars::{StarField, StarMarker};
pub use viewport::{SharedViewport, ViewportObserver, DEFAULT_NARROW_BREAKPOINT};
