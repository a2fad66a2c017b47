//! Card context provider for the concert invitation.
//!
//! Provides the [`CardRuntime`] and the latest [`CardSnapshot`] to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let runtime = use_runtime();
//! let snapshot = use_snapshot();
//!
//! let accepted = snapshot.read().accepted;
//! runtime.card.accept();
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use invitation_core::{
    CardSnapshot, ChannelMedia, ConfettiCannon, EventDetails, InvitationCard, InvitationConfig,
    InvitationResult, MediaCommand, SharedViewport,
};
use tokio::sync::mpsc::UnboundedReceiver;

/// The card plus the UI-side ends of its capabilities.
///
/// Cheap to clone; all clones share the same card.
#[derive(Clone)]
pub struct CardRuntime {
    pub card: Rc<InvitationCard>,
    pub cannon: Arc<ConfettiCannon>,
    pub viewport: Arc<SharedViewport>,
    pub details: Rc<EventDetails>,
    /// Source rendered on the `<audio>` element before any track change
    pub initial_source: String,
    media_commands: Rc<RefCell<Option<UnboundedReceiver<MediaCommand>>>>,
}

impl CardRuntime {
    pub fn new(config: &InvitationConfig, width: u32, height: u32) -> InvitationResult<Self> {
        let (media, commands) = ChannelMedia::new();
        let viewport = Arc::new(SharedViewport::new(
            width,
            height,
            config.layout.narrow_breakpoint_px,
        ));
        let cannon = Arc::new(ConfettiCannon::new(f64::from(width), f64::from(height)));
        let card = InvitationCard::new(config, Arc::new(media), cannon.clone(), viewport.clone())?;
        let initial_source = config.catalog()?.tracks()[0].source.clone();

        Ok(Self {
            card: Rc::new(card),
            cannon,
            viewport,
            details: Rc::new(config.details.clone()),
            initial_source,
            media_commands: Rc::new(RefCell::new(Some(commands))),
        })
    }

    /// Hand out the media command receiver. Only the first call gets it.
    pub fn take_media_commands(&self) -> Option<UnboundedReceiver<MediaCommand>> {
        self.media_commands.borrow_mut().take()
    }
}

impl PartialEq for CardRuntime {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.card, &other.card)
    }
}

/// Hook to access the card runtime from context.
pub fn use_runtime() -> CardRuntime {
    use_context::<CardRuntime>()
}

/// Hook to read the latest published snapshot.
///
/// Returns a reactive signal that updates whenever the card changes.
pub fn use_snapshot() -> Signal<CardSnapshot> {
    use_context::<Signal<CardSnapshot>>()
}
