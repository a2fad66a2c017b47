use dioxus::prelude::*;

use super::icons::{Glyph, Icon};
use crate::context::{use_runtime, use_snapshot};

/// Accept button, replaced by a confirmation badge once accepted.
///
/// The card guards the transition, so extra clicks before the re-render
/// lands are harmless.
#[component]
pub fn RsvpButton() -> Element {
    let runtime = use_runtime();
    let snapshot = use_snapshot();
    let accepted = snapshot.read().accepted;

    let accept_label = runtime.details.accept_label.clone();
    let accepted_label = runtime.details.accepted_label.clone();
    let card = runtime.card.clone();

    rsx! {
        if accepted {
            div { class: "rsvp-accepted",
                Icon { glyph: Glyph::Check, size: 20.0 }
                span { "{accepted_label}" }
            }
        } else {
            button {
                class: "rsvp-button",
                onclick: move |_| {
                    let outcome = card.accept();
                    tracing::debug!("RSVP clicked: {:?}", outcome);
                },
                span { class: "rsvp-label", "{accept_label}" }
                div { class: "shimmer rsvp-sheen" }
            }
        }
    }
}
