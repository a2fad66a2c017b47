use dioxus::prelude::*;

use super::equalizer::Equalizer;
use super::icons::{Glyph, Icon};
use crate::context::{use_runtime, use_snapshot};

/// Dropdown listing the catalog under the player.
///
/// Full-width under the widget on narrow windows (with its own close
/// button), a fixed-width panel anchored right otherwise.
#[component]
pub fn TrackList() -> Element {
    let runtime = use_runtime();
    let snapshot = use_snapshot();

    let view = snapshot.read().clone();
    let heading = runtime.details.track_list_heading.clone();
    let panel_class = if view.narrow { "track-list narrow" } else { "track-list" };

    let card_close = runtime.card.clone();

    rsx! {
        div { class: "{panel_class}",
            div { class: "track-list-header",
                span { "{heading}" }
                if view.narrow {
                    button {
                        class: "player-btn small ghost",
                        "aria-label": "Close track list",
                        onclick: move |_| card_close.close_track_list(),
                        Icon { glyph: Glyph::ChevronUp, size: 14.0 }
                    }
                }
            }

            div { class: "track-list-items",
                for (index, track) in view.tracks.iter().enumerate() {
                    {
                        let current = index == view.player.current_track;
                        let item_class = if current { "track-item current" } else { "track-item" };
                        let playing_here = current && view.player.is_playing;
                        let card = runtime.card.clone();

                        rsx! {
                            div {
                                key: "{track.id}",
                                class: "{item_class}",
                                onclick: move |_| card.select_track(index),

                                if playing_here {
                                    Equalizer { bars: 4 }
                                } else {
                                    Icon { glyph: Glyph::Music, size: 14.0 }
                                }
                                div {
                                    div { class: "track-item-name", "{track.name}" }
                                    div { class: "track-item-artist", "{track.artist}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
