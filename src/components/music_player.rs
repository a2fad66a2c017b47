//! Music Player Widget
//!
//! Floating audio controls in the top-right corner.
//! - Wide windows: always expanded (play, track name, next, mute)
//! - Narrow windows: a single round button that expands the controls
//!
//! Pointer-downs inside the widget are reported as `PointerTarget::Player`
//! and stopped here, so only clicks elsewhere close the track list.

use dioxus::prelude::*;
use invitation_core::{PointerKind, PointerTarget};

use super::equalizer::Equalizer;
use super::icons::{Glyph, Icon};
use super::track_list::TrackList;
use crate::context::{use_runtime, use_snapshot};

#[component]
pub fn MusicPlayer() -> Element {
    let runtime = use_runtime();
    let snapshot = use_snapshot();

    let view = snapshot.read().clone();
    let player = view.player;
    let narrow = view.narrow;
    let expanded = view.expanded_layout();

    let dock_class = if view.mounted { "player-dock visible" } else { "player-dock" };
    let shell_class = match (expanded, player.is_expanded) {
        (false, _) => "player-shell collapsed",
        (true, true) => "player-shell expanded raised",
        (true, false) => "player-shell expanded",
    };
    let controls_class = if narrow && player.is_expanded {
        "player-controls spread"
    } else {
        "player-controls"
    };
    let toggle_glyph = if player.is_expanded { Glyph::ChevronUp } else { Glyph::Music };
    let toggle_class = if player.is_playing && !player.is_expanded { "pulse" } else { "" };
    let play_glyph = if player.is_playing { Glyph::Pause } else { Glyph::Play };
    let mute_glyph = if player.is_muted { Glyph::VolumeMuted } else { Glyph::Volume };
    let track_name = view.current_track.name.clone();

    let card = runtime.card.clone();
    let on_mouse_down = move |evt: Event<MouseData>| {
        evt.stop_propagation();
        card.pointer_down(PointerKind::MouseDown, PointerTarget::Player);
    };
    let card = runtime.card.clone();
    let on_touch_start = move |evt: Event<TouchData>| {
        evt.stop_propagation();
        card.pointer_down(PointerKind::TouchStart, PointerTarget::Player);
    };

    let card_expand = runtime.card.clone();
    let card_play = runtime.card.clone();
    let card_list = runtime.card.clone();
    let card_next = runtime.card.clone();
    let card_mute = runtime.card.clone();

    rsx! {
        div {
            class: "{dock_class}",
            onmousedown: on_mouse_down,
            ontouchstart: on_touch_start,

            div { class: "{shell_class}",
                div { class: "{controls_class}",
                    if narrow {
                        button {
                            class: "player-btn primary",
                            "aria-label": "Toggle player",
                            onclick: move |_| card_expand.toggle_expand(),
                            Icon { glyph: toggle_glyph, class: toggle_class.to_string() }
                        }
                    }

                    if expanded {
                        button {
                            class: "player-btn primary reveal-control",
                            "aria-label": "Play or pause",
                            onclick: move |_| card_play.toggle_play(),
                            Icon { glyph: play_glyph }
                        }

                        div {
                            class: "track-label reveal-control",
                            onclick: move |_| card_list.toggle_track_list(),
                            if player.is_playing {
                                Equalizer { bars: 3 }
                            }
                            span { class: "track-name", "{track_name}" }
                        }

                        button {
                            class: "player-btn ghost reveal-control",
                            "aria-label": "Next track",
                            onclick: move |_| card_next.next_track(),
                            Icon { glyph: Glyph::SkipForward }
                        }

                        button {
                            class: "player-btn ghost reveal-control",
                            "aria-label": "Mute",
                            onclick: move |_| card_mute.toggle_mute(),
                            Icon { glyph: mute_glyph }
                        }
                    }
                }
            }

            if player.track_list_open {
                TrackList {}
            }
        }
    }
}
