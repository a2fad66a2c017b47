//! Confetti Overlay Component
//!
//! Full-window SVG layer that draws the card's confetti. The particle
//! simulation lives in `ConfettiCannon`; this component only steps it once
//! per frame and renders the quads. `pointer-events: none` keeps the layer
//! from swallowing clicks.

use std::time::Duration;

use dioxus::prelude::*;
use invitation_core::ConfettiSprite;
use tokio::time::MissedTickBehavior;

use crate::context::use_runtime;

/// Roughly 60 frames per second
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[component]
pub fn ConfettiOverlay() -> Element {
    let runtime = use_runtime();
    let mut sprites: Signal<Vec<ConfettiSprite>> = use_signal(Vec::new);

    let cannon = runtime.cannon.clone();
    use_future(move || {
        let cannon = cannon.clone();
        async move {
            let mut frames = tokio::time::interval(FRAME_INTERVAL);
            frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                frames.tick().await;
                // Nothing in flight and nothing left on screen
                if cannon.is_idle() && sprites.peek().is_empty() {
                    continue;
                }
                sprites.set(cannon.tick());
            }
        }
    });

    let (width, height) = runtime.cannon.size();
    let frame = sprites.read().clone();

    rsx! {
        svg {
            class: "confetti-overlay",
            view_box: "0 0 {width} {height}",
            preserve_aspect_ratio: "none",
            "aria-hidden": "true",
            for (i, sprite) in frame.iter().enumerate() {
                {
                    let points = sprite.svg_points();
                    rsx! {
                        polygon {
                            key: "{i}",
                            points: "{points}",
                            fill: "{sprite.color}",
                            fill_opacity: "{sprite.opacity}",
                        }
                    }
                }
            }
        }
    }
}
