use dioxus::prelude::*;

use super::icons::{Glyph, Icon};
use crate::context::use_snapshot;

/// Decorative stars drifting behind the card.
///
/// Positions come from the card's star field; the 3s CSS transition on
/// `transform` turns each drift into a slow float.
#[component]
pub fn StarField() -> Element {
    let snapshot = use_snapshot();
    let stars = snapshot.read().stars.clone();

    rsx! {
        div { class: "star-field",
            for (i, star) in stars.iter().enumerate() {
                {
                    let style = format!(
                        "top: {:.2}%; left: {:.2}%; opacity: {:.2}; transform: {};",
                        star.top_pct,
                        star.left_pct,
                        star.opacity,
                        star.transform()
                    );
                    let size = star.size_px.round();

                    rsx! {
                        div { key: "{i}", class: "floating-star", style: "{style}",
                            Icon { glyph: Glyph::Star, size }
                        }
                    }
                }
            }
        }
    }
}
