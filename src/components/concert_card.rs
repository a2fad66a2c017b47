//! Concert Card Component
//!
//! The invitation itself. Every block starts hidden and enters with its
//! own delay from the reveal sequence once the card is mounted, so the card
//! assembles top to bottom over about two seconds.

use dioxus::prelude::*;
use invitation_core::{reveal_style, RevealBlock};

use super::icons::{Glyph, Icon};
use super::rsvp_button::RsvpButton;
use crate::context::{use_runtime, use_snapshot};

#[component]
pub fn ConcertCard() -> Element {
    let runtime = use_runtime();
    let snapshot = use_snapshot();
    let mounted = snapshot.read().mounted;
    let details = runtime.details.clone();

    let wrapper_class = if mounted { "card-wrapper visible" } else { "card-wrapper" };
    let style = |block| reveal_style(block, mounted);
    let artist_style = style(RevealBlock::Artist);
    let title_style = style(RevealBlock::Title);
    let tour_style = style(RevealBlock::Tour);
    let badge_style = style(RevealBlock::CityBadge);
    let guest_style = style(RevealBlock::Guest);
    let footer_style = style(RevealBlock::Footer);

    let detail_rows = [
        (style(RevealBlock::Date), Glyph::Calendar, details.date.clone()),
        (style(RevealBlock::Venue), Glyph::MapPin, details.venue.clone()),
        (style(RevealBlock::StartTime), Glyph::Clock, details.start_time.clone()),
    ];

    rsx! {
        div { class: "{wrapper_class}",
            div { class: "concert-card",
                div { class: "card-glow top-right" }
                div { class: "card-glow bottom-left" }

                header { class: "card-header",
                    h3 { class: "card-artist", style: "{artist_style}",
                        "{details.artist}"
                    }
                    h1 { class: "card-title", style: "{title_style}",
                        span { class: "card-title-text", "{details.title}" }
                        div { class: "shimmer" }
                    }
                    p { class: "card-tour", style: "{tour_style}",
                        "{details.tour}"
                    }
                }

                section { class: "card-content",
                    div { class: "city-badge", style: "{badge_style}",
                        div { class: "shimmer city-badge-sheen" }
                        div { class: "city-badge-shade" }
                        div { class: "city-badge-text",
                            h2 { "{details.city}" }
                            p { "{details.city_subtitle}" }
                        }
                    }

                    div { class: "detail-rows",
                        for (i, (row_style, glyph, text)) in detail_rows.into_iter().enumerate() {
                            div { key: "{i}", class: "detail-row", style: "{row_style}",
                                Icon { glyph, size: 20.0, class: "accent".to_string() }
                                p { "{text}" }
                            }
                        }
                    }

                    div { class: "guest-block", style: "{guest_style}",
                        div { class: "hover-panel",
                            p { class: "guest-heading",
                                Icon { glyph: Glyph::Music, size: 16.0 }
                                " {details.guest_heading}"
                            }
                            p { class: "guest-text", "{details.guest_text}" }
                        }
                        div { class: "hover-panel",
                            p { class: "notice", "{details.notice}" }
                        }
                    }
                }

                footer { class: "card-footer", style: "{footer_style}",
                    RsvpButton {}
                }
            }
        }
    }
}
