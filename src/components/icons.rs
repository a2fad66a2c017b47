//! Inline SVG icons (24×24 stroke glyphs).

use dioxus::prelude::*;

/// Glyphs used by the card and player
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    Play,
    Pause,
    SkipForward,
    Volume,
    VolumeMuted,
    Music,
    ChevronUp,
    Calendar,
    MapPin,
    Clock,
    Check,
    Star,
}

impl Glyph {
    /// Filled glyphs use the current colour for fill as well as stroke
    fn filled(&self) -> bool {
        matches!(self, Glyph::Star)
    }
}

#[component]
pub fn Icon(
    glyph: Glyph,
    #[props(default = 16.0)] size: f64,
    #[props(default)] class: String,
) -> Element {
    let fill = if glyph.filled() { "currentColor" } else { "none" };

    rsx! {
        svg {
            class: "icon {class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "{fill}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {glyph_paths(glyph)}
        }
    }
}

fn glyph_paths(glyph: Glyph) -> Element {
    match glyph {
        Glyph::Play => rsx! {
            polygon { points: "6 3 20 12 6 21 6 3" }
        },
        Glyph::Pause => rsx! {
            rect { x: "6", y: "4", width: "4", height: "16", rx: "1" }
            rect { x: "14", y: "4", width: "4", height: "16", rx: "1" }
        },
        Glyph::SkipForward => rsx! {
            polygon { points: "5 4 15 12 5 20 5 4" }
            line { x1: "19", y1: "5", x2: "19", y2: "19" }
        },
        Glyph::Volume => rsx! {
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
            path { d: "M19.07 4.93a10 10 0 0 1 0 14.14" }
        },
        Glyph::VolumeMuted => rsx! {
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            line { x1: "22", y1: "9", x2: "16", y2: "15" }
            line { x1: "16", y1: "9", x2: "22", y2: "15" }
        },
        Glyph::Music => rsx! {
            path { d: "M9 18V5l12-2v13" }
            circle { cx: "6", cy: "18", r: "3" }
            circle { cx: "18", cy: "16", r: "3" }
        },
        Glyph::ChevronUp => rsx! {
            polyline { points: "18 15 12 9 6 15" }
        },
        Glyph::Calendar => rsx! {
            rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
            line { x1: "16", y1: "2", x2: "16", y2: "6" }
            line { x1: "8", y1: "2", x2: "8", y2: "6" }
            line { x1: "3", y1: "10", x2: "21", y2: "10" }
        },
        Glyph::MapPin => rsx! {
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        },
        Glyph::Clock => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            polyline { points: "12 6 12 12 16 14" }
        },
        Glyph::Check => rsx! {
            polyline { points: "20 6 9 17 4 12" }
        },
        Glyph::Star => rsx! {
            polygon { points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" }
        },
    }
}
