use dioxus::prelude::*;

/// Bouncing bars shown next to the playing track.
#[component]
pub fn Equalizer(#[props(default = 3)] bars: usize) -> Element {
    rsx! {
        div { class: "equalizer",
            for i in 0..bars {
                div { key: "{i}", class: "equalizer-bar" }
            }
        }
    }
}
