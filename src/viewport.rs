//! Window size tracking.
//!
//! Feeds logical window resizes into the shared viewport and the confetti
//! surface, and tells the card when the narrow breakpoint is crossed.

use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::{use_window, use_wry_event_handler};

use crate::context::CardRuntime;

pub fn use_viewport_tracking(runtime: CardRuntime) {
    let window = use_window();

    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            let logical = size.to_logical::<f64>(window.scale_factor());
            runtime.cannon.resize(logical.width, logical.height);

            let flipped = runtime
                .viewport
                .resize(logical.width.round() as u32, logical.height.round() as u32);
            if flipped {
                tracing::debug!("Viewport crossed breakpoint at {}px", logical.width);
                runtime.card.viewport_changed();
            }
        }
    });
}
