use dioxus::prelude::*;
use invitation_core::{MediaEvent, PointerKind, PointerTarget};

use crate::components::{ConcertCard, ConfettiOverlay, MusicPlayer, StarField};
use crate::context::CardRuntime;
use crate::media::{run_media_commands, AUDIO_ELEMENT_ID};
use crate::theme::GLOBAL_STYLES;
use crate::viewport::use_viewport_tracking;
use crate::{get_config, get_window_size};

/// Root application component.
///
/// Builds the card runtime once, then hands it to [`CardRoot`].
#[component]
pub fn App() -> Element {
    let runtime = use_hook(|| {
        let (width, height) = get_window_size();
        CardRuntime::new(&get_config(), width, height).map_err(|e| e.to_string())
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        {match runtime {
            Ok(runtime) => rsx! { CardRoot { runtime } },
            Err(message) => rsx! {
                div { class: "invitation-error", "Invitation unavailable: {message}" }
            },
        }}
    }
}

/// Provides card context and owns the card's mount lifetime.
#[component]
fn CardRoot(runtime: CardRuntime) -> Element {
    use_context_provider(|| runtime.clone());

    let mut snapshot = use_signal(|| runtime.card.snapshot());
    use_context_provider(|| snapshot);

    // Mirror published snapshots into the signal
    let rt = runtime.clone();
    use_future(move || {
        let mut updates = rt.card.subscribe();
        async move {
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                snapshot.set(next);
            }
        }
    });

    // Media bridge to the <audio> element
    let rt = runtime.clone();
    use_future(move || {
        let commands = rt.take_media_commands();
        let card = rt.card.clone();
        async move {
            if let Some(commands) = commands {
                run_media_commands(commands, card).await;
            }
        }
    });

    use_viewport_tracking(runtime.clone());

    // Mount after first render, release timers and listeners on teardown
    let card = runtime.card.clone();
    use_effect(move || card.mount());
    let card = runtime.card.clone();
    use_drop(move || card.unmount());

    let on_mouse_down = {
        let card = runtime.card.clone();
        move |_: Event<MouseData>| card.pointer_down(PointerKind::MouseDown, PointerTarget::Outside)
    };
    let on_touch_start = {
        let card = runtime.card.clone();
        move |_: Event<TouchData>| card.pointer_down(PointerKind::TouchStart, PointerTarget::Outside)
    };
    let on_play = {
        let card = runtime.card.clone();
        move |_: Event<MediaData>| card.media_event(MediaEvent::Play)
    };
    let on_pause = {
        let card = runtime.card.clone();
        move |_: Event<MediaData>| card.media_event(MediaEvent::Pause)
    };
    let on_ended = {
        let card = runtime.card.clone();
        move |_: Event<MediaData>| card.media_event(MediaEvent::Ended)
    };

    rsx! {
        div {
            class: "invitation-root",
            onmousedown: on_mouse_down,
            ontouchstart: on_touch_start,

            ConfettiOverlay {}

            audio {
                id: AUDIO_ELEMENT_ID,
                src: "{runtime.initial_source}",
                preload: "none",
                r#loop: true,
                onplay: on_play,
                onpause: on_pause,
                onended: on_ended,
            }

            MusicPlayer {}
            StarField {}
            ConcertCard {}
        }
    }
}
