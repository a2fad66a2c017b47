//! Webview media bridge.
//!
//! Drains the card's [`MediaCommand`]s and applies them to the `<audio>`
//! element through `document::eval`. A rejected `play()` promise comes
//! back as [`MediaEvent::PlaybackRejected`].

use std::rc::Rc;

use dioxus::prelude::*;
use invitation_core::{InvitationCard, MediaCommand, MediaEvent};
use tokio::sync::mpsc::UnboundedReceiver;

/// DOM id of the hidden audio element.
pub const AUDIO_ELEMENT_ID: &str = "invitation-audio";

/// JavaScript that applies `command` to the audio element.
///
/// Every script returns `null` on success; the play script returns the
/// rejection reason as a string instead.
pub fn command_script(command: &MediaCommand) -> String {
    let body = match command {
        MediaCommand::Play => {
            return format!(
                r#"const el = document.getElementById("{id}");
if (!el) {{ return "audio element missing"; }}
try {{ await el.play(); return null; }}
catch (e) {{ return e && e.name ? e.name + ": " + e.message : String(e); }}"#,
                id = AUDIO_ELEMENT_ID
            );
        }
        MediaCommand::Pause => "el.pause();".to_string(),
        MediaCommand::Seek(secs) => format!("el.currentTime = {};", secs),
        MediaCommand::SetMuted(muted) => format!("el.muted = {};", muted),
        MediaCommand::SetSource(source) => {
            // JSON string literal doubles as an escaped JS string literal
            let quoted = serde_json::to_string(source).unwrap_or_else(|_| "\"\"".to_string());
            format!("el.src = {}; el.load();", quoted)
        }
    };
    format!(
        r#"const el = document.getElementById("{}");
if (el) {{ {} }}
return null;"#,
        AUDIO_ELEMENT_ID, body
    )
}

/// Apply media commands until the card's media handle is dropped.
pub async fn run_media_commands(
    mut commands: UnboundedReceiver<MediaCommand>,
    card: Rc<InvitationCard>,
) {
    while let Some(command) = commands.recv().await {
        tracing::debug!("Media command: {:?}", command);
        // The script is dispatched on creation, so ordering is preserved
        // even though results are awaited separately.
        let eval = document::eval(&command_script(&command));

        if command == MediaCommand::Play {
            let card = card.clone();
            spawn(async move {
                match eval.await {
                    Ok(serde_json::Value::String(reason)) => {
                        card.media_event(MediaEvent::PlaybackRejected(reason));
                    }
                    Ok(_) => {}
                    Err(e) => tracing::warn!("Audio play failed: {:?}", e),
                }
            });
        } else {
            spawn(async move {
                if let Err(e) = eval.await {
                    tracing::warn!("Media command failed: {:?}", e);
                }
            });
        }
    }
    tracing::debug!("Media command channel closed");
}
