//! Property-based tests for the player and RSVP state
//!
//! Uses proptest to check the cyclic, involution and one-way properties of
//! the card's state under arbitrary interaction sequences.

use std::sync::Arc;

use invitation_core::testing::RecordingMedia;
use invitation_core::{AudioPlayer, Invitation, MediaEvent, Track, TrackCatalog};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn catalog_of(len: usize) -> TrackCatalog {
    let tracks = (0..len)
        .map(|i| Track::new(i as u32 + 1, format!("track {}", i), "artist", format!("{}.mp3", i)))
        .collect();
    TrackCatalog::new(tracks).expect("non-empty")
}

/// Interactions a listener can perform on the player widget
#[derive(Debug, Clone)]
enum PlayerOp {
    TogglePlay,
    ToggleMute,
    Next,
    Select(usize),
    ToggleExpand,
    ToggleList,
    CloseList,
    Event(u8),
}

fn player_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<PlayerOp>> {
    prop::collection::vec(
        prop_oneof![
            Just(PlayerOp::TogglePlay),
            Just(PlayerOp::ToggleMute),
            Just(PlayerOp::Next),
            (0..12usize).prop_map(PlayerOp::Select),
            Just(PlayerOp::ToggleExpand),
            Just(PlayerOp::ToggleList),
            Just(PlayerOp::CloseList),
            (0..4u8).prop_map(PlayerOp::Event),
        ],
        0..max_ops,
    )
}

fn apply(player: &mut AudioPlayer, op: &PlayerOp) {
    match op {
        PlayerOp::TogglePlay => player.toggle_play(),
        PlayerOp::ToggleMute => player.toggle_mute(),
        PlayerOp::Next => player.next_track(),
        PlayerOp::Select(i) => {
            player.select_track(*i);
        }
        PlayerOp::ToggleExpand => player.toggle_expand(),
        PlayerOp::ToggleList => player.toggle_track_list(),
        PlayerOp::CloseList => {
            player.close_track_list();
        }
        PlayerOp::Event(kind) => {
            let event = match kind {
                0 => MediaEvent::Play,
                1 => MediaEvent::Pause,
                2 => MediaEvent::Ended,
                _ => MediaEvent::PlaybackRejected("NotAllowedError".to_string()),
            };
            player.handle_event(&event);
        }
    }
}

fn player(len: usize) -> AudioPlayer {
    AudioPlayer::new(catalog_of(len), Arc::new(RecordingMedia::default()))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Calling next_track catalog-length times returns to the start
    #[test]
    fn prop_next_track_is_cyclic(len in 1..10usize, start in 0..10usize) {
        let mut player = player(len);
        player.select_track(start % len);
        let origin = player.state().current_track;

        for _ in 0..len {
            player.next_track();
        }

        prop_assert_eq!(player.state().current_track, origin);
    }

    /// Muting twice restores the original flag, whatever came before
    #[test]
    fn prop_toggle_mute_twice_is_identity(ops in player_ops_strategy(30)) {
        let mut player = player(3);
        for op in &ops {
            apply(&mut player, op);
        }
        let before = player.state();

        player.toggle_mute();
        player.toggle_mute();

        prop_assert_eq!(player.state(), before);
    }

    /// The current index never leaves the catalog
    #[test]
    fn prop_current_track_in_range(len in 1..6usize, ops in player_ops_strategy(50)) {
        let mut player = player(len);
        for op in &ops {
            apply(&mut player, op);
            prop_assert!(player.state().current_track < len);
        }
    }

    /// Closing an already-closed list changes nothing
    #[test]
    fn prop_close_list_when_closed_is_noop(ops in player_ops_strategy(30)) {
        let mut player = player(3);
        for op in &ops {
            apply(&mut player, op);
        }
        player.close_track_list();
        let before = player.state();

        prop_assert!(!player.close_track_list());
        prop_assert_eq!(player.state(), before);
    }

    /// Once accepted, the invitation stays accepted and never re-transitions
    #[test]
    fn prop_accept_is_one_way(calls in 1..20usize) {
        let mut invitation = Invitation::new();
        let transitions = (0..calls).filter(|_| invitation.accept()).count();

        prop_assert_eq!(transitions, 1);
        prop_assert!(invitation.is_accepted());
    }
}
