//! UI Components for the concert invitation.
//!
//! Dark card, amber accents, everything animated with CSS.

mod concert_card;
mod confetti_overlay;
mod equalizer;
pub mod icons;
mod music_player;
mod rsvp_button;
mod star_field;
mod track_list;

pub use concert_card::ConcertCard;
pub use confetti_overlay::ConfettiOverlay;
pub use music_player::MusicPlayer;
pub use star_field::StarField;
