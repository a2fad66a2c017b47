//! Reveal sequence for the card's content blocks.
//!
//! Each block starts hidden and plays a one-shot CSS animation after a
//! fixed delay, so the card assembles top to bottom.

use std::time::Duration;

/// Keyframe animation a block enters with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAnimation {
    /// Fade in while rising 20px
    FadeSlideUp,
    /// Fade in while growing from 80%
    ScaleIn,
}

impl RevealAnimation {
    /// Name of the matching `@keyframes` rule.
    pub fn keyframes(&self) -> &'static str {
        match self {
            RevealAnimation::FadeSlideUp => "fadeSlideUp",
            RevealAnimation::ScaleIn => "scaleIn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealBlock {
    Artist,
    Title,
    Tour,
    CityBadge,
    Date,
    Venue,
    StartTime,
    Guest,
    Footer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub block: RevealBlock,
    pub animation: RevealAnimation,
    pub duration: Duration,
    pub delay: Duration,
}

const fn step(
    block: RevealBlock,
    animation: RevealAnimation,
    duration_ms: u64,
    delay_ms: u64,
) -> RevealStep {
    RevealStep {
        block,
        animation,
        duration: Duration::from_millis(duration_ms),
        delay: Duration::from_millis(delay_ms),
    }
}

/// The card's reveal order.
pub const REVEAL_SEQUENCE: [RevealStep; 9] = [
    step(RevealBlock::Artist, RevealAnimation::FadeSlideUp, 600, 300),
    step(RevealBlock::Title, RevealAnimation::FadeSlideUp, 800, 500),
    step(RevealBlock::Tour, RevealAnimation::FadeSlideUp, 600, 700),
    step(RevealBlock::CityBadge, RevealAnimation::ScaleIn, 1000, 900),
    step(RevealBlock::Date, RevealAnimation::FadeSlideUp, 600, 1200),
    step(RevealBlock::Venue, RevealAnimation::FadeSlideUp, 600, 1400),
    step(RevealBlock::StartTime, RevealAnimation::FadeSlideUp, 600, 1600),
    step(RevealBlock::Guest, RevealAnimation::FadeSlideUp, 600, 1800),
    step(RevealBlock::Footer, RevealAnimation::FadeSlideUp, 800, 2000),
];

impl RevealStep {
    /// Inline `animation` declaration, e.g. `fadeSlideUp 0.6s forwards 0.3s`.
    pub fn css_animation(&self) -> String {
        format!(
            "{} {}s forwards {}s",
            self.animation.keyframes(),
            secs(self.duration),
            secs(self.delay)
        )
    }
}

fn secs(d: Duration) -> f64 {
    d.as_millis() as f64 / 1000.0
}

/// Look up a block's step.
pub fn reveal_step(block: RevealBlock) -> RevealStep {
    REVEAL_SEQUENCE
        .iter()
        .copied()
        .find(|s| s.block == block)
        .unwrap_or(REVEAL_SEQUENCE[0])
}

/// Inline style for a block: hidden and waiting until mounted, animating
/// afterwards.
pub fn reveal_style(block: RevealBlock, mounted: bool) -> String {
    if mounted {
        format!("opacity: 0; animation: {};", reveal_step(block).css_animation())
    } else {
        "opacity: 0;".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_strictly_increase() {
        for pair in REVEAL_SEQUENCE.windows(2) {
            assert!(pair[0].delay < pair[1].delay, "{:?} before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_every_block_listed_once() {
        let blocks = [
            RevealBlock::Artist,
            RevealBlock::Title,
            RevealBlock::Tour,
            RevealBlock::CityBadge,
            RevealBlock::Date,
            RevealBlock::Venue,
            RevealBlock::StartTime,
            RevealBlock::Guest,
            RevealBlock::Footer,
        ];
        for block in blocks {
            let count = REVEAL_SEQUENCE.iter().filter(|s| s.block == block).count();
            assert_eq!(count, 1, "{:?}", block);
        }
    }

    #[test]
    fn test_css_animation() {
        assert_eq!(
            reveal_step(RevealBlock::Artist).css_animation(),
            "fadeSlideUp 0.6s forwards 0.3s"
        );
        assert_eq!(
            reveal_step(RevealBlock::CityBadge).css_animation(),
            "scaleIn 1s forwards 0.9s"
        );
        assert_eq!(
            reveal_step(RevealBlock::Footer).css_animation(),
            "fadeSlideUp 0.8s forwards 2s"
        );
    }

    #[test]
    fn test_style_waits_for_mount() {
        assert_eq!(reveal_style(RevealBlock::Date, false), "opacity: 0;");
        assert!(reveal_style(RevealBlock::Date, true).contains("forwards 1.2s"));
    }
}
