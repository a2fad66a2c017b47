//! Theme for the concert invitation.

mod styles;

pub use styles::GLOBAL_STYLES;
