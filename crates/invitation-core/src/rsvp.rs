//! RSVP state machine.
//!
//! `Pending → Accepted`, and nothing leads back.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RsvpState {
    #[default]
    Pending,
    Accepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Invitation {
    state: RsvpState,
}

impl Invitation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RsvpState {
        self.state
    }

    pub fn is_accepted(&self) -> bool {
        self.state == RsvpState::Accepted
    }

    /// Move to `Accepted`. Returns true only for the call that made the
    /// transition.
    pub fn accept(&mut self) -> bool {
        match self.state {
            RsvpState::Pending => {
                self.state = RsvpState::Accepted;
                true
            }
            RsvpState::Accepted => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_once() {
        let mut invitation = Invitation::new();
        assert_eq!(invitation.state(), RsvpState::Pending);

        assert!(invitation.accept());
        assert!(invitation.is_accepted());

        assert!(!invitation.accept());
        assert!(!invitation.accept());
        assert_eq!(invitation.state(), RsvpState::Accepted);
    }
}
