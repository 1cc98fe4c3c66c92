//! What the relay does with a recipient it could not send to.

/// Send-failure policy applied during a relay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendFailurePolicy {
    /// Log the failure and leave removal to the recipient's own close path
    #[default]
    Ignore,
    /// Remove the recipient from the registry right away
    Evict,
}

impl SendFailurePolicy {
    pub fn from_evict_flag(evict: bool) -> Self {
        if evict { Self::Evict } else { Self::Ignore }
    }

    pub fn evicts(&self) -> bool {
        matches!(self, Self::Evict)
    }
}
