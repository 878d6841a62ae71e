//! Topic classification result and the reply-parsing rule.

/// Whether a question is about wine or food pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    InDomain,
    OutOfDomain,
}

impl Topic {
    /// Interpret the classifier's free-text reply.
    ///
    /// In-domain iff the lowercased reply contains `"yes"` anywhere. Every other
    /// reply, including ambiguous or empty ones, is out-of-domain.
    pub fn from_reply(reply: &str) -> Self {
        if reply.to_lowercase().contains("yes") {
            Topic::InDomain
        } else {
            Topic::OutOfDomain
        }
    }

    pub fn is_in_domain(self) -> bool {
        self == Topic::InDomain
    }
}
