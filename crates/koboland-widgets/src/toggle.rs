//! Toggle State Machines
//!
//! Pure transitions shared by every widget adapter:
//! - tri-state vote (like / no vote / dislike) with two counters
//! - binary toggle, optionally carrying a counter (share, follow)

use serde::{Deserialize, Serialize};

/// Non-negative counter that never goes below zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Counter(u32);

impl Counter {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Apply a signed delta, clamping at zero
    pub fn apply(&mut self, delta: i32) {
        self.0 = self.0.saturating_add_signed(delta);
    }
}

/// Vote state of one user on one votable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Vote {
    Dislike,
    #[default]
    NoVote,
    Like,
}

impl Vote {
    pub fn as_i8(&self) -> i8 {
        match self {
            Vote::Dislike => -1,
            Vote::NoVote => 0,
            Vote::Like => 1,
        }
    }

    /// Parse the server-rendered value. Empty or unknown means no vote.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("1") => Vote::Like,
            Some("-1") => Vote::Dislike,
            _ => Vote::NoVote,
        }
    }
}

impl From<Vote> for i8 {
    fn from(vote: Vote) -> i8 {
        vote.as_i8()
    }
}

impl TryFrom<i8> for Vote {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Vote::Dislike),
            0 => Ok(Vote::NoVote),
            1 => Ok(Vote::Like),
            other => Err(format!("unknown vote type {}", other)),
        }
    }
}

/// Result of one vote transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTransition {
    pub next: Vote,
    pub like_delta: i32,
    pub dislike_delta: i32,
}

/// Compute the next vote and the counter deltas.
///
/// Requesting the active vote clears it. Requesting the opposite vote moves
/// both counters at once. Requesting `NoVote` clears whatever is active.
pub fn transition(current: Vote, requested: Vote) -> VoteTransition {
    let next = if requested == current { Vote::NoVote } else { requested };
    let mut like_delta = 0;
    let mut dislike_delta = 0;

    match current {
        Vote::Like => like_delta -= 1,
        Vote::Dislike => dislike_delta -= 1,
        Vote::NoVote => {}
    }
    match next {
        Vote::Like => like_delta += 1,
        Vote::Dislike => dislike_delta += 1,
        Vote::NoVote => {}
    }

    VoteTransition { next, like_delta, dislike_delta }
}

/// Tri-state vote plus its two counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteTally {
    pub vote: Vote,
    pub likes: Counter,
    pub dislikes: Counter,
}

impl VoteTally {
    pub fn new(vote: Vote, likes: u32, dislikes: u32) -> Self {
        Self {
            vote,
            likes: Counter::new(likes),
            dislikes: Counter::new(dislikes),
        }
    }

    /// Apply a requested vote in place and return the transition taken
    pub fn request(&mut self, requested: Vote) -> VoteTransition {
        let step = transition(self.vote, requested);
        self.vote = step.next;
        self.likes.apply(step.like_delta);
        self.dislikes.apply(step.dislike_delta);
        step
    }
}

/// Binary toggle with an optional counter that follows the forward edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BinaryToggle {
    pub active: bool,
    pub count: Option<Counter>,
}

impl BinaryToggle {
    pub fn new(active: bool) -> Self {
        Self { active, count: None }
    }

    pub fn counted(active: bool, count: u32) -> Self {
        Self {
            active,
            count: Some(Counter::new(count)),
        }
    }

    /// Flip the state and return the new value
    pub fn flip(&mut self) -> bool {
        self.active = !self.active;
        if let Some(count) = self.count.as_mut() {
            count.apply(if self.active { 1 } else { -1 });
        }
        self.active
    }

    pub fn count(&self) -> u32 {
        self.count.map(|c| c.get()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use Vote::*;
        let table = [
            (NoVote, Like, Like, 1, 0),
            (Like, Like, NoVote, -1, 0),
            (Dislike, Like, Like, 1, -1),
            (NoVote, Dislike, Dislike, 0, 1),
            (Dislike, Dislike, NoVote, 0, -1),
            (Like, Dislike, Dislike, -1, 1),
        ];
        for (current, requested, next, like_delta, dislike_delta) in table {
            assert_eq!(
                transition(current, requested),
                VoteTransition { next, like_delta, dislike_delta },
                "{:?} -> {:?}",
                current,
                requested
            );
        }
    }

    #[test]
    fn test_clear_request() {
        assert_eq!(transition(Vote::Like, Vote::NoVote).like_delta, -1);
        assert_eq!(transition(Vote::Dislike, Vote::NoVote).dislike_delta, -1);
        let idle = transition(Vote::NoVote, Vote::NoVote);
        assert_eq!(idle, VoteTransition { next: Vote::NoVote, like_delta: 0, dislike_delta: 0 });
    }

    #[test]
    fn test_counter_clamps_at_zero() {
        let mut counter = Counter::new(0);
        counter.apply(-1);
        assert_eq!(counter.get(), 0);
        counter.apply(2);
        counter.apply(-1);
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn test_tally_clamps_inconsistent_counts() {
        // Server says LIKE but like count is 0
        let mut tally = VoteTally::new(Vote::Like, 0, 0);
        tally.request(Vote::Dislike);
        assert_eq!(tally.vote, Vote::Dislike);
        assert_eq!(tally.likes.get(), 0);
        assert_eq!(tally.dislikes.get(), 1);
    }

    #[test]
    fn test_double_like_restores() {
        let mut tally = VoteTally::new(Vote::NoVote, 5, 2);
        let original = tally;
        tally.request(Vote::Like);
        tally.request(Vote::Like);
        assert_eq!(tally, original);
    }

    #[test]
    fn test_binary_toggle_involution() {
        for active in [false, true] {
            let mut toggle = BinaryToggle::counted(active, 3);
            let original = toggle;
            toggle.flip();
            toggle.flip();
            assert_eq!(toggle, original);
        }
        let mut plain = BinaryToggle::new(false);
        assert!(plain.flip());
        assert!(!plain.flip());
        assert_eq!(plain.count(), 0);
    }

    #[test]
    fn test_vote_parsing() {
        assert_eq!(Vote::from_attr(Some("1")), Vote::Like);
        assert_eq!(Vote::from_attr(Some(" -1 ")), Vote::Dislike);
        assert_eq!(Vote::from_attr(Some("0")), Vote::NoVote);
        assert_eq!(Vote::from_attr(Some("null")), Vote::NoVote);
        assert_eq!(Vote::from_attr(None), Vote::NoVote);
        assert!(Vote::try_from(2).is_err());
    }
}
