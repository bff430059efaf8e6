//! Per-neighborhood counters.

use crate::model::Cost;

/// Counts how a neighborhood's proposals were resolved.
///
/// `improvements`, `sideways` and `worsenings` classify accepted proposals
/// by the sign of their delta.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveStats {
    /// Proposals produced by `do_move`.
    pub proposals: u64,
    /// Proposals committed by `accept`.
    pub accepts: u64,
    /// Proposals undone by `reject`.
    pub rejects: u64,
    /// Accepted proposals with a negative delta.
    pub improvements: u64,
    /// Accepted proposals with a zero delta.
    pub sideways: u64,
    /// Accepted proposals with a positive delta.
    pub worsenings: u64,
}

impl MoveStats {
    #[inline]
    pub fn on_proposal(&mut self) {
        self.proposals = self.proposals.saturating_add(1);
    }

    #[inline]
    pub fn on_accept(&mut self, delta: Cost) {
        self.accepts = self.accepts.saturating_add(1);
        match delta.signum() {
            -1 => self.improvements = self.improvements.saturating_add(1),
            0 => self.sideways = self.sideways.saturating_add(1),
            _ => self.worsenings = self.worsenings.saturating_add(1),
        }
    }

    #[inline]
    pub fn on_reject(&mut self) {
        self.rejects = self.rejects.saturating_add(1);
    }

    /// Proposals that have been neither accepted nor rejected yet.
    #[inline]
    pub fn pending(&self) -> u64 {
        self.proposals
            .saturating_sub(self.accepts)
            .saturating_sub(self.rejects)
    }

    /// Fraction of resolved proposals that were accepted.
    pub fn acceptance_rate(&self) -> f64 {
        let resolved = self.accepts + self.rejects;
        if resolved == 0 {
            0.0
        } else {
            self.accepts as f64 / resolved as f64
        }
    }
}

impl std::fmt::Display for MoveStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "proposals: {}, accepts: {} (improving {}, sideways {}, worsening {}), rejects: {}",
            self.proposals,
            self.accepts,
            self.improvements,
            self.sideways,
            self.worsenings,
            self.rejects
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_accepts() {
        let mut stats = MoveStats::default();
        for delta in [-3, 0, 5, -1] {
            stats.on_proposal();
            stats.on_accept(delta);
        }
        stats.on_proposal();
        stats.on_reject();

        assert_eq!(stats.proposals, 5);
        assert_eq!(stats.accepts, 4);
        assert_eq!(stats.rejects, 1);
        assert_eq!(stats.improvements, 2);
        assert_eq!(stats.sideways, 1);
        assert_eq!(stats.worsenings, 1);
        assert_eq!(stats.pending(), 0);
        assert!((stats.acceptance_rate() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_pending_and_empty_rate() {
        let mut stats = MoveStats::default();
        assert_eq!(stats.acceptance_rate(), 0.0);
        stats.on_proposal();
        assert_eq!(stats.pending(), 1);
    }
}
