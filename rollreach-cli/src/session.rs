//! Delta bookkeeping between successive evaluations.

use serde::Serialize;

use rollreach_engine::TailOutcome;

/// Win / partial-win / loss triple for one evaluation. Loss is derived here,
/// never by the engine, and clamped at zero against rounding residue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProbabilitySnapshot {
    pub win: f64,
    pub partial_win: f64,
    pub loss: f64,
}

impl ProbabilitySnapshot {
    #[must_use]
    pub fn from_outcome(outcome: TailOutcome) -> Self {
        let loss = 1.0 - outcome.win_probability - outcome.partial_win_probability;
        Self {
            win: outcome.win_probability,
            partial_win: outcome.partial_win_probability,
            loss: loss.max(0.0),
        }
    }
}

/// Signed change against the previous evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnapshotDeltas {
    pub win: f64,
    pub partial_win: f64,
    pub loss: f64,
}

/// Tracks the previous snapshot so each evaluation can report deltas.
///
/// A fresh session starts from the certain-loss baseline (win 0, partial 0,
/// loss 1): before any roll the player has lost by definition, so the first
/// real evaluation reports how far the parameters move away from that.
#[derive(Debug, Clone)]
pub struct SessionTracker {
    previous: ProbabilitySnapshot,
}

impl SessionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            previous: ProbabilitySnapshot {
                win: 0.0,
                partial_win: 0.0,
                loss: 1.0,
            },
        }
    }

    /// Record `snapshot` and return its deltas against the previous one.
    pub fn observe(&mut self, snapshot: ProbabilitySnapshot) -> SnapshotDeltas {
        let deltas = SnapshotDeltas {
            win: snapshot.win - self.previous.win,
            partial_win: snapshot.partial_win - self.previous.partial_win,
            loss: snapshot.loss - self.previous.loss,
        };
        self.previous = snapshot;
        deltas
    }
}

impl Default for SessionTracker {
    fn default() -> Self {
        Self::new()
    }
}
