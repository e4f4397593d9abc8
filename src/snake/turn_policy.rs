//! Turn selection after a correct answer.
//!
//! A turn is always a right angle: vertical headings turn Left/Right,
//! horizontal headings turn Up/Down. The policy decides which of the two.

use super::grid::{clearance, Heading, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How the new heading is picked among the perpendicular candidates.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum TurnPolicy {
    /// Coin flip between the two candidates.
    Uniform,
    /// Turn towards the farther wall; coin flip on a tie.
    #[default]
    #[serde(alias = "clearance")]
    #[value(alias = "clearance")]
    ClearanceMaximizing,
}

impl TurnPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uniform => "Uniform",
            Self::ClearanceMaximizing => "Clearance",
        }
    }

    /// Pick among an arbitrary candidate set. Returns `None` when empty.
    pub fn choose_from<R: Rng>(
        &self,
        candidates: &[Heading],
        head: Position,
        n: i16,
        rng: &mut R,
    ) -> Option<Heading> {
        match self {
            Self::Uniform => candidates.choose(rng).copied(),
            Self::ClearanceMaximizing => {
                let best = candidates.iter().map(|&h| clearance(head, h, n)).max()?;
                let widest: Vec<Heading> = candidates
                    .iter()
                    .copied()
                    .filter(|&h| clearance(head, h, n) == best)
                    .collect();
                widest.choose(rng).copied()
            }
        }
    }
}
