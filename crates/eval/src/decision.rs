// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Call or fold decision.
use serde::Serialize;
use std::fmt;

/// The action suggested to the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Recommendation {
    /// Continue in the hand.
    Call,
    /// Give up the hand.
    Fold,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Call => f.write_str("Call"),
            Recommendation::Fold => f.write_str("Fold"),
        }
    }
}

/// Folds when more opponent holdings beat the hero than lose to it.
pub fn decide(better: u32, worse: u32) -> Recommendation {
    if better > worse {
        Recommendation::Fold
    } else {
        Recommendation::Call
    }
}
