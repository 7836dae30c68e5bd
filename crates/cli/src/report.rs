// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text report for a flop analysis.
use std::fmt;

use callfold_eval::{Breakdown, Card, EquityResult};

/// Text report of the analysis of the hero cards and flop.
pub struct Report<'a> {
    hero: &'a [Card],
    flop: &'a [Card],
    res: &'a EquityResult,
}

impl<'a> Report<'a> {
    /// Creates a report for the given analysis.
    pub fn new(hero: &'a [Card], flop: &'a [Card], res: &'a EquityResult) -> Self {
        Self { hero, flop, res }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let res = self.res;
        writeln!(f, "Hero: {}", join_cards(self.hero, " "))?;
        writeln!(f, "Flop: {}", join_cards(self.flop, " "))?;
        writeln!(f, "Hand: {}", res.hero_rank())?;
        writeln!(f)?;

        writeln!(f, "Opponent holdings: {}", res.total())?;
        writeln!(f, "  {:<6}{:>5}  {:>5.1}%", "better", res.better(), res.behind_pct())?;
        writeln!(f, "  {:<6}{:>5}  {:>5.1}%", "worse", res.worse(), res.ahead_pct())?;
        writeln!(f, "  {:<6}{:>5}  {:>5.1}%", "tie", res.tie(), res.tie_pct())?;
        writeln!(f)?;

        writeln!(f, "Better hands:")?;
        write_breakdown(f, res.better_breakdown())?;
        writeln!(f)?;

        writeln!(f, "Worse hands:")?;
        write_breakdown(f, res.worse_breakdown())?;
        writeln!(f)?;

        writeln!(f, "Recommendation: {}", res.recommendation())
    }
}

fn write_breakdown(f: &mut fmt::Formatter<'_>, breakdown: &Breakdown) -> fmt::Result {
    if breakdown.is_empty() {
        return writeln!(f, "  none");
    }

    for (rank, stats) in breakdown.by_count() {
        let samples = stats
            .samples()
            .iter()
            .map(|pair| join_cards(pair, ""))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "  {:<16}{:>5}  {samples}", rank.label(), stats.count())?;
    }

    Ok(())
}

fn join_cards(cards: &[Card], sep: &str) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use callfold_eval::{analyze, parse_cards};

    fn report(hero: &str, flop: &str) -> String {
        let hero = parse_cards(hero, 2).unwrap();
        let flop = parse_cards(flop, 3).unwrap();
        let res = analyze(&hero, &flop).unwrap();
        Report::new(&hero, &flop, &res).to_string()
    }

    #[test]
    fn pair_of_aces_report() {
        let out = report("ah ad", "kc 7h 2d");
        let lines = out.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Hero: Ah Ad");
        assert_eq!(lines[1], "Flop: Kc 7h 2d");
        assert_eq!(lines[2], "Hand: One Pair");
        assert_eq!(lines[4], "Opponent holdings: 1081");
        assert_eq!(lines[5], "  better   36    3.3%");
        assert_eq!(lines[6], "  worse  1044   96.6%");
        assert_eq!(lines[7], "  tie       1    0.1%");
        assert_eq!(lines[9], "Better hands:");
        assert_eq!(lines[10], "  Two Pair           27  2s7s 2s7d 2s7c");
        assert_eq!(lines[11], "  Three of a Kind     9  2s2h 2s2c 2h2c");
        assert_eq!(lines[13], "Worse hands:");
        assert_eq!(lines[14], "  High Card         648  3s4s 3s4h 3s4d");
        assert_eq!(lines[15], "  One Pair          396  2s3s 2s3h 2s3d");
        assert_eq!(lines.last(), Some(&"Recommendation: Call"));
    }

    #[test]
    fn empty_breakdown_report() {
        let out = report("Kc Qc", "Jc Tc 9c");
        assert!(out.contains("Hand: Straight Flush\n"));
        assert!(out.contains("Better hands:\n  none\n"));
        assert!(out.contains("  Straight Flush      1  7c8c\n"));
    }

    #[test]
    fn fold_report() {
        let out = report("7s 2d", "Kh Qh 9c");
        assert!(out.contains("Hand: High Card\n"));
        assert!(out.ends_with("Recommendation: Fold\n"));
    }
}
