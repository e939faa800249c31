use serde::Serialize;

use rankscore_core::Ranking;

use crate::config::MatcherConfig;
use crate::error::ReconError;
use crate::matcher::close_matches;
use crate::oracle::{Decision, MatchOracle};
use crate::session::ReconSession;

/// What reconciliation did to the batch. Success is structural (candidate
/// labels rewritten in place); the stats exist for operator feedback.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ReconStats {
    pub rewrites: usize,
    pub confirmed: usize,
    pub rejected: usize,
    pub prompts: usize,
}

/// Align candidate rankings with the authoritative one.
///
/// Canonical names are resolved in authoritative rank order, so when two
/// authoritative names could both claim the same candidate string, the
/// higher-ranked name wins. For each (name, candidate) pair: a verbatim hit
/// is left alone; a variant already confirmed this batch is rewritten
/// without asking; otherwise approximate matches are offered to the oracle
/// most-similar first, skipping variants already rejected for this name and
/// names that are themselves authoritative. An unconfirmed pair is left
/// unresolved.
pub fn reconcile(
    authoritative: &Ranking,
    candidates: &mut [Ranking],
    session: &mut ReconSession,
    oracle: &mut dyn MatchOracle,
    config: &MatcherConfig,
) -> Result<ReconStats, ReconError> {
    config.validate()?;

    let mut stats = ReconStats::default();

    for name in authoritative.items() {
        for candidate in candidates.iter_mut() {
            if candidate.contains(name) {
                continue;
            }

            let on_file = session
                .confirmed_variants(name)
                .find(|variant| candidate.contains(variant))
                .map(str::to_string);
            if let Some(variant) = on_file {
                candidate
                    .rewrite(&variant, name)
                    .map_err(|e| ReconError::Defect(e.to_string()))?;
                stats.rewrites += 1;
                continue;
            }

            // matcher borrows a snapshot so the rewrite below can mutate
            let pool: Vec<String> = candidate.items().to_vec();
            for (variant, _score) in close_matches(name, &pool, config.cutoff) {
                if session.is_rejected(name, variant) || authoritative.contains(variant) {
                    continue;
                }
                stats.prompts += 1;
                match oracle.confirm(name, variant)? {
                    Decision::Same => {
                        session.record_confirmed(name, variant);
                        candidate
                            .rewrite(variant, name)
                            .map_err(|e| ReconError::Defect(e.to_string()))?;
                        stats.confirmed += 1;
                        stats.rewrites += 1;
                        break;
                    }
                    Decision::Different => {
                        session.record_rejected(name, variant);
                        stats.rejected += 1;
                    }
                }
            }
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankscore_core::RankingBuilder;
    use std::collections::VecDeque;

    fn ranking(source: &str, names: &[&str]) -> Ranking {
        let mut b = RankingBuilder::new(source);
        for n in names {
            b.push(*n).unwrap();
        }
        b.build()
    }

    /// Scripted oracle: pops pre-baked decisions and records every prompt.
    struct Script {
        answers: VecDeque<Decision>,
        asked: Vec<(String, String)>,
    }

    impl Script {
        fn new(answers: &[Decision]) -> Self {
            Self { answers: answers.iter().copied().collect(), asked: Vec::new() }
        }
    }

    impl MatchOracle for Script {
        fn confirm(&mut self, canonical: &str, variant: &str) -> Result<Decision, ReconError> {
            self.asked.push((canonical.to_string(), variant.to_string()));
            self.answers
                .pop_front()
                .ok_or_else(|| ReconError::Oracle("script exhausted".into()))
        }
    }

    #[test]
    fn confirmed_variant_rewritten_in_place() {
        let authoritative = ranking("nba", &["robert jones", "alvin smith"]);
        let mut candidates = vec![ranking("espn", &["robert joens", "alvin smith"])];
        let mut session = ReconSession::new();
        let mut oracle = Script::new(&[Decision::Same]);

        let stats = reconcile(
            &authoritative,
            &mut candidates,
            &mut session,
            &mut oracle,
            &MatcherConfig::default(),
        )
        .unwrap();

        assert_eq!(candidates[0].items(), &["robert jones", "alvin smith"]);
        assert_eq!(stats.rewrites, 1);
        assert_eq!(stats.confirmed, 1);
        assert_eq!(oracle.asked.len(), 1);
        assert_eq!(oracle.asked[0], ("robert jones".to_string(), "robert joens".to_string()));
    }

    #[test]
    fn rejected_variant_left_alone_and_not_reprompted() {
        let authoritative = ranking("nba", &["robert jones"]);
        // the same variant appears in two candidate lists
        let mut candidates = vec![
            ranking("espn", &["rupert jones"]),
            ranking("cbs", &["rupert jones"]),
        ];
        let mut session = ReconSession::new();
        let mut oracle = Script::new(&[Decision::Different]);

        let stats = reconcile(
            &authoritative,
            &mut candidates,
            &mut session,
            &mut oracle,
            &MatcherConfig::default(),
        )
        .unwrap();

        assert_eq!(candidates[0].items(), &["rupert jones"]);
        assert_eq!(candidates[1].items(), &["rupert jones"]);
        assert_eq!(stats.rewrites, 0);
        // one question covers both lists
        assert_eq!(oracle.asked.len(), 1);
    }

    #[test]
    fn confirmed_variant_reused_across_lists_without_asking() {
        let authoritative = ranking("nba", &["robert jones"]);
        let mut candidates = vec![
            ranking("espn", &["robert joens"]),
            ranking("cbs", &["robert joens"]),
        ];
        let mut session = ReconSession::new();
        let mut oracle = Script::new(&[Decision::Same]);

        reconcile(
            &authoritative,
            &mut candidates,
            &mut session,
            &mut oracle,
            &MatcherConfig::default(),
        )
        .unwrap();

        assert_eq!(candidates[0].items(), &["robert jones"]);
        assert_eq!(candidates[1].items(), &["robert jones"]);
        assert_eq!(oracle.asked.len(), 1);
    }

    #[test]
    fn authoritative_names_never_offered_as_variants() {
        // "alvin smith" and "alvin smyth" are both authoritative; a
        // candidate listing "alvin smyth" must not be asked about it when
        // resolving "alvin smith"
        let authoritative = ranking("nba", &["alvin smith", "alvin smyth"]);
        let mut candidates = vec![ranking("espn", &["alvin smyth"])];
        let mut session = ReconSession::new();
        let mut oracle = Script::new(&[]);

        let stats = reconcile(
            &authoritative,
            &mut candidates,
            &mut session,
            &mut oracle,
            &MatcherConfig::default(),
        )
        .unwrap();

        assert_eq!(candidates[0].items(), &["alvin smyth"]);
        assert_eq!(stats.prompts, 0);
    }

    #[test]
    fn higher_rank_claims_ambiguous_variant_first() {
        let authoritative = ranking("nba", &["jon smith", "jan smith"]);
        let mut candidates = vec![ranking("espn", &["jen smith"])];
        let mut session = ReconSession::new();
        // first question must be for the rank-1 name
        let mut oracle = Script::new(&[Decision::Same]);

        reconcile(
            &authoritative,
            &mut candidates,
            &mut session,
            &mut oracle,
            &MatcherConfig::default(),
        )
        .unwrap();

        assert_eq!(oracle.asked[0].0, "jon smith");
        assert_eq!(candidates[0].items(), &["jon smith"]);
    }

    #[test]
    fn second_pass_is_idempotent() {
        let authoritative = ranking("nba", &["robert jones", "alvin smith"]);
        let mut candidates = vec![ranking("espn", &["robert joens", "alvin smithe"])];
        let mut session = ReconSession::new();
        let mut oracle = Script::new(&[Decision::Same, Decision::Different]);

        reconcile(
            &authoritative,
            &mut candidates,
            &mut session,
            &mut oracle,
            &MatcherConfig::default(),
        )
        .unwrap();
        let after_first = candidates[0].items().to_vec();
        let asked_first = oracle.asked.len();

        let stats = reconcile(
            &authoritative,
            &mut candidates,
            &mut session,
            &mut oracle,
            &MatcherConfig::default(),
        )
        .unwrap();

        assert_eq!(candidates[0].items(), after_first.as_slice());
        assert_eq!(stats.rewrites, 0);
        assert_eq!(oracle.asked.len(), asked_first);
    }

    #[test]
    fn oracle_failure_propagates() {
        let authoritative = ranking("nba", &["robert jones"]);
        let mut candidates = vec![ranking("espn", &["robert joens"])];
        let mut session = ReconSession::new();
        let mut oracle = Script::new(&[]);

        let err = reconcile(
            &authoritative,
            &mut candidates,
            &mut session,
            &mut oracle,
            &MatcherConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ReconError::Oracle(_)));
    }
}
