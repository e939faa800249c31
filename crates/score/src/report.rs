use chrono::NaiveDateTime;
use serde::Serialize;

use rankscore_core::Batch;

use crate::error::ScoreError;
use crate::{ratio, rbo};

/// One candidate's scores against the authoritative ranking.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreRow {
    pub source_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
    pub rbo: f64,
    pub sequence_ratio: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub authority: String,
    /// Requested persistence; absent means the per-pair default `1 - 1/l`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence: Option<f64>,
    pub rows: Vec<ScoreRow>,
}

/// Score every candidate in the batch. Pure: the batch is not mutated, so
/// this also runs on unreconciled data (at the cost of accuracy).
pub fn score_batch(batch: &Batch, p: Option<f64>) -> Result<ScoreReport, ScoreError> {
    let authoritative = batch.authoritative.items();
    let mut rows = Vec::with_capacity(batch.candidates.len());

    for candidate in &batch.candidates {
        rows.push(ScoreRow {
            source_id: candidate.source_id().to_string(),
            updated_at: candidate.timestamp(),
            rbo: rbo::score(authoritative, candidate.items(), p)?,
            sequence_ratio: ratio::sequence_ratio(authoritative, candidate.items()),
        });
    }

    Ok(ScoreReport {
        authority: batch.authoritative.source_id().to_string(),
        persistence: p,
        rows,
    })
}
