use crate::error::ModelError;
use crate::model::Ranking;

/// Labels recognized as authoritative when no config overrides them.
pub const DEFAULT_AUTHORITIES: &[&str] = &["nba", "nfl", "nhl"];

/// One scoring unit: the authoritative ranking plus the candidates
/// evaluated against it.
#[derive(Debug)]
pub struct Batch {
    pub authoritative: Ranking,
    pub candidates: Vec<Ranking>,
}

impl Batch {
    /// Split rankings into exactly one authoritative ranking + candidates.
    ///
    /// A ranking is authoritative when its source label case-insensitively
    /// matches one of `authorities`. Zero or multiple authoritative
    /// rankings, or zero candidates, abort the batch.
    pub fn partition(rankings: Vec<Ranking>, authorities: &[String]) -> Result<Self, ModelError> {
        let mut authoritative: Option<Ranking> = None;
        let mut candidates = Vec::new();

        for ranking in rankings {
            if is_authority(ranking.source_id(), authorities) {
                if let Some(ref first) = authoritative {
                    return Err(ModelError::MultipleAuthoritative {
                        first: first.source_id().to_string(),
                        second: ranking.source_id().to_string(),
                    });
                }
                authoritative = Some(ranking);
            } else {
                candidates.push(ranking);
            }
        }

        let authoritative = authoritative.ok_or(ModelError::NoAuthoritative)?;
        if candidates.is_empty() {
            return Err(ModelError::NoCandidates);
        }

        Ok(Self { authoritative, candidates })
    }
}

fn is_authority(label: &str, authorities: &[String]) -> bool {
    authorities.iter().any(|a| a.eq_ignore_ascii_case(label))
}
