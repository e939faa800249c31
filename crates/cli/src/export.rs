//! CSV export of the score report.

use std::path::Path;

use rankscore_score::ScoreReport;

use crate::exit_codes::EXIT_ERROR;
use crate::CliError;

pub fn write_csv(report: &ScoreReport, path: &Path) -> Result<(), CliError> {
    let fail = |e: csv::Error| CliError {
        code: EXIT_ERROR,
        message: format!("cannot write {}: {e}", path.display()),
        hint: None,
    };

    let mut writer = csv::Writer::from_path(path).map_err(fail)?;
    writer
        .write_record(["organization", "updated_at", "rbo", "sequence_ratio"])
        .map_err(fail)?;
    for row in &report.rows {
        let updated = row
            .updated_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        let rbo = format!("{:.6}", row.rbo);
        let ratio = format!("{:.6}", row.sequence_ratio);
        writer
            .write_record([row.source_id.as_str(), updated.as_str(), rbo.as_str(), ratio.as_str()])
            .map_err(fail)?;
    }
    writer.flush().map_err(|e| CliError {
        code: EXIT_ERROR,
        message: format!("cannot write {}: {e}", path.display()),
        hint: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankscore_score::ScoreRow;

    #[test]
    fn round_trips_through_disk() {
        let report = ScoreReport {
            authority: "nba".into(),
            persistence: None,
            rows: vec![ScoreRow {
                source_id: "espn".into(),
                updated_at: None,
                rbo: 0.855,
                sequence_ratio: 0.5,
            }],
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        write_csv(&report, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("organization,updated_at,rbo,sequence_ratio"));
        assert_eq!(lines.next(), Some("espn,,0.855000,0.500000"));
    }
}
