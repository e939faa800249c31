//! Fixed-width results table.

use rankscore_score::ScoreReport;

const ORG_HEADER: &str = "Organization";
const UPDATED_HEADER: &str = "Updated";
const MEASURES: [&str; 2] = ["RBO score", "Seq ratio"];

/// Render the score report as a pipe-delimited table, one row per
/// candidate, percentages to three decimals.
pub fn render_table(report: &ScoreReport) -> String {
    let org_width = report
        .rows
        .iter()
        .map(|r| r.source_id.len())
        .chain([ORG_HEADER.len()])
        .max()
        .unwrap_or(ORG_HEADER.len());

    let updated: Vec<String> = report
        .rows
        .iter()
        .map(|r| {
            r.updated_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default()
        })
        .collect();
    let updated_width = updated
        .iter()
        .map(String::len)
        .chain([UPDATED_HEADER.len()])
        .max()
        .unwrap_or(UPDATED_HEADER.len());

    let measure_widths: Vec<usize> = MEASURES.iter().map(|m| m.len().max(7)).collect();

    let mut header = format!("|{ORG_HEADER:^org_width$}|{UPDATED_HEADER:^updated_width$}");
    for (name, &width) in MEASURES.iter().zip(&measure_widths) {
        header.push_str(&format!("|{name:^width$}"));
    }
    header.push('|');
    let rule = "-".repeat(header.len());

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for (row, updated) in report.rows.iter().zip(&updated) {
        out.push_str(&format!("|{:<org_width$}|{updated:<updated_width$}", row.source_id));
        for (value, &width) in [row.rbo, row.sequence_ratio].iter().zip(&measure_widths) {
            let cell = format!("{:.3}%", value * 100.0);
            out.push_str(&format!("|{cell:>width$}"));
        }
        out.push_str("|\n");
    }
    out.push_str(&rule);
    out.push('\n');
    out
}
