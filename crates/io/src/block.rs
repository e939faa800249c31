use std::io::BufRead;

use chrono::NaiveDateTime;

use rankscore_core::{ModelError, Ranking, RankingBuilder};

use crate::error::IoError;

/// One ranking as read, before date/time resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    pub source_id: String,
    pub datetime_text: String,
    pub names: Vec<String>,
}

impl RawBlock {
    /// Build the ranking once its timestamp is resolved (or known absent).
    pub fn into_ranking(self, timestamp: Option<NaiveDateTime>) -> Result<Ranking, IoError> {
        let mut builder = RankingBuilder::new(&self.source_id);
        if let Some(ts) = timestamp {
            builder = builder.timestamp(ts);
        }
        for name in &self.names {
            builder.push(name).map_err(|e| match e {
                ModelError::DuplicateItem { source_id, name } => {
                    IoError::DuplicateName { source_id, name }
                }
                other => IoError::Read(other.to_string()),
            })?;
        }
        Ok(builder.build())
    }
}

/// Strip periods and lowercase, so "R.J. Barrett" and "rj barrett" compare
/// equal downstream.
pub fn normalize_name(raw: &str) -> String {
    raw.replace('.', "").to_lowercase()
}

/// Parse blank-line-separated blocks from text. The final block may omit
/// its trailing blank line.
pub fn parse_blocks(text: &str) -> Result<Vec<RawBlock>, IoError> {
    collect_blocks(text.lines().enumerate())
}

/// Same as [`parse_blocks`], reading from any buffered source.
pub fn read_blocks<R: BufRead>(reader: R) -> Result<Vec<RawBlock>, IoError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line.map_err(|e| IoError::Read(e.to_string()))?);
    }
    collect_blocks(lines.iter().map(String::as_str).enumerate())
}

/// What the next content line of the current block means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expecting {
    Label,
    DateTime,
    Names,
}

fn collect_blocks<'a, I>(lines: I) -> Result<Vec<RawBlock>, IoError>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut blocks = Vec::new();
    let mut state = Expecting::Label;
    let mut source_id = String::new();
    let mut datetime_text = String::new();
    let mut names: Vec<String> = Vec::new();
    let mut last_line = 0;

    for (index, line) in lines {
        last_line = index + 1;

        if line.trim().is_empty() {
            match state {
                // consecutive separators between blocks are tolerated
                Expecting::Label => continue,
                Expecting::DateTime => {
                    return Err(IoError::TruncatedBlock { line: last_line });
                }
                Expecting::Names => {
                    if names.is_empty() {
                        return Err(IoError::TruncatedBlock { line: last_line });
                    }
                    blocks.push(RawBlock {
                        source_id: std::mem::take(&mut source_id),
                        datetime_text: std::mem::take(&mut datetime_text),
                        names: std::mem::take(&mut names),
                    });
                    state = Expecting::Label;
                }
            }
            continue;
        }

        match state {
            Expecting::Label => {
                source_id = line.trim().to_string();
                state = Expecting::DateTime;
            }
            Expecting::DateTime => {
                datetime_text = line.trim().to_string();
                state = Expecting::Names;
            }
            Expecting::Names => names.push(normalize_name(line.trim())),
        }
    }

    // final block without a trailing blank line
    match state {
        Expecting::Label => {}
        Expecting::DateTime => return Err(IoError::TruncatedBlock { line: last_line }),
        Expecting::Names => {
            if names.is_empty() {
                return Err(IoError::TruncatedBlock { line: last_line });
            }
            blocks.push(RawBlock { source_id, datetime_text, names });
        }
    }

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
NBA
June 22, 2017 7pm
Markelle Fultz
Lonzo Ball

ESPN
6/20/17
Markelle Fultz
Lonzo Ball
";

    #[test]
    fn two_blocks() {
        let blocks = parse_blocks(INPUT).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].source_id, "NBA");
        assert_eq!(blocks[0].datetime_text, "June 22, 2017 7pm");
        assert_eq!(blocks[0].names, vec!["markelle fultz", "lonzo ball"]);
        assert_eq!(blocks[1].source_id, "ESPN");
    }

    #[test]
    fn final_block_needs_no_trailing_blank() {
        let blocks = parse_blocks("NBA\n1/13/17\nsolo name").unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].names, vec!["solo name"]);
    }

    #[test]
    fn names_are_normalized() {
        let blocks = parse_blocks("NBA\n1/13/17\nR.J. Barrett\nDe'Aaron Fox\n").unwrap();
        assert_eq!(blocks[0].names, vec!["rj barrett", "de'aaron fox"]);
    }

    #[test]
    fn blank_line_runs_between_blocks_tolerated() {
        let text = "NBA\n1/13/17\nname one\n\n\n\nESPN\n1/14/17\nname one\n";
        let blocks = parse_blocks(text).unwrap();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn truncated_block_is_an_error() {
        assert!(matches!(
            parse_blocks("NBA\n"),
            Err(IoError::TruncatedBlock { .. })
        ));
        assert!(matches!(
            parse_blocks("NBA\n1/13/17\n\n"),
            Err(IoError::TruncatedBlock { .. })
        ));
    }

    #[test]
    fn read_blocks_from_reader() {
        let blocks = read_blocks(INPUT.as_bytes()).unwrap();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn into_ranking_carries_fields() {
        let block = parse_blocks(INPUT).unwrap().remove(0);
        let ranking = block.into_ranking(None).unwrap();
        assert_eq!(ranking.source_id(), "NBA");
        assert!(ranking.timestamp().is_none());
        assert_eq!(ranking.items(), &["markelle fultz", "lonzo ball"]);
    }

    #[test]
    fn duplicate_name_in_block_is_an_error() {
        let block = RawBlock {
            source_id: "ESPN".into(),
            datetime_text: "1/13/17".into(),
            names: vec!["same name".into(), "same name".into()],
        };
        assert!(matches!(
            block.into_ranking(None),
            Err(IoError::DuplicateName { .. })
        ));
    }
}
