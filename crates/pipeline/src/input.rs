use anyhow::{bail, Result};
use maybe::{Maybe, Nothing, present};
use regex::Regex;

/// One input line: an optional label and the raw value text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: usize,
    pub label: Maybe<String>,
    pub raw: String,
}

/// Parse records from `content`, one per line.
///
/// Accepts `value` or `label: value`. Blank lines and `#` comments are
/// skipped. Anything else is an error naming the offending line.
pub fn parse_records(content: &str) -> Result<Vec<Record>> {
    let record_re = Regex::new(r"^(?:(?P<label>[^:]+?)\s*:\s*)?(?P<value>[^\s:]+)$")?;

    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some(captures) = record_re.captures(trimmed) else {
            bail!("Malformed record on line {}: {:?}", line_no, trimmed);
        };

        let label = match captures.name("label") {
            Some(m) => present(m.as_str().to_string()),
            None => Nothing.into(),
        };
        records.push(Record {
            line: line_no,
            label,
            raw: captures["value"].to_string(),
        });
    }

    tracing::debug!(count = records.len(), "parsed input records");
    Ok(records)
}
