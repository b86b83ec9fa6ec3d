use maybe::{map2, present, sequence, Maybe};
use serde::Serialize;

use crate::input::Record;
use crate::steps::{self, Step};

/// Run-wide settings taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub steps: Vec<Step>,
    /// Substituted for records whose chain ended absent.
    pub default: Maybe<i64>,
}

/// Result of running one record through the step chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub line: usize,
    pub label: Maybe<String>,
    pub input: String,
    pub value: Maybe<i64>,
    /// Name of the step that first produced absence.
    pub stopped_at: Maybe<&'static str>,
    pub resolved: Maybe<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub records: usize,
    pub present: usize,
    /// Present only if every record resolved.
    pub all: Maybe<Vec<i64>>,
    /// Absent if any record is unresolved or the sum overflows.
    pub total: Maybe<i64>,
}

/// Parses `record` and threads it through `config.steps` with `flat_map`.
pub fn evaluate(record: &Record, config: &PipelineConfig) -> Outcome {
    let parsed = steps::parse_value(&record.raw);
    let mut stopped_at: Maybe<&'static str> = if parsed.is_absent() {
        present("parse")
    } else {
        Maybe::nothing()
    };

    // flat_map skips every step after the first absent one, so stopped_at
    // is written at most once.
    let value = config.steps.iter().fold(parsed, |acc, step| {
        acc.flat_map(|v| {
            let next = step.apply(v);
            if next.is_absent() {
                tracing::debug!(line = record.line, step = step.name(), input = v, "step produced no value");
                stopped_at = present(step.name());
            }
            next
        })
    });

    let resolved = match config.default.try_get() {
        Ok(dflt) => present(value.get_or_else(*dflt)),
        Err(_) => value,
    };

    Outcome {
        line: record.line,
        label: record.label.clone(),
        input: record.raw.clone(),
        value,
        stopped_at,
        resolved,
    }
}

pub fn summarize(outcomes: &[Outcome]) -> Summary {
    let all = sequence(outcomes.iter().map(|o| o.resolved));
    let total = outcomes
        .iter()
        .fold(present(0i64), |acc, o| {
            // an overflowing sum has no value, same as an overflowing step
            map2(&acc, &o.resolved, |a, b| a.checked_add(*b)).flat_map(Maybe::from)
        });

    Summary {
        records: outcomes.len(),
        present: outcomes.iter().filter(|o| o.value.is_present()).count(),
        all,
        total,
    }
}
