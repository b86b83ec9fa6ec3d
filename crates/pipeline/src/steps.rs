use std::fmt;

use clap::ValueEnum;
use maybe::{Maybe, Nothing, present};
use serde::Serialize;

/// A fallible integer transformation. Each one yields an absent value
/// instead of overflowing or producing a non-integer result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Square,
    Sqrt,
    Halve,
    Negate,
    Decrement,
}

impl Step {
    pub fn name(self) -> &'static str {
        match self {
            Step::Square => "square",
            Step::Sqrt => "sqrt",
            Step::Halve => "halve",
            Step::Negate => "negate",
            Step::Decrement => "decrement",
        }
    }

    pub fn apply(self, v: i64) -> Maybe<i64> {
        match self {
            Step::Square => v.checked_mul(v).into(),
            Step::Sqrt => exact_sqrt(v),
            Step::Halve => halve(v),
            Step::Negate => v.checked_neg().into(),
            Step::Decrement => v.checked_sub(1).into(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a decimal integer, absent on any parse failure.
pub fn parse_value(raw: &str) -> Maybe<i64> {
    raw.trim().parse::<i64>().ok().into()
}

fn exact_sqrt(v: i64) -> Maybe<i64> {
    Maybe::from(v.checked_isqrt()).flat_map(|r| {
        if r * r == v {
            return present(r);
        }
        Nothing.into()
    })
}

fn halve(v: i64) -> Maybe<i64> {
    if v % 2 != 0 {
        return Nothing.into();
    }
    present(v / 2)
}
