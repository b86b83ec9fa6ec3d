pub mod input;
pub mod logging;
pub mod report;
pub mod steps;

pub use input::{parse_records, Record};
pub use report::{evaluate, summarize, Outcome, PipelineConfig, Summary};
pub use steps::Step;
