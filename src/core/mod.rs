pub mod time;
pub mod types;

pub use time::{ceil_days, parse_timestamp, MS_PER_DAY};
pub use types::{
    ChangeEvent, FieldKind, FrictionLevel, FrictionResult, IssueFailure, LoopOccurrence,
    ProjectReport, SignalSet, StatusInterval, StatusTimelinePoint,
};
