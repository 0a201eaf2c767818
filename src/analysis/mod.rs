pub mod changelog;
pub mod intervals;
pub mod loops;
pub mod scoring;
pub mod workflow;

pub use changelog::normalize_changelog;
pub use intervals::{idle_days, reconstruct_intervals};
pub use loops::{count_assignee_changes, detect_status_loops, status_timeline};
pub use scoring::{round_to_tenth, FrictionScorer};
pub use workflow::{DefaultClassifier, StatusClassifier};
