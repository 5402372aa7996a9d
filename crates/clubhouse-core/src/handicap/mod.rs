pub mod differential;
pub mod engine;
pub mod history;
pub mod normalize;
pub mod types;

pub use self::differential::{score_differential, score_differential_or_default};
pub use self::engine::{best_of_count, next_low_index, HandicapEngine};
pub use self::normalize::{normalize, normalize_all};
pub use self::types::{HandicapComputation, HandicapHistory, HistoryRow, UsedFlag};
