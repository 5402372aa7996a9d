mod leaderboard;
mod tables;

pub use self::leaderboard::{
    category_result as print_category_result, excluded as print_excluded,
    flights as print_flights, standings as print_leaderboard,
};
pub use self::tables::{
    history as print_history_report, index as print_index_report,
    replay as print_replay_report,
};
