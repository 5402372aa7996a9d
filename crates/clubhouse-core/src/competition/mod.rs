pub mod flights;
pub mod leaderboard;
pub mod payout;
pub mod ranking;
pub mod types;

pub use self::flights::{assign_flights, Flight};
pub use self::leaderboard::FlightResultParams;
pub use self::payout::{award_prizes, category_pots, distribute_pot};
pub use self::ranking::{compare_standings, rank_category};
pub use self::types::{
    Category, CategoryResult, ExcludedEntry, FlightResult, FlightRow, HoleGross, Payout, Standing,
};
