pub mod flights;
pub mod history;
pub mod index;
pub mod payout;
pub mod replay;

use clubhouse_core::error::{LeagueError, LeagueResult};
use clubhouse_core::loader::{load_league_file, load_legacy_differentials};
use clubhouse_core::records::{PlayerHistory, RoundEntry};
use std::path::Path;
use tracing::info;

/// Looks up one player in a league file, appending rounds from a legacy
/// differential CSV when one is given.
pub fn load_player(
    league_path: &Path,
    player_id: &str,
    legacy_path: Option<&Path>,
) -> LeagueResult<PlayerHistory> {
    let league = load_league_file(league_path)?;
    let mut player = league
        .player(player_id)
        .cloned()
        .ok_or_else(|| LeagueError::UnknownPlayer(player_id.to_string()))?;

    if let Some(path) = legacy_path {
        let legacy = load_legacy_differentials(path)?;
        info!("📜 Merging {} legacy rounds from {:?}", legacy.len(), path);
        player
            .rounds
            .extend(legacy.into_iter().map(RoundEntry::from));
    }
    Ok(player)
}
