use crate::competition::types::{Payout, Standing};
use crate::error::{LeagueError, LeagueResult};
use itertools::Itertools;
use tracing::debug;

/// Splits the overall pool into `[front, back, total]` pots.
pub fn category_pots(pool_total: f64, split: [f64; 3]) -> [f64; 3] {
    split.map(|share| pool_total * share)
}

/// Pays out one category pot by position share.
///
/// Players who are absolutely tied (same net and same hole-by-hole
/// tie-break) pool the shares of every position their group spans and split
/// them evenly. Shares beyond the last ranked player are not paid.
pub fn distribute_pot(
    standings: &[Standing],
    pot: f64,
    position_split: &[f64],
) -> LeagueResult<Vec<Payout>> {
    if standings.is_empty() {
        return Ok(Vec::new());
    }
    if !pot.is_finite() || pot < 0.0 {
        return Err(LeagueError::NegativePot(pot));
    }
    if pot == 0.0 {
        return Ok(Vec::new());
    }
    Ok(split_slots(standings, position_split, pot))
}

/// Awards fixed prize amounts (1st, 2nd, ...) with the same tie handling
/// as [`distribute_pot`].
pub fn award_prizes(standings: &[Standing], amounts: &[f64]) -> Vec<Payout> {
    split_slots(standings, amounts, 1.0)
}

fn split_slots(standings: &[Standing], slots: &[f64], scale: f64) -> Vec<Payout> {
    let mut payouts = Vec::new();
    let mut slot = 0;

    let groups = standings.iter().chunk_by(|s| (s.net, s.tiebreak.clone()));
    for (_, group) in &groups {
        if slot >= slots.len() {
            break;
        }
        let members: Vec<&Standing> = group.collect();
        let span_end = (slot + members.len()).min(slots.len());
        let combined: f64 = slots[slot..span_end].iter().sum();
        let each = scale * combined / members.len() as f64;

        if each > 0.0 {
            for m in &members {
                payouts.push(Payout {
                    player_id: m.player_id.clone(),
                    amount: each,
                    position: slot + 1,
                });
            }
        }
        debug!(
            "Position {}: {} player(s) share {:.2} each",
            slot + 1,
            members.len(),
            each
        );
        slot += members.len();
    }
    payouts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pots_follow_split() {
        assert_eq!(category_pots(100.0, [0.4, 0.4, 0.2]), [40.0, 40.0, 20.0]);
    }

    #[test]
    fn empty_standings_pay_nothing_even_from_bad_pot() {
        assert!(distribute_pot(&[], -5.0, &[0.5, 0.3, 0.2]).unwrap().is_empty());
    }
}
