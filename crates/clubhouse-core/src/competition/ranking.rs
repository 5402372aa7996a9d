use crate::competition::types::{Category, FlightRow, Standing};
use std::cmp::Ordering;

/// Lower net wins; on equal nets the first hole (hardest first) where the
/// gross scores differ decides, lower gross winning. Holes only one side
/// has are not compared.
pub fn compare_standings(a: &Standing, b: &Standing) -> Ordering {
    a.net.cmp(&b.net).then_with(|| {
        a.tiebreak
            .iter()
            .zip(&b.tiebreak)
            .map(|(x, y)| x.cmp(y))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// Orders the flight for one category. Players left equal by the
/// tie-break share a position and keep their input order.
pub fn rank_category(rows: &[FlightRow], category: Category) -> Vec<Standing> {
    let mut standings: Vec<Standing> = rows
        .iter()
        .map(|r| Standing {
            player_id: r.player_id.clone(),
            position: 0,
            net: r.net(category),
            tiebreak: r.tiebreak_sequence(category),
        })
        .collect();

    standings.sort_by(compare_standings);

    for i in 0..standings.len() {
        standings[i].position = if i > 0 && standings[i - 1].is_absolute_tie(&standings[i]) {
            standings[i - 1].position
        } else {
            i + 1
        };
    }
    standings
}
