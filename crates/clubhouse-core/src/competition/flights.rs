use crate::error::{LeagueError, LeagueResult};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub label: String,
    pub player_ids: Vec<String>,
}

fn flight_label(i: usize) -> String {
    if i < 26 {
        char::from(b'A' + i as u8).to_string()
    } else {
        format!("F{}", i + 1)
    }
}

/// Splits players into `flight_count` flights by handicap index, lowest
/// first. Sizes differ by at most one, earlier flights taking the extra
/// players. Equal indexes are ordered by player id.
pub fn assign_flights(players: &[(String, f64)], flight_count: usize) -> LeagueResult<Vec<Flight>> {
    if flight_count == 0 {
        return Err(LeagueError::Config("flight_count must be at least 1".to_string()));
    }

    let ordered: Vec<&(String, f64)> = players
        .iter()
        .sorted_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)))
        .collect();

    let base = ordered.len() / flight_count;
    let extra = ordered.len() % flight_count;

    let mut flights = Vec::with_capacity(flight_count);
    let mut rest = ordered.as_slice();
    for i in 0..flight_count {
        let size = base + usize::from(i < extra);
        if size == 0 {
            break;
        }
        let (members, tail) = rest.split_at(size);
        flights.push(Flight {
            label: flight_label(i),
            player_ids: members.iter().map(|(id, _)| id.clone()).collect(),
        });
        rest = tail;
    }
    Ok(flights)
}
