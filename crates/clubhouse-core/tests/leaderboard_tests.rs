use clubhouse_core::competition::{Category, FlightResult, FlightResultParams};
use clubhouse_core::config::PoolParams;
use clubhouse_core::error::LeagueError;

mod common;
use common::{mock_round, EntryBuilder};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn paid(result: &FlightResult, category: Category, player: &str) -> f64 {
    result
        .category(category)
        .unwrap()
        .winners
        .iter()
        .filter(|p| p.player_id == player)
        .map(|p| p.amount)
        .sum()
}

fn sample_result() -> FlightResult {
    let entries = vec![
        EntryBuilder::new("a").hole(3, 2).build(),
        EntryBuilder::new("b").build(),
        EntryBuilder::new("c").hole(12, 6).build(),
        EntryBuilder::new("d").missing(5).build(),
        EntryBuilder::new("e").hole(2, 3).out_of_pool().build(),
    ];
    FlightResultParams::builder()
        .round(mock_round(entries))
        .build()
        .compute()
        .unwrap()
}

#[test]
fn incomplete_cards_are_excluded() {
    let result = sample_result();
    assert_eq!(result.rows.len(), 4);
    assert_eq!(result.excluded.len(), 1);
    assert_eq!(result.excluded[0].player_id, "d");
}

#[test]
fn pool_counts_only_paying_players() {
    let result = sample_result();
    assert!(close(result.pool_total, 15.0));
    assert!(close(result.category(Category::Front).unwrap().pot, 6.0));
    assert!(close(result.category(Category::Back).unwrap().pot, 6.0));
    assert!(close(result.category(Category::Total).unwrap().pot, 3.0));
}

#[test]
fn out_of_pool_player_ranks_but_is_not_paid() {
    let result = sample_result();
    let total = result.category(Category::Total).unwrap();
    assert_eq!(total.standings[0].player_id, "e");
    assert!(total.winners.iter().all(|p| p.player_id != "e"));
}

#[test]
fn pot_payouts_share_absolute_ties() {
    let result = sample_result();

    assert!(close(paid(&result, Category::Front, "a"), 3.0));
    assert!(close(paid(&result, Category::Front, "b"), 1.5));
    assert!(close(paid(&result, Category::Front, "c"), 1.5));

    assert!(close(paid(&result, Category::Back, "a"), 2.4));
    assert!(close(paid(&result, Category::Back, "b"), 2.4));
    assert!(close(paid(&result, Category::Back, "c"), 1.2));

    assert!(close(paid(&result, Category::Total, "a"), 1.5));
    assert!(close(paid(&result, Category::Total, "b"), 0.9));
    assert!(close(paid(&result, Category::Total, "c"), 0.6));
}

#[test]
fn every_category_pays_its_whole_pot() {
    let result = sample_result();
    for category in &result.categories {
        let total: f64 = category.winners.iter().map(|p| p.amount).sum();
        assert!(close(total, category.pot), "{}", category.category);
    }
}

#[test]
fn fixed_prizes_include_everyone_who_played() {
    let result = sample_result();
    let prizes = &result.category(Category::Total).unwrap().prizes;
    let ids: Vec<(&str, f64)> = prizes
        .iter()
        .map(|p| (p.player_id.as_str(), p.amount))
        .collect();
    assert_eq!(ids, vec![("e", 35.0), ("a", 25.0), ("b", 15.0)]);
}

#[test]
fn nine_hole_nets_use_allocated_strokes() {
    let entries = vec![EntryBuilder::new("ten").index(10.0).build()];
    let result = FlightResultParams::builder()
        .round(mock_round(entries))
        .build()
        .compute()
        .unwrap();

    let row = &result.rows[0];
    assert_eq!(row.course_handicap, 10);
    assert_eq!(row.total_gross, 72);
    assert_eq!(row.front_net, 31);
    assert_eq!(row.back_net, 31);
    assert_eq!(row.total_net, 62);
    // Hardest hole first.
    assert_eq!(row.gross_hole_scores[0].hole_number, 3);
}

#[test]
fn blank_player_id_is_rejected() {
    let entries = vec![EntryBuilder::new("a").build(), EntryBuilder::new("  ").build()];
    let err = FlightResultParams::builder()
        .round(mock_round(entries))
        .build()
        .compute()
        .unwrap_err();
    assert!(matches!(err, LeagueError::MissingPlayerIdentity));
}

#[test]
fn bad_pool_config_is_a_config_error() {
    let err = FlightResultParams::builder()
        .round(mock_round(vec![EntryBuilder::new("a").build()]))
        .pool(PoolParams {
            position_split: "half,rest".to_string(),
            ..Default::default()
        })
        .build()
        .compute()
        .unwrap_err();
    assert!(matches!(err, LeagueError::Config(_)));
}

#[test]
fn empty_flight_has_empty_categories() {
    let result = FlightResultParams::builder()
        .round(mock_round(Vec::new()))
        .build()
        .compute()
        .unwrap();
    assert_eq!(result.categories.len(), 3);
    assert!(result.categories.iter().all(|c| c.winners.is_empty()));
    assert_eq!(result.pool_total, 0.0);
}
