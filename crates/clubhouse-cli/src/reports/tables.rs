use clubhouse_core::handicap::{HandicapComputation, HandicapHistory};
use clubhouse_core::records::{DifferentialEntry, PlayerHandicapUpdate, PlayerHistory};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn flag(set: bool) -> &'static str {
    if set {
        "*"
    } else {
        ""
    }
}

fn optional_index(index: Option<f64>) -> String {
    index.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v))
}

fn player_title(player: &PlayerHistory) -> String {
    if player.name.is_empty() {
        player.player_id.clone()
    } else {
        format!("{} ({})", player.name, player.player_id)
    }
}

pub fn index(player: &PlayerHistory, entries: &[DifferentialEntry], result: &HandicapComputation) {
    println!("\n⛳ === HANDICAP INDEX: {} === ⛳", player_title(player));

    let mut rounds = new_table();
    rounds.add_row(vec![
        Cell::new("Date").add_attribute(Attribute::Bold),
        Cell::new("Round"),
        Cell::new("Diff"),
        Cell::new("Used").fg(Color::Green),
    ]);
    align_right(&mut rounds, 2..=2);

    // Newest first, like a scorecard history.
    for used_flag in result.differentials.iter().rev() {
        let Some(entry) = entries.iter().find(|e| e.id == used_flag.id) else {
            continue;
        };
        let used = if used_flag.used {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("")
        };
        rounds.add_row(vec![
            Cell::new(entry.date),
            Cell::new(&entry.id),
            Cell::new(format!("{:.1}", entry.differential)),
            used,
        ]);
    }
    println!("{}", rounds);

    let mut summary = new_table();
    summary.add_row(vec![
        Cell::new("Index").add_attribute(Attribute::Bold).fg(Color::Cyan),
        Cell::new("Raw"),
        Cell::new("Best"),
        Cell::new("Window"),
        Cell::new("Soft"),
        Cell::new("Hard"),
        Cell::new("Low"),
        Cell::new("Low (new)"),
    ]);
    summary.add_row(vec![
        Cell::new(format!("{:.1}", result.handicap_index))
            .add_attribute(Attribute::Bold)
            .fg(Color::Cyan),
        Cell::new(format!("{:.1}", result.raw_index)),
        Cell::new(format!("{} of {}", result.best_of, result.rounds_considered)),
        Cell::new(result.rounds_considered),
        Cell::new(flag(result.is_soft_capped)),
        Cell::new(flag(result.is_hard_capped)),
        Cell::new(optional_index(player.low_handicap_index)),
        Cell::new(optional_index(result.low_index_candidate)),
    ]);
    println!("{}", summary);

    if let Err(e) = result.official_index() {
        println!("⚠️  {}: provisional average, not an official index.", e);
    }
}

pub fn history(player: &PlayerHistory, history: &HandicapHistory) {
    println!("\n📈 === INDEX HISTORY: {} === 📈", player_title(player));

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Date").add_attribute(Attribute::Bold),
        Cell::new("Round"),
        Cell::new("Diff"),
        Cell::new("Before"),
        Cell::new("After").fg(Color::Cyan),
        Cell::new("Used"),
        Cell::new("Now").fg(Color::Green),
        Cell::new("Low"),
        Cell::new("Cap"),
    ]);
    align_right(&mut table, 2..=4);

    for row in &history.rows {
        let cap = match (row.is_soft_capped, row.is_hard_capped) {
            (_, true) => "hard",
            (true, false) => "soft",
            _ => "",
        };
        let low = if row.is_low_hi {
            Cell::new("LOW").fg(Color::Yellow)
        } else {
            Cell::new("")
        };
        table.add_row(vec![
            Cell::new(row.date),
            Cell::new(&row.id),
            Cell::new(format!("{:.1}", row.differential)),
            Cell::new(format!("{:.1}", row.index_before)),
            Cell::new(format!("{:.1}", row.index_after)).fg(Color::Cyan),
            Cell::new(flag(row.used)),
            Cell::new(flag(row.used_for_current)).fg(Color::Green),
            low,
            Cell::new(cap),
        ]);
    }
    println!("{}", table);
    println!(
        "Current index: {:.1} ({} rounds considered)",
        history.current.handicap_index, history.current.rounds_considered
    );
}

pub fn replay(updates: &[PlayerHandicapUpdate]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Index").fg(Color::Cyan),
        Cell::new("Low"),
        Cell::new("Rounds"),
    ]);
    align_right(&mut table, 1..=3);

    for u in updates {
        table.add_row(vec![
            Cell::new(&u.player_id).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", u.handicap_index)).fg(Color::Cyan),
            Cell::new(optional_index(u.low_handicap_index)),
            Cell::new(u.rounds_considered),
        ]);
    }
    println!("\n{}", table);
}
