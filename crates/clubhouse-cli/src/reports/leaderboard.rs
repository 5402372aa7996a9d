use clubhouse_core::competition::{CategoryResult, ExcludedEntry, Flight, FlightResult, Payout};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn amount_for(payouts: &[Payout], player_id: &str) -> Option<f64> {
    payouts
        .iter()
        .find(|p| p.player_id == player_id)
        .map(|p| p.amount)
}

fn money(amount: Option<f64>) -> String {
    amount.map_or_else(String::new, |a| format!("${:.2}", a))
}

pub fn standings(result: &FlightResult) {
    println!(
        "\n🏌️ === {} / FLIGHT {} === pool ${:.2}",
        result.round_id, result.flight, result.pool_total
    );

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("CH"),
        Cell::new("Out"),
        Cell::new("In"),
        Cell::new("Gross"),
        Cell::new("Net Out").fg(Color::Cyan),
        Cell::new("Net In").fg(Color::Cyan),
        Cell::new("Net").add_attribute(Attribute::Bold),
        Cell::new("Pool"),
    ]);
    for i in 1..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let mut rows: Vec<_> = result.rows.iter().collect();
    rows.sort_by_key(|r| (r.total_net, r.player_id.clone()));
    for r in rows {
        table.add_row(vec![
            Cell::new(&r.player_id).add_attribute(Attribute::Bold),
            Cell::new(r.course_handicap),
            Cell::new(r.front_gross),
            Cell::new(r.back_gross),
            Cell::new(r.total_gross),
            Cell::new(r.front_net).fg(Color::Cyan),
            Cell::new(r.back_net).fg(Color::Cyan),
            Cell::new(r.total_net).add_attribute(Attribute::Bold),
            Cell::new(if r.in_pool { "yes" } else { "" }),
        ]);
    }
    println!("{}", table);
}

pub fn category_result(category: &CategoryResult) {
    println!("\n--- {} (pot ${:.2}) ---", category.category, category.pot);

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Pos").add_attribute(Attribute::Bold),
        Cell::new("Player"),
        Cell::new("Net"),
        Cell::new("Pool").fg(Color::Green),
        Cell::new("Prize").fg(Color::Yellow),
    ]);

    for s in &category.standings {
        table.add_row(vec![
            Cell::new(s.position),
            Cell::new(&s.player_id),
            Cell::new(s.net),
            Cell::new(money(amount_for(&category.winners, &s.player_id))).fg(Color::Green),
            Cell::new(money(amount_for(&category.prizes, &s.player_id))).fg(Color::Yellow),
        ]);
    }
    println!("{}", table);
}

pub fn excluded(entries: &[ExcludedEntry]) {
    if entries.is_empty() {
        return;
    }
    println!("\n⚠️  Excluded from results:");
    for e in entries {
        println!("    {}: {}", e.player_id, e.reason);
    }
}

pub fn flights(flights: &[Flight], players: &[(String, f64)]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Flight").add_attribute(Attribute::Bold),
        Cell::new("Player"),
        Cell::new("Index").fg(Color::Cyan),
    ]);
    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for flight in flights {
        for id in &flight.player_ids {
            let index = players
                .iter()
                .find(|(pid, _)| pid == id)
                .map_or_else(String::new, |(_, hi)| format!("{:.1}", hi));
            table.add_row(vec![
                Cell::new(&flight.label).add_attribute(Attribute::Bold),
                Cell::new(id),
                Cell::new(index).fg(Color::Cyan),
            ]);
        }
    }
    println!("\n{}", table);
}
