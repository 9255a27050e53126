use crate::cmd::batch::BatchRow;
use chromatic_arena::catalog::ArtMovement;
use chromatic_arena::scorer::{ScoreResult, MAX_TOTAL_SCORE};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub fn print_score_report(movement_id: &str, movement: Option<&ArtMovement>, result: &ScoreResult) {
    let title = movement.map_or(movement_id, |m| m.name.as_str());
    println!("\nMovement: {}", title);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Score").add_attribute(Attribute::Bold),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (category, score) in result.breakdown.iter() {
        table.add_row(vec![
            Cell::new(category),
            Cell::new(format!("{:.1}", score)),
        ]);
    }
    if result.bonus > 0.0 {
        table.add_row(vec![
            Cell::new("bonus").fg(Color::Green),
            Cell::new(format!("{:.1}", result.bonus)).fg(Color::Green),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1} / {:.0}", result.total_score, MAX_TOTAL_SCORE))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{}", table);

    for line in &result.feedback {
        println!("  * {}", line);
    }
}

pub fn print_batch_report(movement_id: &str, rows: &[BatchRow]) {
    println!("\nRanking for '{}'", movement_id);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Canvas").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Bonus").fg(Color::Green),
        Cell::new("Feedback"),
    ]);
    for i in [0, 2, 3] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, row) in rows.iter().enumerate() {
        match (&row.result, &row.error) {
            (Some(result), _) => table.add_row(vec![
                Cell::new(rank + 1),
                Cell::new(&row.file).add_attribute(Attribute::Bold),
                Cell::new(format!("{:.1}", result.total_score)).fg(Color::Cyan),
                Cell::new(format!("{:.1}", result.bonus)).fg(Color::Green),
                Cell::new(result.feedback.len()),
            ]),
            (None, error) => table.add_row(vec![
                Cell::new("-"),
                Cell::new(&row.file),
                Cell::new("error").fg(Color::Red),
                Cell::new(""),
                Cell::new(error.as_deref().unwrap_or("")),
            ]),
        };
    }
    println!("{}", table);
}

pub fn print_movement_catalog(movements: &[&ArtMovement]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Name"),
        Cell::new("Era"),
        Cell::new("Difficulty"),
        Cell::new("Unlock"),
        Cell::new("Palette"),
    ]);
    if let Some(col) = table.column_mut(4) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for m in movements {
        let difficulty = match m.difficulty.as_str() {
            "Easy" => Cell::new(&m.difficulty).fg(Color::Green),
            "Hard" => Cell::new(&m.difficulty).fg(Color::Red),
            _ => Cell::new(&m.difficulty).fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(&m.movement_id).add_attribute(Attribute::Bold),
            Cell::new(&m.name),
            Cell::new(&m.era),
            difficulty,
            Cell::new(m.unlock_level),
            Cell::new(m.color_palette.join(" ")),
        ]);
    }
    println!("\n{}", table);
}
