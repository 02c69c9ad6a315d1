//! Output rendering for the list and status views.

use chrono::{DateTime, Local, Utc};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use owo_colors::OwoColorize;

use quill_core::store::NoteIndexEntry;

/// Print the note listing as a table or JSON.
pub fn print_note_list(entries: &[NoteIndexEntry], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No notes yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Last modified"]);
    for entry in entries {
        table.add_row(vec![
            entry.id.clone(),
            format_timestamp(entry.last_modified),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Format a timestamp in the user's local timezone.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Print a success line unless quiet mode is on.
pub fn print_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message.green());
    }
}
