use crate::app::AppContext;
use crate::cli::{AddArgs, DeleteArgs, ListArgs, ShowArgs};
use crate::errors::CliError;
use crate::helpers::read_note_body;
use crate::output::{print_note_list, print_success};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let session = ctx.unlock_session()?;
    let body = read_note_body(args.no_input, args.body.clone())?;

    let note = session.save_note(args.id.clone(), body)?;

    print_success("Note saved.", ctx.quiet);
    println!("{}", note.id);
    Ok(())
}

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let session = ctx.unlock_session()?;

    match session.open_note(&args.id)? {
        Some(content) => {
            println!("{}", content);
            Ok(())
        }
        None => CliError::not_found(
            format!("Note not found: {}", args.id),
            "Hint: `quill list` shows the ids of existing notes.",
        )
        .exit(),
    }
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    // Listing reads the plaintext index only; no unlock needed.
    let session = ctx.build_session()?;
    let mut entries = session.list_notes();
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }
    print_note_list(&entries, args.json)
}

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let session = ctx.unlock_session()?;
    session.delete_note(&args.id)?;
    print_success("Note deleted.", ctx.quiet);
    Ok(())
}
