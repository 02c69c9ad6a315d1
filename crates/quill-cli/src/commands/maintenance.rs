use dialoguer::Confirm;

use crate::app::AppContext;
use crate::cli::EraseArgs;
use crate::output::{format_timestamp, print_success};

pub fn handle_status(ctx: &AppContext) -> anyhow::Result<()> {
    let session = ctx.build_session()?;
    let entries = session.list_notes();

    if session.has_password()? {
        println!("Master password: set");
    } else {
        println!("Master password: not set (run `quill init`)");
    }
    println!("Notes directory: {}", ctx.notes_dir.display());
    println!("Notes: {}", entries.len());
    if let Some(latest) = entries.first() {
        println!(
            "Last modified: {} ({})",
            format_timestamp(latest.last_modified),
            latest.id
        );
    }
    Ok(())
}

pub fn handle_erase(ctx: &AppContext, args: &EraseArgs) -> anyhow::Result<()> {
    let mut session = ctx.build_session()?;
    if !session.has_password()? {
        println!("Nothing to erase: no master password is set.");
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(
                "Erase the salt and verification probe? Every note becomes permanently undecryptable",
            )
            .default(false)
            .interact()
            .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    session.erase_all()?;
    print_success("Erased. The note files remain on disk as unreadable ciphertext.", ctx.quiet);
    Ok(())
}
