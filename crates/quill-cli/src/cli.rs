use clap::{Args, Parser, Subcommand};

use quill_core::VERSION;

/// Quill - a local, offline note store encrypted with a master password
#[derive(Parser)]
#[command(name = "quill")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the encrypted notes and index
    #[arg(short, long, global = true, env = "QUILL_DIR")]
    pub dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set the master password for a new installation
    Init,

    /// Show whether a master password is set and how many notes exist
    Status,

    /// Add a new note (or overwrite one with --id)
    Add(AddArgs),

    /// Decrypt and print one note
    Show(ShowArgs),

    /// List notes, most recent first (no password needed)
    List(ListArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Erase the salt and verification probe, abandoning all notes
    Erase(EraseArgs),
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Note body (overrides stdin/editor)
    #[arg(long)]
    pub body: Option<String>,

    /// Overwrite an existing note instead of creating a new one
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Note id
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Note id
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `erase` command
#[derive(Args)]
pub struct EraseArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_body() {
        let cli = Cli::try_parse_from(["quill", "add", "--body", "hello"]).unwrap();
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.body.as_deref(), Some("hello"));
                assert!(args.id.is_none());
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_parse_list_flags() {
        let cli = Cli::try_parse_from(["quill", "list", "--limit", "5", "--json"]).unwrap();
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.limit, Some(5));
                assert!(args.json);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_parse_global_dir_flag() {
        let cli = Cli::try_parse_from(["quill", "--dir", "/tmp/notes", "status"]).unwrap();
        assert_eq!(cli.dir.as_deref(), Some("/tmp/notes"));
    }

    #[test]
    fn test_show_requires_id() {
        assert!(Cli::try_parse_from(["quill", "show"]).is_err());
    }

    #[test]
    fn test_command_is_required() {
        assert!(Cli::try_parse_from(["quill"]).is_err());
    }
}
