//! Session construction and the passphrase retry flow.

use std::io::IsTerminal;
use std::path::PathBuf;

use quill_core::secret_store::KeyringStore;
use quill_core::store::NoteRepository;
use quill_core::verifier::PasswordVerifier;
use quill_core::Session;

use crate::cli::Cli;
use crate::config::{self, DEFAULT_KEYRING_SERVICE};
use crate::errors::CliError;
use crate::helpers::prompt_passphrase;

/// Resolved runtime context shared by all commands.
pub struct AppContext {
    pub notes_dir: PathBuf,
    pub keyring_service: String,
    pub quiet: bool,
}

impl AppContext {
    /// Resolve the notes directory and keyring service.
    ///
    /// Precedence for the directory: `--dir`/`QUILL_DIR`, then the config
    /// file, then the default data dir.
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let config = config::default_config_path()
            .ok()
            .filter(|path| path.exists())
            .map(|path| config::read_config(&path))
            .transpose()?;

        let notes_dir = match (&cli.dir, &config) {
            (Some(dir), _) => PathBuf::from(dir),
            (None, Some(config)) => PathBuf::from(&config.store.path),
            (None, None) => config::default_notes_dir()?,
        };
        let keyring_service = config
            .map(|config| config.secret_store.service)
            .unwrap_or_else(|| DEFAULT_KEYRING_SERVICE.to_string());

        Ok(Self {
            notes_dir,
            keyring_service,
            quiet: cli.quiet,
        })
    }

    /// Build a locked session over the keyring and notes directory.
    pub fn build_session(&self) -> anyhow::Result<Session<KeyringStore>> {
        let verifier = PasswordVerifier::new(KeyringStore::new(self.keyring_service.clone()));
        let notes = NoteRepository::open(&self.notes_dir)?;
        Ok(Session::new(verifier, notes))
    }

    /// Build a session and unlock it, prompting up to three times when
    /// interactive. Exits with the auth-failure code when attempts run out.
    pub fn unlock_session(&self) -> anyhow::Result<Session<KeyringStore>> {
        let mut session = self.build_session()?;
        if !session.has_password()? {
            return Err(anyhow::anyhow!(
                "No master password set. Run `quill init` first."
            ));
        }

        let interactive = std::io::stdin().is_terminal();
        let max_attempts: u32 = if interactive { 3 } else { 1 };
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            let password = prompt_passphrase(interactive)?;
            if session.unlock(&password)? {
                return Ok(session);
            }

            let remaining = max_attempts.saturating_sub(attempts);
            if remaining == 0 {
                CliError::auth_failed_with_hint(
                    "Too many failed password attempts.",
                    "Hint: If you forgot the master password, the notes cannot be recovered.",
                )
                .exit()
            }
            eprintln!(
                "Incorrect password. {} attempt{} remaining.",
                remaining,
                if remaining == 1 { "" } else { "s" }
            );
        }
    }
}
