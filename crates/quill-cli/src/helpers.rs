//! Input helpers for passwords and note bodies.

use std::io::{self, IsTerminal, Read};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use dialoguer::Password;
use zeroize::Zeroizing;

use quill_core::crypto::validate_password;

/// Prompt for the master password, or read it from QUILL_PASSPHRASE.
pub fn prompt_passphrase(interactive: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Ok(value) = std::env::var("QUILL_PASSPHRASE") {
        if !value.trim().is_empty() {
            return Ok(Zeroizing::new(value));
        }
    }
    if !interactive {
        return Err(anyhow::anyhow!(
            "No password provided and no TTY available. Set QUILL_PASSPHRASE."
        ));
    }
    Password::new()
        .with_prompt("Master password")
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Prompt for a new master password with confirmation (for init), or read
/// it from QUILL_PASSPHRASE.
pub fn prompt_init_passphrase() -> anyhow::Result<Zeroizing<String>> {
    if let Ok(value) = std::env::var("QUILL_PASSPHRASE") {
        if !value.trim().is_empty() {
            validate_password(&value)
                .map_err(|e| anyhow::anyhow!("Password does not meet requirements: {}", e))?;
            return Ok(Zeroizing::new(value));
        }
    }
    if !io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "No password provided and no TTY available. Set QUILL_PASSPHRASE."
        ));
    }
    loop {
        let password = Password::new()
            .with_prompt("Choose a master password")
            .with_confirmation("Confirm master password", "Passwords do not match")
            .interact()
            .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;
        if let Err(err) = validate_password(&password) {
            eprintln!("Password does not meet requirements: {}", err);
            continue;
        }
        return Ok(Zeroizing::new(password));
    }
}

/// Read the note body from --body, stdin, or $EDITOR.
pub fn read_note_body(no_input: bool, body: Option<String>) -> anyhow::Result<String> {
    if let Some(value) = body {
        if value.trim().is_empty() {
            return Err(anyhow::anyhow!("--body cannot be empty"));
        }
        return Ok(value);
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        let trimmed = buffer.trim_end().to_string();
        if trimmed.is_empty() {
            return Err(anyhow::anyhow!("No input provided on stdin"));
        }
        return Ok(trimmed);
    }

    if no_input {
        return Err(anyhow::anyhow!("--no-input requires content from stdin"));
    }

    read_body_from_editor()
}

/// Open $EDITOR to compose the note body.
fn read_body_from_editor() -> anyhow::Result<String> {
    let editor = std::env::var("EDITOR")
        .map_err(|_| anyhow::anyhow!("$EDITOR is not set; use --body or pipe content via stdin"))?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| anyhow::anyhow!("System time error: {}", e))?
        .as_nanos();
    let filename = format!("quill_note_{}_{}.md", std::process::id(), nanos);
    let path = std::env::temp_dir().join(filename);

    std::fs::write(&path, "")
        .map_err(|e| anyhow::anyhow!("Failed to create temp file: {}", e))?;

    let status = Command::new(editor)
        .arg(&path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to launch editor: {}", e))?;
    if !status.success() {
        let _ = std::fs::remove_file(&path);
        return Err(anyhow::anyhow!("Editor exited with failure"));
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read temp file: {}", e))?;
    let _ = std::fs::remove_file(&path);

    let trimmed = contents.trim_end().to_string();
    if trimmed.is_empty() {
        return Err(anyhow::anyhow!("Note body is empty"));
    }

    Ok(trimmed)
}
