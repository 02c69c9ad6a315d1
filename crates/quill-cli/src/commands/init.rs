use crate::app::AppContext;
use crate::config::{self, QuillConfig, SecretStoreSection, StoreSection};
use crate::helpers::prompt_init_passphrase;
use crate::output::print_success;

pub fn handle_init(ctx: &AppContext) -> anyhow::Result<()> {
    let mut session = ctx.build_session()?;
    if session.has_password()? {
        return Err(anyhow::anyhow!(
            "A master password is already set. Use `quill erase` to start over."
        ));
    }

    let password = prompt_init_passphrase()?;
    session.set_password(&password)?;

    // Record the chosen layout so later runs resolve the same paths.
    let config_path = config::default_config_path()?;
    if !config_path.exists() {
        let config = QuillConfig {
            store: StoreSection {
                path: ctx.notes_dir.to_string_lossy().to_string(),
            },
            secret_store: SecretStoreSection {
                service: ctx.keyring_service.clone(),
            },
        };
        config::write_config(&config_path, &config)?;
    }

    print_success("Master password set.", ctx.quiet);
    if !ctx.quiet {
        println!("Notes will be stored in {}", ctx.notes_dir.display());
        println!("There is no recovery: losing the password loses every note.");
    }
    Ok(())
}
