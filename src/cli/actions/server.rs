use crate::{
    auth::{hasher::PasswordHasher, store::CredentialStore, AuthService},
    cli::actions::Action,
    sezamo,
};
use anyhow::Result;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server { port } => {
            // Credentials live for the lifetime of the process only
            let store = CredentialStore::new();
            let service = AuthService::new(store, PasswordHasher::new());

            sezamo::new(port, service).await?;
        }
    }

    Ok(())
}
