use std::collections::{hash_map::Entry, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A stored account. The hash carries its own salt and cost, so nothing else
/// needs to be kept per account.
#[derive(Debug, Clone)]
pub struct Account {
    pub password_hash: String,
}

/// In-memory credential storage: one account per email, created empty at
/// process start and discarded at process stop. Emails are compared as raw
/// strings, no normalization.
#[derive(Clone, Default)]
pub struct CredentialStore {
    accounts: Arc<Mutex<HashMap<String, Account>>>,
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let accounts = self.lock().len();

        f.debug_struct("CredentialStore")
            .field("accounts", &accounts)
            .finish()
    }
}

impl CredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure lookup, no side effects.
    #[must_use]
    pub fn get(&self, email: &str) -> Option<Account> {
        self.lock().get(email).cloned()
    }

    /// Insert the account only if the email is not already present. Returns
    /// whether the insert happened.
    ///
    /// The existence check and the insert run under a single lock
    /// acquisition, so two concurrent registrations for the same email admit
    /// exactly one winner.
    pub fn put_if_absent(&self, email: &str, password_hash: String) -> bool {
        match self.lock().entry(email.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(Account { password_hash });
                true
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Account>> {
        self.accounts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
