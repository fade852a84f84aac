use bcrypt::{BcryptError, DEFAULT_COST};

/// bcrypt wrapper: every hash carries a fresh random salt and the cost it was
/// produced with, encoded in the output string, so verification needs no
/// extra state.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Hasher with the library default cost.
    #[must_use]
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Hasher with an explicit cost. Tests use a reduced cost to stay fast.
    #[must_use]
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password with a fresh random salt.
    ///
    /// # Errors
    /// Returns an error if the underlying primitive fails.
    pub fn hash(&self, password: &str) -> Result<String, BcryptError> {
        bcrypt::hash(password, self.cost)
    }

    /// Verify a password against a stored hash. Re-derives the hash from the
    /// salt embedded in `stored_hash` and compares in constant time.
    ///
    /// # Errors
    /// Returns an error if `stored_hash` is not a valid bcrypt string.
    pub fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, BcryptError> {
        bcrypt::verify(password, stored_hash)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
