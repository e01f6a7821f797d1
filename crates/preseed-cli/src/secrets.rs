//! Out-of-band secret lookup.
//!
//! The password hash is never accepted on the command line, where it would
//! end up in shell history and process listings.

/// Environment variable carrying the crypted password hash.
pub const PASSWORD_HASH_ENV: &str = "PRESEED_PASSWORD_HASH";

/// Read the password hash override from the process environment.
///
/// A variable that is set but empty still counts as an override.
pub fn password_hash_from_env() -> Option<String> {
    password_hash_from(|key| std::env::var(key).ok())
}

/// Read the password hash override through `lookup`.
pub fn password_hash_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup(PASSWORD_HASH_ENV)
}
