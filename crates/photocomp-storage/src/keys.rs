//! Storage key constants.

/// Storage keys used by the client session.
///
/// The key names are part of the platform's persisted-session contract and
/// must not change between releases, or existing sessions stop rehydrating.
pub struct SessionKeys;

impl SessionKeys {
    /// Bearer token for the platform API
    pub const TOKEN: &'static str = "token";

    /// Signed-in user record (JSON)
    pub const USER: &'static str = "user";
}
