//! Identity data of a Heimdall user as seen by set resolution.

/// Refresh token state of a user's characters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialStatus {
    /// Number of characters owned by the user, with or without a valid token.
    pub characters: u64,
    /// `eve_character` record IDs of owned characters holding a refresh token that isn't
    /// revoked, in ascending order.
    pub credentialed_character_ids: Vec<i32>,
}

impl CredentialStatus {
    /// Number of valid refresh tokens, each character holds at most one.
    pub fn valid_tokens(&self) -> u64 {
        self.credentialed_character_ids.len() as u64
    }

    /// Whether the user holds at least one valid refresh token.
    pub fn has_credentials(&self) -> bool {
        !self.credentialed_character_ids.is_empty()
    }

    /// Whether every owned character holds a valid refresh token.
    ///
    /// This compares counts only, it does not check which characters hold the tokens.
    pub fn all_valid(&self) -> bool {
        self.valid_tokens() == self.characters
    }
}

/// Flattened affiliations of a user's credentialed characters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Affiliations {
    /// EVE Online corporation IDs
    pub corporation_ids: Vec<i64>,
    /// EVE Online alliance IDs, characters outside of an alliance contribute nothing
    pub alliance_ids: Vec<i64>,
    /// `eve_corporation_title` record IDs
    pub title_ids: Vec<i64>,
}
