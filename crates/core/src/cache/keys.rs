use crate::calendar::TokenId;

/// Returns the cache key for the resolved metadata of a token.
pub fn token_metadata_key(id: TokenId) -> String {
    format!("token:{}:metadata", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_metadata_key() {
        assert_eq!(token_metadata_key(TokenId(0)), "token:0:metadata");
        assert_eq!(token_metadata_key(TokenId(745_795)), "token:745795:metadata");
    }
}
