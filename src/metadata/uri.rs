//! Token URI rendering

use super::Band;

/// Render a token URI by appending the band's decimal index to the base URI.
///
/// This is the whole metadata resolution step on this side of the seam; the
/// metadata host owns everything behind the returned URI.
pub fn token_uri(base_uri: &str, band: Band) -> String {
    format!("{}{}", base_uri, band.index())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_uri_appends_index() {
        assert_eq!(token_uri("https://base.com/", Band::Up1), "https://base.com/0");
        assert_eq!(token_uri("https://base.com/", Band::High), "https://base.com/6");
    }

    #[test]
    fn test_token_uri_does_not_insert_separator() {
        assert_eq!(token_uri("ipfs://bands", Band::Down1), "ipfs://bands3");
    }
}
