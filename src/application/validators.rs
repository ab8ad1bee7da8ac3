use url::Url;
use validator::ValidateUrl;

/// Validates a billing-portal return URL: absolute, http(s), with a host.
pub fn is_valid_return_url(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.is_empty() || !raw.validate_url() {
        return false;
    }

    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_return_urls() {
        assert!(is_valid_return_url("https://app.esttetica.com/settings"));
        assert!(is_valid_return_url("http://localhost:5173/dashboard?tab=billing"));
        assert!(is_valid_return_url("  https://app.esttetica.com  "));
    }

    #[test]
    fn test_invalid_return_urls() {
        assert!(!is_valid_return_url(""));
        assert!(!is_valid_return_url("   "));
        assert!(!is_valid_return_url("/dashboard"));
        assert!(!is_valid_return_url("not a url"));
        assert!(!is_valid_return_url("javascript:alert(1)"));
        assert!(!is_valid_return_url("ftp://files.example.com/x"));
    }
}
