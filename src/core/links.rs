// src/core/links.rs
// URL acceptance rules for the link, social and image columns.

use std::net::IpAddr;

use url::{Host, Url};

const SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// True when `s` is an absolute http(s)/ftp URL with a routable-looking host.
/// `s` is expected to be trimmed already; embedded whitespace is rejected.
pub fn is_valid_url(s: &str) -> bool {
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return false;
    }
    let Ok(parsed) = Url::parse(s) else { return false };
    if !SCHEMES.contains(&parsed.scheme()) {
        return false;
    }
    match parsed.host() {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        Some(Host::Domain(d)) => is_dotted_domain(d),
        None => false,
    }
}

fn is_dotted_domain(domain: &str) -> bool {
    // url keeps numeric hosts it could not read as IPv4 as domains
    if domain.parse::<IpAddr>().is_ok() {
        return true;
    }
    let mut labels = domain.trim_end_matches('.').split('.');
    let Some(tld) = labels.next_back() else { return false };
    let has_parent = labels.clone().next().is_some();
    has_parent && labels.all(|l| !l.is_empty()) && is_tld(tld)
}

// url hands back IDN labels in punycode, so `.рф` arrives as `xn--p1ai`
fn is_tld(label: &str) -> bool {
    if let Some(encoded) = label.strip_prefix("xn--") {
        return !encoded.is_empty() && encoded.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    }
    label.len() >= 2 && label.chars().all(|c| c.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_profile_links() {
        assert!(is_valid_url("https://github.com/ada"));
        assert!(is_valid_url("http://www.linkedin.com/in/ada-lovelace/"));
        assert!(is_valid_url("https://twitter.com/ada?lang=en"));
        assert!(is_valid_url("http://127.0.0.1:8080/a.png"));
        assert!(is_valid_url("ftp://files.example.org/pic.jpg"));
    }

    #[test]
    fn rejects_malformed_or_relative() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("github.com/ada"));
        assert!(!is_valid_url("@ada"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("https://localhost/x"));
        assert!(!is_valid_url("https://exa mple.com"));
        assert!(!is_valid_url("mailto:ada@example.com"));
        assert!(!is_valid_url("javascript:alert(1)"));
        assert!(!is_valid_url("https://example.c0m"));
    }

    #[test]
    fn internationalized_domains_are_accepted() {
        assert!(is_valid_url("https://пример.рф/ada"));
        assert!(is_valid_url("https://xn--e1afmkfd.xn--p1ai/ada"));
        assert!(is_valid_url("https://bücher.example.de/ada"));
        assert!(!is_valid_url("https://example.xn--"));
    }

    #[test]
    fn scheme_case_does_not_matter() {
        assert!(is_valid_url("HTTPS://GitHub.com/AdaL"));
    }
}
