//! Search-text tokenization and request descriptors.

use std::collections::HashSet;

/// One provider request, derived from a single unique token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    /// Lookup by place name (non-numeric token).
    PlaceName { name: String },

    /// Lookup by postal code (numeric token) qualified by a region code.
    PostalCode { code: String, region: String },
}

impl LookupRequest {
    /// The token this request was built from.
    pub fn token(&self) -> &str {
        match self {
            LookupRequest::PlaceName { name } => name,
            LookupRequest::PostalCode { code, .. } => code,
        }
    }
}

/// Split the search text into unique tokens, preserving first-occurrence
/// order. Runs of whitespace are collapsed, so no empty tokens are
/// produced.
pub fn unique_tokens(search_text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    search_text
        .split_whitespace()
        .filter(|token| seen.insert(*token))
        .map(str::to_string)
        .collect()
}

/// Whether a token reads as a numeric literal: optional sign, digits,
/// at most one decimal point, at least one digit. Exponents and
/// `inf`/`nan` forms are not numeric here.
pub fn is_numeric_token(token: &str) -> bool {
    let rest = token.strip_prefix(['+', '-']).unwrap_or(token);
    let mut digits = 0usize;
    let mut dots = 0usize;
    for c in rest.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

/// Build one request descriptor per unique token: numeric tokens become
/// postal-code lookups qualified by `region_code`, everything else a
/// place-name lookup.
pub fn build_requests(search_text: &str, region_code: &str) -> Vec<LookupRequest> {
    unique_tokens(search_text)
        .into_iter()
        .map(|token| {
            if is_numeric_token(&token) {
                LookupRequest::PostalCode {
                    code: token,
                    region: region_code.to_string(),
                }
            } else {
                LookupRequest::PlaceName { name: token }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_tokens_dedupes_preserving_order() {
        let tokens = unique_tokens("560001 London 560001");
        assert_eq!(tokens, vec!["560001", "London"]);
    }

    #[test]
    fn test_unique_tokens_collapses_whitespace() {
        let tokens = unique_tokens("  London   Paris\t560001  ");
        assert_eq!(tokens, vec!["London", "Paris", "560001"]);
    }

    #[test]
    fn test_unique_tokens_empty_input() {
        assert!(unique_tokens("").is_empty());
        assert!(unique_tokens("   \t  ").is_empty());
    }

    #[test]
    fn test_numeric_token_grammar() {
        assert!(is_numeric_token("560001"));
        assert!(is_numeric_token("-12"));
        assert!(is_numeric_token("+12.5"));
        assert!(is_numeric_token(".5"));
        assert!(is_numeric_token("5."));

        assert!(!is_numeric_token("London"));
        assert!(!is_numeric_token("12a"));
        assert!(!is_numeric_token("1e5"));
        assert!(!is_numeric_token("inf"));
        assert!(!is_numeric_token("nan"));
        assert!(!is_numeric_token("1.2.3"));
        assert!(!is_numeric_token("-"));
        assert!(!is_numeric_token("."));
        assert!(!is_numeric_token(""));
    }

    #[test]
    fn test_build_requests_classifies_tokens() {
        let requests = build_requests("560001 London 560001", "in");
        assert_eq!(
            requests,
            vec![
                LookupRequest::PostalCode {
                    code: "560001".into(),
                    region: "in".into(),
                },
                LookupRequest::PlaceName {
                    name: "London".into(),
                },
            ]
        );
    }

    #[test]
    fn test_build_requests_one_per_distinct_token() {
        let requests = build_requests("a b a b a c", "us");
        assert_eq!(requests.len(), 3);
        let tokens: Vec<&str> = requests.iter().map(LookupRequest::token).collect();
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_region_applied_only_to_postal_codes() {
        let requests = build_requests("Paris 75001", "fr");
        assert!(matches!(
            &requests[0],
            LookupRequest::PlaceName { name } if name == "Paris"
        ));
        assert!(matches!(
            &requests[1],
            LookupRequest::PostalCode { code, region } if code == "75001" && region == "fr"
        ));
    }
}
