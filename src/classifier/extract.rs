//! Parameter extraction helpers
//!
//! Isolated pure functions, one per extracted field. Each scans left to
//! right and returns None when the query carries no usable value; the
//! calling rule decides the default.

use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

static BINARY_EXPR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\s*[+\-*/^]\s*\d+").unwrap());

static PALINDROME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:check|is|palindrome)\s+["']?([a-z0-9\s]+)["']?"#).unwrap());

static REVERSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)reverse\s+["']?([^"']+)["']?"#).unwrap());

/// First integer literal in a left-to-right scan
pub fn first_integer(text: &str) -> Option<&str> {
    INTEGER_RE.find(text).map(|m| m.as_str())
}

/// Every integer literal, in order of appearance
pub fn integers(text: &str) -> Vec<&str> {
    INTEGER_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// First `<int> <op> <int>` substring for `+ - * / ^`
pub fn binary_expression(text: &str) -> Option<&str> {
    BINARY_EXPR_RE.find(text).map(|m| m.as_str())
}

/// Tail of the query after the first standalone token `in`, with trailing
/// punctuation stripped
pub fn city_after_in(text: &str) -> Option<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let pos = words.iter().position(|w| w.to_lowercase() == "in")?;
    if pos + 1 >= words.len() {
        return None;
    }
    let city = words[pos + 1..]
        .join(" ")
        .trim_matches(|c| c == '?' || c == '.' || c == '!')
        .trim()
        .to_string();
    if city.is_empty() {
        None
    } else {
        Some(city)
    }
}

/// Every token after the literal word `of`, with `?` and `.` removed
pub fn country_after_of(text: &str) -> Option<String> {
    let cleaned = text.replace(['?', '.'], "");
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    let pos = words.iter().position(|w| *w == "of")?;
    if pos + 1 >= words.len() {
        return None;
    }
    Some(words[pos + 1..].join(" "))
}

/// Assets the market-price rule recognizes, in scan priority order
pub const CRYPTO_ASSETS: [&str; 5] = ["bitcoin", "ethereum", "cardano", "solana", "dogecoin"];

/// First known asset found in the query, by full name or 3-letter prefix.
/// The scan follows the fixed asset list order, not query order.
pub fn crypto_asset(lower: &str) -> Option<&'static str> {
    CRYPTO_ASSETS
        .iter()
        .find(|asset| lower.contains(*asset) || lower.contains(&asset[..3]))
        .copied()
}

/// Candidate text following "check"/"is"/"palindrome" in a lowercased query
pub fn palindrome_candidate(lower: &str) -> Option<String> {
    let captures = PALINDROME_RE.captures(lower)?;
    let candidate = captures.get(1)?.as_str().trim().to_string();
    if candidate.is_empty() {
        None
    } else {
        Some(candidate)
    }
}

/// Text to reverse: the substring after the word "reverse", or the whole
/// query with that word stripped
pub fn reverse_target(text: &str) -> String {
    if let Some(captures) = REVERSE_RE.captures(text) {
        if let Some(m) = captures.get(1) {
            return m.as_str().trim().to_string();
        }
    }
    text.replace("reverse", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_integer_scans_left_to_right() {
        assert_eq!(first_integer("factorial of 5 then 9"), Some("5"));
        assert_eq!(first_integer("no numbers here"), None);
    }

    #[test]
    fn integers_keeps_order_of_appearance() {
        assert_eq!(integers("sum of 10, 25 and 7"), vec!["10", "25", "7"]);
        assert!(integers("none").is_empty());
    }

    #[test]
    fn binary_expression_finds_the_first_operator_pair() {
        assert_eq!(binary_expression("125 * 48"), Some("125 * 48"));
        assert_eq!(binary_expression("what is 5+3 and 2+2"), Some("5+3"));
        assert_eq!(binary_expression("2 ^ 10 please"), Some("2 ^ 10"));
        assert_eq!(binary_expression("calculate something"), None);
    }

    #[test]
    fn city_is_the_tail_after_in() {
        assert_eq!(city_after_in("weather in Tokyo"), Some("Tokyo".to_string()));
        assert_eq!(
            city_after_in("what is the weather in New York?"),
            Some("New York".to_string())
        );
        assert_eq!(city_after_in("weather in"), None);
        assert_eq!(city_after_in("weather today"), None);
    }

    #[test]
    fn country_is_everything_after_of() {
        assert_eq!(
            country_after_of("capital of France"),
            Some("France".to_string())
        );
        assert_eq!(
            country_after_of("population of South Korea?"),
            Some("South Korea".to_string())
        );
        assert_eq!(country_after_of("tell me about France"), None);
    }

    #[test]
    fn crypto_scan_follows_list_order() {
        assert_eq!(crypto_asset("bitcoin price"), Some("bitcoin"));
        assert_eq!(crypto_asset("price of eth"), Some("ethereum"));
        assert_eq!(crypto_asset("how is dogecoin doing"), Some("dogecoin"));
        // both present: the list order decides, not the query order
        assert_eq!(crypto_asset("solana or bitcoin?"), Some("bitcoin"));
        assert_eq!(crypto_asset("crypto prices please"), None);
    }

    #[test]
    fn palindrome_candidate_follows_the_cue_word() {
        assert_eq!(
            palindrome_candidate("is racecar a palindrome"),
            Some("racecar a palindrome".to_string())
        );
        // the earliest cue word wins, so "check" lands inside the capture
        assert_eq!(
            palindrome_candidate("palindrome check madam"),
            Some("check madam".to_string())
        );
        assert_eq!(
            palindrome_candidate("check noon please"),
            Some("noon please".to_string())
        );
        assert_eq!(palindrome_candidate("palindrome"), None);
    }

    #[test]
    fn reverse_target_prefers_the_following_text() {
        assert_eq!(reverse_target("reverse hello world"), "hello world");
        assert_eq!(reverse_target("reverse 'hello world'"), "hello world");
        assert_eq!(reverse_target("reverse"), "");
    }
}
