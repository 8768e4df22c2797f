//! Text normalization for speech synthesis
//!
//! Chat replies contain URLs, code and paths that synthesis engines read out
//! badly. This is a lexical cleanup, not a parser: every input is accepted and
//! the rules below run in a fixed order, each on the output of the previous one.

use once_cell::sync::Lazy;
use regex::Regex;

/// Spoken stand-in for a fenced code block
pub const CODE_BLOCK_PLACEHOLDER: &str = "\nAs shown on the app.\n";

/// Mis-decoded inverted exclamation mark that shows up in model output
const PUNCTUATION_ARTIFACT: &str = "ยก";

const URL_SCHEMES: [&str; 2] = ["https://", "http://"];

// Order matters: ".com" runs before ".co.uk"
const DOMAIN_SUFFIXES: [(&str, &str); 3] = [
    (".com", " dot com"),
    (".org", " dot org"),
    (".co.uk", " dot co dot UK"),
];

// Triple-backtick fence, across lines, shortest match
static CODE_FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static SLASH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-zA-Z0-9])/([a-zA-Z0-9])").unwrap());

/// Normalize chat text for speech synthesis
///
/// # Arguments
/// * `text` - Raw message content
///
/// # Returns
/// The rewritten text. Never fails.
pub fn normalize_text(text: &str) -> String {
    let mut text = text.replace(PUNCTUATION_ARTIFACT, "");

    for scheme in URL_SCHEMES {
        text = text.replace(scheme, "");
    }

    for (suffix, spoken) in DOMAIN_SUFFIXES {
        text = text.replace(suffix, spoken);
    }

    let text = CODE_FENCE_RE.replace_all(&text, CODE_BLOCK_PLACEHOLDER);

    SLASH_RE
        .replace_all(&text, "$1 forward slash $2")
        .into_owned()
}
