//! Input sanitization and validation primitives.
//!
//! Every function here is total: it accepts any string and returns a cleaned
//! value or a boolean, never an error.
//!
//! These filters are a display-layer defence in depth. They are a blunt
//! denylist/allowlist, not a parser, and they do not replace parameterized
//! queries or context-aware output escaping.

mod csrf;
mod rate_limit;

pub use csrf::{CspNonce, generate_csp_header, generate_csrf_token, validate_csrf_token};
pub use rate_limit::RateLimiter;

use std::sync::LazyLock;

use quickcart_core::Email;
use regex::Regex;

/// SQL keywords stripped by [`sanitize_for_sql`], removed one after another.
static SQL_KEYWORDS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        "union", "select", "insert", "update", "delete", "drop", "create", "alter",
    ]
    .iter()
    .map(|keyword| Regex::new(&format!("(?i){keyword}")).expect("Invalid regex"))
    .collect()
});

static JAVASCRIPT_URI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").expect("Invalid regex"));

static INLINE_HANDLER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)on\w+\s*=").expect("Invalid regex"));

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)script").expect("Invalid regex"));

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s\-']+$").expect("Invalid regex"));

/// Characters treated as "special" by [`contains_special_chars`].
const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Maximum length of a customer name.
pub const MAX_NAME_LENGTH: usize = 50;

/// What kind of value a form field holds, selecting the narrowing filter
/// applied by [`sanitize_user_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SanitizeKind {
    /// Free text: HTML-significant characters are entity-encoded.
    #[default]
    Text,
    /// Entity-encoded, then lower-cased.
    Email,
    /// Letters, whitespace, hyphens and apostrophes only.
    Name,
    /// Digits, whitespace and `+ - ( )` only.
    Phone,
    /// ASCII letters, digits, whitespace and hyphens only.
    Zip,
}

impl std::str::FromStr for SanitizeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "email" => Ok(Self::Email),
            "name" => Ok(Self::Name),
            "phone" => Ok(Self::Phone),
            "zip" => Ok(Self::Zip),
            _ => Err(format!("invalid sanitize kind: {s}")),
        }
    }
}

// =============================================================================
// Sanitizers
// =============================================================================

/// Entity-encode `< > " ' &` and trim surrounding whitespace.
#[must_use]
pub fn sanitize_input(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '&' => out.push_str("&amp;"),
            other => out.push(other),
        }
    }
    out.trim().to_string()
}

/// Strip angle brackets, `javascript:` URIs, inline `on*=` handlers and the
/// word `script`.
#[must_use]
pub fn sanitize_html(input: &str) -> String {
    let stripped: String = input.chars().filter(|c| !matches!(c, '<' | '>')).collect();
    let stripped = JAVASCRIPT_URI_RE.replace_all(&stripped, "");
    let stripped = INLINE_HANDLER_RE.replace_all(&stripped, "");
    let stripped = SCRIPT_RE.replace_all(&stripped, "");
    stripped.trim().to_string()
}

/// Remove quotes, semicolons, backslashes, comment sequences and common SQL
/// keywords (case-insensitive).
#[must_use]
pub fn sanitize_for_sql(input: &str) -> String {
    let mut out: String = input
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | ';' | '\\'))
        .collect();
    for sequence in ["--", "/*", "*/"] {
        out = out.replace(sequence, "");
    }
    for keyword in SQL_KEYWORDS.iter() {
        out = keyword.replace_all(&out, "").into_owned();
    }
    out.trim().to_string()
}

/// Clean a form value according to its kind.
///
/// Text and email values are entity-encoded first. Name, phone and zip values
/// go straight through their allowlist, which already excludes every
/// HTML-significant character apart from the apostrophe permitted in names;
/// encoding first would leak entity letters (`lt`, `gt`, `x27`) into the
/// narrowed output.
#[must_use]
pub fn sanitize_user_input(input: &str, kind: SanitizeKind) -> String {
    let sanitized = match kind {
        SanitizeKind::Text => sanitize_input(input),
        SanitizeKind::Email => sanitize_input(input).to_lowercase(),
        SanitizeKind::Name => keep(input, |c| {
            c.is_ascii_alphabetic() || c.is_whitespace() || c == '-' || c == '\''
        }),
        SanitizeKind::Phone => keep(input, |c| {
            c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '(' | ')')
        }),
        SanitizeKind::Zip => keep(input, |c| {
            c.is_ascii_alphanumeric() || c.is_whitespace() || c == '-'
        }),
    };
    sanitized.trim().to_string()
}

fn keep(input: &str, allowed: impl Fn(char) -> bool) -> String {
    input.chars().filter(|c| allowed(*c)).collect()
}

// =============================================================================
// Validators
// =============================================================================

/// Whether `email` is a well-formed address of at most 254 characters.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    Email::parse(email).is_ok()
}

/// Whether `name` is 1-50 letters, whitespace, hyphens or apostrophes.
#[must_use]
pub fn validate_name(name: &str) -> bool {
    NAME_RE.is_match(name) && validate_length(name, 1, MAX_NAME_LENGTH)
}

/// Whether the character count of `input` lies in `min..=max`.
#[must_use]
pub fn validate_length(input: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&input.chars().count())
}

/// Whether `input` contains a special character that is not in `allowed`.
#[must_use]
pub fn contains_special_chars(input: &str, allowed: &str) -> bool {
    input
        .chars()
        .filter(|c| !allowed.contains(*c))
        .any(|c| SPECIAL_CHARS.contains(c))
}

/// Whether `input` parses as an absolute `http` or `https` URL.
#[must_use]
pub fn validate_url(input: &str) -> bool {
    url::Url::parse(input).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Whether the extension of `file_name` (case-insensitive) is in `allowed`.
#[must_use]
pub fn validate_file_type(file_name: &str, allowed: &[&str]) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .is_some_and(|ext| allowed.iter().any(|a| a.eq_ignore_ascii_case(&ext)))
}

/// Whether `size` is non-zero and at most `max_bytes`.
#[must_use]
pub const fn validate_file_size(size: u64, max_bytes: u64) -> bool {
    size > 0 && size <= max_bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_input_encodes_entities() {
        assert_eq!(
            sanitize_input("  <a href=\"x\">Tom & Jerry's</a> "),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_sanitize_html() {
        assert_eq!(
            sanitize_html("<img src=x onerror=alert(1)>"),
            "img src=x alert(1)"
        );
        assert_eq!(sanitize_html("JavaScript:void(0)"), "void(0)");
        assert_eq!(sanitize_html("<SCRIPT>hi</script>"), "hi/");
    }

    #[test]
    fn test_sanitize_for_sql() {
        assert_eq!(
            sanitize_for_sql("'; DROP TABLE users; --"),
            "TABLE users"
        );
        assert_eq!(sanitize_for_sql("1 UNION SELECT * FROM t"), "1   * FROM t");
        assert_eq!(sanitize_for_sql("a/*comment*/b\\"), "acommentb");
    }

    #[test]
    fn test_sanitize_for_sql_keywords_are_sequential() {
        // "union" goes first, which exposes "select" to the next pass.
        assert_eq!(sanitize_for_sql("selunionect"), "");
    }

    #[test]
    fn test_sanitize_name_strips_markup() {
        let cleaned = sanitize_user_input("<script>John</script>", SanitizeKind::Name);
        assert_eq!(cleaned, "scriptJohnscript");
        assert!(!cleaned.contains('<') && !cleaned.contains('>'));
    }

    #[test]
    fn test_sanitize_name_keeps_apostrophes_and_hyphens() {
        assert_eq!(
            sanitize_user_input(" Mary-Jane O'Brien3 ", SanitizeKind::Name),
            "Mary-Jane O'Brien"
        );
    }

    #[test]
    fn test_sanitize_phone_and_zip() {
        assert_eq!(
            sanitize_user_input("+1 (555) 010-9999 ext.", SanitizeKind::Phone),
            "+1 (555) 010-9999"
        );
        assert_eq!(
            sanitize_user_input("SW1A 1AA;<b>", SanitizeKind::Zip),
            "SW1A 1AAb"
        );
    }

    #[test]
    fn test_sanitize_email_lowercases() {
        assert_eq!(
            sanitize_user_input("  Jane@Doe.COM ", SanitizeKind::Email),
            "jane@doe.com"
        );
    }

    #[test]
    fn test_sanitize_text_encodes() {
        assert_eq!(
            sanitize_user_input("5th & Main", SanitizeKind::Text),
            "5th &amp; Main"
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jane@doe.com"));
        assert!(!validate_email("bad"));
        assert!(!validate_email(&format!("{}@example.com", "a".repeat(250))));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Jane"));
        assert!(validate_name("Anne-Marie O'Neil"));
        assert!(!validate_name(""));
        assert!(!validate_name("R2D2"));
        assert!(!validate_name(&"a".repeat(51)));
        assert!(validate_name(&"a".repeat(50)));
    }

    #[test]
    fn test_contains_special_chars() {
        assert!(contains_special_chars("hello!", ""));
        assert!(!contains_special_chars("hello!", "!"));
        assert!(!contains_special_chars("plain words", ""));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://picsum.photos/seed/laptop/300/200"));
        assert!(validate_url("http://localhost:3000"));
        assert!(!validate_url("javascript:alert(1)"));
        assert!(!validate_url("not a url"));
    }

    #[test]
    fn test_validate_file_type_and_size() {
        assert!(validate_file_type("photo.JPG", &["jpg", "png"]));
        assert!(!validate_file_type("archive.tar.gz", &["jpg", "png"]));
        assert!(!validate_file_type("noextension", &["noextension"]));
        assert!(validate_file_size(1024, 2048));
        assert!(!validate_file_size(0, 2048));
        assert!(!validate_file_size(4096, 2048));
    }

    #[test]
    fn test_sanitize_kind_from_str() {
        assert_eq!("zip".parse::<SanitizeKind>(), Ok(SanitizeKind::Zip));
        assert!("html".parse::<SanitizeKind>().is_err());
    }
}
