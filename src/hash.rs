//! Reading values out of the page's URL-hash state.
//!
//! The hash looks like `#q=rust&numberOfResults=25`. Keys and values are
//! separated by `=`, pairs by `&`. Values are percent-decoded (a `%` not
//! followed by two hex digits stays as is, and `+` is not a space); a value
//! wrapped in double quotes has the quotes removed.

/// Hash parameter holding the number of results per page.
pub const NUMBER_OF_RESULTS: &str = "numberOfResults";

/// Provides the current hash of the page.
pub trait HashSource {
    /// The current hash, with or without the leading `#`, if any.
    fn get_hash(&self) -> Option<String>;
}

/// A page without hash state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHash;

impl HashSource for NoHash {
    fn get_hash(&self) -> Option<String> {
        None
    }
}

/// A fixed hash.
#[derive(Debug, Clone, Default)]
pub struct StaticHash(pub String);

impl HashSource for StaticHash {
    fn get_hash(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Returns the value of `key` in `hash`, or `None` when absent or empty.
///
/// ```rust
/// use bubbletea_results_per_page::hash::get_value;
///
/// assert_eq!(get_value("numberOfResults", "#q=a&numberOfResults=25").as_deref(), Some("25"));
/// assert_eq!(get_value("numberOfResults", "#q=a"), None);
/// ```
pub fn get_value(key: &str, hash: &str) -> Option<String> {
    let hash = hash.strip_prefix('#').unwrap_or(hash);
    hash.split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| decode(v))
        .map(|v| unquote(&v).to_string())
        .filter(|v| !v.is_empty())
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

fn decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                let hex = &bytes[i + 1..i + 3];
                let byte = hex
                    .iter()
                    .all(u8::is_ascii_hexdigit)
                    .then(|| std::str::from_utf8(hex).ok())
                    .flatten()
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match byte {
                    Some(b) => {
                        out.push(b);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_value_variants() {
        assert_eq!(get_value(NUMBER_OF_RESULTS, "numberOfResults=50").as_deref(), Some("50"));
        assert_eq!(get_value(NUMBER_OF_RESULTS, "#numberOfResults=").as_deref(), None);
        assert_eq!(get_value("q", "#q=%22hello%20world%22").as_deref(), Some("hello world"));
        assert_eq!(get_value("q", "#q=100%").as_deref(), Some("100%"));
        assert_eq!(get_value(NUMBER_OF_RESULTS, "numberOfResults=%+5").as_deref(), Some("%+5"));
        assert_eq!(get_value(NUMBER_OF_RESULTS, "numberOfResults=%-5").as_deref(), Some("%-5"));
        assert_eq!(get_value("q", "#q=a+b").as_deref(), Some("a+b"));
        assert_eq!(get_value("missing", ""), None);
    }

    #[test]
    fn test_sources() {
        assert_eq!(NoHash.get_hash(), None);
        assert_eq!(StaticHash("#a=1".into()).get_hash().as_deref(), Some("#a=1"));
    }
}
