//! Parses keys and IVs from the comma-separated hex words users type,
//! e.g. `0x12345678,0x12345678,0x99AABBCC,0x99AABBCC`.

use crate::{Error, Iv, Key, Result, Word};

/// The key the prompt used to suggest.
pub const DEFAULT_KEY: &str = "0x12345678,0x12345678,0x99AABBCC,0x99AABBCC";

/// The IV the prompt used to suggest.
pub const DEFAULT_IV: &str = "0x11111111,0x22222222";

/// Parses a single hex word, with or without a `0x` prefix.
pub fn parse_word(token: &str) -> Result<Word> {
    let trimmed = token.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let bad = || Error::InvalidHex { token: token.to_string() };

    // from_str_radix would take a leading '+'.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(bad());
    }
    Word::from_str_radix(digits, 16).map_err(|_| bad())
}

fn parse_words<const N: usize>(text: &str, arity: impl FnOnce(usize) -> Error) -> Result<[Word; N]> {
    let tokens: Vec<&str> = text.split(',').collect();
    if tokens.len() != N {
        return Err(arity(tokens.len()));
    }
    let mut words = [0; N];
    for (word, token) in words.iter_mut().zip(tokens) {
        *word = parse_word(token)?;
    }
    Ok(words)
}

/// Parses exactly four comma-separated hex words into a `Key`.
///
/// # Example:
/// ```
/// use teamodes::params;
///
/// let key = params::parse_key(params::DEFAULT_KEY).unwrap();
/// assert_eq!(key, [0x12345678, 0x12345678, 0x99AABBCC, 0x99AABBCC]);
/// assert!(params::parse_key("1,2,3").is_err());
/// ```
pub fn parse_key(text: &str) -> Result<Key> {
    parse_words(text, |found| Error::KeyArity { found })
}

/// Parses exactly two comma-separated hex words into an `Iv`.
pub fn parse_iv(text: &str) -> Result<Iv> {
    parse_words(text, |found| Error::IvArity { found })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_words() {
        assert_eq!(parse_word("0x99AABBCC").unwrap(), 0x99AA_BBCC);
        assert_eq!(parse_word("0X0a").unwrap(), 10);
        assert_eq!(parse_word(" deadbeef ").unwrap(), 0xDEAD_BEEF);
        assert_eq!(parse_word("ffffffff").unwrap(), u32::MAX);
    }

    #[test]
    fn rejects_bad_words() {
        for token in ["", "0x", "xyz", "0x1G", "+1", "-1", "1 2", "100000000"] {
            match parse_word(token) {
                Err(Error::InvalidHex { token: t }) => assert_eq!(t, token),
                other => panic!("{:?} parsed as {:?}", token, other),
            }
        }
    }

    #[test]
    fn default_iv() {
        assert_eq!(parse_iv(DEFAULT_IV).unwrap(), [0x1111_1111, 0x2222_2222]);
    }

    #[test]
    fn arity_is_checked_before_tokens() {
        assert!(matches!(parse_key("zz,1,2"), Err(Error::KeyArity { found: 3 })));
        assert!(matches!(parse_key("1,2,3,4,5"), Err(Error::KeyArity { found: 5 })));
        assert!(matches!(parse_iv("1"), Err(Error::IvArity { found: 1 })));
        assert!(matches!(parse_iv(""), Err(Error::IvArity { found: 1 })));
    }

    #[test]
    fn names_the_offending_token() {
        match parse_key("0x1,0x2,nope,0x4") {
            Err(Error::InvalidHex { token }) => assert_eq!(token, "nope"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
