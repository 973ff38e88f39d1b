//! Splits text into word and number tokens.
//!
//! A *word* starts with an ASCII letter and continues through letters and
//! apostrophes. A *number* starts with an ASCII digit and continues through
//! digits, plus at most one decimal point that is immediately followed by a
//! digit. Every other byte is a separator.
//!
//! Tokens are borrowed from the text they came from. Since only ASCII bytes
//! ever land inside a token, every token is valid UTF-8 even when the text
//! around it isn't.

/// Returns a copy of `text` with every ASCII uppercase letter replaced by its
/// lowercase equivalent. Other bytes, including non-ASCII ones, are copied
/// unchanged.
#[must_use]
pub fn to_lowercase(text: &[u8]) -> Vec<u8> {
    text.to_ascii_lowercase()
}

/// Returns a lazy iterator over the tokens of `text`, in the order they
/// appear. Calling `tokenize` again scans from the start; a clone of the
/// iterator continues from the same position.
#[must_use]
pub fn tokenize(text: &[u8]) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}

/// Iterator returned by [`tokenize`].
#[derive(Clone, Debug)]
pub struct Tokens<'data> {
    text: &'data [u8],
    pos: usize,
}

impl<'data> Iterator for Tokens<'data> {
    type Item = &'data [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        let start = self.pos + text[self.pos..].iter().position(u8::is_ascii_alphanumeric)?;
        let len = if text[start].is_ascii_alphabetic() {
            word_len(&text[start..])
        } else {
            number_len(&text[start..])
        };
        self.pos = start + len;
        Some(&text[start..self.pos])
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'\''
}

/// Length of the word at the start of `text`, which begins with a letter.
fn word_len(text: &[u8]) -> usize {
    text.iter().position(|&b| !is_word_byte(b)).unwrap_or(text.len())
}

/// Length of the number at the start of `text`, which begins with a digit.
/// A second decimal point, or one not followed by a digit, ends the number.
fn number_len(text: &[u8]) -> usize {
    let mut seen_point = false;
    let mut len = 0;
    while let Some(&b) = text.get(len) {
        if b == b'.' {
            let digit_follows = text.get(len + 1).is_some_and(u8::is_ascii_digit);
            if seen_point || !digit_follows {
                break;
            }
            seen_point = true;
        } else if !b.is_ascii_digit() {
            break;
        }
        len += 1;
    }
    len
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use bstr::ByteSlice;

    fn words(text: &str) -> Vec<&str> {
        tokenize(text.as_bytes()).map(|t| t.to_str().unwrap()).collect()
    }

    #[test]
    fn punctuation_and_whitespace_separate_words() {
        assert_eq!(words("Hello, World!"), ["Hello", "World"]);
        assert_eq!(words("hello---world...test!!!end"), ["hello", "world", "test", "end"]);
        assert_eq!(words("  \t\n"), Vec::<&str>::new());
    }

    #[test]
    fn lowercasing_before_tokenizing_gives_lowercase_words() {
        let text = to_lowercase(b"Hello, World!");
        let tokens: Vec<&str> = tokenize(&text).map(|t| t.to_str().unwrap()).collect();
        assert_eq!(tokens, ["hello", "world"]);
    }

    #[test]
    fn lowercasing_leaves_non_ascii_alone() {
        assert_eq!(to_lowercase("ÀB ÉÇ".as_bytes()), "Àb ÉÇ".as_bytes());
    }

    #[test]
    fn decimal_points_need_a_digit_on_each_side() {
        assert_eq!(words("It's 3.14 or 3..14 or .5"), ["It's", "3.14", "or", "3", "14", "or", "5"]);
        assert_eq!(words("3.14."), ["3.14"]);
        assert_eq!(words("3."), ["3"]);
        assert_eq!(words("1.2.3"), ["1.2", "3"]);
    }

    #[test]
    fn apostrophes_continue_words_but_never_start_them() {
        assert_eq!(words("'tis rock'n'roll ''"), ["tis", "rock'n'roll"]);
        assert_eq!(words("don't'"), ["don't'"]);
        assert_eq!(words("7's"), ["7", "s"]);
    }

    #[test]
    fn letters_and_digits_never_share_a_token() {
        assert_eq!(words("abc123def"), ["abc", "123", "def"]);
        assert_eq!(words("4.5kg"), ["4.5", "kg"]);
    }

    #[test]
    fn non_ascii_bytes_are_separators() {
        assert_eq!(words("naïve café"), ["na", "ve", "caf"]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert_eq!(tokenize(b"").next(), None);
    }

    #[test]
    fn tokenizing_again_starts_over() {
        let text = b"one two three";
        let mut tokens = tokenize(text);
        tokens.next();
        let rest: Vec<&[u8]> = tokens.clone().collect();
        assert_eq!(rest, vec![&b"two"[..], &b"three"[..]]);
        assert_eq!(tokens.count(), 2);
        assert_eq!(tokenize(text).count(), 3);
    }
}
