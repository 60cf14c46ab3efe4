//! Corpus tokenization.
//!
//! Text is split on `'\n'` first and then on single `' '`
//! characters, so two consecutive spaces produce an empty token.
//! A token is a word only if it is non-empty and made entirely of
//! alphabetic characters. Anything else ("don't", "King,", "3rd")
//! is rejected whole; nothing is trimmed or normalized.

/// A token as seen by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Alphabetic token that will be counted
    Word(&'a str),
    /// Anything else, including empty tokens
    Rejected(&'a str),
}

/// Split text into raw candidate tokens, in corpus order.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').flat_map(|line| line.split(' '))
}

/// Returns true if `token` counts as a word.
///
/// Case is not folded and letters outside ASCII are accepted
/// (`char::is_alphabetic`). That property also covers letter-like
/// numerals (Unicode category `Nl`, e.g. "Ⅻ"), which are kept as
/// words on purpose. Decimal digits of any script still reject the
/// token.
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Classify every token of `text`.
pub fn scan(text: &str) -> impl Iterator<Item = Token<'_>> {
    tokens(text).map(|token| {
        if is_word(token) {
            Token::Word(token)
        } else {
            Token::Rejected(token)
        }
    })
}

/// Accepted words of `text`, in corpus order.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    tokens(text).filter(|token| is_word(token))
}
