//! Text tokenization.
//!
//! Splits raw text into normalized tokens. Maximal runs of word
//! characters (`[a-zA-Z0-9'_-]`) become one token, emitted lowercased;
//! every other non-whitespace character becomes its own single-character
//! token, kept as-is. Whitespace never produces a token.
//!
//! Punctuation is part of the signal on purpose: an exclamation mark
//! carries sentiment just like a word does, so it gets counted.

/// True for characters that extend a word token.
fn is_word_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || matches!(c, '\'' | '_' | '-')
}

/// Tokenizes `text` into an ordered sequence of normalized tokens.
///
/// Pure and total: any input yields a (possibly empty) token list, order
/// follows the input, and repeated tokens are kept.
///
/// # Examples
///
/// ```
/// use polarus::tokenizer::tokenize;
///
/// assert_eq!(tokenize("Hello, World!"), vec!["hello", ",", "world", "!"]);
/// assert_eq!(tokenize("don't-stop"), vec!["don't-stop"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
  let mut tokens = Vec::new();
  let mut word = String::new();

  for c in text.chars() {
    if is_word_char(c) {
      word.push(c);
      continue;
    }
    if !word.is_empty() {
      tokens.push(word.to_lowercase());
      word.clear();
    }
    if !c.is_whitespace() {
      tokens.push(c.to_string());
    }
  }

  if !word.is_empty() {
    tokens.push(word.to_lowercase());
  }

  tokens
}
