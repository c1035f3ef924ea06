use sift_core::Token;

/// Shortest run of characters kept as a token.
const MIN_TOKEN_LEN: usize = 2;

/// Text tokenizer: splits on anything that is not an ASCII letter, digit, or
/// apostrophe, drops runs shorter than two characters, and lowercases.
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenize a string into normalized terms, in input order.
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for c in input.chars() {
            if is_token_char(c) {
                current.push(c.to_ascii_lowercase());
            } else {
                flush(&mut current, &mut tokens);
            }
        }
        flush(&mut current, &mut tokens);

        tokens
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\''
}

/// Emit the buffered run if it is long enough, then reset the buffer.
fn flush(current: &mut String, tokens: &mut Vec<Token>) {
    if current.len() >= MIN_TOKEN_LEN {
        tokens.push(std::mem::take(current));
    } else {
        current.clear();
    }
}
