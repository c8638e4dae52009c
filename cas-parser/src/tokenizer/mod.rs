pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // the catch-all `Symbol` token means the lexer never fails, but stay on the safe side
        let kind = result.unwrap_or(TokenKind::Symbol);
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn factorial_ratio() {
        compare_tokens(
            "n!/(n-3)!",
            [
                (TokenKind::Name, "n"),
                (TokenKind::Factorial, "!"),
                (TokenKind::Div, "/"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "n"),
                (TokenKind::Sub, "-"),
                (TokenKind::Int, "3"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Factorial, "!"),
            ],
        );
    }

    #[test]
    fn call_with_args() {
        compare_tokens(
            "binomial(n1 + 1, k)^2 $",
            [
                (TokenKind::Name, "binomial"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "n1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "1"),
                (TokenKind::Comma, ","),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "k"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Exp, "^"),
                (TokenKind::Int, "2"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "$"),
            ],
        );
    }
}
