//! The `lex` command: dump the token stream of a program.

use spyc::{read_program, Problem};

use super::fail;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_program(path).unwrap_or_else(|problem| fail(&problem));
    let tokens = spy_lexer::lex(&content).unwrap_or_else(|err| fail(&Problem::Lex(err)));

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for tok in &tokens {
        println!("  {:?} {:?} @ {}:{}", tok.kind, tok.lexeme, tok.line, tok.column);
    }
}
