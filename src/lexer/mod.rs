mod cursor;
pub mod formatter;
mod state;
mod token;

use cursor::SourceChar;
use state::{LexerState, LexerStateTransition};
use std::str::CharIndices;
pub use token::{Keyword, Span, Symbol, Token, TokenKind, KEYWORD_HASHMAP};

/// Scans the whole source into tokens. The last token is always the only `Eof`.
pub fn scan(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

#[derive(Debug)]
pub struct Lexer<'src> {
    source: &'src str,
    chars: CharIndices<'src>,
    state: LexerState,
    lookahead: Option<SourceChar>,
    line: u32,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices(),
            state: LexerState::default(),
            lookahead: None,
            line: 1,
            finished: false,
        }
    }
}

impl<'src> Lexer<'src> {
    fn next_char(&mut self) -> Option<SourceChar> {
        if let Some(lookahead) = self.lookahead.take() {
            return Some(lookahead);
        }

        let (offset, value) = self.chars.next()?;
        let c = SourceChar {
            value,
            offset,
            line: self.line,
        };
        if value == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn put_back_char(&mut self, c: SourceChar) {
        self.lookahead = Some(c);
    }

    /// Produces the next token. Once the source is exhausted this keeps
    /// returning `Eof`.
    pub fn next_token(&mut self) -> Token {
        loop {
            let next_char = self.next_char();
            let transition = self.state.execute(self.source, next_char, self.line);

            match transition {
                LexerStateTransition::Stay => {}
                LexerStateTransition::ChangeState(new_state) => {
                    self.state = new_state;
                }
                LexerStateTransition::ChangeStateAndEmit { new_state, token } => {
                    self.state = new_state;
                    return token;
                }
                LexerStateTransition::ChangeStateAndEmitAndPutBack {
                    new_state,
                    token,
                    put_back,
                } => {
                    self.state = new_state;
                    self.put_back_char(put_back);
                    return token;
                }
            }
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if matches!(token.kind, TokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}
