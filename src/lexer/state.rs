use super::cursor::SourceChar;
use super::token::{Span, Symbol, Token, TokenKind, KEYWORD_HASHMAP};

pub enum LexerStateTransition {
    Stay,
    ChangeState(LexerState),
    ChangeStateAndEmit {
        new_state: LexerState,
        token: Token,
    },
    ChangeStateAndEmitAndPutBack {
        new_state: LexerState,
        token: Token,
        put_back: SourceChar,
    },
}

trait LexerStateExecutor {
    fn execute(&self, source: &str, next_char: Option<SourceChar>, line: u32)
        -> LexerStateTransition;
}

#[derive(Debug, Default)]
pub enum LexerState {
    #[default]
    Normal,
    Slash(SlashState),
    Comment,
    Ident(IdentState),
    String(StringState),
}

impl LexerState {
    pub fn execute(
        &self,
        source: &str,
        next_char: Option<SourceChar>,
        line: u32,
    ) -> LexerStateTransition {
        match self {
            LexerState::Normal => NormalState.execute(source, next_char, line),
            LexerState::Slash(s) => s.execute(source, next_char, line),
            LexerState::Comment => CommentState.execute(source, next_char, line),
            LexerState::Ident(s) => s.execute(source, next_char, line),
            LexerState::String(s) => s.execute(source, next_char, line),
        }
    }
}

fn single_char_token(source: &str, kind: TokenKind, c: &SourceChar) -> Token {
    let span = Span::between(c.offset, c.next_offset());
    Token {
        kind,
        text: Some(source[span.range()].into()),
        span,
        line: c.line,
    }
}

struct NormalState;

impl LexerStateExecutor for NormalState {
    fn execute(
        &self,
        source: &str,
        next_char: Option<SourceChar>,
        line: u32,
    ) -> LexerStateTransition {
        let Some(c) = next_char else {
            return LexerStateTransition::ChangeStateAndEmit {
                new_state: LexerState::Normal,
                token: Token {
                    kind: TokenKind::Eof,
                    text: None,
                    span: Span::new(source.len(), 0),
                    line,
                },
            };
        };

        let just = |kind: TokenKind| LexerStateTransition::ChangeStateAndEmit {
            new_state: LexerState::Normal,
            token: single_char_token(source, kind, &c),
        };

        match c.value {
            // Line counting happens when the character is read.
            '\n' | ' ' | '\t' | '\r' | '\x0b' | '\x0c' => LexerStateTransition::Stay,
            '/' => LexerStateTransition::ChangeState(LexerState::Slash(SlashState { start: c })),
            '"' => LexerStateTransition::ChangeState(LexerState::String(StringState {
                start: c,
                escaped: false,
            })),
            'a'..='z' | 'A'..='Z' | '_' => {
                LexerStateTransition::ChangeState(LexerState::Ident(IdentState { start: c }))
            }
            value => match Symbol::from_char(value) {
                Some(symbol) => just(TokenKind::Symbol(symbol)),
                None => just(TokenKind::Unrecognized),
            },
        }
    }
}

/// Seen a single `/`; a second one opens a comment.
#[derive(Debug)]
pub struct SlashState {
    start: SourceChar,
}

impl LexerStateExecutor for SlashState {
    fn execute(
        &self,
        source: &str,
        next_char: Option<SourceChar>,
        line: u32,
    ) -> LexerStateTransition {
        let _ = line;
        let token = single_char_token(source, TokenKind::Unrecognized, &self.start);
        match next_char {
            Some(c) if c.value == '/' => LexerStateTransition::ChangeState(LexerState::Comment),
            Some(c) => LexerStateTransition::ChangeStateAndEmitAndPutBack {
                new_state: LexerState::Normal,
                token,
                put_back: c,
            },
            None => LexerStateTransition::ChangeStateAndEmit {
                new_state: LexerState::Normal,
                token,
            },
        }
    }
}

struct CommentState;

impl LexerStateExecutor for CommentState {
    fn execute(
        &self,
        source: &str,
        next_char: Option<SourceChar>,
        line: u32,
    ) -> LexerStateTransition {
        let _ = (source, line);
        match next_char {
            Some(c) if c.value != '\n' => LexerStateTransition::Stay,
            _ => LexerStateTransition::ChangeState(LexerState::Normal),
        }
    }
}

#[derive(Debug)]
pub struct IdentState {
    start: SourceChar,
}

impl IdentState {
    fn lex_ident_or_keyword(&self, source: &str, end: usize) -> Token {
        let span = Span::between(self.start.offset, end);
        let lexeme = &source[span.range()];
        Token {
            kind: KEYWORD_HASHMAP
                .get(lexeme)
                .map(|keyword| TokenKind::Keyword(*keyword))
                .unwrap_or(TokenKind::Ident),
            text: Some(lexeme.into()),
            span,
            line: self.start.line,
        }
    }
}

impl LexerStateExecutor for IdentState {
    fn execute(
        &self,
        source: &str,
        next_char: Option<SourceChar>,
        line: u32,
    ) -> LexerStateTransition {
        let _ = line;
        let Some(c) = next_char else {
            return LexerStateTransition::ChangeStateAndEmit {
                new_state: LexerState::Normal,
                token: self.lex_ident_or_keyword(source, source.len()),
            };
        };

        if c.value.is_ascii_alphanumeric() || c.value == '_' {
            LexerStateTransition::Stay
        } else {
            LexerStateTransition::ChangeStateAndEmitAndPutBack {
                new_state: LexerState::Normal,
                token: self.lex_ident_or_keyword(source, c.offset),
                put_back: c,
            }
        }
    }
}

/// Inside a string literal. `escaped` is set right after a backslash.
#[derive(Debug)]
pub struct StringState {
    start: SourceChar,
    escaped: bool,
}

impl StringState {
    fn lex_string(&self, source: &str, content_end: usize, token_end: usize) -> Token {
        let content_start = self.start.next_offset();
        Token {
            kind: TokenKind::StringLiteral,
            text: Some(source[content_start..content_end].into()),
            span: Span::between(self.start.offset, token_end),
            line: self.start.line,
        }
    }
}

impl LexerStateExecutor for StringState {
    fn execute(
        &self,
        source: &str,
        next_char: Option<SourceChar>,
        line: u32,
    ) -> LexerStateTransition {
        let _ = line;
        // Reaching the end of the source closes the literal.
        let Some(c) = next_char else {
            return LexerStateTransition::ChangeStateAndEmit {
                new_state: LexerState::Normal,
                token: self.lex_string(source, source.len(), source.len()),
            };
        };

        if self.escaped {
            return LexerStateTransition::ChangeState(LexerState::String(StringState {
                start: self.start,
                escaped: false,
            }));
        }

        match c.value {
            '\\' => LexerStateTransition::ChangeState(LexerState::String(StringState {
                start: self.start,
                escaped: true,
            })),
            '"' => LexerStateTransition::ChangeStateAndEmit {
                new_state: LexerState::Normal,
                token: self.lex_string(source, c.offset, c.next_offset()),
            },
            _ => LexerStateTransition::Stay,
        }
    }
}
