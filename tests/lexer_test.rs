use proptest::prelude::*;

use jail::lexer::{
    formatter::{BasicFormatter, TokenFormatter},
    scan, Keyword, Lexer, Span, TokenKind,
};

fn check(input: &str, expected: &str, test_name: &str) {
    let formatter = BasicFormatter;
    let actual = Lexer::new(input)
        .map(|token| formatter.format(&token))
        .collect::<Vec<_>>()
        .join("\n");

    assert_eq!(actual, expected, "Failed the test {test_name}");
}

#[test]
fn smoke_test() {
    check("", "EOF 1", "smoke");
}

#[test]
fn test_declaration() {
    check(
        r#"var x = "hi""#,
        "VAR var 1\nIDENTIFIER x 1\nEQUAL = 1\nSTRING \"hi\" 1\nEOF 1",
        "declaration",
    );
}

#[test]
fn test_symbols() {
    check(
        "f(a, b) { } + =",
        "IDENTIFIER f 1\nLEFT_PAREN ( 1\nIDENTIFIER a 1\nCOMMA , 1\nIDENTIFIER b 1\n\
         RIGHT_PAREN ) 1\nLEFT_BRACE { 1\nRIGHT_BRACE } 1\nPLUS + 1\nEQUAL = 1\nEOF 1",
        "symbols",
    );
}

#[test]
fn test_line_numbers() {
    check("a\nb\n", "IDENTIFIER a 1\nIDENTIFIER b 2\nEOF 3", "lines");
    check("\r\n\tx", "IDENTIFIER x 2\nEOF 2", "carriage return");
}

#[test]
fn test_comments() {
    check("// comment\nx", "IDENTIFIER x 2\nEOF 2", "comment");
    check("x // trailing", "IDENTIFIER x 1\nEOF 1", "trailing comment");
    check(
        "a/b",
        "IDENTIFIER a 1\nUNRECOGNIZED / 1\nIDENTIFIER b 1\nEOF 1",
        "lone slash",
    );
    check("/", "UNRECOGNIZED / 1\nEOF 1", "slash at end");
}

#[test]
fn test_keywords_need_whole_words() {
    check(
        "variable funcs printer _print print2",
        "IDENTIFIER variable 1\nIDENTIFIER funcs 1\nIDENTIFIER printer 1\n\
         IDENTIFIER _print 1\nIDENTIFIER print2 1\nEOF 1",
        "keyword prefixes",
    );
    check(
        "var func print",
        "VAR var 1\nFUNC func 1\nPRINT print 1\nEOF 1",
        "keywords",
    );
}

#[test]
fn test_unrecognized() {
    check(
        "#;é9",
        "UNRECOGNIZED # 1\nUNRECOGNIZED ; 1\nUNRECOGNIZED é 1\nUNRECOGNIZED 9 1\nEOF 1",
        "unrecognized",
    );
}

#[test]
fn test_strings() {
    check(r#""abc"#, "STRING \"abc\" 1\nEOF 1", "unterminated");
    check("\"a\nb\" c", "STRING \"a\nb\" 1\nIDENTIFIER c 2\nEOF 2", "multiline");
    check(r#""""#, "STRING \"\" 1\nEOF 1", "empty");
}

#[test]
fn test_escapes_are_kept_verbatim() {
    let tokens = scan(r#""a\"b" "c\\" "d\"#);
    let texts = tokens
        .iter()
        .map(|token| token.text.as_deref())
        .collect::<Vec<_>>();
    assert_eq!(
        texts,
        vec![Some(r#"a\"b"#), Some(r#"c\\"#), Some(r#"d\"#), None]
    );
}

#[test]
fn test_spans() {
    let tokens = scan("var name = \"v\"");
    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Var));
    assert_eq!(tokens[0].span, Span::new(0, 3));
    assert_eq!(tokens[1].span, Span::new(4, 4));
    assert_eq!(tokens[3].span, Span::new(11, 3));
    assert_eq!(tokens[4].span, Span::new(14, 0));
}

#[test]
fn test_next_token_after_end() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

proptest! {
    #[test]
    fn scan_ends_with_single_eof(source in "\\PC*") {
        let tokens = scan(&source);
        let eof_count = tokens
            .iter()
            .filter(|token| matches!(token.kind, TokenKind::Eof))
            .count();
        prop_assert_eq!(eof_count, 1);
        let last = tokens.last().unwrap();
        prop_assert_eq!(last.kind, TokenKind::Eof);
        prop_assert!(last.text.is_none());
        let lines = source.matches('\n').count() as u32 + 1;
        prop_assert_eq!(last.line, lines);
    }

    #[test]
    fn scan_handles_grammar_characters(source in "[a-z_\"\\\\/(){},=+ \n]{0,64}") {
        let tokens = scan(&source);
        prop_assert!(matches!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof)));
        for window in tokens.windows(2) {
            prop_assert!(window[0].line <= window[1].line);
        }
    }
}
