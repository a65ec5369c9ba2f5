//! Integration tests for the end-to-end front end.
//!
//! These tests drive the public API from source text through tokenization
//! and parsing, and check the AST and error list handed to callers.

use frontend::{
    ast::{
        ast::{Node, Stmt, StmtType},
        expressions::{CallExpr, FnExpr},
        statements::{ExpressionStmt, LetStmt},
    },
    errors::errors::ParseError,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{TokenKind, TokenStream},
    },
    parser::parser::{parse, parse_source, Parser},
};

#[test_log::test]
fn test_parse_complete_program() {
    let source = r#"
        let five = 5;
        let ten = 10;

        let add = fn(x, y) {
            x + y;
        };

        let result = add(five, ten);
        if (result > 10) {
            return true;
        } else {
            return false;
        }
        "done";
    "#;

    let (program, errors) = parse_source(source);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);

    let types: Vec<StmtType> = program.iter().map(|stmt| stmt.get_stmt_type()).collect();
    assert_eq!(
        types,
        vec![
            StmtType::LetStmt,
            StmtType::LetStmt,
            StmtType::LetStmt,
            StmtType::LetStmt,
            StmtType::ExpressionStmt,
            StmtType::ExpressionStmt,
        ]
    );

    let add = program.statements[2].downcast_ref::<LetStmt>().unwrap();
    assert_eq!(add.name.value, "add");
    let function = add.value.downcast_ref::<FnExpr>().unwrap();
    assert_eq!(function.parameters.len(), 2);

    let result = program.statements[3].downcast_ref::<LetStmt>().unwrap();
    let call = result.value.downcast_ref::<CallExpr>().unwrap();
    assert_eq!(call.function.render(), "add");
    assert_eq!(call.arguments.len(), 2);

    assert_eq!(
        program.render(),
        "let five = 5; let ten = 10; let add = fn(x, y) { (x + y) }; \
         let result = add(five, ten); \
         if ((result > 10)) { return true; } else { return false; }; \"done\""
    );
}

#[test_log::test]
fn test_partial_program_is_returned_with_errors() {
    let source = "let a = 1;\nlet b 2;\nlet c = a + ;\nlet d = 4;";

    let (program, errors) = parse_source(source);

    assert_eq!(
        errors
            .iter()
            .map(|error| error.get_error_name())
            .collect::<Vec<_>>(),
        vec!["UnexpectedToken", "NoPrefixParseFn"]
    );

    let names: Vec<String> = program
        .iter()
        .filter_map(|stmt| stmt.downcast_ref::<LetStmt>())
        .map(|stmt| stmt.name.value.clone())
        .collect();
    assert_eq!(names, vec!["a", "d"]);
}

#[test]
fn test_parser_error_messages() {
    let mut parser = Parser::from_source("let 5; )");
    let program = parser.parse_program();

    assert_eq!(
        parser.error_messages(),
        vec![
            "expected next token to be IDENT, got INT instead",
            "no prefix parse function for ) found",
        ]
    );
    // `5` survives as an expression statement
    assert_eq!(program.len(), 1);
    assert!(program.statements[0].downcast_ref::<ExpressionStmt>().is_some());
}

#[test]
fn test_lexer_and_token_stream_agree() {
    let source = "let x = -(1 + 2) * add(3, !true);";

    let (from_lexer, lexer_errors) = parse(Lexer::new(source));
    let (from_tokens, token_errors) = parse(TokenStream::new(tokenize(source)));

    assert!(lexer_errors.is_empty());
    assert!(token_errors.is_empty());
    assert_eq!(from_lexer.render(), from_tokens.render());
    assert_eq!(from_lexer.render(), "let x = ((-(1 + 2)) * add(3, (!true)));");
}

#[test]
fn test_empty_and_comment_only_sources() {
    for source in ["", "   \n\t", "// nothing here"] {
        let (program, errors) = parse_source(source);
        assert!(program.is_empty());
        assert!(errors.is_empty());
        assert_eq!(program.token_literal(), "");
    }
}

#[test]
fn test_tokenize_ends_with_single_eof() {
    let tokens = tokenize("let x = 1;");
    let eofs = tokens.iter().filter(|token| token.is(TokenKind::EOF)).count();

    assert_eq!(eofs, 1);
    assert!(tokens.last().unwrap().is(TokenKind::EOF));
}

#[test]
fn test_independent_parsers_on_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("let v{} = {} * {};", i, i, i + 1);
                let (program, errors) = parse_source(&source);
                (program.render(), errors)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (rendered, errors): (String, Vec<ParseError>) = handle.join().unwrap();
        assert!(errors.is_empty());
        assert_eq!(rendered, format!("let v{} = ({} * {});", i, i, i + 1));
    }
}
