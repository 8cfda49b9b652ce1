use gravity::{
    ast::{BinaryOperator, Node, UnaryOperator},
    error::{LexError, ParseError},
    interpreter::lexer::{Token, TokenKind},
    parse, tokenize,
};

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).unwrap().iter().map(|t| t.kind).collect()
}

fn statements(src: &str) -> Vec<Node> {
    parse(&tokenize(src).unwrap()).unwrap().statements
}

fn expression(src: &str) -> Node {
    let mut statements = statements(src);
    assert_eq!(statements.len(), 1, "Expected a single statement in {src:?}");
    statements.remove(0)
}

fn parse_err(src: &str) -> ParseError {
    match parse(&tokenize(src).unwrap()) {
        Err(e) => e,
        Ok(program) => panic!("Expected a parse error for {src:?}, got {program:?}"),
    }
}

fn int(value: i64) -> Box<Node> {
    Box::new(Node::IntegerLiteral { value, line: 1 })
}

fn var(name: &str) -> Box<Node> {
    Box::new(Node::VariableRef { name: name.to_string(),
                                 line: 1, })
}

fn binary(op: BinaryOperator, left: Box<Node>, right: Box<Node>) -> Node {
    Node::BinaryOp { op,
                     left,
                     right,
                     line: 1 }
}

#[test]
fn integer_literals_carry_their_value() {
    for (text, value) in [("0", 0), ("7", 7), ("42", 42), ("007", 7), ("9223372036854775807", i64::MAX)] {
        let tokens = tokenize(text).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[0].text, text);
        assert_eq!(tokens[0].integer(), Some(value), "Wrong value for {text}");
    }
}

#[test]
fn oversized_integer_literal_is_error() {
    assert_eq!(tokenize("x = 9223372036854775808;"),
               Err(LexError::IntegerTooLarge { text: "9223372036854775808".to_string(),
                                               line: 1, }));
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds("if iffy else while for function print return"),
               [TokenKind::If,
                TokenKind::Identifier,
                TokenKind::Else,
                TokenKind::While,
                TokenKind::For,
                TokenKind::Function,
                TokenKind::Print,
                TokenKind::Return,
                TokenKind::EndOfInput]);
    assert_eq!(kinds("var to and or true false"),
               [TokenKind::Var,
                TokenKind::To,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::True,
                TokenKind::False,
                TokenKind::EndOfInput]);

    let tokens = tokenize("printer").unwrap();
    assert_eq!(tokens[0].name(), Some("printer"));
}

#[test]
fn two_character_operators_win() {
    assert_eq!(kinds("== != <= >= -> .. = < > - ."),
               [TokenKind::EqualEqual,
                TokenKind::NotEqual,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::Arrow,
                TokenKind::DotDot,
                TokenKind::Equal,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Minus,
                TokenKind::Dot,
                TokenKind::EndOfInput]);
    assert_eq!(kinds("a->b"),
               [TokenKind::Identifier, TokenKind::Arrow, TokenKind::Identifier, TokenKind::EndOfInput]);
    assert_eq!(kinds("a-b"),
               [TokenKind::Identifier, TokenKind::Minus, TokenKind::Identifier, TokenKind::EndOfInput]);
}

#[test]
fn token_texts_rebuild_the_token_stream() {
    let src = "function f(a, b) -> { if a <= b: return a * (b - 1); } print f(2, 10) / 3;";
    let tokens = tokenize(src).unwrap();
    let rebuilt = tokens.iter()
                        .filter(|t| t.kind != TokenKind::EndOfInput)
                        .map(|t| t.text.as_str())
                        .collect::<Vec<_>>()
                        .join(" ");

    assert_eq!(rebuilt,
               "function f ( a , b ) -> { if a <= b : return a * ( b - 1 ) ; } print f ( 2 , 10 ) / 3 ;");

    let kinds_of = |tokens: &[Token]| tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
    assert_eq!(kinds_of(&tokenize(&rebuilt).unwrap()), kinds_of(&tokens));
}

#[test]
fn whitespace_and_comments_are_skipped() {
    assert_eq!(kinds("  x\t=\r\n 1 ; // set x\n// whole line\n"),
               [TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Integer,
                TokenKind::Semicolon,
                TokenKind::EndOfInput]);
    assert_eq!(kinds(""), [TokenKind::EndOfInput]);
}

#[test]
fn tokens_record_their_line() {
    let tokens = tokenize("x = 1;\n\ny = 2;\n").unwrap();
    let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();

    assert_eq!(lines, [1, 1, 1, 1, 3, 3, 3, 3, 4]);
}

#[test]
fn invalid_characters_are_errors() {
    assert_eq!(tokenize("my_var = 1;"),
               Err(LexError::InvalidCharacter { character: '_',
                                                line:      1, }));
    assert_eq!(tokenize("x = 1;\ny = 2 # 3;"),
               Err(LexError::InvalidCharacter { character: '#',
                                                line:      2, }));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(expression("1 + 2 * 3;"),
               binary(BinaryOperator::Add,
                      int(1),
                      Box::new(binary(BinaryOperator::Mul, int(2), int(3)))));
}

#[test]
fn same_precedence_associates_left() {
    assert_eq!(expression("a - b - c;"),
               binary(BinaryOperator::Sub,
                      Box::new(binary(BinaryOperator::Sub, var("a"), var("b"))),
                      var("c")));
    assert_eq!(expression("a / b * c;"),
               binary(BinaryOperator::Mul,
                      Box::new(binary(BinaryOperator::Div, var("a"), var("b"))),
                      var("c")));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(expression("(1 + 2) * 3;"),
               binary(BinaryOperator::Mul,
                      Box::new(binary(BinaryOperator::Add, int(1), int(2))),
                      int(3)));
}

#[test]
fn unary_minus_binds_tightest() {
    assert_eq!(expression("-x * 2;"),
               binary(BinaryOperator::Mul,
                      Box::new(Node::UnaryOp { op:      UnaryOperator::Negate,
                                               operand: var("x"),
                                               line:    1, }),
                      int(2)));
    assert!(matches!(expression("--1;"),
                     Node::UnaryOp { op: UnaryOperator::Negate, ref operand, .. }
                         if matches!(**operand, Node::UnaryOp { .. })));
}

#[test]
fn logical_operators_are_loosest() {
    assert_eq!(expression("a or b and c;"),
               binary(BinaryOperator::Or,
                      var("a"),
                      Box::new(binary(BinaryOperator::And, var("b"), var("c")))));
    assert_eq!(expression("a < 1 and b == 2;"),
               binary(BinaryOperator::And,
                      Box::new(binary(BinaryOperator::Less, var("a"), int(1))),
                      Box::new(binary(BinaryOperator::Equal, var("b"), int(2)))));
}

#[test]
fn comparisons_do_not_chain() {
    assert!(matches!(parse_err("1 < 2 < 3;"),
                     ParseError::ExpectedToken { expected: TokenKind::Semicolon,
                                                 found: TokenKind::Less,
                                                 .. }));
}

#[test]
fn identifier_followed_by_paren_is_a_call() {
    assert_eq!(expression("f(x, 1);"),
               Node::FunctionCall { name:      "f".to_string(),
                                    arguments: vec![*var("x"), *int(1)],
                                    line:      1, });
    assert_eq!(expression("f;"), *var("f"));
    assert_eq!(expression("g();"),
               Node::FunctionCall { name:      "g".to_string(),
                                    arguments: Vec::new(),
                                    line:      1, });
}

#[test]
fn assignment_with_and_without_var() {
    let expected = Node::Assignment { name:  "x".to_string(),
                                      value: int(5),
                                      line:  1, };

    assert_eq!(expression("x = 5;"), expected);
    assert_eq!(expression("var x = 5;"), expected);
}

#[test]
fn expression_bodied_function_returns_its_expression() {
    let Node::FunctionDeclaration(def) = expression("function square(x) -> x * x;") else {
        panic!("Expected a function declaration");
    };

    assert_eq!(def.name, "square");
    assert_eq!(def.params, ["x"]);
    assert_eq!(def.body,
               [Node::ReturnStatement { value: Box::new(binary(BinaryOperator::Mul, var("x"), var("x"))),
                                        line:  1, }]);
}

#[test]
fn block_bodied_function_keeps_its_statements() {
    let Node::FunctionDeclaration(def) =
        expression("function f(a, b) -> {\n  c = a + b;\n  return c;\n}")
    else {
        panic!("Expected a function declaration");
    };

    assert_eq!(def.params, ["a", "b"]);
    assert_eq!(def.body.len(), 2);
    assert_eq!(def.body[1].line_number(), 3);
}

#[test]
fn for_loop_accepts_both_range_separators() {
    for src in ["for i = 1 .. n + 1: print i;", "for i = 1 to n + 1 { print i; }"] {
        let Node::ForStatement { var: name,
                                 start,
                                 end,
                                 body,
                                 .. } = expression(src)
        else {
            panic!("Expected a for loop in {src:?}");
        };

        assert_eq!(name, "i");
        assert_eq!(start, int(1));
        assert_eq!(*end, binary(BinaryOperator::Add, var("n"), int(1)));
        assert_eq!(body.len(), 1);
    }
}

#[test]
fn if_with_else() {
    let Node::IfStatement { then_branch,
                            else_branch,
                            .. } = expression("if x: { a = 1; b = 2; } else: c = 3;")
    else {
        panic!("Expected an if statement");
    };

    assert_eq!(then_branch.len(), 2);
    assert_eq!(else_branch.map(|branch| branch.len()), Some(1));

    let Node::IfStatement { else_branch, .. } = expression("if x { a = 1; }") else {
        panic!("Expected an if statement");
    };
    assert_eq!(else_branch, None);
}

#[test]
fn statements_record_their_line() {
    let statements = statements("x = 1;\nprint x;\n\nwhile x < 3 {\n  x = x + 1;\n}");
    let lines: Vec<_> = statements.iter().map(Node::line_number).collect();

    assert_eq!(lines, [1, 2, 4]);
}

#[test]
fn malformed_statements_are_errors() {
    assert!(matches!(parse_err("function f(x) x;"),
                     ParseError::ExpectedToken { expected: TokenKind::Arrow,
                                                 .. }));
    assert!(matches!(parse_err("for i = 1, 3: print i;"),
                     ParseError::ExpectedToken { expected: TokenKind::DotDot,
                                                 found: TokenKind::Comma,
                                                 .. }));
    assert!(matches!(parse_err("if x print x;"),
                     ParseError::ExpectedToken { expected: TokenKind::Colon,
                                                 .. }));
    assert!(matches!(parse_err("print 1 . 2;"),
                     ParseError::ExpectedToken { expected: TokenKind::Semicolon,
                                                 found: TokenKind::Dot,
                                                 .. }));
    assert!(matches!(parse_err(") ;"),
                     ParseError::UnexpectedToken { found: TokenKind::RParen,
                                                   .. }));
}

#[test]
fn missing_end_marker_reports_last_line() {
    let mut tokens = tokenize("x = 1;\ny = 1 +").unwrap();
    tokens.pop();

    assert_eq!(parse(&tokens), Err(ParseError::UnexpectedEndOfInput { line: 2 }));

    let mut tokens = tokenize("x = 1;\nprint (x").unwrap();
    tokens.pop();

    assert!(matches!(parse(&tokens),
                     Err(ParseError::ExpectedToken { expected: TokenKind::RParen,
                                                     found: TokenKind::EndOfInput,
                                                     line: 2,
                                                     .. })));

    let mut tokens = tokenize("x = 1; print x;").unwrap();
    tokens.pop();
    assert_eq!(parse(&tokens).unwrap().statements.len(), 2);
    assert!(parse(&[]).unwrap().statements.is_empty());
}

#[test]
fn empty_program_parses() {
    assert!(statements("").is_empty());
    assert!(statements("// nothing here\n").is_empty());
}
