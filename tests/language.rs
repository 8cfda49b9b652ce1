use std::fs;

use gravity::{
    error::{LexError, ParseError, PipelineError, RuntimeError},
    interpreter::{evaluator::core::Evaluator, lexer::TokenKind, value::core::Value},
    parse, run, tokenize,
};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "grav"))
    {
        let path = entry.path();
        let code =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        let trace = run(&code).unwrap_or_else(|e| panic!("Script {path:?} failed:\n{code}\nError: {e}"));
        let expected: Vec<String> = expected.lines().map(str::to_string).collect();

        assert_eq!(trace.output, expected, "Unexpected output from {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn assert_output(src: &str, expected: &[&str]) {
    match run(src) {
        Ok(trace) => assert_eq!(trace.output, expected, "Unexpected output from:\n{src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match run(src) {
        Err(PipelineError::Runtime(e)) => e,
        Err(e) => panic!("Expected a runtime error, got: {e}"),
        Ok(trace) => panic!("Script succeeded but was expected to fail: {trace:?}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match run(src) {
        Err(PipelineError::Parse(e)) => e,
        Err(e) => panic!("Expected a parse error, got: {e}"),
        Ok(trace) => panic!("Script succeeded but was expected to fail: {trace:?}"),
    }
}

#[test]
fn assignment_and_print() {
    assert_output("var x = 5; print x + 1;", &["6"]);
    assert_output("x = 5; x = x * 2; print x;", &["10"]);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_output("print 1 + 2 * 3;", &["7"]);
    assert_output("print (1 + 2) * 3;", &["9"]);
}

#[test]
fn division_is_real_valued() {
    assert_output("print 7 / 2;", &["3.5"]);
    assert_output("print 6 / 3;", &["2.0"]);
    assert_output("print 1 / 4 + 1;", &["1.25"]);
}

#[test]
fn user_defined_function_and_calls() {
    assert_output("function add(a, b) -> a + b; print add(2, 3);", &["5"]);
    assert_output("function square(x) -> x * x; print square(square(3));", &["81"]);
    assert_output("function answer() -> 42; print answer();", &["42"]);
}

#[test]
fn recursive_function() {
    assert_output(r"
        function fact(n) -> {
            if n <= 1: return 1;
            return n * fact(n - 1);
        }
        print fact(10);
    ",
                  &["3628800"]);
}

#[test]
fn function_without_return_yields_none() {
    assert_output("function noop() -> { x = 1; } print noop();", &["None"]);
}

#[test]
fn return_leaves_nested_loops() {
    assert_output(r"
        function firstSquareAbove(limit) -> {
            for i = 1 .. 100 {
                if i * i > limit: return i;
            }
            return 0;
        }
        print firstSquareAbove(50);
    ",
                  &["8"]);
}

#[test]
fn for_loop_is_inclusive_and_ascending() {
    assert_output("for i = 1 to 3: print i;", &["1", "2", "3"]);
    assert_output("for i = 1 .. 3 { print i * 10; }", &["10", "20", "30"]);
    assert_output("for i = -1 to 1: print i;", &["-1", "0", "1"]);
}

#[test]
fn for_loop_variable_keeps_final_value() {
    assert_output("for i = 1 to 3: x = i; print i;", &["3"]);
}

#[test]
fn for_loop_with_empty_range_runs_zero_times() {
    assert_output("for i = 3 to 1: print i;", &[]);
    assert_eq!(runtime_error("for i = 3 to 1: print i; print i;"),
               RuntimeError::UndefinedVariable { name: "i".to_string(),
                                                 line: 1, });
}

#[test]
fn for_loop_bounds_must_be_integers() {
    assert!(matches!(runtime_error("for i = 1 to 5 / 2: print i;"),
                     RuntimeError::ExpectedInteger { value: Value::Real(_),
                                                     .. }));
    assert_output("for i = 1 to 4 / 2: print i;", &["1", "2"]);
}

#[test]
fn while_loop_carries_mutations() {
    assert_output("n = 0; while n < 3 { n = n + 1; print n; }", &["1", "2", "3"]);
}

#[test]
fn while_false_runs_zero_times_and_leaves_environment_unchanged() {
    let mut evaluator = Evaluator::new();
    let setup = parse(&tokenize("x = 1;").unwrap()).unwrap();
    evaluator.evaluate(&setup).unwrap();
    let before = evaluator.globals().clone();

    let program = parse(&tokenize("while false { x = 2; y = 3; print x; }").unwrap()).unwrap();
    let trace = evaluator.evaluate(&program).unwrap();

    assert!(trace.output.is_empty());
    assert_eq!(evaluator.globals(), &before);
    assert_eq!(evaluator.globals().len(), 1);
}

#[test]
fn if_else_branches() {
    assert_output("x = 4; if x > 3: print 1; else: print 2;", &["1"]);
    assert_output("x = 2; if x > 3: print 1; else: print 2;", &["2"]);
    assert_output("x = 2; if x > 3 { print 1; }", &[]);
    assert_output("x = 2; if x == 1: print 1; else: if x == 2: print 2; else: print 3;",
                  &["2"]);
}

#[test]
fn truthiness_in_conditions() {
    assert_output("if 0: print 1; else: print 2;", &["2"]);
    assert_output("if 7: print 1; else: print 2;", &["1"]);
    assert_output("function noop() -> { } if noop(): print 1; else: print 2;", &["2"]);
}

#[test]
fn logical_operators() {
    assert_output("print 1 < 2 and 2 < 3;", &["true"]);
    assert_output("print 1 > 2 or 2 > 3;", &["false"]);
    assert_output("print true or false and false;", &["true"]);
}

#[test]
fn and_or_do_not_short_circuit() {
    assert_eq!(runtime_error("function boom() -> 1 / 0; print false and boom() == 1;"),
               RuntimeError::DivisionByZero { line: 1 });
    assert_output("function touch() -> { print 1; return false; } print true or touch();",
                  &["1", "true"]);
    assert_output("function touch() -> { print 2; return true; } print false and touch();",
                  &["2", "false"]);
}

#[test]
fn equality_across_kinds() {
    assert_output("print 2 == 4 / 2;", &["true"]);
    assert_output("print true == true;", &["true"]);
    assert_output("print 1 == true;", &["false"]);
    assert_output("print 3 != 3;", &["false"]);
}

#[test]
fn final_value_of_run() {
    assert_eq!(run("1 + 2;").unwrap().value, Some(Value::Integer(3)));
    assert_eq!(run("x = 1;").unwrap().value, None);
    assert_eq!(run("x = 1; x;").unwrap().value, Some(Value::Integer(1)));

    let trace = run("return 5; print 1;").unwrap();
    assert_eq!(trace.value, Some(Value::Integer(5)));
    assert!(trace.output.is_empty());
}

#[test]
fn unknown_variable_is_error() {
    assert_eq!(runtime_error("print y;"),
               RuntimeError::UndefinedVariable { name: "y".to_string(),
                                                 line: 1, });
}

#[test]
fn failed_run_reports_no_output() {
    assert!(matches!(run("print 1;\nprint y;"),
                     Err(PipelineError::Runtime(RuntimeError::UndefinedVariable { line: 2,
                                                                                  .. }))));
}

#[test]
fn functions_do_not_see_caller_locals() {
    let error = runtime_error(r"
        function inner() -> secret;
        function outer() -> { secret = 1; return inner(); }
        print outer();
    ");
    assert!(matches!(error, RuntimeError::UndefinedVariable { ref name, .. } if name == "secret"));
}

#[test]
fn unknown_function_is_error() {
    assert_eq!(runtime_error("print missing(1);"),
               RuntimeError::UndefinedFunction { name: "missing".to_string(),
                                                 line: 1, });
}

#[test]
fn wrong_function_arity_is_error() {
    assert_eq!(runtime_error("function add(a, b) -> a + b; add(3);"),
               RuntimeError::ArityMismatch { name:     "add".to_string(),
                                             expected: 2,
                                             actual:   1,
                                             line:     1, });
}

#[test]
fn integers_beyond_real_precision_divide_and_compare_natively() {
    assert_output("print 9007199254740993 / 1;", &["9007199254740992.0"]);
    assert_output("print 9007199254740993 < 1 / 2;", &["false"]);
    assert_output("print 9007199254740993 + 0.5 > 0;", &["true"]);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(runtime_error("x = 1 / 0;"), RuntimeError::DivisionByZero { line: 1 });
}

#[test]
fn arithmetic_on_booleans_is_error() {
    assert!(matches!(runtime_error("print true + 1;"),
                     RuntimeError::NonNumericOperand { value: Value::Boolean(true),
                                                       .. }));
    assert!(matches!(runtime_error("print -false;"),
                     RuntimeError::NonNumericOperand { .. }));
    assert!(matches!(runtime_error("print true < false;"),
                     RuntimeError::InvalidOperator { .. }));
}

#[test]
fn integer_overflow_is_error() {
    assert_eq!(runtime_error("print 9223372036854775807 + 1;"),
               RuntimeError::Overflow { line: 1 });
}

#[test]
fn lex_errors_stop_the_pipeline() {
    assert_eq!(run("x = 1 @ 2;"),
               Err(PipelineError::Lex(LexError::InvalidCharacter { character: '@',
                                                                   line:      1, })));
    assert!(matches!(run("x = 1;\n\ny = $;"),
                     Err(PipelineError::Lex(LexError::InvalidCharacter { line: 3, .. }))));
}

#[test]
fn parse_errors_stop_the_pipeline() {
    assert!(matches!(parse_error("print 1; print (1 + 2;"),
                     ParseError::ExpectedToken { expected: TokenKind::RParen,
                                                 found: TokenKind::Semicolon,
                                                 .. }));
    assert!(matches!(parse_error("x = 1"),
                     ParseError::ExpectedToken { expected: TokenKind::Semicolon,
                                                 found: TokenKind::EndOfInput,
                                                 .. }));
    assert_eq!(parse_error("1 +"), ParseError::UnexpectedEndOfInput { line: 1 });
    assert!(matches!(parse_error("while 1 { print 1;"),
                     ParseError::ExpectedToken { expected: TokenKind::RBrace,
                                                 .. }));
}

#[test]
fn errors_render_with_line_numbers() {
    let error = run("x = 1;\nprint y;").unwrap_err();
    assert_eq!(error.to_string(), "Error on line 2: Undefined variable 'y'.");

    let error = run("print (1;").unwrap_err();
    assert_eq!(error.to_string(), "Error on line 1: Expected ')', found ';'.");
}
