use std::fs::{self};

use apl360::{
    Reply, Session,
    error::{Error, EvalError, LexError},
    evaluate_line,
    interpreter::{environment::Environment, settings::Settings, value::core::Value},
    repl::help_text,
};
use walkdir::WalkDir;

#[test]
fn transcripts_replay() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/transcripts").into_iter()
                                         .filter_map(Result::ok)
                                         .filter(|e| e.path().extension().is_some_and(|ext| ext == "apl"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut session = Session::new(Settings::default());
        for (input, expected) in extract_exchanges(&content) {
            count += 1;
            let actual = match session.run_line(&input) {
                Ok(Reply::Value(value)) => value.display_with(session.settings()).to_string(),
                Ok(Reply::Help(text)) => text,
                Ok(Reply::Empty | Reply::Exit) => String::new(),
                Err(e) => format!("Error: {e}"),
            };
            assert_eq!(actual.trim_end(),
                       expected,
                       "Transcript {path:?} diverged at input:\n      {input}");
        }
    }

    assert!(count > 0, "No exchanges found in tests/transcripts");
}

/// Splits a session transcript into `(input, expected output)` pairs.
///
/// Input lines are indented by six spaces; the unindented lines that follow
/// are the output expected for them.
fn extract_exchanges(content: &str) -> Vec<(String, String)> {
    let mut exchanges: Vec<(String, Vec<&str>)> = Vec::new();

    for line in content.lines() {
        if let Some(input) = line.strip_prefix("      ") {
            exchanges.push((input.to_string(), Vec::new()));
        } else if let Some((_, output)) = exchanges.last_mut() {
            output.push(line);
        }
    }

    exchanges.into_iter()
             .map(|(input, output)| (input, output.join("\n").trim_end().to_string()))
             .collect()
}

/// Evaluates each line of `src` in one fresh environment and returns the
/// value of the last line that produced one.
fn eval_script(src: &str) -> Result<Option<Value>, Error> {
    let mut env = Environment::new();
    let settings = Settings::default();
    let mut last = None;
    for line in src.lines() {
        if let Some(value) = evaluate_line(line, &mut env, &settings)? {
            last = Some(value);
        }
    }
    Ok(last)
}

fn assert_value(src: &str, expected: Value) {
    match eval_script(src) {
        Ok(Some(value)) => assert_eq!(value, expected, "Script: {src}"),
        Ok(None) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {src}\n{e}"),
    }
}

fn assert_display(src: &str, expected: &str) {
    match eval_script(src) {
        Ok(Some(value)) => assert_eq!(value.to_string(), expected, "Script: {src}"),
        Ok(None) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {src}\n{e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match eval_script(src) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail: {src}"),
        Err(e) => e,
    }
}

fn vector(items: &[f64]) -> Value {
    Value::from(items.to_vec())
}

#[test]
fn iota_generates_one_based_vectors() {
    assert_value("⍳5", vector(&[1.0, 2.0, 3.0, 4.0, 5.0]));
    assert_value("⍳1", vector(&[1.0]));
    assert_value("⍳0", vector(&[]));
    assert_value("iota 3", vector(&[1.0, 2.0, 3.0]));
}

#[test]
fn iota_rejects_bad_counts() {
    for src in ["⍳¯1", "⍳2.5", "⍳1 2"] {
        assert!(matches!(assert_failure(src), Error::Eval(EvalError::DomainError { .. })),
                "{src}");
    }
    assert!(matches!(assert_failure("3⍳4"), Error::Eval(EvalError::NoDyadicForm { .. })));
}

#[test]
fn addition_and_multiplication_commute() {
    for (a, b) in [("3", "4"), ("1 2 3", "4 5 6"), ("2", "1 2 3"), ("¯1.5", "0.25")] {
        let sum = eval_script(&format!("{a}+{b}")).unwrap();
        assert_eq!(sum, eval_script(&format!("{b}+{a}")).unwrap());

        let product = eval_script(&format!("{a}×{b}")).unwrap();
        assert_eq!(product, eval_script(&format!("{b}×{a}")).unwrap());
    }
}

#[test]
fn scalars_extend_to_vectors() {
    assert_value("10+1 2 3", vector(&[11.0, 12.0, 13.0]));
    assert_value("1 2 3+10", vector(&[11.0, 12.0, 13.0]));
    assert_value("1 2 3-1", vector(&[0.0, 1.0, 2.0]));
    assert_value("(,5)+1 2", vector(&[6.0, 7.0]));
}

#[test]
fn assignment_binds_and_returns() {
    assert_value("x ← 5 + 3", Value::Scalar(8.0));
    assert_value("x ← 5 + 3\nx", Value::Scalar(8.0));
    assert_value("x <- 2\nx × x", Value::Scalar(4.0));
    assert_value("a ← b ← 3\na + b", Value::Scalar(6.0));
    assert_value("(x ← 3) + 1", Value::Scalar(4.0));
    assert_value("(x ← 3) + 1\nx", Value::Scalar(3.0));
}

#[test]
fn names_are_case_sensitive() {
    assert_value("v ← 1\nV ← 2\nv", Value::Scalar(1.0));
    assert!(matches!(assert_failure("v ← 1\nV"), Error::Eval(EvalError::UndefinedVariable { .. })));
}

#[test]
fn malformed_assignments_fail() {
    for src in ["x ←", "1 ← 2", "x + y ← 3", "←5"] {
        assert!(matches!(assert_failure(src), Error::Eval(EvalError::MalformedAssignment { .. })),
                "{src}");
    }
}

#[test]
fn failed_line_binds_nothing() {
    let mut env = Environment::new();
    let settings = Settings::default();

    assert!(evaluate_line("y ← 1 + undefined_name", &mut env, &settings).is_err());
    assert!(env.get("y").is_none());

    assert!(evaluate_line("a ← 1 + b ← ÷0", &mut env, &settings).is_err());
    assert!(env.get("a").is_none());
    assert!(env.get("b").is_none());
    assert!(env.is_empty());
}

#[test]
fn mismatched_lengths_fail() {
    assert_eq!(assert_failure("(1 2 3)+(1 2)"),
               Error::Eval(EvalError::ShapeMismatch { left: 3, right: 2 }));
    assert_eq!(assert_failure("1 2 3×1 2"),
               Error::Eval(EvalError::ShapeMismatch { left: 3, right: 2 }));
}

#[test]
fn domain_errors() {
    for src in ["⍟¯1", "⍟0", "÷0", "1÷0", "0÷0", "1 2÷0 1", "1⍟5", "¯8⋆0.5", "10⋆400"] {
        assert!(matches!(assert_failure(src), Error::Eval(EvalError::DomainError { .. })),
                "{src}");
    }
}

#[test]
fn evaluation_is_right_to_left() {
    assert_value("2×3+4", Value::Scalar(14.0));
    assert_value("(2×3)+4", Value::Scalar(10.0));
    assert_value("1+2×3", Value::Scalar(7.0));
    assert_value("10-2-3", Value::Scalar(11.0));
    assert_value("−2+3", Value::Scalar(-5.0));
    assert_value("-2+3", Value::Scalar(1.0));
}

#[test]
fn undefined_variable_fails() {
    assert_eq!(assert_failure("y"),
               Error::Eval(EvalError::UndefinedVariable { name:   "y".into(),
                                                          column: 1, }));
    assert_eq!(assert_failure("1 + zz"),
               Error::Eval(EvalError::UndefinedVariable { name:   "zz".into(),
                                                          column: 5, }));
}

#[test]
fn numeric_literals_form_vectors() {
    assert_value("1 2 3", vector(&[1.0, 2.0, 3.0]));
    assert_value("¯1 .5 2e2", vector(&[-1.0, 0.5, 200.0]));
    assert_value("7", Value::Scalar(7.0));
}

#[test]
fn only_literals_strand() {
    for src in ["x ← 1\nx 2", "(1) 2", "x ← 1\n2 x"] {
        assert!(matches!(assert_failure(src), Error::Eval(EvalError::Syntax { .. })),
                "{src}");
    }
}

#[test]
fn negative_literals_and_subtraction() {
    assert_value("-3", Value::Scalar(-3.0));
    assert_value("2-3", Value::Scalar(-1.0));
    assert_value("2 - -3", Value::Scalar(5.0));
    assert_value("2×-3", Value::Scalar(-6.0));
    assert_value("x ← 4\nx-1", Value::Scalar(3.0));
    assert_value("¯2 − 1", Value::Scalar(-3.0));
    assert_value("−5", Value::Scalar(-5.0));
}

#[test]
fn monadic_scalar_functions() {
    assert_value("×¯5 0 3", vector(&[-1.0, 0.0, 1.0]));
    assert_value("÷4", Value::Scalar(0.25));
    assert_value("⌈2.5 ¯2.5", vector(&[3.0, -2.0]));
    assert_value("⌊2.5 ¯2.5", vector(&[2.0, -3.0]));
    assert_value("|¯4 4", vector(&[4.0, 4.0]));
    assert_value("+¯2", Value::Scalar(-2.0));
    assert_value("⋆0", Value::Scalar(1.0));
    assert_value("⍟1", Value::Scalar(0.0));
}

#[test]
fn dyadic_scalar_functions() {
    assert_value("2⋆10", Value::Scalar(1024.0));
    assert_value("2^3", Value::Scalar(8.0));
    assert_value("2**3", Value::Scalar(8.0));
    assert_value("3⌈5", Value::Scalar(5.0));
    assert_value("3⌊5", Value::Scalar(3.0));
    assert_value("3|7 ¯7 9", vector(&[1.0, 2.0, 0.0]));
    assert_value("0|5", Value::Scalar(5.0));
    assert_value("¯3|7", Value::Scalar(-2.0));
    assert_value("2*3", Value::Scalar(6.0));
    assert_value("6/3", Value::Scalar(2.0));
    assert_display("2⍟8", "3");
}

#[test]
fn residue_is_tolerant() {
    assert_value("0.1|0.3", Value::Scalar(0.0));
}

#[test]
fn equality_is_tolerant() {
    assert_value("1 2 3 = 1 5 3", vector(&[1.0, 0.0, 1.0]));
    assert_value("(0.1+0.2)=0.3", Value::Scalar(1.0));
    assert_value("1 == 2", Value::Scalar(0.0));
    assert!(matches!(assert_failure("=1"), Error::Eval(EvalError::NoMonadicForm { .. })));
}

#[test]
fn reductions_fold_from_the_right() {
    assert_value("+/⍳5", Value::Scalar(15.0));
    assert_value("×/⍳0", Value::Scalar(1.0));
    assert_value("+/⍳0", Value::Scalar(0.0));
    assert_value("-/1 2 3", Value::Scalar(2.0));
    assert_value("⌈/3 1 4 1 5", Value::Scalar(5.0));
    assert_value("⌊/3 1 4 1 5", Value::Scalar(1.0));
    assert_value("+/7", Value::Scalar(7.0));
    assert_value("v ← 1 2 3\n+/v×v", Value::Scalar(14.0));
}

#[test]
fn reduction_errors() {
    assert!(matches!(assert_failure("⍳/3"), Error::Eval(EvalError::NoDyadicForm { .. })));
    assert!(matches!(assert_failure("⍟/⍳0"), Error::Eval(EvalError::DomainError { .. })));
    assert!(matches!(assert_failure("1 +/ 2"), Error::Eval(EvalError::NoDyadicForm { .. })));
}

#[test]
fn structural_functions() {
    assert_value("1,2,3", vector(&[1.0, 2.0, 3.0]));
    assert_value("(1 2),⍳0", vector(&[1.0, 2.0]));
    assert_value(",7", vector(&[7.0]));
    assert_value("⍴1 2 3", vector(&[3.0]));
    assert_value("⍴5", vector(&[]));
    assert_value("⍴,5", vector(&[1.0]));
    assert_value("5⍴1 2", vector(&[1.0, 2.0, 1.0, 2.0, 1.0]));
    assert_value("0⍴1 2", vector(&[]));
    assert_value("3 rho 4", vector(&[4.0, 4.0, 4.0]));
    assert!(matches!(assert_failure("3⍴⍳0"), Error::Eval(EvalError::DomainError { .. })));
    assert!(matches!(assert_failure("¯1⍴1"), Error::Eval(EvalError::DomainError { .. })));
}

#[test]
fn indexing_is_one_based() {
    assert_value("v ← 10 20 30\nv[2]", Value::Scalar(20.0));
    assert_value("v ← 10 20 30\nv[3 1]", vector(&[30.0, 10.0]));
    assert_value("(⍳5)[2]", Value::Scalar(2.0));
    assert_value("v ← 10 20 30\nv[1+1]+1", Value::Scalar(21.0));
    assert_value("v ← 10 20 30\nv[⍳0]", vector(&[]));
}

#[test]
fn indexing_errors() {
    assert_eq!(assert_failure("v ← 10 20 30\nv[4]"),
               Error::Eval(EvalError::IndexOutOfBounds { max: 3, found: 4 }));
    assert_eq!(assert_failure("v ← 10 20 30\nv[0]"),
               Error::Eval(EvalError::IndexOutOfBounds { max: 3, found: 0 }));
    assert_eq!(assert_failure("5[1]"),
               Error::Eval(EvalError::IndexOutOfBounds { max: 0, found: 1 }));
    assert!(matches!(assert_failure("v ← 10 20\nv[1.5]"),
                     Error::Eval(EvalError::DomainError { .. })));
    assert!(matches!(assert_failure("v ← 10 20\nv[]"),
                     Error::Eval(EvalError::MissingOperand { .. })));
}

#[test]
fn brackets_without_a_target_are_vector_literals() {
    assert_value("[1 2 3]", vector(&[1.0, 2.0, 3.0]));
    assert_value("[1,2,3]", vector(&[1.0, 2.0, 3.0]));
    assert_value("[5]", vector(&[5.0]));
    assert_value("[]", vector(&[]));
    assert_value("x ← 2\n[x,x×3]", vector(&[2.0, 6.0]));
    assert_value("[1 2]+[10 20]", vector(&[11.0, 22.0]));
    assert_value("+/[1 2 3]", Value::Scalar(6.0));
    assert_value("[10 20 30][2]", Value::Scalar(20.0));
}

#[test]
fn parenthesized_subscripts_are_not_indexing() {
    assert!(matches!(assert_failure("a ← 1 2 3\na(2)"), Error::Eval(EvalError::Syntax { .. })));
}

#[test]
fn modulo_spellings() {
    assert_value("5 mod 13", Value::Scalar(3.0));
    assert_value("5 % 13", Value::Scalar(3.0));
    assert_value("3 mod 7 8 9", vector(&[1.0, 2.0, 0.0]));
    assert_value("mod ¯4", Value::Scalar(4.0));
}

#[test]
fn deep_nesting_fails_cleanly() {
    let depth = 100_000;
    let groups = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert!(matches!(assert_failure(&groups), Error::Eval(EvalError::Syntax { .. })));

    let literals = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
    assert!(matches!(assert_failure(&literals), Error::Eval(EvalError::Syntax { .. })));

    let chain = format!("{}1", "a←".repeat(depth));
    assert!(matches!(assert_failure(&chain), Error::Eval(EvalError::Syntax { .. })));

    let indexes = format!("v ← 1\nv{}", "[1]".repeat(depth));
    assert!(matches!(assert_failure(&indexes), Error::Eval(EvalError::Syntax { .. })));
}

#[test]
fn moderate_nesting_still_evaluates() {
    let depth = 100;
    assert_value(&format!("{}1{}", "(".repeat(depth), ")".repeat(depth)), Value::Scalar(1.0));
    assert_value(&format!("{}7", "a←".repeat(depth)), Value::Scalar(7.0));
}

#[test]
fn unmatched_brackets_fail() {
    for src in ["(1+2", "1+2)", "v[1", "(1]", ")("] {
        assert!(matches!(assert_failure(src), Error::Eval(EvalError::UnmatchedParen { .. })),
                "{src}");
    }
}

#[test]
fn missing_operands_fail() {
    for src in ["1+", "+", "()", "2×()"] {
        assert!(matches!(assert_failure(src), Error::Eval(EvalError::MissingOperand { .. })),
                "{src}");
    }
}

#[test]
fn lex_errors_report_the_column() {
    assert_eq!(assert_failure("1 + $"),
               Error::Lex(LexError::UnrecognizedCharacter { character: '$',
                                                            column:    5, }));
    assert!(matches!(assert_failure("1e999"), Error::Lex(LexError::MalformedNumber { .. })));
}

#[test]
fn blank_and_comment_lines_have_no_value() {
    let mut env = Environment::new();
    let settings = Settings::default();

    assert_eq!(evaluate_line("", &mut env, &settings).unwrap(), None);
    assert_eq!(evaluate_line("   ⍝ nothing here", &mut env, &settings).unwrap(), None);
    assert_eq!(evaluate_line("1+1 ⍝ two", &mut env, &settings).unwrap(),
               Some(Value::Scalar(2.0)));
}

#[test]
fn display_follows_settings() {
    let settings = Settings { high_minus: true,
                              print_precision: 4,
                              ..Settings::default() };
    let value = eval_script("¯1.23456,÷3").unwrap().unwrap();

    assert_eq!(value.display_with(&settings).to_string(), "¯1.235 0.3333");
    assert_display("1.5e¯7", "1.5E-7");
    assert_display("1e20", "1E20");
    assert_display("12345678901", "12345678901");
    assert_display("+/⍳200000", "20000100000");
    assert_display("2⋆40", "1099511627776");
    assert_display("¯12345678901", "-12345678901");
    assert_display("12345678901.5", "1.23456789E10");
    assert_display("2÷3", "0.6666666667");
    assert_display("⍳0", "");
}

#[test]
fn session_commands() {
    let mut session = Session::new(Settings::default());

    assert_eq!(session.run_line("EXIT").unwrap(), Reply::Exit);
    assert_eq!(session.run_line("quit").unwrap(), Reply::Exit);
    assert_eq!(session.run_line("help").unwrap(), Reply::Help(help_text()));
    assert_eq!(session.run_line("?").unwrap(), Reply::Help(help_text()));
    assert_eq!(session.run_line("help nope").unwrap(),
               Reply::Help("No help for 'nope'".into()));

    let Reply::Help(iota) = session.run_line("help iota").unwrap() else {
        panic!("expected help text");
    };
    assert!(iota.contains('⍳'));

    let Reply::Help(slash) = session.run_line("help /").unwrap() else {
        panic!("expected help text");
    };
    assert!(slash.contains("division") && slash.contains("reduce"));

    let Reply::Help(residue) = session.run_line("help mod").unwrap() else {
        panic!("expected help text");
    };
    assert!(residue.starts_with("  |  ") && residue.contains("(also abs % mod)"));
}

#[test]
fn session_survives_errors() {
    let mut session = Session::new(Settings::default());

    assert_eq!(session.run_line("x ← 2").unwrap(), Reply::Value(Value::Scalar(2.0)));
    assert!(session.run_line("x ← x ÷ 0").is_err());
    assert_eq!(session.run_line("x").unwrap(), Reply::Value(Value::Scalar(2.0)));
    assert_eq!(session.environment().len(), 1);
}
