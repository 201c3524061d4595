use ember_interpreter::{eval, Env, Value};

fn run(source: &str) -> Value {
    let (program, errors) = ember_parser::parse(source);
    assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");
    eval(&program, &Env::new())
}

fn expect_integer(source: &str, want: i64) {
    match run(source) {
        Value::Integer(got) => assert_eq!(got, want, "for input {source:?}"),
        other => panic!("expected Integer({want}) for {source:?}, got {other:?}"),
    }
}

fn expect_string(source: &str, want: &str) {
    match run(source) {
        Value::String(got) => assert_eq!(got.as_str(), want, "for input {source:?}"),
        other => panic!("expected String({want:?}) for {source:?}, got {other:?}"),
    }
}

fn expect_error(source: &str, want: &str) {
    match run(source) {
        Value::Error(got) => assert_eq!(got, want, "for input {source:?}"),
        other => panic!("expected Error({want:?}) for {source:?}, got {other:?}"),
    }
}

#[test]
fn arithmetic_follows_the_precedence_ladder() {
    expect_integer("50 / 2 * 2 + 10", 60);
}

#[test]
fn boolean_equality_picks_the_consequence_branch() {
    expect_string(r#"if (1 < 2) == true { "yes" } else { "no" }"#, "yes");
}

#[test]
fn function_calls_sum_across_two_invocations() {
    expect_integer("let plus = fn(x, y){ x + y }; plus(1, 2) + plus(3, 4)", 10);
}

#[test]
fn closures_capture_their_defining_environment() {
    expect_integer("let counter = fn(){ let c = 0; fn(){ c } }; counter()()", 0);
}

#[test]
fn later_shadowing_does_not_reach_back_into_a_captured_closure() {
    expect_integer("let c = 0; let f = fn(){ c }; let c = 1; f()", 0);
}

#[test]
fn nested_closures_see_their_own_let_binding() {
    expect_integer("let make = fn(){ let c = 42; fn(){ c } }; make()()", 42);
}

#[test]
fn array_builtins_compose_without_mutating_their_argument() {
    match run("let a = [1, 2, 3]; push(rest(a), first(a))") {
        Value::Array(items) => {
            let values: Vec<i64> = items
                .iter()
                .map(|v| match v {
                    Value::Integer(i) => *i,
                    other => panic!("expected Integer element, got {other:?}"),
                })
                .collect();
            assert_eq!(values, vec![2, 3, 1]);
        }
        other => panic!("expected Array, got {other:?}"),
    }
}

#[test]
fn len_of_an_integer_is_a_runtime_error() {
    expect_error("len(2)", "len() not supported for objects of type INTEGER");
}

#[test]
fn mismatched_operand_types_are_a_runtime_error() {
    expect_error("5 + true", "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn integer_equality_is_an_unknown_operator() {
    expect_error("1 == 1", "unknown operator: INTEGER == INTEGER");
    expect_error("1 != 2", "unknown operator: INTEGER != INTEGER");
}

#[test]
fn hash_index_assignment_mutates_in_place() {
    expect_integer(r#"let h = {"k": 1}; h["k"] = 9; h["k"]"#, 9);
}

#[test]
fn return_unwinds_exactly_one_call_boundary() {
    expect_integer("fn(){ if true { if true { return 2; } 3 } }()", 2);
}

#[test]
fn error_short_circuits_before_a_sibling_let_binding_runs() {
    let (program, errors) = ember_parser::parse("let x = 1 + true; let y = 99; y");
    assert!(errors.is_empty());
    let env = Env::new();
    let result = eval(&program, &env);
    assert!(matches!(result, Value::Error(_)));
    assert!(env.get(ember_span::Symbol::intern("y")).is_none());
}

#[test]
fn repeated_parameter_names_are_rejected() {
    expect_error("fn(x, x){ x }", "repeated argument \"x\"");
}

#[test]
fn arity_mismatch_is_a_runtime_error() {
    expect_error(
        "let id = fn(x){ x }; id(1, 2)",
        "Error invoking function: expected 1 arguments but received 2",
    );
}

#[test]
fn array_index_out_of_range_is_a_runtime_error() {
    match run("[1, 2][5]") {
        Value::Error(message) => assert!(message.contains("out of range")),
        other => panic!("expected Error, got {other:?}"),
    }
}

#[test]
fn hash_lookup_miss_is_null_not_an_error() {
    assert!(matches!(run(r#"let h = {"k": 1}; h["missing"]"#), Value::Null));
}
