use a0::{
    interpret,
    interpreter::{
        lexer::{TokenKind, tokenize},
        value::Value,
    },
};

fn eval(source: &str) -> Value {
    interpret(source).unwrap_or_else(|e| panic!("Script failed: {e}\nSource:\n{source}"))
}

fn eval_err(source: &str) -> String {
    match interpret(source) {
        Ok(value) => {
            panic!("Script succeeded with '{value}' but was expected to fail:\n{source}")
        },
        Err(e) => e.to_string(),
    }
}

fn assert_number(source: &str, expected: f64) {
    let value = eval(source);
    assert!(value.deep_equals(&Value::Number(expected)),
            "Expected {expected}, got '{value}' for:\n{source}");
}

fn assert_bool(source: &str, expected: bool) {
    let value = eval(source);
    assert!(value.deep_equals(&Value::Bool(expected)),
            "Expected {expected}, got '{value}' for:\n{source}");
}

fn assert_nada(source: &str) {
    let value = eval(source);
    assert!(value.deep_equals(&Value::Nada),
            "Expected nada, got '{value}' for:\n{source}");
}

#[test]
fn arithmetic_and_precedence() {
    assert_number("1 + 2 * 3", 7.0);
    assert_number("(1 + 2) * 3", 9.0);
    assert_number("10 - 2 - 3", 5.0);
    assert_number("1.5 + 2.25", 3.75);
    assert_number("2. + 1", 3.0);
    assert_number("7 % 3", 1.0);
    assert_number("7.9 % 3.9", 1.0);
}

#[test]
fn division_by_zero_yields_zero() {
    assert_number("1 / 0", 0.0);
    assert_number("5 % 0", 0.0);
}

#[test]
fn program_result_is_the_last_statement() {
    assert_number("1  2  3", 3.0);
    assert_nada("");
}

#[test]
fn arithmetic_on_non_numbers_yields_nada() {
    assert_nada("1 + \"a\"");
    assert_nada("nada * 2");
}

#[test]
fn unary_not_on_numbers() {
    assert_number("not 0", 1.0);
    assert_number("not 5", 0.0);
    assert_number("!0", 1.0);
    assert_nada("not \"text\"");
}

#[test]
fn logical_operators_and_truthiness() {
    assert_bool("true and true", true);
    assert_bool("true and false", false);
    assert_bool("false or true", true);
    assert_bool("true && true", true);
    assert_bool("false || true", true);
    assert_bool("1 and \"x\"", true);
    assert_bool("0 or nada", false);
    assert_bool("true plus true", true);
    assert_bool("false perhaps true", true);
}

#[test]
fn logical_operators_evaluate_both_sides() {
    // No short-circuiting: the right-hand call runs even when the left
    // side already decides the outcome.
    assert_number("val hits = 0\nfunky bump() {\n    hits = hits + 1\n    return true\n}\nbump() or bump()\nhits",
                  2.0);
    assert_number("val hits = 0\nfunky off() {\n    hits = hits + 1\n    return false\n}\noff() and off()\nhits",
                  2.0);
}

#[test]
fn equality_is_structural() {
    assert_bool("1 == 1", true);
    assert_bool("1 != 2", true);
    assert_bool("\"a\" == \"a\"", true);
    assert_bool("\"a\" == \"b\"", false);
    assert_bool("nada == nada", true);
    assert_bool("1 == \"1\"", false);
    assert_bool("{ a: 1 } == { a: 1 }", true);
    assert_bool("{ a: 1 } == { a: 2 }", false);
    assert_bool("{ a: 1 } == { b: 1 }", false);
    assert_bool("{ o: { k: 1 } } == { o: { k: 1 } }", true);
}

#[test]
fn relational_operators_compare_only_numbers() {
    assert_bool("2 < 3", true);
    assert_bool("3 <= 3", true);
    assert_bool("4 > 5", false);
    assert_bool("5 >= 5", true);
    assert_bool("\"a\" < \"b\"", false);
    assert_bool("nada > 0", false);
}

#[test]
fn variable_declarations_and_assignment() {
    assert_number("val x = 10  x = x + 1  x", 11.0);
    assert_nada("var x  x");
    assert_number("var x  x = 3  x", 3.0);
}

#[test]
fn declaration_keyword_aliases() {
    assert_number("let a = 1  a", 1.0);
    assert_number("define b = 2  b", 2.0);
    assert_number("val c = 3  c", 3.0);
}

#[test]
fn redeclaration_in_same_scope_is_an_error() {
    let message = eval_err("val x = 1  val x = 2");
    assert!(message.contains("redeclare"), "got: {message}");
}

#[test]
fn shadowing_in_a_function_scope_is_legal() {
    assert_number("val x = 1\nfunky f() {\n    val x = 2\n    return x\n}\nf() + x",
                  3.0);
}

#[test]
fn constants_cannot_be_reassigned() {
    let message = eval_err("const k = 1  k = 2");
    assert!(message.contains("constant") && message.contains('k'),
            "got: {message}");
}

#[test]
fn constants_require_an_initializer() {
    let message = eval_err("const k");
    assert!(message.contains("Uninitialized constant"), "got: {message}");
}

#[test]
fn assignment_to_non_identifiers_is_an_error() {
    let message = eval_err("1 = 2");
    assert!(message.contains("Invalid left side"), "got: {message}");
}

#[test]
fn assignment_to_unknown_names_is_an_error() {
    let message = eval_err("y = 1");
    assert!(message.contains("does not exist"), "got: {message}");
}

#[test]
fn unknown_variables_are_an_error() {
    let message = eval_err("print(missing)");
    assert!(message.contains("missing"), "got: {message}");
}

#[test]
fn objects_and_member_access() {
    assert_number("val o = { a: 1, b: 2 }  o.a + o[\"b\"]", 3.0);
    assert_number("val o = { inner: { value: 4 } }  o.inner.value", 4.0);
    assert_number("val n = 7  val o = { n }  o.n", 7.0);
    assert_number("val o = { a: 1, a: 5 }  o.a", 5.0);
}

#[test]
fn missing_keys_read_as_nada() {
    assert_nada("val o = { a: 1 }  o.missing");
    assert_nada("val o = { a: 1 }  o[\"missing\"]");
    assert_nada("val o = { a: 1 }  o[2]");
}

#[test]
fn member_access_on_non_objects_is_an_error() {
    let message = eval_err("val x = 1  x.y");
    assert!(message.contains("non-object"), "got: {message}");
}

#[test]
fn computed_keys_must_be_strings_or_numbers() {
    let message = eval_err("val o = { a: 1 }  o[nada]");
    assert!(message.contains("property key"), "got: {message}");
}

#[test]
fn object_equality_is_reflexive_through_aliasing() {
    assert_bool("val o = { a: 1 }  o == o", true);
    assert_bool("val o = { a: 1 }  val alias = o  o == alias", true);
}

#[test]
fn functions_recursion_and_return() {
    assert_number("funky f(n) {\n    if (n == 0) {\n        return 1\n    }\n    return n * f(n - 1)\n}\nf(5)",
                  120.0);
}

#[test]
fn function_keyword_aliases() {
    assert_number("func a() { return 1 }  a()", 1.0);
    assert_number("fun b() { return 2 }  b()", 2.0);
    assert_number("fn c() { return 3 }  c()", 3.0);
    assert_number("def d() { return 4 }  d()", 4.0);
}

#[test]
fn empty_function_bodies_return_nada() {
    assert_nada("funky f() { }  f()");
}

#[test]
fn bare_return_yields_nada() {
    assert_nada("funky f() { return }  f()");
}

#[test]
fn functions_capture_their_declaration_scope() {
    assert_number("val base = 10\nfunky add(n) {\n    return base + n\n}\nadd(4)",
                  14.0);
}

#[test]
fn calls_chain() {
    assert_number("funky id(x) { return x }  id(id)(3)", 3.0);
}

#[test]
fn arity_mismatches_are_an_error() {
    let message = eval_err("funky f(a, b) { return a + b }  f(1)");
    assert!(message.contains("argument"), "got: {message}");
}

#[test]
fn calling_non_functions_is_an_error() {
    let message = eval_err("val x = 1  x()");
    assert!(message.contains("not a function"), "got: {message}");
}

#[test]
fn top_level_return_is_non_fatal() {
    assert_number("return 5", 5.0);
}

#[test]
fn if_requires_a_boolean_condition() {
    let message = eval_err("if (1) { }");
    assert!(message.contains("boolean"), "got: {message}");
}

#[test]
fn if_yields_its_body_value_or_nada() {
    assert_number("if (true) { 41 + 1 }", 42.0);
    assert_nada("if (false) { 1 }");
}

#[test]
fn while_loops_run_until_the_condition_fails() {
    assert_number("val c = 3  while (c > 0) { c = c - 1 }  c", 0.0);
    assert_nada("while (false) { 1 }");
}

#[test]
fn while_requires_a_boolean_condition() {
    let message = eval_err("while (1) { }");
    assert!(message.contains("boolean"), "got: {message}");
}

#[test]
fn while_keyword_aliases() {
    assert_number("val c = 0  loop (c < 2) { c = c + 1 }  c", 2.0);
    assert_number("val d = 0  forever (d < 2) { d = d + 1 }  d", 2.0);
}

#[test]
fn for_runs_the_body_count_times() {
    assert_number("val hits = 0  for (3) { hits = hits + 1 }  hits", 3.0);
    assert_number("val hits = 0  for (2.9) { hits = hits + 1 }  hits", 2.0);
    assert_number("val hits = 0  for (0 - 2) { hits = hits + 1 }  hits", 0.0);
    assert_number("val hits = 0  for (0) { hits = hits + 1 }  hits", 0.0);
}

#[test]
fn for_requires_a_numeric_count() {
    let message = eval_err("for (true) { }");
    assert!(message.contains("number"), "got: {message}");
}

#[test]
fn question_mark_keyword_is_if() {
    assert_number("val x = 10  ❓ (x > 5) { 99 }", 99.0);
}

#[test]
fn token_streams_end_with_exactly_one_eof() {
    for source in ["", "val x = 1", "val x = 1\nwhile (x < 3) { x = x + 1 }", "@ # $", "\"open"] {
        let tokens = tokenize(source);
        assert_eq!(tokens.last().map(|token| token.kind),
                   Some(TokenKind::Eof),
                   "source: {source:?}");
        assert_eq!(tokens.iter()
                         .filter(|token| token.kind == TokenKind::Eof)
                         .count(),
                   1,
                   "source: {source:?}");
    }
}

#[test]
fn relexing_reconstructed_source_preserves_token_kinds() {
    let source = "val x = 10\nif (x >= 2) { print(\"ok\") }";
    let tokens = tokenize(source);

    let reconstructed: String = tokens.iter()
                                      .map(|token| match token.kind {
                                          TokenKind::Str => format!("\"{}\" ", token.value),
                                          _ => format!("{} ", token.value),
                                      })
                                      .collect();
    let relexed = tokenize(&reconstructed);

    let kinds: Vec<_> = tokens.iter().map(|token| token.kind).collect();
    let relexed_kinds: Vec<_> = relexed.iter().map(|token| token.kind).collect();
    assert_eq!(kinds, relexed_kinds);
}

#[test]
fn token_positions_track_lines_and_columns() {
    let tokens = tokenize("val x = 1\nx");

    assert_eq!(tokens[0].pos.line, 1);
    assert_eq!(tokens[0].pos.column, 1);
    assert_eq!(tokens[4].kind, TokenKind::Ident);
    assert_eq!(tokens[4].pos.line, 2);
    assert_eq!(tokens[4].pos.column, 1);
}

#[test]
fn multi_dot_numbers_are_illegal() {
    let tokens = tokenize("1.2.3");

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "1.2.3");
    assert_eq!(tokens.len(), 2);
}

#[test]
fn lone_ampersand_and_pipe_are_illegal() {
    assert_eq!(tokenize("&")[0].kind, TokenKind::Illegal);
    assert_eq!(tokenize("|")[0].kind, TokenKind::Illegal);
    assert_eq!(tokenize("&&")[0].kind, TokenKind::And);
    assert_eq!(tokenize("||")[0].kind, TokenKind::Or);
}

#[test]
fn keyword_aliases_share_a_kind() {
    for keyword in ["func", "fun", "fn", "funky", "def"] {
        assert_eq!(tokenize(keyword)[0].kind, TokenKind::Fun, "{keyword}");
    }
    for keyword in ["var", "val", "define", "let"] {
        assert_eq!(tokenize(keyword)[0].kind, TokenKind::Var, "{keyword}");
    }
    for keyword in ["while", "loop", "forever"] {
        assert_eq!(tokenize(keyword)[0].kind, TokenKind::While, "{keyword}");
    }
    for keyword in ["if", "❓"] {
        assert_eq!(tokenize(keyword)[0].kind, TokenKind::If, "{keyword}");
    }
    assert_eq!(tokenize("❓x")[0].kind, TokenKind::Ident);
    assert_eq!(tokenize("iffy")[0].kind, TokenKind::Ident);
}

#[test]
fn string_bodies_lose_their_delimiters() {
    let tokens = tokenize("\"hello world\"");

    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].value, "hello world");
}

#[test]
fn unterminated_strings_are_a_parse_error() {
    let message = eval_err("\"oops");
    assert!(message.contains("Illegal token"), "got: {message}");
    assert!(message.contains("(1, 1)"), "got: {message}");
}

#[test]
fn parse_errors_carry_positions() {
    let message = eval_err("val x = 1\nval = 2");
    assert!(message.contains("(2, 5)"), "got: {message}");
}

#[test]
fn deep_equality_is_reflexive_and_symmetric() {
    let values = [Value::Number(1.5),
                  Value::Number(0.0),
                  Value::Number(f64::NAN),
                  Value::Str("text".to_string()),
                  Value::Bool(true),
                  Value::Nada];

    for value in &values {
        assert!(value.deep_equals(value), "not reflexive: {value:?}");
    }
    for a in &values {
        for b in &values {
            assert_eq!(a.deep_equals(b), b.deep_equals(a), "not symmetric: {a:?} / {b:?}");
        }
    }
}
