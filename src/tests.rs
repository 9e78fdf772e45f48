use crate::{Error, Flags, Pattern, Piece, compose, many0, many1, maybe, named_capture, or};

#[test]
fn macro_templates_follow_compose() {
    let cases: Vec<(Pattern, &str, &str)> = vec![
        (pattern!().unwrap(), "(?:)", ""),
        (pattern!("").unwrap(), "(?:)", ""),
        (pattern!("abc").unwrap(), "abc", ""),
        (pattern!("/abc/").unwrap(), "abc", ""),
        (pattern!("/abc/imsu").unwrap(), "abc", "imsu"),
        (pattern!("/abc").unwrap(), r"\/abc", ""),
        (pattern!("abc/").unwrap(), r"abc\/", ""),
        (pattern!(r"\n\/g").unwrap(), r"\n\/g", ""),
        (upattern!(r"\w").unwrap(), r"\w", "u"),
        (upattern!(r"/\w/imsu").unwrap(), r"\w", "imsu"),
    ];

    for (pattern, source, flags) in cases {
        assert_eq!(pattern.source(), source);
        assert_eq!(pattern.flags().to_string(), flags, "flags of {pattern}");
    }
}

#[test]
fn macro_values_are_spliced() {
    let digit = pattern!(r"\d").unwrap();
    let hex = pattern!("/[" {&digit} "a-f]+/i").unwrap();
    assert_eq!(hex.source(), r"[\da-f]+");
    assert_eq!(hex.flags(), Flags::IGNORE_CASE);

    let repeated = pattern!("x{" {3} "}").unwrap();
    assert_eq!(repeated.source(), "x{3}");
}

#[test]
fn invalid_outer_flags_fail_composition() {
    assert_eq!(pattern!("/a/uu").unwrap_err(), Error::InvalidFlag { flags: "uu".to_string(), flag: 'u' });
}

#[test]
fn named_capture_exposes_matched_text() {
    let year = named_capture("year", &pattern!(r"\d{4}").unwrap()).unwrap();
    let date = pattern!("on " {&year}).unwrap();

    assert_eq!(date.group_names().iter().collect::<Vec<_>>(), ["year"]);
    let caps = date.captures("released on 2024").unwrap();
    assert_eq!(caps.get("year"), Some("2024"));
    assert_eq!(caps.as_str(), "on 2024");
}

#[test]
fn sequenced_named_captures_expose_both_fields() {
    let name = named_capture("name", &pattern!(r"\w+").unwrap()).unwrap();
    let age = named_capture("age", &pattern!(r"\d+").unwrap()).unwrap();
    let person = pattern!("^" {&name} ", " {&age} "$").unwrap();

    let caps = person.captures("alice, 42").unwrap();
    assert_eq!(caps.names().collect::<Vec<_>>(), ["age", "name"]);
    assert_eq!(caps.iter().collect::<Vec<_>>(), [("age", Some("42")), ("name", Some("alice"))]);
    assert!(person.captures("alice 42").is_none());
}

#[test]
fn captures_hide_groups_outside_the_manifest() {
    // Raw text values do not contribute group names.
    let pattern = compose(&["", "-", ""], &[Piece::from("(?<raw>a)"), Piece::from(&pattern!("b").unwrap())]).unwrap();
    assert!(pattern.group_names().is_empty());

    let caps = pattern.captures("a-b").unwrap();
    assert!(!caps.contains("raw"));
    assert_eq!(caps.get("raw"), None);
}

#[test]
fn optional_named_capture_reads_as_none() {
    let sign = maybe(&named_capture("sign", &pattern!("[+-]").unwrap()).unwrap()).unwrap();
    let digits = named_capture("digits", &many1(&pattern!("[0-9]").unwrap()).unwrap()).unwrap();
    let number = pattern!("^" {&sign} {&digits} "$").unwrap();

    let caps = number.captures("17").unwrap();
    assert!(caps.contains("sign"));
    assert_eq!(caps.get("sign"), None);
    assert_eq!(caps.get("digits"), Some("17"));

    let caps = number.captures("-3").unwrap();
    assert_eq!(caps.get("sign"), Some("-"));
}

#[test]
fn alternation_of_captures_exposes_all_names() {
    let aa = named_capture("aa", &pattern!("a+").unwrap()).unwrap();
    let bb = named_capture("bb", &pattern!("b+").unwrap()).unwrap();
    let either = or([&aa, &bb]).unwrap();

    let caps = either.captures("bbb").unwrap();
    assert_eq!(caps.get("aa"), None);
    assert_eq!(caps.get("bb"), Some("bbb"));
}

#[test]
fn display_uses_delimited_form() {
    assert_eq!(pattern!("/a+/iu").unwrap().to_string(), "/a+/iu");
    assert_eq!(pattern!("a/b").unwrap().to_string(), r"/a\/b/");
}

#[test]
fn patterns_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Pattern>();

    let word = pattern!(r"\w+").unwrap();
    let handle = std::thread::spawn(move || word.is_match("abc"));
    assert!(handle.join().unwrap());
}

// Regular expressions cannot express recursion, so this grammar only admits
// objects nested one level deep.
fn json_level1() -> Pattern {
    let ws = pattern!(r"[\s\t\n\r]*").unwrap();
    let digit = pattern!("[0-9]").unwrap();
    let digits = pattern!("" {&digit} "+").unwrap();
    let onenine = pattern!("[1-9]").unwrap();
    let fraction = maybe(&pattern!(r"\." {&digits}).unwrap()).unwrap();
    let sign = pattern!("[+-]?").unwrap();
    let exponent = pattern!("(?:E" {&sign} {&digits} "|e" {&sign} {&digits} ")?").unwrap();
    let integer = or([
        &digit,
        &pattern!("" {&onenine} {&digits}).unwrap(),
        &pattern!("-" {&digit}).unwrap(),
        &pattern!("-" {&onenine} {&digits}).unwrap(),
    ])
    .unwrap();

    let number = pattern!("" {&integer} {&fraction} {&exponent}).unwrap();
    let hex = or([&digit, &pattern!("[a-fA-F]").unwrap()]).unwrap();
    let escape = pattern!(r#"(?:["\\\/bfnrt]|u"# {&hex} "{4})").unwrap();
    let character = pattern!(r#"(?:[^\\"]|\\"# {&escape} ")").unwrap();
    let string = pattern!("\"" {&many0(&character).unwrap()} "\"").unwrap();
    let literal = pattern!("true|false|null").unwrap();

    let value = pattern!("(?:" {&string} "|" {&number} "|" {&literal} ")").unwrap();
    let element = pattern!("" {&ws} {&value} {&ws}).unwrap();
    let member = pattern!("" {&ws} {&string} {&ws} ":" {&element}).unwrap();
    let members = pattern!("" {&member} "(?:," {&member} ")*").unwrap();
    let object = pattern!(r"(?:\{" {&ws} r"\}|\{" {&members} r"\})").unwrap();
    let elements = pattern!("" {&element} "(?:," {&element} ")*").unwrap();
    let array = pattern!(r"(?:\[" {&ws} r"\]|\[" {&elements} r"\])").unwrap();

    let value1 = pattern!("(?:" {&object} "|" {&array} "|" {&string} "|" {&number} "|" {&literal} ")").unwrap();
    let element1 = pattern!("" {&ws} {&value1} {&ws}).unwrap();
    let member1 = pattern!("" {&ws} {&string} {&ws} ":" {&element1}).unwrap();
    let members1 = pattern!("" {&member1} "(?:," {&member1} ")*").unwrap();
    let object1 = pattern!(r"(?:\{" {&ws} r"\}|\{" {&members1} r"\})").unwrap();
    pattern!(r"^\s*" {&object1} r"\s*$").unwrap()
}

#[test]
fn json_grammar_accepts_one_level_of_nesting() {
    let json = json_level1();
    let doc = r#"{
        "name": "regcomp",
        "tags": ["regex", "compose", 3, -0.5e+2, true],
        "owner": {"id": 12, "alias": "r\"cé"},
        "empty": {},
        "none": null
    }"#;
    assert!(json.is_match(doc));
    assert!(json.is_match("{}"));
}

#[test]
fn json_grammar_rejects_deeper_nesting() {
    let json = json_level1();
    assert!(!json.is_match(r#"{"a": {"b": {"c": 1}}}"#));
    assert!(!json.is_match(r#"{"a": [[1]]}"#));
    assert!(!json.is_match(r#"{"a": 01}"#));
}
