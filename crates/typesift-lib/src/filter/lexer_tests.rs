use crate::filter::tokenize;
use crate::test_utils::users;

fn snapshot(input: &str) -> String {
    let tokens = tokenize(input, &users()).expect("input tokenizes");
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!("{token}\n"));
    }
    out
}

fn lex_error(input: &str) -> String {
    tokenize(input, &users())
        .expect_err("input should not tokenize")
        .to_string()
}

#[test]
fn operators_prefer_longest_match() {
    insta::assert_snapshot!(snapshot(":= :!= :< :> :<= :>= : :! :["), @r#"
    Eq ":="
    NotEq ":!="
    Lt ":<"
    Gt ":>"
    LtEq ":<="
    GtEq ":>="
    Colon ":"
    Bang ":!"
    BracketOpen ":["
    "#);
}

#[test]
fn punctuation() {
    insta::assert_snapshot!(snapshot("( ) ] && || .. , < >"), @r#"
    ParenOpen "("
    ParenClose ")"
    BracketClose "]"
    And "&&"
    Or "||"
    Spread ".."
    Comma ","
    AngleLt "<"
    AngleGt ">"
    "#);
}

#[test]
fn field_names_become_identifiers() {
    insta::assert_snapshot!(snapshot("age:>=30 && name:=Alice"), @r#"
    Identifier "age" int32
    GtEq ":>="
    Number "30"
    And "&&"
    Identifier "name" string
    Eq ":="
    Literal "Alice"
    "#);
}

#[test]
fn unknown_words_are_literals() {
    insta::assert_snapshot!(snapshot("nickname:=bob_smith-jr"), @r#"
    Literal "nickname"
    Eq ":="
    Literal "bob_smith-jr"
    "#);
}

#[test]
fn numbers() {
    insta::assert_snapshot!(snapshot("42 -7 3.14 -0.5"), @r#"
    Number "42"
    Number "-7"
    Number "3.14"
    Number "-0.5"
    "#);
}

#[test]
fn number_range_keeps_spread() {
    insta::assert_snapshot!(snapshot("age:[30..20, 50]"), @r#"
    Identifier "age" int32
    BracketOpen ":["
    Number "30"
    Spread ".."
    Number "20"
    Comma ","
    Number "50"
    BracketClose "]"
    "#);
}

#[test]
fn trailing_dot_ends_number() {
    assert_eq!(lex_error("age:=13."), "Unknown token: .");
}

#[test]
fn hyphen_starts_word_unless_followed_by_digit() {
    insta::assert_snapshot!(snapshot("-draft -12"), @r#"
    Literal "-draft"
    Number "-12"
    "#);
}

#[test]
fn asterisk_is_not_a_word_character() {
    insta::assert_snapshot!(lex_error("name:An*"), @"Unknown token: *");
    insta::assert_snapshot!(lex_error("name:=a*b*c"), @"Unknown token: *");
}

#[test]
fn backtick_literal_keeps_delimiters() {
    insta::assert_snapshot!(snapshot("name:[`Alice(!)`, `a && b`]"), @r#"
    Identifier "name" string
    BracketOpen ":["
    Literal "Alice(!)"
    Comma ","
    Literal "a && b"
    BracketClose "]"
    "#);
}

#[test]
fn backtick_literal_may_name_a_field() {
    insta::assert_snapshot!(snapshot("name:=`age`"), @r#"
    Identifier "name" string
    Eq ":="
    Literal "age"
    "#);
}

#[test]
fn reference_captures_nested_clause() {
    insta::assert_snapshot!(snapshot("$posts(title:=x && $comments(content:=y))"), @r#"
    Reference "posts" "title:=x && $comments(content:=y)"
    "#);
}

#[test]
fn reference_ignores_parens_in_backticks() {
    insta::assert_snapshot!(snapshot("$posts(title:=`)(`) && age:=1"), @r#"
    Reference "posts" "title:=`)(`"
    And "&&"
    Identifier "age" int32
    Eq ":="
    Number "1"
    "#);
}

#[test]
fn unclosed_reference_takes_remainder() {
    insta::assert_snapshot!(snapshot("$posts(title:=x && (likes:>1)"), @r#"
    Reference "posts" "title:=x && (likes:>1)" unclosed
    "#);
}

#[test]
fn whitespace_is_skipped() {
    insta::assert_snapshot!(snapshot(" \tage\r\n:= 30 "), @r#"
    Identifier "age" int32
    Eq ":="
    Number "30"
    "#);
}

#[test]
fn empty_input() {
    assert_eq!(snapshot(""), "");
    assert_eq!(snapshot("   "), "");
}

#[test]
fn unknown_characters() {
    assert_eq!(lex_error("age != 20"), "Unknown token: !");
    assert_eq!(lex_error("age:=20 & name:=x"), "Unknown token: &");
    assert_eq!(lex_error("$posts"), "Unknown token: $");
    assert_eq!(lex_error("name:=`open"), "Unknown token: `");
    assert_eq!(lex_error("age:=2 ; drop"), "Unknown token: ;");
}
