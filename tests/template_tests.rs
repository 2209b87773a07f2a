use libinflect::prelude::*;

fn run(text: &str) -> String {
    Engine::new().inflect(text).unwrap()
}

#[test]
fn test_literal_text_is_verbatim() {
    assert_eq!(run("The quick brown fox."), "The quick brown fox.");
    assert_eq!(run(""), "");
}

#[test]
fn test_spec_style_sentence() {
    assert_eq!(run("There is plural(a cat)"), "There is cats");
}

#[test]
fn test_counted_sentences() {
    let mut engine = Engine::new();
    assert_eq!(
        engine.inflect("num(2) plural(child) plural_verb(was) seen").unwrap(),
        "2 children were seen"
    );
    assert_eq!(
        engine.inflect("num(1) plural(child) plural_verb(was) seen").unwrap(),
        "1 child was seen"
    );
}

#[test]
fn test_count_persists_across_calls() {
    let mut engine = Engine::new();
    engine.inflect("num(2)").unwrap();
    assert_eq!(engine.plural_noun("cat"), "cats");
    engine.inflect("num(1)").unwrap();
    assert_eq!(engine.plural_noun("cat"), "cat");
}

#[test]
fn test_hidden_num() {
    assert_eq!(run("num(3, no)plural(cat)"), "cats");
}

#[test]
fn test_all_directives() {
    assert_eq!(run("plural_noun(goose)"), "geese");
    assert_eq!(run("plural_verb(does)"), "do");
    assert_eq!(run("plural_adj(this)"), "these");
    assert_eq!(run("singular_noun(geese)"), "goose");
    assert_eq!(run("a(owl)"), "an owl");
    assert_eq!(run("an(house)"), "a house");
    assert_eq!(run("no(goose)"), "no geese");
    assert_eq!(run("ordinal(9)"), "9th");
    assert_eq!(run("number_to_words(42)"), "forty-two");
    assert_eq!(run("present_participle(swim)"), "swimming");
}

#[test]
fn test_surrounding_text_preserved() {
    assert_eq!(
        run("I saw plural(mouse), plural(goose), and plural(sheep)!"),
        "I saw mice, geese, and sheep!"
    );
}

#[test]
fn test_non_directive_parentheses() {
    assert_eq!(run("f(x) = plural(cat)"), "f(x) = cats");
    assert_eq!(run("misplural(cat)"), "misplural(cat)");
}

#[test]
fn test_directive_errors_surface() {
    let mut engine = Engine::new();
    assert!(matches!(
        engine.inflect("number_to_words(gerbil)"),
        Err(InflectError::NotANumber(_))
    ));
}
