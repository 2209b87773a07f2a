use libinflect::prelude::*;

// ============================================================================
// Noun plurals
// ============================================================================

#[test]
fn test_regular_plurals() {
    let engine = Engine::new();
    assert_eq!(engine.plural_noun("cat"), "cats");
    assert_eq!(engine.plural_noun("dog"), "dogs");
    assert_eq!(engine.plural_noun("church"), "churches");
    assert_eq!(engine.plural_noun("box"), "boxes");
    assert_eq!(engine.plural_noun("kiss"), "kisses");
    assert_eq!(engine.plural_noun("lady"), "ladies");
    assert_eq!(engine.plural_noun("boy"), "boys");
    assert_eq!(engine.plural_noun("hero"), "heroes");
    assert_eq!(engine.plural_noun("piano"), "pianos");
}

#[test]
fn test_irregular_plurals() {
    let engine = Engine::new();
    assert_eq!(engine.plural_noun("mouse"), "mice");
    assert_eq!(engine.plural_noun("goose"), "geese");
    assert_eq!(engine.plural_noun("tooth"), "teeth");
    assert_eq!(engine.plural_noun("foot"), "feet");
    assert_eq!(engine.plural_noun("child"), "children");
    assert_eq!(engine.plural_noun("ox"), "oxen");
    assert_eq!(engine.plural_noun("man"), "men");
    assert_eq!(engine.plural_noun("woman"), "women");
    assert_eq!(engine.plural_noun("person"), "people");
}

#[test]
fn test_f_to_ves() {
    let engine = Engine::new();
    assert_eq!(engine.plural_noun("knife"), "knives");
    assert_eq!(engine.plural_noun("wife"), "wives");
    assert_eq!(engine.plural_noun("leaf"), "leaves");
    assert_eq!(engine.plural_noun("wolf"), "wolves");
}

#[test]
fn test_uninflected_nouns() {
    let engine = Engine::new();
    assert_eq!(engine.plural_noun("sheep"), "sheep");
    assert_eq!(engine.plural_noun("fish"), "fish");
    assert_eq!(engine.plural_noun("deer"), "deer");
    assert_eq!(engine.plural_noun("series"), "series");
    assert_eq!(engine.plural_noun("Japanese"), "Japanese");
}

#[test]
fn test_latin_and_greek() {
    let engine = Engine::new();
    assert_eq!(engine.plural_noun("criterion"), "criteria");
    assert_eq!(engine.plural_noun("phenomenon"), "phenomena");
    assert_eq!(engine.plural_noun("alumnus"), "alumni");
    assert_eq!(engine.plural_noun("analysis"), "analyses");
    assert_eq!(engine.plural_noun("basis"), "bases");
}

#[test]
fn test_compound_nouns() {
    let engine = Engine::new();
    assert_eq!(engine.plural_noun("mother-in-law"), "mothers-in-law");
    assert_eq!(engine.plural_noun("attorney general"), "attorneys general");
    assert_eq!(engine.plural_noun("court martial"), "courts martial");
    assert_eq!(engine.plural_noun("field mouse"), "field mice");
}

#[test]
fn test_case_and_whitespace_preserved() {
    let engine = Engine::new();
    assert_eq!(engine.plural_noun("Cat"), "Cats");
    assert_eq!(engine.plural_noun("CAT"), "CATS");
    assert_eq!(engine.plural_noun("  cat "), "  cats ");
}

#[test]
fn test_count_gates_inflection() {
    let engine = Engine::new();
    assert_eq!(engine.plural_noun_with("cat", 1), "cat");
    assert_eq!(engine.plural_noun_with("cat", 2), "cats");
    assert_eq!(engine.plural_noun_with("cat", "a"), "cat");
    assert_eq!(engine.plural_noun_with("cat", "every"), "cat");
    assert_eq!(engine.plural_noun_with("cat", "several"), "cats");
    assert_eq!(engine.plural_noun_with("cat", 0), "cats");
}

#[test]
fn test_zero_flag_count_resolution() {
    let mut engine = Engine::new();
    engine.classical_set(ClassicalFlag::Zero, true);
    assert_eq!(engine.plural_noun_with("cat", 0), "cat");
    assert_eq!(engine.plural_noun_with("cat", "no"), "cat");
    assert_eq!(engine.plural_noun_with("cat", 2), "cats");
}

// ============================================================================
// Classical modes
// ============================================================================

#[test]
fn test_ancient_flag() {
    let mut engine = Engine::new();
    assert_eq!(engine.plural_noun("formula"), "formulas");
    assert_eq!(engine.plural_noun("index"), "indexes");
    engine.classical_set(ClassicalFlag::Ancient, true);
    assert_eq!(engine.plural_noun("formula"), "formulae");
    assert_eq!(engine.plural_noun("index"), "indices");
    assert_eq!(engine.plural_noun("matrix"), "matrices");
}

#[test]
fn test_herd_flag() {
    let mut engine = Engine::new();
    assert_eq!(engine.plural_noun("buffalo"), "buffaloes");
    engine.classical_set(ClassicalFlag::Herd, true);
    assert_eq!(engine.plural_noun("buffalo"), "buffalo");
}

#[test]
fn test_persons_flag() {
    let mut engine = Engine::new();
    assert_eq!(engine.plural_noun("person"), "people");
    engine.classical_set(ClassicalFlag::Persons, true);
    assert_eq!(engine.plural_noun("person"), "persons");
}

#[test]
fn test_names_flag_default_on() {
    let mut engine = Engine::new();
    assert_eq!(engine.plural_noun("Mary"), "Marys");
    engine.classical_set(ClassicalFlag::Names, false);
    assert_eq!(engine.plural_noun("Mary"), "Maries");
}

#[test]
fn test_classical_all_and_default() {
    let mut engine = Engine::new();
    engine.classical_all(true);
    assert_eq!(engine.plural_noun("index"), "indices");
    assert_eq!(engine.plural_noun("person"), "persons");
    engine.classical_default();
    assert_eq!(engine.plural_noun("index"), "indexes");
    assert_eq!(engine.plural_noun("person"), "people");
    assert_eq!(engine.plural_noun("Mary"), "Marys");
}

// ============================================================================
// Singular
// ============================================================================

#[test]
fn test_singular_noun() {
    let engine = Engine::new();
    assert_eq!(engine.singular_noun("cats").as_deref(), Some("cat"));
    assert_eq!(engine.singular_noun("ladies").as_deref(), Some("lady"));
    assert_eq!(engine.singular_noun("churches").as_deref(), Some("church"));
    assert_eq!(engine.singular_noun("knives").as_deref(), Some("knife"));
    assert_eq!(engine.singular_noun("mice").as_deref(), Some("mouse"));
    assert_eq!(engine.singular_noun("children").as_deref(), Some("child"));
    assert_eq!(engine.singular_noun("people").as_deref(), Some("person"));
    assert_eq!(engine.singular_noun("data").as_deref(), Some("datum"));
}

#[test]
fn test_singular_noun_not_found() {
    let engine = Engine::new();
    assert_eq!(engine.singular_noun("cat"), None);
    assert_eq!(engine.singular_noun("boss"), None);
}

#[test]
fn test_singular_uninflected() {
    let engine = Engine::new();
    assert_eq!(engine.singular_noun("sheep").as_deref(), Some("sheep"));
    assert_eq!(engine.singular_noun("series").as_deref(), Some("series"));
}

#[test]
fn test_singular_pronoun_gender() {
    let mut engine = Engine::new();
    assert_eq!(engine.singular_noun("they").as_deref(), Some("it"));
    assert_eq!(engine.singular_noun("themselves").as_deref(), Some("itself"));
    engine.set_gender(Gender::Feminine);
    assert_eq!(engine.singular_noun("they").as_deref(), Some("she"));
    assert_eq!(engine.singular_noun("them").as_deref(), Some("her"));
    assert_eq!(
        engine
            .singular_noun_gender("they", Gender::Masculine)
            .as_deref(),
        Some("he")
    );
}

// ============================================================================
// Verbs and adjectives
// ============================================================================

#[test]
fn test_plural_verbs() {
    let engine = Engine::new();
    assert_eq!(engine.plural_verb("is"), "are");
    assert_eq!(engine.plural_verb("was"), "were");
    assert_eq!(engine.plural_verb("has"), "have");
    assert_eq!(engine.plural_verb("runs"), "run");
    assert_eq!(engine.plural_verb("catches"), "catch");
    assert_eq!(engine.plural_verb("isn't"), "aren't");
    assert_eq!(engine.plural_verb("fought"), "fought");
}

#[test]
fn test_plural_adjectives() {
    let engine = Engine::new();
    assert_eq!(engine.plural_adj("this"), "these");
    assert_eq!(engine.plural_adj("that"), "those");
    assert_eq!(engine.plural_adj("my"), "our");
    assert_eq!(engine.plural_adj("cat's"), "cats'");
    assert_eq!(engine.plural_adj("child's"), "children's");
    assert_eq!(engine.plural_adj("blue"), "blue");
}

#[test]
fn test_generic_plural_dispatch() {
    let engine = Engine::new();
    assert_eq!(engine.plural("cow"), "cows");
    assert_eq!(engine.plural("this"), "these");
    assert_eq!(engine.plural("is"), "are");
    assert_eq!(engine.plural("a cat"), "cats");
}

#[test]
fn test_present_participle() {
    let engine = Engine::new();
    assert_eq!(engine.present_participle("run"), "running");
    assert_eq!(engine.present_participle("sleep"), "sleeping");
    assert_eq!(engine.present_participle("make"), "making");
    assert_eq!(engine.present_participle("die"), "dying");
    assert_eq!(engine.present_participle("is"), "being");
}

// ============================================================================
// Comparison
// ============================================================================

#[test]
fn test_compare_relations() {
    let engine = Engine::new();
    assert_eq!(engine.compare("cat", "cat").unwrap().to_string(), "eq");
    assert_eq!(engine.compare("cat", "cats").unwrap().to_string(), "s:p");
    assert_eq!(engine.compare("cats", "cat").unwrap().to_string(), "p:s");
    assert_eq!(
        engine
            .compare_nouns("indexes", "indices")
            .unwrap()
            .to_string(),
        "p:p"
    );
    assert_eq!(engine.compare("cat", "dog"), None);
}

#[test]
fn test_compare_adjs_possessives() {
    let engine = Engine::new();
    assert_eq!(
        engine.compare_adjs("cat's", "cats'").unwrap().to_string(),
        "s:p"
    );
    // Rival plural possessives of the same base noun.
    assert_eq!(
        engine.compare_adjs("cows'", "kine's").unwrap().to_string(),
        "p:p"
    );
    assert_eq!(engine.compare_adjs("cats'", "dogs'"), None);
}

#[test]
fn test_compare_ignores_active_mode() {
    // The relation holds whether or not classical mode is active.
    let mut engine = Engine::new();
    assert_eq!(
        engine.compare_nouns("index", "indices"),
        Some(Comparison::SingularPlural)
    );
    engine.classical_set(ClassicalFlag::Ancient, true);
    assert_eq!(
        engine.compare_nouns("index", "indexes"),
        Some(Comparison::SingularPlural)
    );
}

// ============================================================================
// User-defined words
// ============================================================================

#[test]
fn test_user_defined_noun_both_directions() {
    let mut engine = Engine::new();
    engine.defnoun("klingon", Some("klingonim")).unwrap();
    assert_eq!(engine.plural_noun("klingon"), "klingonim");
    assert_eq!(engine.singular_noun("klingonim").as_deref(), Some("klingon"));
}

#[test]
fn test_user_defined_regex_pattern() {
    let mut engine = Engine::new();
    engine.defnoun(".*fish", None).unwrap();
    // Null replacement: matching words fall through uninflected anyway.
    assert_eq!(engine.plural_noun("swordfish"), "swordfish");
}

#[test]
fn test_later_definitions_win() {
    let mut engine = Engine::new();
    engine.defnoun("wug", Some("wugs")).unwrap();
    engine.defnoun("wug", Some("wuggen")).unwrap();
    assert_eq!(engine.plural_noun("wug"), "wuggen");
}

#[test]
fn test_bad_pattern_rejected() {
    let mut engine = Engine::new();
    let err = engine.defnoun("(oops", Some("x")).unwrap_err();
    assert!(matches!(err, InflectError::BadUserDefinedPattern { .. }));
}
