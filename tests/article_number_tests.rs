use libinflect::prelude::*;

// ============================================================================
// Indefinite articles
// ============================================================================

#[test]
fn test_article_basic() {
    let engine = Engine::new();
    assert_eq!(engine.a("cat"), "a cat");
    assert_eq!(engine.a("apple"), "an apple");
    assert_eq!(engine.an("egg"), "an egg");
    assert_eq!(engine.an("banana"), "a banana");
}

#[test]
fn test_article_silent_h() {
    let engine = Engine::new();
    assert_eq!(engine.a("hour"), "an hour");
    assert_eq!(engine.a("honest politician"), "an honest politician");
    assert_eq!(engine.a("hotel"), "a hotel");
}

#[test]
fn test_article_consonant_sound_u() {
    let engine = Engine::new();
    assert_eq!(engine.a("university"), "a university");
    assert_eq!(engine.a("unicorn"), "a unicorn");
    assert_eq!(engine.a("umbrella"), "an umbrella");
    assert_eq!(engine.a("European union"), "a European union");
    assert_eq!(engine.a("one-way street"), "a one-way street");
}

#[test]
fn test_article_abbreviations() {
    let engine = Engine::new();
    assert_eq!(engine.a("FBI file"), "an FBI file");
    assert_eq!(engine.a("NATO exercise"), "a NATO exercise");
    assert_eq!(engine.a("UN vote"), "a UN vote");
    assert_eq!(engine.a("X"), "an X");
    assert_eq!(engine.a("x-ray"), "an x-ray");
}

#[test]
fn test_article_numbers() {
    let engine = Engine::new();
    assert_eq!(engine.a("8-ball"), "an 8-ball");
    assert_eq!(engine.a("11th hour"), "an 11th hour");
    assert_eq!(engine.a("4-door car"), "a 4-door car");
}

#[test]
fn test_article_with_count() {
    let engine = Engine::new();
    assert_eq!(engine.a_with("cat", 1), "a cat");
    assert_eq!(engine.a_with("cat", "one"), "a cat");
    assert_eq!(engine.a_with("cat", 3), "3 cat");
}

#[test]
fn test_article_overrides() {
    let mut engine = Engine::new();
    engine.defan("umpteenth.*").unwrap();
    assert_eq!(engine.a("umpteenth tries"), "an umpteenth tries");
    engine.defa("unicorn.*").unwrap();
    assert_eq!(engine.a("unicorn"), "a unicorn");
}

// ============================================================================
// no()
// ============================================================================

#[test]
fn test_no() {
    let mut engine = Engine::new();
    assert_eq!(engine.no("mouse"), "no mice");
    assert_eq!(engine.no_with("mouse", 0), "no mice");
    assert_eq!(engine.no_with("mouse", 1), "1 mouse");
    assert_eq!(engine.no_with("mouse", 4), "4 mice");
    engine.classical_set(ClassicalFlag::Zero, true);
    assert_eq!(engine.no("mouse"), "no mouse");
}

// ============================================================================
// Ordinals
// ============================================================================

#[test]
fn test_ordinal_digits() {
    let engine = Engine::new();
    assert_eq!(engine.ordinal("1"), "1st");
    assert_eq!(engine.ordinal("2"), "2nd");
    assert_eq!(engine.ordinal("3"), "3rd");
    assert_eq!(engine.ordinal("4"), "4th");
    assert_eq!(engine.ordinal("11"), "11th");
    assert_eq!(engine.ordinal("12"), "12th");
    assert_eq!(engine.ordinal("13"), "13th");
    assert_eq!(engine.ordinal("21"), "21st");
    assert_eq!(engine.ordinal("100"), "100th");
    assert_eq!(engine.ordinal("101"), "101st");
    assert_eq!(engine.ordinal("1000000"), "1000000th");
}

#[test]
fn test_ordinal_words() {
    let engine = Engine::new();
    assert_eq!(engine.ordinal("one"), "first");
    assert_eq!(engine.ordinal("two"), "second");
    assert_eq!(engine.ordinal("twelve"), "twelfth");
    assert_eq!(engine.ordinal("twenty"), "twentieth");
    assert_eq!(engine.ordinal("twenty-one"), "twenty-first");
    assert_eq!(engine.ordinal("seven"), "seventh");
}

// ============================================================================
// Number to words
// ============================================================================

#[test]
fn test_number_to_words_basic() {
    let engine = Engine::new();
    assert_eq!(engine.number_to_words("0").unwrap(), "zero");
    assert_eq!(engine.number_to_words("9").unwrap(), "nine");
    assert_eq!(engine.number_to_words("10").unwrap(), "ten");
    assert_eq!(engine.number_to_words("19").unwrap(), "nineteen");
    assert_eq!(engine.number_to_words("21").unwrap(), "twenty-one");
    assert_eq!(engine.number_to_words("100").unwrap(), "one hundred");
    assert_eq!(
        engine.number_to_words("123").unwrap(),
        "one hundred and twenty-three"
    );
    assert_eq!(engine.number_to_words("1001").unwrap(), "one thousand, one");
}

#[test]
fn test_number_to_words_large() {
    let engine = Engine::new();
    assert_eq!(
        engine.number_to_words("1000000").unwrap(),
        "one million"
    );
    assert_eq!(
        engine.number_to_words("1234567").unwrap(),
        "one million, two hundred and thirty-four thousand, five hundred and sixty-seven"
    );
}

#[test]
fn test_number_to_words_decimal_and_negative() {
    let engine = Engine::new();
    assert_eq!(engine.number_to_words("3.14").unwrap(), "three point one four");
    assert_eq!(engine.number_to_words("-7").unwrap(), "minus seven");
}

#[test]
fn test_number_to_words_options() {
    let engine = Engine::new();
    let grouped = NumOptions::default().group(1);
    assert_eq!(
        engine.number_to_words_with("123", &grouped).unwrap(),
        "one, two, three"
    );
    let capped = NumOptions::default().threshold(1000);
    assert_eq!(
        engine.number_to_words_with("1234567", &capped).unwrap(),
        "1,234,567"
    );
    let no_and = NumOptions::default().andword("");
    assert_eq!(
        engine.number_to_words_with("123", &no_and).unwrap(),
        "one hundred twenty-three"
    );
}

#[test]
fn test_number_to_words_ordinal_input() {
    let engine = Engine::new();
    assert_eq!(engine.number_to_words("21st").unwrap(), "twenty-first");
    assert_eq!(engine.number_to_words("3rd").unwrap(), "third");
}

#[test]
fn test_number_to_words_errors() {
    let engine = Engine::new();
    assert!(matches!(
        engine.number_to_words("elephant"),
        Err(InflectError::NotANumber(_))
    ));
    let bad_group = NumOptions::default().group(7);
    assert!(matches!(
        engine.number_to_words_with("5", &bad_group),
        Err(InflectError::BadChunkingOption(7))
    ));
}
