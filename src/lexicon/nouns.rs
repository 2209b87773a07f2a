//! Noun tables: irregular maps, uninflected sets, and suffix families.
//!
//! The plural cascade consults these in a fixed priority order (see
//! [`crate::noun`]); the tables here only hold the data. Entries are
//! lowercase; case restoration happens in [`crate::word`].

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::rules::{SuffixAction, SuffixRules, WordSet};

// ============================================================================
// Irregular singular → plural
// ============================================================================

/// Exact irregular plurals. Dual forms are `modern|classical`, selected by
/// the `ancient` flag; "person" is handled separately by the `persons`
/// flag.
pub static SB_IRREGULAR: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("child", "children"),
        ("person", "people"),
        ("brother", "brothers|brethren"),
        ("cow", "cows|kine"),
        ("ox", "oxen"),
        ("die", "dice"),
        ("beef", "beefs|beeves"),
        ("thief", "thiefs|thieves"),
        ("hoof", "hoofs|hooves"),
        ("turf", "turfs|turves"),
        ("loaf", "loaves"),
        ("money", "monies"),
        ("mongoose", "mongooses"),
        ("graffito", "graffiti"),
        ("octopus", "octopuses|octopodes"),
        ("platypus", "platypuses|platypodes"),
        ("genie", "genies|genii"),
        ("ganglion", "ganglions|ganglia"),
        ("prima donna", "prima donnas|prime donne"),
        ("soliloquy", "soliloquies"),
        ("trilby", "trilbys"),
        ("numen", "numina"),
        ("occiput", "occiputs|occipita"),
        ("corpus", "corpuses|corpora"),
        ("opus", "opuses|opera"),
        ("genus", "genera"),
        ("mythos", "mythoi"),
        ("testis", "testes"),
        ("atlas", "atlases|atlantes"),
        ("quiz", "quizzes"),
        ("fez", "fezzes"),
        // Vowel-mutation families, compounds enumerated so that words
        // which merely end in the same letters ("blouse") stay regular.
        ("mouse", "mice"),
        ("dormouse", "dormice"),
        ("fieldmouse", "fieldmice"),
        ("shrewmouse", "shrewmice"),
        ("titmouse", "titmice"),
        ("louse", "lice"),
        ("woodlouse", "woodlice"),
        ("booklouse", "booklice"),
        ("goose", "geese"),
        ("snowgoose", "snowgeese"),
        ("tooth", "teeth"),
        ("eyetooth", "eyeteeth"),
        ("foot", "feet"),
        ("forefoot", "forefeet"),
        ("hindfoot", "hindfeet"),
        ("human", "humans"),
        ("sphinx", "sphinxes|sphinges"),
        ("wildfowl", "wildfowl"),
        ("rom", "roma"),
        ("carmen", "carmina"),
    ]
    .into_iter()
    .collect()
});

/// Irregular plural → singular, derived from [`SB_IRREGULAR`] with every
/// dual-form variant mapped back, plus the inversions of the vowel-mutation
/// and unassimilated-import families that the singular cascade cannot
/// re-derive mechanically.
pub static SI_IRREGULAR: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    for (&singular, &plural) in SB_IRREGULAR.iter() {
        for variant in plural.split('|') {
            // First variant wins; the fixup list below overrides both.
            map.entry(variant).or_insert(singular);
        }
    }
    for (plural, singular) in [
        ("people", "person"),
        ("persons", "person"),
        ("kine", "cow"),
        ("children", "child"),
        ("oxen", "ox"),
        ("dice", "die"),
        // Latin/Greek classical plurals that strip rules would mangle.
        ("data", "datum"),
        ("strata", "stratum"),
        ("errata", "erratum"),
        ("bacteria", "bacterium"),
        ("desiderata", "desideratum"),
        ("memoranda", "memorandum"),
        ("millennia", "millennium"),
        ("ova", "ovum"),
        ("curricula", "curriculum"),
        ("media", "medium"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("noumena", "noumenon"),
        ("automata", "automaton"),
        ("indices", "index"),
        ("indexes", "index"),
        ("appendices", "appendix"),
        ("matrices", "matrix"),
        ("vertices", "vertex"),
        ("vortices", "vortex"),
        ("apices", "apex"),
        ("codices", "codex"),
        ("cortices", "cortex"),
        ("radices", "radix"),
        ("helices", "helix"),
        ("alumni", "alumnus"),
        ("cacti", "cactus"),
        ("fungi", "fungus"),
        ("nuclei", "nucleus"),
        ("stimuli", "stimulus"),
        ("radii", "radius"),
        ("foci", "focus"),
        ("loci", "locus"),
        ("bacilli", "bacillus"),
        ("alumnae", "alumna"),
        ("larvae", "larva"),
        ("vertebrae", "vertebra"),
        ("antennae", "antenna"),
        ("formulae", "formula"),
        ("nebulae", "nebula"),
        ("algae", "alga"),
        ("amoebae", "amoeba"),
        ("personae", "persona"),
        ("larynges", "larynx"),
        ("phalanges", "phalanx"),
        ("geese", "goose"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("corpora", "corpus"),
        ("opera", "opus"),
        ("genera", "genus"),
        ("brethren", "brother"),
        ("movies", "movie"),
        ("cookies", "cookie"),
        ("calories", "calorie"),
        ("zombies", "zombie"),
        ("sorties", "sortie"),
        ("rookies", "rookie"),
        ("brownies", "brownie"),
        ("birdies", "birdie"),
        ("pixies", "pixie"),
        ("budgies", "budgie"),
        ("quizzes", "quiz"),
        ("fezzes", "fez"),
        ("axes", "axis"),
        ("lenses", "lens"),
    ] {
        map.insert(plural, singular);
    }
    map
});

// ============================================================================
// Uninflected nouns
// ============================================================================

/// Nouns whose plural form is identical to the singular.
pub static SB_UNINFLECTED: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        // fish and game
        "bison", "bream", "carp", "cod", "flounder", "fish", "mackerel", "moose",
        "pike", "salmon", "shad", "swine", "trout", "tuna", "whiting", "wrasse",
        "eland", "wildebeest", "elk", "deer", "sheep",
        // diseases and -s singulars with no distinct plural
        "diabetes", "jackanapes", "measles", "mumps", "rabies", "herpes",
        "series", "species", "chassis", "innings", "news", "mews", "graffiti",
        "djinn", "offspring", "aircraft", "corps", "debris", "contretemps",
        // dual-membered instruments and garments
        "breeches", "britches", "clippers", "gallows", "headquarters", "pincers",
        "pliers", "proceedings", "scissors", "shears", "trousers",
        "homework", "blues",
    ])
});

/// Suffix families that are uninflected wherever they appear
/// ("swordfish", "Portuguese", "chickenpox", "bronchitis"). The `-ese`
/// nationality family is keyed on the preceding letter so "these" and
/// "cheese" stay regular.
pub static SB_UNINFLECTED_ENDINGS: &[&str] = &[
    "fish", "nese", "rese", "lese", "mese", "uese", "ois", "sheep", "deer", "pox", "itis",
];

/// Herd animals: uninflected only when the `herd` classical flag is set.
pub static SB_UNINFLECTED_HERD: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "antelope", "buffalo", "elephant", "giraffe", "impala", "okapi", "oryx",
        "rhinoceros", "zebra",
    ])
});

/// Singular nouns ending in `s` that take `-es` and must never be
/// "singularized" by stripping the final `s`.
pub static SB_SINGULAR_S: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "acropolis", "aegis", "alias", "asbestos", "bathos", "bias", "caddis",
        "cannabis", "canvas", "chaos", "cosmos", "dais", "digitalis",
        "epidermis", "ethos", "gas", "glottis", "hubris", "ibis", "lens",
        "mantis", "marquis", "metropolis", "pathos", "pelvis", "polis",
        "rhinoceros", "sassafras", "trellis",
        // -us singulars whose plural is a regular -es form; listed so the
        // singular direction refuses to strip their final s.
        "apparatus", "bonus", "bus", "campus", "census", "caucus", "chorus",
        "circus", "citrus", "consensus", "crocus", "sinus", "status",
        "surplus", "syllabus", "thesaurus", "virus", "walrus",
    ])
});

// ============================================================================
// Compounds
// ============================================================================

/// Prepositions recognized inside multi-word compounds ("man-of-war",
/// "mother-in-law", "attorney at law").
pub static PREPOSITIONS: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "about", "above", "across", "after", "among", "around", "at", "athwart",
        "before", "behind", "below", "beneath", "beside", "besides", "between",
        "betwixt", "beyond", "but", "by", "during", "except", "for", "from",
        "in", "into", "near", "of", "off", "on", "onto", "out", "over", "since",
        "till", "to", "under", "until", "unto", "upon", "with",
    ])
});

/// Postfix adjectives: the head noun precedes them and carries the plural
/// ("attorney general" → "attorneys general").
pub static SB_POSTFIX_ADJ: Lazy<WordSet> =
    Lazy::new(|| WordSet::build(&["general", "martial", "royal", "elect"]));

/// Modifiers that turn a `-general` compound back into an ordinary noun
/// phrase ("major general" → "major generals").
pub static SB_MILITARY_GENERAL: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&["major", "lieutenant", "brigadier", "adjutant", "quartermaster"])
});

// ============================================================================
// Suffix rule families (plural direction)
// ============================================================================

/// `-man` → `-men` exceptions: these take plain `-mans`.
pub static SB_MAN_MANS: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "ataman", "caiman", "cayman", "ceriman", "desman", "dolman", "farman",
        "harman", "hetman", "human", "leman", "ottoman", "shaman", "talisman",
        "german", "norman", "roman",
    ])
});

/// Unassimilated-import endings, probed longest suffix first. These are
/// safe as raw suffixes: any noun in `-sis` takes `-ses`, any `-zoon`
/// takes `-zoa`, and `-ceps` words are invariant.
pub static SB_MUTATION: Lazy<SuffixRules> = Lazy::new(|| {
    SuffixRules::build(&[
        ("zoon", SuffixAction::Replace("zoa")),
        ("cis", SuffixAction::Replace("ces")),
        ("sis", SuffixAction::Replace("ses")),
        ("xis", SuffixAction::Replace("xes")),
        ("ceps", SuffixAction::Keep),
    ])
});

/// Words in `-ex`/`-ix` that always take `-ices`.
pub static SB_U_EX_ICES: Lazy<WordSet> =
    Lazy::new(|| WordSet::build(&["codex", "murex", "silex", "radix", "helix"]));

/// Words in `-ex`/`-ix` that take `-ices` only in classical mode.
pub static SB_C_EX_ICES: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "apex", "cortex", "index", "latex", "pontifex", "simplex", "vertex",
        "vortex", "appendix", "matrix",
    ])
});

/// Words in `-um` that always take `-a`.
pub static SB_U_UM_A: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "agendum", "bacterium", "candelabrum", "datum", "desideratum",
        "erratum", "extremum", "ovum", "stratum",
    ])
});

/// Words in `-um` that take `-a` only in classical mode.
pub static SB_C_UM_A: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "aquarium", "compendium", "consortium", "cranium", "curriculum",
        "dictum", "emporium", "enconium", "gymnasium", "honorarium",
        "interregnum", "lustrum", "maximum", "medium", "memorandum",
        "millennium", "minimum", "momentum", "optimum", "phylum", "quantum",
        "rostrum", "spectrum", "speculum", "stadium", "trapezium",
        "ultimatum", "vacuum", "velum",
    ])
});

/// Words in `-us` that always take `-i`.
pub static SB_U_US_I: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "alumnus", "alveolus", "bacillus", "bronchus", "locus", "meniscus",
        "nucleus", "stimulus",
    ])
});

/// Words in `-us` that take `-i` only in classical mode.
pub static SB_C_US_I: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "cactus", "focus", "fungus", "genius", "hippopotamus", "incubus",
        "nimbus", "nucleolus", "radius", "stylus", "succubus", "torus",
        "umbilicus", "uterus",
    ])
});

/// Words in `-on` that always take `-a`.
pub static SB_U_ON_A: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "asyndeton", "criterion", "hyperbaton", "noumenon", "organon",
        "phenomenon", "prolegomenon", "automaton",
    ])
});

/// Words in `-a` that always take `-ae`.
pub static SB_U_A_AE: Lazy<WordSet> =
    Lazy::new(|| WordSet::build(&["alga", "alumna", "larva", "vertebra"]));

/// Words in `-a` that take `-ae` only in classical mode.
pub static SB_C_A_AE: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "abscissa", "amoeba", "antenna", "aurora", "fauna", "flora", "formula",
        "hydra", "hyperbola", "lacuna", "medusa", "nebula", "nova", "parabola",
        "persona",
    ])
});

/// Words in `-a` that take `-ata` in classical mode (Greek neuters).
pub static SB_C_A_ATA: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "anathema", "bema", "carcinoma", "charisma", "diploma", "dogma",
        "drama", "edema", "enema", "enigma", "gumma", "lemma", "lymphoma",
        "magma", "melisma", "miasma", "oedema", "sarcoma", "schema", "soma",
        "stigma", "stoma", "trauma",
    ])
});

/// Words in `-o` that take `-i` in classical mode (Italian imports).
pub static SB_C_O_I: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "alto", "basso", "canto", "contralto", "crescendo", "solo", "soprano",
        "tempo", "virtuoso",
    ])
});

/// Words in `-o` that always take plain `-os`.
pub static SB_U_O_OS: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "albino", "archipelago", "armadillo", "auto", "casino", "commando",
        "ditto", "dynamo", "embryo", "fiasco", "generalissimo", "ghetto",
        "guano", "inferno", "jumbo", "lingo", "lumbago", "macro", "magneto",
        "manifesto", "medico", "memo", "octavo", "photo", "piano", "pro",
        "quarto", "rhino", "stylo", "zero",
    ])
});

/// `-trix` → `-trices`, `-eau` → `-eaux`, `-ieu` → `-ieux`, `-nx` →
/// `-nges`: applied only in classical mode.
pub static SB_CLASSICAL_SUFFIX: Lazy<SuffixRules> = Lazy::new(|| {
    SuffixRules::build(&[
        ("trix", SuffixAction::Replace("trices")),
        ("eau", SuffixAction::Replace("eaux")),
        ("ieu", SuffixAction::Replace("ieux")),
        ("anx", SuffixAction::Replace("anges")),
        ("inx", SuffixAction::Replace("inges")),
        ("ynx", SuffixAction::Replace("ynges")),
    ])
});

/// Hard-`ch` words (pronounced /k/) that take plain `-s`.
pub static SB_HARD_CH: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "stomach", "epoch", "monarch", "matriarch", "patriarch", "oligarch",
        "hierarch", "eunuch", "tech", "loch",
    ])
});

/// `-f`/`-fe` words that take `-ves`.
pub static SB_F_VES: Lazy<SuffixRules> = Lazy::new(|| {
    SuffixRules::build(&[
        ("knife", SuffixAction::Replace("knives")),
        ("life", SuffixAction::Replace("lives")),
        ("wife", SuffixAction::Replace("wives")),
        ("wolf", SuffixAction::Replace("wolves")),
        ("shelf", SuffixAction::Replace("shelves")),
        ("self", SuffixAction::Replace("selves")),
        ("elf", SuffixAction::Replace("elves")),
        ("half", SuffixAction::Replace("halves")),
        ("calf", SuffixAction::Replace("calves")),
        ("leaf", SuffixAction::Replace("leaves")),
        ("sheaf", SuffixAction::Replace("sheaves")),
        ("wharf", SuffixAction::Replace("wharves")),
        ("scarf", SuffixAction::Replace("scarves")),
        ("dwarf", SuffixAction::Replace("dwarfs|dwarves")),
    ])
});

// ============================================================================
// Singular-direction word sets
// ============================================================================

/// Words ending in `-men` that are already singular and must not become
/// `-man`.
pub static SI_MEN_SINGULAR: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "abdomen", "acumen", "albumen", "amen", "foramen", "hymen", "lumen",
        "omen", "ramen", "regimen", "semen", "specimen", "stamen",
    ])
});

/// Plurals in `-ses` that singularize to `-sis`.
pub static SI_SES_SIS: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "analyses", "bases", "crises", "diagnoses", "ellipses", "emphases",
        "hypotheses", "neuroses", "oases", "paralyses", "parentheses",
        "prognoses", "psychoses", "synopses", "syntheses", "theses",
    ])
});

/// Plurals in `-oes` whose singular keeps the `e` ("toes" → "toe").
pub static SI_OES_OE: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "aloes", "canoes", "foes", "hoes", "oboes", "roes", "shoes", "throes",
        "toes", "woes",
    ])
});

/// Plurals in `-ses` whose singular ends in a bare `s` ("buses" → "bus").
pub static SI_SES_S: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "aliases", "atlases", "biases", "bonuses", "buses", "busses",
        "campuses", "canvases", "censuses", "choruses", "circuses", "crocuses",
        "gases", "gasses", "irises", "octopuses", "platypuses", "sinuses",
        "statuses", "surpluses", "viruses", "walruses",
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_lookup() {
        assert_eq!(SB_IRREGULAR.get("child"), Some(&"children"));
        assert_eq!(SB_IRREGULAR.get("cow"), Some(&"cows|kine"));
    }

    #[test]
    fn test_si_map_covers_both_variants() {
        assert_eq!(SI_IRREGULAR.get("brothers"), Some(&"brother"));
        assert_eq!(SI_IRREGULAR.get("brethren"), Some(&"brother"));
        assert_eq!(SI_IRREGULAR.get("children"), Some(&"child"));
    }

    #[test]
    fn test_uninflected_endings_cover_compounds() {
        assert!(SB_UNINFLECTED.contains("sheep"));
        assert!(SB_UNINFLECTED_ENDINGS.iter().any(|e| "swordfish".ends_with(e)));
        assert!(SB_UNINFLECTED_ENDINGS.iter().any(|e| "portuguese".ends_with(e)));
    }

    #[test]
    fn test_mutation_family() {
        assert_eq!(SB_MUTATION.apply("analysis").unwrap(), "analyses");
        assert_eq!(SB_MUTATION.apply("spermatozoon").unwrap(), "spermatozoa");
        assert_eq!(SB_MUTATION.apply("biceps").unwrap(), "biceps");
        assert!(SB_MUTATION.apply("blouse").is_none());
    }

    #[test]
    fn test_mutation_compounds_enumerated() {
        assert_eq!(SB_IRREGULAR.get("dormouse"), Some(&"dormice"));
        assert_eq!(SI_IRREGULAR.get("dormice"), Some(&"dormouse"));
    }

    #[test]
    fn test_man_exceptions() {
        assert!(SB_MAN_MANS.matches_suffix("superhuman"));
        assert!(!SB_MAN_MANS.matches_suffix("fireman"));
    }
}
