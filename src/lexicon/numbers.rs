//! Number-word vocabularies and the ordinal suffix map.

/// Unit words, indexed by digit ("" for zero: the caller decides how to
/// render zero from its configuration).
pub static UNITS: &[&str] = &[
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Teen words, indexed by `n - 10`.
pub static TEENS: &[&str] = &[
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
    "seventeen", "eighteen", "nineteen",
];

/// Tens words, indexed by the tens digit (slots 0 and 1 are unused).
pub static TENS: &[&str] = &[
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy",
    "eighty", "ninety",
];

/// Scale words for successive powers of one thousand.
pub static SCALES: &[&str] = &[
    "", "thousand", "million", "billion", "trillion", "quadrillion",
    "quintillion", "sextillion", "septillion", "octillion", "nonillion",
    "decillion",
];

/// Ordinal suffix for a number, from its value mod 100 and mod 10. The
/// teens (11th, 12th, 13th) are irregular and win over the mod-10 table.
pub fn ordinal_suffix(mod100: u32, mod10: u32) -> &'static str {
    if (11..=13).contains(&mod100) {
        return "th";
    }
    match mod10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Irregular number-word → ordinal-word endings. Matched against the
/// *end* of the final word so hyphenated forms work ("twenty-one" →
/// "twenty-first"). Checked before the generic `-ty` → `-tieth` rule and
/// the `+th` fallback.
pub static NTH_WORD_ENDINGS: &[(&str, &str)] = &[
    ("one", "first"),
    ("two", "second"),
    ("three", "third"),
    ("five", "fifth"),
    ("eight", "eighth"),
    ("nine", "ninth"),
    ("twelve", "twelfth"),
];
