//! Exception lists for indefinite-article selection.
//!
//! The a/an cascade lives in [`crate::article`]; these tables only hold
//! the orthographic/phonetic exception data.

/// Lowercase prefixes that force "an" despite a consonant spelling
/// (silent `h`, vowel-sounding names). "houri" is carved back out of the
/// "hour" prefix below.
pub static EXPLICIT_AN_PREFIXES: &[&str] = &["euler", "hour", "heir", "honest", "hono"];

/// Prefix exceptions to [`EXPLICIT_AN_PREFIXES`].
pub static EXPLICIT_AN_EXCEPTIONS: &[&str] = &["houri"];

/// Single letters whose names begin with a vowel sound ("an F", "an X").
pub static AN_SINGLE_LETTERS: &[char] =
    &['a', 'e', 'f', 'h', 'i', 'l', 'm', 'n', 'o', 'r', 's', 'x'];

/// Leading capitals that may start a vowel-sounding abbreviation.
pub static AN_ABBREV_LEAD: &[char] = &['F', 'H', 'L', 'M', 'N', 'R', 'S', 'X'];

/// Consonant clusters after a leading `y` that make the `y` vowel-like
/// in unnaturalized loanwords ("an yttrium compound").
pub static AN_Y_CLUSTERS: &[&str] = &[
    "yb", "ycl", "yfere", "ygg", "yp", "yrou", "ytt",
];

/// Vowel-spelled prefixes that are phonetically consonant-led and force
/// "a": "eu-" and "ewe" (you-), "once"/"one" (wun-), "ubi-"/"uti-" style
/// long-u onsets, and "uni-" except the "unin-"/"unim-"/"unid-" negative
/// prefixes.
pub fn consonant_sound_vowel_prefix(lower: &str) -> bool {
    if lower.starts_with("eu") || lower.starts_with("ewe") {
        return true;
    }
    if matches!(lower, "one" | "once")
        || lower.starts_with("one-")
        || lower.starts_with("one ")
        || lower.starts_with("once-")
        || lower.starts_with("once ")
    {
        return true;
    }
    if let Some(rest) = lower.strip_prefix("uni") {
        match rest.chars().next() {
            // "uninformed", "unimportant", "unidentified" keep "an".
            Some('n') | Some('m') | Some('d') => {
                if rest.starts_with("mo") {
                    return true;
                }
            }
            _ => return true,
        }
    }
    // "a usage", "a utopia", "a ubiquity": u + single consonant + vowel.
    let mut chars = lower.chars();
    if chars.next() == Some('u') {
        if let (Some(c), Some(v)) = (chars.next(), chars.next()) {
            if "bcfhjkqrst".contains(c) && "aeiou".contains(v) {
                return true;
            }
        }
    }
    false
}
