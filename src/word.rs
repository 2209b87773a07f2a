//! Whitespace partitioning and capitalization policy.
//!
//! Every public transform preserves the caller's leading/trailing
//! whitespace verbatim and re-applies the input's capitalization class to
//! the transformed core: all-caps in means all-caps out, a capitalized
//! first letter stays capitalized, anything else is returned the way the
//! rule tables produced it.

/// A word split into leading whitespace, core text, and trailing
/// whitespace. The split is borrowed; nothing is copied until the core is
/// transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitioned<'a> {
    /// Leading whitespace, possibly empty.
    pub leading: &'a str,
    /// The word itself with surrounding whitespace removed.
    pub core: &'a str,
    /// Trailing whitespace, possibly empty.
    pub trailing: &'a str,
}

/// Split `text` into leading whitespace, core, and trailing whitespace.
pub fn partition(text: &str) -> Partitioned<'_> {
    let start = text.len() - text.trim_start().len();
    let end = text.trim_end().len();
    if start >= end {
        // All whitespace (or empty): treat everything as leading.
        return Partitioned {
            leading: text,
            core: "",
            trailing: "",
        };
    }
    Partitioned {
        leading: &text[..start],
        core: &text[start..end],
        trailing: &text[end..],
    }
}

/// The capitalization class of an input word, computed per call and never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseClass {
    /// Every cased character is uppercase ("CAT", "TV").
    AllUpper,
    /// The first character is uppercase, the rest are not all uppercase
    /// ("Cat", "Mary").
    Capitalized,
    /// Anything else, including all-lowercase and mixed case.
    Plain,
}

/// Classify the capitalization of a word.
pub fn case_of(word: &str) -> CaseClass {
    let mut chars = word.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return CaseClass::Plain,
    };
    let has_case = word.chars().any(|c| c.is_alphabetic());
    if !has_case {
        return CaseClass::Plain;
    }
    if word.chars().filter(|c| c.is_alphabetic()).all(|c| c.is_uppercase())
        && word.chars().filter(|c| c.is_alphabetic()).count() > 1
    {
        return CaseClass::AllUpper;
    }
    if first.is_uppercase() {
        return CaseClass::Capitalized;
    }
    CaseClass::Plain
}

/// Re-apply a capitalization class to a transformed word.
pub fn apply_case(class: CaseClass, word: &str) -> String {
    match class {
        CaseClass::AllUpper => word.to_uppercase(),
        CaseClass::Capitalized => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        CaseClass::Plain => word.to_string(),
    }
}

/// Transform the core of `text` with `f`, preserving surrounding
/// whitespace and re-applying the input's capitalization class.
pub fn preserve<F>(text: &str, f: F) -> String
where
    F: FnOnce(&str) -> String,
{
    let parts = partition(text);
    if parts.core.is_empty() {
        return text.to_string();
    }
    let class = case_of(parts.core);
    let transformed = f(parts.core);
    // If the transform already produced the same case (it usually slices
    // the original text), avoid double-capitalizing.
    let cased = match class {
        CaseClass::Plain => transformed,
        _ => apply_case(class, &transformed),
    };
    format!("{}{}{}", parts.leading, cased, parts.trailing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_plain() {
        let p = partition("cat");
        assert_eq!((p.leading, p.core, p.trailing), ("", "cat", ""));
    }

    #[test]
    fn test_partition_surrounded() {
        let p = partition("  cat\t");
        assert_eq!((p.leading, p.core, p.trailing), ("  ", "cat", "\t"));
    }

    #[test]
    fn test_partition_all_whitespace() {
        let p = partition("   ");
        assert_eq!((p.leading, p.core, p.trailing), ("   ", "", ""));
    }

    #[test]
    fn test_case_of() {
        assert_eq!(case_of("cat"), CaseClass::Plain);
        assert_eq!(case_of("Cat"), CaseClass::Capitalized);
        assert_eq!(case_of("CAT"), CaseClass::AllUpper);
        assert_eq!(case_of("cAT"), CaseClass::Plain);
        assert_eq!(case_of("123"), CaseClass::Plain);
    }

    #[test]
    fn test_apply_case() {
        assert_eq!(apply_case(CaseClass::AllUpper, "children"), "CHILDREN");
        assert_eq!(apply_case(CaseClass::Capitalized, "children"), "Children");
        assert_eq!(apply_case(CaseClass::Plain, "children"), "children");
    }

    #[test]
    fn test_preserve_whitespace_and_case() {
        let out = preserve(" Mouse ", |_| "mice".to_string());
        assert_eq!(out, " Mice ");
    }
}
