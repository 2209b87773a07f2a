//! The directive preprocessor behind [`Engine::inflect`].
//!
//! Free text is scanned for `name(args)` directives; each occurrence is
//! replaced with the corresponding transform's output. The scan repeats
//! until a full pass makes no substitution, so a `num()` directive can
//! set the remembered count for directives later in the same text.

use crate::engine::Engine;
use crate::error::Result;

/// Directive names, longest first so `plural_noun(` never matches as
/// `plural` with a stray `_noun(` left behind.
const DIRECTIVES: &[&str] = &[
    "present_participle",
    "number_to_words",
    "singular_noun",
    "plural_noun",
    "plural_verb",
    "plural_adj",
    "ordinal",
    "plural",
    "num",
    "an",
    "no",
    "a",
];

/// Substitute every directive in `text`, rescanning until stable.
pub fn process(engine: &mut Engine, text: &str) -> Result<String> {
    let mut current = text.to_string();
    loop {
        let (next, substitutions) = pass(engine, &current)?;
        if substitutions == 0 {
            return Ok(next);
        }
        current = next;
    }
}

fn pass(engine: &mut Engine, text: &str) -> Result<(String, usize)> {
    let mut out = String::with_capacity(text.len());
    let mut substitutions = 0;
    let mut rest = text;
    let mut boundary = true;

    while !rest.is_empty() {
        if boundary {
            if let Some((name, args, consumed)) = match_directive(rest) {
                out.push_str(&apply(engine, name, args)?);
                substitutions += 1;
                rest = &rest[consumed..];
                boundary = true;
                continue;
            }
        }
        let c = rest.chars().next().unwrap_or('\0');
        out.push(c);
        boundary = !(c.is_alphanumeric() || c == '_');
        rest = &rest[c.len_utf8()..];
    }
    Ok((out, substitutions))
}

/// Match a directive at the start of `text`: its name, the raw argument
/// slice, and the total length consumed including the parentheses.
fn match_directive(text: &str) -> Option<(&'static str, &str, usize)> {
    for &name in DIRECTIVES {
        if let Some(tail) = text.strip_prefix(name) {
            if let Some(arg_tail) = tail.strip_prefix('(') {
                if let Some(close) = arg_tail.find(')') {
                    let args = &arg_tail[..close];
                    let consumed = name.len() + 1 + close + 1;
                    return Some((name, args, consumed));
                }
            }
        }
    }
    None
}

fn apply(engine: &mut Engine, name: &str, args: &str) -> Result<String> {
    let mut parts = args.splitn(2, ',');
    let first = parts.next().unwrap_or("").trim().to_string();
    let second = parts.next().map(|s| s.trim().to_string());

    let out = match name {
        "plural" => match &second {
            Some(count) => engine.plural_with(&first, count.as_str()),
            None => engine.plural(&first),
        },
        "plural_noun" => match &second {
            Some(count) => engine.plural_noun_with(&first, count.as_str()),
            None => engine.plural_noun(&first),
        },
        "plural_verb" => match &second {
            Some(count) => engine.plural_verb_with(&first, count.as_str()),
            None => engine.plural_verb(&first),
        },
        "plural_adj" => match &second {
            Some(count) => engine.plural_adj_with(&first, count.as_str()),
            None => engine.plural_adj(&first),
        },
        "singular_noun" => match &second {
            Some(count) => engine.singular_noun_with(&first, count.as_str()),
            None => engine.singular_noun(&first),
        }
        .unwrap_or(first),
        "a" | "an" => match &second {
            Some(count) => engine.a_with(&first, count.as_str()),
            None => engine.a(&first),
        },
        "no" => match &second {
            Some(count) => engine.no_with(&first, count.as_str()),
            None => engine.no(&first),
        },
        "ordinal" => engine.ordinal(&first),
        "number_to_words" => engine.number_to_words(&first)?,
        "present_participle" => engine.present_participle(&first),
        "num" => {
            if first.is_empty() {
                engine.num(None, false)?
            } else {
                let show = match &second {
                    Some(flag) => !matches!(flag.as_str(), "" | "0" | "false" | "no"),
                    None => true,
                };
                engine.num(Some(&first), show)?
            }
        }
        _ => unreachable!("unknown directive {name}"),
    };
    Ok(out)
}
