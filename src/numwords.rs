//! Ordinal formation and number-to-words rendering.
//!
//! Numbers are processed as digit strings rather than machine integers,
//! so anything up to the decillions renders without overflow. Vocabulary
//! and grouping come from [`NumOptions`].

use crate::config::NumOptions;
use crate::error::{InflectError, Result};
use crate::lexicon::numbers::{ordinal_suffix, NTH_WORD_ENDINGS, SCALES, TEENS, TENS, UNITS};

// ============================================================================
// Ordinals
// ============================================================================

/// Form an ordinal: `"1"` → `"1st"`, `"11"` → `"11th"`, `"one"` →
/// `"first"`, `"twenty"` → `"twentieth"`.
pub fn ordinal(value: &str) -> String {
    let trimmed = value.trim();
    let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if !unsigned.is_empty() && unsigned.chars().all(|c| c.is_ascii_digit()) {
        let tail = &unsigned[unsigned.len().saturating_sub(2)..];
        let mod100: u32 = tail.parse().unwrap_or(0);
        return format!("{trimmed}{}", ordinal_suffix(mod100, mod100 % 10));
    }
    ordinal_word(trimmed)
}

/// Ordinalize a number already spelled in words. Only the final word
/// changes: "twenty-one" → "twenty-first".
fn ordinal_word(words: &str) -> String {
    let last_start = words
        .rfind(|c: char| c.is_whitespace() || c == '-')
        .map(|i| i + 1)
        .unwrap_or(0);
    let (head, last) = words.split_at(last_start);
    let lower = last.to_lowercase();

    for (ending, replacement) in NTH_WORD_ENDINGS {
        if let Some(stem) = lower.strip_suffix(ending) {
            return format!("{head}{}{replacement}", &last[..stem.len()]);
        }
    }
    if let Some(stem) = lower.strip_suffix('y') {
        // twenty → twentieth, thirty → thirtieth
        return format!("{head}{}ieth", &last[..stem.len()]);
    }
    format!("{head}{last}th")
}

// ============================================================================
// Number to words
// ============================================================================

/// Convert a number (digits, optional sign, optional decimal part,
/// optional ordinal marker) into English words.
pub fn number_to_words(value: &str, opts: &NumOptions) -> Result<String> {
    if opts.group > 3 {
        return Err(InflectError::BadChunkingOption(opts.group));
    }

    let parsed = parse_number(value)?;

    if let Some(threshold) = opts.threshold {
        if exceeds_threshold(&parsed, threshold) {
            return Ok(render_digits(&parsed, opts));
        }
    }

    let mut words = if opts.group > 0 {
        render_grouped(&parsed, opts)
    } else {
        render_plain(&parsed, opts)?
    };

    if parsed.ordinal {
        words = ordinal_word(&words);
    }
    Ok(words)
}

struct ParsedNumber {
    negative: bool,
    integer: String,
    decimal: Option<String>,
    ordinal: bool,
}

/// Accepts an optional sign, digits with commas, an optional fractional
/// part, and an optional trailing ordinal marker ("21st").
fn parse_number(value: &str) -> Result<ParsedNumber> {
    let trimmed = value.trim();
    let bad = || InflectError::NotANumber(value.to_string());

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let (rest, ordinal) = match strip_ordinal_marker(rest) {
        Some(stripped) => (stripped, true),
        None => (rest, false),
    };

    let mut parts = rest.splitn(2, '.');
    let integer_raw = parts.next().unwrap_or("");
    let decimal_raw = parts.next();

    let integer: String = integer_raw.chars().filter(|&c| c != ',').collect();
    if integer.is_empty() && decimal_raw.is_none() {
        return Err(bad());
    }
    if !integer.chars().all(|c| c.is_ascii_digit()) {
        return Err(bad());
    }
    let decimal = match decimal_raw {
        Some(d) => {
            if !d.chars().all(|c| c.is_ascii_digit()) {
                return Err(bad());
            }
            Some(d.to_string())
        }
        None => None,
    };

    // Normalize "" and "000…" but keep at least one digit.
    let integer = {
        let stripped = integer.trim_start_matches('0');
        if stripped.is_empty() {
            "0".to_string()
        } else {
            stripped.to_string()
        }
    };

    Ok(ParsedNumber {
        negative,
        integer,
        decimal,
        ordinal,
    })
}

fn strip_ordinal_marker(value: &str) -> Option<&str> {
    for marker in ["st", "nd", "rd", "th"] {
        if let Some(stem) = value.strip_suffix(marker) {
            if !stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit() || c == ',') {
                return Some(stem);
            }
        }
    }
    None
}

fn exceeds_threshold(parsed: &ParsedNumber, threshold: i64) -> bool {
    match parsed.integer.parse::<i64>() {
        Ok(v) => {
            let signed = if parsed.negative { -v } else { v };
            signed > threshold
        }
        // Too many digits to parse: far above the threshold unless negated.
        Err(_) => !parsed.negative,
    }
}

/// Digit rendering for values above the threshold: "1234567.8" →
/// "1,234,567.8".
fn render_digits(parsed: &ParsedNumber, opts: &NumOptions) -> String {
    let digits: Vec<char> = parsed.integer.chars().collect();
    let mut out = String::new();
    if parsed.negative {
        out.push('-');
    }
    for (i, c) in digits.iter().enumerate() {
        let remaining = digits.len() - i;
        out.push(*c);
        if remaining > 1 && (remaining - 1) % 3 == 0 {
            out.push_str(&opts.comma);
        }
    }
    if let Some(decimal) = &parsed.decimal {
        out.push('.');
        out.push_str(decimal);
    }
    out
}

/// Chunked digit reading: group=2 turns "1234" into "twelve, thirty-four".
fn render_grouped(parsed: &ParsedNumber, opts: &NumOptions) -> String {
    let mut chunks: Vec<String> = Vec::new();
    if parsed.negative {
        chunks.push("minus".to_string());
    }

    push_digit_chunks(&parsed.integer, opts, &mut chunks);
    if let Some(decimal) = &parsed.decimal {
        chunks.push(opts.decimal.clone());
        push_digit_chunks(decimal, opts, &mut chunks);
    }

    chunks.join(&format!("{} ", opts.comma))
}

fn push_digit_chunks(digits: &str, opts: &NumOptions, out: &mut Vec<String>) {
    let chars: Vec<char> = digits.chars().collect();
    for chunk in chars.chunks(opts.group) {
        let value: u32 = chunk.iter().collect::<String>().parse().unwrap_or(0);
        let words = if chunk.len() == 1 || chunk[0] == '0' || value < 10 {
            // Leading zeroes are read digit by digit: "05" is "zero five".
            chunk
                .iter()
                .map(|&c| digit_word(c, opts))
                .collect::<Vec<_>>()
                .join(" ")
        } else if value >= 100 {
            // group=3 chunks can carry a hundreds digit.
            group_words(value, opts)
        } else {
            small_number_words(value, opts)
        };
        out.push(words);
    }
}

fn digit_word(digit: char, opts: &NumOptions) -> String {
    match digit {
        '0' => opts.zero.clone(),
        '1' => opts.one.clone(),
        d => UNITS[d.to_digit(10).unwrap_or(0) as usize].to_string(),
    }
}

/// Full prose rendering: groups of three digits, scale words, the
/// configured "and" inside each group.
fn render_plain(parsed: &ParsedNumber, opts: &NumOptions) -> Result<String> {
    let mut out = String::new();
    if parsed.negative {
        out.push_str("minus ");
    }
    out.push_str(&integer_words(&parsed.integer, opts)?);

    if let Some(decimal) = &parsed.decimal {
        out.push(' ');
        out.push_str(&opts.decimal);
        for c in decimal.chars() {
            out.push(' ');
            out.push_str(&digit_word(c, opts));
        }
    }
    Ok(out)
}

fn integer_words(integer: &str, opts: &NumOptions) -> Result<String> {
    if integer == "0" {
        return Ok(opts.zero.clone());
    }
    if integer == "1" {
        return Ok(opts.one.clone());
    }

    // Split into 3-digit groups, most significant first.
    let chars: Vec<char> = integer.chars().collect();
    let mut groups: Vec<u32> = Vec::new();
    {
        let lead = chars.len() % 3;
        let mut idx = 0;
        if lead > 0 {
            groups.push(chars[..lead].iter().collect::<String>().parse().unwrap_or(0));
            idx = lead;
        }
        while idx < chars.len() {
            groups.push(chars[idx..idx + 3].iter().collect::<String>().parse().unwrap_or(0));
            idx += 3;
        }
    }
    if groups.len() > SCALES.len() {
        return Err(InflectError::NumberOutOfRange(integer.len()));
    }

    let total = groups.len();
    let mut rendered: Vec<String> = Vec::new();
    for (i, &group) in groups.iter().enumerate() {
        if group == 0 {
            continue;
        }
        let scale = SCALES[total - 1 - i];
        let words = group_words(group, opts);
        if scale.is_empty() {
            rendered.push(words);
        } else {
            rendered.push(format!("{words} {scale}"));
        }
    }
    Ok(rendered.join(&format!("{} ", opts.comma)))
}

/// One 3-digit group: "one hundred and twenty-three".
fn group_words(value: u32, opts: &NumOptions) -> String {
    let hundreds = value / 100;
    let rest = value % 100;
    if hundreds == 0 {
        return small_number_words(rest, opts);
    }
    let mut out = format!("{} hundred", UNITS[hundreds as usize]);
    if rest != 0 {
        if opts.andword.is_empty() {
            out.push(' ');
        } else {
            out.push(' ');
            out.push_str(&opts.andword);
            out.push(' ');
        }
        out.push_str(&small_number_words(rest, opts));
    }
    out
}

/// Values below one hundred: teens are irregular, larger tens hyphenate.
fn small_number_words(value: u32, opts: &NumOptions) -> String {
    match value {
        0 => opts.zero.clone(),
        1 => opts.one.clone(),
        2..=9 => UNITS[value as usize].to_string(),
        10..=19 => TEENS[(value - 10) as usize].to_string(),
        _ => {
            let tens = TENS[(value / 10) as usize];
            let units = value % 10;
            if units == 0 {
                tens.to_string()
            } else if units == 1 {
                format!("{tens}-{}", opts.one)
            } else {
                format!("{tens}-{}", UNITS[units as usize])
            }
        }
    }
}
