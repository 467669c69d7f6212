// General-purpose string utilities behind the `string_utils` function.
//
// One entry point dispatches on an operation name: case changes, digit and
// letter extraction, email and phone masking and validation, slugs,
// initials and simple counts. Unknown operations return the input as-is.
// Character classes here are ASCII-only, unlike the text heuristics.

use std::sync::LazyLock;

use regex_lite::Regex;

static VALID_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3})?[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("valid phone pattern")
});

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid pattern"));

static NON_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z]").expect("valid pattern"));

static SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("valid pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid pattern"));

static SLUG_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid pattern"));

static DASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid pattern"));

static EDGE_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-|-$").expect("valid pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringOp {
    /// Trim, collapse whitespace and convert to proper case
    Clean,
    Upper,
    Lower,
    ExtractNumbers,
    ExtractLetters,
    MaskEmail,
    MaskPhone,
    ValidateEmail,
    ValidatePhone,
    RemoveSpecial,
    Slug,
    Initials,
    Reverse,
    WordCount,
    CharCount,
}

impl StringOp {
    /// Parse an operation name, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        let op = match name.to_lowercase().as_str() {
            "clean" => StringOp::Clean,
            "upper" => StringOp::Upper,
            "lower" => StringOp::Lower,
            "extract_numbers" => StringOp::ExtractNumbers,
            "extract_letters" => StringOp::ExtractLetters,
            "mask_email" => StringOp::MaskEmail,
            "mask_phone" => StringOp::MaskPhone,
            "validate_email" => StringOp::ValidateEmail,
            "validate_phone" => StringOp::ValidatePhone,
            "remove_special" => StringOp::RemoveSpecial,
            "slug" => StringOp::Slug,
            "initials" => StringOp::Initials,
            "reverse" => StringOp::Reverse,
            "word_count" => StringOp::WordCount,
            "char_count" => StringOp::CharCount,
            _ => return None,
        };
        Some(op)
    }

    pub fn apply(&self, input: &str) -> Option<String> {
        let out = match self {
            StringOp::Clean => return proper_case(input),
            StringOp::Upper => input.to_uppercase(),
            StringOp::Lower => input.to_lowercase(),
            StringOp::ExtractNumbers => return extract_numbers(input),
            StringOp::ExtractLetters => NON_LETTER.replace_all(input, "").into_owned(),
            StringOp::MaskEmail => mask_email(input),
            StringOp::MaskPhone => mask_phone(input),
            StringOp::ValidateEmail => validity(is_valid_email(input)),
            StringOp::ValidatePhone => validity(is_valid_phone(input)),
            StringOp::RemoveSpecial => SPECIAL.replace_all(input, "").into_owned(),
            StringOp::Slug => slug(input),
            StringOp::Initials => initials(input),
            StringOp::Reverse => input.chars().rev().collect(),
            StringOp::WordCount => word_count(input).to_string(),
            StringOp::CharCount => char_count(input).to_string(),
        };
        Some(out)
    }
}

/// Run a string operation. A missing operation means `clean`; an
/// unrecognized one returns the input unchanged. Absent input stays absent.
pub fn string_op(input: Option<&str>, op: Option<&str>) -> Option<String> {
    let input = input?;
    let Some(op) = op else {
        return proper_case(input);
    };

    match StringOp::parse(op) {
        Some(op) => op.apply(input),
        None => Some(input.to_string()),
    }
}

fn trim_control(input: &str) -> &str {
    input.trim_matches(|c: char| c <= ' ')
}

/// Trim, collapse inner whitespace, and capitalize the first letter of each
/// word while lowercasing the rest. Blank input yields None.
pub fn proper_case(input: &str) -> Option<String> {
    let trimmed = trim_control(input);
    if trimmed.is_empty() {
        return None;
    }

    let collapsed = WHITESPACE_RUN.replace_all(trimmed, " ");
    let mut out = String::with_capacity(collapsed.len());
    let mut capitalize_next = true;

    for c in collapsed.chars() {
        if c.is_alphabetic() {
            if capitalize_next {
                out.extend(c.to_uppercase());
                capitalize_next = false;
            } else {
                out.extend(c.to_lowercase());
            }
        } else {
            out.push(c);
            if c.is_whitespace() {
                capitalize_next = true;
            }
        }
    }

    Some(out)
}

/// All digit runs concatenated, or None when the input has no digits.
pub fn extract_numbers(input: &str) -> Option<String> {
    let digits: String = DIGIT_RUN.find_iter(input).map(|m| m.as_str()).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

pub fn is_valid_email(input: &str) -> bool {
    VALID_EMAIL.is_match(input)
}

/// True when a phone number appears anywhere in the input.
pub fn is_valid_phone(input: &str) -> bool {
    PHONE.is_match(input)
}

fn validity(valid: bool) -> String {
    let label = if valid { "valid" } else { "invalid" };
    label.to_string()
}

/// Keep the first and last character, star out the middle. Two characters
/// or fewer are starred out entirely.
fn mask_part(part: &str) -> String {
    let chars: Vec<char> = part.chars().collect();
    if chars.len() <= 2 {
        return "*".repeat(chars.len());
    }
    let mut out = String::with_capacity(chars.len());
    out.push(chars[0]);
    out.push_str(&"*".repeat(chars.len() - 2));
    out.push(chars[chars.len() - 1]);
    out
}

/// Mask the user name and first domain label of a valid email address.
///
/// Only the first two domain labels survive: `a@mail.example.com` masks to
/// `*@m**l.example`. Invalid addresses are returned unchanged.
pub fn mask_email(email: &str) -> String {
    if !is_valid_email(email) {
        return email.to_string();
    }

    let Some((user, domain)) = email.split_once('@') else {
        return email.to_string();
    };
    let mut labels = domain.split('.');
    let first = labels.next().unwrap_or_default();
    let second = labels.next().unwrap_or_default();

    format!("{}@{}.{}", mask_part(user), mask_part(first), second)
}

/// Replace every digit but the last four with `*`, dropping separators.
pub fn mask_phone(phone: &str) -> String {
    if !is_valid_phone(phone) {
        return phone.to_string();
    }

    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 4 {
        return phone.to_string();
    }

    let (hidden, last_four) = digits.split_at(digits.len() - 4);
    format!("{}{}", "*".repeat(hidden.len()), last_four)
}

/// URL-friendly slug: lowercase ASCII words joined by single dashes.
pub fn slug(input: &str) -> String {
    let lower = input.to_lowercase();
    let kept = SLUG_DISALLOWED.replace_all(&lower, "");
    let dashed = WHITESPACE_RUN.replace_all(&kept, "-");
    let single = DASH_RUN.replace_all(&dashed, "-");
    EDGE_DASH.replace_all(&single, "").into_owned()
}

/// First letter of each word, uppercased. Words are split on ASCII
/// whitespace only, so a no-break space does not start a new word.
pub fn initials(name: &str) -> String {
    WHITESPACE_RUN
        .split(trim_control(name))
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Length in UTF-16 code units: characters outside the Basic Multilingual
/// Plane count as two.
pub fn char_count(input: &str) -> usize {
    input.encode_utf16().count()
}

/// Number of whitespace-separated pieces. Blank input still counts as one
/// (empty) piece.
pub fn word_count(input: &str) -> usize {
    let trimmed = trim_control(input);
    if trimmed.is_empty() {
        return 1;
    }
    WHITESPACE_RUN.split(trimmed).count()
}
