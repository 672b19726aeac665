//! URL slugs for company short names and representative identifiers.

use regex::Regex;
use std::sync::LazyLock;

pub const MAX_SLUG_LEN: usize = 50;

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("static slug pattern"));

/// Lowercase ASCII slug: accents folded, any other run of characters collapsed to `-`,
/// no leading or trailing `-`, at most [`MAX_SLUG_LEN`] characters.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars().flat_map(char::to_lowercase) {
        let folded = fold(c);
        if folded.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(folded);
        } else {
            pending_dash = true;
        }
    }

    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }
    slug
}

/// Manual edits must already be in slug form.
pub fn is_valid_slug(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.len() <= MAX_SLUG_LEN && SLUG_PATTERN.is_match(candidate)
}

/// First of `base`, `base-2`, `base-3`, … not rejected by `taken`.
pub fn unique_slug(base: &str, taken: impl Fn(&str) -> bool) -> String {
    let base = if base.is_empty() { "loja" } else { base };
    if !taken(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| {
            let suffix = format!("-{n}");
            let head = &base[..base.len().min(MAX_SLUG_LEN - suffix.len())];
            format!("{}{}", head.trim_end_matches('-'), suffix)
        })
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| base.to_string())
}

fn fold(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
