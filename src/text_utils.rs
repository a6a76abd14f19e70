/// "Common Phrases" -> "common-phrases"
pub fn slugify(input: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for c in input.trim().chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// "common-phrases" -> "Common Phrases"
pub fn deslugify(slug: &str) -> String {
    slug.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trims, lowercases and collapses runs of whitespace to a single space.
pub fn normalize_answer(input: &str) -> String {
    input
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize_answer(haystack).contains(&normalize_answer(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Common Phrases"), "common-phrases");
        assert_eq!(slugify("  Where is...?  "), "where-is");
        assert_eq!(slugify("Unit 1: Foundations"), "unit-1-foundations");
    }

    #[test]
    fn deslugify_title_cases() {
        assert_eq!(deslugify("common-phrases"), "Common Phrases");
        assert_eq!(deslugify("days"), "Days");
    }

    #[test]
    fn normalize_ignores_case_and_spacing() {
        assert_eq!(normalize_answer("  Magandang   UMAGA "), "magandang umaga");
        assert!(contains_normalized("Good  Morning", "good m"));
    }
}
