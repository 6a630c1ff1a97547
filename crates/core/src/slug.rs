//! URL-safe slug derivation.
//!
//! Categories, galleries, products, and posts all derive their path segment
//! from a display name using the same normalization rule, so it lives here
//! rather than in any one repository.

/// Derive a URL-safe slug from a display name.
///
/// Lowercases the input, collapses every maximal run of characters outside
/// `[a-z0-9]` into a single hyphen, and strips leading/trailing hyphens.
/// Deterministic and idempotent; uniqueness is enforced separately by the
/// database's unique index on each resource's slug column.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(slugify("Editorial Series"), "editorial-series");
    }

    #[test]
    fn test_punctuation_runs_collapse() {
        assert_eq!(slugify("Smart Phones!!"), "smart-phones");
        assert_eq!(slugify("a  --  b"), "a-b");
    }

    #[test]
    fn test_leading_trailing_stripped() {
        assert_eq!(slugify("  Hello World  "), "hello-world");
        assert_eq!(slugify("---x---"), "x");
    }

    #[test]
    fn test_non_ascii_dropped() {
        assert_eq!(slugify("Café & Bar"), "caf-bar");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Editorial Series",
            "Smart Phones!!",
            "  weird -- Input 42 ",
            "already-a-slug",
        ];
        for input in inputs {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }
}
