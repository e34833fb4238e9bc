//! Wildcard matching for DEP-5 `Files` patterns.
//!
//! `*` matches any run of characters, including none. Unlike shell globs it
//! also matches `/` and leading dots, so `*.in` matches `.in` files anywhere
//! in the tree. Matching is case-sensitive and covers the whole name.
//!
//! The `?` wildcard is not supported and is matched literally.

/// Returns true if `name` matches the DEP-5 wildcard `pattern`.
pub fn is_wildcard_match(name: &str, pattern: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    if !pattern.contains('*') {
        return name == pattern;
    }

    let segments: Vec<&str> = pattern.split('*').collect();
    let Some((first, rest)) = segments.split_first() else {
        return false;
    };
    let Some((last, middle)) = rest.split_last() else {
        return false;
    };

    // Prefix and suffix are anchored and must not overlap.
    let Some(remaining) = name.strip_prefix(*first) else {
        return false;
    };
    let Some(mut remaining) = remaining.strip_suffix(*last) else {
        return false;
    };

    for segment in middle {
        match remaining.find(*segment) {
            Some(start) => remaining = &remaining[start + segment.len()..],
            None => return false,
        }
    }

    true
}
