//! Palindrome predicates for plate strings.
//!
//! Both strategies ignore space characters and compare the remaining
//! characters case-sensitively. They operate on decoded `char`s rather than
//! bytes, so multi-byte text is compared per code point.
//!
//! # Example
//!
//! ```rust
//! use platebench::palindrome::{is_palindrome_iterative, is_palindrome_recursive};
//!
//! assert!(is_palindrome_iterative("A 121 A"));
//! assert!(!is_palindrome_recursive("A 123 B"));
//! ```

/// Palindrome detection strategy under benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Two-pointer scan from both ends.
    Iterative,
    /// Compare the outer pair, recurse on the inner slice.
    Recursive,
}

impl Strategy {
    /// Every strategy, in measurement order.
    pub const ALL: [Strategy; 2] = [Strategy::Iterative, Strategy::Recursive];

    /// Run this strategy against a plate.
    pub fn check(self, plate: &str) -> bool {
        match self {
            Strategy::Iterative => is_palindrome_iterative(plate),
            Strategy::Recursive => is_palindrome_recursive(plate),
        }
    }

    /// Lowercase name used in logs and bench ids.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Iterative => "iterative",
            Strategy::Recursive => "recursive",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Characters of `s` with every space removed.
fn strip_spaces(s: &str) -> Vec<char> {
    s.chars().filter(|&c| c != ' ').collect()
}

/// Check a plate with a two-pointer scan.
///
/// Returns `true` for the empty string and single characters.
pub fn is_palindrome_iterative(s: &str) -> bool {
    let chars = strip_spaces(s);
    if chars.is_empty() {
        return true;
    }

    let mut left = 0;
    let mut right = chars.len() - 1;
    while left < right {
        if chars[left] != chars[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

/// Check a plate by peeling off the outer pair and recursing.
///
/// Call depth is `len / 2` after stripping spaces. Plates are seven
/// characters, so this never exceeds three frames; very long inputs should
/// use [`is_palindrome_iterative`] instead.
pub fn is_palindrome_recursive(s: &str) -> bool {
    let chars = strip_spaces(s);
    is_palindrome_slice(&chars)
}

fn is_palindrome_slice(chars: &[char]) -> bool {
    match chars {
        [] | [_] => true,
        [first, inner @ .., last] => first == last && is_palindrome_slice(inner),
    }
}
