//! Utility functions for property name formatting.

/// Converts a camel-case property name into a dash-delimited fragment.
///
/// The first `offset` characters are dropped, then a `-` is inserted before
/// every ASCII uppercase letter and before every run of ASCII digits, and the
/// result is lowercased. Uppercase letters each get their own dash while a
/// digit run gets a single one.
///
/// An `offset` past the end of `name` yields an empty string.
///
/// # Example
///
/// ```rust
/// use bemstyle::kebab_case;
///
/// assert_eq!(kebab_case("MSize", 1), "-size");
/// assert_eq!(kebab_case("Mcol12", 1), "col-12");
/// assert_eq!(kebab_case("MAB", 1), "-a-b");
/// assert_eq!(kebab_case("fontSize", 0), "font-size");
/// ```
pub fn kebab_case(name: &str, offset: usize) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut in_digits = false;

    for c in name.chars().skip(offset) {
        if c.is_ascii_uppercase() {
            result.push('-');
            in_digits = false;
        } else if c.is_ascii_digit() {
            if !in_digits {
                result.push('-');
            }
            in_digits = true;
        } else {
            in_digits = false;
        }
        result.push(c);
    }

    result.to_lowercase()
}
