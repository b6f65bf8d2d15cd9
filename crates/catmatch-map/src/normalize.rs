/// Normalizes a category label for lookup.
///
/// Trims, lowercases, and collapses every internal whitespace run into a
/// single space.
pub fn normalize_label(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for word in value.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(word.chars().flat_map(char::to_lowercase));
    }
    out
}
