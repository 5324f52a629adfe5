/// Normalizes a surface form for indexing and matching: lower cases,
/// then keeps only the alphanumeric characters.
///
/// Total and idempotent. This is the form q-grams and edit distances
/// are computed on; queries must go through it too before being handed
/// to the matcher.
///
/// ```
/// use prefikso::models::normalize::normalize;
///
/// assert_eq!(normalize("freiburg"), "freiburg");
/// assert_eq!(normalize("Frei, burG !?!"), "freiburg");
/// ```
pub fn normalize(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}
