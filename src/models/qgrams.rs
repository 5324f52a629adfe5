use std::iter;
use std::num::NonZeroUsize;

// Padding sentinel. Normalization only lets alphanumerics through, so
// '$' can never collide with a real character.
pub(crate) const PAD: char = '$';

/// The q-grams of a (already normalized) word: all windows of q
/// characters over the word prepended with q-1 padding characters.
///
/// A word of n characters yields exactly n q-grams, the first ones
/// anchoring the word prefix in the padded space.
///
/// ```
/// use std::num::NonZeroUsize;
/// use prefikso::models::qgrams::qgrams;
///
/// let q = NonZeroUsize::new(3).unwrap();
/// assert_eq!(
///     qgrams("freiburg", q),
///     vec!["$$f", "$fr", "fre", "rei", "eib", "ibu", "bur", "urg"]
/// );
/// ```
pub fn qgrams(word: &str, q: NonZeroUsize) -> Vec<String> {
    let q = q.get();
    let padded: Vec<char> = iter::repeat(PAD)
        .take(q - 1)
        .chain(word.chars())
        .collect();

    // padded.len() + 1 - q == number of characters in word.
    (0..padded.len() + 1 - q)
        .map(|i| padded[i..i + q].iter().collect())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn nz(q: usize) -> NonZeroUsize {
        NonZeroUsize::new(q).unwrap()
    }

    #[test]
    fn test_empty_word() {
        assert!(qgrams("", nz(3)).is_empty());
        assert!(qgrams("", nz(1)).is_empty());
    }

    #[test]
    fn test_count_equals_length() {
        for word in ["a", "ab", "frei", "freiburg"] {
            assert_eq!(qgrams(word, nz(3)).len(), word.chars().count());
        }
    }

    #[test]
    fn test_q_one_has_no_padding() {
        assert_eq!(qgrams("abc", nz(1)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_short_word_is_all_padding_windows() {
        assert_eq!(qgrams("ab", nz(4)), vec!["$$$a", "$$ab"]);
    }
}
