/// Testing oriented utilities.
use crate::prelude::EntityRecord;

fn random_word<U: rand::Rng>(rng: &mut U) -> String {
    let len = rng.random_range(4..=12);
    (0..len)
        .map(|_| rng.random_range(b'a'..=b'z') as char)
        .collect()
}

impl EntityRecord {
    /// Builds a random record, already normalized-friendly (lowercase
    /// ascii name). This is mainly useful for testing and benchmarking.
    ///
    /// Example:
    /// ```
    /// use prefikso::prelude::*;
    ///
    /// let mut rng = rand::rng();
    /// let r = EntityRecord::random(&mut rng);
    /// assert!(!r.name().is_empty());
    /// ```
    pub fn random<U: rand::Rng>(rng: &mut U) -> Self {
        let mut record = EntityRecord::new(random_word(rng), rng.random_range(0..1000));

        // Half the records get a synonym.
        if rng.random_bool(0.5) {
            record = record.with_synonym(random_word(rng));
        }
        record
    }
}
