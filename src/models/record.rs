use nonempty::NonEmpty;

use crate::models::types::OurStr;

/// An EntityRecord is what you feed to a [`crate::prelude::QGramIndex`]
/// to make it findable. A record is a display name, a popularity score,
/// and optionally a description and synonyms.
///
/// You can build one dynamically as follow:
///
/// ```
/// use prefikso::prelude::*;
///
/// let r = EntityRecord::new("Freiburg im Breisgau", 3)
///             .with_description("A city in Baden-Württemberg")
///             .with_synonym("Freiburg")
///             .with_synonym("Friburgo");
///
/// assert_eq!(r.score(), 3);
/// assert_eq!(r.synonyms().len(), 2);
/// ```
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    name: OurStr,
    score: u64,
    description: OurStr,
    synonyms: Vec<OurStr>,
    // Trailing input fields, kept verbatim for downstream display.
    extra: Vec<OurStr>,
}

impl EntityRecord {
    /// A record with the given display name and popularity score.
    pub fn new<T: Into<OurStr>>(name: T, score: u64) -> Self {
        EntityRecord {
            name: name.into(),
            score,
            description: "".into(),
            synonyms: vec![],
            extra: vec![],
        }
    }

    /// This record with a description.
    pub fn with_description<T: Into<OurStr>>(mut self, description: T) -> Self {
        self.description = description.into();
        self
    }

    /// This record with one more synonym.
    pub fn with_synonym<T: Into<OurStr>>(mut self, synonym: T) -> Self {
        self.synonyms.push(synonym.into());
        self
    }

    /// This record with one more opaque trailing field.
    pub fn with_extra<T: Into<OurStr>>(mut self, extra: T) -> Self {
        self.extra.push(extra.into());
        self
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The popularity score.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// The description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The synonyms, in insertion order.
    pub fn synonyms(&self) -> &[OurStr] {
        &self.synonyms
    }

    /// The preserved trailing fields, in insertion order.
    pub fn extra(&self) -> &[OurStr] {
        &self.extra
    }

    /// All names of this record: the display name first, then the
    /// synonyms. There is always at least the display name.
    ///
    /// ```
    /// use prefikso::prelude::*;
    ///
    /// let r = EntityRecord::new("Freiburg", 3).with_synonym("Friburgo");
    /// let names = r.names();
    /// assert_eq!(names.len(), 2);
    /// assert_eq!(&*names.head, "Freiburg");
    /// ```
    pub fn names(&self) -> NonEmpty<OurStr> {
        let mut names = NonEmpty::new(self.name.clone());
        for s in &self.synonyms {
            names.push(s.clone());
        }
        names
    }
}
