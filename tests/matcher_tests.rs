use prefikso::models::tsv::read_records;
use prefikso::prelude::*;

// A tiny two-word corpus where every list fits in your head:
// "frei" (score 3) and "brei" (score 2), q = 3.
fn two_word_index() -> QGramIndex {
    let tsv = "name\tscore\tdescription\nfrei\t3\ta word\nbrei\t2\tanother word\n";
    let mut index = QGramIndex::new();
    index.build(read_records(tsv.as_bytes()).unwrap()).unwrap();
    index
}

fn tuples(matches: &[Match]) -> Vec<(EntId, usize, u64, NameId)> {
    matches
        .iter()
        .map(|m| (m.ent, m.ped, m.score, m.name))
        .collect()
}

#[test]
fn test_exact_match() {
    let index = two_word_index();
    let (matches, stats) = index.find_matches("frei", 0);

    assert_eq!(tuples(&matches), vec![(1, 0, 3, 1)]);
    assert_eq!(stats.ped_calcs(), 1);

    // "frei" has 4 q-grams, all indexed; "rei" lists both words.
    assert_eq!(stats.lists_merged(), 4);
    assert_eq!(stats.elements_merged(), 5);
    assert_eq!(stats.ped_candidates(), 2);
}

#[test]
fn test_one_edit_away() {
    let index = two_word_index();
    let (matches, stats) = index.find_matches("frei", 2);

    assert_eq!(tuples(&matches), vec![(1, 0, 3, 1), (2, 1, 2, 2)]);
    assert_eq!(stats.ped_calcs(), 2);
}

#[test]
fn test_longer_query() {
    let index = two_word_index();
    let (matches, stats) = index.find_matches("freibu", 2);

    assert_eq!(tuples(&matches), vec![(1, 2, 3, 1)]);
    assert_eq!(stats.ped_calcs(), 2);
}

#[test]
fn test_delta_zero_needs_exact_prefix() {
    let index = two_word_index();

    let (matches, _) = index.find_matches("fre", 0);
    assert_eq!(tuples(&matches), vec![(1, 0, 3, 1)]);

    // One substitution away: nothing at delta 0.
    let (matches, _) = index.find_matches("fri", 0);
    assert!(matches.is_empty());
}

#[test]
fn test_query_shorter_than_q_has_no_qgrams() {
    let index = two_word_index();
    let (matches, stats) = index.find_matches("fr", 2);

    assert!(matches.is_empty());
    assert_eq!(stats.lists_merged(), 0);
    assert_eq!(stats.elements_merged(), 0);
    assert_eq!(stats.ped_calcs(), 0);
}

#[test]
fn test_empty_query() {
    let index = two_word_index();
    let (matches, _) = index.find_matches("", 1);
    assert!(matches.is_empty());
}

#[test]
fn test_one_row_per_entity_with_duplicate_synonyms() {
    let mut index = QGramIndex::from_config(IndexConfig::default().with_synonyms(true));
    index.add_record(
        EntityRecord::new("frei", 3)
            .with_synonym("frei")
            .with_synonym("frei"),
    );

    let (matches, stats) = index.find_matches("frei", 2);

    // Three identical names, one output row, reported via the first.
    assert_eq!(stats.ped_calcs(), 3);
    assert_eq!(tuples(&matches), vec![(1, 0, 3, 1)]);
}

#[test]
fn test_best_name_wins_per_entity() {
    let mut index = QGramIndex::from_config(IndexConfig::default().with_synonyms(true));
    index.add_record(EntityRecord::new("freiburg", 5).with_synonym("frei"));

    // "frei" matches the synonym exactly and the display name at
    // distance 0 too (prefix!), so name 1 wins the tie.
    let (matches, _) = index.find_matches("frei", 1);
    assert_eq!(tuples(&matches), vec![(1, 0, 5, 1)]);

    // "freib" is distance 1 from synonym "frei" (one insertion) and
    // distance 0 from the display name prefix.
    let (matches, _) = index.find_matches("freib", 1);
    assert_eq!(tuples(&matches), vec![(1, 0, 5, 1)]);
}

#[test]
fn test_synonym_can_beat_display_name() {
    let mut index = QGramIndex::from_config(IndexConfig::default().with_synonyms(true));
    index
        .build(vec![
            EntityRecord::new("Freiburg im Breisgau", 3).with_synonym("Fryburg"),
        ])
        .unwrap();

    // "fryb" only gets close through the synonym.
    let (matches, _) = index.find_matches("fryb", 0);
    assert_eq!(tuples(&matches), vec![(1, 0, 3, 2)]);
    assert_eq!(index.name(2), "Fryburg");
}

#[test]
fn test_match_list_feeds_the_ranker() {
    let tsv = "h\nfrei\t3\tx\nfreibach\t7\ty\nbrei\t2\tz\n";
    let mut index = QGramIndex::new();
    index.build(read_records(tsv.as_bytes()).unwrap()).unwrap();

    let (matches, _) = index.find_matches("frei", 1);
    let ranked = rank_matches(matches);

    // Both "frei" and "freibach" are at distance 0 ("frei" is a
    // prefix of both); the higher score comes first. "brei" trails at
    // distance 1.
    assert_eq!(
        tuples(&ranked),
        vec![(2, 0, 7, 2), (1, 0, 3, 1), (3, 1, 2, 3)]
    );
}

#[test]
fn test_inverted_list_invariants_after_build() {
    let mut rng = rand::rng();
    let mut index = QGramIndex::from_config(IndexConfig::default().with_synonyms(true));
    index
        .build((0..200).map(|_| EntityRecord::random(&mut rng)))
        .unwrap();

    let mut qgram_mass = vec![0u32; index.n_names() + 1];

    for qgram in index.indexed_qgrams() {
        let postings = index.postings(qgram);

        // Strictly ascending name ids, all frequencies >= 1.
        assert!(postings.windows(2).all(|w| w[0].name < w[1].name));
        assert!(postings.iter().all(|p| p.freq >= 1));

        for p in postings {
            qgram_mass[p.name as usize] += p.freq;
        }
    }

    // Each name spreads exactly |normalized| q-grams over the lists,
    // and maps back to a valid entity.
    for name_id in 1..=index.n_names() as NameId {
        let expected = index.normalized_name(name_id).chars().count();
        assert_eq!(qgram_mass[name_id as usize] as usize, expected);

        let ent = index.entity_of(name_id);
        assert!(ent >= 1 && ent as usize <= index.n_entities());
    }
}
