/*

Extensive test: index a few hundred generated city names, then throw
typoed prefixes of every name at the matcher and check the owning
entity always comes back within the allowed distance.

*/

use fake::Fake;
use fake::faker::address::en::CityName;
use rand::prelude::*;

use prefikso::prelude::*;

fn city_corpus<U: Rng>(rng: &mut U, n: usize) -> (QGramIndex, Vec<String>) {
    let mut index = QGramIndex::from_config(IndexConfig::default().with_synonyms(true));
    let mut names = vec![];

    for _ in 0..n {
        let city: String = CityName().fake();
        index.add_record(EntityRecord::new(city.as_str(), rng.random_range(0..1000)));
        names.push(city);
    }
    (index, names)
}

#[test]
fn test_recover_typoed_prefixes() {
    let mut rng = rand::rng();
    let (index, names) = city_corpus(&mut rng, 300);

    let mut tried = 0;
    for (i, city) in names.iter().enumerate() {
        let ent = i as EntId + 1;
        let normed = normalize(city);
        if normed.chars().count() < 5 {
            continue;
        }

        // Keep a random prefix and corrupt one character of it. That
        // is one substitution away from a true prefix, so PED <= 1.
        let len = rng.random_range(4..=normed.chars().count());
        let mut prefix: Vec<char> = normed.chars().take(len).collect();
        let pos = rng.random_range(0..prefix.len());
        prefix[pos] = if prefix[pos] == 'x' { 'y' } else { 'x' };
        let query: String = prefix.into_iter().collect();

        let (matches, stats) = index.find_matches(&query, 1);
        assert!(stats.ped_calcs() <= stats.ped_candidates());

        match matches.iter().find(|m| m.ent == ent) {
            Some(m) => assert!(m.ped <= 1),
            None => panic!("query {query:?} should find {city:?}"),
        }
        tried += 1;
    }

    // The corpus generator should not have starved the test.
    assert!(tried > 200);
}

#[test]
fn test_untyped_prefixes_come_back_first() {
    let mut rng = rand::rng();
    let (index, names) = city_corpus(&mut rng, 100);

    for (i, city) in names.iter().enumerate() {
        let ent = i as EntId + 1;
        let normed = normalize(city);
        if normed.chars().count() < 3 {
            continue;
        }

        let (matches, _) = index.find_matches(&normed, 0);
        let ranked = rank_matches(matches);

        // Exact query, delta 0: the entity is present and every
        // returned match is an exact prefix hit.
        assert!(ranked.iter().any(|m| m.ent == ent));
        assert!(ranked.iter().all(|m| m.ped == 0));
    }
}

// With the send feature the built index is Sync, so read-only queries
// can fan out over threads, each getting its own stats.
#[cfg(feature = "send")]
#[test]
fn test_concurrent_queries() {
    let mut rng = rand::rng();
    let (index, names) = city_corpus(&mut rng, 200);

    let queries: Vec<String> = names.iter().take(16).map(|n| normalize(n)).collect();

    std::thread::scope(|s| {
        for query in &queries {
            s.spawn(|| {
                let (matches, _stats) = index.find_matches(query, suggested_delta(query));
                assert!(!matches.is_empty() || query.chars().count() < 3);
            });
        }
    });
}
