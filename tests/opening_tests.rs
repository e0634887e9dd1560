//! End-to-end booster opening tests.
//!
//! Load a catalog and config from JSON, open boosters card by card, and
//! check the collection and effects that come out the other side.

use pocket_booster::booster::BoosterOpening;
use pocket_booster::cards::{CardId, Catalog, Rarity};
use pocket_booster::collection::Collection;
use pocket_booster::core::{BoosterConfig, DrawRng, SequenceSource};
use pocket_booster::effects::{EffectsSink, RecordingSink};

const CATALOG_JSON: &str = r#"{
    "cards": [
        {"id": 1, "name": "car1_common", "rarity": "common", "catalog_number": 1},
        {"id": 2, "name": "car2_common", "rarity": "common", "catalog_number": 2},
        {"id": 3, "name": "car3_rare", "rarity": "rare", "catalog_number": 3},
        {"id": 4, "name": "car4_epic", "rarity": "epic", "catalog_number": 4},
        {"id": 5, "name": "car5_legendary", "rarity": "legendary", "catalog_number": 5}
    ]
}"#;

const CONFIG_JSON: &str = r#"{
    "booster_size": 5,
    "weights": {"common": 0.7, "rare": 0.25, "epic": 0.04, "legendary": 0.01}
}"#;

/// Counts reveals at or above a rarity, like a "big pull" flourish would.
struct BigPullCounter {
    threshold: Rarity,
    hits: usize,
}

impl EffectsSink for BigPullCounter {
    fn notify(&mut self, rarity: Rarity) {
        if rarity >= self.threshold {
            self.hits += 1;
        }
    }
}

/// Test revealing a booster card by card into a collection.
#[test]
fn test_open_booster_into_collection() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    let config = BoosterConfig::from_json(CONFIG_JSON).unwrap();

    let mut opening = config.start_opening(&catalog, &mut DrawRng::new(42)).unwrap();
    let mut collection = Collection::new();
    let mut sink = RecordingSink::new();

    let mut revealed = Vec::new();
    while let Some(card) = opening.reveal_next(&mut collection, &mut sink) {
        revealed.push(card.clone());
    }

    assert_eq!(revealed.len(), 5);
    assert_eq!(collection.total_count(), 5);
    assert_eq!(
        sink.events,
        revealed.iter().map(|c| c.rarity).collect::<Vec<_>>()
    );
    for card in &revealed {
        assert!(collection.contains(card.id));
    }
}

/// Test a scripted opening with a custom effects sink.
#[test]
fn test_scripted_opening() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    let config = BoosterConfig::from_json(CONFIG_JSON).unwrap();
    let mut rng = SequenceSource::strict(vec![
        0.995, 0.0, // legendary
        0.1, 0.9, // common, second
        0.1, 0.9, // common, second
        0.8, 0.0, // rare
        0.97, 0.0, // epic
    ]);

    let mut opening = config.start_opening(&catalog, &mut rng).unwrap();
    assert_eq!(rng.consumed(), 10);
    let mut collection = Collection::new();
    let mut sink = BigPullCounter {
        threshold: Rarity::EPIC,
        hits: 0,
    };
    opening.reveal_all(&mut collection, &mut sink);

    assert_eq!(sink.hits, 2);
    assert_eq!(collection.count_of(CardId::new(2)), 2);
    assert_eq!(collection.count_of(CardId::new(1)), 0);
    assert_eq!(collection.progress(&catalog).to_string(), "4/5");
}

/// Test opening boosters until the collection is complete.
#[test]
fn test_many_boosters_fill_collection() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    let config = BoosterConfig::from_json(CONFIG_JSON).unwrap();
    let table = config.table(&catalog).unwrap();
    let mut rng = DrawRng::new(7);
    let mut collection = Collection::new();

    let mut boosters = 0;
    while !collection.progress(&catalog).is_complete() && boosters < 10_000 {
        let mut opening = BoosterOpening::draw(&table, config.booster_size, &mut rng).unwrap();
        opening.reveal_all(&mut collection, &mut |_rarity: Rarity| {});
        boosters += 1;
    }

    assert!(collection.progress(&catalog).is_complete());
    assert_eq!(collection.total_count(), boosters as u64 * 5);
    let by_rarity = collection.count_by_rarity(&catalog);
    assert_eq!(by_rarity.get(&Rarity::COMMON), Some(&2));
}

/// Test that forked streams open reproducible boosters.
#[test]
fn test_forked_streams_open_independent_boosters() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    let config = BoosterConfig::from_json(CONFIG_JSON).unwrap();
    let mut root = DrawRng::new(1);

    let boosters: Vec<_> = (0..4)
        .map(|_| config.open(&catalog, &mut root.fork()).unwrap())
        .collect();

    let mut replay_root = DrawRng::new(1);
    let replayed: Vec<_> = (0..4)
        .map(|_| config.open(&catalog, &mut replay_root.fork()).unwrap())
        .collect();

    assert_eq!(boosters, replayed);
}
