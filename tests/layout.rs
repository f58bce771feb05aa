mod common;

use common::{BlockRasterizer, assert_no_overlap};
use std::collections::HashSet;
use wordcloud::{Board, CloudConfig, FrequencyTable, place_words, tokenize};

fn small_config() -> CloudConfig {
    CloudConfig {
        width: 400,
        height: 300,
        max_words: 50,
        min_font_size: 6,
        max_font_size: 40,
        rotate_ratio: 0.2,
        margin: 0,
        seed: 42,
        ..CloudConfig::default()
    }
}

fn table_from(text: &str) -> FrequencyTable {
    FrequencyTable::build(tokenize(text, &HashSet::new())).unwrap()
}

#[test]
fn example_scenario_cat_dog_bird() {
    let table = table_from("cat cat dog cat bird dog");
    assert_eq!(table.count("cat"), Some(3));
    assert_eq!(table.count("dog"), Some(2));
    assert_eq!(table.count("bird"), Some(1));

    let cfg = CloudConfig {
        max_words: 10,
        ..small_config()
    };
    let mut board = Board::new(cfg.width, cfg.height, None).unwrap();
    let placements = place_words(&table, &BlockRasterizer, &mut board, &cfg, None).unwrap();

    assert_eq!(placements.len(), 3);
    assert_eq!(placements[0].word, "cat");
    assert_eq!(placements[1].word, "dog");
    assert_eq!(placements[2].word, "bird");
    assert_no_overlap(&placements, cfg.width, cfg.height);

    let report = table.report();
    let total: u64 = report
        .lines()
        .map(|l| l.split_once(": ").unwrap().1.parse::<u64>().unwrap())
        .sum();
    assert_eq!(report.lines().count(), 3);
    assert_eq!(total, 6);
}

#[test]
fn placements_never_overlap() {
    let text = "alpha ".repeat(9)
        + &"beta ".repeat(8)
        + &"gamma ".repeat(7)
        + &"delta ".repeat(6)
        + &"epsilon ".repeat(5)
        + &"zeta ".repeat(4)
        + &"eta ".repeat(3)
        + &"theta ".repeat(2)
        + "iota kappa lambda mu";
    let table = table_from(&text);
    let cfg = small_config();
    let mut board = Board::new(cfg.width, cfg.height, None).unwrap();
    let placements = place_words(&table, &BlockRasterizer, &mut board, &cfg, None).unwrap();

    assert!(placements.len() >= 8, "placed only {}", placements.len());
    assert_no_overlap(&placements, cfg.width, cfg.height);
}

#[test]
fn layout_is_deterministic_for_a_seed() {
    let text = "one one one two two three four five six seven eight nine ten";
    let cfg = small_config();

    let run = || {
        let table = table_from(text);
        let mut board = Board::new(cfg.width, cfg.height, None).unwrap();
        place_words(&table, &BlockRasterizer, &mut board, &cfg, None).unwrap()
    };

    let a = run();
    let b = run();
    assert_eq!(a.len(), b.len());
    for (pa, pb) in a.iter().zip(b.iter()) {
        assert_eq!(pa.word, pb.word);
        assert_eq!((pa.x, pa.y), (pb.x, pb.y));
        assert_eq!(pa.font_size, pb.font_size);
        assert_eq!(pa.rotation, pb.rotation);
    }
}

#[test]
fn different_seeds_move_words() {
    let text = "one one one two two three four five six seven";
    let table = table_from(text);
    let cfg_a = small_config();
    let cfg_b = CloudConfig {
        seed: 43,
        ..small_config()
    };

    let mut board_a = Board::new(cfg_a.width, cfg_a.height, None).unwrap();
    let a = place_words(&table, &BlockRasterizer, &mut board_a, &cfg_a, None).unwrap();
    let mut board_b = Board::new(cfg_b.width, cfg_b.height, None).unwrap();
    let b = place_words(&table, &BlockRasterizer, &mut board_b, &cfg_b, None).unwrap();

    // The first word is pinned to the center; later words start from seeded
    // random points, so at least one position should differ.
    let moved = a
        .iter()
        .zip(b.iter())
        .skip(1)
        .any(|(pa, pb)| (pa.x, pa.y) != (pb.x, pb.y));
    assert!(moved);
}

#[test]
fn committed_sizes_never_increase() {
    let table = table_from(
        "red red red red red blue blue blue blue green green green yellow yellow pink",
    );
    let cfg = small_config();
    let mut board = Board::new(cfg.width, cfg.height, None).unwrap();
    let placements = place_words(&table, &BlockRasterizer, &mut board, &cfg, None).unwrap();

    for pair in placements.windows(2) {
        assert!(
            pair[0].font_size >= pair[1].font_size,
            "size increased from '{}' to '{}'",
            pair[0].word,
            pair[1].word
        );
    }
}

#[test]
fn crowding_forces_observable_shrink() {
    // Eight equal-count words on a board far too small to hold them all at
    // full size: the sizing recurrence alone keeps every word at
    // max_font_size (count ratio 1.0), so any committed size below it is a
    // shrink event, observable through the placement record.
    let table = table_from("lion wolf bear deer hawk crow toad newt");
    let cfg = CloudConfig {
        width: 200,
        height: 100,
        max_words: 50,
        min_font_size: 4,
        max_font_size: 40,
        rotate_ratio: 0.0,
        margin: 0,
        seed: 5,
        ..CloudConfig::default()
    };
    let mut board = Board::new(cfg.width, cfg.height, None).unwrap();
    let placements = place_words(&table, &BlockRasterizer, &mut board, &cfg, None).unwrap();

    assert!(placements.len() >= 6, "placed only {}", placements.len());
    assert_eq!(placements[0].font_size, 40);
    let first_shrunk = placements
        .iter()
        .find(|p| p.font_size < 40)
        .expect("no shrink event observed in a crowded layout");

    // Later words size off the shrunk value, never back above it.
    for p in placements.iter().filter(|p| p.rank > first_shrunk.rank) {
        assert!(p.font_size <= first_shrunk.font_size);
    }
    for pair in placements.windows(2) {
        assert!(pair[1].font_size <= pair[0].font_size);
    }
    assert_no_overlap(&placements, cfg.width, cfg.height);
}

#[test]
fn word_cap_is_respected() {
    let table = table_from("aa bb cc dd ee ff gg hh ii jj");
    let cfg = CloudConfig {
        max_words: 4,
        ..small_config()
    };
    let mut board = Board::new(cfg.width, cfg.height, None).unwrap();
    let placements = place_words(&table, &BlockRasterizer, &mut board, &cfg, None).unwrap();
    assert_eq!(placements.len(), 4);
}

#[test]
fn stop_after_n_words_leaves_board_consistent() {
    let table = table_from("aa bb cc dd ee ff gg hh");
    let cfg = small_config();
    let mut board = Board::new(cfg.width, cfg.height, None).unwrap();
    let placements = place_words(&table, &BlockRasterizer, &mut board, &cfg, Some(2)).unwrap();

    assert_eq!(placements.len(), 2);
    // Board occupancy is exactly the union of the two footprints.
    let mut expected = 0usize;
    for p in &placements {
        expected += p.sprite.footprint.count_set();
    }
    assert_eq!(board.occupancy().count_set(), expected);
}

#[test]
fn oversized_word_is_dropped_not_fatal() {
    // The long word cannot fit the canvas even at the minimum size; the rest
    // of the corpus still lays out.
    let table = table_from(
        "pneumonoultramicroscopicsilicovolcanoconiosis \
         cat cat cat dog dog bird",
    );
    let cfg = CloudConfig {
        width: 120,
        height: 80,
        min_font_size: 8,
        max_font_size: 30,
        ..small_config()
    };
    let mut board = Board::new(cfg.width, cfg.height, None).unwrap();
    let placements = place_words(&table, &BlockRasterizer, &mut board, &cfg, None).unwrap();

    assert!(
        placements
            .iter()
            .all(|p| p.word != "pneumonoultramicroscopicsilicovolcanoconiosis")
    );
    let placed: Vec<&str> = placements.iter().map(|p| p.word.as_str()).collect();
    assert!(placed.contains(&"cat"));
    assert!(placed.contains(&"dog"));
    assert!(placed.contains(&"bird"));
}

#[test]
fn masked_layout_stays_inside_region() {
    use wordcloud::Bitmap;

    let width = 300;
    let height = 200;
    // Placeable stripe in the middle third.
    let region = Bitmap::from_fn(width, height, |x, _| x >= 100 && x < 200);
    let table = table_from("aa aa aa bb bb cc dd ee");
    let cfg = CloudConfig {
        width,
        height,
        max_font_size: 24,
        ..small_config()
    };
    let mut board = Board::new(width, height, Some(region)).unwrap();
    let placements = place_words(&table, &BlockRasterizer, &mut board, &cfg, None).unwrap();
    let region = board.allowed().unwrap();

    assert!(!placements.is_empty());
    for p in &placements {
        let fp = &p.sprite.footprint;
        for gy in 0..fp.height() {
            for gx in 0..fp.width() {
                if fp.get(gx, gy) {
                    assert!(
                        region.get(p.x + gx, p.y + gy),
                        "'{}' escaped the mask at ({}, {})",
                        p.word,
                        p.x + gx,
                        p.y + gy
                    );
                }
            }
        }
    }
}
