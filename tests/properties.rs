/// Property tests over seeded generation: every email and every row the
/// library produces keeps the documented shape, whatever the seed.
#[allow(dead_code)]
mod common;

use assetgen::dataset::{RowGenerator, write_dataset};
use assetgen::{DatasetShape, generate_email};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use regex::Regex;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn emails_match_pattern(seed in any::<u64>()) {
        let re = Regex::new(common::EMAIL_PATTERN).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..32 {
            let email = generate_email(&mut rng);
            prop_assert!(re.is_match(&email), "bad email: {}", email);
        }
    }

    #[test]
    fn rows_parse_back(seed in any::<u64>(), users in 0i64..40, assets in -2i64..6) {
        let shape = DatasetShape::new(users, assets);
        let mut buf = Vec::new();
        let mut rng = StdRng::seed_from_u64(seed);
        write_dataset(&mut buf, shape, b',', &mut rng).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let (header, rows) = common::read_table(&text);
        prop_assert_eq!(header.len(), shape.columns());
        prop_assert_eq!(rows.len(), shape.users);
        for row in rows {
            prop_assert_eq!(row.len(), shape.columns());
            for value in &row[1..] {
                let n: u32 = value.parse().unwrap();
                prop_assert!((1..=10_000).contains(&n));
            }
        }
    }

    #[test]
    fn generator_matches_writer(
        seed in any::<u64>(),
        users in 0usize..20,
        assets in 0usize..4,
    ) {
        let shape = DatasetShape { users, assets };
        let mut rng = StdRng::seed_from_u64(seed);
        let rows: Vec<_> = RowGenerator::new(shape, &mut rng).collect();

        let mut buf = Vec::new();
        let mut rng = StdRng::seed_from_u64(seed);
        write_dataset(&mut buf, shape, b',', &mut rng).unwrap();
        let text = String::from_utf8(buf).unwrap();

        for (row, line) in rows.iter().zip(text.lines().skip(1)) {
            let mut expected = vec![row.email.clone()];
            expected.extend(row.assets.iter().map(|v| v.to_string()));
            prop_assert_eq!(line, expected.join(","));
        }
    }
}
