#![no_main]
use arbitrary::Arbitrary;
use assetgen::dataset::{ASSET_MAX, ASSET_MIN, DatasetShape, write_dataset};
use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Arbitrary)]
struct Input {
    users: u8,
    assets: u8,
    delimiter: u8,
    seed: u64,
}

// Generate a dataset with an arbitrary delimiter byte and read it back with
// the csv reader. Catches delimiters that collide with generated content and
// break the column count.
fuzz_target!(|input: Input| {
    if matches!(input.delimiter, b'"' | b'\n' | b'\r') {
        return;
    }
    let shape = DatasetShape::new(input.users as i64, (input.assets % 32) as i64);
    let mut buf = Vec::new();
    let mut rng = StdRng::seed_from_u64(input.seed);
    let summary = write_dataset(&mut buf, shape, input.delimiter, &mut rng).unwrap();
    assert_eq!(summary.rows, shape.users);

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(input.delimiter)
        .has_headers(true)
        .from_reader(buf.as_slice());
    assert_eq!(rdr.headers().unwrap().len(), shape.columns());
    let mut rows = 0;
    for record in rdr.records() {
        let record = record.unwrap();
        assert_eq!(record.len(), shape.columns());
        for field in record.iter().skip(1) {
            let v: u32 = field.parse().unwrap();
            assert!((ASSET_MIN..=ASSET_MAX).contains(&v));
        }
        rows += 1;
    }
    assert_eq!(rows, shape.users);
});
