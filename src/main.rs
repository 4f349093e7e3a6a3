use std::error::Error;
use std::time::Instant;

use probe_table::hash_table::HashTable;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    // Build the table and insert entries by key.
    let mut table: HashTable<String, i32> = HashTable::with_capacity(10);
    table.put("Laura".to_string(), 6);
    table.put("Rafael".to_string(), 1);
    table.put("Ivonei".to_string(), 2);
    table.put("Lucia".to_string(), 3);
    table.put("Guilherme".to_string(), 4);
    table.put("Aline".to_string(), 50);
    table.put("Conterato".to_string(), 30);

    // Show the slot layout.
    for slot in table.slots() {
        match slot {
            None => println!("(null)"),
            Some((key, value)) => println!("{}: {}", key, value),
        }
    }

    // Retrieve entries through their keys.
    println!("---------------");
    println!("{}", table.get(&"Rafael".to_string())?);
    println!("{}", table.get(&"Ivonei".to_string())?);
    println!("{}", table.get(&"Laura".to_string())?);

    match table.get(&"NotInserted".to_string()) {
        Ok(value) => println!("NotInserted: {}", value),
        Err(err) => println!("NotInserted: {}", err),
    }

    const CAPACITY: usize = 100000;
    const SAMPLE_SIZE: usize = CAPACITY * 3 / 4;

    let mut big: HashTable<usize, usize> = HashTable::with_capacity(CAPACITY);
    let mut samples: Vec<usize> = Vec::with_capacity(SAMPLE_SIZE);
    while big.count() < SAMPLE_SIZE {
        let key: usize = rand::random();
        if big.get(&key).is_err() {
            samples.push(key);
            big.put(key, key);
        }
    }

    let now: Instant = Instant::now();
    for key in &samples {
        if big.get(key).is_err() {
            panic!("Failed to get key {}", key);
        }
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;

    println!("---------------");
    println!("Capacity {} entries {}", big.capacity(), big.count());
    println!("Load factor {}", big.load_factor());
    println!("Avg time to lookup {}", elapsed as f64 / samples.len() as f64);

    let probe_key: usize = samples[0];
    benchmarking::warm_up();
    match benchmarking::measure_function(move |mut measurer| {
        measurer.measure(|| big.get(&probe_key));
    }) {
        Ok(result) => println!("Measured single lookup {:?}", result.elapsed()),
        Err(err) => println!("Benchmark failed: {:?}", err),
    }

    Ok(())
}
