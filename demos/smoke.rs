//! Walk-through of the table: fill it, print it, update, remove, clear.
//!
//! Run with `RUST_LOG=trace cargo run --example smoke` to see resizes.

use chained_table::HashTable;
use env_logger::Builder;
use log::{info, LevelFilter};

fn init_logger() {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .format_timestamp_millis()
        .parse_default_env();
    // Ignore the error if a logger is already installed.
    let _ = builder.try_init();
}

fn main() {
    init_logger();

    let mut table: HashTable<String, usize> = HashTable::new();
    for n in 1..=30 {
        table.insert("a".repeat(n), n);
    }
    info!(
        "inserted {} keys, capacity {}",
        table.len(),
        table.capacity()
    );

    println!("the table");
    println!("{}", table);

    println!("table distribution");
    print!("{}", table.structure());

    let probe = "a".repeat(25);
    println!("value of {:?}: {:?}", probe, table.find(probe.as_str()));

    println!("changing value of \"aaaaa\" to 100");
    table.insert("aaaaa".to_string(), 100);
    println!("value of \"aaaaa\": {:?}", table.find("aaaaa"));

    let gone = "a".repeat(10);
    println!("removing value {:?}", gone);
    table.remove(gone.as_str());
    println!("value of {:?}: {:?}", gone, table.find(gone.as_str()));

    table.clear();
    let words = [
        "one",
        "two",
        "three",
        "four",
        "five",
        "six",
        "seven",
        "eight",
        "nine",
        "ten",
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
        "twenty",
        "twentyone",
        "twentytwo",
        "twentythree",
        "twentyfour",
        "twentyfive",
        "twentysix",
        "twentyseven",
        "twentyeight",
        "twentynine",
        "thirty",
    ];
    for (i, w) in words.iter().enumerate() {
        table.insert(w.to_string(), i + 1);
    }
    info!(
        "refilled with {} words, capacity {}, load {:.2}",
        table.len(),
        table.capacity(),
        table.load_factor()
    );

    print!("{}", table.structure());
}
