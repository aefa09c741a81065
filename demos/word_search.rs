//! Generic KMP Search Example
//!
//! Demonstrates overlapping matches, custom equivalence relations, and
//! word-level sequence search.
//!
//! ```bash
//! cargo run --example word_search
//! ```

use alice_match::{AliceSeqIndex, AsciiCaseless};

fn main() {
    println!("=== ALICE-Match KMP Demo ===\n");

    let text = "automatIc authentication automotive auTOmation raut";
    println!("Text ({} chars):", text.len());
    println!("  \"{}\"", text);

    let chars: Vec<char> = text.chars().collect();
    let exact = AliceSeqIndex::new(chars.clone());
    let caseless = AliceSeqIndex::with_equivalence(chars, AsciiCaseless);

    println!("\n--- Exact vs ASCII-caseless ---\n");

    for query in ["auto", "aut", "tic", "trunk"] {
        let q: Vec<char> = query.chars().collect();
        println!(
            "  \"{}\" -> exact {:?}, caseless {:?}",
            query,
            exact.search(&q),
            caseless.search(&q),
        );
    }

    // Overlapping occurrences are all reported
    println!("\n--- Overlap ---\n");
    let runs = AliceSeqIndex::new(b"aaaa".to_vec());
    println!("  \"aaa\" in \"aaaa\" -> {:?}", runs.search(b"aaa"));

    // Sequences of words work exactly like sequences of bytes
    println!("\n--- Word sequences ---\n");
    let words = vec!["Hello", "world", "test", "this", "foo", "TEsT", "this", "done"];
    println!("  source: {:?}", words);

    let exact = AliceSeqIndex::new(words.clone());
    let caseless = AliceSeqIndex::with_equivalence(words, AsciiCaseless);
    println!(
        "  [\"test\", \"this\"] -> exact {:?}, caseless {:?}",
        exact.search(&["test", "this"]),
        caseless.search(&["test", "this"]),
    );

    // The empty query matches everywhere, one-past-the-end included
    println!("\n--- Empty query ---\n");
    let small = AliceSeqIndex::new(b"abc".to_vec());
    println!("  \"\" in \"abc\" -> {:?}", small.search(b""));
}
