use basepair_pack::PackedSequence;
use std::env;
use std::fs;

/// Packs a file of base-pair text, verifies every position, and prints
/// statistics. Whitespace in the file is ignored.
///
/// Usage: cargo run --example main <filename>
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <filename>", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];

    let contents = fs::read_to_string(filename).unwrap_or_else(|_| {
        eprintln!("File \"{}\" not found.", filename);
        std::process::exit(1);
    });
    let text: String = contents.chars().filter(|c| !c.is_whitespace()).collect();

    let seq = match PackedSequence::new(&text) {
        Ok(seq) => seq,
        Err(e) => {
            eprintln!("Cannot pack \"{}\": {}", filename, e);
            std::process::exit(1);
        }
    };

    // Verify by decoding every position against the input
    let mut mismatches = 0usize;
    for (i, pair) in text.as_bytes().chunks_exact(2).enumerate() {
        match seq.get(i) {
            Ok(symbol) => {
                let forward = symbol.as_str().as_bytes();
                if pair != forward && pair != [forward[1], forward[0]] {
                    eprintln!("Mismatch at position {}: file={:?}, seq={}", i, pair, symbol);
                    mismatches += 1;
                }
            }
            Err(e) => {
                eprintln!("Decode failed at position {}: {}", i, e);
                mismatches += 1;
            }
        }
    }

    let stats = seq.stats();

    println!("\n=== Statistics ===");
    println!("Base pairs packed: {}", stats.symbols);
    println!("Packed words: {}", stats.words);
    println!("Packed bytes: {}", stats.packed_bytes());
    println!("Unpacked bytes: {}", stats.unpacked_bytes());
    println!("Compression ratio: {:.2}%", stats.compression_ratio());
    println!("Mismatches: {}", mismatches);
}
