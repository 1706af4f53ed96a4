//! Build script to embed the offline dictionary
//!
//! Turns the plain-text word lists under `data/` into `&[&str]` constants,
//! normalized to uppercase so the game never has to case-fold at runtime.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LISTS: &[(&str, &str, &str, &str)] = &[
    (
        "data/answers.txt",
        "answers.rs",
        "ANSWERS",
        "Words eligible to be picked as the offline word of the day",
    ),
    (
        "data/allowed.txt",
        "allowed.rs",
        "ALLOWED",
        "Every word the offline dictionary accepts as a guess",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");

    for &(input, output, const_name, doc) in LISTS {
        generate_word_list(input, &Path::new(&out_dir).join(output), const_name, doc);
        println!("cargo:rerun-if-changed={input}");
    }
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_ascii_uppercase)
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "/// {doc_comment} ({} words)", words.len()).unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
}
