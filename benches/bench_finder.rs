use criterion::{criterion_group, criterion_main, Criterion};
use rack_word_finder::{find_playable_words, Dictionary, Finder, Rack};

const LETTERS: &[u8] = b"AEIOURSTLNCDGHMPB";

/// A deterministic list of pseudo words, 2..=8 letters long.
fn generate_words(n: usize) -> Vec<String> {
    let mut state: u32 = 12345;
    let mut next = move || {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12345);
        (state >> 16) as usize
    };
    (0..n)
        .map(|_| {
            let len = 2 + next() % 7;
            (0..len)
                .map(|_| LETTERS[next() % LETTERS.len()] as char)
                .collect()
        })
        .collect()
}

fn bench_scan(c: &mut Criterion, name: &str, words: &[String], anchor: &str, letters: &str) {
    let rack = Rack::from_letters(letters).unwrap();
    c.bench_function(name, |b| {
        b.iter(|| find_playable_words(words, anchor, &rack))
    });
}

fn bench_can_form_word(c: &mut Criterion) {
    let rack = Rack::from_letters("SETRAIN").unwrap();
    let finder = Finder::new("TEA", &rack);
    c.bench_function("finder.can_form_word", |b| {
        b.iter(|| finder.can_form_word("STEAMING") | finder.can_form_word("RETAINS"))
    });
}

fn bench_from_words(c: &mut Criterion, words: &[String]) {
    let words: Vec<&str> = words.iter().map(String::as_str).collect();
    c.bench_function("dictionary.from_words", |b| {
        b.iter(|| Dictionary::from_words(&words).unwrap())
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = generate_words(50_000);
    bench_can_form_word(c);
    bench_scan(c, "finder.scan.1", &words, "CAT", "SETRAIN");
    bench_scan(c, "finder.scan.2", &words, "", "SETRAIN");
    bench_scan(c, "finder.scan.3", &words, "STONE", "AB");
    bench_from_words(c, &words);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
