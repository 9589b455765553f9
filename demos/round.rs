use anyhow::Result;
use rack_word_finder::{Dictionary, Game, LetterPool, Playable};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const WORDS: &[&str] = &[
    "at", "bat", "bats", "cat", "cats", "scat", "act", "tact", "tab", "stab", "beat", "tea",
    "eat", "seat", "east", "teas", "rat", "rats", "star", "tars", "arts", "stare", "tears",
    "rates", "treat", "great", "grate", "crate", "trace", "react", "cater", "heat", "hate",
    "neat", "ant", "ants", "tan", "nest", "sent", "tens", "net", "ten", "tone", "note", "stone",
    "notes", "onset", "toes", "dots", "dog", "god", "gods", "nod", "don", "node", "done",
];

fn run(wordfile: Option<String>) -> Result<()> {
    let dictionary = match wordfile {
        Some(path) => Dictionary::from_file(&path)?,
        None => Dictionary::from_words(WORDS)?,
    };
    println!("{}", dictionary);

    let mut game = Game::new(LetterPool::english(), 123).with_anchor("TEA")?;
    for round in 1..=5 {
        game.refill_rack();
        let tiles: Vec<String> = game
            .rack()
            .letters()
            .into_iter()
            .map(|letter| format!("{}{}", letter, game.pool().points(letter)))
            .collect();
        println!(
            "Round {}: anchor \"{}\", rack {}",
            round,
            game.anchor(),
            tiles.join(" ")
        );
        let t0 = Instant::now();
        let playable = game.playable_words(&dictionary);
        let dt = t0.elapsed();
        match playable {
            Playable::NoPlayableWord => {
                println!("No playable word in {:?}", dt);
                break;
            }
            Playable::Words(words) => {
                println!("{} playable words in {:?}", words.len(), dt);
                let ranked = game.rank_by_points(&words);
                for (word, points) in ranked.iter().take(5) {
                    println!("  {} {}", word, points);
                }
                let best = String::from(ranked[0].0);
                game.play(&best, &dictionary)?;
                println!("Played {}, score {}", best, game.score());
            }
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    if let Err(err) = run(std::env::args().nth(1)) {
        eprintln!("Error: {:?}", err);
    }
}
