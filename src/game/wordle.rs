use std::io::{self, Write};

use anyhow::Result;
use log::info;
use rand::seq::IndexedRandom;
use rand::Rng;

pub const WORD_LEN: usize = 5;
pub const MAX_GUESSES: u32 = 6;

/// Valid guesses and targets. One word is chosen uniformly per attempt.
const WORDS: &[&str] = &[
    "ABOUT", "AGENT", "ALERT", "ALIBI", "AUDIT", "BADGE", "BLAME", "CABLE", "CACHE", "CHAOS",
    "CLEAN", "CLOCK", "CODES", "COVER", "CRIME", "CRYPT", "DAILY", "DECOY", "DOUBT", "DRONE",
    "ERROR", "FAULT", "FRAUD", "GHOST", "GUARD", "GUILT", "HONOR", "INPUT", "INTEL", "LEADS",
    "LEARN", "LOGIC", "LOGIN", "MACRO", "NIGHT", "NOISE", "ORDER", "PANEL", "PATCH", "PHONE",
    "POWER", "PRESS", "PROBE", "PROOF", "PROXY", "QUERY", "RADAR", "RELAY", "ROBOT", "ROGUE",
    "ROUTE", "RUMOR", "SCANS", "SHIFT", "SIREN", "SNOOP", "SPIES", "STAKE", "STORM", "SWEEP",
    "TAPES", "THEFT", "TOKEN", "TRACE", "TRACK", "TRAIL", "TRUST", "TRUTH", "VAULT", "VIRUS",
    "WATCH", "WIRES",
];

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterMark {
    /// Right letter, right position.
    Exact,
    /// Letter occurs elsewhere in the target.
    Misplaced,
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessProblem {
    WrongLength,
    UnknownWord,
}

/// Normalize and validate a raw guess against the word list.
pub fn check_guess(raw: &str) -> Result<String, GuessProblem> {
    let guess = raw.trim().to_ascii_uppercase();
    if guess.len() != WORD_LEN || !guess.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(GuessProblem::WrongLength);
    }
    if !WORDS.contains(&guess.as_str()) {
        return Err(GuessProblem::UnknownWord);
    }
    Ok(guess)
}

/// Classic letter-by-letter evaluation. A guessed letter scores `Misplaced`
/// at most as many times as it remains unaccounted for in the target after
/// exact matches are removed.
///
/// Both words must be `WORD_LEN` ASCII uppercase letters.
pub fn score_guess(guess: &str, target: &str) -> [LetterMark; WORD_LEN] {
    let g = guess.as_bytes();
    let t = target.as_bytes();
    debug_assert_eq!(g.len(), WORD_LEN);
    debug_assert_eq!(t.len(), WORD_LEN);

    let mut marks = [LetterMark::Absent; WORD_LEN];
    let mut unaccounted = [0u8; 26];

    for i in 0..WORD_LEN {
        if g[i] == t[i] {
            marks[i] = LetterMark::Exact;
        } else {
            unaccounted[(t[i] - b'A') as usize] += 1;
        }
    }
    for i in 0..WORD_LEN {
        if marks[i] == LetterMark::Exact {
            continue;
        }
        let left = &mut unaccounted[(g[i] - b'A') as usize];
        if *left > 0 {
            marks[i] = LetterMark::Misplaced;
            *left -= 1;
        }
    }

    marks
}

fn spaced(s: &str) -> String {
    s.chars().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

fn render_marks(marks: &[LetterMark; WORD_LEN]) -> String {
    marks
        .iter()
        .map(|m| match m {
            LetterMark::Exact => '=',
            LetterMark::Misplaced => '+',
            LetterMark::Absent => '.',
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Interactive attempt
// ---------------------------------------------------------------------------

/// Run one puzzle attempt against a fresh random target. Returns `true` on a
/// solved puzzle. Invalid input re-prompts without consuming a guess.
pub fn play(rng: &mut impl Rng) -> Result<bool> {
    let target = WORDS.choose(rng).expect("word list is not empty");
    info!("puzzle target selected");

    println!("\n--- DAILY CIPHER DRILL ---");
    println!(
        "Recover the {WORD_LEN}-letter passphrase in {MAX_GUESSES} guesses.\n\
         Feedback per letter:  =  right spot   +  elsewhere in the word   .  absent"
    );

    for attempt in 1..=MAX_GUESSES {
        let guess = loop {
            print!("Guess {attempt}/{MAX_GUESSES}: ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            match check_guess(&line) {
                Ok(guess) => break guess,
                Err(GuessProblem::WrongLength) => {
                    println!("  Exactly {WORD_LEN} letters, please.");
                }
                Err(GuessProblem::UnknownWord) => {
                    println!("  Not a word I recognize.");
                }
            }
        };

        let marks = score_guess(&guess, target);
        println!("  {}", spaced(&guess));
        println!("  {}", spaced(&render_marks(&marks)));

        if marks.iter().all(|m| *m == LetterMark::Exact) {
            println!("Passphrase recovered.");
            return Ok(true);
        }
    }

    println!("Out of guesses. The passphrase was {target}.");
    Ok(false)
}
