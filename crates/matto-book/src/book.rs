//! Opening books: JSON documents mapping move sequences to recommendations.
//!
//! A book document keys its lines by the space-separated algebraic sequence
//! played so far (check and mate marks stripped); the bare starting position
//! lives under the special key `"start"`. Several books are consulted
//! together: a move recommended by more books outranks one recommended by
//! fewer, and ties are broken uniformly at random.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use tracing::{debug, info, warn};

use matto_core::strip_annotations;

use crate::error::BookError;

/// Book key for the position before any move has been played.
const START_KEY: &str = "start";

/// One opening book, as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct BookDocument {
    /// Human-readable opening name.
    pub opening_name: String,
    /// Short description of the opening's ideas.
    #[serde(default)]
    pub description: String,
    /// ECO classification code.
    #[serde(default)]
    pub eco_code: String,
    /// The main line in algebraic notation.
    #[serde(default)]
    pub main_line: String,
    /// Recommended continuations per move sequence.
    pub book: HashMap<String, BookLine>,
}

/// The recommendations stored under one sequence key.
#[derive(Debug, Clone, Deserialize)]
pub struct BookLine {
    /// Recommended next moves in algebraic notation.
    pub best_moves: Vec<String>,
}

/// A set of opening books consulted together.
#[derive(Debug, Default)]
pub struct BookSet {
    books: Vec<BookDocument>,
}

impl BookSet {
    /// Build a set from already-parsed documents.
    pub fn from_documents(books: Vec<BookDocument>) -> BookSet {
        BookSet { books }
    }

    /// Load every `*.json` book in a directory.
    ///
    /// Files that cannot be read or parsed are skipped with a warning, so a
    /// single bad book never disables the rest.
    ///
    /// # Errors
    ///
    /// Fails only when the directory itself cannot be read.
    pub fn load_dir(dir: &Path) -> Result<BookSet, BookError> {
        let entries = fs::read_dir(dir).map_err(|source| BookError::ReadDir {
            path: dir.display().to_string(),
            source,
        })?;

        let mut books = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping unreadable book file");
                    continue;
                }
            };
            match serde_json::from_str::<BookDocument>(&text) {
                Ok(doc) => {
                    info!(opening = %doc.opening_name, path = %path.display(), "loaded opening book");
                    books.push(doc);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping malformed book file");
                }
            }
        }
        Ok(BookSet { books })
    }

    /// Number of loaded books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Return `true` when no books are loaded.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Collect the recommendations of every book that knows `sequence`,
    /// ranked by how many books endorse each move (descending).
    pub fn suggestions(&self, sequence: &str) -> Vec<(String, usize)> {
        let key = if sequence.is_empty() { START_KEY } else { sequence };

        let mut endorsements: HashMap<&str, usize> = HashMap::new();
        for doc in &self.books {
            let Some(line) = doc.book.get(key) else {
                continue;
            };
            debug!(opening = %doc.opening_name, sequence, "book hit");
            for token in &line.best_moves {
                *endorsements.entry(token.as_str()).or_default() += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = endorsements
            .into_iter()
            .map(|(token, count)| (token.to_string(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }

    /// Pick a recommended continuation for the given played tokens.
    ///
    /// At the bare starting position the choice is uniformly `e4` or `d4`.
    /// Otherwise the highest-endorsement recommendations are collected and
    /// one is chosen uniformly at random. Returns `None` when no book knows
    /// the sequence.
    pub fn pick<R: Rng>(&self, played: &[String], rng: &mut R) -> Option<String> {
        if played.is_empty() {
            let first: [&str; 2] = ["e4", "d4"];
            return first.choose(rng).map(|&token| token.to_string());
        }

        let sequence = cleaned_sequence(played);
        let ranked = self.suggestions(&sequence);
        let top = ranked.first()?.1;
        let best: Vec<&String> = ranked
            .iter()
            .take_while(|(_, count)| *count == top)
            .map(|(token, _)| token)
            .collect();
        best.choose(rng).map(|token| (*token).to_string())
    }
}

/// Join played tokens into a lookup key, stripping check and mate marks.
fn cleaned_sequence(played: &[String]) -> String {
    played
        .iter()
        .map(|token| strip_annotations(token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::{BookDocument, BookSet, cleaned_sequence};

    fn doc(json: &str) -> BookDocument {
        serde_json::from_str(json).unwrap()
    }

    fn italian() -> BookDocument {
        doc(r#"{
            "opening_name": "Italian Game",
            "description": "Quiet development toward f7.",
            "eco_code": "C50",
            "main_line": "e4 e5 Nf3 Nc6 Bc4",
            "book": {
                "start": { "best_moves": ["e4"] },
                "e4 e5": { "best_moves": ["Nf3"] },
                "e4 e5 Nf3 Nc6": { "best_moves": ["Bc4"] }
            }
        }"#)
    }

    fn scotch() -> BookDocument {
        doc(r#"{
            "opening_name": "Scotch Game",
            "book": {
                "start": { "best_moves": ["e4"] },
                "e4 e5": { "best_moves": ["Nf3"] },
                "e4 e5 Nf3 Nc6": { "best_moves": ["d4"] }
            }
        }"#)
    }

    #[test]
    fn document_fields_parse() {
        let book = italian();
        assert_eq!(book.opening_name, "Italian Game");
        assert_eq!(book.eco_code, "C50");
        assert_eq!(book.book["e4 e5"].best_moves, vec!["Nf3"]);
    }

    #[test]
    fn missing_optional_fields_default() {
        let book = scotch();
        assert!(book.description.is_empty());
        assert!(book.main_line.is_empty());
    }

    #[test]
    fn endorsement_ranking() {
        let set = BookSet::from_documents(vec![italian(), scotch()]);
        let ranked = set.suggestions("e4 e5");
        assert_eq!(ranked, vec![("Nf3".to_string(), 2)]);

        let ranked = set.suggestions("e4 e5 Nf3 Nc6");
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].1, 1);
        assert_eq!(ranked[1].1, 1);
    }

    #[test]
    fn unknown_sequence_has_no_suggestions() {
        let set = BookSet::from_documents(vec![italian()]);
        assert!(set.suggestions("d4 d5").is_empty());
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(set.pick(&["d4".into(), "d5".into()], &mut rng), None);
    }

    #[test]
    fn start_pick_is_e4_or_d4_even_without_books() {
        let set = BookSet::default();
        let mut seen_e4 = false;
        let mut seen_d4 = false;
        for seed in 0..64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            match set.pick(&[], &mut rng).unwrap().as_str() {
                "e4" => seen_e4 = true,
                "d4" => seen_d4 = true,
                other => panic!("unexpected opening move {other}"),
            }
        }
        assert!(seen_e4 && seen_d4, "both first moves must be reachable");
    }

    #[test]
    fn pick_prefers_higher_endorsement() {
        // Both books agree on Nf3 after 1.e4 e5, so Nf3 must always win.
        let set = BookSet::from_documents(vec![italian(), scotch()]);
        for seed in 0..16 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let pick = set.pick(&["e4".into(), "e5".into()], &mut rng).unwrap();
            assert_eq!(pick, "Nf3");
        }
    }

    #[test]
    fn pick_breaks_ties_randomly() {
        let set = BookSet::from_documents(vec![italian(), scotch()]);
        let played: Vec<String> = ["e4", "e5", "Nf3", "Nc6"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut seen = std::collections::HashSet::new();
        for seed in 0..64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            seen.insert(set.pick(&played, &mut rng).unwrap());
        }
        assert!(seen.contains("Bc4"));
        assert!(seen.contains("d4"));
    }

    #[test]
    fn annotations_are_stripped_from_the_key() {
        let set = BookSet::from_documents(vec![italian()]);
        let played: Vec<String> = ["e4", "e5", "Nf3+", "Nc6#"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(cleaned_sequence(&played), "e4 e5 Nf3 Nc6");
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(set.pick(&played, &mut rng), Some("Bc4".to_string()));
    }

    #[test]
    fn load_dir_skips_bad_files() {
        let dir = std::env::temp_dir().join("matto-book-load-test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("good.json"),
            r#"{ "opening_name": "Good", "book": { "start": { "best_moves": ["e4"] } } }"#,
        )
        .unwrap();
        std::fs::write(dir.join("bad.json"), "{ not json").unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let set = BookSet::load_dir(&dir).unwrap();
        assert_eq!(set.len(), 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_dir_missing_directory_errors() {
        let dir = std::env::temp_dir().join("matto-book-absent-dir");
        let _ = std::fs::remove_dir_all(&dir);
        assert!(BookSet::load_dir(&dir).is_err());
    }
}
