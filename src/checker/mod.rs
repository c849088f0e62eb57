pub mod suggestions;
pub mod tokenizer;
pub mod wordset;

use std::io;
use std::path::Path;

use log::{debug, warn};

use crate::config::{Config, DEFAULT_MAX_DISTANCE};
use crate::error::DictionaryError;
use crate::MisspelledEntry;
use tokenizer::tokenize;
use wordset::WordSet;

/// The spell-checking engine.
///
/// Owns the three vocabularies (main dictionary, user dictionary, session
/// ignore list), the current misspelled-word list, and the enabled flags.
/// One engine value is created by the embedding application at startup and
/// passed by reference into every operation; there is no global state.
///
/// All operations are synchronous and run to completion. The engine is not
/// designed for concurrent access; embedders serialize calls onto one
/// logical thread and throttle `check` with [`crate::Debouncer`] if the
/// text changes rapidly.
pub struct SpellChecker {
    main: WordSet,
    user: WordSet,
    ignored: WordSet,
    misspelled: Vec<MisspelledEntry>,
    main_loaded: bool,
    enabled: bool,
    suggestions_enabled: bool,
    max_edit_distance: usize,
}

impl SpellChecker {
    /// An empty engine: no dictionaries, checking disabled until a main
    /// dictionary loads.
    pub fn new() -> Self {
        Self {
            main: WordSet::new(),
            user: WordSet::new(),
            ignored: WordSet::new(),
            misspelled: Vec::new(),
            main_loaded: false,
            enabled: false,
            suggestions_enabled: true,
            max_edit_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    /// Engine with an already-built main dictionary, enabled immediately.
    pub fn with_dictionary(main: WordSet) -> Self {
        let mut checker = Self::new();
        checker.main = main;
        checker.main_loaded = true;
        checker.enabled = true;
        checker
    }

    /// Build an engine from configuration, loading both dictionary files.
    ///
    /// Load failures never abort: a broken or missing main dictionary
    /// leaves the engine in disabled mode, a missing user dictionary
    /// leaves the user set empty. Both fallbacks are logged.
    pub fn from_config(config: &Config) -> Self {
        let mut checker = Self::new();
        checker.max_edit_distance = config.max_edit_distance;

        if let Some(path) = &config.dictionary {
            if let Err(err) = checker.load_dictionary(path) {
                warn!("spell checking disabled: {err}");
            }
        } else {
            warn!("no main dictionary configured, spell checking disabled");
        }

        if let Some(path) = &config.personal_dictionary {
            if let Err(err) = checker.load_user_dictionary(path) {
                warn!("user dictionary unavailable, starting empty: {err}");
            }
        }

        checker
    }

    /// Load the main dictionary and enable checking.
    ///
    /// On error the previous dictionary and enabled state are untouched.
    pub fn load_dictionary(&mut self, path: &Path) -> Result<(), DictionaryError> {
        let set = WordSet::load(path)?;
        debug!("loaded {} words from {}", set.len(), path.display());
        self.main = set;
        self.main_loaded = true;
        self.enabled = true;
        Ok(())
    }

    /// Load the user dictionary. A missing file is not an error: the user
    /// set starts empty and is created on the first save.
    pub fn load_user_dictionary(&mut self, path: &Path) -> Result<(), DictionaryError> {
        match WordSet::load(path) {
            Ok(set) => {
                debug!("loaded {} user words from {}", set.len(), path.display());
                self.user = set;
                Ok(())
            }
            Err(DictionaryError::NotFound { .. }) => {
                debug!("no user dictionary at {}, starting empty", path.display());
                self.user = WordSet::new();
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Check `text`, replacing the stored misspelled-word list.
    ///
    /// Tokens are looked up in the ignore list, the user dictionary, and
    /// the main dictionary, in that order with short-circuit; words found
    /// nowhere are recorded in token order. In disabled mode the list is
    /// always empty — query [`SpellChecker::is_enabled`] to tell "clean
    /// text" from "checking off".
    pub fn check(&mut self, text: &str) {
        self.misspelled.clear();
        if !self.enabled {
            return;
        }

        for token in tokenize(text) {
            if !self.is_word_correct(token.text) {
                self.misspelled.push(MisspelledEntry {
                    start: token.start,
                    end: token.end,
                    word: token.text.to_string(),
                });
            }
        }
    }

    /// Whether a word is known to any of the three vocabularies.
    /// Case-insensitive; empty input counts as correct.
    pub fn is_word_correct(&self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return true;
        }
        self.ignored.contains(word) || self.user.contains(word) || self.main.contains(word)
    }

    /// Insert a word into the user dictionary. Empty input is a no-op.
    ///
    /// The misspelled list is not recomputed; callers re-invoke
    /// [`SpellChecker::check`] when they want the new word reflected.
    pub fn add_to_user_dictionary(&mut self, word: &str) {
        self.user.insert(word);
    }

    /// Insert a word into the session ignore list. Empty input is a
    /// no-op. Same re-check contract as `add_to_user_dictionary`; the
    /// ignore list is never persisted.
    pub fn add_to_ignore_list(&mut self, word: &str) {
        self.ignored.insert(word);
    }

    /// Empty the ignore list. Takes effect on the next `check`.
    pub fn clear_ignore_list(&mut self) {
        self.ignored.clear();
    }

    /// Persist the user dictionary. The in-memory set stays valid whether
    /// or not the write succeeds.
    pub fn save_user_dictionary(&self, path: &Path) -> io::Result<()> {
        self.user.save(path)
    }

    /// Ranked correction candidates for `word`, at most `limit` entries.
    ///
    /// Candidates come from the main and user dictionaries, ordered by
    /// ascending edit distance then lexicographically. Returns an empty
    /// vector when the word is already correct, when no candidate is
    /// within the distance threshold, or when suggestions are turned off.
    pub fn suggestions(&self, word: &str, limit: usize) -> Vec<String> {
        if !self.suggestions_enabled {
            return Vec::new();
        }
        let word = word.trim();
        if word.is_empty() || self.is_word_correct(word) {
            return Vec::new();
        }
        suggestions::generate(word, &[&self.main, &self.user], self.max_edit_distance, limit)
    }

    /// The current misspelled-word list, ordered by ascending start
    /// offset. Rebuilt wholesale by every `check`.
    pub fn misspelled_words(&self) -> &[MisspelledEntry] {
        &self.misspelled
    }

    /// The misspelled entry whose span contains the byte offset, if any.
    pub fn misspelled_at(&self, offset: usize) -> Option<&MisspelledEntry> {
        let idx = self.misspelled.partition_point(|entry| entry.start <= offset);
        idx.checked_sub(1)
            .and_then(|i| self.misspelled.get(i))
            .filter(|entry| offset < entry.end)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle checking. Enabling is refused while no main dictionary is
    /// loaded; the engine stays in disabled mode.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled && self.main_loaded;
    }

    pub fn suggestions_enabled(&self) -> bool {
        self.suggestions_enabled
    }

    pub fn set_suggestions_enabled(&mut self, enabled: bool) {
        self.suggestions_enabled = enabled;
    }

    /// Edit-distance threshold used by the suggestion engine.
    pub fn set_max_edit_distance(&mut self, max_distance: usize) {
        self.max_edit_distance = max_distance;
    }
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new()
    }
}
