//! Readline wrapper with completion of the sentinel and known bank names.

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Config, Context, Editor, Helper};

use crate::collector::{LineSource, SENTINEL};
use crate::error::{OfferError, Result};

pub struct OfferHelper {
    words: Vec<String>,
    hinter: HistoryHinter,
}

impl OfferHelper {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        let mut helper = Self {
            words: vec![SENTINEL.to_string()],
            hinter: HistoryHinter::default(),
        };
        helper.extend(words);
        helper
    }

    fn extend<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            let word = word.as_ref();
            if !word.trim().is_empty() && !self.words.iter().any(|w| w == word) {
                self.words.push(word.to_string());
            }
        }
    }
}

impl Helper for OfferHelper {}
impl Validator for OfferHelper {}
impl Highlighter for OfferHelper {}

impl Hinter for OfferHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Completer for OfferHelper {
    type Candidate = Pair;

    // Whole-line completion: bank names may contain spaces.
    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = line[..pos].to_lowercase();
        if prefix.is_empty() {
            return Ok((0, Vec::new()));
        }

        let mut matches: Vec<Pair> = self
            .words
            .iter()
            .filter(|w| w.to_lowercase().starts_with(&prefix))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();

        matches.sort_by(|a, b| a.replacement.cmp(&b.replacement));
        matches.dedup_by(|a, b| a.replacement == b.replacement);

        Ok((0, matches))
    }
}

/// Thin wrapper over `rustyline::Editor` used for the offer prompts.
pub struct Readline {
    editor: Editor<OfferHelper, DefaultHistory>,
}

impl Readline {
    /// `known_names` seeds completion, typically the banks already stored.
    pub fn new<S: AsRef<str>>(known_names: &[S]) -> Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .auto_add_history(false)
            .build();
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(OfferHelper::new(known_names)));
        Ok(Self { editor })
    }

    pub fn readline(&mut self, prompt: &str) -> std::result::Result<String, ReadlineError> {
        let line = self.editor.readline(prompt)?;
        if !line.trim().is_empty() {
            let _ = self.editor.add_history_entry(line.as_str());
        }
        Ok(line)
    }

    /// Make a freshly entered bank name available for completion.
    pub fn remember(&mut self, name: &str) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.extend(&[name]);
        }
    }

    /// Utility for tests to inspect completions without invoking terminal input.
    pub fn completions(&self, line: &str) -> Vec<String> {
        if let Some(helper) = self.editor.helper() {
            let pos = line.len();
            let history = self.editor.history();
            if let Ok((_, pairs)) = helper.complete(line, pos, &Context::new(history)) {
                return pairs.into_iter().map(|p| p.replacement).collect();
            }
        }
        Vec::new()
    }
}

impl LineSource for Readline {
    fn read_line(&mut self, prompt: &str) -> std::result::Result<String, OfferError> {
        match self.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => {
                Err(OfferError::InputClosed)
            }
            Err(ReadlineError::Io(e)) => Err(OfferError::Io(e)),
            Err(e) => Err(OfferError::Io(std::io::Error::other(e.to_string()))),
        }
    }

    fn offer_recorded(&mut self, name: &str) {
        self.remember(name);
    }
}
