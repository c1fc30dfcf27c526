//! Zerlegt einen Pfad-String in (Befehlsbuchstabe, Argumente)-Tokens.

use regex::Regex;
use std::sync::LazyLock;

/// Ein Buchstabe beginnt ein Token und nimmt alle folgenden Nicht-Buchstaben mit.
static COMMAND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z][^a-zA-Z]*").expect("statisches Regex-Pattern ist gültig")
});

static ARG_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,]+").expect("statisches Regex-Pattern ist gültig"));

/// Ein Befehl mit seinen rohen numerischen Argumenten.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Befehlsbuchstabe wie im Quelltext (Groß-/Kleinschreibung erhalten)
    pub letter: char,
    /// Alle gültigen Zahlen hinter dem Buchstaben
    pub args: Vec<f64>,
}

impl Token {
    /// Ob der Befehl relativ ist (Kleinbuchstabe).
    pub fn is_relative(&self) -> bool {
        self.letter.is_ascii_lowercase()
    }
}

/// Tokenisiert einen Pfad-String.
///
/// Wirft nie einen Fehler: Nicht-numerische Argumente werden verworfen,
/// Text vor dem ersten Befehlsbuchstaben wird ignoriert.
pub fn tokenize(d: &str) -> Vec<Token> {
    COMMAND_PATTERN
        .find_iter(d)
        .filter_map(|m| {
            let text = m.as_str();
            let letter = text.chars().next()?;
            let args = parse_args(&text[letter.len_utf8()..]);
            Some(Token { letter, args })
        })
        .collect()
}

fn parse_args(text: &str) -> Vec<f64> {
    ARG_SEPARATOR
        .split(text.trim())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .collect()
}
