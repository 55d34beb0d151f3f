use crate::config::HumanizeOptions;
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// The option switch that enables a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Hidden,
    TrailingWhitespace,
    Nbs,
    Dashes,
    Quotes,
    Other,
}

impl Gate {
    pub fn is_enabled(self, options: &HumanizeOptions) -> bool {
        match self {
            Gate::Hidden => options.transform_hidden,
            Gate::TrailingWhitespace => options.transform_trailing_whitespace,
            Gate::Nbs => options.transform_nbs,
            Gate::Dashes => options.transform_dashes,
            Gate::Quotes => options.transform_quotes,
            Gate::Other => options.transform_other,
        }
    }
}

#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub regex: Regex,
    pub replacement: &'static str,
    pub gate: Gate,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str, gate: Gate) -> Self {
        Rule {
            name,
            regex: Regex::new(pattern).unwrap(),
            replacement,
            gate,
        }
    }

    /// Replaces every match and returns the new text with the number of characters matched.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let matched: usize = self
            .regex
            .find_iter(text)
            .map(|m| m.as_str().chars().count())
            .sum();
        if matched == 0 {
            return (text.to_string(), 0);
        }
        let replaced = self.regex.replace_all(text, NoExpand(self.replacement));
        (replaced.into_owned(), matched)
    }
}

/// Every rule, in application order. Each rule sees the output of the one before it.
pub static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(
            "hidden",
            r"[\x{AD}\x{180E}\x{200B}-\x{200F}\x{202A}-\x{202E}\x{2060}\x{2066}-\x{2069}\x{FEFF}]",
            "",
            Gate::Hidden,
        ),
        // Only `\n` ends a line; a `\r` before it is not whitespace here.
        Rule::new(
            "trailing_whitespace",
            r"(?m)[ \t\x0B\x0C]+$",
            "",
            Gate::TrailingWhitespace,
        ),
        Rule::new("nbs", r"\x{A0}", " ", Gate::Nbs),
        Rule::new("dashes", r"[\x{2013}\x{2014}\x{2015}]", "-", Gate::Dashes),
        Rule::new(
            "double_quotes",
            r"[\x{201C}\x{201D}\x{AB}\x{BB}\x{201E}]",
            "\"",
            Gate::Quotes,
        ),
        Rule::new("single_quotes", r"[\x{2018}\x{2019}\x{2BC}]", "'", Gate::Quotes),
        Rule::new("ellipsis", r"\x{2026}", "...", Gate::Other),
    ]
});
