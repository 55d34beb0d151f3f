use crate::config::HumanizeOptions;
use crate::keyboard;
use crate::rules::RULES;
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Humanized {
    pub text: String,
    pub count: usize,
}

/// A [`Humanized`] result that also keeps how many characters each rule touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub count: usize,
    /// Rule name to characters affected, in the order the rules ran.
    pub by_rule: IndexMap<&'static str, usize>,
}

impl From<Report> for Humanized {
    fn from(report: Report) -> Self {
        Humanized {
            text: report.text,
            count: report.count,
        }
    }
}

pub const KEYBOARD_ONLY: &str = "keyboard_only";

pub fn humanize_string(text: &str, options: Option<&HumanizeOptions>) -> Humanized {
    humanize_report(text, options).into()
}

pub fn humanize_report(text: &str, options: Option<&HumanizeOptions>) -> Report {
    let defaults = HumanizeOptions::default();
    let options = options.unwrap_or(&defaults);

    let initial = Report {
        text: text.to_string(),
        count: 0,
        by_rule: IndexMap::new(),
    };
    let mut report = RULES
        .iter()
        .filter(|rule| rule.gate.is_enabled(options))
        .fold(initial, |mut report, rule| {
            let (next, delta) = rule.apply(&report.text);
            if delta > 0 {
                debug!("rule '{}' affected {} character(s)", rule.name, delta);
            }
            report.text = next;
            report.count += delta;
            report.by_rule.insert(rule.name, delta);
            report
        });

    if options.keyboard_only {
        let (kept, dropped) = keyboard::keep_keyboard_chars(&report.text);
        if dropped > 0 {
            debug!("keyboard-only filter dropped {} character(s)", dropped);
        }
        report.text = kept;
        report.count += dropped;
        report.by_rule.insert(KEYBOARD_ONLY, dropped);
    }

    report
}
