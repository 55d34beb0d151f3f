//! Flags shared by the `humanize-ai` and `humanize-json` binaries.

use crate::config::HumanizeOptions;
use crate::error::HumanizeError;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default, Clone)]
pub struct TransformFlags {
    /// Do not remove hidden Unicode characters
    #[arg(long = "no-hidden")]
    pub no_hidden: bool,

    /// Do not remove trailing whitespace
    #[arg(long = "no-trailing")]
    pub no_trailing: bool,

    /// Do not transform non-breaking spaces
    #[arg(long = "no-nbs")]
    pub no_nbs: bool,

    /// Do not transform fancy dashes
    #[arg(long = "no-dashes")]
    pub no_dashes: bool,

    /// Do not transform fancy quotes
    #[arg(long = "no-quotes")]
    pub no_quotes: bool,

    /// Do not transform other symbols (e.g., …)
    #[arg(long = "no-other")]
    pub no_other: bool,

    /// Only keep keyboard-typeable characters
    #[arg(long)]
    pub keyboard_only: bool,

    /// Options file (default: humanize.config.json if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl TransformFlags {
    /// Flags can only narrow the transforms, except `--keyboard-only`, which adds the filter.
    pub fn apply(&self, base: HumanizeOptions) -> HumanizeOptions {
        HumanizeOptions {
            transform_hidden: base.transform_hidden && !self.no_hidden,
            transform_trailing_whitespace: base.transform_trailing_whitespace && !self.no_trailing,
            transform_nbs: base.transform_nbs && !self.no_nbs,
            transform_dashes: base.transform_dashes && !self.no_dashes,
            transform_quotes: base.transform_quotes && !self.no_quotes,
            transform_other: base.transform_other && !self.no_other,
            keyboard_only: base.keyboard_only || self.keyboard_only,
        }
    }

    /// Defaults, then the options file, then the flags.
    pub fn resolve(&self) -> Result<HumanizeOptions, HumanizeError> {
        let base = match &self.config {
            Some(path) => HumanizeOptions::load(path)?,
            None => HumanizeOptions::discover()?.unwrap_or_default(),
        };
        Ok(self.apply(base))
    }
}
