use crate::error::ArenaResult;
use crate::scorer::MovementRules;
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub output: OutputParams,
    #[command(flatten)]
    pub rules: RuleOverrides,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputParams {
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Rule values that take precedence over the movement catalog.
#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RuleOverrides {
    #[arg(long)]
    pub max_colors: Option<f64>,
    #[arg(long)]
    pub max_elements: Option<f64>,
    #[arg(long)]
    pub min_negative_space: Option<f64>,
}

impl RuleOverrides {
    pub fn is_empty(&self) -> bool {
        self.max_colors.is_none() && self.max_elements.is_none() && self.min_negative_space.is_none()
    }

    pub fn apply(&self, rules: &mut MovementRules) {
        if let Some(v) = self.max_colors {
            rules.set("max_colors", v);
        }
        if let Some(v) = self.max_elements {
            rules.set("max_elements", v);
        }
        if let Some(v) = self.min_negative_space {
            rules.set("min_negative_space", v);
        }
    }
}

impl Config {
    /// Reads a JSON config file. Missing keys take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ArenaResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Layers values typed on the command line over values loaded from a file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(output.format);
        update_if_present!(rules.max_colors);
        update_if_present!(rules.max_elements);
        update_if_present!(rules.min_negative_space);
    }
}
