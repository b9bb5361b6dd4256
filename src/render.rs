// src/render.rs - Serializes a command list into FluentNao chain text
use crate::command::Command;
use crate::joints::JointGroup;
use serde::{Deserialize, Serialize};

/// Marker the FluentNao runtime reads as "run this chain synchronously".
pub const DEFAULT_BLOCKING_SUFFIX: &str = ".go()";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub is_blocking: bool,
    /// Chain root written verbatim in front of the chain, e.g. `nao.`.
    pub fluentnao: String,
    pub blocking_suffix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            is_blocking: false,
            fluentnao: String::new(),
            blocking_suffix: DEFAULT_BLOCKING_SUFFIX.to_string(),
        }
    }
}

/// Each command's name as written in the chain: a classified command is
/// qualified with its family when it opens the chain or follows a command of
/// another family, and bare otherwise.
pub fn chain_names(commands: &[Command]) -> Vec<String> {
    let mut previous: Option<JointGroup> = None;
    commands
        .iter()
        .map(|command| {
            let name = match command.group {
                Some(group) if previous != Some(group) => command.qualified_name(),
                _ => command.name.clone(),
            };
            previous = command.group;
            name
        })
        .collect()
}

pub fn commands_to_text(commands: &[Command], options: &RenderOptions) -> String {
    if commands.is_empty() {
        return String::new();
    }

    let chain = chain_names(commands)
        .into_iter()
        .zip(commands)
        .map(|(name, command)| {
            let parameters: Vec<String> = command
                .parameters
                .iter()
                .map(|p| format_parameter(*p))
                .collect();
            format!("{}({})", name, parameters.join(","))
        })
        .collect::<Vec<_>>()
        .join(".");

    let mut text = String::with_capacity(chain.len() + options.fluentnao.len() + 8);
    text.push_str(&options.fluentnao);
    text.push_str(&chain);
    if options.is_blocking {
        text.push_str(&options.blocking_suffix);
    }
    text
}

fn format_parameter(value: f64) -> String {
    // -0 would otherwise print as "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}", value)
}
