// src/command.rs - A single fluent call and its parameters
use crate::joints::JointGroup;
use serde::{Deserialize, Serialize};

/// One call in a fluent chain.
///
/// Classified commands carry the family they belong to and an unqualified
/// name (`up`, `left_out`). Whether the family prefix is written out depends
/// on the command's position in the chain, so that is left to the renderer.
/// Commands without a group are written exactly as named.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<JointGroup>,
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<f64>,
}

pub type CommandList = Vec<Command>;

impl Command {
    /// A command rendered verbatim, e.g. `Command::new("arms.forward", vec![0.0, 0.0, 0.0])`.
    pub fn new(name: impl Into<String>, parameters: Vec<f64>) -> Self {
        Self {
            group: None,
            name: name.into(),
            parameters,
        }
    }

    pub fn in_group(group: JointGroup, name: impl Into<String>, parameters: Vec<f64>) -> Self {
        Self {
            group: Some(group),
            name: name.into(),
            parameters,
        }
    }

    /// Name with the family prefix, as written at the head of a chain.
    pub fn qualified_name(&self) -> String {
        match self.group {
            Some(group) => format!("{}.{}", group, self.name),
            None => self.name.clone(),
        }
    }
}

impl<S: Into<String>> From<(S, Vec<f64>)> for Command {
    fn from((name, parameters): (S, Vec<f64>)) -> Self {
        Command::new(name, parameters)
    }
}
