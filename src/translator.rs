// src/translator.rs - Frame-to-text translator with its configuration
use crate::classifier::PoseClassifier;
use crate::command::{Command, CommandList};
use crate::error::Result;
use crate::joints::{JointFrame, JointGroup, JointGroupSpec};
use crate::render::{self, RenderOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Seconds written as the first parameter of every offset-carrying command.
    pub duration: f64,
    /// Families translated by `translate`, in chain order.
    pub group_order: Vec<JointGroup>,
    pub render: RenderOptions,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            duration: 0.0,
            group_order: JointGroup::ALL.to_vec(),
            render: RenderOptions::default(),
        }
    }
}

impl TranslatorConfig {
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Stateless: every call depends only on its arguments and the config, so
/// one translator can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct FluentNaoTranslator {
    config: TranslatorConfig,
    classifier: PoseClassifier,
}

impl FluentNaoTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TranslatorConfig) -> Self {
        let classifier = PoseClassifier::new(config.duration);
        Self { config, classifier }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn detect_command(&self, frame: &JointFrame, group_spec: &JointGroupSpec) -> CommandList {
        self.classifier.detect_command(frame, group_spec)
    }

    /// Renders with the configured blocking suffix; `fluentnao` is the chain root.
    pub fn commands_to_text(&self, commands: &[Command], is_blocking: bool, fluentnao: &str) -> String {
        let options = RenderOptions {
            is_blocking,
            fluentnao: fluentnao.to_string(),
            blocking_suffix: self.config.render.blocking_suffix.clone(),
        };
        render::commands_to_text(commands, &options)
    }

    /// Commands for every configured family, concatenated in `group_order`.
    pub fn translate_commands(&self, frame: &JointFrame) -> CommandList {
        let mut commands = CommandList::new();
        for group in &self.config.group_order {
            let spec = JointGroupSpec::for_group(*group);
            commands.extend(self.classifier.detect_group(frame, &spec, *group));
        }
        debug!(joints = frame.len(), commands = commands.len(), "translated frame");
        commands
    }

    pub fn translate(&self, frame: &JointFrame) -> String {
        render::commands_to_text(&self.translate_commands(frame), &self.config.render)
    }
}
