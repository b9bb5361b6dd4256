//! Translates recorded NAO joint-angle frames into FluentNao command chains.
//!
//! A frame is split into joint families (arms, elbows, wrists, hands, head),
//! each family is classified into pose symbols with degree offsets, and the
//! resulting commands are rendered as one chain such as
//! `arms.left_up(0,2,0).right_out(0,0,-14).hands.close()`.
//!
//! ```
//! use fluentnao_translator::{FluentNaoTranslator, JointFrame, JointGroup, JointGroupSpec};
//!
//! let frame = JointFrame::new().with("LHand", 0.9).with("RHand", 0.8);
//! let translator = FluentNaoTranslator::new();
//! let commands = translator.detect_command(&frame, &JointGroupSpec::for_group(JointGroup::Hands));
//! assert_eq!(translator.commands_to_text(&commands, false, "nao."), "nao.hands.open()");
//! ```

pub mod angles;
pub mod classifier;
pub mod command;
pub mod error;
pub mod joints;
pub mod render;
pub mod translator;

pub use classifier::PoseClassifier;
pub use command::{Command, CommandList};
pub use error::{Result, TranslatorError};
pub use joints::{JointFrame, JointGroup, JointGroupSpec, Side};
pub use render::{chain_names, commands_to_text, RenderOptions};
pub use translator::{FluentNaoTranslator, TranslatorConfig};
