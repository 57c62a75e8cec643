//! Control command mnemonics.
//!
//! [`mnemonic`] is an exhaustive match, so a command without a mnemonic does
//! not compile. The reverse lookup is built once per process by
//! [`MnemonicTable::global`], which also checks that the table is a
//! bijection over [`CommandType::ALL`] before any token is decoded.

use std::collections::HashMap;
use std::sync::OnceLock;

use tale_runtime::CommandType;
use tracing::debug;

use crate::error::{CodecError, Result};

/// Wire mnemonic of a control command.
pub fn mnemonic(command: CommandType) -> &'static str {
    match command {
        CommandType::EvalStart => "ev",
        CommandType::EvalOutput => "out",
        CommandType::EvalEnd => "/ev",
        CommandType::Duplicate => "du",
        CommandType::PopEvaluatedValue => "pop",
        CommandType::PopFunction => "~ret",
        CommandType::PopTunnel => "->->",
        CommandType::BeginString => "str",
        CommandType::EndString => "/str",
        CommandType::NoOp => "nop",
        CommandType::ChoiceCount => "choiceCnt",
        CommandType::TurnsSince => "turns",
        CommandType::VisitIndex => "visit",
        CommandType::SequenceShuffleIndex => "seq",
        CommandType::StartThread => "thread",
        CommandType::Done => "done",
        CommandType::End => "end",
    }
}

/// Validated two-way mapping between commands and mnemonics.
#[derive(Debug, Clone)]
pub struct MnemonicTable {
    names: [&'static str; CommandType::COUNT],
    by_name: HashMap<&'static str, CommandType>,
}

impl MnemonicTable {
    /// Process-wide table, built and validated on first use.
    pub fn global() -> Result<&'static MnemonicTable> {
        static TABLE: OnceLock<std::result::Result<MnemonicTable, String>> = OnceLock::new();
        TABLE
            .get_or_init(|| {
                MnemonicTable::from_entries(CommandType::ALL.iter().map(|&c| (c, mnemonic(c))))
                    .map_err(|e| match e {
                        CodecError::IncompleteOpcodeTable(msg) => msg,
                        other => other.to_string(),
                    })
            })
            .as_ref()
            .map_err(|msg| CodecError::IncompleteOpcodeTable(msg.clone()))
    }

    /// Builds a table from explicit entries. Every command must appear
    /// exactly once with a non-empty mnemonic that no other command uses.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (CommandType, &'static str)>,
    ) -> Result<Self> {
        let mut slots: [Option<&'static str>; CommandType::COUNT] = [None; CommandType::COUNT];
        let mut by_name = HashMap::with_capacity(CommandType::COUNT);

        for (command, name) in entries {
            if name.is_empty() {
                return Err(CodecError::IncompleteOpcodeTable(format!(
                    "{command:?} has an empty mnemonic"
                )));
            }
            let slot = slots.get_mut(command.index()).ok_or_else(|| {
                CodecError::IncompleteOpcodeTable(format!("{command:?} is out of range"))
            })?;
            if slot.replace(name).is_some() {
                return Err(CodecError::IncompleteOpcodeTable(format!(
                    "{command:?} has more than one mnemonic"
                )));
            }
            if let Some(other) = by_name.insert(name, command) {
                return Err(CodecError::IncompleteOpcodeTable(format!(
                    "mnemonic {name:?} is shared by {other:?} and {command:?}"
                )));
            }
        }

        let mut names = [""; CommandType::COUNT];
        for (index, slot) in slots.iter().enumerate() {
            names[index] = slot.ok_or_else(|| {
                let command = CommandType::from_index(index)
                    .map(|c| format!("{c:?}"))
                    .unwrap_or_else(|| format!("#{index}"));
                CodecError::IncompleteOpcodeTable(command)
            })?;
        }

        debug!(commands = CommandType::COUNT, "built control command mnemonic table");
        Ok(Self { names, by_name })
    }

    pub fn command_for(&self, name: &str) -> Option<CommandType> {
        self.by_name.get(name).copied()
    }

    pub fn mnemonic_for(&self, command: CommandType) -> &'static str {
        self.names[command.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (CommandType, &'static str)> + '_ {
        CommandType::ALL
            .iter()
            .map(move |&command| (command, self.mnemonic_for(command)))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_table_is_complete() {
        let table = MnemonicTable::global().unwrap();
        assert_eq!(table.len(), CommandType::COUNT);
        for command in CommandType::ALL {
            assert_eq!(table.command_for(mnemonic(command)), Some(command));
        }
        assert_eq!(table.command_for("->->"), Some(CommandType::PopTunnel));
        assert_eq!(table.command_for("~ret"), Some(CommandType::PopFunction));
        assert_eq!(table.command_for("bogus"), None);
    }

    #[test]
    fn missing_entry_is_rejected() {
        let entries = CommandType::ALL
            .iter()
            .filter(|&&c| c != CommandType::Done)
            .map(|&c| (c, mnemonic(c)));
        let err = MnemonicTable::from_entries(entries).unwrap_err();
        assert_eq!(err, CodecError::IncompleteOpcodeTable("Done".to_string()));
    }

    #[test]
    fn duplicate_mnemonic_is_rejected() {
        let entries = CommandType::ALL.iter().map(|&c| {
            if c == CommandType::End {
                (c, "done")
            } else {
                (c, mnemonic(c))
            }
        });
        assert!(matches!(
            MnemonicTable::from_entries(entries),
            Err(CodecError::IncompleteOpcodeTable(_))
        ));
    }

    #[test]
    fn empty_mnemonic_is_rejected() {
        let entries = CommandType::ALL.iter().map(|&c| {
            if c == CommandType::NoOp {
                (c, "")
            } else {
                (c, mnemonic(c))
            }
        });
        assert!(MnemonicTable::from_entries(entries).is_err());
    }
}
