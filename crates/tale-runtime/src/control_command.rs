//! Zero-payload VM opcodes.

/// Opcode of a [`ControlCommand`].
///
/// Discriminants are dense and start at zero; [`CommandType::ALL`] lists the
/// variants in discriminant order.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandType {
    EvalStart = 0,
    EvalOutput = 1,
    EvalEnd = 2,
    Duplicate = 3,
    PopEvaluatedValue = 4,
    PopFunction = 5,
    PopTunnel = 6,
    BeginString = 7,
    EndString = 8,
    NoOp = 9,
    ChoiceCount = 10,
    TurnsSince = 11,
    VisitIndex = 12,
    SequenceShuffleIndex = 13,
    StartThread = 14,
    Done = 15,
    End = 16,
}

impl CommandType {
    pub const COUNT: usize = 17;

    pub const ALL: [CommandType; CommandType::COUNT] = [
        CommandType::EvalStart,
        CommandType::EvalOutput,
        CommandType::EvalEnd,
        CommandType::Duplicate,
        CommandType::PopEvaluatedValue,
        CommandType::PopFunction,
        CommandType::PopTunnel,
        CommandType::BeginString,
        CommandType::EndString,
        CommandType::NoOp,
        CommandType::ChoiceCount,
        CommandType::TurnsSince,
        CommandType::VisitIndex,
        CommandType::SequenceShuffleIndex,
        CommandType::StartThread,
        CommandType::Done,
        CommandType::End,
    ];

    pub fn from_index(index: usize) -> Option<CommandType> {
        CommandType::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A control opcode in story content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlCommand(pub CommandType);

impl ControlCommand {
    pub fn new(command: CommandType) -> Self {
        Self(command)
    }

    pub fn command_type(self) -> CommandType {
        self.0
    }

    pub fn eval_start() -> Self {
        Self(CommandType::EvalStart)
    }

    pub fn eval_end() -> Self {
        Self(CommandType::EvalEnd)
    }

    pub fn pop_function() -> Self {
        Self(CommandType::PopFunction)
    }

    pub fn pop_tunnel() -> Self {
        Self(CommandType::PopTunnel)
    }

    pub fn done() -> Self {
        Self(CommandType::Done)
    }

    pub fn end() -> Self {
        Self(CommandType::End)
    }
}

impl From<CommandType> for ControlCommand {
    fn from(command: CommandType) -> Self {
        Self(command)
    }
}
