//! Registry of the built-in operators story content can call.

/// Built-in operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeOp {
    Add,
    Subtract,
    Divide,
    Multiply,
    Mod,
    Negate,
    Equal,
    Greater,
    Less,
    GreaterThanOrEquals,
    LessThanOrEquals,
    NotEquals,
    Not,
    And,
    Or,
    Min,
    Max,
}

impl NativeOp {
    pub const ALL: [NativeOp; 17] = [
        NativeOp::Add,
        NativeOp::Subtract,
        NativeOp::Divide,
        NativeOp::Multiply,
        NativeOp::Mod,
        NativeOp::Negate,
        NativeOp::Equal,
        NativeOp::Greater,
        NativeOp::Less,
        NativeOp::GreaterThanOrEquals,
        NativeOp::LessThanOrEquals,
        NativeOp::NotEquals,
        NativeOp::Not,
        NativeOp::And,
        NativeOp::Or,
        NativeOp::Min,
        NativeOp::Max,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NativeOp::Add => "+",
            NativeOp::Subtract => "-",
            NativeOp::Divide => "/",
            NativeOp::Multiply => "*",
            NativeOp::Mod => "%",
            NativeOp::Negate => "_",
            NativeOp::Equal => "==",
            NativeOp::Greater => ">",
            NativeOp::Less => "<",
            NativeOp::GreaterThanOrEquals => ">=",
            NativeOp::LessThanOrEquals => "<=",
            NativeOp::NotEquals => "!=",
            NativeOp::Not => "!",
            NativeOp::And => "&&",
            NativeOp::Or => "||",
            NativeOp::Min => "MIN",
            NativeOp::Max => "MAX",
        }
    }

    pub fn parse_str(s: &str) -> Option<NativeOp> {
        match s {
            "+" => Some(NativeOp::Add),
            "-" => Some(NativeOp::Subtract),
            "/" => Some(NativeOp::Divide),
            "*" => Some(NativeOp::Multiply),
            "%" => Some(NativeOp::Mod),
            "_" => Some(NativeOp::Negate),
            "==" => Some(NativeOp::Equal),
            ">" => Some(NativeOp::Greater),
            "<" => Some(NativeOp::Less),
            ">=" => Some(NativeOp::GreaterThanOrEquals),
            "<=" => Some(NativeOp::LessThanOrEquals),
            "!=" => Some(NativeOp::NotEquals),
            "!" => Some(NativeOp::Not),
            "&&" => Some(NativeOp::And),
            "||" => Some(NativeOp::Or),
            "MIN" => Some(NativeOp::Min),
            "MAX" => Some(NativeOp::Max),
            _ => None,
        }
    }

    pub fn number_of_parameters(self) -> usize {
        match self {
            NativeOp::Negate | NativeOp::Not => 1,
            _ => 2,
        }
    }
}

/// Call of a built-in operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeFunctionCall {
    pub op: NativeOp,
}

impl NativeFunctionCall {
    pub fn exists_with_name(name: &str) -> bool {
        NativeOp::parse_str(name).is_some()
    }

    pub fn with_name(name: &str) -> Option<Self> {
        NativeOp::parse_str(name).map(|op| Self { op })
    }

    pub fn name(self) -> &'static str {
        self.op.as_str()
    }

    pub fn number_of_parameters(self) -> usize {
        self.op.number_of_parameters()
    }
}
