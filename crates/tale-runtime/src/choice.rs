//! Choice points in content and recorded choices.

use tale_path::Path;

/// Bitmask describing how a choice point is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChoiceFlags(pub u32);

impl ChoiceFlags {
    pub const HAS_CONDITION: u32 = 1;
    pub const HAS_START_CONTENT: u32 = 2;
    pub const HAS_CHOICE_ONLY_CONTENT: u32 = 4;
    pub const IS_INVISIBLE_DEFAULT: u32 = 8;
    pub const ONCE_ONLY: u32 = 16;

    pub fn bits(self) -> u32 {
        self.0
    }

    fn has(self, bit: u32) -> bool {
        self.0 & bit != 0
    }

    pub fn has_condition(self) -> bool {
        self.has(Self::HAS_CONDITION)
    }

    pub fn has_start_content(self) -> bool {
        self.has(Self::HAS_START_CONTENT)
    }

    pub fn has_choice_only_content(self) -> bool {
        self.has(Self::HAS_CHOICE_ONLY_CONTENT)
    }

    pub fn is_invisible_default(self) -> bool {
        self.has(Self::IS_INVISIBLE_DEFAULT)
    }

    pub fn once_only(self) -> bool {
        self.has(Self::ONCE_ONLY)
    }
}

/// A potential branch offered to the player.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChoicePoint {
    /// Content entered when the choice is taken.
    pub path_on_choice: Path,
    pub flags: ChoiceFlags,
}

impl ChoicePoint {
    pub fn new(path_on_choice: Path, flags: ChoiceFlags) -> Self {
        Self {
            path_on_choice,
            flags,
        }
    }
}

/// A choice already generated from a choice point, as recorded in older
/// save data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Choice {
    pub text: String,
    pub index: i64,
    pub original_choice_path: String,
    pub original_thread_index: i64,
}
