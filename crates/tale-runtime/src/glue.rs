/// Whitespace-joining marker between adjacent pieces of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlueType {
    Bidirectional,
    Left,
    Right,
}

impl GlueType {
    pub fn is_left(self) -> bool {
        matches!(self, GlueType::Left)
    }

    pub fn is_right(self) -> bool {
        matches!(self, GlueType::Right)
    }
}
