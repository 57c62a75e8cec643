//! Story path utilities.
//!
//! A path is a dotted address into the container tree, e.g. `knot.stitch.0`
//! or `.^.^.c-1`. Components are either named children or content indices;
//! `^` addresses the parent and a leading `.` marks the path as relative.
//!
//! Parsing never fails: every string maps to a path and back unchanged.

use std::fmt;

/// Name of the component that addresses the parent container.
pub const PARENT_ID: &str = "^";

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// Position inside a container's ordered content.
    Index(usize),
    /// Named child, or [`PARENT_ID`].
    Name(String),
}

impl Component {
    /// Parses one component. Only canonical decimal numbers (no sign, no
    /// leading zeros) become indices so that the text form is preserved.
    pub fn parse(s: &str) -> Component {
        if is_canonical_index(s) {
            if let Ok(index) = s.parse::<usize>() {
                return Component::Index(index);
            }
        }
        Component::Name(s.to_string())
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Component::Index(_))
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, Component::Name(name) if name == PARENT_ID)
    }

    pub fn parent() -> Component {
        Component::Name(PARENT_ID.to_string())
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Index(i) => write!(f, "{i}"),
            Component::Name(name) => f.write_str(name),
        }
    }
}

fn is_canonical_index(s: &str) -> bool {
    match s.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    }
}

/// Hierarchical address into the container tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    components: Vec<Component>,
    is_relative: bool,
}

impl Path {
    pub fn new(components: Vec<Component>, is_relative: bool) -> Self {
        Self {
            components,
            is_relative,
        }
    }

    /// Parses a dotted path string.
    ///
    /// Examples:
    /// - `"" -> []`
    /// - `"a.b.0" -> [Name(a), Name(b), Index(0)]`
    /// - `".^.x" -> relative [Name(^), Name(x)]`
    pub fn parse(s: &str) -> Self {
        let (is_relative, body) = match s.strip_prefix('.') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let components = if body.is_empty() {
            Vec::new()
        } else {
            body.split('.').map(Component::parse).collect()
        };
        Self {
            components,
            is_relative,
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn is_relative(&self) -> bool {
        self.is_relative
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn head(&self) -> Option<&Component> {
        self.components.first()
    }

    /// Path without its first component. Relativity is kept.
    pub fn tail(&self) -> Path {
        Path {
            components: self.components.iter().skip(1).cloned().collect(),
            is_relative: self.is_relative,
        }
    }

    pub fn last(&self) -> Option<&Component> {
        self.components.last()
    }

    pub fn contains_named_component(&self) -> bool {
        self.components.iter().any(|c| !c.is_index())
    }

    /// Appends `other` to this path. A relative `other` first climbs one
    /// level for every leading parent component it carries.
    pub fn join(&self, other: &Path) -> Path {
        let mut components = self.components.clone();
        let mut rest = other.components.as_slice();
        if other.is_relative {
            while let Some((first, tail)) = rest.split_first() {
                if !first.is_parent() {
                    break;
                }
                components.pop();
                rest = tail;
            }
        }
        components.extend(rest.iter().cloned());
        Path {
            components,
            is_relative: self.is_relative,
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_relative {
            f.write_str(".")?;
        }
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format_matrix() {
        assert!(Path::parse("").is_empty());
        assert_eq!(
            Path::parse("a.b.0").components(),
            &[
                Component::Name("a".into()),
                Component::Name("b".into()),
                Component::Index(0)
            ]
        );
        let rel = Path::parse(".^.c-1");
        assert!(rel.is_relative());
        assert!(rel.head().unwrap().is_parent());
        assert_eq!(rel.to_string(), ".^.c-1");
        assert_eq!(Path::parse("knot.007").to_string(), "knot.007");
        assert_eq!(Path::parse("knot.007").last(), Some(&Component::Name("007".into())));
    }

    #[test]
    fn join_resolves_parent_steps() {
        let base = Path::parse("knot.stitch.3");
        let joined = base.join(&Path::parse(".^.^.other"));
        assert_eq!(joined.to_string(), "knot.other");
        assert_eq!(base.tail().to_string(), "stitch.3");
    }
}
