use std::fmt;

/// Relation types the exporter adds between work items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Child -> parent (reverse hierarchy link)
    Parent,
    /// Story -> story it depends on
    Dependency,
}

impl RelationKind {
    /// Relation type reference name.
    pub fn rel(&self) -> &'static str {
        match self {
            Self::Parent => "System.LinkTypes.Hierarchy-Reverse",
            Self::Dependency => "System.LinkTypes.Dependency",
        }
    }

    /// Comment attribute stored on the relation.
    pub fn comment(&self) -> &'static str {
        match self {
            Self::Parent => "Parent",
            Self::Dependency => "Depends on this story",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parent => f.write_str("parent"),
            Self::Dependency => f.write_str("dependency"),
        }
    }
}
