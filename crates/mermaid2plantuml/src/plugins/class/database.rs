//! Class diagram database
//!
//! Stores parsed class blocks and relationship lines for class diagrams.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Visibility modifier for class members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public, // +
    Private,   // -
    Protected, // #
    Package,   // ~
}

impl Visibility {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Visibility::Public),
            '-' => Some(Visibility::Private),
            '#' => Some(Visibility::Protected),
            '~' => Some(Visibility::Package),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Private => '-',
            Visibility::Protected => '#',
            Visibility::Package => '~',
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Class kind marker written as `<<name>>` inside a class body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stereotype {
    Enumeration,
    Interface,
    Abstract,
}

impl Stereotype {
    /// Recognize a trimmed body line such as `<<interface>>`.
    ///
    /// Matching ignores ASCII case; callers keep the original line text.
    pub fn from_line(line: &str) -> Option<Self> {
        let inner = line.strip_prefix("<<")?.strip_suffix(">>")?.trim();
        if inner.eq_ignore_ascii_case("enumeration") {
            Some(Stereotype::Enumeration)
        } else if inner.eq_ignore_ascii_case("interface") {
            Some(Stereotype::Interface)
        } else if inner.eq_ignore_ascii_case("abstract") {
            Some(Stereotype::Abstract)
        } else {
            None
        }
    }
}

/// A class member (attribute or method)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMember {
    Attribute {
        visibility: Visibility,
        name: String,
        member_type: String,
    },
    Method {
        visibility: Visibility,
        name: String,
        parameters: String,
    },
}

impl ClassMember {
    pub fn attribute(name: impl Into<String>, member_type: impl Into<String>) -> Self {
        Self::Attribute {
            visibility: Visibility::default(),
            name: name.into(),
            member_type: member_type.into(),
        }
    }

    pub fn method(name: impl Into<String>, parameters: impl Into<String>) -> Self {
        Self::Method {
            visibility: Visibility::default(),
            name: name.into(),
            parameters: parameters.into(),
        }
    }

    pub fn with_visibility(mut self, v: Visibility) -> Self {
        match &mut self {
            Self::Attribute { visibility, .. } | Self::Method { visibility, .. } => *visibility = v,
        }
        self
    }

    pub fn visibility(&self) -> Visibility {
        match self {
            Self::Attribute { visibility, .. } | Self::Method { visibility, .. } => *visibility,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Attribute { name, .. } | Self::Method { name, .. } => name,
        }
    }

    pub fn is_method(&self) -> bool {
        matches!(self, Self::Method { .. })
    }
}

/// Canonical PlantUML member text: `+name: Type`, `+name()` or `+name(args)`.
impl fmt::Display for ClassMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute {
                visibility,
                name,
                member_type,
            } => write!(f, "{}{}: {}", visibility, name, member_type),
            Self::Method {
                visibility,
                name,
                parameters,
            } => write!(f, "{}{}({})", visibility, name, parameters),
        }
    }
}

/// The parsed body of one class block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDefinition {
    /// Formatted member lines in source order
    pub members: Vec<String>,
    /// Set once `<<enumeration>>` is seen; later lines are enum values
    pub is_enum: bool,
    /// First recognized stereotype in the block
    pub stereotype: Option<Stereotype>,
}

impl ClassDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_member(&mut self, member: &ClassMember) {
        self.members.push(member.to_string());
    }

    /// Record a stereotype line verbatim as a member marker
    pub fn add_stereotype(&mut self, stereotype: Stereotype, line: &str) {
        if stereotype == Stereotype::Enumeration {
            self.is_enum = true;
        }
        self.stereotype.get_or_insert(stereotype);
        self.members.push(line.to_string());
    }

    pub fn add_enum_value(&mut self, value: &str) {
        self.members.push(value.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Relationship type between classes, derived from the operator glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipKind {
    Inheritance,   // <|--  --|>
    Realization,   // <|..  ..|>
    Composition,   // *--  --*
    Aggregation,   // o--  --o
    Association,   // -->  <--
    Dependency,    // ..>  <..
    Bidirectional, // <-->
    Link,          // --
    DashedLink,    // ..
    Other,
}

impl RelationshipKind {
    /// Classify an operator glyph run such as `<|--` or `..>`.
    pub fn from_operator(operator: &str) -> Self {
        let dashed = operator.contains("..");
        if operator == "<-->" {
            RelationshipKind::Bidirectional
        } else if operator.contains("<|") || operator.contains("|>") {
            if dashed {
                RelationshipKind::Realization
            } else {
                RelationshipKind::Inheritance
            }
        } else if operator.contains('*') {
            RelationshipKind::Composition
        } else if operator.contains('o') {
            RelationshipKind::Aggregation
        } else if operator.contains('<') || operator.contains('>') {
            if dashed {
                RelationshipKind::Dependency
            } else {
                RelationshipKind::Association
            }
        } else if dashed {
            RelationshipKind::DashedLink
        } else if operator.contains("--") {
            RelationshipKind::Link
        } else {
            RelationshipKind::Other
        }
    }
}

/// A relationship between classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub source: String,
    pub target: String,
    /// Operator glyphs exactly as written
    pub operator: String,
    pub kind: RelationshipKind,
    pub source_multiplicity: Option<String>,
    pub target_multiplicity: Option<String>,
    pub label: Option<String>,
}

impl Relationship {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        operator: impl Into<String>,
    ) -> Self {
        let operator = operator.into();
        Self {
            source: source.into(),
            target: target.into(),
            kind: RelationshipKind::from_operator(&operator),
            operator,
            source_multiplicity: None,
            target_multiplicity: None,
            label: None,
        }
    }

    pub fn with_multiplicities(
        mut self,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.source_multiplicity = Some(source.into());
        self.target_multiplicity = Some(target.into());
        self
    }

    pub fn with_kind(mut self, kind: RelationshipKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Class diagram database
///
/// Classes are keyed by name in a sorted map, so iteration is always in
/// ascending name order. Relationship lines keep their encounter order.
#[derive(Debug, Clone, Default)]
pub struct ClassDatabase {
    classes: BTreeMap<String, ClassDefinition>,
    relation_lines: Vec<String>,
    relationships: Vec<Relationship>,
    referenced: BTreeSet<String>,
}

impl ClassDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a class block; a later block with the same name replaces it.
    pub fn add_class(&mut self, name: impl Into<String>, definition: ClassDefinition) {
        self.classes.insert(name.into(), definition);
    }

    /// Store a relationship line verbatim, plus its parsed form if any.
    pub fn add_relation_line(
        &mut self,
        line: impl Into<String>,
        parsed: Option<Relationship>,
        class_names: impl IntoIterator<Item = String>,
    ) {
        self.relation_lines.push(line.into());
        if let Some(relationship) = parsed {
            self.relationships.push(relationship);
        }
        self.referenced.extend(class_names);
    }

    /// Classes in ascending name order
    pub fn classes(&self) -> impl Iterator<Item = (&str, &ClassDefinition)> {
        self.classes.iter().map(|(name, def)| (name.as_str(), def))
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn get_class(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.get(name)
    }

    /// Relationship lines exactly as written, in encounter order
    pub fn relation_lines(&self) -> &[String] {
        &self.relation_lines
    }

    /// Relationship lines the relationship parser could structure
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relation_lines.len()
    }

    /// Whether a class name is defined by a block or referenced by a relation
    pub fn is_known(&self, name: &str) -> bool {
        self.classes.contains_key(name) || self.referenced.contains(name)
    }

    /// Names referenced by relations that never got a class block
    pub fn undefined_classes(&self) -> impl Iterator<Item = &str> {
        self.referenced
            .iter()
            .filter(|name| !self.classes.contains_key(name.as_str()))
            .map(String::as_str)
    }

    /// Append another database: its classes replace same-named ones and its
    /// relationship lines follow the existing ones.
    pub fn extend(&mut self, other: ClassDatabase) {
        self.classes.extend(other.classes);
        self.relation_lines.extend(other.relation_lines);
        self.relationships.extend(other.relationships);
        self.referenced.extend(other.referenced);
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.relation_lines.is_empty()
    }
}
