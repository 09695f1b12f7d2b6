//! vlark-par - Outline AST
//!
//! The outline records which design units a file declares and which
//! libraries and packages it pulls in. Unit bodies are not represented.

use std::fmt;

use vlark_util::SourcePosition;

/// Outline of one source file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ast {
    /// Design units and context items in source order
    pub design_units: Vec<DesignUnit>,

    /// Number of tokens consumed, end of file excluded
    pub token_count: usize,
}

impl Ast {
    /// Units of one kind, in source order
    pub fn units_of(&self, kind: DesignUnitKind) -> impl Iterator<Item = &DesignUnit> + '_ {
        self.design_units.iter().filter(move |unit| unit.kind == kind)
    }

    /// Find a unit by kind and name, ignoring case
    pub fn find(&self, kind: DesignUnitKind, name: &str) -> Option<&DesignUnit> {
        self.units_of(kind)
            .find(|unit| unit.name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(name)))
    }

    /// Returns true if no design unit or context item was found
    pub fn is_empty(&self) -> bool {
        self.design_units.is_empty()
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in &self.design_units {
            writeln!(f, "{}", unit)?;
        }
        write!(f, "({} tokens)", self.token_count)
    }
}

/// Kind of a recognised header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesignUnitKind {
    /// `library a, b;`
    Library,

    /// `use a.b.all;`
    Use,

    /// `context lib.ctx;`
    ContextReference,

    /// `context ctx is ... end context;`
    Context,

    /// `entity e is`
    Entity,

    /// `architecture a of e is`
    Architecture,

    /// `package p is`
    Package,

    /// `package body p is`
    PackageBody,

    /// `configuration c of e is`
    Configuration,
}

impl DesignUnitKind {
    /// Keyword spelling of the header
    pub const fn keyword(self) -> &'static str {
        match self {
            DesignUnitKind::Library => "library",
            DesignUnitKind::Use => "use",
            DesignUnitKind::ContextReference | DesignUnitKind::Context => "context",
            DesignUnitKind::Entity => "entity",
            DesignUnitKind::Architecture => "architecture",
            DesignUnitKind::Package => "package",
            DesignUnitKind::PackageBody => "package body",
            DesignUnitKind::Configuration => "configuration",
        }
    }

    /// Returns true for library, use and context-reference clauses
    pub const fn is_context_item(self) -> bool {
        matches!(
            self,
            DesignUnitKind::Library | DesignUnitKind::Use | DesignUnitKind::ContextReference
        )
    }

    /// Returns true for units that may be analysed on their own
    pub const fn is_primary(self) -> bool {
        matches!(
            self,
            DesignUnitKind::Entity
                | DesignUnitKind::Package
                | DesignUnitKind::Configuration
                | DesignUnitKind::Context
        )
    }
}

impl fmt::Display for DesignUnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One recognised header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignUnit {
    /// What was declared
    pub kind: DesignUnitKind,

    /// Declared name; `None` for context items
    pub name: Option<String>,

    /// Entity named after `of` in architectures and configurations
    pub of: Option<String>,

    /// Library names or selected names of a context item
    pub names: Vec<String>,

    /// Position of the header keyword
    pub position: SourcePosition,
}

impl DesignUnit {
    /// Create a unit header
    pub fn new(kind: DesignUnitKind, position: SourcePosition) -> Self {
        Self {
            kind,
            name: None,
            of: None,
            names: Vec::new(),
            position,
        }
    }

    /// Set the declared name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the entity an architecture or configuration belongs to
    pub fn with_of(mut self, of: impl Into<String>) -> Self {
        self.of = Some(of.into());
        self
    }
}

impl fmt::Display for DesignUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.kind)?;
        if let Some(name) = &self.name {
            write!(f, " {}", name)?;
        }
        if let Some(of) = &self.of {
            write!(f, " of {}", of)?;
        }
        if !self.names.is_empty() {
            write!(f, " {}", self.names.join(", "))?;
        }
        Ok(())
    }
}
