//! Entity/relationship schemas and their conversion into diagrams
//!
//! A schema is the typed description an ERD is drawn from: entities with
//! their attributes, and directed relationships between entities. The
//! built-in job-portal schema is [`Schema::job_portal`]; other schemas can be
//! loaded from YAML or JSON files:
//!
//! ```yaml
//! title: Library ERD
//! entities:
//!   - name: Book
//!     attributes:
//!       - { name: BookID, primary: true }
//!       - { name: AuthorID, foreign: true }
//!       - Title
//!   - name: Author
//!     attributes:
//!       - { name: AuthorID, primary: true }
//!       - Name
//! relationships:
//!   - { from: Author, to: Book }
//! ```

mod job_portal;

use crate::graph::{Diagram, ErdError, ErdResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Separator line between an entity's name and its attributes
pub const LABEL_RULE: &str = "----------";

/// One column of an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AttributeSpec")]
pub struct Attribute {
    pub name: String,
    pub primary: bool,
    pub foreign: bool,
}

/// File form of an attribute: a bare name, or a map with key flags
#[derive(Deserialize)]
#[serde(untagged)]
enum AttributeSpec {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        primary: bool,
        #[serde(default)]
        foreign: bool,
    },
}

impl From<AttributeSpec> for Attribute {
    fn from(spec: AttributeSpec) -> Self {
        match spec {
            AttributeSpec::Name(name) => Attribute::plain(name),
            AttributeSpec::Full { name, primary, foreign } => Attribute { name, primary, foreign },
        }
    }
}

impl Attribute {
    /// An attribute that is not part of any key
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary: false,
            foreign: false,
        }
    }

    /// A primary-key attribute
    pub fn primary(name: impl Into<String>) -> Self {
        Self {
            primary: true,
            ..Self::plain(name)
        }
    }

    /// A foreign-key attribute
    pub fn foreign(name: impl Into<String>) -> Self {
        Self {
            foreign: true,
            ..Self::plain(name)
        }
    }

    /// Mark as a foreign key as well
    pub fn and_foreign(mut self) -> Self {
        self.foreign = true;
        self
    }

    /// The attribute as it appears in a label, e.g. `SeekerID (PK, FK)`
    pub fn label_line(&self) -> String {
        match (self.primary, self.foreign) {
            (true, true) => format!("{} (PK, FK)", self.name),
            (true, false) => format!("{} (PK)", self.name),
            (false, true) => format!("{} (FK)", self.name),
            (false, false) => self.name.clone(),
        }
    }
}

/// A table in the schema, drawn as one node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute
    pub fn with(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Append several non-key attributes
    pub fn with_plain<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.extend(names.into_iter().map(Attribute::plain));
        self
    }

    /// Node label: name, rule, then one line per attribute
    pub fn label(&self) -> String {
        let mut lines = vec![self.name.clone(), LABEL_RULE.to_string()];
        lines.extend(self.attributes.iter().map(Attribute::label_line));
        lines.join("\n")
    }

    /// Primary-key attributes
    pub fn primary_keys(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter(|a| a.primary)
    }
}

/// A directed relationship between two entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub from: String,
    pub to: String,
}

impl Relationship {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A whole schema: what one diagram is drawn from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Diagram title, emitted as the DOT comment
    #[serde(default)]
    pub title: Option<String>,
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl Schema {
    /// The built-in online job portal schema
    pub fn job_portal() -> Self {
        job_portal::schema()
    }

    /// Parse a schema from YAML text
    pub fn from_yaml(text: &str) -> ErdResult<Self> {
        serde_yaml::from_str(text).map_err(|e| ErdError::Schema(format!("invalid YAML schema: {}", e)))
    }

    /// Parse a schema from JSON text
    pub fn from_json(text: &str) -> ErdResult<Self> {
        serde_json::from_str(text).map_err(|e| ErdError::Schema(format!("invalid JSON schema: {}", e)))
    }

    /// Load a schema file; `.json` is parsed as JSON, anything else as YAML
    pub fn from_path(path: impl AsRef<Path>) -> ErdResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        debug!(path = %path.display(), json = is_json, "loading schema");
        if is_json {
            Self::from_json(&text)
        } else {
            Self::from_yaml(&text)
        }
    }

    /// Find an entity by name
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Build the diagram: one node per entity, one edge per relationship
    pub fn to_diagram(&self) -> ErdResult<Diagram> {
        let mut diagram = match &self.title {
            Some(title) => Diagram::new().with_comment(title.clone()),
            None => Diagram::new(),
        };
        for entity in &self.entities {
            diagram.add_node(entity.name.as_str(), entity.label())?;
        }
        diagram.add_edges(
            self.relationships
                .iter()
                .map(|r| (r.from.as_str(), r.to.as_str())),
        )?;
        Ok(diagram)
    }
}
