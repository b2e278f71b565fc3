//! Schema descriptions for the dynamic side.
//!
//! Each node type declares its fields through [`Transcode::describe`]. A
//! [`SchemaRegistry`] walks those declarations once from a root type and
//! keeps the result as an immutable value; callers own it and pass it by
//! reference to [`validate`](crate::schema::validate_visual). Nothing is
//! cached globally.

mod validate;

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use regex::Regex;

use crate::coercion::StringEnum;
use crate::container::Transcode;

pub use validate::{validate_node, validate_visual};

/// Declared shape of one dynamic-side field.
#[derive(Debug, Clone)]
pub enum FieldKind {
    String,
    Bool,
    Int,
    Float,
    Timestamp,
    Enum(&'static [&'static str]),
    StringList { min_items: usize, max_items: Option<usize> },
    StringSet { min_items: usize, max_items: Option<usize> },
    Block { child: ChildRef, min_items: usize, max_items: Option<usize> },
}

/// Extra predicate applied to a scalar field.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Length { min: usize, max: usize },
    Pattern(&'static str),
    IntRange { min: i64, max: i64 },
    FloatRange { min: f64, max: f64 },
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub required: bool,
    pub constraints: Vec<Constraint>,
}

/// Reference from a block field to the node type it nests.
#[derive(Clone, Copy)]
pub struct ChildRef {
    pub name: &'static str,
    register: fn(&mut SchemaRegistry),
}

impl fmt::Debug for ChildRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChildRef").field(&self.name).finish()
    }
}

impl FieldSpec {
    fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            required: false,
            constraints: Vec::new(),
        }
    }

    /// Mark the field required. For collections this also raises the lower
    /// bound to one item.
    pub fn required(mut self) -> Self {
        self.required = true;
        match &mut self.kind {
            FieldKind::StringList { min_items, .. }
            | FieldKind::StringSet { min_items, .. }
            | FieldKind::Block { min_items, .. } => *min_items = (*min_items).max(1),
            _ => {}
        }
        self
    }

    /// Item bounds for a collection or block field. Ignored on scalars.
    pub fn items(mut self, min: usize, max: usize) -> Self {
        match &mut self.kind {
            FieldKind::StringList {
                min_items,
                max_items,
            }
            | FieldKind::StringSet {
                min_items,
                max_items,
            }
            | FieldKind::Block {
                min_items,
                max_items,
                ..
            } => {
                *min_items = min;
                *max_items = Some(max);
            }
            _ => {}
        }
        self
    }

    pub fn max_items(self, max: usize) -> Self {
        let min = self.min_items();
        self.items(min, max)
    }

    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.constraints.push(Constraint::Length { min, max });
        self
    }

    pub fn pattern(mut self, pattern: &'static str) -> Self {
        self.constraints.push(Constraint::Pattern(pattern));
        self
    }

    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.constraints.push(Constraint::IntRange { min, max });
        self
    }

    pub fn float_range(mut self, min: f64, max: f64) -> Self {
        self.constraints.push(Constraint::FloatRange { min, max });
        self
    }

    pub fn min_items(&self) -> usize {
        match &self.kind {
            FieldKind::StringList { min_items, .. }
            | FieldKind::StringSet { min_items, .. }
            | FieldKind::Block { min_items, .. } => *min_items,
            _ => 0,
        }
    }

    /// Human-readable shape for diagnostics.
    pub fn expected(&self) -> &'static str {
        match &self.kind {
            FieldKind::String | FieldKind::Enum(_) | FieldKind::Timestamp => "string",
            FieldKind::Bool => "bool",
            FieldKind::Int => "int",
            FieldKind::Float => "number",
            FieldKind::StringList { .. } => "list of strings",
            FieldKind::StringSet { .. } => "set of strings",
            FieldKind::Block { .. } => "list of records",
        }
    }
}

/// Hex color written as `#RRGGBB`.
pub const COLOR_PATTERN: &str = "^#[0-9A-F]{6}$";

/// Identifier for visuals, fields and actions.
pub const ID_PATTERN: &str = r"^[\w\-]+$";

pub fn string() -> FieldSpec {
    FieldSpec::new(FieldKind::String)
}

/// A string restricted to [`COLOR_PATTERN`].
pub fn color() -> FieldSpec {
    string().pattern(COLOR_PATTERN)
}

/// A string restricted to [`ID_PATTERN`], 1..512 characters.
pub fn identifier() -> FieldSpec {
    string().length(1, 512).pattern(ID_PATTERN)
}

pub fn enumeration<E: StringEnum>() -> FieldSpec {
    FieldSpec::new(FieldKind::Enum(E::VALUES))
}

pub fn boolean() -> FieldSpec {
    FieldSpec::new(FieldKind::Bool)
}

pub fn int() -> FieldSpec {
    FieldSpec::new(FieldKind::Int)
}

pub fn float() -> FieldSpec {
    FieldSpec::new(FieldKind::Float)
}

pub fn timestamp() -> FieldSpec {
    FieldSpec::new(FieldKind::Timestamp)
}

pub fn string_list() -> FieldSpec {
    FieldSpec::new(FieldKind::StringList {
        min_items: 0,
        max_items: None,
    })
}

pub fn string_set() -> FieldSpec {
    FieldSpec::new(FieldKind::StringSet {
        min_items: 0,
        max_items: None,
    })
}

fn child<T: Transcode>() -> ChildRef {
    ChildRef {
        name: T::NAME,
        register: SchemaRegistry::register::<T>,
    }
}

/// A singular nested block: a sequence of at most one record.
pub fn block<T: Transcode>() -> FieldSpec {
    FieldSpec::new(FieldKind::Block {
        child: child::<T>(),
        min_items: 0,
        max_items: Some(1),
    })
}

/// A repeated nested block with no upper bound until [`FieldSpec::items`].
pub fn blocks<T: Transcode>() -> FieldSpec {
    FieldSpec::new(FieldKind::Block {
        child: child::<T>(),
        min_items: 0,
        max_items: None,
    })
}

/// Field declarations of one node type.
#[derive(Debug, Clone)]
pub struct NodeSchema {
    name: &'static str,
    fields: BTreeMap<&'static str, FieldSpec>,
    one_of: Option<&'static [&'static str]>,
}

impl NodeSchema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: BTreeMap::new(),
            one_of: None,
        }
    }

    pub fn field(mut self, key: &'static str, spec: FieldSpec) -> Self {
        self.fields.insert(key, spec);
        self
    }

    /// Declare that at most one of `alternatives` may be populated.
    pub fn one_of(mut self, alternatives: &'static [&'static str]) -> Self {
        self.one_of = Some(alternatives);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldSpec)> {
        self.fields.iter().map(|(key, spec)| (*key, spec))
    }

    pub fn alternatives(&self) -> Option<&'static [&'static str]> {
        self.one_of
    }

    fn children(&self) -> Vec<ChildRef> {
        self.fields
            .values()
            .filter_map(|spec| match &spec.kind {
                FieldKind::Block { child, .. } => Some(*child),
                _ => None,
            })
            .collect()
    }

    fn patterns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .values()
            .flat_map(|spec| spec.constraints.iter())
            .filter_map(|constraint| match constraint {
                Constraint::Pattern(p) => Some(*p),
                _ => None,
            })
    }
}

/// Every node schema reachable from a root type, plus compiled patterns.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    root: &'static str,
    nodes: BTreeMap<&'static str, NodeSchema>,
    patterns: HashMap<&'static str, Result<Regex, String>>,
}

impl SchemaRegistry {
    /// Registry rooted at the visual dispatch node.
    pub fn new() -> Self {
        Self::for_root::<crate::nodes::Visual>()
    }

    pub fn for_root<T: Transcode>() -> Self {
        let mut registry = Self {
            root: T::NAME,
            nodes: BTreeMap::new(),
            patterns: HashMap::new(),
        };
        registry.register::<T>();
        registry.compile_patterns();
        tracing::debug!(
            root = registry.root,
            nodes = registry.nodes.len(),
            patterns = registry.patterns.len(),
            "schema registry built"
        );
        registry
    }

    /// Add `T` and everything it nests. Already-known names are skipped.
    pub fn register<T: Transcode>(&mut self) {
        if self.nodes.contains_key(T::NAME) {
            return;
        }
        let node = T::describe(NodeSchema::new(T::NAME));
        let children = node.children();
        self.nodes.insert(T::NAME, node);
        for child in children {
            (child.register)(self);
        }
    }

    fn compile_patterns(&mut self) {
        let sources: Vec<&'static str> = self
            .nodes
            .values()
            .flat_map(NodeSchema::patterns)
            .collect();
        for source in sources {
            self.patterns
                .entry(source)
                .or_insert_with(|| Regex::new(source).map_err(|e| e.to_string()));
        }
    }

    pub fn root(&self) -> &'static str {
        self.root
    }

    pub fn node(&self, name: &str) -> Option<&NodeSchema> {
        self.nodes.get(name)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeSchema> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Compiled pattern, or the compile error text.
    pub fn pattern(&self, source: &str) -> Option<&Result<Regex, String>> {
        self.patterns.get(source)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;

    struct Leaf;

    impl Transcode for Leaf {
        const NAME: &'static str = "Leaf";

        fn expand(_: &Record) -> Option<Self> {
            Some(Leaf)
        }

        fn flatten(&self) -> Record {
            Record::new()
        }

        fn describe(node: NodeSchema) -> NodeSchema {
            node.field("color", color())
        }
    }

    struct Root;

    impl Transcode for Root {
        const NAME: &'static str = "Root";

        fn expand(_: &Record) -> Option<Self> {
            Some(Root)
        }

        fn flatten(&self) -> Record {
            Record::new()
        }

        fn describe(node: NodeSchema) -> NodeSchema {
            node.field("one", block::<Leaf>())
                .field("many", blocks::<Leaf>().max_items(3))
                .field("id", identifier().required())
        }
    }

    #[test]
    fn test_registry_walks_children_once() {
        let registry = SchemaRegistry::for_root::<Root>();
        assert_eq!(registry.root(), "Root");
        assert_eq!(registry.len(), 2);
        assert!(registry.node("Leaf").is_some());
    }

    #[test]
    fn test_patterns_are_compiled_at_build() {
        let registry = SchemaRegistry::for_root::<Root>();
        let color = registry.pattern(COLOR_PATTERN).unwrap().as_ref().unwrap();
        assert!(color.is_match("#1A2B3C"));
        assert!(!color.is_match("#1a2b3c"));
        assert!(registry.pattern(ID_PATTERN).unwrap().is_ok());
    }

    #[test]
    fn test_required_raises_min_items() {
        let spec = blocks::<Leaf>().max_items(4).required();
        assert_eq!(spec.min_items(), 1);
        assert!(matches!(
            spec.kind,
            FieldKind::Block {
                max_items: Some(4),
                ..
            }
        ));
    }

    #[test]
    fn test_max_items_keeps_lower_bound() {
        let spec = blocks::<Leaf>().items(2, 10).max_items(5);
        assert_eq!(spec.min_items(), 2);
    }
}
