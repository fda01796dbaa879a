//! Lookup tables from element and relationship types to drawing generators.
//!
//! A [`ShapeRegistry`] is built once, populated with
//! [`register_default_shapes`] (or custom generators) and then shared by
//! reference for every render. It holds three tables:
//!
//! - element shapes, keyed by element type name (`BusinessActor`) or base
//!   shape name (`rounded-rectangle`)
//! - target arrowheads, keyed by relationship type name (`Serving`)
//! - line styles, keyed by relationship type name
//!
//! Each table has an optional default generator returned for unmapped keys.

use std::{collections::HashMap, fmt, rc::Rc};

use log::{debug, warn};

use archimate_svg_core::{
    draw::{
        ArrowHeadGenerator, ArrowHeadKind, BaseShape, LineStyle, LineStyleGenerator,
        RectangleShape, ShapeGenerator,
    },
    semantic::{ElementType, RelationshipType},
};

use crate::icon;

/// One keyed table of generators with an optional fallback.
struct GeneratorTable<G: ?Sized> {
    entries: HashMap<String, Rc<G>>,
    default: Option<Rc<G>>,
}

impl<G: ?Sized> GeneratorTable<G> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            default: None,
        }
    }

    fn register(&mut self, key: String, generator: Rc<G>) {
        self.entries.insert(key, generator);
    }

    fn register_default(&mut self, generator: Rc<G>) {
        self.default = Some(generator);
    }

    fn get(&self, key: &str) -> Option<Rc<G>> {
        self.entries
            .get(key)
            .or(self.default.as_ref())
            .map(Rc::clone)
    }

    fn get_registered(&self, key: &str) -> Option<Rc<G>> {
        self.entries.get(key).map(Rc::clone)
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.default = None;
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.default.is_none()
    }
}

impl<G: ?Sized> fmt::Debug for GeneratorTable<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.entries.keys().collect();
        keys.sort_unstable();
        f.debug_struct("GeneratorTable")
            .field("keys", &keys)
            .field("has_default", &self.default.is_some())
            .finish()
    }
}

/// Type-keyed generators for element shapes, arrowheads and line styles.
///
/// # Examples
///
/// ```
/// use archimate_svg::registry::ShapeRegistry;
///
/// let registry = ShapeRegistry::with_defaults();
/// assert!(registry.shape("BusinessActor").is_some());
///
/// // Unmapped types resolve to the default generator
/// assert!(registry.shape("SomethingElse").is_some());
/// ```
#[derive(Debug)]
pub struct ShapeRegistry {
    shapes: GeneratorTable<dyn ShapeGenerator>,
    arrow_heads: GeneratorTable<dyn ArrowHeadGenerator>,
    line_styles: GeneratorTable<dyn LineStyleGenerator>,
}

impl ShapeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            shapes: GeneratorTable::new(),
            arrow_heads: GeneratorTable::new(),
            line_styles: GeneratorTable::new(),
        }
    }

    /// Creates a registry populated by [`register_default_shapes`].
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        register_default_shapes(&mut registry);
        registry
    }

    pub fn register_shape(&mut self, key: impl Into<String>, generator: Rc<dyn ShapeGenerator>) {
        self.shapes.register(key.into(), generator);
    }

    pub fn register_default_shape(&mut self, generator: Rc<dyn ShapeGenerator>) {
        self.shapes.register_default(generator);
    }

    /// Returns the shape generator for `key`, or the default one.
    pub fn shape(&self, key: &str) -> Option<Rc<dyn ShapeGenerator>> {
        let generator = self.shapes.get(key);
        if generator.is_none() {
            warn!(key; "No shape generator registered and no default set");
        }
        generator
    }

    /// Returns the shape generator registered exactly under `key`, ignoring the default.
    pub fn registered_shape(&self, key: &str) -> Option<Rc<dyn ShapeGenerator>> {
        self.shapes.get_registered(key)
    }

    pub fn register_arrow_head(
        &mut self,
        key: impl Into<String>,
        generator: Rc<dyn ArrowHeadGenerator>,
    ) {
        self.arrow_heads.register(key.into(), generator);
    }

    pub fn register_default_arrow_head(&mut self, generator: Rc<dyn ArrowHeadGenerator>) {
        self.arrow_heads.register_default(generator);
    }

    /// Returns the target arrowhead generator for `key`, or the default one.
    pub fn arrow_head(&self, key: &str) -> Option<Rc<dyn ArrowHeadGenerator>> {
        let generator = self.arrow_heads.get(key);
        if generator.is_none() {
            warn!(key; "No arrowhead generator registered and no default set");
        }
        generator
    }

    pub fn register_line_style(
        &mut self,
        key: impl Into<String>,
        generator: Rc<dyn LineStyleGenerator>,
    ) {
        self.line_styles.register(key.into(), generator);
    }

    pub fn register_default_line_style(&mut self, generator: Rc<dyn LineStyleGenerator>) {
        self.line_styles.register_default(generator);
    }

    /// Returns the line style generator for `key`, or the default one.
    pub fn line_style(&self, key: &str) -> Option<Rc<dyn LineStyleGenerator>> {
        let generator = self.line_styles.get(key);
        if generator.is_none() {
            warn!(key; "No line style generator registered and no default set");
        }
        generator
    }

    /// Empties all three tables and their defaults.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.arrow_heads.clear();
        self.line_styles.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.arrow_heads.is_empty() && self.line_styles.is_empty()
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the glyph drawn at the target end of `relationship_type` by default.
fn default_target_arrow_head(relationship_type: &RelationshipType) -> Option<ArrowHeadKind> {
    match relationship_type {
        RelationshipType::Composition => Some(ArrowHeadKind::FilledDiamond),
        RelationshipType::Aggregation => Some(ArrowHeadKind::Diamond),
        RelationshipType::Assignment
        | RelationshipType::Triggering
        | RelationshipType::Flow => Some(ArrowHeadKind::Standard),
        RelationshipType::Realization | RelationshipType::Specialization => {
            Some(ArrowHeadKind::Outline)
        }
        RelationshipType::Serving | RelationshipType::Access | RelationshipType::Influence => {
            Some(ArrowHeadKind::Open)
        }
        RelationshipType::Association | RelationshipType::Other(_) => None,
    }
}

/// Returns the line style of `relationship_type` by default.
fn default_line_style(relationship_type: &RelationshipType) -> LineStyle {
    match relationship_type {
        RelationshipType::Realization | RelationshipType::Access => LineStyle::Dotted,
        RelationshipType::Influence | RelationshipType::Flow => LineStyle::Dashed,
        _ => LineStyle::Solid,
    }
}

/// Populates `registry` with the built-in generators.
///
/// Base shapes are registered under their names first, so that the element
/// shapes composed by the icon compositor resolve their base through the
/// registry. Defaults are the plain rectangle, the standard arrowhead and the
/// solid line.
pub fn register_default_shapes(registry: &mut ShapeRegistry) {
    for base in BaseShape::ALL {
        registry.register_shape(base.as_str(), base.generator());
    }
    registry.register_default_shape(Rc::new(RectangleShape));

    for element_type in ElementType::ALL {
        let generator = icon::element_shape_generator(element_type, registry);
        registry.register_shape(element_type.as_str(), generator);
    }

    for relationship_type in RelationshipType::ALL {
        if let Some(kind) = default_target_arrow_head(relationship_type) {
            registry.register_arrow_head(relationship_type.as_str(), Rc::new(kind));
        }
        registry.register_line_style(
            relationship_type.as_str(),
            Rc::new(default_line_style(relationship_type)),
        );
    }
    registry.register_default_arrow_head(Rc::new(ArrowHeadKind::Standard));
    registry.register_default_line_style(Rc::new(LineStyle::Solid));

    debug!(
        element_types = ElementType::ALL.len(),
        relationship_types = RelationshipType::ALL.len();
        "Default shapes registered"
    );
}
