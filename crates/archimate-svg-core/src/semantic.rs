//! Semantic model types for ArchiMate views.
//!
//! This module contains the typed input model that view rendering consumes. The
//! records are produced by an ingestion step outside this crate (for example an
//! exchange-format reader) and are treated as immutable while rendering.
//!
//! # Pipeline Position
//!
//! ```text
//! Exchange file
//!     ↓ ingestion (external)
//! Semantic Model (these types) - typed elements, relationships and views
//!     ↓ shape registry + icon compositor + compound detector
//! Element fragments
//!     ↓ connection router
//! Connector fragments
//!     ↓ document assembler
//! SVG
//! ```
//!
//! # Organization
//!
//! - [`Element`] and [`ElementType`] - the element pool, grouped into [`Layer`]s
//! - [`Relationship`], [`RelationshipType`] and [`AccessType`] - the relationship pool
//! - [`View`], [`ViewElement`] and [`ViewRelationship`] - positioned references into the pools
//! - [`Model`] - the pools plus every view, with lookup helpers

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    color::Color,
    draw::StrokeStyle,
    geometry::{Bounds, Point},
};

/// The ArchiMate layer an element type belongs to.
///
/// Layers drive the default fill color of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Business,
    Application,
    Technology,
    Physical,
    Motivation,
    Implementation,
    Strategy,
    /// Junctions, groupings, locations and unrecognized types.
    Other,
}

macro_rules! element_types {
    ($($layer:ident => [$($variant:ident),* $(,)?]),* $(,)?) => {
        /// The semantic category of an [`Element`].
        ///
        /// Type names that are not part of the ArchiMate vocabulary are kept in
        /// [`ElementType::Other`] so they can still be rendered with default shapes.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
        #[serde(from = "String")]
        pub enum ElementType {
            $($($variant,)*)*
            Other(String),
        }

        impl ElementType {
            /// Every known element type, grouped by layer.
            pub const ALL: &'static [ElementType] = &[$($(ElementType::$variant,)*)*];

            /// Returns the type name as it appears in exchange files, e.g. `BusinessActor`.
            pub fn as_str(&self) -> &str {
                match self {
                    $($(Self::$variant => stringify!($variant),)*)*
                    Self::Other(name) => name,
                }
            }

            /// Returns the layer this element type belongs to.
            pub fn layer(&self) -> Layer {
                match self {
                    $($(Self::$variant => Layer::$layer,)*)*
                    Self::Other(_) => Layer::Other,
                }
            }
        }

        impl From<&str> for ElementType {
            fn from(value: &str) -> Self {
                match value {
                    $($(stringify!($variant) => Self::$variant,)*)*
                    other => Self::Other(other.to_string()),
                }
            }
        }
    };
}

element_types! {
    Business => [
        BusinessActor,
        BusinessRole,
        BusinessCollaboration,
        BusinessInterface,
        BusinessProcess,
        BusinessFunction,
        BusinessInteraction,
        BusinessEvent,
        BusinessService,
        BusinessObject,
        Contract,
        Representation,
        Product,
    ],
    Application => [
        ApplicationComponent,
        ApplicationCollaboration,
        ApplicationInterface,
        ApplicationFunction,
        ApplicationInteraction,
        ApplicationProcess,
        ApplicationEvent,
        ApplicationService,
        DataObject,
    ],
    Technology => [
        Node,
        Device,
        SystemSoftware,
        TechnologyCollaboration,
        TechnologyInterface,
        Path,
        CommunicationNetwork,
        TechnologyFunction,
        TechnologyProcess,
        TechnologyInteraction,
        TechnologyEvent,
        TechnologyService,
        Artifact,
    ],
    Physical => [Equipment, Facility, DistributionNetwork, Material],
    Motivation => [
        Stakeholder,
        Driver,
        Assessment,
        Goal,
        Outcome,
        Principle,
        Requirement,
        Constraint,
        Meaning,
        Value,
    ],
    Strategy => [Resource, Capability, ValueStream, CourseOfAction],
    Implementation => [WorkPackage, Deliverable, ImplementationEvent, Plateau, Gap],
    Other => [AndJunction, OrJunction, Grouping, Location],
}

impl ElementType {
    /// Returns the human readable element name, e.g. `Business Actor` for `BusinessActor`.
    pub fn display_name(&self) -> String {
        split_pascal_case(self.as_str())
    }
}

impl From<String> for ElementType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inserts a space before every word boundary of a PascalCase identifier.
///
/// A boundary is a lowercase letter followed by an uppercase letter, or an
/// uppercase letter followed by an uppercase-then-lowercase pair (`XMLFile`
/// becomes `XML File`).
fn split_pascal_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);

    for (index, &current) in chars.iter().enumerate() {
        if index > 0 && current.is_uppercase() {
            let previous = chars[index - 1];
            let next_is_lower = chars.get(index + 1).is_some_and(|c| c.is_lowercase());
            if previous.is_lowercase() || (previous.is_uppercase() && next_is_lower) {
                result.push(' ');
            }
        }
        result.push(current);
    }

    result
}

/// The semantic category of a [`Relationship`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum RelationshipType {
    Composition,
    Aggregation,
    Assignment,
    Realization,
    Serving,
    Access,
    Influence,
    Triggering,
    Flow,
    Specialization,
    Association,
    Other(String),
}

impl RelationshipType {
    /// Every known relationship type.
    pub const ALL: &'static [RelationshipType] = &[
        Self::Composition,
        Self::Aggregation,
        Self::Assignment,
        Self::Realization,
        Self::Serving,
        Self::Access,
        Self::Influence,
        Self::Triggering,
        Self::Flow,
        Self::Specialization,
        Self::Association,
    ];

    /// Returns the type name as it appears in exchange files, e.g. `Serving`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Composition => "Composition",
            Self::Aggregation => "Aggregation",
            Self::Assignment => "Assignment",
            Self::Realization => "Realization",
            Self::Serving => "Serving",
            Self::Access => "Access",
            Self::Influence => "Influence",
            Self::Triggering => "Triggering",
            Self::Flow => "Flow",
            Self::Specialization => "Specialization",
            Self::Association => "Association",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for RelationshipType {
    fn from(value: &str) -> Self {
        Self::ALL
            .iter()
            .find(|known| known.as_str() == value)
            .cloned()
            .unwrap_or_else(|| Self::Other(value.to_string()))
    }
}

impl From<String> for RelationshipType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read/write qualifier of an Access relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum AccessType {
    Read,
    Write,
    ReadWrite,
}

/// An element of the model pool.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Element {
    id: String,
    #[serde(rename = "type")]
    element_type: ElementType,
    #[serde(default)]
    name: Option<String>,
}

impl Element {
    pub fn new(id: impl Into<String>, element_type: ElementType) -> Self {
        Self {
            id: id.into(),
            element_type,
            name: None,
        }
    }

    /// Sets the display name of the element.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A relationship of the model pool, connecting two elements by id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Relationship {
    id: String,
    #[serde(rename = "type")]
    relationship_type: RelationshipType,
    source: String,
    target: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "accessType")]
    access_type: Option<AccessType>,
}

impl Relationship {
    pub fn new(
        id: impl Into<String>,
        relationship_type: RelationshipType,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            relationship_type,
            source: source.into(),
            target: target.into(),
            name: None,
            access_type: None,
        }
    }

    /// Sets the label of the relationship.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the access mode. Only meaningful for [`RelationshipType::Access`].
    pub fn with_access_type(mut self, access_type: AccessType) -> Self {
        self.access_type = Some(access_type);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn relationship_type(&self) -> &RelationshipType {
        &self.relationship_type
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the access mode, which is only reported for Access relationships.
    pub fn access_type(&self) -> Option<AccessType> {
        match self.relationship_type {
            RelationshipType::Access => self.access_type,
            _ => None,
        }
    }
}

/// Per-element style overrides attached to a [`ViewElement`].
///
/// Every field is optional; unset fields fall back to the layer palette and the
/// render options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementStyle {
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    text_color: Option<Color>,
    font_family: Option<String>,
    font_size: Option<f32>,
    opacity: Option<f32>,
    corner_radius: Option<f32>,
    chamfer_size: Option<f32>,
    #[serde(skip)]
    is_compound: bool,
}

impl ElementStyle {
    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    pub fn stroke_color(&self) -> Option<Color> {
        self.stroke_color
    }

    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn font_size(&self) -> Option<f32> {
        self.font_size
    }

    pub fn opacity(&self) -> Option<f32> {
        self.opacity
    }

    pub fn corner_radius(&self) -> Option<f32> {
        self.corner_radius
    }

    pub fn chamfer_size(&self) -> Option<f32> {
        self.chamfer_size
    }

    /// Returns true when the element visually contains another element of its view.
    pub fn is_compound(&self) -> bool {
        self.is_compound
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn with_chamfer_size(mut self, size: f32) -> Self {
        self.chamfer_size = Some(size);
        self
    }

    pub fn with_compound(mut self, is_compound: bool) -> Self {
        self.is_compound = is_compound;
        self
    }
}

/// An element placed on a view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewElement {
    element_ref: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    #[serde(default)]
    style: ElementStyle,
}

impl ViewElement {
    /// Creates a view element referencing `element_ref`, placed at `bounds`.
    pub fn new(element_ref: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            element_ref: element_ref.into(),
            x: bounds.min_x(),
            y: bounds.min_y(),
            width: bounds.width(),
            height: bounds.height(),
            style: ElementStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    pub fn element_ref(&self) -> &str {
        &self.element_ref
    }

    /// Returns the rectangle in view-local coordinates
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    pub fn style(&self) -> &ElementStyle {
        &self.style
    }
}

/// Per-connector style overrides attached to a [`ViewRelationship`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectorStyle {
    stroke_color: Option<Color>,
    stroke_width: Option<f32>,
    text_color: Option<Color>,
    font_family: Option<String>,
    font_size: Option<f32>,
    line_style: Option<StrokeStyle>,
}

impl ConnectorStyle {
    pub fn stroke_color(&self) -> Option<Color> {
        self.stroke_color
    }

    pub fn stroke_width(&self) -> Option<f32> {
        self.stroke_width
    }

    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn font_size(&self) -> Option<f32> {
        self.font_size
    }

    /// Returns the explicitly requested line style, bypassing the per-type default.
    ///
    /// Custom dash patterns such as `"8,4"` are carried as [`StrokeStyle::Custom`].
    pub fn line_style(&self) -> Option<&StrokeStyle> {
        self.line_style.as_ref()
    }

    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_line_style(mut self, line_style: StrokeStyle) -> Self {
        self.line_style = Some(line_style);
        self
    }
}

/// A relationship drawn on a view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRelationship {
    relationship_ref: String,
    #[serde(default)]
    bendpoints: Vec<Point>,
    #[serde(default)]
    style: ConnectorStyle,
}

impl ViewRelationship {
    pub fn new(relationship_ref: impl Into<String>) -> Self {
        Self {
            relationship_ref: relationship_ref.into(),
            bendpoints: Vec::new(),
            style: ConnectorStyle::default(),
        }
    }

    /// Sets the ordered waypoints, from near the source to near the target.
    pub fn with_bendpoints(mut self, bendpoints: Vec<Point>) -> Self {
        self.bendpoints = bendpoints;
        self
    }

    pub fn with_style(mut self, style: ConnectorStyle) -> Self {
        self.style = style;
        self
    }

    pub fn relationship_ref(&self) -> &str {
        &self.relationship_ref
    }

    pub fn bendpoints(&self) -> &[Point] {
        &self.bendpoints
    }

    pub fn style(&self) -> &ConnectorStyle {
        &self.style
    }
}

/// One diagram: positioned element references and connector references.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct View {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    elements: Vec<ViewElement>,
    #[serde(default)]
    relationships: Vec<ViewRelationship>,
}

impl View {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            elements: Vec::new(),
            relationships: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_element(mut self, element: ViewElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn with_relationship(mut self, relationship: ViewRelationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn elements(&self) -> &[ViewElement] {
        &self.elements
    }

    pub fn relationships(&self) -> &[ViewRelationship] {
        &self.relationships
    }
}

/// Selects a view within a [`Model`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewIdentifier {
    /// Match the view id only.
    Id(String),
    /// Match the view name only.
    Name(String),
    /// Match the view id first, then the view name.
    Any(String),
}

impl ViewIdentifier {
    /// Returns the raw identifier text
    pub fn as_str(&self) -> &str {
        match self {
            Self::Id(value) | Self::Name(value) | Self::Any(value) => value,
        }
    }
}

impl fmt::Display for ViewIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
struct RawModel {
    #[serde(default)]
    elements: Vec<Element>,
    #[serde(default)]
    relationships: Vec<Relationship>,
    #[serde(default)]
    views: Vec<View>,
}

impl From<RawModel> for Model {
    fn from(raw: RawModel) -> Self {
        let mut model = Model::default();
        raw.elements
            .into_iter()
            .for_each(|element| model.add_element(element));
        raw.relationships
            .into_iter()
            .for_each(|relationship| model.add_relationship(relationship));
        raw.views.into_iter().for_each(|view| model.add_view(view));
        model
    }
}

/// The element and relationship pools plus every view that references them.
///
/// Pools keep insertion order so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawModel")]
pub struct Model {
    elements: IndexMap<String, Element>,
    relationships: IndexMap<String, Relationship>,
    views: Vec<View>,
}

impl Model {
    /// Adds an element, replacing any earlier element with the same id.
    pub fn add_element(&mut self, element: Element) {
        self.elements.insert(element.id.clone(), element);
    }

    /// Adds a relationship, replacing any earlier relationship with the same id.
    pub fn add_relationship(&mut self, relationship: Relationship) {
        self.relationships
            .insert(relationship.id.clone(), relationship);
    }

    pub fn add_view(&mut self, view: View) {
        self.views.push(view);
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn relationship(&self, id: &str) -> Option<&Relationship> {
        self.relationships.get(id)
    }

    /// Returns every element in insertion order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Returns every relationship in insertion order
    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.values()
    }

    /// Returns every view in document order
    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// Finds a view by id or name.
    ///
    /// [`ViewIdentifier::Any`] tries the id first, then the name.
    pub fn find_view(&self, identifier: &ViewIdentifier) -> Option<&View> {
        let by_id = |id: &str| self.views.iter().find(|view| view.id == id);
        let by_name = |name: &str| {
            self.views
                .iter()
                .find(|view| view.name.as_deref() == Some(name))
        };

        match identifier {
            ViewIdentifier::Id(id) => by_id(id),
            ViewIdentifier::Name(name) => by_name(name),
            ViewIdentifier::Any(value) => by_id(value).or_else(|| by_name(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_type_from_str() {
        assert_eq!(ElementType::from("BusinessActor"), ElementType::BusinessActor);
        assert_eq!(ElementType::from("OrJunction"), ElementType::OrJunction);
        assert_eq!(
            ElementType::from("Spaceship"),
            ElementType::Other("Spaceship".to_string())
        );
    }

    #[test]
    fn test_element_type_round_trips_name() {
        for element_type in ElementType::ALL {
            assert_eq!(&ElementType::from(element_type.as_str()), element_type);
        }
    }

    #[test]
    fn test_element_type_layer() {
        assert_eq!(ElementType::BusinessActor.layer(), Layer::Business);
        assert_eq!(ElementType::DataObject.layer(), Layer::Application);
        assert_eq!(ElementType::Node.layer(), Layer::Technology);
        assert_eq!(ElementType::Facility.layer(), Layer::Physical);
        assert_eq!(ElementType::Goal.layer(), Layer::Motivation);
        assert_eq!(ElementType::Gap.layer(), Layer::Implementation);
        assert_eq!(ElementType::Capability.layer(), Layer::Strategy);
        assert_eq!(ElementType::AndJunction.layer(), Layer::Other);
        assert_eq!(ElementType::from("Unknown").layer(), Layer::Other);
    }

    #[test]
    fn test_element_type_display_name() {
        assert_eq!(ElementType::BusinessActor.display_name(), "Business Actor");
        assert_eq!(ElementType::OrJunction.display_name(), "Or Junction");
        assert_eq!(ElementType::Node.display_name(), "Node");
        assert_eq!(ElementType::CourseOfAction.display_name(), "Course Of Action");
        assert_eq!(split_pascal_case("XMLFile"), "XML File");
        assert_eq!(split_pascal_case(""), "");
    }

    #[test]
    fn test_relationship_type_from_str() {
        for relationship_type in RelationshipType::ALL {
            assert_eq!(
                &RelationshipType::from(relationship_type.as_str()),
                relationship_type
            );
        }
        assert_eq!(
            RelationshipType::from("Teleports"),
            RelationshipType::Other("Teleports".to_string())
        );
    }

    #[test]
    fn test_access_type_only_for_access() {
        let access = Relationship::new("r1", RelationshipType::Access, "a", "b")
            .with_access_type(AccessType::Read);
        assert_eq!(access.access_type(), Some(AccessType::Read));

        let serving = Relationship::new("r2", RelationshipType::Serving, "a", "b")
            .with_access_type(AccessType::Read);
        assert_eq!(serving.access_type(), None);
    }

    fn sample_model() -> Model {
        let mut model = Model::default();
        model.add_view(View::new("id-1").with_name("Main"));
        model.add_view(View::new("Main").with_name("Other"));
        model.add_view(View::new("id-3").with_name("Third"));
        model
    }

    #[test]
    fn test_find_view() {
        let model = sample_model();

        let by_id = model.find_view(&ViewIdentifier::Id("id-3".to_string()));
        assert_eq!(by_id.map(View::id), Some("id-3"));

        let by_name = model.find_view(&ViewIdentifier::Name("Main".to_string()));
        assert_eq!(by_name.map(View::id), Some("id-1"));

        // The id match takes precedence over the name match
        let any = model.find_view(&ViewIdentifier::Any("Main".to_string()));
        assert_eq!(any.map(View::id), Some("Main"));

        let any_name = model.find_view(&ViewIdentifier::Any("Third".to_string()));
        assert_eq!(any_name.map(View::id), Some("id-3"));

        assert!(model.find_view(&ViewIdentifier::Any("missing".to_string())).is_none());
    }

    #[test]
    fn test_model_deserialize() {
        let source = r##"
            [[elements]]
            id = "a"
            type = "BusinessActor"
            name = "Customer"

            [[elements]]
            id = "b"
            type = "ApplicationService"

            [[relationships]]
            id = "r"
            type = "Access"
            source = "a"
            target = "b"
            accessType = "ReadWrite"

            [[views]]
            id = "v"
            name = "Overview"

            [[views.elements]]
            elementRef = "a"
            x = 0.0
            y = 0.0
            width = 100.0
            height = 50.0
            style = { fillColor = "#ff0000", cornerRadius = 4.0 }

            [[views.relationships]]
            relationshipRef = "r"
            bendpoints = [{ x = 150.0, y = 25.0 }]
            style = { lineStyle = "dashed" }
        "##;

        let model: Model = toml::from_str(source).unwrap();
        assert_eq!(model.element("a").and_then(Element::name), Some("Customer"));
        assert_eq!(
            model.element("b").map(Element::element_type),
            Some(&ElementType::ApplicationService)
        );
        assert_eq!(
            model.relationship("r").and_then(Relationship::access_type),
            Some(AccessType::ReadWrite)
        );

        let view = &model.views()[0];
        assert_eq!(view.name(), Some("Overview"));
        assert_eq!(view.elements()[0].bounds(), Bounds::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(view.elements()[0].style().corner_radius(), Some(4.0));
        assert!(!view.elements()[0].style().is_compound());
        assert_eq!(view.relationships()[0].bendpoints(), &[Point::new(150.0, 25.0)]);
        assert_eq!(
            view.relationships()[0].style().line_style(),
            Some(&StrokeStyle::Dashed)
        );
    }
}
