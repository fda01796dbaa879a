//! ArchiMate SVG - render ArchiMate architecture views to SVG.
//!
//! A [`Model`](semantic::Model) holds typed elements and relationships plus the
//! views that position them. [`ViewRenderer`] turns one view into a standalone
//! SVG document: every view element becomes a shape chosen by its element
//! type, and every view relationship becomes a routed connector with the
//! glyphs and line style of its relationship type.

pub mod compound;
pub mod config;
pub mod connector;
pub mod export;
pub mod icon;
pub mod registry;

mod error;

pub use archimate_svg_core::{color, draw, geometry, semantic};

pub use error::{Error, Result};

use std::path::Path;

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use archimate_svg_core::{
    draw::{BaseShape, ShapeFragment},
    geometry::Size,
    semantic::{Element, Model, Relationship, View, ViewElement, ViewIdentifier, ViewRelationship},
};

use config::RenderOptions;
use connector::{ConnectionRouter, ConnectorAppearance};
use export::Svg;
use registry::ShapeRegistry;

/// Id and optional name of a view, as listed by [`ViewRenderer::view_summaries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSummary<'a> {
    pub id: &'a str,
    pub name: Option<&'a str>,
}

/// Renders the views of a model with one set of options and generators.
///
/// The renderer owns its [`ShapeRegistry`]. It is populated once on
/// construction and only read while rendering.
///
/// # Examples
///
/// ```
/// use archimate_svg::{
///     ViewRenderer,
///     config::RenderOptions,
///     geometry::Bounds,
///     semantic::{Element, ElementType, Model, View, ViewElement, ViewIdentifier},
/// };
///
/// let mut model = Model::default();
/// model.add_element(Element::new("e1", ElementType::BusinessActor).with_name("Customer"));
/// model.add_view(
///     View::new("v1").with_element(ViewElement::new("e1", Bounds::new(10.0, 10.0, 120.0, 55.0))),
/// );
///
/// let renderer = ViewRenderer::new(RenderOptions::default());
/// let svg = renderer.render_view(&model, &ViewIdentifier::Id("v1".to_string()));
/// assert!(svg.contains("Customer"));
///
/// // Unknown views still produce a document
/// let svg = renderer.render_view(&model, &ViewIdentifier::Id("nope".to_string()));
/// assert!(svg.contains("View not found: nope"));
/// ```
#[derive(Debug)]
pub struct ViewRenderer {
    options: RenderOptions,
    registry: ShapeRegistry,
}

impl ViewRenderer {
    /// Creates a renderer with the built-in generators.
    pub fn new(options: RenderOptions) -> Self {
        Self::with_registry(options, ShapeRegistry::with_defaults())
    }

    /// Creates a renderer with a caller-populated registry.
    pub fn with_registry(options: RenderOptions, registry: ShapeRegistry) -> Self {
        Self { options, registry }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    /// Renders the view selected by `identifier` to SVG text.
    ///
    /// See [`render_document`](Self::render_document) for the rendering rules.
    pub fn render_view(&self, model: &Model, identifier: &ViewIdentifier) -> String {
        self.render_document(model, identifier).to_string()
    }

    /// Renders the view selected by `identifier` to an SVG document.
    ///
    /// Elements are painted in view order, followed by the connectors. View
    /// elements whose element is missing from the model, and view
    /// relationships whose relationship or endpoints cannot be resolved, are
    /// skipped. A view that does not exist renders as a placeholder document.
    pub fn render_document(&self, model: &Model, identifier: &ViewIdentifier) -> Document {
        let Some(view) = model.find_view(identifier) else {
            info!(view:% = identifier; "View not found, rendering placeholder");
            return Svg::placeholder(&self.options, identifier);
        };

        info!(view = view.id(); "Rendering view");

        let view_elements = compound::process_compound_elements(view.elements());
        let mut fragments: Vec<Box<dyn svg::Node>> = Vec::new();

        for view_element in &view_elements {
            let Some(element) = model.element(view_element.element_ref()) else {
                debug!(
                    element_ref = view_element.element_ref();
                    "Skipping view element without element"
                );
                continue;
            };
            fragments.push(self.render_element(element, view_element).into());
        }
        let element_count = fragments.len();

        for view_relationship in view.relationships() {
            if let Some(connector) =
                self.render_view_relationship(model, &view_elements, view_relationship)
            {
                fragments.push(Box::new(connector));
            }
        }
        let connector_count = fragments.len() - element_count;

        let size = if self.options.auto_size() {
            self.compute_bounds(view)
        } else {
            Size::new(self.options.width(), self.options.height())
        };

        info!(
            view = view.id(),
            elements = element_count,
            connectors = connector_count;
            "View rendered"
        );

        Svg::from_options(&self.options)
            .with_size(size)
            .document(fragments)
    }

    /// Draws one view element as the shape of its element type.
    ///
    /// The style starts from the palette color of the element's layer and the
    /// option fonts, then applies the view element's overrides.
    pub fn render_element(&self, element: &Element, view_element: &ViewElement) -> ShapeFragment {
        let element_type = element.element_type();
        let style = self
            .options
            .shape_style(element_type.layer())
            .apply(view_element.style());

        let generator = self
            .registry
            .shape(element_type.as_str())
            .unwrap_or_else(|| BaseShape::Rectangle.generator());

        generator.generate(
            view_element.bounds(),
            element.name().unwrap_or_default(),
            &style,
        )
    }

    /// Draws `relationship` between the view elements `source` and `target`.
    pub fn render_connector(
        &self,
        relationship: &Relationship,
        view_relationship: &ViewRelationship,
        source: &ViewElement,
        target: &ViewElement,
    ) -> svg_element::Group {
        let appearance = ConnectorAppearance::resolve(&self.options, view_relationship.style());
        ConnectionRouter::new(&self.registry).route(
            relationship,
            source.bounds(),
            target.bounds(),
            view_relationship.bendpoints(),
            &appearance,
        )
    }

    fn render_view_relationship(
        &self,
        model: &Model,
        view_elements: &[ViewElement],
        view_relationship: &ViewRelationship,
    ) -> Option<svg_element::Group> {
        let relationship_ref = view_relationship.relationship_ref();

        let Some(relationship) = model.relationship(relationship_ref) else {
            debug!(relationship_ref; "Skipping view relationship without relationship");
            return None;
        };

        let source = unique_view_element(view_elements, relationship.source());
        let target = unique_view_element(view_elements, relationship.target());
        let (Some(source), Some(target)) = (source, target) else {
            debug!(
                relationship_ref,
                source = relationship.source(),
                target = relationship.target();
                "Skipping view relationship with unresolved endpoints"
            );
            return None;
        };

        Some(self.render_connector(relationship, view_relationship, source, target))
    }

    /// Returns the canvas size that fits every element and bendpoint of `view`.
    ///
    /// The size reaches the furthest right and bottom edge, plus the
    /// configured padding.
    pub fn compute_bounds(&self, view: &View) -> Size {
        let element_edges = view
            .elements()
            .iter()
            .map(|element| (element.bounds().max_x(), element.bounds().max_y()));
        let bendpoints = view
            .relationships()
            .iter()
            .flat_map(|relationship| relationship.bendpoints())
            .map(|point| (point.x(), point.y()));

        let (max_x, max_y) = element_edges
            .chain(bendpoints)
            .fold((0.0f32, 0.0f32), |(max_x, max_y), (x, y)| {
                (max_x.max(x), max_y.max(y))
            });

        Size::new(max_x, max_y).add_padding(self.options.padding())
    }

    /// Lists every view of `model` in document order.
    pub fn view_summaries(model: &Model) -> Vec<ViewSummary<'_>> {
        model
            .views()
            .iter()
            .map(|view| ViewSummary {
                id: view.id(),
                name: view.name(),
            })
            .collect()
    }

    /// Renders the view selected by `identifier` and writes it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be written.
    pub fn export_view(
        &self,
        model: &Model,
        identifier: &ViewIdentifier,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let doc = self.render_document(model, identifier);
        Svg::write_document(&doc, path)
    }
}

impl Default for ViewRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Returns the only view element showing `element_id`.
///
/// Relationships between elements that appear several times on a view are
/// ambiguous and yield `None`.
fn unique_view_element<'v>(
    view_elements: &'v [ViewElement],
    element_id: &str,
) -> Option<&'v ViewElement> {
    let mut matches = view_elements
        .iter()
        .filter(|view_element| view_element.element_ref() == element_id);
    match (matches.next(), matches.next()) {
        (Some(view_element), None) => Some(view_element),
        _ => None,
    }
}
