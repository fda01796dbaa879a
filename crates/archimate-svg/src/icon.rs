//! Element shapes composed from a base shape and an icon glyph.
//!
//! Each element type resolves to an element name (`BusinessActor` becomes
//! `Business Actor`), which the [`catalog`] maps to an icon name and a base
//! shape. The base shape generator comes from the registry, and the icon is
//! overlaid on the finished base shape as a separate node of its
//! [`ShapeFragment`].

pub mod catalog;

use std::rc::Rc;

use log::{debug, warn};

use archimate_svg_core::{
    color::Color,
    draw::{
        BaseShape, IconGlyph, RectangleShape, ShapeFragment, ShapeGenerator, ShapeStyle,
        TextLayout,
    },
    geometry::{Bounds, Size},
    semantic::ElementType,
};

use crate::registry::ShapeRegistry;

/// A base shape with an icon in its top-right corner.
///
/// The icon takes the shape's fill color, except for glyph primitives that
/// are explicitly unfilled.
#[derive(Debug)]
pub struct IconShape {
    base: Rc<dyn ShapeGenerator>,
    glyph: &'static IconGlyph,
}

impl IconShape {
    pub fn new(base: Rc<dyn ShapeGenerator>, glyph: &'static IconGlyph) -> Self {
        Self { base, glyph }
    }

    pub fn glyph(&self) -> &'static IconGlyph {
        self.glyph
    }
}

impl ShapeGenerator for IconShape {
    fn outline(&self, size: Size, style: &ShapeStyle) -> Box<dyn svg::Node> {
        self.base.outline(size, style)
    }

    fn label_layout(&self, size: Size, style: &ShapeStyle) -> TextLayout {
        self.base.label_layout(size, style)
    }

    fn generate(&self, bounds: Bounds, label: &str, style: &ShapeStyle) -> ShapeFragment {
        let fragment = self.base.generate(bounds, label, style);
        match self
            .glyph
            .place(bounds.to_size(), style.fill_color(), style.stroke().color())
        {
            Some(icon) => fragment.with_icon(icon),
            None => fragment,
        }
    }
}

/// A base shape whose fill color ignores the caller's style.
#[derive(Debug)]
pub struct FixedFillShape {
    base: Rc<dyn ShapeGenerator>,
    fill: Color,
}

impl FixedFillShape {
    pub fn new(base: Rc<dyn ShapeGenerator>, fill: Color) -> Self {
        Self { base, fill }
    }
}

impl ShapeGenerator for FixedFillShape {
    fn outline(&self, size: Size, style: &ShapeStyle) -> Box<dyn svg::Node> {
        self.base
            .outline(size, &style.clone().with_fill_color(self.fill))
    }

    fn label_layout(&self, size: Size, style: &ShapeStyle) -> TextLayout {
        self.base.label_layout(size, style)
    }

    fn generate(&self, bounds: Bounds, label: &str, style: &ShapeStyle) -> ShapeFragment {
        self.base
            .generate(bounds, label, &style.clone().with_fill_color(self.fill))
    }
}

fn rectangle_fallback(registry: &ShapeRegistry) -> Rc<dyn ShapeGenerator> {
    registry
        .registered_shape(BaseShape::Rectangle.as_str())
        .unwrap_or_else(|| Rc::new(RectangleShape))
}

/// Builds the shape generator of `element_type`.
///
/// Resolution never fails:
/// - without a catalog mapping, or when the mapped base shape is not
///   registered, the plain rectangle is used and a warning is logged
/// - the Or Junction always draws its base shape with a white fill
/// - a mapping whose icon is its base shape returns the base generator as-is
/// - otherwise the base shape is wrapped in an [`IconShape`]
pub fn element_shape_generator(
    element_type: &ElementType,
    registry: &ShapeRegistry,
) -> Rc<dyn ShapeGenerator> {
    let element_name = element_type.display_name();

    let Some(mapping) = catalog::element_mapping(&element_name) else {
        warn!(
            element_type = element_type.as_str();
            "No icon mapping for element type, using rectangle"
        );
        return rectangle_fallback(registry);
    };

    let Some(base) = registry.registered_shape(mapping.base().as_str()) else {
        warn!(
            element_type = element_type.as_str(),
            base = mapping.base().as_str();
            "Base shape not registered, using rectangle"
        );
        return rectangle_fallback(registry);
    };

    if *element_type == ElementType::OrJunction {
        return Rc::new(FixedFillShape::new(base, Color::white()));
    }

    if mapping.is_plain() {
        return base;
    }

    match catalog::glyph(mapping.icon()) {
        Some(glyph) => Rc::new(IconShape::new(base, glyph)),
        None => {
            debug!(icon = mapping.icon(); "Icon glyph not found, drawing base shape only");
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(element_type: ElementType, bounds: Bounds, style: &ShapeStyle) -> String {
        let registry = ShapeRegistry::with_defaults();
        element_shape_generator(&element_type, &registry)
            .generate(bounds, "Label", style)
            .into_group()
            .to_string()
    }

    #[test]
    fn test_icon_overlay_in_top_right_corner() {
        let style = ShapeStyle::default().with_fill_color(Color::new("green").unwrap());
        let rendered = render(
            ElementType::BusinessActor,
            Bounds::new(0.0, 0.0, 120.0, 55.0),
            &style,
        );

        // 20 × 20 glyph scaled by 0.75 ends 5 units from the right edge
        assert!(rendered.contains(r#"transform="translate(100, 5) scale(0.75)""#));
        assert!(rendered.contains(r#"fill="green""#));
        assert!(rendered.contains(r#"fill="none""#));
    }

    #[test]
    fn test_icon_skipped_on_small_shapes() {
        let rendered = render(
            ElementType::BusinessActor,
            Bounds::new(0.0, 0.0, 120.0, 8.0),
            &ShapeStyle::default(),
        );
        assert!(!rendered.contains("scale("));
    }

    #[test]
    fn test_behavior_elements_are_rounded() {
        let rendered = render(
            ElementType::ApplicationService,
            Bounds::new(0.0, 0.0, 120.0, 55.0),
            &ShapeStyle::default(),
        );
        assert!(rendered.contains(r#"rx="10""#));
        assert!(rendered.contains("scale("));
    }

    #[test]
    fn test_motivation_elements_are_chamfered() {
        let rendered = render(
            ElementType::Goal,
            Bounds::new(0.0, 0.0, 120.0, 55.0),
            &ShapeStyle::default(),
        );
        assert!(rendered.contains("M 10,0 L 110,0"));
    }

    #[test]
    fn test_or_junction_forced_white() {
        let style = ShapeStyle::default().with_fill_color(Color::new("green").unwrap());
        let rendered = render(ElementType::OrJunction, Bounds::new(0.0, 0.0, 15.0, 15.0), &style);
        assert!(rendered.contains("<circle"));
        assert!(rendered.contains(r#"fill="white""#));
        assert!(!rendered.contains(r#"fill="green""#));
    }

    #[test]
    fn test_and_junction_keeps_fill_without_icon() {
        let style = ShapeStyle::default().with_fill_color(Color::new("green").unwrap());
        let rendered = render(ElementType::AndJunction, Bounds::new(0.0, 0.0, 15.0, 15.0), &style);
        assert!(rendered.contains("<circle"));
        assert!(rendered.contains(r#"fill="green""#));
        assert!(!rendered.contains("scale("));
    }

    #[test]
    fn test_unknown_type_falls_back_to_rectangle() {
        let rendered = render(
            ElementType::from("BusinessWidget"),
            Bounds::new(0.0, 0.0, 120.0, 55.0),
            &ShapeStyle::default(),
        );
        assert!(rendered.contains(r#"rx="0""#));
        assert!(!rendered.contains("scale("));
    }

    #[test]
    fn test_unregistered_base_falls_back_to_rectangle() {
        let mut registry = ShapeRegistry::new();
        registry.register_shape(BaseShape::Rectangle.as_str(), Rc::new(RectangleShape));

        let rendered = element_shape_generator(&ElementType::Goal, &registry)
            .generate(
                Bounds::new(0.0, 0.0, 120.0, 55.0),
                "Goal",
                &ShapeStyle::default(),
            )
            .into_group()
            .to_string();
        assert!(rendered.contains("<rect"));
        assert!(!rendered.contains("M 10,0"));
    }
}
