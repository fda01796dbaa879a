//! Static icon artwork and the element name to {icon, base shape} table.
//!
//! Glyphs are drawn in a 20 × 20 box (a few are wider than tall) and scaled
//! down when overlaid on a shape.

use archimate_svg_core::draw::{BaseShape, GlyphElement, GlyphFill, IconGlyph};

use BaseShape::{
    ChamferedRectangle as Chamfered, Circle, Rectangle, RoundedRectangle as Rounded,
};
use GlyphFill::{None as Unfilled, Shape as Filled};

/// The icon and base shape drawn for one element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementMapping {
    element: &'static str,
    icon: &'static str,
    base: BaseShape,
}

impl ElementMapping {
    const fn new(element: &'static str, icon: &'static str, base: BaseShape) -> Self {
        Self {
            element,
            icon,
            base,
        }
    }

    /// Returns the element name, e.g. `Business Actor`
    pub fn element(&self) -> &'static str {
        self.element
    }

    /// Returns the glyph name, or the base shape name when no icon is overlaid
    pub fn icon(&self) -> &'static str {
        self.icon
    }

    pub fn base(&self) -> BaseShape {
        self.base
    }

    /// Returns true when the mapping draws the bare base shape
    pub fn is_plain(&self) -> bool {
        self.icon == self.base.as_str()
    }
}

/// Every element name with its icon and base shape.
pub static ELEMENT_MAPPINGS: &[ElementMapping] = &[
    // Business
    ElementMapping::new("Business Actor", "actor", Rectangle),
    ElementMapping::new("Business Role", "role", Rectangle),
    ElementMapping::new("Business Collaboration", "collaboration", Rectangle),
    ElementMapping::new("Business Interface", "interface", Rectangle),
    ElementMapping::new("Business Process", "process", Rounded),
    ElementMapping::new("Business Function", "function", Rounded),
    ElementMapping::new("Business Interaction", "interaction", Rounded),
    ElementMapping::new("Business Event", "event", Rounded),
    ElementMapping::new("Business Service", "service", Rounded),
    ElementMapping::new("Business Object", "object", Rectangle),
    ElementMapping::new("Contract", "contract", Rectangle),
    ElementMapping::new("Representation", "representation", Rectangle),
    ElementMapping::new("Product", "product", Rectangle),
    // Application
    ElementMapping::new("Application Component", "component", Rectangle),
    ElementMapping::new("Application Collaboration", "collaboration", Rectangle),
    ElementMapping::new("Application Interface", "interface", Rectangle),
    ElementMapping::new("Application Function", "function", Rounded),
    ElementMapping::new("Application Interaction", "interaction", Rounded),
    ElementMapping::new("Application Process", "process", Rounded),
    ElementMapping::new("Application Event", "event", Rounded),
    ElementMapping::new("Application Service", "service", Rounded),
    ElementMapping::new("Data Object", "object", Rectangle),
    // Technology
    ElementMapping::new("Node", "node", Rectangle),
    ElementMapping::new("Device", "device", Rectangle),
    ElementMapping::new("System Software", "system-software", Rectangle),
    ElementMapping::new("Technology Collaboration", "collaboration", Rectangle),
    ElementMapping::new("Technology Interface", "interface", Rectangle),
    ElementMapping::new("Path", "path", Rectangle),
    ElementMapping::new("Communication Network", "communication-network", Rectangle),
    ElementMapping::new("Technology Function", "function", Rounded),
    ElementMapping::new("Technology Process", "process", Rounded),
    ElementMapping::new("Technology Interaction", "interaction", Rounded),
    ElementMapping::new("Technology Event", "event", Rounded),
    ElementMapping::new("Technology Service", "service", Rounded),
    ElementMapping::new("Artifact", "artifact", Rectangle),
    // Physical
    ElementMapping::new("Equipment", "equipment", Rectangle),
    ElementMapping::new("Facility", "facility", Rectangle),
    ElementMapping::new("Distribution Network", "distribution-network", Rectangle),
    ElementMapping::new("Material", "material", Rectangle),
    // Motivation
    ElementMapping::new("Stakeholder", "role", Chamfered),
    ElementMapping::new("Driver", "driver", Chamfered),
    ElementMapping::new("Assessment", "assessment", Chamfered),
    ElementMapping::new("Goal", "goal", Chamfered),
    ElementMapping::new("Outcome", "outcome", Chamfered),
    ElementMapping::new("Principle", "principle", Chamfered),
    ElementMapping::new("Requirement", "requirement", Chamfered),
    ElementMapping::new("Constraint", "constraint", Chamfered),
    ElementMapping::new("Meaning", "meaning", Chamfered),
    ElementMapping::new("Value", "value", Chamfered),
    // Strategy
    ElementMapping::new("Resource", "resource", Rectangle),
    ElementMapping::new("Capability", "capability", Rounded),
    ElementMapping::new("Value Stream", "value-stream", Rounded),
    ElementMapping::new("Course Of Action", "course-of-action", Rounded),
    // Implementation
    ElementMapping::new("Work Package", "work-package", Rounded),
    ElementMapping::new("Deliverable", "representation", Rectangle),
    ElementMapping::new("Implementation Event", "event", Rounded),
    ElementMapping::new("Plateau", "plateau", Rectangle),
    ElementMapping::new("Gap", "gap", Rectangle),
    // Other
    ElementMapping::new("And Junction", "circle", Circle),
    ElementMapping::new("Or Junction", "circle", Circle),
    ElementMapping::new("Grouping", "rectangle", Rectangle),
    ElementMapping::new("Location", "location", Rectangle),
];

/// Returns the mapping of the element named `element`.
pub fn element_mapping(element: &str) -> Option<&'static ElementMapping> {
    ELEMENT_MAPPINGS
        .iter()
        .find(|mapping| mapping.element == element)
}

/// Returns the glyph named `name`.
pub fn glyph(name: &str) -> Option<&'static IconGlyph> {
    GLYPHS.iter().find(|glyph| glyph.name() == name)
}

const fn path(d: &'static str, fill: GlyphFill) -> GlyphElement {
    GlyphElement::Path { d, fill }
}

const fn rect(x: f32, y: f32, width: f32, height: f32, fill: GlyphFill) -> GlyphElement {
    GlyphElement::Rect {
        x,
        y,
        width,
        height,
        fill,
    }
}

const fn circle(cx: f32, cy: f32, r: f32, fill: GlyphFill) -> GlyphElement {
    GlyphElement::Circle { cx, cy, r, fill }
}

const STROKE: f32 = 1.5;

/// The glyph library.
pub static GLYPHS: &[IconGlyph] = &[
    IconGlyph::new(
        "actor",
        20.0,
        20.0,
        STROKE,
        &[
            circle(10.0, 4.0, 3.5, Filled),
            path("M 10 7.5 L 10 14 M 4 10 L 16 10 M 10 14 L 5 20 M 10 14 L 15 20", Unfilled),
        ],
    ),
    IconGlyph::new(
        "role",
        20.0,
        14.0,
        STROKE,
        &[
            path("M 4 1 L 15 1 A 4 6 0 0 1 15 13 L 4 13 A 4 6 0 0 1 4 1 Z", Filled),
            path("M 15 1 A 4 6 0 0 0 15 13", Unfilled),
        ],
    ),
    IconGlyph::new(
        "collaboration",
        20.0,
        14.0,
        STROKE,
        &[circle(7.0, 7.0, 6.0, Unfilled), circle(13.0, 7.0, 6.0, Unfilled)],
    ),
    IconGlyph::new(
        "interface",
        20.0,
        12.0,
        STROKE,
        &[circle(14.0, 6.0, 5.0, Filled), path("M 0 6 L 9 6", Unfilled)],
    ),
    IconGlyph::new(
        "process",
        20.0,
        12.0,
        STROKE,
        &[path("M 0 3.5 L 12 3.5 L 12 0 L 20 6 L 12 12 L 12 8.5 L 0 8.5 Z", Filled)],
    ),
    IconGlyph::new(
        "function",
        16.0,
        20.0,
        STROKE,
        &[path("M 8 0 L 16 5 L 16 20 L 8 15 L 0 20 L 0 5 Z", Filled)],
    ),
    IconGlyph::new(
        "interaction",
        20.0,
        16.0,
        STROKE,
        &[
            path("M 8 0 A 8 8 0 0 0 8 16 Z", Filled),
            path("M 12 0 A 8 8 0 0 1 12 16 Z", Filled),
        ],
    ),
    IconGlyph::new(
        "event",
        20.0,
        12.0,
        STROKE,
        &[path("M 0 0 L 14 0 A 6 6 0 0 1 14 12 L 0 12 A 6 6 0 0 0 0 0 Z", Filled)],
    ),
    IconGlyph::new(
        "service",
        20.0,
        10.0,
        STROKE,
        &[path("M 5 0 L 15 0 A 5 5 0 0 1 15 10 L 5 10 A 5 5 0 0 1 5 0 Z", Filled)],
    ),
    IconGlyph::new(
        "object",
        20.0,
        14.0,
        STROKE,
        &[rect(0.0, 0.0, 20.0, 14.0, Filled), path("M 0 4 L 20 4", Unfilled)],
    ),
    IconGlyph::new(
        "contract",
        20.0,
        14.0,
        STROKE,
        &[
            rect(0.0, 0.0, 20.0, 14.0, Filled),
            path("M 0 4 L 20 4 M 0 9 L 20 9", Unfilled),
        ],
    ),
    IconGlyph::new(
        "representation",
        20.0,
        14.0,
        STROKE,
        &[path("M 0 0 L 20 0 L 20 12 C 15 9 10 16 0 12 Z", Filled)],
    ),
    IconGlyph::new(
        "product",
        20.0,
        14.0,
        STROKE,
        &[
            rect(0.0, 0.0, 20.0, 14.0, Filled),
            rect(0.0, 0.0, 10.0, 4.0, Unfilled),
        ],
    ),
    IconGlyph::new(
        "component",
        20.0,
        16.0,
        STROKE,
        &[
            rect(4.0, 0.0, 16.0, 16.0, Filled),
            rect(0.0, 3.0, 8.0, 3.0, Filled),
            rect(0.0, 10.0, 8.0, 3.0, Filled),
        ],
    ),
    IconGlyph::new(
        "node",
        20.0,
        18.0,
        STROKE,
        &[
            path("M 0 4 L 4 0 L 20 0 L 20 14 L 16 18 L 0 18 Z", Filled),
            path("M 0 4 L 16 4 L 20 0 M 16 4 L 16 18", Unfilled),
        ],
    ),
    IconGlyph::new(
        "device",
        20.0,
        18.0,
        STROKE,
        &[
            rect(2.0, 0.0, 16.0, 12.0, Filled),
            path("M 0 18 L 4 12 L 16 12 L 20 18 Z", Filled),
        ],
    ),
    IconGlyph::new(
        "system-software",
        20.0,
        20.0,
        STROKE,
        &[circle(12.0, 8.0, 7.5, Filled), circle(8.0, 12.0, 7.5, Filled)],
    ),
    IconGlyph::new(
        "path",
        20.0,
        10.0,
        STROKE,
        &[path(
            "M 4 1 L 0 5 L 4 9 M 16 1 L 20 5 L 16 9 M 2 5 L 5 5 M 8 5 L 12 5 M 15 5 L 18 5",
            Unfilled,
        )],
    ),
    IconGlyph::new(
        "communication-network",
        20.0,
        14.0,
        STROKE,
        &[
            path("M 5 2 L 18 2 L 15 12 L 2 12 Z", Unfilled),
            circle(5.0, 2.0, 2.0, Filled),
            circle(18.0, 2.0, 2.0, Filled),
            circle(15.0, 12.0, 2.0, Filled),
            circle(2.0, 12.0, 2.0, Filled),
        ],
    ),
    IconGlyph::new(
        "artifact",
        16.0,
        20.0,
        STROKE,
        &[
            path("M 0 0 L 11 0 L 16 5 L 16 20 L 0 20 Z", Filled),
            path("M 11 0 L 11 5 L 16 5", Unfilled),
        ],
    ),
    IconGlyph::new(
        "equipment",
        20.0,
        18.0,
        STROKE,
        &[
            circle(7.0, 11.0, 6.0, Filled),
            circle(7.0, 11.0, 2.0, Unfilled),
            circle(15.5, 4.5, 4.0, Filled),
            circle(15.5, 4.5, 1.5, Unfilled),
        ],
    ),
    IconGlyph::new(
        "facility",
        20.0,
        18.0,
        STROKE,
        &[path(
            "M 0 18 L 0 0 L 4 0 L 4 10 L 9 6 L 9 10 L 14 6 L 14 10 L 20 6 L 20 18 Z",
            Filled,
        )],
    ),
    IconGlyph::new(
        "distribution-network",
        20.0,
        12.0,
        STROKE,
        &[path(
            "M 4 0 L 0 4 L 4 8 M 16 4 L 20 8 L 16 12 M 1 4 L 20 4 M 0 8 L 19 8",
            Unfilled,
        )],
    ),
    IconGlyph::new(
        "material",
        20.0,
        18.0,
        STROKE,
        &[
            path("M 5 0 L 15 0 L 20 9 L 15 18 L 5 18 L 0 9 Z", Filled),
            path("M 6 3 L 14 3 M 16.5 7 L 12.5 14 M 3.5 7 L 7.5 14", Unfilled),
        ],
    ),
    IconGlyph::new(
        "driver",
        20.0,
        20.0,
        STROKE,
        &[
            circle(10.0, 10.0, 7.0, Filled),
            circle(10.0, 10.0, 2.0, Filled),
            path("M 10 0 L 10 20 M 0 10 L 20 10 M 3 3 L 17 17 M 17 3 L 3 17", Unfilled),
        ],
    ),
    IconGlyph::new(
        "assessment",
        20.0,
        20.0,
        STROKE,
        &[circle(12.0, 8.0, 7.0, Filled), path("M 7 13 L 0 20", Unfilled)],
    ),
    IconGlyph::new(
        "goal",
        20.0,
        20.0,
        STROKE,
        &[
            circle(10.0, 10.0, 9.5, Filled),
            circle(10.0, 10.0, 6.0, Filled),
            circle(10.0, 10.0, 2.5, Filled),
        ],
    ),
    IconGlyph::new(
        "outcome",
        20.0,
        20.0,
        STROKE,
        &[
            circle(9.0, 11.0, 8.5, Filled),
            circle(9.0, 11.0, 5.0, Filled),
            circle(9.0, 11.0, 1.5, Filled),
            path("M 9 11 L 19 1 M 15 1 L 19 1 L 19 5", Unfilled),
        ],
    ),
    IconGlyph::new(
        "principle",
        16.0,
        20.0,
        STROKE,
        &[
            rect(0.0, 0.0, 16.0, 20.0, Filled),
            path("M 8 3 L 8 13 M 8 15.5 L 8 17", Unfilled),
        ],
    ),
    IconGlyph::new(
        "requirement",
        20.0,
        12.0,
        STROKE,
        &[path("M 4 0 L 20 0 L 16 12 L 0 12 Z", Filled)],
    ),
    IconGlyph::new(
        "constraint",
        20.0,
        12.0,
        STROKE,
        &[
            path("M 4 0 L 20 0 L 16 12 L 0 12 Z", Filled),
            path("M 8 0 L 4 12", Unfilled),
        ],
    ),
    IconGlyph::new(
        "meaning",
        20.0,
        14.0,
        STROKE,
        &[path(
            "M 5 13 C 0 13 0 7 4 6 C 3 1 10 0 11 3 C 13 0 19 1 18 6 C 21 8 19 13 15 13 Z",
            Filled,
        )],
    ),
    IconGlyph::new(
        "value",
        20.0,
        12.0,
        STROKE,
        &[path("M 0 6 A 10 6 0 1 0 20 6 A 10 6 0 1 0 0 6 Z", Filled)],
    ),
    IconGlyph::new(
        "resource",
        20.0,
        12.0,
        STROKE,
        &[
            path("M 3 0 L 15 0 A 3 3 0 0 1 18 3 L 18 9 A 3 3 0 0 1 15 12 L 3 12 A 3 3 0 0 1 0 9 L 0 3 A 3 3 0 0 1 3 0 Z", Filled),
            rect(18.0, 4.0, 2.0, 4.0, Filled),
            path("M 5 3 L 5 9 M 9 3 L 9 9 M 13 3 L 13 9", Unfilled),
        ],
    ),
    IconGlyph::new(
        "capability",
        20.0,
        20.0,
        STROKE,
        &[
            rect(0.0, 14.0, 6.0, 6.0, Filled),
            rect(7.0, 14.0, 6.0, 6.0, Filled),
            rect(14.0, 14.0, 6.0, 6.0, Filled),
            rect(7.0, 7.0, 6.0, 6.0, Filled),
            rect(14.0, 7.0, 6.0, 6.0, Filled),
            rect(14.0, 0.0, 6.0, 6.0, Filled),
        ],
    ),
    IconGlyph::new(
        "value-stream",
        20.0,
        10.0,
        STROKE,
        &[path("M 0 0 L 15 0 L 20 5 L 15 10 L 0 10 L 5 5 Z", Filled)],
    ),
    IconGlyph::new(
        "course-of-action",
        20.0,
        20.0,
        STROKE,
        &[
            circle(13.0, 7.0, 6.5, Filled),
            circle(13.0, 7.0, 3.5, Filled),
            circle(13.0, 7.0, 1.0, Filled),
            path("M 0 20 C 1 14 4 12 8 12", Unfilled),
        ],
    ),
    IconGlyph::new(
        "work-package",
        20.0,
        16.0,
        STROKE,
        &[path(
            "M 14 2 A 7 7 0 1 0 16 10 M 12 0 L 15 2.5 L 12 5.5",
            Unfilled,
        )],
    ),
    IconGlyph::new(
        "plateau",
        20.0,
        14.0,
        STROKE,
        &[path("M 8 1 L 20 1 M 4 7 L 16 7 M 0 13 L 12 13", Unfilled)],
    ),
    IconGlyph::new(
        "gap",
        20.0,
        20.0,
        STROKE,
        &[
            circle(10.0, 10.0, 8.0, Filled),
            path("M 0 7.5 L 20 7.5 M 0 12.5 L 20 12.5", Unfilled),
        ],
    ),
    IconGlyph::new(
        "location",
        14.0,
        20.0,
        STROKE,
        &[
            path("M 7 20 L 1.5 10.5 A 7 7 0 1 1 12.5 10.5 Z", Filled),
            circle(7.0, 7.0, 2.5, Unfilled),
        ],
    ),
];
