//! Which ends of a connector carry a glyph.

use archimate_svg_core::{
    draw::ArrowHeadKind,
    semantic::{AccessType, RelationshipType},
};

/// Glyph flags for the two ends of a connector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrowPlacement {
    pub source: bool,
    pub target: bool,
}

impl ArrowPlacement {
    pub const fn new(source: bool, target: bool) -> Self {
        Self { source, target }
    }
}

/// Returns the ends of a `relationship_type` connector that carry a glyph.
///
/// The access mode only matters for [`RelationshipType::Access`]: reads point
/// at the source, writes at the target, and an access without a mode is drawn
/// as a write. Every relationship without a dedicated rule gets a target glyph.
pub fn arrow_placement(
    relationship_type: &RelationshipType,
    access_type: Option<AccessType>,
) -> ArrowPlacement {
    match relationship_type {
        RelationshipType::Composition | RelationshipType::Aggregation => {
            ArrowPlacement::new(true, false)
        }
        RelationshipType::Assignment => ArrowPlacement::new(true, true),
        RelationshipType::Association => ArrowPlacement::new(false, false),
        RelationshipType::Access => match access_type {
            Some(AccessType::Read) => ArrowPlacement::new(true, false),
            Some(AccessType::ReadWrite) => ArrowPlacement::new(true, true),
            Some(AccessType::Write) | None => ArrowPlacement::new(false, true),
        },
        _ => ArrowPlacement::new(false, true),
    }
}

/// Returns the glyph drawn at the source end of `relationship_type`.
pub fn source_arrow_head(relationship_type: &RelationshipType) -> Option<ArrowHeadKind> {
    match relationship_type {
        RelationshipType::Composition => Some(ArrowHeadKind::FilledDiamond),
        RelationshipType::Aggregation => Some(ArrowHeadKind::Diamond),
        RelationshipType::Assignment => Some(ArrowHeadKind::FilledCircle),
        RelationshipType::Access => Some(ArrowHeadKind::Open),
        _ => None,
    }
}

/// Returns false for source glyphs that sit on the line instead of ending it.
pub fn retracts_source(relationship_type: &RelationshipType) -> bool {
    *relationship_type != RelationshipType::Assignment
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn relationship_type_strategy() -> impl Strategy<Value = RelationshipType> {
        prop::sample::select(RelationshipType::ALL.to_vec())
    }

    fn access_type_strategy() -> impl Strategy<Value = Option<AccessType>> {
        prop::option::of(prop::sample::select(vec![
            AccessType::Read,
            AccessType::Write,
            AccessType::ReadWrite,
        ]))
    }

    fn check_placement_deterministic(
        relationship_type: &RelationshipType,
        access_type: Option<AccessType>,
    ) -> Result<(), TestCaseError> {
        let first = arrow_placement(relationship_type, access_type);
        let second = arrow_placement(relationship_type, access_type);
        prop_assert_eq!(first, second);
        Ok(())
    }

    fn check_source_glyph_exists(
        relationship_type: &RelationshipType,
        access_type: Option<AccessType>,
    ) -> Result<(), TestCaseError> {
        if arrow_placement(relationship_type, access_type).source {
            prop_assert!(source_arrow_head(relationship_type).is_some());
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn placement_deterministic(
            relationship_type in relationship_type_strategy(),
            access_type in access_type_strategy(),
        ) {
            check_placement_deterministic(&relationship_type, access_type)?;
        }

        #[test]
        fn source_glyph_exists(
            relationship_type in relationship_type_strategy(),
            access_type in access_type_strategy(),
        ) {
            check_source_glyph_exists(&relationship_type, access_type)?;
        }
    }
}
