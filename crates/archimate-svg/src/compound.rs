//! Detection of view elements that visually contain other elements.
//!
//! A compound element gets a top-aligned label so that the label does not
//! collide with the elements drawn inside it. The flag is a per-render
//! overlay: detection returns new view elements and leaves the view intact.

use log::trace;

use archimate_svg_core::{geometry::Bounds, semantic::ViewElement};

/// Returns true when `child` lies fully inside `parent`, edges included.
///
/// Two equal rectangles do not contain each other.
pub fn is_contained_within(child: Bounds, parent: Bounds) -> bool {
    child != parent && parent.contains(child)
}

/// Returns one flag per element of `elements`, true for compound elements.
///
/// Every ordered pair of distinct positions is compared, so the cost is
/// quadratic in the element count.
pub fn identify_compound_elements(elements: &[ViewElement]) -> Vec<bool> {
    elements
        .iter()
        .enumerate()
        .map(|(parent_index, parent)| {
            elements.iter().enumerate().any(|(child_index, child)| {
                child_index != parent_index && is_contained_within(child.bounds(), parent.bounds())
            })
        })
        .collect()
}

/// Returns a copy of `elements` where compound elements carry the compound
/// style flag.
///
/// Elements that contain nothing are returned unchanged.
pub fn process_compound_elements(elements: &[ViewElement]) -> Vec<ViewElement> {
    let flags = identify_compound_elements(elements);

    elements
        .iter()
        .zip(flags)
        .map(|(element, is_compound)| {
            if is_compound {
                trace!(element_ref = element.element_ref(); "Compound element");
                let style = element.style().clone().with_compound(true);
                element.clone().with_style(style)
            } else {
                element.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_element(id: &str, x: f32, y: f32, width: f32, height: f32) -> ViewElement {
        ViewElement::new(id, Bounds::new(x, y, width, height))
    }

    #[test]
    fn test_container_marked_compound() {
        let elements = vec![
            view_element("a", 0.0, 0.0, 200.0, 200.0),
            view_element("b", 10.0, 10.0, 50.0, 50.0),
        ];

        let processed = process_compound_elements(&elements);
        assert!(processed[0].style().is_compound());
        assert!(!processed[1].style().is_compound());
        assert_eq!(processed[1], elements[1]);
        // The input is left untouched
        assert!(!elements[0].style().is_compound());
    }

    #[test]
    fn test_containment_is_inclusive() {
        let parent = Bounds::new(0.0, 0.0, 100.0, 100.0);
        assert!(is_contained_within(Bounds::new(0.0, 0.0, 100.0, 50.0), parent));
        assert!(is_contained_within(Bounds::new(50.0, 50.0, 50.0, 50.0), parent));
        assert!(!is_contained_within(Bounds::new(50.0, 50.0, 51.0, 50.0), parent));
    }

    #[test]
    fn test_identical_bounds_not_compound() {
        let elements = vec![
            view_element("a", 10.0, 10.0, 80.0, 40.0),
            view_element("b", 10.0, 10.0, 80.0, 40.0),
        ];
        assert_eq!(identify_compound_elements(&elements), vec![false, false]);
    }

    #[test]
    fn test_overlap_is_not_containment() {
        let elements = vec![
            view_element("a", 0.0, 0.0, 100.0, 100.0),
            view_element("b", 50.0, 50.0, 100.0, 100.0),
        ];
        assert_eq!(identify_compound_elements(&elements), vec![false, false]);
    }

    #[test]
    fn test_nested_containers() {
        let elements = vec![
            view_element("outer", 0.0, 0.0, 300.0, 300.0),
            view_element("middle", 10.0, 10.0, 200.0, 200.0),
            view_element("inner", 20.0, 20.0, 50.0, 50.0),
        ];
        assert_eq!(identify_compound_elements(&elements), vec![true, true, false]);
    }

    #[test]
    fn test_same_element_shown_twice() {
        // One element may appear several times on a view
        let elements = vec![
            view_element("a", 0.0, 0.0, 200.0, 200.0),
            view_element("a", 10.0, 10.0, 20.0, 20.0),
        ];
        assert_eq!(identify_compound_elements(&elements), vec![true, false]);
    }

    #[test]
    fn test_empty_view() {
        assert!(process_compound_elements(&[]).is_empty());
    }
}
