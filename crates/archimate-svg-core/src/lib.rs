//! ArchiMate SVG Core Types and Definitions
//!
//! This crate provides the foundational types used to turn an ArchiMate view into
//! SVG markup. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes, bounds and boundary intersection ([`geometry`] module)
//! - **Semantic**: The typed input model of elements, relationships and views ([`semantic`] module)
//! - **Draw**: Text layout, base shapes, icons, arrowheads and line styles ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;
