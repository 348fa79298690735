//! Corner classification for a single quadrant
//!
//! The decision is made from three booleans: whether the horizontal, vertical
//! and diagonal neighbors around the quadrant share the tile's identity. The
//! diagonal only matters once both orthogonal neighbors match, which collapses
//! the eight input combinations to five shape classes.

use crate::tiles::autotile::ShapeClass;

/// Classify a quadrant corner from its neighbors' identity matches
///
/// First match wins: no orthogonal match is [`ShapeClass::Outside`], a
/// missing horizontal match is [`ShapeClass::Vertical`], a missing vertical
/// match is [`ShapeClass::Horizontal`], a missing diagonal match is
/// [`ShapeClass::Inside`], and everything else is [`ShapeClass::Fill`].
pub const fn classify(
    same_horizontal: bool,
    same_vertical: bool,
    same_diagonal: bool,
) -> ShapeClass {
    if !same_horizontal && !same_vertical {
        ShapeClass::Outside
    } else if !same_horizontal {
        ShapeClass::Vertical
    } else if !same_vertical {
        ShapeClass::Horizontal
    } else if !same_diagonal {
        ShapeClass::Inside
    } else {
        ShapeClass::Fill
    }
}
