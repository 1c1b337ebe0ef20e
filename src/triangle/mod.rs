//! Golden-triangle ergonomics - full validation and live drag feedback

pub mod drag;
pub mod validator;

pub use drag::{drag_validation, DragValidation};
pub use validator::{
    check_distance, validate_triangle, DistanceVerdict, PairDistance, TriangleReport,
    TriangleSides,
};
