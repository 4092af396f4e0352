//! Framework operations and the constraint rules they enforce.

mod framework;
mod validation;
pub use framework::FrameworkService;
pub use validation::{Constraint, FieldValue, RequestValidator, NAME_MAX_LENGTH};
