pub mod attribute;
pub mod column;
pub mod constraint;
pub mod error;
pub mod record;
pub mod value;
pub mod violation;

pub use attribute::{Attribute, AttributeType, ValidationRule};
pub use column::ColumnInfo;
pub use constraint::{Constraint, ConstraintSet, empty_constraints};
pub use error::{ImportError, Result};
pub use record::{Entity, ImportRecord, PRODUCT_KIND, Product, RawRow};
pub use value::{ProductValue, ValueData};
pub use violation::{ErrorsByLabel, Violation, ViolationList};
