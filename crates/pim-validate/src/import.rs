//! Row-level import validators.
//!
//! Both validators walk the column descriptors of one imported row, collect
//! violation messages per column label and check the row identifier against
//! the rows already seen.

use pim_model::{
    Attribute, ColumnInfo, ConstraintSet, ErrorsByLabel, ImportError, ImportRecord, ProductValue,
    RawRow, Result, ValueData, ViolationList,
};
use tracing::{debug, trace};

use crate::guesser::{ChainedConstraintGuesser, ConstraintGuesser, default_guesser};
use crate::identifier::{IdentifierChecker, UniqueIdentifierChecker};
use crate::resolver::ConstraintResolver;
use crate::validator::{ConstraintValidator, Validator};

/// Property holding the identifier of non-product entities.
pub const CODE_PROPERTY: &str = "code";

/// Validates one imported record.
pub trait ImportValidator {
    /// Validate `record` column by column.
    ///
    /// Columns with violations overwrite the entry for their label in
    /// `errors`; columns without violations leave it untouched.
    ///
    /// # Errors
    ///
    /// Returns an error when a collaborator fails (missing value, unknown
    /// property, constraint guessing, identifier conflict). No partial report
    /// is returned in that case.
    fn validate(
        &self,
        record: &dyn ImportRecord,
        columns: &[ColumnInfo],
        data: &RawRow,
        errors: ErrorsByLabel,
    ) -> Result<ErrorsByLabel>;
}

/// Validator for products: attribute columns are checked against the
/// attribute's guessed constraints, other columns as plain properties.
pub struct ProductImportValidator<G, V = ConstraintValidator, C = UniqueIdentifierChecker> {
    validator: V,
    resolver: ConstraintResolver<G>,
    identifiers: C,
}

impl ProductImportValidator<ChainedConstraintGuesser> {
    /// Validator using the standard guessers, product property constraints
    /// and an in-memory identifier checker.
    pub fn with_defaults() -> Self {
        Self::new(
            ConstraintValidator::for_products(),
            default_guesser(),
            UniqueIdentifierChecker::new(),
        )
    }
}

impl<G, V, C> ProductImportValidator<G, V, C>
where
    G: ConstraintGuesser,
    V: Validator,
    C: IdentifierChecker,
{
    pub fn new(validator: V, guesser: G, identifiers: C) -> Self {
        Self {
            validator,
            resolver: ConstraintResolver::new(guesser),
            identifiers,
        }
    }

    /// Constraints for `attribute`, guessed once per attribute code.
    ///
    /// # Errors
    ///
    /// Propagates guesser failures.
    pub fn attribute_constraints(&self, attribute: &Attribute) -> Result<ConstraintSet> {
        self.resolver.get_constraints(attribute)
    }

    /// Validate the value of an attribute column.
    ///
    /// # Errors
    ///
    /// Returns an error if the record has no value for the column or the
    /// attribute's constraints cannot be guessed.
    pub fn validate_product_value(
        &self,
        record: &dyn ImportRecord,
        column: &ColumnInfo,
    ) -> Result<ViolationList> {
        let Some(attribute) = column.attribute.as_deref() else {
            return Err(ImportError::MalformedColumn {
                label: column.label.clone(),
            });
        };
        let value = product_value(record, column, attribute)?;
        let constraints = self.attribute_constraints(attribute)?;
        Ok(self.validator.validate_value(value.data(), &constraints))
    }

    /// Value of the first identifier-typed column, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the record has no value for that column.
    pub fn identifier<'r>(
        &self,
        columns: &[ColumnInfo],
        record: &'r dyn ImportRecord,
    ) -> Result<Option<&'r ValueData>> {
        let Some(column) = columns.iter().find(|column| column.is_identifier()) else {
            return Ok(None);
        };
        let Some(attribute) = column.attribute.as_deref() else {
            return Ok(None);
        };
        Ok(Some(product_value(record, column, attribute)?.data()))
    }

    pub fn resolver(&self) -> &ConstraintResolver<G> {
        &self.resolver
    }

    pub fn identifiers(&self) -> &C {
        &self.identifiers
    }
}

impl<G, V, C> ImportValidator for ProductImportValidator<G, V, C>
where
    G: ConstraintGuesser,
    V: Validator,
    C: IdentifierChecker,
{
    fn validate(
        &self,
        record: &dyn ImportRecord,
        columns: &[ColumnInfo],
        data: &RawRow,
        mut errors: ErrorsByLabel,
    ) -> Result<ErrorsByLabel> {
        let identifier = self.identifier(columns, record)?;
        self.identifiers.check(record.kind(), identifier, data)?;

        for column in columns {
            let violations = if column.attribute.is_some() {
                self.validate_product_value(record, column)?
            } else {
                let path = property_path(column)?;
                self.validator.validate_property(record, path)?
            };
            trace!(column = %column.label, violations = violations.len(), "validated column");
            if !violations.is_empty() {
                errors.insert(column.label.clone(), column_messages(&violations));
            }
        }

        debug!(
            kind = record.kind(),
            identifier = %identifier.map(ToString::to_string).unwrap_or_default(),
            labels = errors.len(),
            "validated record"
        );
        Ok(errors)
    }
}

/// Validator for plain entities: every column is a property and the
/// identifier is the `code` property.
pub struct EntityImportValidator<V = ConstraintValidator, C = UniqueIdentifierChecker> {
    validator: V,
    identifiers: C,
}

impl<V: Validator, C: IdentifierChecker> EntityImportValidator<V, C> {
    pub fn new(validator: V, identifiers: C) -> Self {
        Self {
            validator,
            identifiers,
        }
    }

    pub fn identifiers(&self) -> &C {
        &self.identifiers
    }
}

impl<V: Validator, C: IdentifierChecker> ImportValidator for EntityImportValidator<V, C> {
    fn validate(
        &self,
        record: &dyn ImportRecord,
        columns: &[ColumnInfo],
        data: &RawRow,
        mut errors: ErrorsByLabel,
    ) -> Result<ErrorsByLabel> {
        self.identifiers
            .check(record.kind(), record.property(CODE_PROPERTY), data)?;

        for column in columns {
            let violations = self
                .validator
                .validate_property(record, property_path(column)?)?;
            if !violations.is_empty() {
                errors.insert(column.label.clone(), column_messages(&violations));
            }
        }
        Ok(errors)
    }
}

/// Violation messages of one column, each message once, in first-seen order.
fn column_messages(violations: &ViolationList) -> Vec<String> {
    let mut messages: Vec<String> = Vec::with_capacity(violations.len());
    for violation in violations.iter() {
        if !messages.contains(&violation.message) {
            messages.push(violation.message.clone());
        }
    }
    messages
}

fn property_path(column: &ColumnInfo) -> Result<&str> {
    column
        .property_path
        .as_deref()
        .ok_or_else(|| ImportError::MalformedColumn {
            label: column.label.clone(),
        })
}

fn product_value<'r>(
    record: &'r dyn ImportRecord,
    column: &ColumnInfo,
    attribute: &Attribute,
) -> Result<&'r ProductValue> {
    record
        .value(
            &attribute.code,
            column.locale.as_deref(),
            column.scope.as_deref(),
        )
        .ok_or_else(|| ImportError::MissingValue {
            kind: record.kind().to_string(),
            attribute: attribute.code.clone(),
            locale: column.locale.clone(),
            scope: column.scope.clone(),
        })
}
