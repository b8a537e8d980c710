use super::{EntityDescriptor, Result};
use crate::Error;

use std::collections::HashSet;

/// Controls how strictly a descriptor is checked before compilation.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyOptions {
    /// Reject names that are not plain SQL identifiers
    /// (`[A-Za-z_][A-Za-z0-9_]*`).
    ///
    /// Off by default: names are otherwise spliced into the generated DDL and
    /// model verbatim.
    pub strict_identifiers: bool,

    /// Reject field names that repeat within the entity or collide with one
    /// of its generated columns (`<name>_id`, `created_at`, `updated_at`).
    ///
    /// Off by default: such descriptors compile, and the database decides
    /// whether the statement is acceptable.
    pub unique_columns: bool,
}

impl VerifyOptions {
    /// Every check enabled.
    pub fn strict() -> Self {
        Self {
            strict_identifiers: true,
            unique_columns: true,
        }
    }
}

struct Verify<'a> {
    entity: &'a EntityDescriptor,
    options: &'a VerifyOptions,
}

impl EntityDescriptor {
    /// Checks the descriptor is well-formed enough to compile.
    pub fn verify(&self, options: &VerifyOptions) -> Result<()> {
        Verify {
            entity: self,
            options,
        }
        .verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        if self.entity.name.is_empty() {
            return Err(Error::invalid_descriptor("entity name is empty"));
        }

        if self.entity.fields.is_empty() {
            return Err(Error::invalid_descriptor(format!(
                "entity `{}` has no fields",
                self.entity.name
            )));
        }

        if self.options.strict_identifiers {
            self.verify_identifiers()?;
        }

        if self.options.unique_columns {
            self.verify_field_names_are_unique()?;
        }

        Ok(())
    }

    fn verify_identifiers(&self) -> Result<()> {
        verify_identifier("entity", &self.entity.name)?;

        for field in &self.entity.fields {
            verify_identifier("field", &field.name)?;

            // Empty `ref` and `refColumn` mean "not set"
            if let Some(reference) = field.reference() {
                verify_identifier("referenced entity", &reference.entity)?;
                verify_identifier("referenced column", &reference.column)?;
            }
        }

        Ok(())
    }

    fn verify_field_names_are_unique(&self) -> Result<()> {
        let implicit = self.entity.implicit_columns();
        let mut seen = HashSet::new();

        for field in &self.entity.fields {
            if implicit.contains(&field.name) {
                return Err(Error::invalid_descriptor(format!(
                    "field `{}` collides with a generated column of `{}`",
                    field.name, self.entity.name
                )));
            }

            if !seen.insert(&field.name[..]) {
                return Err(Error::invalid_descriptor(format!(
                    "field `{}` is declared more than once in `{}`",
                    field.name, self.entity.name
                )));
            }
        }

        Ok(())
    }
}

fn verify_identifier(what: &str, name: &str) -> Result<()> {
    if !is_identifier(name) {
        return Err(Error::invalid_descriptor(format!(
            "{what} name `{name}` is not a valid SQL identifier"
        )));
    }

    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
