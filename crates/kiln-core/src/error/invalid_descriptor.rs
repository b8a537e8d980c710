use super::Error;

/// Error when an entity descriptor is rejected before compilation.
///
/// This occurs when:
/// - The entity has no name or no fields
/// - Unique columns are enabled and a field name is repeated or collides with
///   an implicit column
/// - Strict identifiers are enabled and a name is not a plain SQL identifier
#[derive(Debug)]
pub(super) struct InvalidDescriptor {
    message: Box<str>,
}

impl std::error::Error for InvalidDescriptor {}

impl core::fmt::Display for InvalidDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid entity descriptor: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid descriptor error.
    pub fn invalid_descriptor(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDescriptor(InvalidDescriptor {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid descriptor error.
    pub fn is_invalid_descriptor(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidDescriptor(_))
    }
}
