//! Error classification shared by every service.

/// Coarse error category used to pick a transport status at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent invalid input.
    BadRequest,

    /// A referenced resource does not exist.
    NotFound,

    /// A collaborator could not be reached.
    ServiceUnavailable,

    /// Anything unclassified, usually a storage failure.
    Internal,
}
