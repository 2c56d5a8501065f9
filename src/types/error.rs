use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    /// A configuration line referenced a name the registry cannot resolve.
    /// Fatal to the whole statement; the policy tree must not be ambiguous.
    #[error("ACL not found: '{name}'")]
    UnknownAcl { name: String },

    #[error("ACL '{name}' is already registered")]
    DuplicateAcl { name: String },
}
