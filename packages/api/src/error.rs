use thiserror::Error;

/// Failure taxonomy for the remote facade.
///
/// The mock backend never produces these, but the pathways exist so the page
/// views are already written against a fallible client. All of them are
/// caught at the view boundary and surfaced as a notification; none
/// propagate further.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    #[error("invalid credentials")]
    Authentication,
    #[error("failed to load {0}")]
    Load(String),
    #[error("product {0} not found")]
    NotFound(u64),
    #[error("failed to save product: {0}")]
    Submit(String),
}
