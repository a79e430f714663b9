use thiserror::Error;

/// Error taxonomy for the simulation core.
///
/// The local deterministic models (variables, projection, portfolio,
/// comparison) are total over their validated domain: once input passes
/// validation they never fail. Everything here is surfaced to the caller;
/// nothing is swallowed or silently replaced by a fallback result.
#[derive(Debug, Error)]
pub enum SimError {
    /// A value update referenced a variable id with no definition.
    #[error("unknown variable id: {0}")]
    UnknownVariable(String),

    /// Degenerate or out-of-domain input; the model refuses to compute.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Transport failure talking to the analysis provider.
    #[error("analysis provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The provider responded, but the payload does not conform to the
    /// result schema. Never partially accepted.
    #[error("malformed analysis response: {0}")]
    MalformedAnalysisResponse(String),
}
