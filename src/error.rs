use thiserror::Error;

/// Two conversion strategies disagreed on the text for one value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("{ty} value {value}: {candidate} -> {candidate_output}, {reference} -> {reference_output}")]
    Mismatch {
        ty: &'static str,
        value: String,
        candidate: String,
        candidate_output: String,
        reference: String,
        reference_output: String,
    },
}
