#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch `data/digest.json` (the loader owns the single retry).
    LoadDigest,
    /// Loading is over for this session; surface the reason in the logs.
    ReportLoadFailure { message: String },
}
