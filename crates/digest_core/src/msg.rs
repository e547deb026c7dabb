use crate::{DigestDocument, Tab};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The controller finished wiring and wants the digest.
    Started,
    /// The loader produced a document (after at most one retry).
    DigestLoaded(Box<DigestDocument>),
    /// The loader gave up; carries the last error for diagnostics.
    DigestLoadFailed { message: String },
    /// User clicked one of the tab controls.
    TabSelected(Tab),
    /// User picked an entry in the date control. The raw control value is
    /// passed through; an empty value means "back to the newest date".
    DateSelected(String),
    /// Fallback for placeholder wiring.
    NoOp,
}
