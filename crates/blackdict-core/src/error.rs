use blackdict_source::SourceError;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Empty query")]
    EmptyInput,

    /// Neither the requested nor the fallback language had an entry
    #[error("No entry found for \"{word}\"")]
    NotFound { word: String },

    /// The source could not be asked or answered with garbage
    #[error("Lookup failed: {0}")]
    Transport(#[source] SourceError),
}
