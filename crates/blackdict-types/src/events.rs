use crate::{DisplayModel, Language};

/// Events sent from the front end to the app
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Enter key, or a language change while a word is present.
    /// `word` is the raw field value; the app trims and validates it.
    Search {
        seq: u64,
        word: String,
        language: Language,
    },
    Close,
}

/// Events sent from the app to the front end
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Replaces the output region for search `seq`
    Display { seq: u64, model: DisplayModel },
    BackendReady,
}
