mod display;
mod entry;
mod events;
mod language;

pub use display::{
    AudioBlock, DefinitionItem, DefinitionView, DisplayModel, Header, MeaningBlock, Notice,
    TranslationItem,
};
pub use entry::{Definition, Entry, LookupRequest, Meaning, PhoneticAudio, Translation};
pub use events::{AppEvent, UiEvent};
pub use language::{Language, UnknownLanguage};
