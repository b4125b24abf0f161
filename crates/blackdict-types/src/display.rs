/// What the output region shows. Produced by the renderer, consumed by a sink.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayModel {
    /// A search is in flight
    Loading { word: String, language_name: String },
    Message(Notice),
    Definition(DefinitionView),
}

/// User-facing failure messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EnterWord,
    NotFound,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::EnterWord => "Please enter a word to search.",
            Notice::NotFound => "Word not found. Please check the spelling or try another word.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionView {
    pub header: Header,
    pub meanings: Vec<MeaningBlock>,
    /// `None` when the entry carried no translations
    pub translations: Option<Vec<TranslationItem>>,
    pub audio: Option<AudioBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub headword: String,
    pub phonetic: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeaningBlock {
    pub part_of_speech: String,
    pub items: Vec<DefinitionItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionItem {
    /// 1-based, restarts for every block
    pub number: usize,
    pub text: String,
    pub example: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslationItem {
    pub number: usize,
    pub text: String,
    pub lang: String,
}

impl TranslationItem {
    /// `"<text> (<lang>)"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.text, self.lang)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioBlock {
    pub url: String,
}
