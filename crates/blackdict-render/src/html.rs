use askama::Template;
use blackdict_types::{DefinitionView, DisplayModel};

/// Loading state shown while a search is in flight
#[derive(Template)]
#[template(path = "loading.html")]
struct LoadingTemplate<'a> {
    word: &'a str,
    language_name: &'a str,
}

#[derive(Template)]
#[template(path = "message.html")]
struct MessageTemplate {
    text: &'static str,
}

/// Header, meaning blocks, translations and audio, in that order
#[derive(Template)]
#[template(path = "definition.html")]
struct DefinitionTemplate<'a> {
    view: &'a DefinitionView,
}

/// Markup for the output region. All text is escaped by the templates.
pub fn to_html(model: &DisplayModel) -> askama::Result<String> {
    match model {
        DisplayModel::Loading {
            word,
            language_name,
        } => LoadingTemplate {
            word,
            language_name,
        }
        .render(),
        DisplayModel::Message(notice) => MessageTemplate {
            text: notice.text(),
        }
        .render(),
        DisplayModel::Definition(view) => DefinitionTemplate { view }.render(),
    }
}
