use std::fmt::Write;

use blackdict_types::{DefinitionView, DisplayModel};

/// Plain terminal rendering with the same block order as the markup
pub fn to_text(model: &DisplayModel) -> String {
    match model {
        DisplayModel::Loading {
            word,
            language_name,
        } => format!("Searching for \"{word}\" in {language_name}...\n"),
        DisplayModel::Message(notice) => format!("{}\n", notice.text()),
        DisplayModel::Definition(view) => definition(view),
    }
}

fn definition(view: &DefinitionView) -> String {
    let mut out = String::new();
    let header = &view.header;

    let _ = writeln!(out, "{}", header.headword);
    if let Some(phonetic) = &header.phonetic {
        let _ = writeln!(out, "{phonetic}");
    }
    if let Some(note) = &header.note {
        let _ = writeln!(out, "{note}");
    }

    for meaning in &view.meanings {
        let _ = writeln!(out, "\n{}", meaning.part_of_speech);
        for item in &meaning.items {
            let _ = writeln!(out, "  {}. {}", item.number, item.text);
            if let Some(example) = &item.example {
                let _ = writeln!(out, "     Example: \"{example}\"");
            }
        }
    }

    if let Some(translations) = &view.translations {
        let _ = writeln!(out, "\nTranslations");
        for item in translations {
            let _ = writeln!(out, "  {}. {}", item.number, item.label());
        }
    }

    if let Some(audio) = &view.audio {
        let _ = writeln!(out, "\nPronunciation: {}", audio.url);
    }

    out
}
