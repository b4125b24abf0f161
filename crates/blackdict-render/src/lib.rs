//! Turns lookup outcomes into a [`DisplayModel`] and display models into
//! output for a sink.

pub mod html;
pub mod text;

use blackdict_core::LookupError;
use blackdict_types::{
    AudioBlock, DefinitionItem, DefinitionView, DisplayModel, Entry, Header, LookupRequest,
    MeaningBlock, Notice, TranslationItem,
};

/// Display for a search that has not settled yet
pub fn loading(request: &LookupRequest) -> DisplayModel {
    DisplayModel::Loading {
        word: request.word.clone(),
        language_name: request.language.name().to_string(),
    }
}

pub fn render(result: Result<&Entry, &LookupError>) -> DisplayModel {
    match result {
        Ok(entry) => DisplayModel::Definition(render_entry(entry)),
        Err(err) => render_error(err),
    }
}

/// NotFound and Transport look the same to the user
pub fn render_error(err: &LookupError) -> DisplayModel {
    match err {
        LookupError::EmptyInput => DisplayModel::Message(Notice::EnterWord),
        LookupError::NotFound { .. } | LookupError::Transport(_) => {
            DisplayModel::Message(Notice::NotFound)
        }
    }
}

pub fn render_entry(entry: &Entry) -> DefinitionView {
    let header = Header {
        headword: entry.word.clone(),
        phonetic: non_empty(entry.phonetic.as_deref()),
        note: non_empty(entry.note.as_deref()),
    };

    let meanings = entry
        .meanings
        .iter()
        .map(|meaning| MeaningBlock {
            part_of_speech: meaning.part_of_speech.clone(),
            items: meaning
                .definitions
                .iter()
                .enumerate()
                .map(|(index, def)| DefinitionItem {
                    number: index + 1,
                    text: def.text.clone(),
                    example: non_empty(def.example.as_deref()),
                })
                .collect(),
        })
        .collect();

    let translations = entry
        .translations
        .as_deref()
        .filter(|list| !list.is_empty())
        .map(|list| {
            list.iter()
                .enumerate()
                .map(|(index, t)| TranslationItem {
                    number: index + 1,
                    text: t.text.clone(),
                    lang: t.lang.clone(),
                })
                .collect()
        });

    let audio = entry.first_audio_url().map(|url| AudioBlock {
        url: url.to_string(),
    });

    DefinitionView {
        header,
        meanings,
        translations,
        audio,
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use blackdict_source::SourceError;
    use blackdict_types::{Definition, Language, Meaning, PhoneticAudio, Translation};

    use super::*;

    fn meaning(pos: &str, defs: &[&str]) -> Meaning {
        Meaning {
            part_of_speech: pos.to_string(),
            definitions: defs
                .iter()
                .map(|d| Definition {
                    text: d.to_string(),
                    example: None,
                })
                .collect(),
        }
    }

    #[test]
    fn numbering_restarts_per_meaning() {
        let entry = Entry {
            word: "run".into(),
            meanings: vec![
                meaning("verb", &["move fast", "operate"]),
                meaning("noun", &["an act of running", "a sequence"]),
                meaning("adjective", &["melted", "smuggled"]),
            ],
            ..Default::default()
        };

        let view = render_entry(&entry);

        let numbers: Vec<Vec<usize>> = view
            .meanings
            .iter()
            .map(|m| m.items.iter().map(|i| i.number).collect())
            .collect();
        assert_eq!(numbers, vec![vec![1, 2], vec![1, 2], vec![1, 2]]);
        assert_eq!(view.meanings.iter().map(|m| m.items.len()).sum::<usize>(), 6);
        assert!(view.translations.is_none());
        assert!(view.audio.is_none());
        assert!(view.header.phonetic.is_none());
        assert!(view.header.note.is_none());
    }

    #[test]
    fn audio_comes_from_first_playable_phonetic() {
        let entry = Entry {
            word: "tomato".into(),
            phonetics: Some(vec![
                PhoneticAudio {
                    text: Some("/təˈmɑːtəʊ/".into()),
                    audio_url: None,
                },
                PhoneticAudio {
                    text: None,
                    audio_url: Some("https://audio.example/tomato-us.mp3".into()),
                },
            ]),
            ..Default::default()
        };

        let view = render_entry(&entry);
        assert_eq!(
            view.audio,
            Some(AudioBlock {
                url: "https://audio.example/tomato-us.mp3".into()
            })
        );
    }

    #[test]
    fn translations_are_numbered_and_labelled() {
        let entry = Entry {
            word: "cat".into(),
            translations: Some(vec![
                Translation {
                    text: "gato".into(),
                    lang: "es".into(),
                },
                Translation {
                    text: "chat".into(),
                    lang: "fr".into(),
                },
            ]),
            ..Default::default()
        };

        let items = render_entry(&entry).translations.unwrap();
        assert_eq!(items[0].number, 1);
        assert_eq!(items[1].label(), "chat (fr)");
    }

    #[test]
    fn empty_translation_list_is_omitted() {
        let entry = Entry {
            word: "cat".into(),
            translations: Some(vec![]),
            ..Default::default()
        };
        assert!(render_entry(&entry).translations.is_none());
    }

    #[test]
    fn errors_map_to_two_messages() {
        assert_eq!(
            render(Err(&LookupError::EmptyInput)),
            DisplayModel::Message(Notice::EnterWord)
        );
        assert_eq!(
            render(Err(&LookupError::NotFound { word: "x".into() })),
            DisplayModel::Message(Notice::NotFound)
        );
        assert_eq!(
            render(Err(&LookupError::Transport(SourceError::Malformed(
                "bad".into()
            )))),
            DisplayModel::Message(Notice::NotFound)
        );
    }

    #[test]
    fn loading_names_the_language() {
        let request = LookupRequest::new("hola", Language::Spanish).unwrap();
        assert_eq!(
            loading(&request),
            DisplayModel::Loading {
                word: "hola".into(),
                language_name: "Spanish".into()
            }
        );
    }
}
