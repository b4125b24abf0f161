use std::collections::HashSet;

use blackdict_config::{Config, OutputFormat};
use blackdict_render::html::to_html;
use blackdict_render::text::to_text;
use blackdict_types::{AppEvent, DisplayModel, Language, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

const HELP: &str = "Type a word and press Enter. Commands: :lang <code>, :langs, :quit";

#[derive(Debug, Clone)]
pub struct FrontendSettings {
    pub output: OutputFormat,
    pub prompt: bool,
    /// Off for words given as arguments, so `:quit` is looked up like any word
    pub commands: bool,
    pub language: Language,
    pub discard_stale_results: bool,
}

impl FrontendSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            output: config.ui.output,
            prompt: config.ui.prompt,
            commands: config.ui.commands,
            language: config.lookup.initial_language,
            discard_stale_results: config.lookup.discard_stale_results,
        }
    }
}

/// Line-oriented stand-in for the search form: every input line is the
/// text field plus Enter, `:lang` is the language selector, and the
/// writer is the output region.
pub struct Frontend<W> {
    output: W,
    settings: FrontendSettings,
    language: Language,
    /// Current text field value
    word: String,
    last_seq: u64,
    /// Searches that have not delivered their final display yet
    pending: HashSet<u64>,
}

impl<W: AsyncWrite + Unpin> Frontend<W> {
    pub fn new(output: W, settings: FrontendSettings) -> Self {
        Self {
            output,
            language: settings.language,
            settings,
            word: String::new(),
            last_seq: 0,
            pending: HashSet::new(),
        }
    }

    /// Runs until input ends (and in-flight searches settle) or `cancel`
    /// fires. Hands the writer back.
    pub async fn run<R>(
        mut self,
        input: R,
        app_to_ui_rx: AsyncReceiver<AppEvent>,
        ui_to_app_tx: AsyncSender<UiEvent>,
        cancel: CancellationToken,
    ) -> anyhow::Result<W>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut reading = true;

        loop {
            if !reading && self.pending.is_empty() {
                break;
            }

            tokio::select! {
                _ = cancel.cancelled() => break,
                line = lines.next_line(), if reading => match line? {
                    Some(line) => reading = self.handle_line(&line, &ui_to_app_tx).await?,
                    None => {
                        tracing::debug!("Input closed, {} searches in flight", self.pending.len());
                        reading = false;
                    }
                },
                event = app_to_ui_rx.recv() => match event {
                    Ok(event) => self.handle_app_event(event).await?,
                    Err(e) => {
                        tracing::debug!("App channel closed: {e}");
                        break;
                    }
                },
            }
        }

        if let Err(e) = ui_to_app_tx.send(UiEvent::Close).await {
            tracing::debug!("Backend already gone: {e}");
        }
        self.output.flush().await?;

        Ok(self.output)
    }

    /// Returns `false` when the user asked to quit
    async fn handle_line(
        &mut self,
        line: &str,
        ui_to_app_tx: &AsyncSender<UiEvent>,
    ) -> anyhow::Result<bool> {
        let line = line.trim();

        let command = line.strip_prefix(':').filter(|_| self.settings.commands);
        let Some(command) = command else {
            self.word = line.to_string();
            self.search(ui_to_app_tx).await?;
            return Ok(true);
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("quit" | "q"), _) => return Ok(false),
            (Some("langs"), _) => self.write_languages().await?,
            (Some("lang"), Some(code)) => match code.parse::<Language>() {
                Ok(language) => {
                    self.language = language;
                    tracing::info!("Language selected: {} ({language})", language.name());
                    // A selection change re-runs the current word
                    if !self.word.is_empty() {
                        self.search(ui_to_app_tx).await?;
                    }
                }
                Err(e) => self.write_line(&e.to_string()).await?,
            },
            _ => self.write_line(HELP).await?,
        }

        Ok(true)
    }

    async fn search(&mut self, ui_to_app_tx: &AsyncSender<UiEvent>) -> anyhow::Result<()> {
        self.last_seq += 1;
        let seq = self.last_seq;
        self.pending.insert(seq);

        ui_to_app_tx
            .send(UiEvent::Search {
                seq,
                word: self.word.clone(),
                language: self.language,
            })
            .await?;

        Ok(())
    }

    async fn handle_app_event(&mut self, event: AppEvent) -> anyhow::Result<()> {
        match event {
            AppEvent::BackendReady => {
                tracing::debug!("Backend ready");
                self.write_prompt().await?;
            }
            AppEvent::Display { seq, model } => {
                let settled = !matches!(model, DisplayModel::Loading { .. });
                if settled {
                    self.pending.remove(&seq);
                }

                if self.settings.discard_stale_results && seq < self.last_seq {
                    tracing::debug!("Dropping display of superseded search #{seq}");
                    return Ok(());
                }

                let rendered = match self.settings.output {
                    OutputFormat::Text => to_text(&model),
                    OutputFormat::Html => format!("{}\n", to_html(&model)?.trim_end()),
                };
                self.output.write_all(rendered.as_bytes()).await?;

                if settled {
                    self.write_prompt().await?;
                }
                self.output.flush().await?;
            }
        }

        Ok(())
    }

    async fn write_languages(&mut self) -> anyhow::Result<()> {
        let mut listing = String::new();
        for language in Language::ALL {
            let marker = if language == self.language { '*' } else { ' ' };
            let suffix = if language.is_default() { " (default)" } else { "" };
            listing.push_str(&format!(
                "{marker} {} {}{suffix}\n",
                language.code(),
                language.name()
            ));
        }
        self.output.write_all(listing.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn write_line(&mut self, text: &str) -> anyhow::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn write_prompt(&mut self) -> anyhow::Result<()> {
        if self.settings.prompt {
            let prompt = format!("[{}] > ", self.language.code());
            self.output.write_all(prompt.as_bytes()).await?;
            self.output.flush().await?;
        }
        Ok(())
    }
}
