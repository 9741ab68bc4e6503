//! REPL state: one chat session plus the mood, journal, help and chat panels.

use crate::command::Command;
use anyhow::Result;
use mindcare_core::health::HealthInfoProvider;
use mindcare_core::mood::MoodView;
use mindcare_core::view::ModalState;
use mindcare_core::{ChatSession, Journal, MoodTracker, ResponsePipeline};
use std::sync::Arc;
use tracing::warn;

const HELP_LINES: &[&str] = &[
    "<message>          Talk with Mind Care Bot",
    "/mood [label]      Toggle the mood tracker, or save today's mood",
    "/journal [text]    Toggle the journal, or add an entry",
    "/summary           Show the conversation summary",
    "/clear             Start a fresh conversation",
    "/resources         Mental health resources from MyHealthfinder",
    "/wellness          A wellness tip from MyHealthfinder",
    "/chat              Open or close the chat",
    "/help              Toggle this help",
    "quit | exit        Leave",
];

/// What the REPL should print after handling a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Chatbot reply.
    Reply(String),
    /// A titled block of lines.
    Panel { title: String, lines: Vec<String> },
    Notice(String),
    Warning(String),
    Quit,
    Nothing,
}

impl Outcome {
    fn panel(title: &str, lines: Vec<String>) -> Self {
        Outcome::Panel {
            title: title.to_string(),
            lines,
        }
    }
}

pub struct App {
    session: ChatSession,
    pipeline: ResponsePipeline,
    mood: MoodTracker,
    journal: Journal,
    health: Option<Arc<dyn HealthInfoProvider>>,
    chat: ModalState,
    help: ModalState,
}

impl App {
    /// Starts with the chat panel open and every other panel closed.
    pub fn new(
        pipeline: ResponsePipeline,
        mood: MoodTracker,
        journal: Journal,
        health: Option<Arc<dyn HealthInfoProvider>>,
    ) -> Self {
        let mut chat = ModalState::default();
        chat.toggle();
        Self {
            session: ChatSession::new(),
            pipeline,
            mood,
            journal,
            health,
            chat,
            help: ModalState::default(),
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub async fn handle(&mut self, command: Command) -> Result<Outcome> {
        let outcome = match command {
            Command::Empty => Outcome::Nothing,
            Command::Quit => Outcome::Quit,
            Command::Chat(text) => self.chat_message(&text).await,
            Command::Mood(None) => {
                if self.mood.toggle_visibility() {
                    mood_panel(self.mood.view())
                } else {
                    Outcome::Notice("Mood tracker closed.".to_string())
                }
            }
            Command::Mood(Some(label)) => mood_panel(self.mood.save_mood(&label)?),
            Command::Journal(None) => {
                if self.journal.toggle_visibility() {
                    self.journal_panel()
                } else {
                    Outcome::Notice("Journal closed.".to_string())
                }
            }
            Command::Journal(Some(text)) => {
                if self.journal.save_entry(&text)? {
                    self.journal_panel()
                } else {
                    Outcome::Nothing
                }
            }
            Command::Summary => {
                let summary = self.session.summary();
                let topics = if summary.topics.is_empty() {
                    "none".to_string()
                } else {
                    summary.topics_label()
                };
                Outcome::panel(
                    "Conversation Summary",
                    vec![
                        format!("Messages: {}", summary.message_count),
                        format!("Topics discussed: {}", topics),
                        format!("Duration: {} minutes", summary.duration_minutes),
                        format!("Mood: {}", summary.mood),
                    ],
                )
            }
            Command::Clear => {
                self.session.clear();
                Outcome::Notice("Conversation cleared.".to_string())
            }
            Command::Resources => self.resources().await,
            Command::Wellness => self.wellness().await,
            Command::ToggleChat => {
                if self.chat.toggle() {
                    Outcome::Notice("Chat opened.".to_string())
                } else {
                    Outcome::Notice("Chat closed. Type /chat to open it again.".to_string())
                }
            }
            Command::Help => {
                if self.help.toggle() {
                    Outcome::panel(
                        "Commands",
                        HELP_LINES.iter().map(|line| line.to_string()).collect(),
                    )
                } else {
                    Outcome::Notice("Help closed.".to_string())
                }
            }
            Command::Unknown(name) => Outcome::Warning(format!(
                "Unknown command: {name}. Type /help for the list of commands."
            )),
        };
        Ok(outcome)
    }

    async fn chat_message(&mut self, text: &str) -> Outcome {
        if !self.chat.is_open() {
            return Outcome::Notice("Chat is closed. Type /chat to open it.".to_string());
        }
        match self.pipeline.respond(&mut self.session, text).await {
            Some(reply) => Outcome::Reply(reply),
            None => Outcome::Nothing,
        }
    }

    fn journal_panel(&self) -> Outcome {
        let history = self.journal.history();
        let lines = if history.is_empty() {
            vec!["No entries yet.".to_string()]
        } else {
            history.into_iter().map(|entry| format!("• {entry}")).collect()
        };
        Outcome::panel("Recent Entries", lines)
    }

    async fn resources(&self) -> Outcome {
        let Some(health) = &self.health else {
            return offline();
        };
        match health.mental_health_resources().await {
            Ok(resources) if resources.is_empty() => {
                Outcome::Notice("No resources found right now.".to_string())
            }
            Ok(resources) => Outcome::panel(
                "Mental Health Resources",
                resources.iter().map(ToString::to_string).collect(),
            ),
            Err(e) => {
                warn!(error = %e, "mental health resource lookup failed");
                unreachable_service()
            }
        }
    }

    async fn wellness(&self) -> Outcome {
        let Some(health) = &self.health else {
            return offline();
        };
        match health.wellness_tip().await {
            Ok(Some(tip)) => Outcome::panel("Wellness Tip", vec![tip.to_string()]),
            Ok(None) => Outcome::Notice("No wellness tip found right now.".to_string()),
            Err(e) => {
                warn!(error = %e, "wellness tip lookup failed");
                unreachable_service()
            }
        }
    }
}

fn mood_panel(view: MoodView) -> Outcome {
    let mut lines = Vec::new();
    if let Some(today) = view.today_label() {
        lines.push(today);
    }
    if view.history.is_empty() {
        lines.push("No moods recorded yet.".to_string());
    } else {
        lines.extend(view.history.iter().map(|entry| entry.to_string()));
    }
    Outcome::panel("Mood Tracker", lines)
}

fn offline() -> Outcome {
    Outcome::Warning("Health information is disabled in offline mode.".to_string())
}

fn unreachable_service() -> Outcome {
    Outcome::Warning("Could not reach the health information service.".to_string())
}
