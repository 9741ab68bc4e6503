//! REPL input parsing.

/// Slash commands offered for completion and hints.
pub const COMMANDS: &[&str] = &[
    "/mood",
    "/journal",
    "/summary",
    "/clear",
    "/resources",
    "/wellness",
    "/chat",
    "/help",
];

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text for the chatbot.
    Chat(String),
    /// `/mood` toggles the mood panel, `/mood <label>` saves today's mood.
    Mood(Option<String>),
    /// `/journal` toggles the journal panel, `/journal <text>` saves an entry.
    Journal(Option<String>),
    Summary,
    Clear,
    Resources,
    Wellness,
    /// Opens or closes the chat panel.
    ToggleChat,
    Help,
    Quit,
    Unknown(String),
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return Command::Empty;
        }
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            return Command::Quit;
        }
        if !trimmed.starts_with('/') {
            return Command::Chat(trimmed.to_string());
        }

        let (name, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (trimmed, ""),
        };
        let argument = (!rest.is_empty()).then(|| rest.to_string());

        match name {
            "/mood" => Command::Mood(argument),
            "/journal" => Command::Journal(argument),
            "/summary" => Command::Summary,
            "/clear" => Command::Clear,
            "/resources" => Command::Resources,
            "/wellness" => Command::Wellness,
            "/chat" => Command::ToggleChat,
            "/help" => Command::Help,
            other => Command::Unknown(other.to_string()),
        }
    }
}
