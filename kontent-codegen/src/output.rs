//! Progress reporting for generation runs.

/// Receives user-facing progress from a [`Generator`](crate::Generator) run.
///
/// Diagnostic detail goes to `tracing`; this is what a user of the CLI
/// sees.
pub trait Output {
    /// Resolver notices and the final "finished" line.
    fn info(&mut self, msg: &str);

    /// A model file that was written, as `filename (display name)`.
    fn added_item(&mut self, text: &str);

    /// A skipped element.
    fn warning(&mut self, msg: &str);

    /// The error that stopped the run, with its causes.
    fn error(&mut self, msg: &str);

    /// Dry-run header naming the file about to be shown.
    fn divider(&mut self, label: &str);

    /// Dry-run model source.
    fn preformatted(&mut self, text: &str);
}

/// Prints to stdout, with warnings and errors on stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn info(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// A message captured by [`BufferedOutput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Info(String),
    Added(String),
    Warning(String),
    Error(String),
    Divider(String),
    Preformatted(String),
}

/// Output that records messages instead of printing them.
#[derive(Debug, Default)]
pub struct BufferedOutput {
    pub messages: Vec<Message>,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().filter_map(|m| match m {
            Message::Warning(s) => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn added(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().filter_map(|m| match m {
            Message::Added(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

impl Output for BufferedOutput {
    fn info(&mut self, msg: &str) {
        self.messages.push(Message::Info(msg.to_string()));
    }

    fn added_item(&mut self, text: &str) {
        self.messages.push(Message::Added(text.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.messages.push(Message::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.messages.push(Message::Error(msg.to_string()));
    }

    fn divider(&mut self, label: &str) {
        self.messages.push(Message::Divider(label.to_string()));
    }

    fn preformatted(&mut self, text: &str) {
        self.messages.push(Message::Preformatted(text.to_string()));
    }
}
