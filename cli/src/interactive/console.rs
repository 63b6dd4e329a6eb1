//! Read-eval-print loop over the tutor agent
//!
//! Each turn reads one line. The exit keyword ends the session, a blank line
//! prompts again, anything else is a topic: the explanation is requested and
//! printed, then the quiz question is requested and printed.

use colored::Colorize;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};
use tutor_core::{Operation, TutorAgent};

/// Typing this (any case) ends the session
pub const EXIT_KEYWORD: &str = "quitter";

pub const BANNER: &str = "=== Programming Revision Agent ===";
pub const PROMPT: &str = "Enter a topic to revise (or 'quitter' to exit): ";
pub const PLEASE_WAIT: &str = "Generating, please wait...";
pub const FAREWELL: &str = "Goodbye!";

/// What to do when a turn fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FailurePolicy {
    /// End the session with the error
    #[default]
    Abort,
    /// Report the error and prompt for the next topic
    Continue,
}

/// An agent operation failed during a turn
#[derive(Debug, Error)]
#[error("interaction with the agent failed during {operation}")]
pub struct InteractionError {
    /// Operation that failed
    pub operation: Operation,
    /// What the agent reported
    #[source]
    pub source: tutor_core::Error,
}

/// Errors ending a console session
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Interaction(#[from] InteractionError),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// One line of user input, classified
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Exit,
    Blank,
    Topic(&'a str),
}

impl<'a> Input<'a> {
    fn classify(line: &'a str) -> Self {
        if line.eq_ignore_ascii_case(EXIT_KEYWORD) {
            Input::Exit
        } else if line.trim().is_empty() {
            Input::Blank
        } else {
            Input::Topic(line.trim())
        }
    }
}

/// Console front-end for a [`TutorAgent`]
pub struct ConsoleUi {
    agent: TutorAgent,
    policy: FailurePolicy,
}

impl ConsoleUi {
    /// Create a console over an agent, aborting on the first failed turn
    pub fn new(agent: TutorAgent) -> Self {
        Self {
            agent,
            policy: FailurePolicy::default(),
        }
    }

    /// Choose what happens when a turn fails
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run the loop until the exit keyword or end of input
    ///
    /// The reader is consumed and dropped when this returns, on every path.
    /// Under [`FailurePolicy::Abort`] a failed turn is returned as
    /// [`ConsoleError::Interaction`] and no farewell is printed.
    pub async fn run<R, W>(&self, mut reader: R, mut writer: W) -> Result<(), ConsoleError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        writeln_to(&mut writer, &BANNER.bold().to_string()).await?;

        loop {
            write_to(&mut writer, &format!("\n{}", PROMPT)).await?;

            let Some(line) = read_line_lossy(&mut reader).await? else {
                debug!("End of input, leaving console");
                break;
            };

            match Input::classify(&line) {
                Input::Exit => break,
                Input::Blank => continue,
                Input::Topic(topic) => match self.process_topic(topic, &mut writer).await {
                    Ok(()) => {}
                    Err(ConsoleError::Interaction(err)) if self.policy == FailurePolicy::Continue => {
                        warn!("Turn for '{}' failed: {}", topic, err.source);
                        let report = format!("{}: {}", err, err.source);
                        writeln_to(&mut writer, &report.red().to_string()).await?;
                    }
                    Err(err) => return Err(err),
                },
            }
        }

        writeln_to(&mut writer, FAREWELL).await?;
        Ok(())
    }

    /// Request and print the explanation, then the quiz, for one topic
    async fn process_topic<W>(&self, topic: &str, writer: &mut W) -> Result<(), ConsoleError>
    where
        W: AsyncWrite + Unpin,
    {
        for operation in [Operation::Explain, Operation::CreateQcm] {
            writeln_to(writer, &format!("\n{}", section_title(operation).bold())).await?;
            writeln_to(writer, PLEASE_WAIT).await?;

            let text = self
                .agent
                .run(operation, topic)
                .await
                .map_err(|source| InteractionError { operation, source })?;

            writeln_to(writer, &text).await?;
        }

        Ok(())
    }
}

fn section_title(operation: Operation) -> &'static str {
    match operation {
        Operation::Explain => "--- Concept explanation ---",
        Operation::CreateQcm => "--- Multiple-choice question ---",
    }
}

/// Read one line without its terminator, replacing invalid UTF-8 with U+FFFD
///
/// Returns `None` at end of input.
async fn read_line_lossy<R>(reader: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }

    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

async fn write_to<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> std::io::Result<()> {
    writer.write_all(text.as_bytes()).await?;
    writer.flush().await
}

async fn writeln_to<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> std::io::Result<()> {
    write_to(writer, &format!("{}\n", text)).await
}
