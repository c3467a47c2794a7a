use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use services::StudyController;
use study_core::StudySession;
use study_core::model::TopicSelector;

use crate::command::Command;
use crate::error::AppError;
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front end over one [`StudySession`].
pub struct Shell {
    controller: StudyController,
    session: StudySession,
    topic: TopicSelector,
}

impl Shell {
    #[must_use]
    pub fn new(controller: StudyController, topic: TopicSelector) -> Self {
        Self {
            controller,
            session: StudySession::new(),
            topic,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &StudySession {
        &self.session
    }

    /// Read commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` when reading input or writing output fails.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "Statistics study session. Type `help` for commands.")?;
        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                break;
            };
            let flow = match Command::parse(&line) {
                Ok(Some(command)) => self.handle(command, out).await?,
                Ok(None) => Flow::Continue,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    async fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, AppError> {
        debug!(?command, "handling command");
        match command {
            Command::Help => writeln!(out, "{}", render::HELP)?,
            Command::Topics => write!(out, "{}", render::topic_list(self.topic))?,
            Command::Topic(selector) => {
                self.topic = selector;
                writeln!(out, "Topic: {}", selector.label())?;
            }
            Command::Generate(selector) => {
                if let Some(selector) = selector {
                    self.topic = selector;
                }
                writeln!(out, "Thinking...")?;
                match self.controller.generate(&mut self.session, self.topic).await {
                    Ok(question) => write!(out, "{}", render::question(question))?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            Command::Select(label) => {
                self.session.select_answer(label);
                writeln!(out, "Selected: {label}")?;
            }
            Command::Submit(label) => {
                let label = label.unwrap_or_else(|| self.session.selected_answer());
                match self.controller.submit(&mut self.session, label) {
                    Ok(outcome) => writeln!(out, "{}", render::submit_outcome(&outcome))?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            Command::Explain => {
                writeln!(out, "Analyzing your answer...")?;
                match self.controller.explain(&self.session).await {
                    Ok(text) => writeln!(out, "{text}")?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            Command::Show => match self.session.active_question() {
                Some(question) => write!(out, "{}", render::question(question))?,
                None => writeln!(out, "No question yet. Try `generate`.")?,
            },
            Command::Stats => {
                let report = self.controller.report(&self.session);
                writeln!(out, "{}", render::focus_report(&report))?;
            }
            Command::History => writeln!(out, "{}", render::history(self.session.log()))?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
