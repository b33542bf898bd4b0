//! Glue code tying the quiz session to stdin and stdout.
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time;

use quiz_core::GameAction;
use quiz_runtime::QuizSession;

use crate::input::{self, Command};
use crate::presentation;

/// Whether the input loop should keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct CliApp {
    session: QuizSession,
    /// True once the current round's score record has been printed.
    submitted: bool,
}

impl CliApp {
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            submitted: false,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        tracing::info!("CLI client starting...");

        println!("{}\n", presentation::help_text());
        println!("{}", presentation::status_line(self.session.state()));

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let feedback_wait = self.feedback_wait();

            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };
                    if self.handle_line(&line)? == Flow::Quit {
                        break;
                    }
                }
                _ = time::sleep(feedback_wait.unwrap_or_default()), if feedback_wait.is_some() => {
                    self.handle_feedback_tick()?;
                }
            }
        }

        tracing::info!(
            "CLI client exiting after {} actions",
            self.session.record().len()
        );
        Ok(())
    }

    /// Time left until the pending feedback should be cleared.
    fn feedback_wait(&self) -> Option<Duration> {
        let deadline = self.session.feedback_deadline()?;
        let now = self.session.now();
        Some(Duration::from_millis(
            deadline.as_millis().saturating_sub(now.as_millis()),
        ))
    }

    fn handle_feedback_tick(&mut self) -> Result<()> {
        let now = self.session.now();
        if self.session.poll_feedback(now)?.is_some() {
            tracing::trace!("feedback cleared");
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => println!("{}", presentation::help_text()),
            Command::List => println!("{}", presentation::region_list(self.session.state())),
            Command::None => {}
            Command::Select(typed) => {
                let region = input::resolve_guess(self.session.state(), &typed);
                self.dispatch(GameAction::SelectRegion(region))?;
            }
            command => {
                if let Some(action) = command.into_action() {
                    self.dispatch(action)?;
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn dispatch(&mut self, action: GameAction) -> Result<()> {
        let event = match self.session.dispatch(action) {
            Ok(event) => event,
            Err(err) if !err.severity().is_internal() => {
                println!("Cannot do that: {err}");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        if let Some(line) = presentation::event_line(&event) {
            println!("{line}");
        }
        if let Some(line) = presentation::feedback_line(self.session.state()) {
            println!("{line}");
        }
        println!("{}", presentation::status_line(self.session.state()));

        self.report_round_end()
    }

    fn report_round_end(&mut self) -> Result<()> {
        match self.session.submission() {
            Some(submission) if !self.submitted => {
                self.submitted = true;
                println!(
                    "Final score: {} correct, {} errors, best streak {}, {}s",
                    submission.score,
                    submission.errors,
                    submission.best_streak,
                    submission.duration_secs
                );
                println!("{}", serde_json::to_string_pretty(&submission)?);
            }
            Some(_) => {}
            None => self.submitted = false,
        }
        Ok(())
    }
}
