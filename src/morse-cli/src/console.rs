// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Interactive menu around the converter.
//!
//! The console reads one line per prompt and keeps going until the user picks
//! Exit, input ends, or the shutdown future resolves (Ctrl+C in the binary).
//! I/O failures inside a round are reported and the menu is shown again.

use std::future::Future;
use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use morse_core::Converter;

use crate::config::ConsoleConfig;

const RULE_WIDTH: usize = 50;

const MENU_PROMPT: &str = "\nSelect option (1-3): ";
const ENCODE_PROMPT: &str = "Enter text to convert to Morse code: ";
const DECODE_PROMPT: &str = "Enter Morse code (use spaces between letters, '/' between words): ";

const EMPTY_TEXT: &str = "Please enter some text!\n";
const EMPTY_CODE: &str = "Please enter some Morse code!\n";
const INVALID_OPTION: &str = "Invalid option! Please select 1, 2, or 3.\n";
const GOODBYE: &str = "Thank you for using Morse Code Converter!\n";
const INTERRUPTED: &str = "\n\nProgram interrupted. Goodbye!\n";

/// Why the console stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Menu option 3.
    Quit,
    /// The shutdown future resolved.
    Interrupted,
    /// Input was closed.
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Encode,
    Decode,
    Exit,
}

fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim() {
        "1" => Some(Choice::Encode),
        "2" => Some(Choice::Decode),
        "3" => Some(Choice::Exit),
        _ => None,
    }
}

enum Step {
    Continue,
    Quit,
    EndOfInput,
}

enum Event {
    Step(io::Result<Step>),
    Shutdown,
}

pub fn banner() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{rule}\n          MORSE CODE CONVERTER\n{rule}\nOptions:\n\
         1. Text to Morse Code\n2. Morse Code to Text\n3. Exit\n{rule}\n"
    )
}

pub struct Console<R, W> {
    reader: R,
    writer: W,
    converter: Converter<'static>,
    options: ConsoleConfig,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, converter: Converter<'static>, options: ConsoleConfig) -> Self {
        Self {
            reader,
            writer,
            converter,
            options,
        }
    }

    /// Run the menu loop until it ends.
    pub async fn run<S>(&mut self, shutdown: S) -> ExitReason
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        if self.options.show_banner {
            if let Err(e) = self.write(&banner()).await {
                warn!("Failed to print banner: {}", e);
            }
        }

        loop {
            let event = tokio::select! {
                step = self.step() => Event::Step(step),
                _ = &mut shutdown => Event::Shutdown,
            };

            match event {
                Event::Step(Ok(Step::Continue)) => {}
                Event::Step(Ok(Step::Quit)) => return ExitReason::Quit,
                Event::Step(Ok(Step::EndOfInput)) => {
                    debug!("Console input closed");
                    self.say_goodbye().await;
                    return ExitReason::EndOfInput;
                }
                Event::Step(Err(e)) => {
                    warn!("Console round failed: {}", e);
                    if let Err(e) = self.write(&format!("An error occurred: {}\n", e)).await {
                        warn!("Failed to report error: {}", e);
                    }
                }
                Event::Shutdown => {
                    debug!("Console interrupted");
                    self.say_goodbye().await;
                    return ExitReason::Interrupted;
                }
            }
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    async fn step(&mut self) -> io::Result<Step> {
        let Some(input) = self.prompt(MENU_PROMPT).await? else {
            return Ok(Step::EndOfInput);
        };

        let Some(choice) = parse_choice(&input) else {
            debug!("Invalid menu choice {:?}", input);
            self.write(INVALID_OPTION).await?;
            return Ok(Step::Continue);
        };
        debug!("Menu choice {:?}", choice);

        match choice {
            Choice::Encode => {
                let Some(text) = self.prompt(ENCODE_PROMPT).await? else {
                    return Ok(Step::EndOfInput);
                };
                if text.trim().is_empty() {
                    self.write(EMPTY_TEXT).await?;
                } else {
                    let code = self.converter.encode(&text);
                    let original = format!("Original text: {}\n", text);
                    self.write_result(&original, &format!("Morse code: {}\n", code))
                        .await?;
                }
            }
            Choice::Decode => {
                let Some(code) = self.prompt(DECODE_PROMPT).await? else {
                    return Ok(Step::EndOfInput);
                };
                if code.trim().is_empty() {
                    self.write(EMPTY_CODE).await?;
                } else {
                    let text = self.converter.decode(&code);
                    let original = format!("Morse code: {}\n", code);
                    self.write_result(&original, &format!("Decoded text: {}\n", text))
                        .await?;
                }
            }
            Choice::Exit => {
                self.write(GOODBYE).await?;
                return Ok(Step::Quit);
            }
        }

        Ok(Step::Continue)
    }

    /// Print `prompt` and read one line without its terminator.
    /// `None` means input is closed.
    async fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.write(prompt).await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    async fn write_result(&mut self, original: &str, result: &str) -> io::Result<()> {
        let mut out = String::from("\n");
        if self.options.echo_original {
            out.push_str(original);
        }
        out.push_str(result);
        self.write(&out).await
    }

    async fn say_goodbye(&mut self) {
        if let Err(e) = self.write(INTERRUPTED).await {
            warn!("Failed to print farewell: {}", e);
        }
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await
    }
}
