//! Assistant chat command implementation.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use colored::Colorize;

use crate::cli::args::{ChatArgs, OutputFormat};
use crate::config::Config;
use crate::error::StudymateError;
use crate::features::chat::{CannedReplies, MessageTimeline, Sender, QUICK_PROMPTS};
use crate::output::format_transcript;

/// Execute the chat command.
///
/// # Errors
///
/// Returns an error if reading input or formatting output fails.
pub fn chat(config: &Config, args: ChatArgs, format: OutputFormat) -> Result<String, StudymateError> {
    let mut timeline =
        MessageTimeline::with_reply_delay(Box::new(CannedReplies), config.chat.reply_delay());

    match args.message {
        Some(message) => one_shot(&mut timeline, &message, format),
        None => {
            interactive(&mut timeline)?;
            Ok(String::new())
        }
    }
}

/// Send one message, wait for the reply, and return the result.
fn one_shot(
    timeline: &mut MessageTimeline,
    message: &str,
    format: OutputFormat,
) -> Result<String, StudymateError> {
    if !timeline.submit(message) {
        return Ok("Nothing to send.".dimmed().to_string());
    }

    wait_for_reply(timeline);

    match format {
        OutputFormat::Json => format_transcript(timeline.messages(), format),
        OutputFormat::Pretty => {
            let reply = timeline
                .messages()
                .last()
                .map_or(String::new(), |m| m.text.clone());
            Ok(format!("{} {reply}", "Assistant:".magenta().bold()))
        }
    }
}

/// Run the interactive conversation loop, printing directly to stdout.
fn interactive(timeline: &mut MessageTimeline) -> Result<(), StudymateError> {
    println!();
    if let Some(greeting) = timeline.messages().first() {
        println!("{} {}", "Assistant:".magenta().bold(), greeting.text);
    }
    println!();
    println!("{}", "Quick prompts:".bold());
    for (index, prompt) in QUICK_PROMPTS.iter().enumerate() {
        println!("  {}. {prompt}", index + 1);
    }
    println!();
    println!(
        "{}",
        "Type a question (or a quick-prompt number). 'q' to leave.".dimmed()
    );

    let stdin = io::stdin();
    loop {
        print!("{} ", ">".green());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        if matches!(input, "q" | "quit" | "exit") {
            break;
        }

        // A bare catalog number picks the matching quick prompt, as long as
        // the conversation hasn't started yet.
        let submitted = match input.parse::<usize>() {
            Ok(n) if timeline.messages().len() == 1 && (1..=QUICK_PROMPTS.len()).contains(&n) => {
                let prompt = QUICK_PROMPTS[n - 1];
                println!("{} {prompt}", "You:".blue().bold());
                timeline.submit(prompt)
            }
            _ => timeline.submit(input),
        };

        if !submitted {
            continue;
        }

        println!("{}", "assistant is typing...".dimmed());
        wait_for_reply(timeline);

        if let Some(reply) = timeline.messages().last() {
            if reply.sender == Sender::Assistant {
                println!("{} {}", "Assistant:".magenta().bold(), reply.text);
            }
        }
        println!();
    }

    Ok(())
}

/// Sleep-and-pump until the pending reply lands.
fn wait_for_reply(timeline: &mut MessageTimeline) {
    let mut last = Instant::now();
    while timeline.is_composing() {
        std::thread::sleep(Duration::from_millis(50));
        let now = Instant::now();
        timeline.advance(now.duration_since(last));
        last = now;
    }
}
