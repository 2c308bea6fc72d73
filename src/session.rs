//! Line-oriented session driver.
//!
//! Reads one command per input line, applies it to a [`Storefront`], and
//! answers with one JSON object per line. This is the storefront's event
//! loop: every line is a discrete user interaction handled synchronously.
//!
//! Besides [`Action`]s (short form or JSON) the session understands
//! `render [html|text]` and `quit`.

use crate::render::{new_renderer, PageFormat};
use crate::{Action, Result, Storefront};
use serde::Serialize;
use std::io::{BufRead, Write};

/// One cart line in a state report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub subtotal: String,
}

/// Snapshot of the storefront sent after every applied action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateReport {
    pub ok: bool,
    pub cursor: usize,
    pub featured: String,
    pub cart_open: bool,
    pub count: u64,
    pub total: String,
    pub lines: Vec<LineReport>,
    pub notice: Option<String>,
}

impl StateReport {
    pub fn of(store: &Storefront) -> Self {
        let cart = store.cart();
        Self {
            ok: true,
            cursor: store.carousel().index(),
            featured: store.carousel().current().name.clone(),
            cart_open: store.is_cart_open(),
            count: cart.total_count(),
            total: cart.total_price().display_rounded(),
            lines: cart
                .lines()
                .iter()
                .map(|l| LineReport {
                    id: l.id.to_string(),
                    name: l.name().to_string(),
                    quantity: l.quantity,
                    subtotal: l.subtotal().display_rounded(),
                })
                .collect(),
            notice: store.notice().map(str::to_string),
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Reply {
    State(StateReport),
    Page {
        ok: bool,
        content_type: &'static str,
        digest: String,
        content: String,
    },
    Failed {
        ok: bool,
        error: String,
    },
}

/// Counters returned when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub applied: usize,
    pub rejected: usize,
}

enum Command {
    Apply(Action),
    Render(PageFormat),
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    match line {
        "quit" | "exit" => return Ok(Command::Quit),
        "render" => return Ok(Command::Render(PageFormat::Html)),
        _ => {}
    }
    if let Some(format) = line.strip_prefix("render ") {
        return Ok(Command::Render(format.trim().parse()?));
    }
    Ok(Command::Apply(line.parse()?))
}

fn handle(store: &mut Storefront, command: Command) -> Result<Reply> {
    match command {
        Command::Apply(action) => {
            store.dispatch(action)?;
            Ok(Reply::State(StateReport::of(store)))
        }
        Command::Render(format) => {
            let page = new_renderer(format).render(store)?;
            log::debug!("rendered {} ({})", page.content_type, page.digest);
            Ok(Reply::Page {
                ok: true,
                content_type: page.content_type,
                digest: page.digest,
                content: page.content,
            })
        }
        // Handled by the loop before dispatching here
        Command::Quit => Ok(Reply::State(StateReport::of(store))),
    }
}

/// Run a session until `quit` or end of input.
///
/// Bad lines produce an `{"ok":false,"error":...}` reply and leave the state
/// untouched; they do not end the session. I/O failures do.
pub fn run<R: BufRead, W: Write>(
    store: &mut Storefront,
    input: R,
    mut output: W,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match parse_command(line) {
            Ok(Command::Quit) => break,
            Ok(command) => handle(store, command),
            Err(e) => Err(e),
        };

        let reply = match reply {
            Ok(reply) => {
                summary.applied += 1;
                reply
            }
            Err(e) => {
                log::warn!("rejected '{}': {}", line, e);
                summary.rejected += 1;
                Reply::Failed {
                    ok: false,
                    error: e.to_string(),
                }
            }
        };

        serde_json::to_writer(&mut output, &reply)?;
        writeln!(output)?;
        output.flush()?;
    }

    log::info!(
        "session ended: {} applied, {} rejected",
        summary.applied,
        summary.rejected
    );
    Ok(summary)
}
