use std::io::{self, BufRead, Write};

use anyhow::Context;
use chrono::Local;
use swipr_logging::swipr_info;

use swipr_core::{
    summarize, update, Effect, GateChoice, Msg, PlanState, SwipeOutcome, DEFAULT_QUOTA_LIMIT,
};
use swipr_engine::{load_pantry, load_recipes, PriceTable, ScanHandle, DEFAULT_SCAN_DELAY};

use crate::{render, schedule, share};

/// Drives one full planning run on stdin/stdout: scan, swipe loop, summary.
pub fn run() -> anyhow::Result<()> {
    let recipes = load_recipes().context("load recipe catalog")?;
    let pantry = load_pantry().context("load pantry fixture")?;
    let prices = PriceTable::builtin().context("load price table")?;

    println!("Scanning receipt...");
    let scan = ScanHandle::start(pantry, DEFAULT_SCAN_DELAY);
    let pantry = scan.wait();
    println!("{}", render::pantry(&pantry));

    let mut state = PlanState::new();
    let mut done = false;
    state = dispatch(
        state,
        Msg::PlanningStarted {
            queue: recipes,
            quota_limit: DEFAULT_QUOTA_LIMIT,
        },
        &mut done,
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !done {
        if state.consume_dirty() {
            println!("{}", render::screen(&state.view()));
        }
        print!("> ");
        io::stdout().flush().context("flush prompt")?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("read command")?;
        match parse_command(&line) {
            Command::Dispatch(msg) => state = dispatch(state, msg, &mut done),
            Command::Quit => break,
            Command::Unknown(text) => println!("{}", render::help(&text)),
        }
    }

    if let Some(session) = state.session() {
        let summary = summarize(session, state.shopping_list(), &prices);
        let plan = schedule::meal_plan(session.accepted(), Local::now().date_naive());
        println!("{}", render::summary(&summary, &plan));
        println!("{}", share::share_text(&summary));
    }
    Ok(())
}

/// Runs one message through the pure core and reacts to its effects.
fn dispatch(state: PlanState, msg: Msg, done: &mut bool) -> PlanState {
    let (state, effects) = update(state, msg);
    for effect in &effects {
        swipr_info!("effect: {effect:?}");
        match effect {
            Effect::AdvanceToSummary => *done = true,
            Effect::UpgradeRequested => {
                println!("(Billing is not wired up in this prototype; continuing on the free plan.)");
            }
            Effect::GateRaised | Effect::CardDismissed { .. } => {}
        }
    }
    state
}

enum Command {
    Dispatch(Msg),
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if let Some(name) = trimmed.strip_prefix("check ") {
        return Command::Dispatch(Msg::ItemToggled {
            name: name.trim().to_string(),
        });
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "y" | "yes" | "like" => Command::Dispatch(Msg::SwipeCommitted {
            outcome: SwipeOutcome::Accept,
        }),
        "n" | "no" | "pass" => Command::Dispatch(Msg::SwipeCommitted {
            outcome: SwipeOutcome::Reject,
        }),
        "upgrade" => Command::Dispatch(Msg::GateResolved {
            choice: GateChoice::Upgrade,
        }),
        "free" | "continue" => Command::Dispatch(Msg::GateResolved {
            choice: GateChoice::ContinueFree,
        }),
        "q" | "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
