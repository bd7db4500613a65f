mod collaborators;
mod script;

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use model_sidebar::{
    JsonPreferences, MemoryPreferences, PreferencesLoadStatus,
    SidebarController, SidebarOptions,
};
use model_sidebar_remote::{RController, RemoteController, TextCommand};

use crate::collaborators::{
    CliHost, CliPreferences, StdoutSession, TraceBuilder,
};
use crate::script::{ScriptLine, parse_line};

type Sidebar = SidebarController<
    RController<StdoutSession>,
    TraceBuilder,
    CliPreferences,
    CliHost,
>;

/// Drive a model sidebar from backend messages and console input on stdin.
///
/// Input lines:
///   `<event> <json>`   backend message (modelsidebar, jsdialogupdate,
///                      jsdialogaction)
///   `reply <json>`     backend reply to a console command
///   `> <text>`         submit console input
///   `:up` `:down`      browse command history
///   `:deck [id]`       request a deck, or clear the target
///   `:raw <text>`      send a command line to the backend as is
///   `:close` `:log` `:state`
#[derive(Debug, Parser)]
#[command(name = "model-sidebar", version, verbatim_doc_comment)]
struct Cli {
    /// JSON file with sidebar options.
    #[arg(long)]
    options: Option<PathBuf>,
    /// JSON preference file; preferences stay in memory when omitted.
    #[arg(long)]
    prefs: Option<PathBuf>,
    /// Document type the preferences are scoped to.
    #[arg(long, default_value = "text")]
    doc_type: String,
    /// Open the document read-only.
    #[arg(long)]
    read_only: bool,
    /// Disable the sidebar for this document.
    #[arg(long)]
    disabled: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let options = load_options(cli.options.as_ref())?;
    let preferences = open_preferences(cli.prefs, &cli.doc_type)?;

    let mut sidebar: Sidebar = SidebarController::new(
        options,
        RController::new(StdoutSession),
        TraceBuilder::new(),
        preferences,
        CliHost::new(cli.disabled, cli.read_only),
    );

    if sidebar.should_show_on_load() {
        log::info!(
            "sidebar was shown last time, reopening over {} ms",
            sidebar.options().anim_speed_ms
        );
    }

    let stdin = std::io::stdin();
    for (number, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read input")?;
        match parse_line(&line) {
            Ok(script_line) => run_line(&mut sidebar, script_line),
            Err(err) => log::warn!("line {}: {err}", number + 1),
        }
    }

    Ok(())
}

fn run_line(sidebar: &mut Sidebar, line: ScriptLine) {
    match line {
        ScriptLine::Backend { name, payload } => {
            sidebar.handle_message(&name, &payload);
        },
        ScriptLine::Reply(value) => {
            if !sidebar.handle_command_reply(&value) {
                log::debug!("not a command reply: {value}");
            }
        },
        ScriptLine::Submit(input) => {
            sidebar.set_draft(input);
            sidebar.handle_key(model_sidebar::ConsoleKey::Enter);
        },
        ScriptLine::Key(key) => {
            sidebar.handle_key(key);
            println!("draft: {}", sidebar.console().draft());
        },
        ScriptLine::Deck(deck) => sidebar.change_deck(deck),
        ScriptLine::Raw(text) => {
            let command = Box::new(TextCommand::new(text));
            if !sidebar.remote_mut().send_command_object(command) {
                log::warn!("raw command not handed over");
            }
        },
        ScriptLine::Close => sidebar.close(),
        ScriptLine::Transcript => {
            for line in sidebar.console().log().transcript() {
                println!("{line}");
            }
        },
        ScriptLine::State => {
            println!(
                "visibility: {:?}, tab: {:?}, target: {}",
                sidebar.visibility(),
                sidebar.active_tab(),
                sidebar.target_deck().unwrap_or("-")
            );
        },
        ScriptLine::Blank => {},
    }
}

fn load_options(path: Option<&PathBuf>) -> anyhow::Result<SidebarOptions> {
    let Some(path) = path else {
        return Ok(SidebarOptions::default());
    };

    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&data)
        .with_context(|| format!("invalid options in {}", path.display()))?;
    Ok(SidebarOptions::from_json(&value))
}

fn open_preferences(
    path: Option<PathBuf>,
    doc_type: &str,
) -> anyhow::Result<CliPreferences> {
    let Some(path) = path else {
        return Ok(CliPreferences::Memory(MemoryPreferences::new()));
    };

    let store = JsonPreferences::open(&path, doc_type)
        .with_context(|| format!("failed to open {}", path.display()))?;
    if let PreferencesLoadStatus::Invalid(reason) = store.status() {
        log::warn!("ignoring invalid preferences in {}: {reason}", path.display());
    }
    Ok(CliPreferences::File(store))
}
