//! Interactive terminal session
//!
//! Reads commands from stdin while animation frames run in real time. The
//! page is printed each time the shell comes to rest.

use anyhow::Result;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;

use crate::shell::{Event, Runtime, Shell};
use crate::Site;

/// Longest frame fed to the shell; a stalled terminal must not skip animations
const MAX_FRAME: Duration = Duration::from_millis(100);

const HELP: &str = "\
commands:
  go <path>      navigate to a path
  open <n>       follow the n-th link on the page
  back           history back
  forward        history forward
  move <x> <y>   move the pointer
  where          show location, phase and history
  links          list links on the page
  quit           leave";

/// One line of user input
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Go(String),
    Open(usize),
    Back,
    Forward,
    Move(f64, f64),
    Where,
    Links,
    Help,
    Quit,
}

impl Action {
    pub fn parse(line: &str) -> Result<Option<Action>> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let action = match (command, args.as_slice()) {
            ("go", [path]) => Action::Go(path.to_string()),
            ("open", [n]) => Action::Open(n.parse()?),
            ("back", []) => Action::Back,
            ("forward", []) => Action::Forward,
            ("move", [x, y]) => Action::Move(x.parse()?, y.parse()?),
            ("where", []) => Action::Where,
            ("links", []) => Action::Links,
            ("help", []) => Action::Help,
            ("quit" | "exit", []) => Action::Quit,
            _ => anyhow::bail!("can't parse `{}`, try `help`", line.trim()),
        };
        Ok(Some(action))
    }
}

enum Input {
    Line(Option<String>),
    Tick,
    Event(Event),
}

/// Run the session until `quit` or end of input
///
/// Must run inside a `LocalSet`.
pub async fn run(site: &Site, path: &str) -> Result<()> {
    let mut runtime = Runtime::new(site.shell(path)?, site.config.frame_interval());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(runtime.frame());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    println!("{}\n", HELP);
    let mut last_frame = Instant::now();
    let mut was_idle = false;

    loop {
        let input = tokio::select! {
            line = lines.next_line() => Input::Line(line?),
            _ = ticker.tick() => Input::Tick,
            Some(event) = runtime.recv() => Input::Event(event),
        };

        match input {
            Input::Line(None) => break,
            Input::Line(Some(line)) => match Action::parse(&line) {
                Ok(Some(Action::Quit)) => break,
                Ok(Some(action)) => perform(&mut runtime, action),
                Ok(None) => {}
                Err(e) => eprintln!("{}", e),
            },
            Input::Tick => {
                let now = Instant::now();
                let dt = (now - last_frame).min(MAX_FRAME);
                last_frame = now;
                if runtime.shell().is_animating() {
                    runtime.dispatch(Event::Frame(dt));
                }
            }
            Input::Event(event) => runtime.dispatch(event),
        }

        let idle = runtime.shell().is_idle();
        if idle && !was_idle {
            print_page(runtime.shell());
        }
        was_idle = idle;
    }

    Ok(())
}

fn perform(runtime: &mut Runtime, action: Action) {
    match action {
        Action::Go(path) => runtime.dispatch(Event::Navigate(path)),
        Action::Open(n) => {
            let links = runtime.shell().render().links();
            match n.checked_sub(1).and_then(|i| links.get(i)) {
                // Off-site links are shown, not followed
                Some((href, _)) if href.starts_with('/') => {
                    runtime.dispatch(Event::Navigate(href.clone()))
                }
                Some((href, _)) => println!("external link: {}", href),
                None => eprintln!("no link {}", n),
            }
        }
        Action::Back => runtime.dispatch(Event::Back),
        Action::Forward => runtime.dispatch(Event::Forward),
        Action::Move(x, y) => runtime.dispatch(Event::PointerMove { x, y }),
        Action::Where => {
            let shell = runtime.shell();
            let phase = shell
                .phase()
                .map(|p| p.to_string())
                .unwrap_or_else(|| "none".to_string());
            println!("at {} ({}, {})", shell.location(), shell.route(), phase);
            println!("history: {}", shell.history().join(" "));
            for fault in shell.faults() {
                println!("fault: {}", fault);
            }
        }
        Action::Links => {
            for (i, (href, label)) in runtime.shell().render().links().iter().enumerate() {
                println!("  [{}] {} -> {}", i + 1, label, href);
            }
        }
        Action::Help => println!("{}", HELP),
        Action::Quit => {}
    }
}

fn print_page(shell: &Shell) {
    println!("---- {} ----", shell.location());
    println!("{}", shell.render().to_text());
    println!();
}
