//! Tournament CLI
//!
//! Edit the team roster and record match results from the command line.

use anyhow::{bail, Context};
use roster_core::{
    Gesture, NoDialogs, Outcome, RosterConfig, Session, Source, Target, TeamId, ABSENT_TEAM_ID,
};
use std::env;
use std::path::Path;
use tournament::{print_report, select_members, JsonFileSave, RosterView, DEFAULT_STATE_FILE};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Tournament Roster");
    println!();
    println!("Usage:");
    println!("  tournament <config.toml> [--state FILE] <command> [args]");
    println!();
    println!("Commands:");
    println!("  show [--json]                     - Print roster, match table and standings");
    println!("  toggle <team>                     - Toggle team participation (6 = absent team)");
    println!("  absent <member>                   - Mark a member absent");
    println!("  return <member> [team]            - Return a member from absent");
    println!("  unassign <member> <team>          - Remove a member from its team");
    println!("  assign <team|absent> <member[@source]>...");
    println!("                                    - Select members and assign them together");
    println!("  edit <team> <member>...           - Replace a team's members");
    println!("  result <team1> <team2> <s1> <s2>  - Record a match result");
    println!();
    println!("Examples:");
    println!("  tournament roster.toml assign 2 Alice Bob@unassigned");
    println!("  tournament roster.toml result 1 3 2 2");
}

fn parse_team(arg: &str) -> anyhow::Result<TeamId> {
    if arg.eq_ignore_ascii_case("absent") {
        return Ok(ABSENT_TEAM_ID);
    }
    arg.parse()
        .with_context(|| format!("invalid team id: {}", arg))
}

fn parse_score(arg: &str) -> anyhow::Result<u32> {
    arg.parse()
        .with_context(|| format!("invalid score: {}", arg))
}

fn open_session(config_path: &Path, state_path: &Path) -> anyhow::Result<Session> {
    let config = RosterConfig::load(config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;
    let hook = JsonFileSave::new(state_path);
    let session = match hook.load()? {
        Some(state) => Session::restore(config, state, Box::new(hook), Box::new(NoDialogs))?,
        None => Session::new(config, Box::new(hook), Box::new(NoDialogs))?,
    };
    Ok(session)
}

fn report_outcome(outcome: Outcome) {
    match outcome {
        Outcome::Changed => {}
        Outcome::Unchanged | Outcome::Ignored | Outcome::ContextMenu { .. } => {
            eprintln!("Nothing changed");
        }
    }
}

fn run_assign(session: &mut Session, args: &[String]) -> anyhow::Result<()> {
    if args.len() < 2 {
        bail!("assign requires a target and at least one member");
    }
    let target = parse_team(&args[0])?;

    select_members(session, &args[1..])?;

    let report = session.assign_selection(target);
    println!("Moved {} member(s), skipped {}", report.moved, report.skipped);
    Ok(())
}

fn run_command(session: &mut Session, command: &str, args: &[String]) -> anyhow::Result<()> {
    match command {
        "show" => {
            if args.iter().any(|a| a == "--json") {
                let view = RosterView::from_session(session);
                println!("{}", serde_json::to_string_pretty(&view)?);
                return Ok(());
            }
        }
        "toggle" => {
            let team = parse_team(args.first().context("toggle requires a team")?)?;
            report_outcome(session.dispatch(Gesture::Click, Target::ParticipationToggle(team)));
        }
        "absent" => {
            let name = args.first().context("absent requires a member")?;
            report_outcome(session.dispatch(Gesture::ContextMenu, Target::MarkAbsent(name.clone())));
        }
        "return" => {
            let name = args.first().context("return requires a member")?;
            match args.get(1) {
                Some(team) => {
                    let team = parse_team(team)?;
                    session.toggle_member_selection(name, Source::Absent);
                    let report = session.assign_selection(team);
                    println!("Moved {} member(s), skipped {}", report.moved, report.skipped);
                }
                None => {
                    report_outcome(session.dispatch(Gesture::Click, Target::ReturnButton(name.clone())));
                }
            }
        }
        "unassign" => {
            if args.len() < 2 {
                bail!("unassign requires a member and a team");
            }
            let team = parse_team(&args[1])?;
            report_outcome(session.dispatch(
                Gesture::Click,
                Target::MoveToUnassigned {
                    member: args[0].clone(),
                    team,
                },
            ));
        }
        "assign" => run_assign(session, args)?,
        "edit" => {
            let team = parse_team(args.first().context("edit requires a team")?)?;
            report_outcome(session.submit_team(team, args[1..].to_vec()));
        }
        "result" => {
            if args.len() < 4 {
                bail!("result requires two teams and two scores");
            }
            let team1 = parse_team(&args[0])?;
            let team2 = parse_team(&args[1])?;
            let score1 = parse_score(&args[2])?;
            let score2 = parse_score(&args[3])?;
            report_outcome(session.submit_score(team1, team2, score1, score2));
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            return Ok(());
        }
    }

    print_report(session);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || matches!(args[1].as_str(), "help" | "--help" | "-h") {
        print_usage();
        return Ok(());
    }

    let config_path = Path::new(&args[1]);
    let mut state_file = DEFAULT_STATE_FILE.to_string();
    let mut rest: Vec<String> = Vec::new();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--state" | "-s" => {
                if i + 1 < args.len() {
                    state_file = args[i + 1].clone();
                    i += 1;
                }
            }
            _ => rest.push(args[i].clone()),
        }
        i += 1;
    }

    let mut session = open_session(config_path, Path::new(&state_file))?;
    let (command, command_args) = match rest.split_first() {
        Some((command, command_args)) => (command.as_str(), command_args),
        None => ("show", &[][..]),
    };
    run_command(&mut session, command, command_args)
}
