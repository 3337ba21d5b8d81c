use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use racer_core::catalog::builtin_bank;
use racer_core::model::{Challenge, Rank, Scorecard, Tier};
use services::{AnswerVerdict, Clock, RaceError, RaceService, RaceSession};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTier { raw: String },
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTier { raw } => write!(f, "invalid --tier value: {raw}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

#[derive(Debug)]
struct Args {
    tier: Option<Tier>,
    seed: Option<u64>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  code-racer [--tier <beginner|intermediate|advanced>] [--seed <n>]");
    eprintln!();
    eprintln!("Without --tier, a difficulty menu is shown.");
    eprintln!("--seed makes the challenge draw reproducible.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RACER_TIER, RACER_SEED");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut tier = match std::env::var("RACER_TIER") {
            Ok(value) => Some(
                value
                    .parse::<Tier>()
                    .map_err(|_| ArgsError::InvalidTier { raw: value })?,
            ),
            Err(_) => None,
        };
        let mut seed = std::env::var("RACER_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tier" => {
                    let value = require_value(args, "--tier")?;
                    tier = Some(
                        value
                            .parse::<Tier>()
                            .map_err(|_| ArgsError::InvalidTier { raw: value })?,
                    );
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { tier, seed })
    }
}

/// Reads one line from the player, `None` on end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

fn prompt_tier(input: &mut impl BufRead) -> io::Result<Option<Tier>> {
    loop {
        println!();
        println!("=== CODE RACER ===");
        println!("Master the art of code reading!");
        println!();
        println!("  1) beginner      - easy warm-up");
        println!("  2) intermediate  - challenge mode");
        println!("  3) advanced      - expert level");
        println!("  q) quit");
        print!("> ");
        io::stdout().flush()?;

        let Some(choice) = read_line(input)? else {
            return Ok(None);
        };
        match choice.as_str() {
            "1" | "beginner" => return Ok(Some(Tier::Beginner)),
            "2" | "intermediate" => return Ok(Some(Tier::Intermediate)),
            "3" | "advanced" => return Ok(Some(Tier::Advanced)),
            "q" | "quit" => return Ok(None),
            other => println!("unknown choice: {other}"),
        }
    }
}

fn render_code(challenge: &Challenge) {
    let width = challenge.line_count().to_string().len();
    println!();
    for (i, line) in challenge.lines().iter().enumerate() {
        println!("{:>width$} | {line}", i + 1);
    }
    println!();
}

fn progress_bar(percent: u32) -> String {
    let filled = (percent / 5).min(20) as usize;
    format!("[{}{}] {percent}%", "#".repeat(filled), ".".repeat(20 - filled))
}

fn format_mm_ss(total_secs: i64) -> String {
    let secs = total_secs.max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn rank_flavor(rank: Rank) -> &'static str {
    match rank {
        Rank::S => "LEGENDARY! You're a code racing master!",
        Rank::A => "EXCELLENT! Outstanding performance!",
        Rank::B => "GREAT JOB! Strong racing skills!",
        Rank::C => "GOOD EFFORT! You're improving!",
        Rank::D => "KEEP PRACTICING! Speed up and focus!",
    }
}

fn print_scorecard(card: &Scorecard) {
    println!();
    println!("=== RACE FINISHED ===");
    println!("Difficulty:    {}", card.tier());
    println!(
        "Points earned: {}/{}",
        card.score(),
        card.total_questions()
    );
    println!("Race time:     {}", format_mm_ss(card.elapsed_seconds()));
    println!();
    println!("Accuracy score: {:>3}/100", card.accuracy());
    println!("Speed score:    {:>3}/100", card.speed());
    println!("FINAL SCORE:    {:>3}/100", card.final_score());
    println!();
    println!("{}", rank_flavor(card.rank()));
    println!("Performance rank: {}-RANK", card.rank());
}

/// Runs one race to completion (or until the player runs out of input).
fn play(
    service: &RaceService,
    session: &mut RaceSession,
    input: &mut impl BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!("--- {} mode: find the line! ---", session.tier());
    render_code(session.challenge());

    while !session.is_complete() {
        let total = session.total_questions();
        let index = session.question_index();
        let Some(question) = session.current_question() else {
            break;
        };
        println!("QUESTION {}/{}: {}", index + 1, total, question.prompt());
        print!("line> ");
        io::stdout().flush()?;

        let Some(answer) = read_line(input)? else {
            // Player walked away; score whatever was earned.
            break;
        };

        match service.answer_current(session, &answer) {
            Ok(outcome) => match outcome.verdict {
                AnswerVerdict::Correct { score_delta, .. } => {
                    let note = if score_delta == 0 { " (no point after a miss)" } else { "" };
                    println!("CORRECT! Checkpoint passed{note}");
                    println!("{}", progress_bar(outcome.progress.percent()));
                }
                AnswerVerdict::Incorrect { correct_line } => {
                    println!("PIT STOP! Correct answer: line {correct_line}. Try again.");
                }
            },
            Err(RaceError::InvalidAnswer { .. }) => {
                println!("Please enter a valid line number.");
            }
            Err(other) => return Err(other.into()),
        }
        println!();
    }

    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let service = RaceService::new(Clock::default_clock(), Arc::new(builtin_bank()));
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut seeded = args.seed.map(StdRng::seed_from_u64);

    loop {
        let tier = match args.tier {
            Some(tier) => tier,
            None => match prompt_tier(&mut input)? {
                Some(tier) => tier,
                None => break,
            },
        };

        // Every race gets a fresh session; nothing carries over.
        let mut session = match seeded.as_mut() {
            Some(rng) => service.start_race_with_rng(tier, rng)?,
            None => service.start_race(tier)?,
        };

        play(&service, &mut session, &mut input)?;
        let card = service.finish(&mut session)?;
        print_scorecard(&card);

        print!("\nRace again? [y/N] ");
        io::stdout().flush()?;
        match read_line(&mut input)? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => {}
            _ => break,
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mm_ss_formatting() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(65), "01:05");
        assert_eq!(format_mm_ss(600), "10:00");
        assert_eq!(format_mm_ss(-3), "00:00");
    }

    #[test]
    fn progress_bar_fills_by_five_percent_steps() {
        assert_eq!(progress_bar(0), "[....................] 0%");
        assert_eq!(progress_bar(50), "[##########..........] 50%");
        assert_eq!(progress_bar(100), "[####################] 100%");
    }

    #[test]
    fn args_accept_tier_and_seed() {
        let mut argv = ["--tier", "advanced", "--seed", "7"]
            .into_iter()
            .map(String::from);
        let args = Args::parse(&mut argv).unwrap();
        assert_eq!(args.tier, Some(Tier::Advanced));
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn args_reject_unknown_flags_and_bad_values() {
        let mut argv = ["--speed"].into_iter().map(String::from);
        assert!(matches!(
            Args::parse(&mut argv).unwrap_err(),
            ArgsError::UnknownArg(_)
        ));

        let mut argv = ["--tier", "expert"].into_iter().map(String::from);
        assert!(matches!(
            Args::parse(&mut argv).unwrap_err(),
            ArgsError::InvalidTier { .. }
        ));

        let mut argv = ["--seed", "lots"].into_iter().map(String::from);
        assert!(matches!(
            Args::parse(&mut argv).unwrap_err(),
            ArgsError::InvalidSeed { .. }
        ));

        let mut argv = ["--seed"].into_iter().map(String::from);
        assert!(matches!(
            Args::parse(&mut argv).unwrap_err(),
            ArgsError::MissingValue { flag: "--seed" }
        ));
    }
}
