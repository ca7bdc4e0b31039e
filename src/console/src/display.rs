use colored::Colorize;
use dialoguer::console::Term;
use rps_engine::model::game::Outcome;
use rps_engine::model::report::{GameReport, RoundReport, ScoreSummary};
use rps_engine::service::history::{HistoryEntry, MoveHistory};

const LOG_WIDTH: usize = 65;

pub fn clear_screen() {
    let _ = Term::stdout().clear_screen();
}

pub fn welcome() {
    clear_screen();
    println!("{}", "Welcome to Rock, Paper, Scissors!".bold());
}

pub fn goodbye() {
    println!("Thanks for playing Rock, Paper, Scissors. Goodbye!");
}

pub fn round(report: &RoundReport) {
    println!("{} chose {}", report.human_name, report.human_move);
    println!("{} chose {}", report.computer_name, report.computer_move);
    println!("{}", winner_line(report));
    println!(
        "{}",
        score_line(&report.summary, &report.human_name, &report.computer_name)
    );
}

pub fn game_winner(report: &GameReport) {
    let line = format!("{} wins the game!", report.winner_name);
    match report.outcome {
        Outcome::Win => println!("{}", line.green().bold()),
        _ => println!("{}", line.red().bold()),
    }
}

pub fn move_log(human: &str, computer: &str, history: &MoveHistory) {
    clear_screen();
    println!("{:*^width$}", "Move Log", width = LOG_WIDTH);
    for entry in history.entries() {
        println!("{}", log_line(human, computer, entry));
        println!();
    }
    println!("{}", "*".repeat(LOG_WIDTH));
    println!();
}

fn winner_line(report: &RoundReport) -> String {
    match report.outcome {
        Outcome::Win => format!("{} won!", report.human_name).green().to_string(),
        Outcome::Loss => format!("{} won!", report.computer_name).red().to_string(),
        Outcome::Draw => "It's a tie!".yellow().to_string(),
    }
}

fn score_line(summary: &ScoreSummary, human: &str, computer: &str) -> String {
    format!(
        "After {} {}, {} has won {} and {} has won {}. {} {} ended in a tie.",
        summary.rounds_played,
        plural(summary.rounds_played, "round", "rounds"),
        human,
        summary.human_wins,
        computer,
        summary.computer_wins,
        summary.tied_rounds,
        plural(summary.tied_rounds, "round has", "rounds have"),
    )
}

fn log_line(human: &str, computer: &str, entry: &HistoryEntry) -> String {
    format!(
        "Round: {} {}'s move: {} -- {}'s move: {}",
        entry.round, human, entry.human_move, computer, entry.computer_move
    )
}

fn plural(count: u32, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}
