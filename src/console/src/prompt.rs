use dialoguer::{Confirm, Input};
use rps_engine::model::game::Move;
use rps_engine::service::history::MoveHistory;
use rps_engine::service::strategy::MoveChooser;

/// Move selection backed by the terminal. The engine sees it as just
/// another chooser.
pub struct HumanChooser;

impl MoveChooser for HumanChooser {
    fn choose_move(&self, _history: &MoveHistory) -> Move {
        read_move()
    }
}

pub fn read_name() -> String {
    Input::new()
        .with_prompt("What's your name?")
        .validate_with(|input: &String| -> Result<(), &str> {
            match input.trim().is_empty() {
                true => Err("Sorry, you must enter a name."),
                false => Ok(()),
            }
        })
        .interact_text()
        .expect("Failed to read a name from the terminal")
}

pub fn read_move() -> Move {
    Input::<String>::new()
        .with_prompt("Please choose rock, paper, or scissors")
        .validate_with(|input: &String| -> Result<(), &str> {
            match input.parse::<Move>() {
                Ok(_) => Ok(()),
                Err(_) => Err("Sorry, invalid choice."),
            }
        })
        .interact_text()
        .expect("Failed to read a move from the terminal")
        .parse()
        .expect("Input was validated as a move")
}

pub fn play_again() -> bool {
    Confirm::new()
        .with_prompt("Would you like to play again?")
        .interact()
        .expect("Failed to read an answer from the terminal")
}
