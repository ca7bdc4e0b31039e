use rps_engine::model::player::Player;
use rps_engine::service::engine::MatchEngine;
use rps_engine::service::strategy::AdaptiveStrategy;
use tracing::info;

use crate::display;
use crate::prompt::{self, HumanChooser};

/// One sitting at the terminal: possibly many games, one shared move log.
pub struct Session {
    engine: MatchEngine,
}

impl Session {
    pub fn new() -> Self {
        display::clear_screen();
        let human = Player::human(prompt::read_name());
        let computer = Player::computer();
        info!(human = %human.name, computer = %computer.name, "session started");

        let engine = MatchEngine::new(
            human,
            computer,
            Box::new(HumanChooser),
            Box::new(AdaptiveStrategy),
        );
        Session { engine }
    }

    pub fn run(&mut self) {
        display::welcome();
        loop {
            let report = self.engine.play_round();
            display::round(&report);

            if let Some(game) = self.engine.game_winner() {
                display::game_winner(&game);
                self.engine.reset_game();
                if !prompt::play_again() {
                    break;
                }
            }
        }
        display::move_log(
            &self.engine.human().name,
            &self.engine.computer().name,
            self.engine.history(),
        );
        display::goodbye();
    }
}
