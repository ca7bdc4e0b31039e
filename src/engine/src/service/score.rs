use crate::model::game::{Move, Outcome};
use crate::model::player::Player;
use crate::model::report::ScoreSummary;

/// Round wins needed to take a game.
pub const WIN_THRESHOLD: u32 = 3;

/// Win/loss/tie tallies for the current game, plus the session round
/// counter that survives game resets.
#[derive(Debug, Default)]
pub struct ScoreKeeper {
    human_wins: u32,
    computer_wins: u32,
    tied_rounds: u32,
    rounds_played: u32,
    total_rounds: u32,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        ScoreKeeper::default()
    }

    /// Score one exchange of moves. Exactly one outcome counter moves; the
    /// round counters always do.
    pub fn tally(&mut self, human_move: Move, computer_move: Move) -> Outcome {
        let outcome = if human_move.beats(&computer_move) {
            self.human_wins += 1;
            Outcome::Win
        } else if human_move.loses_to(&computer_move) {
            self.computer_wins += 1;
            Outcome::Loss
        } else {
            self.tied_rounds += 1;
            Outcome::Draw
        };
        self.rounds_played += 1;
        self.total_rounds += 1;
        debug_assert_eq!(
            self.human_wins + self.computer_wins + self.tied_rounds,
            self.rounds_played
        );
        outcome
    }

    pub fn game_winner(&self) -> Option<Outcome> {
        if self.human_wins >= WIN_THRESHOLD {
            Some(Outcome::Win)
        } else if self.computer_wins >= WIN_THRESHOLD {
            Some(Outcome::Loss)
        } else {
            None
        }
    }

    /// Start the next game: per-game counters and both players' scores go
    /// back to zero. The session round counter does not.
    pub fn reset_scores(&mut self, human: &mut Player, computer: &mut Player) {
        human.reset_score();
        computer.reset_score();
        self.human_wins = 0;
        self.computer_wins = 0;
        self.tied_rounds = 0;
        self.rounds_played = 0;
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            human_wins: self.human_wins,
            computer_wins: self.computer_wins,
            tied_rounds: self.tied_rounds,
            rounds_played: self.rounds_played,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_routes_each_outcome_to_one_counter() {
        let mut score = ScoreKeeper::new();

        assert_eq!(score.tally(Move::Rock, Move::Scissors), Outcome::Win);
        assert_eq!(score.tally(Move::Rock, Move::Paper), Outcome::Loss);
        assert_eq!(score.tally(Move::Rock, Move::Rock), Outcome::Draw);

        let summary = score.summary();
        assert_eq!(summary.human_wins, 1);
        assert_eq!(summary.computer_wins, 1);
        assert_eq!(summary.tied_rounds, 1);
        assert_eq!(summary.rounds_played, 3);
    }

    #[test]
    fn counters_always_sum_to_rounds_played() {
        let mut score = ScoreKeeper::new();
        let exchanges = [
            (Move::Rock, Move::Scissors),
            (Move::Paper, Move::Paper),
            (Move::Scissors, Move::Rock),
            (Move::Paper, Move::Rock),
            (Move::Rock, Move::Rock),
        ];
        for (human_move, computer_move) in exchanges {
            score.tally(human_move, computer_move);
            let summary = score.summary();
            assert_eq!(
                summary.human_wins + summary.computer_wins + summary.tied_rounds,
                summary.rounds_played
            );
        }
    }

    #[test]
    fn no_winner_below_the_threshold() {
        let mut score = ScoreKeeper::new();
        score.tally(Move::Rock, Move::Scissors);
        score.tally(Move::Rock, Move::Scissors);
        assert_eq!(score.game_winner(), None);
    }

    #[test]
    fn human_takes_the_game_at_the_threshold() {
        let mut score = ScoreKeeper::new();
        for _ in 0..WIN_THRESHOLD {
            score.tally(Move::Rock, Move::Scissors);
        }
        assert_eq!(score.game_winner(), Some(Outcome::Win));
    }

    #[test]
    fn computer_takes_the_game_at_the_threshold() {
        let mut score = ScoreKeeper::new();
        score.tally(Move::Rock, Move::Scissors);
        for _ in 0..WIN_THRESHOLD {
            score.tally(Move::Rock, Move::Paper);
        }
        assert_eq!(score.game_winner(), Some(Outcome::Loss));
    }

    #[test]
    fn reset_zeroes_the_game_but_not_the_session() {
        let mut score = ScoreKeeper::new();
        let mut human = Player::human("Alice");
        let mut computer = Player::computer();

        for _ in 0..WIN_THRESHOLD {
            score.tally(Move::Rock, Move::Scissors);
            human.increase_score();
        }
        score.tally(Move::Rock, Move::Paper);
        computer.increase_score();
        assert_eq!(score.total_rounds(), 4);

        score.reset_scores(&mut human, &mut computer);

        assert_eq!(human.score, 0);
        assert_eq!(computer.score, 0);
        let summary = score.summary();
        assert_eq!(summary.human_wins, 0);
        assert_eq!(summary.computer_wins, 0);
        assert_eq!(summary.tied_rounds, 0);
        assert_eq!(summary.rounds_played, 0);
        assert_eq!(score.total_rounds(), 4);
        assert_eq!(score.game_winner(), None);
    }
}
