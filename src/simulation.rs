use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, warn};

use crate::snakes_ladders::{
    Board, Dice, EngineConfig, InputEvent, Jump, Player, SeededRandom, TurnEngine, TurnState,
};

/// Rolls after which a game is abandoned as unfinished.
pub const MAX_TURNS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Option<usize>,
    pub turns: u32,
    pub snakes: u32,
    pub ladders: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimulationReport {
    pub games: u32,
    pub wins: Vec<u32>,
    pub unfinished: u32,
    pub total_turns: u64,
    pub longest_game: u32,
    pub snakes: u64,
    pub ladders: u64,
}

impl SimulationReport {
    pub fn average_turns(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_turns as f32 / self.games as f32
    }

    pub fn win_rate(&self, player: usize) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins.get(player).copied().unwrap_or(0) as f32 / self.games as f32 * 100.0
    }

    fn record(&mut self, result: &GameResult) {
        self.games += 1;
        match result.winner {
            Some(index) => {
                if self.wins.len() <= index {
                    self.wins.resize(index + 1, 0);
                }
                self.wins[index] += 1;
            }
            None => self.unfinished += 1,
        }
        self.total_turns += result.turns as u64;
        self.longest_game = self.longest_game.max(result.turns);
        self.snakes += result.snakes as u64;
        self.ladders += result.ladders as u64;
    }

    fn merge(mut self, other: SimulationReport) -> SimulationReport {
        self.games += other.games;
        if self.wins.len() < other.wins.len() {
            self.wins.resize(other.wins.len(), 0);
        }
        for (total, wins) in self.wins.iter_mut().zip(other.wins) {
            *total += wins;
        }
        self.unfinished += other.unfinished;
        self.total_turns += other.total_turns;
        self.longest_game = self.longest_game.max(other.longest_game);
        self.snakes += other.snakes;
        self.ladders += other.ladders;
        self
    }
}

/// Plays one complete game without pauses between turns.
pub fn play_game(seed: u64, players: Vec<Player>) -> GameResult {
    let mut engine = TurnEngine::new(
        Board::new(),
        players,
        Dice::new(SeededRandom::new(seed)),
        EngineConfig::instant(),
    );
    let mut result = GameResult { winner: None, turns: 0, snakes: 0, ladders: 0 };

    while result.turns < MAX_TURNS {
        engine.apply(InputEvent::RollRequested);
        engine.advance_frame();
        result.turns += 1;

        match engine.last_move().and_then(|m| m.jump) {
            Some(Jump::Snake(_)) => result.snakes += 1,
            Some(Jump::Ladder(_)) => result.ladders += 1,
            None => (),
        }

        match engine.state() {
            TurnState::GameOver(winner) => {
                result.winner = Some(winner);
                break;
            }
            TurnState::BetweenTurns(_) => engine.advance_frame(),
            TurnState::AwaitingRoll | TurnState::Resolving => (),
        }
    }

    if result.winner.is_none() {
        warn!(seed, turns = result.turns, "game abandoned");
    }
    result
}

/// Plays `games` games in parallel. Game `i` is seeded with `seed + i`,
/// so a report is reproducible from its seed.
pub fn simulate(games: u32, seed: u64, names: &[String; 2]) -> SimulationReport {
    (0..games)
        .into_par_iter()
        .map(|i| {
            let players = Player::roster(names[0].as_str(), names[1].as_str());
            let result = play_game(seed.wrapping_add(i as u64), players);
            debug!(game = i, winner = ?result.winner, turns = result.turns, "game finished");
            let mut report = SimulationReport { wins: vec![0; 2], ..Default::default() };
            report.record(&result);
            report
        })
        .reduce(|| SimulationReport { wins: vec![0; 2], ..Default::default() }, SimulationReport::merge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> [String; 2] {
        ["Player 1".to_string(), "Player 2".to_string()]
    }

    #[test]
    fn test_game_finishes_with_winner_on_last_square() {
        let result = play_game(42, Player::roster("a", "b"));
        assert!(result.winner.is_some());
        assert!(result.turns > 0 && result.turns < MAX_TURNS);
    }

    #[test]
    fn test_game_is_reproducible() {
        assert_eq!(play_game(7, Player::roster("a", "b")), play_game(7, Player::roster("a", "b")));
    }

    #[test]
    fn test_winner_moved_last() {
        // Player 1 rolls on odd turns, so an odd turn count means player 1 won.
        for seed in 0..20 {
            let result = play_game(seed, Player::roster("a", "b"));
            let expected = if result.turns % 2 == 1 { 0 } else { 1 };
            assert_eq!(result.winner, Some(expected));
        }
    }

    #[test]
    fn test_simulate_report() {
        let report = simulate(200, 1, &names());
        assert_eq!(report.games, 200);
        assert_eq!(report.wins.iter().sum::<u32>() + report.unfinished, 200);
        assert_eq!(report.unfinished, 0);
        assert!(report.longest_game as f32 >= report.average_turns());
        assert!(report.ladders > 0);
        assert!(report.snakes > 0);
        let rates = report.win_rate(0) + report.win_rate(1);
        assert!((rates - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_simulate_is_deterministic() {
        assert_eq!(simulate(50, 9, &names()), simulate(50, 9, &names()));
    }

    #[test]
    fn test_empty_simulation() {
        let report = simulate(0, 0, &names());
        assert_eq!(report.games, 0);
        assert_eq!(report.average_turns(), 0.0);
        assert_eq!(report.win_rate(0), 0.0);
    }
}
