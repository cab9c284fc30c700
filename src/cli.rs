//! Command-line interface.

use clap::{Args, Parser, Subcommand};

use crate::snakes_ladders::{DEFAULT_TURN_DELAY_FRAMES, EngineConfig};

/// Snakes and Ladders for two players on one keyboard
#[derive(Parser, Debug)]
#[command(name = "snakes-ladders")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run, defaults to `play`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the game window
    Play(PlayArgs),

    /// Play games headless and print statistics
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "10000")]
        games: u32,

        /// Seed of the first game
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Seed for reproducible dice, random if omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frames to wait before the next player may roll
    #[arg(long, default_value_t = DEFAULT_TURN_DELAY_FRAMES)]
    pub turn_delay_frames: u32,

    #[arg(long, default_value = "Player 1")]
    pub player1: String,

    #[arg(long, default_value = "Player 2")]
    pub player2: String,
}

impl Default for PlayArgs {
    fn default() -> Self {
        PlayArgs {
            seed: None,
            turn_delay_frames: DEFAULT_TURN_DELAY_FRAMES,
            player1: "Player 1".to_string(),
            player2: "Player 2".to_string(),
        }
    }
}

impl PlayArgs {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig { turn_delay_frames: self.turn_delay_frames }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["snakes-ladders"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_play_args() {
        let cli = Cli::try_parse_from([
            "snakes-ladders", "play", "--seed", "5", "--turn-delay-frames", "30", "--player1", "Ann",
        ])
        .unwrap();
        let Some(Command::Play(args)) = cli.command else {
            panic!("expected play command");
        };
        assert_eq!(args.seed, Some(5));
        assert_eq!(args.player1, "Ann");
        assert_eq!(args.player2, "Player 2");
        assert_eq!(args.engine_config(), EngineConfig { turn_delay_frames: 30 });
    }

    #[test]
    fn test_simulate_args() {
        let cli = Cli::try_parse_from(["snakes-ladders", "simulate", "-g", "12"]).unwrap();
        match cli.command {
            Some(Command::Simulate { games, seed }) => {
                assert_eq!(games, 12);
                assert_eq!(seed, 0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_default_play_args_match_parser() {
        let cli = Cli::try_parse_from(["snakes-ladders", "play"]).unwrap();
        let Some(Command::Play(args)) = cli.command else {
            panic!("expected play command");
        };
        let defaults = PlayArgs::default();
        assert_eq!(args.turn_delay_frames, defaults.turn_delay_frames);
        assert_eq!(args.player1, defaults.player1);
        assert_eq!(args.seed, defaults.seed);
    }
}
