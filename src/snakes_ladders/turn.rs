use tracing::{debug, info, trace};

use crate::snakes_ladders::{Board, Dice, DiceRoll, EngineConfig, InputEvent, Jump, Player, RandomSource, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingRoll,
    /// A roll has moved the current token; win check and rotation are pending.
    Resolving,
    /// Frames elapsed since the turn passed on.
    BetweenTurns(u32),
    /// Index of the winning player.
    GameOver(usize),
}

/// What happened on the most recent roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: usize,
    pub roll: DiceRoll,
    pub from: Square,
    pub landed_raw: Square,
    pub landed: Square,
    pub jump: Option<Jump>,
}

/// Read only view of the game handed to the renderer each frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub board: &'a Board,
    pub players: &'a [Player],
    pub current_player: usize,
    pub last_roll: Option<DiceRoll>,
    pub last_move: Option<MoveRecord>,
    pub state: TurnState,
    /// Display only. Transition logic never reads it.
    pub help_visible: bool,
}

impl<'a> Snapshot<'a> {
    pub fn current(&self) -> &'a Player {
        &self.players[self.current_player]
    }

    pub fn winner(&self) -> Option<&'a Player> {
        match self.state {
            TurnState::GameOver(index) => self.players.get(index),
            _ => None,
        }
    }
}

/// Owns all mutable game state and steps it one input or frame at a time.
///
/// ```text
/// AwaitingRoll -roll-> Resolving -frame-> BetweenTurns(n) -delay-> AwaitingRoll
///                                  \----> GameOver -restart-> AwaitingRoll
/// ```
#[derive(Debug, Clone)]
pub struct TurnEngine<R> {
    board: Board,
    players: Vec<Player>,
    dice: Dice<R>,
    config: EngineConfig,
    current: usize,
    state: TurnState,
    last_roll: Option<DiceRoll>,
    last_move: Option<MoveRecord>,
    help_visible: bool,
}

impl<R: RandomSource> TurnEngine<R> {
    pub fn new(board: Board, players: Vec<Player>, dice: Dice<R>, config: EngineConfig) -> Self {
        assert!(!players.is_empty(), "A game needs at least one player");
        TurnEngine {
            board,
            players,
            dice,
            config,
            current: 0,
            state: TurnState::AwaitingRoll,
            last_roll: None,
            last_move: None,
            help_visible: true,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player_index(&self) -> usize {
        self.current
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn last_roll(&self) -> Option<DiceRoll> {
        self.last_roll
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.last_move
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn winner(&self) -> Option<usize> {
        match self.state {
            TurnState::GameOver(index) => Some(index),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            board: &self.board,
            players: &self.players,
            current_player: self.current,
            last_roll: self.last_roll,
            last_move: self.last_move,
            state: self.state,
            help_visible: self.help_visible,
        }
    }

    /// Applies one input event. Events that do not fit the current state are ignored.
    pub fn apply(&mut self, event: InputEvent) {
        match (event, self.state) {
            (InputEvent::RollRequested, TurnState::AwaitingRoll) => self.roll(),
            (InputEvent::ToggleHelpRequested, _) => self.help_visible = !self.help_visible,
            (InputEvent::RestartRequested, TurnState::GameOver(_)) => self.restart(),
            (event, state) => trace!(?event, ?state, "ignoring input"),
        }
    }

    /// Advances one frame of the fixed cadence loop.
    pub fn advance_frame(&mut self) {
        match self.state {
            TurnState::Resolving => self.resolve(),
            TurnState::BetweenTurns(frames) => {
                if frames + 1 >= self.config.turn_delay_frames {
                    self.last_roll = None;
                    self.state = TurnState::AwaitingRoll;
                } else {
                    self.state = TurnState::BetweenTurns(frames + 1);
                }
            }
            TurnState::AwaitingRoll | TurnState::GameOver(_) => (),
        }
    }

    pub fn restart(&mut self) {
        for player in self.players.iter_mut() {
            player.reset_to_start();
        }
        self.current = 0;
        self.state = TurnState::AwaitingRoll;
        self.last_roll = None;
        self.last_move = None;
        self.help_visible = true;
        info!("game restarted");
    }

    fn roll(&mut self) {
        let roll = self.dice.roll();
        let player = &mut self.players[self.current];
        let from = player.position();

        player.advance(roll.total() as Square);
        let landed_raw = player.position();
        let jump = self.board.jump_at(landed_raw);
        let landed = self.board.resolve_landing(landed_raw);
        player.land_on(landed);

        debug!(player = player.name(), %roll, from, to = landed_raw, "rolled");
        match jump {
            Some(Jump::Snake(to)) => info!(player = player.name(), from = landed_raw, to, "bitten by a snake"),
            Some(Jump::Ladder(to)) => info!(player = player.name(), from = landed_raw, to, "climbed a ladder"),
            None => (),
        }

        self.last_roll = Some(roll);
        self.last_move = Some(MoveRecord { player: self.current, roll, from, landed_raw, landed, jump });
        self.help_visible = false;
        self.state = TurnState::Resolving;
    }

    fn resolve(&mut self) {
        let player = &self.players[self.current];
        if self.board.is_winning_square(player.position()) {
            info!(player = player.name(), "wins");
            self.state = TurnState::GameOver(self.current);
        } else {
            self.current = (self.current + 1) % self.players.len();
            self.state = TurnState::BetweenTurns(0);
        }
    }
}
