/// Frames the finished turn stays on screen before the next player may roll.
pub const DEFAULT_TURN_DELAY_FRAMES: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub turn_delay_frames: u32,
}

impl EngineConfig {
    /// No pause between turns, for headless play.
    pub const fn instant() -> Self {
        EngineConfig { turn_delay_frames: 0 }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { turn_delay_frames: DEFAULT_TURN_DELAY_FRAMES }
    }
}
