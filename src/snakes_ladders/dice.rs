use std::fmt::Display;

use crate::snakes_ladders::RandomSource;

/// Faces of the two dice thrown in one turn. The total is derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceRoll {
    die1: u8,
    die2: u8,
}

impl DiceRoll {
    pub const FACES: u8 = 6;

    pub const fn new(die1: u8, die2: u8) -> Self {
        debug_assert!(die1 >= 1 && die1 <= Self::FACES);
        debug_assert!(die2 >= 1 && die2 <= Self::FACES);
        DiceRoll { die1, die2 }
    }

    pub fn die1(&self) -> u8 {
        self.die1
    }

    pub fn die2(&self) -> u8 {
        self.die2
    }

    pub fn total(&self) -> u8 {
        self.die1 + self.die2
    }

    pub fn is_double(&self) -> bool {
        self.die1 == self.die2
    }
}

impl Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {}", self.die1, self.die2)
    }
}

/// A pair of six sided dice drawing from an injected [`RandomSource`].
#[derive(Debug, Clone)]
pub struct Dice<R> {
    source: R,
}

impl<R: RandomSource> Dice<R> {
    pub fn new(source: R) -> Self {
        Dice { source }
    }

    pub fn roll(&mut self) -> DiceRoll {
        let die1 = self.source.next_int(1, DiceRoll::FACES as u32) as u8;
        let die2 = self.source.next_int(1, DiceRoll::FACES as u32) as u8;
        DiceRoll::new(die1, die2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snakes_ladders::{SeededRandom, ThreadRandom, random::ScriptedRandom};

    #[test]
    fn test_dice_roll() {
        let mut dice = Dice::new(ThreadRandom);
        for _ in 1..=100 {
            let roll = dice.roll();
            assert!(roll.die1() >= 1 && roll.die1() <= 6);
            assert!(roll.die2() >= 1 && roll.die2() <= 6);
            assert!(roll.total() >= 2 && roll.total() <= 12);
            assert_eq!(roll.total(), roll.die1() + roll.die2());
        }
    }

    #[test]
    fn test_dice_draws_two_independent_values() {
        let mut dice = Dice::new(ScriptedRandom::new(&[3, 4]));
        let roll = dice.roll();
        assert_eq!(roll, DiceRoll::new(3, 4));
        assert_eq!(roll.total(), 7);
        assert!(!roll.is_double());
    }

    #[test]
    fn test_seeded_dice_replay() {
        let mut a = Dice::new(SeededRandom::new(99));
        let mut b = Dice::new(SeededRandom::new(99));
        for _ in 0..20 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_every_total_reachable() {
        let mut dice = Dice::new(SeededRandom::new(5));
        let mut seen = [false; 13];
        for _ in 0..2000 {
            seen[dice.roll().total() as usize] = true;
        }
        assert!(seen[2..=12].iter().all(|&s| s));
        assert!(!seen[0] && !seen[1]);
    }

    #[test]
    fn test_display() {
        assert_eq!(DiceRoll::new(6, 6).to_string(), "6 | 6");
        assert!(DiceRoll::new(6, 6).is_double());
    }
}
