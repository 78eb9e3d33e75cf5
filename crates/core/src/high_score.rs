//! High score persistence seam.
//!
//! The session loads the stored value once when it is created and saves it every
//! time the running score passes it. Implementations decide where it lives.

use std::io;

pub trait HighScoreStore {
    /// Stored high score, or 0 when nothing usable is stored.
    fn load_high_score(&mut self) -> u32;

    fn save_high_score(&mut self, score: u32) -> io::Result<()>;
}

/// Keeps the high score in memory only. Default store for headless sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHighScore {
    value: u32,
    saves: u32,
}

impl MemoryHighScore {
    pub fn new(value: u32) -> Self {
        Self { value, saves: 0 }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// How many times the session wrote to this store.
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load_high_score(&mut self) -> u32 {
        self.value
    }

    fn save_high_score(&mut self, score: u32) -> io::Result<()> {
        self.value = score;
        self.saves += 1;
        Ok(())
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load_high_score(&mut self) -> u32 {
        (**self).load_high_score()
    }

    fn save_high_score(&mut self, score: u32) -> io::Result<()> {
        (**self).save_high_score(score)
    }
}
