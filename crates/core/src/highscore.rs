//! Highscore persistence seam.
//!
//! The session decides *when* a highscore changes; a store decides *where*
//! it lives. Reading never fails: anything unreadable counts as no prior
//! highscore. Writing may fail, and that error is fatal to the caller.

use anyhow::Result;

pub trait HighscoreStore {
    /// Previously persisted highscore, or 0 if there is none.
    fn load(&self) -> u32;

    /// Persist `value`, replacing whatever was stored.
    fn save(&mut self, value: u32) -> Result<()>;
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHighscore {
    value: u32,
    saves: u32,
}

impl MemoryHighscore {
    pub fn new(value: u32) -> Self {
        Self { value, saves: 0 }
    }

    /// Number of successful `save` calls.
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl HighscoreStore for MemoryHighscore {
    fn load(&self) -> u32 {
        self.value
    }

    fn save(&mut self, value: u32) -> Result<()> {
        self.value = value;
        self.saves += 1;
        Ok(())
    }
}

impl<S: HighscoreStore + ?Sized> HighscoreStore for Box<S> {
    fn load(&self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, value: u32) -> Result<()> {
        (**self).save(value)
    }
}
