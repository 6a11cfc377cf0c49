//! Optional caching layer over the three RSA stages.
//!
//! The free functions in [`crate::literal`], [`crate::speaker`] and
//! [`crate::listener`] recompute their full dependency chain on every
//! call, matching the reference pipeline. All three stages are pure
//! and deterministic, so their full tables can be cached without
//! changing any observable output. [`RsaEngine`] does exactly that:
//! it fixes a game and a configuration, computes each stage's table
//! at most once, and answers queries from the cache.
//!
//! This is a performance layer only. `tests/pipeline.rs` checks that
//! engine answers equal free-function answers bit for bit.

use log::debug;

use crate::config::RsaConfig;
use crate::error::RsaError;
use crate::listener::listener_table;
use crate::literal::literal_table;
use crate::output::{ProbTable, StageOutput};
use crate::speaker::speaker_table;
use crate::world::RefGame;

/// Memoizing front-end for a fixed game and configuration.
///
/// # Example
///
/// ```rust
/// use rsa_game::{RefGame, RsaConfig, RsaEngine};
///
/// let game = RefGame::basic_scene();
/// let mut engine = RsaEngine::new(&game, RsaConfig::default()).unwrap();
///
/// let first = engine.pragmatic_listener("blue").unwrap();
/// let second = engine.pragmatic_listener("square").unwrap(); // cached table
/// assert_eq!(first.table, second.table);
/// ```
pub struct RsaEngine<'a> {
    game: &'a RefGame,
    config: RsaConfig,
    l0: Option<ProbTable>,
    s1: Option<ProbTable>,
    l1: Option<ProbTable>,
}

impl<'a> RsaEngine<'a> {
    /// Create an engine, validating the configuration up front.
    pub fn new(game: &'a RefGame, config: RsaConfig) -> Result<Self, RsaError> {
        config.validate(game)?;
        Ok(Self {
            game,
            config,
            l0: None,
            s1: None,
            l1: None,
        })
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &RsaConfig {
        &self.config
    }

    fn l0_table(&mut self) -> Result<&ProbTable, RsaError> {
        if self.l0.is_none() {
            debug!("engine: computing literal listener table");
            self.l0 = Some(literal_table(self.game, &self.config)?);
        }
        Ok(self.l0.as_ref().unwrap())
    }

    fn s1_table(&mut self) -> Result<&ProbTable, RsaError> {
        if self.s1.is_none() {
            debug!("engine: computing pragmatic speaker table");
            self.s1 = Some(speaker_table(self.game, &self.config)?);
        }
        Ok(self.s1.as_ref().unwrap())
    }

    fn l1_table(&mut self) -> Result<&ProbTable, RsaError> {
        if self.l1.is_none() {
            debug!("engine: computing pragmatic listener table");
            self.l1 = Some(listener_table(self.game, &self.config)?);
        }
        Ok(self.l1.as_ref().unwrap())
    }

    /// Cached literal listener query.
    pub fn literal_listener(&mut self, utterance: &str) -> Result<StageOutput, RsaError> {
        self.game.utterance_index(utterance)?;
        let table = self.l0_table()?.clone();
        let row = table.row(utterance)?;
        Ok(StageOutput { table, row })
    }

    /// Cached pragmatic speaker query.
    pub fn pragmatic_speaker(&mut self, state: &str) -> Result<StageOutput, RsaError> {
        self.game.state_index(state)?;
        let table = self.s1_table()?.clone();
        let row = table.row(state)?;
        Ok(StageOutput { table, row })
    }

    /// Cached pragmatic listener query.
    pub fn pragmatic_listener(&mut self, utterance: &str) -> Result<StageOutput, RsaError> {
        self.game.utterance_index(utterance)?;
        let table = self.l1_table()?.clone();
        let row = table.row(utterance)?;
        Ok(StageOutput { table, row })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listener::pragmatic_listener;
    use crate::literal::literal_listener;
    use crate::speaker::pragmatic_speaker;

    #[test]
    fn test_engine_matches_free_functions() {
        let game = RefGame::basic_scene();
        let mut engine = RsaEngine::new(&game, RsaConfig::default()).unwrap();

        assert_eq!(
            engine.literal_listener("square").unwrap(),
            literal_listener(&game, "square").unwrap()
        );
        assert_eq!(
            engine.pragmatic_speaker("blue-square").unwrap(),
            pragmatic_speaker(&game, "blue-square", 1.0).unwrap()
        );
        assert_eq!(
            engine.pragmatic_listener("blue").unwrap(),
            pragmatic_listener(&game, "blue").unwrap()
        );
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let game = RefGame::basic_scene();
        let mut engine = RsaEngine::new(&game, RsaConfig::with_alpha(3.0)).unwrap();
        let a = engine.pragmatic_listener("blue").unwrap();
        let b = engine.pragmatic_listener("blue").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_engine_rejects_bad_config() {
        let game = RefGame::basic_scene();
        let result = RsaEngine::new(&game, RsaConfig::with_alpha(f64::INFINITY));
        assert!(matches!(result, Err(RsaError::NonFiniteAlpha { .. })));
    }

    #[test]
    fn test_unknown_key_does_not_poison_cache() {
        let game = RefGame::basic_scene();
        let mut engine = RsaEngine::new(&game, RsaConfig::default()).unwrap();
        assert!(engine.pragmatic_speaker("nope").is_err());
        assert!(engine.pragmatic_speaker("blue-circle").is_ok());
    }
}
