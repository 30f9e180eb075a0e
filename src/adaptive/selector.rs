//! Difficulty-weighted exercise selection
//!
//! The random source is a parameter so tests can pass a seeded or mock RNG.

use super::{AdaptiveSessionState, DifficultyLevel};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Copies of a candidate in the sampling pool per unit of weight
const POOL_SCALE: f64 = 10.0;

/// Anything the selector can pick from
pub trait Exercise {
    fn id(&self) -> &str;
    fn difficulty(&self) -> DifficultyLevel;
}

/// Minimal exercise record; any other fields in the source JSON are kept in
/// `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRef {
    pub id: String,
    pub difficulty: DifficultyLevel,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ExerciseRef {
    pub fn new(id: &str, difficulty: DifficultyLevel) -> Self {
        Self {
            id: id.to_string(),
            difficulty,
            extra: serde_json::Map::new(),
        }
    }
}

impl Exercise for ExerciseRef {
    fn id(&self) -> &str {
        &self.id
    }

    fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }
}

/// Sampling weight per difficulty tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyWeights {
    pub easy: f64,
    pub medium: f64,
    pub hard: f64,
}

impl DifficultyWeights {
    pub fn weight(&self, level: DifficultyLevel) -> f64 {
        match level {
            DifficultyLevel::Easy => self.easy,
            DifficultyLevel::Medium => self.medium,
            DifficultyLevel::Hard => self.hard,
        }
    }
}

/// Tier weights biased toward `target`. Medium's neighbours both get 0.25,
/// so its weights sum to 1.2; only the proportions matter.
pub fn difficulty_weights(target: DifficultyLevel) -> DifficultyWeights {
    match target {
        DifficultyLevel::Easy => DifficultyWeights { easy: 0.7, medium: 0.2, hard: 0.1 },
        DifficultyLevel::Medium => DifficultyWeights { easy: 0.25, medium: 0.7, hard: 0.25 },
        DifficultyLevel::Hard => DifficultyWeights { easy: 0.1, medium: 0.2, hard: 0.7 },
    }
}

/// Pick the next exercise, skipping `used_ids` and favouring the session's
/// current difficulty. `None` when nothing is left.
pub fn select_next_exercise<'a, E, R>(
    exercises: &'a [E],
    state: &AdaptiveSessionState,
    used_ids: &HashSet<String>,
    rng: &mut R,
) -> Option<&'a E>
where
    E: Exercise,
    R: Rng + ?Sized,
{
    let weights = difficulty_weights(state.current_difficulty);

    let mut pool: Vec<&'a E> = Vec::new();
    for exercise in exercises.iter().filter(|e| !used_ids.contains(e.id())) {
        let copies = (weights.weight(exercise.difficulty()) * POOL_SCALE).round().max(1.0) as usize;
        pool.extend(std::iter::repeat(exercise).take(copies));
    }

    if pool.is_empty() {
        debug!("No unused exercises left");
        return None;
    }

    let picked = pool[rng.gen_range(0..pool.len())];
    debug!(
        "Selected exercise {} ({}) from pool of {} at target {}",
        picked.id(),
        picked.difficulty(),
        pool.len(),
        state.current_difficulty
    );
    Some(picked)
}
