//! Adaptive difficulty for practice sessions
//!
//! Keeps a learner inside a target accuracy band by stepping exercise
//! difficulty between three levels, driven by accuracy over a rolling window
//! of recent answers.
//!
//! ## Policy (evaluated in order)
//! 1. Warmup: fewer than `warmup_period` answers, never adjust
//! 2. Budget: `adjustments_made >= max_adjustments`, never adjust
//! 3. Boundary: hard at high accuracy or easy at low accuracy, never adjust
//! 4. Accuracy >= `increase_threshold`: step up
//! 5. Accuracy <= `decrease_threshold`: step down
//! 6. Otherwise the learner is in the target range
//!
//! Session state is a plain value. `record_answer` returns a new state and
//! never touches its input; the caller owns persistence.

pub mod selector;

pub use selector::{difficulty_weights, select_next_exercise, DifficultyWeights, Exercise, ExerciseRef};

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

/// Amount `difficulty_bias` moves per adjustment
const BIAS_STEP: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Medium => "medium",
            DifficultyLevel::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(DifficultyLevel::Easy),
            "medium" => Some(DifficultyLevel::Medium),
            "hard" => Some(DifficultyLevel::Hard),
            _ => None,
        }
    }

    /// One level in `direction`, or `None` at the boundary
    pub fn step(&self, direction: AdjustDirection) -> Option<Self> {
        match (self, direction) {
            (DifficultyLevel::Easy, AdjustDirection::Up) => Some(DifficultyLevel::Medium),
            (DifficultyLevel::Medium, AdjustDirection::Up) => Some(DifficultyLevel::Hard),
            (DifficultyLevel::Hard, AdjustDirection::Down) => Some(DifficultyLevel::Medium),
            (DifficultyLevel::Medium, AdjustDirection::Down) => Some(DifficultyLevel::Easy),
            (DifficultyLevel::Hard, AdjustDirection::Up)
            | (DifficultyLevel::Easy, AdjustDirection::Down) => None,
        }
    }
}

impl Default for DifficultyLevel {
    fn default() -> Self {
        DifficultyLevel::Medium
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustDirection {
    Up,
    Down,
}

/// Adaptive difficulty configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveConfig {
    /// Number of recent answers used for rolling accuracy
    pub window_size: usize,
    /// Accuracy at or above which difficulty steps up
    pub increase_threshold: f64,
    /// Accuracy at or below which difficulty steps down
    pub decrease_threshold: f64,
    /// Maximum number of adjustments per session
    pub max_adjustments: u32,
    /// Answers required before any adjustment
    pub warmup_period: usize,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            window_size: 5,
            increase_threshold: 0.8,
            decrease_threshold: 0.4,
            max_adjustments: 3,
            warmup_period: 3,
        }
    }
}

/// A recorded difficulty change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyTransition {
    pub timestamp: DateTime<Utc>,
    pub from: DifficultyLevel,
    pub to: DifficultyLevel,
    pub reason: String,
}

/// Per-session adaptive state, owned by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveSessionState {
    /// Most recent answer outcomes, oldest first, at most `2 * window_size`
    pub recent_answers: Vec<bool>,
    /// Accumulator in [-1, 1] nudged by each adjustment
    pub difficulty_bias: f64,
    pub adjustments_made: u32,
    pub current_difficulty: DifficultyLevel,
    /// Append-only log of difficulty changes
    pub history: Vec<DifficultyTransition>,
}

impl AdaptiveSessionState {
    /// Fresh session starting at `starting`
    pub fn new(starting: DifficultyLevel) -> Self {
        Self {
            recent_answers: Vec::new(),
            difficulty_bias: 0.0,
            adjustments_made: 0,
            current_difficulty: starting,
            history: Vec::new(),
        }
    }
}

impl Default for AdaptiveSessionState {
    fn default() -> Self {
        Self::new(DifficultyLevel::default())
    }
}

/// Result of evaluating the adjustment policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentDecision {
    pub should_adjust: bool,
    pub direction: Option<AdjustDirection>,
    pub reason: String,
}

impl AdjustmentDecision {
    fn hold(reason: String) -> Self {
        Self {
            should_adjust: false,
            direction: None,
            reason,
        }
    }

    fn adjust(direction: AdjustDirection, reason: String) -> Self {
        Self {
            should_adjust: true,
            direction: Some(direction),
            reason,
        }
    }
}

/// Fraction of correct answers among the last `window_size` entries.
/// An empty history is neutral (0.5).
pub fn calculate_rolling_accuracy(answers: &[bool], window_size: usize) -> f64 {
    let start = answers.len().saturating_sub(window_size);
    let window = &answers[start..];
    if window.is_empty() {
        return 0.5;
    }
    let correct = window.iter().filter(|&&a| a).count();
    correct as f64 / window.len() as f64
}

/// Decide whether the session's difficulty should move
pub fn should_adjust_difficulty(
    state: &AdaptiveSessionState,
    config: &AdaptiveConfig,
) -> AdjustmentDecision {
    let answered = state.recent_answers.len();
    if answered < config.warmup_period {
        return AdjustmentDecision::hold(format!(
            "Warmup period ({}/{} answers)",
            answered, config.warmup_period
        ));
    }

    if state.adjustments_made >= config.max_adjustments {
        return AdjustmentDecision::hold(format!(
            "Maximum adjustments reached ({})",
            config.max_adjustments
        ));
    }

    let accuracy = calculate_rolling_accuracy(&state.recent_answers, config.window_size);
    let high = accuracy >= config.increase_threshold;
    let low = accuracy <= config.decrease_threshold;

    if high && state.current_difficulty == DifficultyLevel::Hard {
        return AdjustmentDecision::hold("Already at max difficulty".to_string());
    }
    if low && state.current_difficulty == DifficultyLevel::Easy {
        return AdjustmentDecision::hold("Already at min difficulty".to_string());
    }

    if high {
        return AdjustmentDecision::adjust(
            AdjustDirection::Up,
            format!("High accuracy ({:.0}%)", accuracy * 100.0),
        );
    }
    if low {
        return AdjustmentDecision::adjust(
            AdjustDirection::Down,
            format!("Low accuracy ({:.0}%)", accuracy * 100.0),
        );
    }

    AdjustmentDecision::hold(format!(
        "Performance in target range ({:.0}%)",
        accuracy * 100.0
    ))
}

/// Record one answer and return the resulting state
pub fn record_answer(
    state: &AdaptiveSessionState,
    correct: bool,
    config: &AdaptiveConfig,
) -> AdaptiveSessionState {
    record_answer_at(state, correct, config, Utc::now())
}

/// `record_answer` with an explicit clock, for reproducible transition logs
pub fn record_answer_at(
    state: &AdaptiveSessionState,
    correct: bool,
    config: &AdaptiveConfig,
    now: DateTime<Utc>,
) -> AdaptiveSessionState {
    let mut next = state.clone();

    next.recent_answers.push(correct);
    let cap = config.window_size * 2;
    if next.recent_answers.len() > cap {
        let excess = next.recent_answers.len() - cap;
        next.recent_answers.drain(..excess);
    }

    let decision = should_adjust_difficulty(&next, config);
    let Some(direction) = decision.direction.filter(|_| decision.should_adjust) else {
        debug!("No difficulty change: {}", decision.reason);
        return next;
    };
    let Some(to) = next.current_difficulty.step(direction) else {
        return next;
    };

    info!(
        "Difficulty {} -> {}: {}",
        next.current_difficulty, to, decision.reason
    );

    next.history.push(DifficultyTransition {
        timestamp: now,
        from: next.current_difficulty,
        to,
        reason: decision.reason,
    });
    next.current_difficulty = to;
    next.adjustments_made += 1;

    let delta = match direction {
        AdjustDirection::Up => BIAS_STEP,
        AdjustDirection::Down => -BIAS_STEP,
    };
    next.difficulty_bias = (next.difficulty_bias + delta).clamp(-1.0, 1.0);

    next
}

/// Serialize session state for an external store
pub fn serialize_adaptive_state(state: &AdaptiveSessionState) -> Result<String> {
    Ok(serde_json::to_string(state)?)
}

/// Parse stored session state; malformed input yields `None`
pub fn deserialize_adaptive_state(json: &str) -> Option<AdaptiveSessionState> {
    match serde_json::from_str(json) {
        Ok(state) => Some(state),
        Err(e) => {
            warn!("Failed to parse adaptive session state: {}", e);
            None
        }
    }
}

/// Snapshot of a session for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub current_difficulty: DifficultyLevel,
    pub rolling_accuracy: f64,
    pub answers_recorded: usize,
    pub difficulty_bias: f64,
    pub adjustments_made: u32,
    pub adjustments_remaining: u32,
    pub next_decision: AdjustmentDecision,
}

pub fn session_summary(state: &AdaptiveSessionState, config: &AdaptiveConfig) -> SessionSummary {
    SessionSummary {
        current_difficulty: state.current_difficulty,
        rolling_accuracy: calculate_rolling_accuracy(&state.recent_answers, config.window_size),
        answers_recorded: state.recent_answers.len(),
        difficulty_bias: state.difficulty_bias,
        adjustments_made: state.adjustments_made,
        adjustments_remaining: config.max_adjustments.saturating_sub(state.adjustments_made),
        next_decision: should_adjust_difficulty(state, config),
    }
}
