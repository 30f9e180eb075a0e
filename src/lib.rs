//! jazik - Macedonian grammar checking and adaptive practice difficulty
//!
//! Two independent engines:
//! - [`grammar`]: validates adjective–noun agreement in gender, number and
//!   definiteness against an explicit [`grammar::Lexicon`]
//! - [`adaptive`]: steps exercise difficulty from rolling accuracy and picks
//!   the next exercise with difficulty-weighted sampling
//!
//! Both are synchronous and side-effect free; state values are owned by the
//! caller and can be shared across threads freely.

pub mod adaptive;
pub mod config;
pub mod error;
pub mod grammar;

pub use error::{JazikError, Result};
