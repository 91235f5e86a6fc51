// Resume-to-job matching engine.
// Pure and synchronous: no I/O, no shared state. Handlers resolve a
// ScoringProfile and call through the MatchScorer held in AppState.

pub mod features;
pub mod profile;
pub mod recommendation;
pub mod scorer;
pub mod subscores;
