pub mod orchestrator;
pub mod preset;
pub mod state;
pub mod sync;

pub use orchestrator::{FormEvent, FormOrchestrator, QuoteDisplay};
pub use state::FormState;
