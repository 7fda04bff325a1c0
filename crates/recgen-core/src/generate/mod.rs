//! Record synthesis: identifiers, scalar values, structure, batches.

pub mod context;
pub mod dates;
pub mod engine;
pub mod identifier;
pub mod providers;
pub mod scalar;
pub mod structure;
pub mod template;
pub mod value;

pub use context::{GenerationContext, ParentContext};
pub use engine::{effective_count, synthesize, synthesize_with_rng, BatchOptions};
pub use value::{Record, Value};
