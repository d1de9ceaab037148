//! # triage-embeddings
//!
//! Embedding capability for the triage pipeline: text in, fixed-size vector out.
//!
//! ## Architecture
//!
//! ```text
//! BatchedEmbedder (batch_size chunks on an n_jobs rayon pool)
//! └── Box<dyn IEmbeddingProvider>
//!     ├── HashingProvider (default, offline, deterministic)
//!     └── OllamaProvider (local server, /api/embed)
//! ```

pub mod batching;
pub mod providers;

pub use batching::BatchedEmbedder;
pub use providers::{create_provider, HashingProvider, OllamaProvider};
