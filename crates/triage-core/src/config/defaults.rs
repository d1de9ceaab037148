// Single source of truth for all default values.

// --- Embedding ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "hashing";
pub const DEFAULT_MODEL_NAME: &str = "paraphrase-multilingual-MiniLM-L12-v2";
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 256;
pub const DEFAULT_EMBEDDING_N_JOBS: usize = 8;
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 60;

// --- Reducer ---
pub const DEFAULT_REDUCER_ENABLED: bool = true;
pub const DEFAULT_N_NEIGHBORS: usize = 15;
pub const DEFAULT_N_COMPONENTS: usize = 15;
pub const DEFAULT_MIN_DIST: f64 = 0.0;

// --- Clusterer ---
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 25;
pub const DEFAULT_CLUSTER_SELECTION_EPSILON: f64 = 0.0;

// --- Labeling ---
pub const DEFAULT_YAKE_TOPK: usize = 10;
pub const DEFAULT_YAKE_MAX_NGRAM: usize = 3;

// --- Output ---
pub const DEFAULT_TOP_N_CLUSTERS: usize = 10;
pub const DEFAULT_INCLUDE_NOISE: bool = false;
pub const DEFAULT_INCLUDE_ASSIGNMENTS: bool = false;

/// Embedding providers `create_provider` knows how to build.
pub const KNOWN_PROVIDERS: [&str; 2] = ["hashing", "ollama"];
