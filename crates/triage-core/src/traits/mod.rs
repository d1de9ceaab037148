//! Capability seams. The pipeline depends only on these traits; the
//! numeric backends and the report format live in other crates.

pub mod clusterer;
pub mod embedding;
pub mod keyword_extractor;
pub mod reducer;
pub mod report_sink;

pub use clusterer::IDensityClusterer;
pub use embedding::IEmbeddingProvider;
pub use keyword_extractor::IKeywordExtractor;
pub use reducer::IDimensionReducer;
pub use report_sink::IReportSink;
