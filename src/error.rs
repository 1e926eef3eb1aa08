use thiserror::Error;

/// Errors reported by the engine. Lookup misses are not errors: an empty
/// suggestion list (or the synthetic unknown, when requested) is a regular
/// result, and deleting an absent dictionary entry returns `false`.
#[derive(Debug, Error)]
pub enum Error {
    /// A per-call edit distance bound exceeded `max_dictionary_edit_distance`.
    /// The delete index is only precalculated up to the dictionary bound, so
    /// larger lookup bounds cannot be answered.
    #[error("distance too large")]
    DistanceTooLarge,

    /// Dictionary file ingestion failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
