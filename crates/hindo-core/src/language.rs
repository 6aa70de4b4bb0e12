use crate::meta::FrequencyObservation;

/// Frequency data source for a language implementation
pub trait FrequencyProvider: Send + Sync {
    /// All observations for a term, most common first
    fn frequencies(&self, term: &str) -> Vec<FrequencyObservation>;

    /// Best rank among all dictionaries, None if no dictionary ranks the term
    fn best_rank(&self, term: &str) -> Option<i64> {
        self.frequencies(term).first().and_then(|o| o.rank)
    }
}
