use std::future::Future;
use std::pin::Pin;

use super::types::{SimilarCase, SimilarCaseCriteria};

pub type SimilarCasesFuture<'a> = Pin<Box<dyn Future<Output = Vec<SimilarCase>> + Send + 'a>>;

/// Source of historical cases matching an analysis request.
///
/// Implementations never fail: transport, auth and decoding problems are
/// logged where they happen and reported as an empty case list, which the
/// engine turns into a low-confidence neutral prediction.
pub trait SimilarCaseProvider: Send + Sync {
    fn fetch_similar_cases<'a>(&'a self, criteria: SimilarCaseCriteria) -> SimilarCasesFuture<'a>;
}
