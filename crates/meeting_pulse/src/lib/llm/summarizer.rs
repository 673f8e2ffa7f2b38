use std::{fmt::Debug, future::Future};

/// A text-generation backend that turns a raw transcript into the structured
/// summary the extractor parses.
///
/// Exactly one summarize call is issued per incoming transcript; failures
/// propagate, there is no retry. Outputs are not deterministic, so callers
/// must tolerate format drift.
pub trait Summarizer {
    const SUMMARIZER_MODEL: &'static str;

    type Error: Debug;

    fn summarize(
        &self,
        content: &str,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}

#[derive(Debug)]
pub struct SummaryResponse {
    pub summary: String,
}
