use crate::{notify::Notifier, tracker::IssueTracker, Summarizer, TranscriptProcessor};

pub struct TranscriptProcessorBuilder<S = (), N = (), T = ()> {
    summarizer: S,
    notifier: N,
    tracker: T,
}

impl TranscriptProcessorBuilder {
    pub fn new() -> Self {
        Self {
            summarizer: (),
            notifier: (),
            tracker: (),
        }
    }
}

impl<S, N, T> TranscriptProcessorBuilder<S, N, T> {
    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> TranscriptProcessorBuilder<S2, N, T> {
        TranscriptProcessorBuilder {
            summarizer,
            notifier: self.notifier,
            tracker: self.tracker,
        }
    }

    pub fn notifier<N2: Notifier + Send + Sync + 'static>(
        self,
        notifier: N2,
    ) -> TranscriptProcessorBuilder<S, N2, T> {
        TranscriptProcessorBuilder {
            summarizer: self.summarizer,
            notifier,
            tracker: self.tracker,
        }
    }

    pub fn tracker<T2: IssueTracker + Send + Sync + 'static>(
        self,
        tracker: T2,
    ) -> TranscriptProcessorBuilder<S, N, T2> {
        TranscriptProcessorBuilder {
            summarizer: self.summarizer,
            notifier: self.notifier,
            tracker,
        }
    }
}

impl<S, N, T> TranscriptProcessorBuilder<S, N, T>
where
    S: Summarizer + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    T: IssueTracker + Send + Sync + 'static,
{
    pub fn build(self) -> TranscriptProcessor<S, N, T> {
        TranscriptProcessor {
            summarizer: self.summarizer,
            notifier: self.notifier,
            tracker: self.tracker,
        }
    }
}
