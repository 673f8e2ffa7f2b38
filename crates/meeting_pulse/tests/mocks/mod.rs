pub mod notifier;
pub mod summarizer;
pub mod tracker;
