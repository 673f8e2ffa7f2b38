//! # Ticket Extraction Module
//!
//! This module turns the loosely structured, Markdown-like text produced by
//! the summarization step into an ordered list of ticket records ready for
//! issue creation.
//!
//! Extraction is purely lexical: candidate sections are split on horizontal
//! rules, titles come from bold numbered headings, and the four recognized
//! labeled fields are captured with a single scan over bold spans so that a
//! field always stops at the next label.

mod extract;
mod ticket;

pub use extract::{extract_tickets, UNTITLED};
pub use ticket::TicketRecord;
