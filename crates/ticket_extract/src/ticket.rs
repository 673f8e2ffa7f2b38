/// The minimal unit handed to the issue tracker: a title and a composed
/// description.
///
/// The description is assembled from up to four labeled subsections; absent
/// ones are substituted with an explicit `[Missing ...]` marker so the record
/// stays auditable downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRecord {
    pub title: String,
    pub description: String,
}
