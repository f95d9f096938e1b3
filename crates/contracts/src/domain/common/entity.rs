use super::RecordId;

/// A record stored in a [`super::Collection`].
pub trait Entity: Clone {
    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);

    /// Singular display name, e.g. "Job"
    fn element_name() -> &'static str;

    /// Plural display name, e.g. "Jobs"
    fn list_name() -> &'static str;
}
