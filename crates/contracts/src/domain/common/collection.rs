use super::{Entity, IdGenerator, RecordId, ValidationError, ValidationResult};

/// In-memory list of records with unique ids.
///
/// Records keep insertion order. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    ids: IdGenerator,
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            ids: IdGenerator::new(),
        }
    }

    /// Collection pre-filled with sample records. New ids start above the
    /// largest seeded one.
    pub fn from_seed(items: Vec<T>) -> Self {
        let max = items.iter().map(|i| i.id()).max().unwrap_or_default();
        Self {
            items,
            ids: IdGenerator::after(max),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Appends `item` under a fresh id and returns that id.
    pub fn insert(&mut self, item: T) -> RecordId {
        let id = self.ids.next();
        self.push_with_id(item, id)
    }

    /// Like [`Collection::insert`] with an explicit clock reading.
    pub fn insert_at(&mut self, item: T, now_millis: i64) -> RecordId {
        let id = self.ids.next_at(now_millis);
        self.push_with_id(item, id)
    }

    fn push_with_id(&mut self, mut item: T, id: RecordId) -> RecordId {
        item.set_id(id);
        self.items.push(item);
        id
    }

    /// Replaces the record with the same id.
    pub fn update(&mut self, item: T) -> ValidationResult {
        let id = item.id();
        let slot = self
            .items
            .iter_mut()
            .find(|i| i.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        *slot = item;
        Ok(())
    }

    /// Edits the record in place.
    pub fn modify<F>(&mut self, id: RecordId, f: F) -> ValidationResult
    where
        F: FnOnce(&mut T),
    {
        let slot = self
            .items
            .iter_mut()
            .find(|i| i.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        f(slot);
        Ok(())
    }

    /// Like [`Collection::modify`] for edits that can themselves fail.
    pub fn try_modify<F>(&mut self, id: RecordId, f: F) -> ValidationResult
    where
        F: FnOnce(&mut T) -> ValidationResult,
    {
        let slot = self
            .items
            .iter_mut()
            .find(|i| i.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        f(slot)
    }

    pub fn for_each_mut<F>(&mut self, f: F)
    where
        F: FnMut(&mut T),
    {
        self.items.iter_mut().for_each(f);
    }

    /// Removes and returns the record, `None` when the id is unknown.
    pub fn remove(&mut self, id: RecordId) -> Option<T> {
        let pos = self.items.iter().position(|i| i.id() == id)?;
        Some(self.items.remove(pos))
    }

    pub fn filtered<F>(&self, pred: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().filter(|i| pred(i)).cloned().collect()
    }

    pub fn count_where<F>(&self, pred: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().filter(|i| pred(i)).count()
    }

    fn not_found(id: RecordId) -> ValidationError {
        ValidationError::NotFound {
            kind: T::element_name(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: RecordId,
        text: String,
    }

    impl Note {
        fn new(text: &str) -> Self {
            Self {
                id: RecordId::default(),
                text: text.to_string(),
            }
        }
    }

    impl Entity for Note {
        fn id(&self) -> RecordId {
            self.id
        }

        fn set_id(&mut self, id: RecordId) {
            self.id = id;
        }

        fn element_name() -> &'static str {
            "Note"
        }

        fn list_name() -> &'static str {
            "Notes"
        }
    }

    fn seeded() -> Collection<Note> {
        let mut a = Note::new("first");
        a.id = RecordId(1);
        let mut b = Note::new("second");
        b.id = RecordId(2);
        Collection::from_seed(vec![a, b])
    }

    #[test]
    fn test_insert_appends_exactly_one_with_unique_ids() {
        let mut notes = seeded();
        let a = notes.insert_at(Note::new("third"), 1_000);
        let b = notes.insert_at(Note::new("fourth"), 1_000);
        assert_eq!(notes.len(), 4);
        assert_ne!(a, b);
        assert_eq!(notes.items()[2].text, "third");
        assert_eq!(notes.get(b).map(|n| n.text.as_str()), Some("fourth"));
    }

    #[test]
    fn test_insert_never_reuses_seed_ids() {
        let mut notes = seeded();
        let id = notes.insert_at(Note::new("x"), 0);
        assert_eq!(id, RecordId(3));
    }

    #[test]
    fn test_insert_uses_clock_ids() {
        let mut notes = Collection::<Note>::new();
        let id = notes.insert(Note::new("now"));
        assert!(id.value() > 1_600_000_000_000);
    }

    #[test]
    fn test_update_and_modify() {
        let mut notes = seeded();
        let mut edited = notes.get(RecordId(1)).cloned().unwrap();
        edited.text = "edited".to_string();
        notes.update(edited).unwrap();
        assert_eq!(notes.items()[0].text, "edited");

        notes
            .modify(RecordId(2), |n| n.text.push('!'))
            .unwrap();
        assert_eq!(notes.items()[1].text, "second!");
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut notes = seeded();
        let mut ghost = Note::new("ghost");
        ghost.id = RecordId(99);
        assert_eq!(
            notes.update(ghost),
            Err(ValidationError::NotFound {
                kind: "Note",
                id: RecordId(99)
            })
        );
        assert!(notes.modify(RecordId(99), |_| {}).is_err());
        assert!(notes.remove(RecordId(99)).is_none());
        assert_eq!(notes.len(), 2);
    }

    #[test]
    fn test_remove_returns_record() {
        let mut notes = seeded();
        let removed = notes.remove(RecordId(1)).unwrap();
        assert_eq!(removed.text, "first");
        assert_eq!(notes.len(), 1);
        assert!(!notes.contains(RecordId(1)));
    }

    #[test]
    fn test_filtered_and_count_where() {
        let notes = seeded();
        assert_eq!(notes.count_where(|n| n.text.starts_with('s')), 1);
        assert_eq!(notes.filtered(|n| n.text.len() > 3).len(), 2);
    }
}
