//! Session record list.

use super::Record;

/// Ordered records accumulated across the session.
///
/// Records only enter at the front, and only [`RecordList::clear`] removes
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordList {
    records: Vec<Record>,
}

impl RecordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert each record at the front, in iteration order.
    ///
    /// The last record yielded ends up first, so a query's records appear
    /// in reverse of the order the flattener produced them.
    pub fn prepend_each(&mut self, records: impl IntoIterator<Item = Record>) {
        for record in records {
            self.records.insert(0, record);
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordList {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
