use crate::model::ApplicationRecord;

/// Case-insensitive substring filter over name and description.
///
/// The query is matched literally, surrounding whitespace included.
pub struct QueryMatcher {
    needle: String,
}

impl QueryMatcher {
    pub fn new(query: &str) -> Self {
        Self { needle: query.to_lowercase() }
    }

    pub fn is_match(&self, record: &ApplicationRecord) -> bool {
        record.name.to_lowercase().contains(&self.needle)
            || record.description.to_lowercase().contains(&self.needle)
    }

    pub fn filter(&self, records: Vec<ApplicationRecord>) -> Vec<ApplicationRecord> {
        records.into_iter().filter(|r| self.is_match(r)).collect()
    }
}
