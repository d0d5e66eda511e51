//! the fetched museum list and the dropdown options derived from it

use std::collections::{BTreeSet, HashMap};

use museum_shared::{Museum, MuseumId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListView {
    records: Vec<Museum>,
    /// id -> position in `records`
    index: HashMap<MuseumId, usize>,
    /// computed from the first non-empty fetch, then frozen until invalidated
    city_options: Option<Vec<String>>,
    name_options: Vec<String>,
}

impl ListView {
    pub fn records(&self) -> &[Museum] {
        &self.records
    }

    pub fn get(&self, id: MuseumId) -> Option<&Museum> {
        self.index.get(&id).map(|&pos| &self.records[pos])
    }

    /// distinct cities, sorted
    pub fn city_options(&self) -> &[String] {
        self.city_options.as_deref().unwrap_or_default()
    }

    /// every name of the last fetch, sorted
    pub fn name_options(&self) -> &[String] {
        &self.name_options
    }

    /// replace the list with a fresh fetch response
    ///
    /// city options are only derived while none are cached, so a narrower
    /// city-filtered response cannot shrink them. name options always follow
    /// the response.
    pub fn apply_fetch(&mut self, records: Vec<Museum>) {
        self.records = records;
        self.reindex();

        if self.city_options.as_ref().map_or(true, Vec::is_empty) {
            let cities: BTreeSet<&str> = self.records.iter().map(|m| m.city.as_str()).collect();
            self.city_options = Some(cities.into_iter().map(str::to_string).collect());
        }

        let mut names: Vec<String> = self.records.iter().map(|m| m.name.clone()).collect();
        names.sort();
        self.name_options = names;
    }

    /// recompute city options on the next fetch
    pub fn invalidate_city_options(&mut self) {
        self.city_options = None;
    }

    /// swap the record stored under `id`; false when `id` is not listed
    pub fn replace(&mut self, id: MuseumId, record: Museum) -> bool {
        let Some(pos) = self.index.get(&id).copied() else {
            return false;
        };
        if record.id != Some(id) {
            self.index.remove(&id);
            if let Some(new_id) = record.id {
                self.index.insert(new_id, pos);
            }
        }
        self.records[pos] = record;
        true
    }

    pub fn append(&mut self, record: Museum) {
        if let Some(id) = record.id {
            self.index.entry(id).or_insert(self.records.len());
        }
        self.records.push(record);
    }

    /// drop the record stored under `id`, keeping the order of the rest
    pub fn remove(&mut self, id: MuseumId) -> bool {
        if !self.index.contains_key(&id) {
            return false;
        }
        self.records.retain(|m| m.id != Some(id));
        self.reindex();
        true
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (pos, record) in self.records.iter().enumerate() {
            if let Some(id) = record.id {
                self.index.entry(id).or_insert(pos);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn museum(id: MuseumId, name: &str, city: &str) -> Museum {
        Museum {
            id: Some(id),
            name: name.to_string(),
            city: city.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fetch_derives_sorted_options() {
        let mut list = ListView::default();
        list.apply_fetch(vec![museum(1, "B", "X"), museum(2, "A", "Y")]);
        assert_eq!(list.city_options(), ["X", "Y"]);
        assert_eq!(list.name_options(), ["A", "B"]);
    }

    #[test]
    fn test_city_options_are_distinct() {
        let mut list = ListView::default();
        list.apply_fetch(vec![
            museum(1, "C", "Gent"),
            museum(2, "B", "Antwerpen"),
            museum(3, "A", "Gent"),
        ]);
        assert_eq!(list.city_options(), ["Antwerpen", "Gent"]);
        assert_eq!(list.name_options(), ["A", "B", "C"]);
    }

    #[test]
    fn test_narrower_fetch_keeps_city_options() {
        let mut list = ListView::default();
        list.apply_fetch(vec![museum(1, "B", "X"), museum(2, "A", "Y")]);
        list.apply_fetch(vec![museum(2, "A", "Y")]);
        assert_eq!(list.city_options(), ["X", "Y"]);
        assert_eq!(list.name_options(), ["A"]);
    }

    #[test]
    fn test_empty_first_fetch_leaves_city_options_open() {
        let mut list = ListView::default();
        list.apply_fetch(Vec::new());
        assert!(list.city_options().is_empty());
        list.apply_fetch(vec![museum(1, "B", "X")]);
        assert_eq!(list.city_options(), ["X"]);
    }

    #[test]
    fn test_invalidated_city_options_follow_next_fetch() {
        let mut list = ListView::default();
        list.apply_fetch(vec![museum(1, "B", "X"), museum(2, "A", "Y")]);
        list.invalidate_city_options();
        list.apply_fetch(vec![museum(2, "A", "Y")]);
        assert_eq!(list.city_options(), ["Y"]);
    }

    #[test]
    fn test_replace_touches_only_matching_record() {
        let mut list = ListView::default();
        list.apply_fetch(vec![museum(1, "B", "X"), museum(2, "A", "Y")]);
        assert!(list.replace(1, museum(1, "B2", "X")));
        assert_eq!(list.records()[0].name, "B2");
        assert_eq!(list.records()[1], museum(2, "A", "Y"));
        assert!(!list.replace(9, museum(9, "Q", "Q")));
        assert_eq!(list.records().len(), 2);
    }

    #[test]
    fn test_append_then_lookup() {
        let mut list = ListView::default();
        list.apply_fetch(vec![museum(1, "B", "X")]);
        list.append(museum(3, "Z", "Y"));
        assert_eq!(list.get(3).map(|m| m.name.as_str()), Some("Z"));
        assert_eq!(list.records().len(), 2);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut list = ListView::default();
        list.apply_fetch(vec![
            museum(1, "A", "X"),
            museum(2, "B", "X"),
            museum(3, "C", "X"),
        ]);
        assert!(list.remove(2));
        let ids: Vec<_> = list.records().iter().map(|m| m.id).collect();
        assert_eq!(ids, [Some(1), Some(3)]);
        assert_eq!(list.get(3).map(|m| m.name.as_str()), Some("C"));
        assert!(!list.remove(2));
    }
}
