use serde_json::Value;
use tracing::debug;

use crate::fragment::{Element, Fragment};
use crate::skill::{compare_levels, NameCollator, Skill, SortDirection, SortKey};

/// In-memory skills list plus the remembered sort direction of each key.
///
/// None of the operations fail: bad input degrades to an empty list,
/// sorting an empty list does nothing.
#[derive(Debug, Clone, Default)]
pub struct SkillsStore {
    list: Vec<Skill>,
    name_mode: SortDirection,
    level_mode: SortDirection,
}

impl SkillsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list from a parsed JSON value.
    ///
    /// A non-array value leaves the list empty. Entries without a string
    /// `name` and a numeric `level` are dropped; the rest keep input order.
    pub fn set_skills_list(&mut self, json: &Value) {
        self.list.clear();

        let Some(entries) = json.as_array() else {
            debug!("Skills data is not an array, list left empty");
            return;
        };

        for (index, entry) in entries.iter().enumerate() {
            match Skill::from_value(entry) {
                Some(skill) => self.list.push(skill),
                None => debug!("Dropping malformed skill entry #{}", index),
            }
        }

        debug!(
            "Accepted {} of {} skill entries",
            self.list.len(),
            entries.len()
        );
    }

    /// Sort in place by `key`, using that key's current direction, then
    /// flip that direction. The other key's direction is left alone.
    pub fn sort_skills_list(&mut self, key: SortKey) {
        if self.list.is_empty() {
            return;
        }

        let direction = match key {
            SortKey::Name => {
                let current = self.name_mode;
                self.name_mode = current.toggled();
                current
            }
            SortKey::Level => {
                let current = self.level_mode;
                self.level_mode = current.toggled();
                current
            }
        };

        debug!("Sorting {} skills by {} ({})", self.list.len(), key, direction);

        match key {
            SortKey::Name => {
                let mut collator = NameCollator::new();
                self.list
                    .sort_by(|a, b| direction.apply(collator.compare(&a.name, &b.name)))
            }
            SortKey::Level => self
                .list
                .sort_by(|a, b| direction.apply(compare_levels(a.level, b.level))),
        }
    }

    /// Build a `dt`/`dd` pair per skill, in current order.
    pub fn generate_skills_list(&self) -> Fragment {
        let mut fragment = Fragment::new();

        for skill in &self.list {
            let percent = skill.percent();

            fragment.append(
                Element::new("dt")
                    .with_class(skill.class_name())
                    .with_text(skill.name.as_str()),
            );
            fragment.append(
                Element::new("dd").with_class("level").with_child(
                    Element::new("div")
                        .with_style("width", percent.as_str())
                        .with_text(percent.as_str()),
                ),
            );
        }

        fragment
    }

    pub fn skills(&self) -> &[Skill] {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn name_mode(&self) -> SortDirection {
        self.name_mode
    }

    pub fn level_mode(&self) -> SortDirection {
        self.level_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(store: &SkillsStore) -> Vec<&str> {
        store.skills().iter().map(|s| s.name.as_str()).collect()
    }

    fn store_with(value: Value) -> SkillsStore {
        let mut store = SkillsStore::new();
        store.set_skills_list(&value);
        store
    }

    #[test]
    fn test_set_keeps_order_and_fields() {
        let store = store_with(json!([
            {"name": "B", "level": 10},
            {"name": "A", "level": 50.5}
        ]));
        assert_eq!(
            store.skills(),
            &[Skill::new("B", 10.0), Skill::new("A", 50.5)]
        );
    }

    #[test]
    fn test_set_drops_invalid_entries() {
        let store = store_with(json!([
            {"name": "Rust", "level": 90},
            {"name": 1, "level": 5},
            null,
            {"name": "Go", "level": "high"},
            "HTML",
            {"name": "SQL", "level": 30}
        ]));
        assert_eq!(names(&store), vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_set_non_array_yields_empty() {
        for value in [json!(null), json!({}), json!("skills"), json!(42)] {
            let store = store_with(value);
            assert!(store.is_empty());
        }
    }

    #[test]
    fn test_set_replaces_previous_list() {
        let mut store = store_with(json!([{"name": "A", "level": 1}]));
        store.set_skills_list(&json!([{"name": "B", "level": 2}]));
        assert_eq!(names(&store), vec!["B"]);
        store.set_skills_list(&json!("oops"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_sort_by_name_toggles() {
        let mut store = store_with(json!([
            {"name": "B", "level": 10},
            {"name": "A", "level": 50}
        ]));
        store.sort_skills_list(SortKey::Name);
        assert_eq!(names(&store), vec!["A", "B"]);
        assert_eq!(store.name_mode(), SortDirection::Descending);

        store.sort_skills_list(SortKey::Name);
        assert_eq!(names(&store), vec!["B", "A"]);
        assert_eq!(store.name_mode(), SortDirection::Ascending);
    }

    #[test]
    fn test_sort_by_level_toggles() {
        let mut store = store_with(json!([
            {"name": "B", "level": 10},
            {"name": "A", "level": 50}
        ]));
        store.sort_skills_list(SortKey::Level);
        assert_eq!(names(&store), vec!["B", "A"]);
        store.sort_skills_list(SortKey::Level);
        assert_eq!(names(&store), vec!["A", "B"]);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut store = store_with(json!([
            {"name": "C", "level": 20},
            {"name": "A", "level": 30},
            {"name": "B", "level": 10}
        ]));

        store.sort_skills_list(SortKey::Level);
        assert_eq!(names(&store), vec!["B", "C", "A"]);
        assert_eq!(store.name_mode(), SortDirection::Ascending);

        store.sort_skills_list(SortKey::Name);
        assert_eq!(names(&store), vec!["A", "B", "C"]);
        assert_eq!(store.level_mode(), SortDirection::Descending);

        store.sort_skills_list(SortKey::Level);
        assert_eq!(names(&store), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_sort_empty_is_noop() {
        let mut store = store_with(json!([]));
        store.sort_skills_list(SortKey::Name);
        store.sort_skills_list(SortKey::Level);
        assert!(store.is_empty());
        assert_eq!(store.name_mode(), SortDirection::Ascending);
        assert_eq!(store.level_mode(), SortDirection::Ascending);
    }

    #[test]
    fn test_sort_ties_keep_relative_order() {
        let mut store = store_with(json!([
            {"name": "X", "level": 50},
            {"name": "Y", "level": 50},
            {"name": "Z", "level": 10}
        ]));
        store.sort_skills_list(SortKey::Level);
        assert_eq!(names(&store), vec!["Z", "X", "Y"]);
        store.sort_skills_list(SortKey::Level);
        assert_eq!(names(&store), vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_generate_markup_for_one_skill() {
        let store = store_with(json!([{"name": "C++", "level": 72}]));
        let fragment = store.generate_skills_list();
        assert_eq!(fragment.len(), 2);

        let dt = &fragment.nodes()[0];
        assert_eq!(dt.tag, "dt");
        assert_eq!(dt.class_attr(), "skill-c++");
        assert_eq!(dt.text_content(), "C++");

        let dd = &fragment.nodes()[1];
        assert_eq!(dd.tag, "dd");
        assert_eq!(dd.class_attr(), "level");
        let bar = &dd.children[0];
        assert_eq!(bar.style("width"), Some("72%"));
        assert_eq!(bar.text_content(), "72%");

        assert_eq!(
            fragment.to_html(),
            "<dt class=\"skill-c++\">C++</dt>\
             <dd class=\"level\"><div style=\"width: 72%;\">72%</div></dd>"
        );
    }

    #[test]
    fn test_generate_empty() {
        let store = SkillsStore::new();
        assert!(store.generate_skills_list().is_empty());
    }

    #[test]
    fn test_generate_is_repeatable() {
        let store = store_with(json!([
            {"name": "Rust", "level": 80},
            {"name": "Go", "level": 60}
        ]));
        let first = store.generate_skills_list();
        let second = store.generate_skills_list();
        assert_eq!(first.rows(), second.rows());
        assert_eq!(first, second);
        assert_eq!(store.len(), 2);
    }
}
