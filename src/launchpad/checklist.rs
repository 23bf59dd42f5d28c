use std::collections::{BTreeSet, HashMap};

use crate::error::{Error, Result};

use super::Entry;

/// Display labels for one listing and the way back from a label to its id.
///
/// Titles are shown as-is unless several entries share one, in which case
/// each of them is shown as `"<title> (#<id>)"`. Labels are therefore unique
/// and every chosen label resolves to exactly one id.
#[derive(Debug, Clone)]
pub struct Checklist {
    labels: Vec<String>,
    ids: HashMap<String, i64>,
}

impl Checklist {
    pub fn new(entries: &[Entry]) -> Self {
        let mut title_counts: HashMap<&str, usize> = HashMap::new();
        for entry in entries {
            *title_counts.entry(entry.title.as_str()).or_default() += 1;
        }

        let mut labels = Vec::with_capacity(entries.len());
        let mut ids = HashMap::with_capacity(entries.len());
        for entry in entries {
            let mut label = if title_counts[entry.title.as_str()] > 1 {
                qualify(&entry.title, entry.id)
            } else {
                entry.title.clone()
            };
            while ids.contains_key(&label) {
                label = qualify(&label, entry.id);
            }
            ids.insert(label.clone(), entry.id);
            labels.push(label);
        }

        Self { labels, ids }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Initial tick state: the first entry starts checked.
    pub fn defaults(&self) -> Vec<bool> {
        (0..self.labels.len()).map(|idx| idx == 0).collect()
    }

    /// Map chosen labels back to entry ids.
    pub fn resolve(&self, chosen: &[String]) -> Result<BTreeSet<i64>> {
        chosen
            .iter()
            .map(|label| {
                self.ids
                    .get(label)
                    .copied()
                    .ok_or_else(|| Error::UnknownSelection {
                        label: label.clone(),
                    })
            })
            .collect()
    }
}

fn qualify(title: &str, id: i64) -> String {
    format!("{title} (#{id})")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(rows: &[(i64, &str)]) -> Vec<Entry> {
        rows.iter().map(|(id, title)| Entry::new(*id, *title)).collect()
    }

    #[test]
    fn unique_titles_are_shown_verbatim() {
        let checklist = Checklist::new(&entries(&[(1, "A"), (2, "B"), (3, "C")]));
        assert_eq!(checklist.labels(), ["A", "B", "C"]);
    }

    #[test]
    fn chosen_titles_resolve_to_their_ids() {
        let checklist = Checklist::new(&entries(&[(1, "A"), (2, "B"), (3, "C")]));
        let ids = checklist
            .resolve(&["A".to_string(), "C".to_string()])
            .unwrap();
        assert_eq!(ids, BTreeSet::from([1, 3]));
    }

    #[test]
    fn duplicate_titles_get_id_qualified_labels() {
        let checklist = Checklist::new(&entries(&[(4, "Notes"), (7, "Notes"), (9, "Maps")]));
        assert_eq!(checklist.labels(), ["Notes (#4)", "Notes (#7)", "Maps"]);

        let ids = checklist.resolve(&["Notes (#7)".to_string()]).unwrap();
        assert_eq!(ids, BTreeSet::from([7]));
    }

    #[test]
    fn qualified_label_never_collides_with_a_real_title() {
        let checklist = Checklist::new(&entries(&[(1, "X"), (2, "X"), (3, "X (#1)")]));
        let labels = checklist.labels();
        assert_eq!(labels[0], "X (#1)");
        assert_eq!(labels[2], "X (#1) (#3)");

        let ids = checklist.resolve(&labels.to_vec()).unwrap();
        assert_eq!(ids, BTreeSet::from([1, 2, 3]));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let checklist = Checklist::new(&entries(&[(1, "A")]));
        let err = checklist
            .resolve(&["Z".to_string()])
            .expect_err("unknown label");
        assert!(matches!(err, Error::UnknownSelection { label } if label == "Z"));
    }

    #[test]
    fn empty_listing_gives_empty_checklist() {
        let checklist = Checklist::new(&[]);
        assert!(checklist.labels().is_empty());
        assert!(checklist.defaults().is_empty());
        assert!(checklist.resolve(&[]).unwrap().is_empty());
    }

    #[test]
    fn only_first_entry_starts_checked() {
        let checklist = Checklist::new(&entries(&[(1, "A"), (2, "B"), (3, "C")]));
        assert_eq!(checklist.defaults(), [true, false, false]);
    }
}
