//! Pure filtering and selection over a decoded record set.
//!
//! Everything here is a function of the records and the current filter
//! choices: no state, no side effects. The command layer composes these
//! into the view payload.

use crate::types::StakeholderRecord;

/// Sentinel filter value meaning "no restriction".
pub const ALL: &str = "All";

/// Distinct non-empty values of one categorical field, sorted ascending.
/// Populates the working-group and business-function dropdowns, always over
/// the full record set.
pub fn distinct_values<F>(records: &[StakeholderRecord], field: F) -> Vec<String>
where
    F: Fn(&StakeholderRecord) -> &str,
{
    let mut values: Vec<String> = records
        .iter()
        .map(|r| field(r))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    values.sort();
    values.dedup();
    values
}

/// Records matching the current categorical filters, in source row order.
///
/// Starts from rows with a non-empty client name; each filter applies only
/// when it is not the [`ALL`] sentinel, and both are conjunctive.
pub fn apply_filters<'a>(
    records: &'a [StakeholderRecord],
    working_group: &str,
    business_function: &str,
) -> Vec<&'a StakeholderRecord> {
    records
        .iter()
        .filter(|r| !r.client_name.is_empty())
        .filter(|r| working_group == ALL || r.working_group == working_group)
        .filter(|r| business_function == ALL || r.business_functions == business_function)
        .collect()
}

/// Distinct client names within the filtered set, sorted ascending.
pub fn distinct_person_names(filtered: &[&StakeholderRecord]) -> Vec<String> {
    let mut names: Vec<String> = filtered
        .iter()
        .map(|r| r.client_name.as_str())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect();
    names.sort();
    names.dedup();
    names
}

/// First record whose client name equals `name` exactly (case-sensitive,
/// no trimming). Non-empty names act as unique keys; with duplicates the
/// first row wins.
pub fn find_by_name<'a, I>(records: I, name: &str) -> Option<&'a StakeholderRecord>
where
    I: IntoIterator<Item = &'a StakeholderRecord>,
{
    records.into_iter().find(|r| r.client_name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, group: &str, function: &str) -> StakeholderRecord {
        StakeholderRecord {
            client_name: name.to_string(),
            working_group: group.to_string(),
            business_functions: function.to_string(),
            ..Default::default()
        }
    }

    fn roster() -> Vec<StakeholderRecord> {
        vec![
            record("Jane Doe", "Data Platform", "Engineering"),
            record("John Roe", "Data Platform", "Finance"),
            record("Ada King", "Commerce", "Engineering"),
            record("", "Commerce", "Engineering"), // malformed row, no name
            record("Jane Doe", "Commerce", "Finance"), // duplicate name, later row
        ]
    }

    #[test]
    fn test_distinct_values_sorted_deduped_no_empties() {
        let records = vec![
            record("A", "Zeta", ""),
            record("B", "Alpha", ""),
            record("C", "Zeta", ""),
            record("D", "", ""),
        ];
        let groups = distinct_values(&records, |r| &r.working_group);
        assert_eq!(groups, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_apply_filters_all_sentinel_keeps_named_rows() {
        let records = roster();
        let filtered = apply_filters(&records, ALL, ALL);
        // The blank-name row is excluded, everything else kept in row order.
        assert_eq!(filtered.len(), 4);
        assert_eq!(filtered[0].client_name, "Jane Doe");
        assert_eq!(filtered[3].working_group, "Commerce");
    }

    #[test]
    fn test_apply_filters_is_conjunctive() {
        let records = roster();
        let filtered = apply_filters(&records, "Data Platform", "Finance");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].client_name, "John Roe");
    }

    #[test]
    fn test_apply_filters_narrowing_never_grows() {
        let records = roster();
        let all = apply_filters(&records, ALL, ALL);
        let by_group = apply_filters(&records, "Commerce", ALL);
        let by_both = apply_filters(&records, "Commerce", "Finance");
        assert!(by_group.len() <= all.len());
        assert!(by_both.len() <= by_group.len());
    }

    #[test]
    fn test_apply_filters_exact_match_only() {
        let records = roster();
        // No case folding, no trimming: "commerce" matches nothing.
        assert!(apply_filters(&records, "commerce", ALL).is_empty());
    }

    #[test]
    fn test_distinct_person_names_dedupes_duplicates() {
        let records = roster();
        let filtered = apply_filters(&records, ALL, ALL);
        let names = distinct_person_names(&filtered);
        assert_eq!(names, vec!["Ada King", "Jane Doe", "John Roe"]);
    }

    #[test]
    fn test_find_by_name_first_match_wins() {
        let records = roster();
        let found = find_by_name(&records, "Jane Doe").unwrap();
        assert_eq!(found.working_group, "Data Platform");
    }

    #[test]
    fn test_find_by_name_absent_selection() {
        let records = roster();
        let filtered = apply_filters(&records, "Commerce", ALL);
        // "John Roe" fell outside the narrowed set. Absent, not an error.
        assert!(find_by_name(filtered.iter().copied(), "John Roe").is_none());
    }
}
