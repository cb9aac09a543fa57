//! Org hierarchy reconstruction around a selected stakeholder.
//!
//! The chart shows at most two ancestor tiers (the record carries exactly
//! two manager fields), the selected person, and every direct report. All
//! relationships are name references resolved against the full unfiltered
//! record set; category filters never change who reports to whom.

use crate::filtering::find_by_name;
use crate::types::{NodeRole, OrgChartLevel, PersonNode, StakeholderRecord};

/// Title shown for a manager who is named on a record but has no row of
/// their own. Expected for managers above the tracked population.
const FALLBACK_TITLE: &str = "Manager";

/// Build the node list for the selected record: optional skip-level
/// manager, optional immediate manager, the selection itself, then direct
/// reports in source row order.
///
/// Levels are computed from which manager fields are non-empty, not from
/// path length: a named skip-level manager with a blank immediate manager
/// still sits directly above the selection, with no gap node. Cannot fail;
/// a self-referential manager entry just yields a node pointing at itself,
/// since lookups only ever go one tier up and one tier down.
pub fn build_hierarchy(
    selected: &StakeholderRecord,
    all_records: &[StakeholderRecord],
) -> Vec<PersonNode> {
    let mut nodes = Vec::new();
    let mgr1 = selected.first_degree_manager.as_str();
    let mgr2 = selected.second_degree_manager.as_str();

    if !mgr2.is_empty() {
        nodes.push(PersonNode {
            name: mgr2.to_string(),
            title: title_of(all_records, mgr2),
            level: 0,
            role: NodeRole::SkipManager,
        });
    }

    if !mgr1.is_empty() {
        nodes.push(PersonNode {
            name: mgr1.to_string(),
            title: title_of(all_records, mgr1),
            level: usize::from(!mgr2.is_empty()),
            role: NodeRole::Manager,
        });
    }

    let own_level = usize::from(!mgr2.is_empty()) + usize::from(!mgr1.is_empty());
    nodes.push(PersonNode {
        name: selected.client_name.clone(),
        title: selected.designation.clone(),
        level: own_level,
        role: NodeRole::Selected,
    });

    for report in all_records
        .iter()
        .filter(|r| r.first_degree_manager == selected.client_name)
    {
        nodes.push(PersonNode {
            name: report.client_name.clone(),
            title: report.designation.clone(),
            level: own_level + 1,
            role: NodeRole::Report,
        });
    }

    nodes
}

fn title_of(records: &[StakeholderRecord], name: &str) -> String {
    match find_by_name(records, name) {
        Some(r) if !r.designation.is_empty() => r.designation.clone(),
        _ => FALLBACK_TITLE.to_string(),
    }
}

/// Group nodes into rendered tiers, ascending by level. Node order within
/// a tier is emission order (reports keep source row order).
pub fn group_by_level(nodes: Vec<PersonNode>) -> Vec<OrgChartLevel> {
    let mut levels: Vec<OrgChartLevel> = Vec::new();
    for node in nodes {
        match levels.iter_mut().find(|l| l.level == node.level) {
            Some(tier) => tier.nodes.push(node),
            None => levels.push(OrgChartLevel {
                level: node.level,
                nodes: vec![node],
            }),
        }
    }
    levels.sort_by_key(|l| l.level);
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, title: &str, mgr1: &str, mgr2: &str) -> StakeholderRecord {
        StakeholderRecord {
            client_name: name.to_string(),
            designation: title.to_string(),
            first_degree_manager: mgr1.to_string(),
            second_degree_manager: mgr2.to_string(),
            ..Default::default()
        }
    }

    fn selected_node(nodes: &[PersonNode]) -> &PersonNode {
        let selected: Vec<&PersonNode> =
            nodes.iter().filter(|n| n.role == NodeRole::Selected).collect();
        assert_eq!(selected.len(), 1, "exactly one selected node");
        selected[0]
    }

    #[test]
    fn test_lone_record_is_a_single_level_zero_node() {
        let records = vec![record("Ada King", "Director", "", "")];
        let nodes = build_hierarchy(&records[0], &records);

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].level, 0);
        assert_eq!(nodes[0].role, NodeRole::Selected);
        assert_eq!(nodes[0].name, "Ada King");
    }

    #[test]
    fn test_immediate_manager_only() {
        let records = vec![
            record("Jane Doe", "Engineer", "Ada King", ""),
            record("Ada King", "VP", "Mary Lamb", ""),
            record("Mary Lamb", "", "", ""),
        ];
        let nodes = build_hierarchy(&records[0], &records);

        // Only Jane's own manager fields matter; Ada's chain is not walked.
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].name, "Ada King");
        assert_eq!(nodes[0].level, 0);
        assert_eq!(nodes[0].role, NodeRole::Manager);
        assert_eq!(nodes[0].title, "VP");
        assert_eq!(selected_node(&nodes).level, 1);
    }

    #[test]
    fn test_both_managers_present() {
        let records = vec![
            record("Jane Doe", "Engineer", "Ada King", "Mary Lamb"),
            record("Ada King", "VP", "", ""),
        ];
        let nodes = build_hierarchy(&records[0], &records);

        assert_eq!(nodes[0].name, "Mary Lamb");
        assert_eq!(nodes[0].level, 0);
        assert_eq!(nodes[0].role, NodeRole::SkipManager);
        assert_eq!(nodes[1].name, "Ada King");
        assert_eq!(nodes[1].level, 1);
        assert_eq!(selected_node(&nodes).level, 2);
    }

    #[test]
    fn test_skip_manager_without_immediate_manager_leaves_no_gap() {
        let records = vec![record("Jane Doe", "Engineer", "", "Mary Lamb")];
        let nodes = build_hierarchy(&records[0], &records);

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].role, NodeRole::SkipManager);
        assert_eq!(nodes[0].level, 0);
        // The selection sits directly below the skip-level manager.
        assert_eq!(selected_node(&nodes).level, 1);
    }

    #[test]
    fn test_manager_without_own_row_gets_fallback_title() {
        let records = vec![record("Jane Doe", "Engineer", "Ada King", "")];
        let nodes = build_hierarchy(&records[0], &records);
        assert_eq!(nodes[0].title, "Manager");
    }

    #[test]
    fn test_manager_with_blank_designation_gets_fallback_title() {
        let records = vec![
            record("Jane Doe", "Engineer", "Ada King", ""),
            record("Ada King", "", "", ""),
        ];
        let nodes = build_hierarchy(&records[0], &records);
        assert_eq!(nodes[0].title, "Manager");
    }

    #[test]
    fn test_direct_reports_in_source_row_order() {
        let records = vec![
            record("Jane Doe", "VP", "", ""),
            record("Zed Poe", "Engineer", "Jane Doe", ""),
            record("Ann Low", "Analyst", "Jane Doe", ""),
            record("Bob Cox", "Engineer", "Ada King", ""),
        ];
        let nodes = build_hierarchy(&records[0], &records);

        let reports: Vec<&PersonNode> =
            nodes.iter().filter(|n| n.role == NodeRole::Report).collect();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].name, "Zed Poe");
        assert_eq!(reports[1].name, "Ann Low");
        assert!(reports.iter().all(|n| n.level == 1));
    }

    #[test]
    fn test_report_matching_is_exact() {
        let records = vec![
            record("Jane Doe", "VP", "", ""),
            record("Zed Poe", "Engineer", "jane doe", ""),
            record("Ann Low", "Analyst", "Jane Doe ", ""),
        ];
        let nodes = build_hierarchy(&records[0], &records);
        // Case and whitespace differences are distinct people.
        assert!(nodes.iter().all(|n| n.role != NodeRole::Report));
    }

    #[test]
    fn test_self_managed_record_does_not_recurse() {
        let records = vec![record("Jane Doe", "VP", "Jane Doe", "")];
        let nodes = build_hierarchy(&records[0], &records);

        // One ancestor node, the selection, and one report, all Jane.
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].role, NodeRole::Manager);
        assert_eq!(nodes[2].role, NodeRole::Report);
        assert!(nodes.iter().all(|n| n.name == "Jane Doe"));
    }

    #[test]
    fn test_build_hierarchy_is_pure() {
        let records = vec![
            record("Jane Doe", "Engineer", "Ada King", "Mary Lamb"),
            record("Zed Poe", "Engineer", "Jane Doe", ""),
        ];
        let first = build_hierarchy(&records[0], &records);
        let second = build_hierarchy(&records[0], &records);
        assert_eq!(first, second);
    }

    #[test]
    fn test_group_by_level_ascending_tiers() {
        let records = vec![
            record("Jane Doe", "Engineer", "Ada King", "Mary Lamb"),
            record("Zed Poe", "Engineer", "Jane Doe", ""),
            record("Ann Low", "Analyst", "Jane Doe", ""),
        ];
        let levels = group_by_level(build_hierarchy(&records[0], &records));

        assert_eq!(levels.len(), 4);
        assert_eq!(
            levels.iter().map(|l| l.level).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
        assert_eq!(levels[3].nodes.len(), 2);
        assert_eq!(levels[3].nodes[0].name, "Zed Poe");
    }
}
