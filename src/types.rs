//! Record model and IPC payload types shared with the webview.

use serde::Serialize;

/// One decoded row of the stakeholder tracker.
///
/// Every field besides the client name is optional in the source sheet;
/// absence is display-equivalent to empty, so string fields default to `""`
/// at the ingestion boundary rather than carrying `Option` through every
/// consumer. The client name is the lookup key within a sheet; rows where
/// it is blank are excluded from filtering and selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderRecord {
    pub client_name: String,
    pub designation: String,
    pub business_group: String,
    pub working_group: String,
    pub business_functions: String,
    /// Immediate manager, referenced by name (exact string equality, no
    /// normalization: names differing only in case are distinct people).
    pub first_degree_manager: String,
    /// Skip-level manager, referenced by name.
    pub second_degree_manager: String,
    pub email_address: String,
    pub linkedin_url: String,
    pub location_teams: String,
    pub location_linkedin: String,
    pub lead_priority: String,
    pub business_segment: String,
    pub designation_seniority: String,
    pub contractor_count: Option<f64>,
    pub vendor_company_name: String,
    pub scope_of_work: String,
    pub additional_research: String,
    pub linkedin_connects: String,
    pub introduction_path: String,
    pub pursued_in_past: String,
    pub relationship_strength: String,
    pub lead_potential_ess: String,
    pub lead_potential_dac: String,
    pub background_context: String,
    pub comments: String,
    pub who_will_reach_out: String,
    pub outreach_levers: String,
    pub lead_status: String,
}

/// Role of a node relative to the selected stakeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeRole {
    /// 2nd-degree (skip-level) manager
    SkipManager,
    /// 1st-degree manager
    Manager,
    Selected,
    /// Direct report of the selected stakeholder
    Report,
}

/// One person at one hierarchy level. Ephemeral: built per view, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonNode {
    pub name: String,
    pub title: String,
    /// 0 = topmost shown ancestor.
    pub level: usize,
    pub role: NodeRole,
}

/// One rendered tier of the org chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgChartLevel {
    pub level: usize,
    pub nodes: Vec<PersonNode>,
}

/// A single cell of a detail table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DetailValue {
    Text { text: String },
    Link { href: String, label: String },
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailField {
    pub label: String,
    pub value: DetailValue,
}

/// A titled group of detail fields ("Lead Identification & Contact
/// Details", "Contractor Information", ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailSection {
    pub title: String,
    pub fields: Vec<DetailField>,
}

/// Detail sections split the way the stakeholder screen lays them out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailColumns {
    pub left: Vec<DetailSection>,
    pub right: Vec<DetailSection>,
}

/// Result of a workbook upload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbookLoaded {
    pub file_name: String,
    pub sheet_names: Vec<String>,
    /// Records decoded so far. Single-sheet workbooks load immediately,
    /// multi-sheet workbooks defer until a sheet is chosen.
    pub record_count: usize,
    pub auto_loaded: bool,
    pub generation: u64,
}

/// Result of an explicit sheet selection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetLoaded {
    pub sheet_name: String,
    pub record_count: usize,
    pub generation: u64,
}

/// Everything the stakeholder screen renders for the current filter and
/// selection state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderView {
    pub working_groups: Vec<String>,
    pub business_functions: Vec<String>,
    pub stakeholder_names: Vec<String>,
    pub filtered_count: usize,
    /// Absent when no stakeholder is selected or the selection fell outside
    /// the filtered set; the panel simply does not render.
    pub stakeholder: Option<StakeholderPanel>,
    pub generation: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderPanel {
    pub org_chart: Vec<OrgChartLevel>,
    pub detail: DetailColumns,
}
