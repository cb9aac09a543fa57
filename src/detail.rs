//! Detail-panel assembly: the grouped tables the stakeholder screen renders.
//!
//! Sections and field order mirror the tracker template. The webview renders
//! these verbatim; the only formatting decisions (placeholder for empty
//! values, profile links, contractor-count rendering) happen here.

use crate::types::{DetailColumns, DetailField, DetailSection, DetailValue, StakeholderRecord};

/// Build both detail columns for one record.
pub fn detail_columns(record: &StakeholderRecord) -> DetailColumns {
    DetailColumns {
        left: vec![identification_section(record), engagement_section(record)],
        right: vec![
            company_section(record),
            hierarchy_section(record),
            tracking_section(record),
            expertise_section(record),
            contractor_section(record),
        ],
    }
}

fn identification_section(r: &StakeholderRecord) -> DetailSection {
    DetailSection {
        title: "Lead Identification & Contact Details".to_string(),
        fields: vec![
            text_field("Business Group", &r.business_group),
            text_field("Lead Priority", &r.lead_priority),
            text_field("Client Name", &r.client_name),
            text_field("Designation", &r.designation),
            text_field("Location (from teams)", &r.location_teams),
            text_field("Email address", &r.email_address),
            text_field("LinkedIn URL", &r.linkedin_url),
        ],
    }
}

fn engagement_section(r: &StakeholderRecord) -> DetailSection {
    DetailSection {
        title: "Engagement & Outreach Strategy".to_string(),
        fields: vec![
            text_field(
                "Scope of work/Priorities (internal research)",
                &r.scope_of_work,
            ),
            text_field("Additional Research (External)", &r.additional_research),
            text_field("LinkedIn Connects", &r.linkedin_connects),
            text_field("Introduction Path", &r.introduction_path),
            text_field("Pursured in past", &r.pursued_in_past),
            text_field("Relationship Strength", &r.relationship_strength),
            text_field("Lead Potential ESS", &r.lead_potential_ess),
            text_field("Lead Potential DAC", &r.lead_potential_dac),
            text_field("If Yes, background/context ?", &r.background_context),
            text_field("Comments", &r.comments),
        ],
    }
}

fn company_section(r: &StakeholderRecord) -> DetailSection {
    DetailSection {
        title: "Company & Department Info".to_string(),
        fields: vec![
            text_field("Business Segment", &r.business_segment),
            text_field("Working Group", &r.working_group),
            text_field("Business Functions", &r.business_functions),
        ],
    }
}

fn hierarchy_section(r: &StakeholderRecord) -> DetailSection {
    DetailSection {
        title: "Organizational Hierarchy".to_string(),
        fields: vec![
            text_field("1st Degree Manager", &r.first_degree_manager),
            text_field("2nd Degree Manager", &r.second_degree_manager),
        ],
    }
}

fn tracking_section(r: &StakeholderRecord) -> DetailSection {
    DetailSection {
        title: "Lead Status & Tracking".to_string(),
        fields: vec![
            text_field("Who will reach out ?", &r.who_will_reach_out),
            text_field(
                "Lever for Reach out(s) ready (Cold email/LinkedIn Message/Demos/PoVs etc.) ?",
                &r.outreach_levers,
            ),
            text_field("Lead Status", &r.lead_status),
        ],
    }
}

fn expertise_section(r: &StakeholderRecord) -> DetailSection {
    DetailSection {
        title: "Expertise & Experience".to_string(),
        fields: vec![
            text_field("Designation Seniority", &r.designation_seniority),
            text_field("Location (From LinkedIn)", &r.location_linkedin),
        ],
    }
}

fn contractor_section(r: &StakeholderRecord) -> DetailSection {
    DetailSection {
        title: "Contractor Information".to_string(),
        fields: vec![
            count_field("Contractor count", r.contractor_count),
            text_field("Vendor Company Name", &r.vendor_company_name),
        ],
    }
}

fn text_field(label: &str, value: &str) -> DetailField {
    DetailField {
        label: label.to_string(),
        value: format_value(label, value),
    }
}

fn count_field(label: &str, value: Option<f64>) -> DetailField {
    let value = match value {
        Some(n) => DetailValue::Text {
            text: format_count(n),
        },
        None => DetailValue::Empty,
    };
    DetailField {
        label: label.to_string(),
        value,
    }
}

/// Empty values render as a placeholder; a value in a LinkedIn-labelled
/// field that carries a profile URL becomes a link with a compact label.
fn format_value(label: &str, value: &str) -> DetailValue {
    if value.is_empty() {
        return DetailValue::Empty;
    }
    if label.to_lowercase().contains("linkedin") && value.contains("linkedin.com") {
        return DetailValue::Link {
            href: value.to_string(),
            label: linkedin_label(value),
        };
    }
    DetailValue::Text {
        text: value.to_string(),
    }
}

/// `https://www.linkedin.com/in/jane-doe` → `linkedin/jane-doe`; a URL with
/// no usable last segment falls back to the full value.
fn linkedin_label(url: &str) -> String {
    match url.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => format!("linkedin/{}", segment),
        _ => format!("linkedin/{}", url),
    }
}

/// Whole counts render without a trailing `.0`.
fn format_count(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
