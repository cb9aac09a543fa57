//! Workbook ingestion: wraps calamine behind the viewer's session model.
//!
//! A `WorkbookSession` is created from the uploaded file's bytes, holds the
//! parsed container plus the decoded records of the active sheet, and is
//! replaced wholesale on the next successful upload. Single-sheet workbooks
//! decode immediately; multi-sheet workbooks defer until the user picks a
//! sheet.

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};

use crate::error::WorkbookError;
use crate::types::StakeholderRecord;

/// Column headers of the stakeholder tracker template, matched verbatim
/// against the sheet's first row. Rows are keyed by header, not position,
/// so column order in the sheet does not matter.
pub mod headers {
    pub const CLIENT_NAME: &str = "Client Name";
    pub const DESIGNATION: &str = "Designation";
    pub const BUSINESS_GROUP: &str = "Business Group";
    pub const WORKING_GROUP: &str = "Working Group";
    pub const BUSINESS_FUNCTIONS: &str = "Business Functions";
    pub const FIRST_DEGREE_MANAGER: &str = "1st degree Manager";
    pub const SECOND_DEGREE_MANAGER: &str = "2nd Degree Manager";
    pub const EMAIL_ADDRESS: &str = "Email address";
    pub const LINKEDIN_URL: &str = "LinkedIn URL";
    pub const LOCATION_TEAMS: &str = "Location (from teams)";
    pub const LOCATION_LINKEDIN: &str = "Location (from LinkedIn)";
    pub const LEAD_PRIORITY: &str = "Lead Priority";
    pub const BUSINESS_SEGMENT: &str = "Business Segment";
    pub const DESIGNATION_SENIORITY: &str = "Designation Seniority";
    pub const CONTRACTOR_COUNT: &str = "Contractor Count";
    pub const VENDOR_COMPANY_NAME: &str = "Vendor CompanyName";
    pub const SCOPE_OF_WORK: &str = "Scope of work/Priorities (internal research)";
    pub const ADDITIONAL_RESEARCH: &str = "Additional Research (External)";
    pub const LINKEDIN_CONNECTS: &str = "LinkedIn Connects";
    pub const INTRODUCTION_PATH: &str = "Introduction Path";
    // Header typo is canonical; it is what the tracker template ships with.
    pub const PURSUED_IN_PAST: &str = "Pursured in past";
    pub const RELATIONSHIP_STRENGTH: &str = "Relationship Strength";
    pub const LEAD_POTENTIAL_ESS: &str = "Lead Potential ESS (func. Of designation & Vendor Count)";
    pub const LEAD_POTENTIAL_DAC: &str = "Lead Potential DAC (func. Of designation & Vendor Count)";
    pub const BACKGROUND_CONTEXT: &str = "If Yes, background/context ?";
    pub const COMMENTS: &str = "Comments";
    pub const WHO_WILL_REACH_OUT: &str = "Who will reach out ?";
    pub const OUTREACH_LEVERS: &str =
        "Lever for Reach out(s) ready (Cold email/LinkedIn Message/Demos/PoVs etc.) ?";
    pub const LEAD_STATUS: &str = "Lead Status";
}

/// The one active workbook of a session. Replaced wholesale on the next
/// successful upload, never partially mutated.
pub struct WorkbookSession {
    pub file_name: String,
    workbook: Xlsx<Cursor<Vec<u8>>>,
    pub sheet_names: Vec<String>,
    pub active_sheet: Option<String>,
    pub records: Vec<StakeholderRecord>,
    /// Load token assigned by `AppState::begin_load`; newest wins.
    pub generation: u64,
}

impl WorkbookSession {
    /// Parse an uploaded workbook.
    ///
    /// The file name gates the format (`.xlsx` only); container parse
    /// failures surface as `DecodeError`. With exactly one sheet the
    /// records are decoded immediately.
    pub fn from_bytes(
        file_name: &str,
        bytes: Vec<u8>,
        generation: u64,
    ) -> Result<Self, WorkbookError> {
        let ext = extension_of(file_name);
        if ext != "xlsx" {
            return Err(WorkbookError::UnsupportedFormat(ext));
        }

        let workbook = Xlsx::new(Cursor::new(bytes))
            .map_err(|e| WorkbookError::DecodeError(e.to_string()))?;

        let mut session = Self {
            file_name: file_name.to_string(),
            sheet_names: workbook.sheet_names().to_vec(),
            workbook,
            active_sheet: None,
            records: Vec::new(),
            generation,
        };

        if session.sheet_names.len() == 1 {
            let only = session.sheet_names[0].clone();
            session.load_sheet(&only)?;
        }

        Ok(session)
    }

    /// Decode the named sheet and make it the active record set.
    pub fn load_sheet(&mut self, name: &str) -> Result<&[StakeholderRecord], WorkbookError> {
        if !self.sheet_names.iter().any(|s| s == name) {
            return Err(WorkbookError::SheetNotFound(name.to_string()));
        }

        let range = self
            .workbook
            .worksheet_range(name)
            .map_err(|e| WorkbookError::DecodeError(e.to_string()))?;

        self.records = records_from_range(&range);
        self.active_sheet = Some(name.to_string());
        Ok(&self.records)
    }
}

/// Decode a sheet range into records. The first row is the header row;
/// unknown headers are ignored and missing headers yield empty fields.
pub fn records_from_range(range: &Range<Data>) -> Vec<StakeholderRecord> {
    let mut rows = range.rows();
    let header_row = match rows.next() {
        Some(row) => row,
        None => return Vec::new(),
    };
    let columns = HeaderMap::from_row(header_row);
    rows.map(|row| columns.record_from_row(row)).collect()
}

/// Header name → column index for one sheet, built once per decode.
struct HeaderMap {
    index: HashMap<String, usize>,
}

impl HeaderMap {
    fn from_row(row: &[Data]) -> Self {
        let index = row
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| {
                let header = cell_to_string(cell);
                if header.is_empty() {
                    None
                } else {
                    Some((header, i))
                }
            })
            .collect();
        Self { index }
    }

    fn text(&self, row: &[Data], header: &str) -> String {
        self.index
            .get(header)
            .and_then(|&i| row.get(i))
            .map(cell_to_string)
            .unwrap_or_default()
    }

    fn number(&self, row: &[Data], header: &str) -> Option<f64> {
        self.index
            .get(header)
            .and_then(|&i| row.get(i))
            .and_then(cell_to_number)
    }

    fn record_from_row(&self, row: &[Data]) -> StakeholderRecord {
        StakeholderRecord {
            client_name: self.text(row, headers::CLIENT_NAME),
            designation: self.text(row, headers::DESIGNATION),
            business_group: self.text(row, headers::BUSINESS_GROUP),
            working_group: self.text(row, headers::WORKING_GROUP),
            business_functions: self.text(row, headers::BUSINESS_FUNCTIONS),
            first_degree_manager: self.text(row, headers::FIRST_DEGREE_MANAGER),
            second_degree_manager: self.text(row, headers::SECOND_DEGREE_MANAGER),
            email_address: self.text(row, headers::EMAIL_ADDRESS),
            linkedin_url: self.text(row, headers::LINKEDIN_URL),
            location_teams: self.text(row, headers::LOCATION_TEAMS),
            location_linkedin: self.text(row, headers::LOCATION_LINKEDIN),
            lead_priority: self.text(row, headers::LEAD_PRIORITY),
            business_segment: self.text(row, headers::BUSINESS_SEGMENT),
            designation_seniority: self.text(row, headers::DESIGNATION_SENIORITY),
            contractor_count: self.number(row, headers::CONTRACTOR_COUNT),
            vendor_company_name: self.text(row, headers::VENDOR_COMPANY_NAME),
            scope_of_work: self.text(row, headers::SCOPE_OF_WORK),
            additional_research: self.text(row, headers::ADDITIONAL_RESEARCH),
            linkedin_connects: self.text(row, headers::LINKEDIN_CONNECTS),
            introduction_path: self.text(row, headers::INTRODUCTION_PATH),
            pursued_in_past: self.text(row, headers::PURSUED_IN_PAST),
            relationship_strength: self.text(row, headers::RELATIONSHIP_STRENGTH),
            lead_potential_ess: self.text(row, headers::LEAD_POTENTIAL_ESS),
            lead_potential_dac: self.text(row, headers::LEAD_POTENTIAL_DAC),
            background_context: self.text(row, headers::BACKGROUND_CONTEXT),
            comments: self.text(row, headers::COMMENTS),
            who_will_reach_out: self.text(row, headers::WHO_WILL_REACH_OUT),
            outreach_levers: self.text(row, headers::OUTREACH_LEVERS),
            lead_status: self.text(row, headers::LEAD_STATUS),
        }
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) => format!("{}", f),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERR({:?})", e),
        Data::DateTime(dt) => format!("{}", dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

fn cell_to_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(n) => Some(*n as f64),
        Data::Float(f) => Some(*f),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn extension_of(file_name: &str) -> String {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}
