use serde::{Deserialize, Serialize};

use crate::domain::model::{Department, Staff};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, RosterError};

pub const FORMAT_VERSION: &str = "0.1";

/// The one aggregate of the tool: owns both entity collections and is the
/// only place the department/staff cross-reference is enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    version: String,
    departments: Vec<Department>,
    staffs: Vec<Staff>,
}

impl Default for Company {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            departments: Vec::new(),
            staffs: Vec::new(),
        }
    }
}

impl Company {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn staffs(&self) -> &[Staff] {
        &self.staffs
    }

    /// Name substring match, or exact match on the decimal code string.
    /// Empty text matches everything.
    pub fn get_departments(&self, search_text: &str) -> Vec<&Department> {
        self.departments
            .iter()
            .filter(|d| d.name().contains(search_text) || d.code().to_string() == search_text)
            .collect()
    }

    /// Staff name substring, exact staff number string, or a match on the
    /// referenced department (name substring or exact code string).
    pub fn get_staffs(&self, search_text: &str) -> Vec<&Staff> {
        self.staffs
            .iter()
            .filter(|s| {
                s.name().contains(search_text)
                    || s.number().to_string() == search_text
                    || s.department().name().contains(search_text)
                    || s.department().code().to_string() == search_text
            })
            .collect()
    }

    pub fn department_by_code(&self, code: i32) -> Option<&Department> {
        self.departments.iter().find(|d| d.code() == code)
    }

    pub fn staff_by_number(&self, number: i32) -> Option<&Staff> {
        self.staffs.iter().find(|s| s.number() == number)
    }

    /// Appends. Code uniqueness is the caller's contract (wizard rules
    /// check it before construction).
    pub fn add_department(&mut self, department: Department) {
        tracing::debug!(code = department.code(), "department added");
        self.departments.push(department);
    }

    /// Refuses (false) while any staff references the code.
    pub fn remove_department(&mut self, code: i32) -> bool {
        if self.staffs.iter().any(|s| s.department().code() == code) {
            tracing::debug!(code, "department removal refused: still referenced");
            return false;
        }
        let before = self.departments.len();
        self.departments.retain(|d| d.code() != code);
        self.departments.len() < before
    }

    pub fn add_staff(&mut self, staff: Staff) {
        tracing::debug!(number = staff.number(), "staff added");
        self.staffs.push(staff);
    }

    pub fn remove_staff(&mut self, number: i32) -> bool {
        let before = self.staffs.len();
        self.staffs.retain(|s| s.number() != number);
        self.staffs.len() < before
    }

    /// Wire view: staff hold their department by code only.
    pub fn to_snapshot(&self) -> CompanySnapshot {
        CompanySnapshot {
            version: self.version.clone(),
            departments: self
                .departments
                .iter()
                .map(|d| DepartmentRecord {
                    code: d.code(),
                    name: d.name().to_string(),
                })
                .collect(),
            staffs: self
                .staffs
                .iter()
                .map(|s| StaffRecord {
                    number: s.number(),
                    name: s.name().to_string(),
                    ruby: s.ruby().to_string(),
                    department_code: s.department().code(),
                })
                .collect(),
        }
    }

    /// Rebuilds the aggregate, resolving every stored department code back
    /// into a live department. An unresolvable code is a load failure, not
    /// a record to drop.
    pub fn from_snapshot(snapshot: CompanySnapshot) -> Result<Self> {
        let mut company = Company {
            version: snapshot.version,
            departments: Vec::with_capacity(snapshot.departments.len()),
            staffs: Vec::with_capacity(snapshot.staffs.len()),
        };
        for record in snapshot.departments {
            company
                .departments
                .push(Department::new(record.code, record.name)?);
        }
        for record in snapshot.staffs {
            let department = company
                .department_by_code(record.department_code)
                .cloned()
                .ok_or(RosterError::UnknownDepartmentCode {
                    number: record.number,
                    code: record.department_code,
                })?;
            company
                .staffs
                .push(Staff::new(record.number, record.name, record.ruby, department)?);
        }
        Ok(company)
    }

    pub fn save(&self, storage: &dyn Storage, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.to_snapshot())?;
        storage.write(path, json.as_bytes())?;
        tracing::info!(
            path,
            departments = self.departments.len(),
            staffs = self.staffs.len(),
            "company saved"
        );
        Ok(())
    }

    /// A missing file is the one sanctioned default-to-empty case; every
    /// other failure propagates.
    pub fn load(storage: &dyn Storage, path: &str) -> Result<Self> {
        if !storage.exists(path) {
            tracing::info!(path, "no data file, starting empty");
            return Ok(Company::new());
        }
        let bytes = storage.read(path)?;
        let snapshot: CompanySnapshot = serde_json::from_slice(&bytes)?;
        let company = Company::from_snapshot(snapshot)?;
        tracing::info!(
            path,
            departments = company.departments.len(),
            staffs = company.staffs.len(),
            "company loaded"
        );
        Ok(company)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySnapshot {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "SerializableDepartmentList")]
    pub departments: Vec<DepartmentRecord>,
    #[serde(rename = "SerializableStaffList")]
    pub staffs: Vec<StaffRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentRecord {
    #[serde(rename = "Code")]
    pub code: i32,
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffRecord {
    #[serde(rename = "Number")]
    pub number: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Ruby")]
    pub ruby: String,
    #[serde(rename = "DepartmentCode")]
    pub department_code: i32,
}
