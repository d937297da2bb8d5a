use serde::{Deserialize, Serialize};

use crate::domain::JobType;

/// Inclusive salary bounds for one job type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

impl SalaryRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Salary expectations by job type; contract rates are hourly, the rest
/// annual, which is why the rows differ by three orders of magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRangeTable {
    pub full_time: SalaryRange,
    pub part_time: SalaryRange,
    pub contract: SalaryRange,
}

impl SalaryRangeTable {
    pub fn for_job_type(&self, job_type: JobType) -> SalaryRange {
        match job_type {
            JobType::FullTime => self.full_time,
            JobType::PartTime => self.part_time,
            JobType::Contract => self.contract,
        }
    }
}

/// Static configuration injected into the validation engine: the
/// enumerations the form offers and the limits the schemas enforce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationConfig {
    pub departments: Vec<String>,
    pub relationships: Vec<String>,
    pub salary_ranges: SalaryRangeTable,
    pub minimum_age_years: i32,
    pub start_date_window_days: i64,
    pub max_image_bytes: u64,
    pub accepted_image_types: Vec<String>,
    pub minimum_primary_skills: usize,
    pub max_experience_years: f32,
    pub max_notes_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            departments: ["Engineering", "Marketing", "Sales", "HR", "Finance"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            relationships: ["Parent", "Sibling", "Spouse", "Partner", "Friend", "Other"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            salary_ranges: SalaryRangeTable {
                full_time: SalaryRange {
                    min: 30_000.0,
                    max: 200_000.0,
                },
                part_time: SalaryRange {
                    min: 30_000.0,
                    max: 200_000.0,
                },
                contract: SalaryRange {
                    min: 50.0,
                    max: 150.0,
                },
            },
            minimum_age_years: 18,
            start_date_window_days: 90,
            max_image_bytes: 2 * 1024 * 1024,
            accepted_image_types: vec![
                mime::IMAGE_JPEG.essence_str().to_string(),
                mime::IMAGE_PNG.essence_str().to_string(),
            ],
            minimum_primary_skills: 3,
            max_experience_years: 20.0,
            max_notes_chars: 500,
        }
    }
}
