use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Employment type of a posting.
///
/// Stored as a raw TEXT code. Codes outside the known five are kept verbatim in
/// `Other` so they survive a read/serialize cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Temporary,
    Internship,
    Other(String),
}

impl JobType {
    pub const KNOWN: [JobType; 5] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Temporary,
        JobType::Internship,
    ];

    pub fn from_code(code: &str) -> Self {
        match code {
            "FULL_TIME" => JobType::FullTime,
            "PART_TIME" => JobType::PartTime,
            "CONTRACT" => JobType::Contract,
            "TEMPORARY" => JobType::Temporary,
            "INTERNSHIP" => JobType::Internship,
            other => JobType::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            JobType::FullTime => "FULL_TIME",
            JobType::PartTime => "PART_TIME",
            JobType::Contract => "CONTRACT",
            JobType::Temporary => "TEMPORARY",
            JobType::Internship => "INTERNSHIP",
            JobType::Other(code) => code,
        }
    }

    /// Human label shown on job cards. Unknown codes pass through unchanged.
    pub fn display_label(&self) -> &str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Temporary => "Temporary",
            JobType::Internship => "Internship",
            JobType::Other(code) => code,
        }
    }

    /// Label used by the search filter dropdown: `FULL_TIME` → `Full Time`.
    pub fn filter_label(&self) -> String {
        self.code()
            .split('_')
            .filter(|w| !w.is_empty())
            .map(|w| {
                let lower = w.to_lowercase();
                let mut c = lower.chars();
                match c.next() {
                    None => String::new(),
                    Some(f) => f.to_uppercase().to_string() + c.as_str(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<String> for JobType {
    fn from(code: String) -> Self {
        JobType::from_code(&code)
    }
}

impl From<JobType> for String {
    fn from(job_type: JobType) -> Self {
        job_type.code().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Active,
    Draft,
    Closed,
    Filled,
    Other(String),
}

impl JobStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "ACTIVE" => JobStatus::Active,
            "DRAFT" => JobStatus::Draft,
            "CLOSED" => JobStatus::Closed,
            "FILLED" => JobStatus::Filled,
            other => JobStatus::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            JobStatus::Active => "ACTIVE",
            JobStatus::Draft => "DRAFT",
            JobStatus::Closed => "CLOSED",
            JobStatus::Filled => "FILLED",
            JobStatus::Other(code) => code,
        }
    }
}

impl From<String> for JobStatus {
    fn from(code: String) -> Self {
        JobStatus::from_code(&code)
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        status.code().to_string()
    }
}

/// Salary range. Both bounds are optional; a posting may advertise only a floor.
/// Bounds are kept as stored, fractional amounts included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub currency: Option<String>,
}

impl Salary {
    /// Decodes the JSONB `salary` column. Anything that is not an object with at
    /// least one numeric bound or a currency yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let salary = Salary {
            min: obj.get("min").and_then(Value::as_f64),
            max: obj.get("max").and_then(Value::as_f64),
            currency: obj
                .get("currency")
                .and_then(Value::as_str)
                .map(str::to_string),
        };
        if salary.min.is_none() && salary.max.is_none() && salary.currency.is_none() {
            return None;
        }
        Some(salary)
    }

    /// Upper bound used by range filters; falls back to `min` for floor-only salaries.
    pub fn effective_max(&self) -> Option<f64> {
        self.max.or(self.min)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    pub id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
}

/// A job posting with its company embedded, as read from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub skills: Vec<String>,
    pub salary: Option<Salary>,
    pub status: JobStatus,
    pub company_id: Uuid,
    pub company: CompanySummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A posting decorated with the display fields the job cards read.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    #[serde(flatten)]
    pub job: JobPosting,
    pub job_type: String,
    pub company_name: String,
    pub company_logo: Option<String>,
}

impl From<JobPosting> for JobListing {
    fn from(job: JobPosting) -> Self {
        JobListing {
            job_type: job.job_type.display_label().to_string(),
            company_name: job.company.name.clone(),
            company_logo: job.company.logo_url.clone(),
            job,
        }
    }
}

/// Flat row produced by the `jobs JOIN companies` queries.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub job_type: String,
    pub skills: Vec<String>,
    pub salary: Option<Value>,
    pub status: String,
    pub company_id: Uuid,
    pub company_name: String,
    pub company_logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobRow> for JobPosting {
    fn from(row: JobRow) -> Self {
        JobPosting {
            id: row.id,
            title: row.title,
            description: row.description,
            location: row.location,
            job_type: JobType::from_code(&row.job_type),
            skills: row.skills,
            salary: row.salary.as_ref().and_then(Salary::from_json),
            status: JobStatus::from_code(&row.status),
            company_id: row.company_id,
            company: CompanySummary {
                id: row.company_id,
                name: row.company_name,
                logo_url: row.company_logo_url,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Location and skills of one active posting, used to build search facets.
#[derive(Debug, Clone, FromRow)]
pub struct JobFacetRow {
    pub location: String,
    pub skills: Vec<String>,
}
