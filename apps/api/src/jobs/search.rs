//! In-memory stages of job browsing: salary filtering, pagination, facets and
//! the skills directory. The catalog handles everything it can express in SQL.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::models::job::{JobFacetRow, JobPosting, JobType, Salary};

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const MAX_PAGE_LIMIT: i64 = 100;
pub const TOP_SKILLS: usize = 20;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: usize,
    pub pages: usize,
    pub current_page: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JobTypeOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub job_types: Vec<JobTypeOption>,
    pub skills: Vec<String>,
}

/// Salary bound check.
///
/// A posting with no floor fails any `min` bound; a posting with no ceiling is
/// compared on its floor.
pub fn salary_in_range(salary: Option<&Salary>, min: Option<i64>, max: Option<i64>) -> bool {
    let job_min = salary.and_then(|s| s.min);
    let job_max = salary.and_then(Salary::effective_max);

    let min_ok = min.map_or(true, |bound| job_min.is_some_and(|m| m >= bound as f64));
    let max_ok = max.map_or(true, |bound| job_max.is_some_and(|m| m <= bound as f64));
    min_ok && max_ok
}

pub fn filter_by_salary(
    jobs: Vec<JobPosting>,
    min: Option<i64>,
    max: Option<i64>,
) -> Vec<JobPosting> {
    if min.is_none() && max.is_none() {
        return jobs;
    }
    jobs.into_iter()
        .filter(|j| salary_in_range(j.salary.as_ref(), min, max))
        .collect()
}

/// Slices one page out of `items`. `page` and `limit` are clamped to sane values.
pub fn paginate<T>(items: Vec<T>, page: Option<i64>, limit: Option<i64>) -> (Vec<T>, Pagination) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);

    let total = items.len();
    let limit_us = limit as usize;
    let pages = total.div_ceil(limit_us);
    let start = ((page - 1) as usize).saturating_mul(limit_us);

    let page_items: Vec<T> = items.into_iter().skip(start).take(limit_us).collect();

    (
        page_items,
        Pagination {
            total,
            pages,
            current_page: page,
        },
    )
}

pub fn build_filter_options(rows: &[JobFacetRow]) -> FilterOptions {
    let locations: BTreeSet<&str> = rows
        .iter()
        .map(|r| r.location.as_str())
        .filter(|l| !l.trim().is_empty())
        .collect();

    let job_types = JobType::KNOWN
        .iter()
        .map(|t| JobTypeOption {
            value: t.code().to_string(),
            label: t.filter_label(),
        })
        .collect();

    FilterOptions {
        locations: locations.into_iter().map(str::to_string).collect(),
        job_types,
        skills: top_skills(rows, TOP_SKILLS),
    }
}

/// Most frequent skills, ties kept in first-seen order.
fn top_skills(rows: &[JobFacetRow], n: usize) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for skill in rows.iter().flat_map(|r| r.skills.iter()) {
        match index.get(skill.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(skill.as_str(), counts.len());
                counts.push((skill.as_str(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(n)
        .map(|(s, _)| s.to_string())
        .collect()
}

/// Union of skill lists, deduplicated and sorted case-insensitively, optionally
/// narrowed by a case-insensitive substring. The query is not trimmed; only an
/// empty query means no filter.
pub fn skill_directory(lists: &[Vec<String>], query: Option<&str>) -> Vec<String> {
    let unique: BTreeSet<&str> = lists
        .iter()
        .flatten()
        .map(String::as_str)
        .filter(|s| !s.trim().is_empty())
        .collect();

    let needle = query.filter(|q| !q.is_empty()).map(str::to_lowercase);

    let mut skills: Vec<String> = unique
        .into_iter()
        .filter(|s| needle.as_ref().map_or(true, |q| s.to_lowercase().contains(q)))
        .map(str::to_string)
        .collect();
    skills.sort_by(|a, b| compare_skill_names(a, b));
    skills
}

// Case-only ties put the lowercase spelling first.
fn compare_skill_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
