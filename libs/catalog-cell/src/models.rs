use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Columns a detail page renders but nothing here interprets.
pub type ExtraColumns = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scan {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraColumns,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraColumns,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndoscopyProcedure {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanGroupKind {
    /// Links straight to one scan.
    Single,
    /// Lists child procedures.
    Parent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanChild {
    pub name: String,
    pub id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanGroup {
    pub title: &'static str,
    pub kind: ScanGroupKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub image: String,
    pub children: Vec<ScanChild>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Examination {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub header_color: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraColumns,
}

/// An examination section card with its display theme resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ExaminationCard {
    #[serde(flatten)]
    pub examination: Examination,
    pub icon: &'static str,
    pub header_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestGuideEntry {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub reasons: Option<Vec<String>>,
    #[serde(default)]
    pub prep: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestGuideFilters {
    pub search: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestGuide {
    pub tests: Vec<TestGuideEntry>,
    pub categories: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalPackage {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub discount_text: Option<String>,
    #[serde(default)]
    pub tests_count: Option<i64>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub tests_included: Option<Vec<String>>,
    #[serde(default)]
    pub detailed_prep: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CenterInfo {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub bank: &'static str,
    pub bank_account: &'static str,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
