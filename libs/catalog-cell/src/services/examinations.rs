use anyhow::Result;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::query::{Direction, Query};
use shared_database::supabase::SupabaseClient;
use shared_utils::lookup::LookupTable;

use crate::models::{
    CatalogError, Examination, ExaminationCard, MedicalPackage, TestGuide, TestGuideEntry,
    TestGuideFilters,
};

const EXAMINATIONS_TABLE: &str = "examinations";
const TESTS_GUIDE_TABLE: &str = "medical_tests_guide";
const PACKAGES_TABLE: &str = "medical_packages";

pub const ALL_TEST_CATEGORIES: &str = "الكل";
pub const DEFAULT_HEADER_CLASS: &str = "bg-blue-600";

/// Lucide icons for lab sections. Keys without a dedicated icon reuse a
/// close one.
pub const EXAMINATION_ICONS: LookupTable = LookupTable::new(
    &[
        ("Activity", "Activity"),
        ("Microscope", "Microscope"),
        ("Zap", "Zap"),
        ("Dna", "Dna"),
        ("Droplet", "Droplet"),
        ("Shield", "Shield"),
        ("Bug", "Microscope"),
        ("Flask", "FlaskConical"),
        ("Virus", "Activity"),
        ("Heart", "Activity"),
        ("Syringe", "FlaskConical"),
        ("Scan", "Activity"),
    ],
    "Activity",
);

pub fn examination_card(examination: Examination) -> ExaminationCard {
    let header_class = examination
        .header_color
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_HEADER_CLASS)
        .to_string();

    ExaminationCard {
        icon: EXAMINATION_ICONS.resolve(examination.icon_class.as_deref()),
        header_class,
        examination,
    }
}

/// Category tabs: "الكل" then each category once, in guide order.
pub fn guide_categories(entries: &[TestGuideEntry]) -> Vec<String> {
    let mut categories = vec![ALL_TEST_CATEGORIES.to_string()];
    for category in entries.iter().filter_map(|e| e.category.as_deref()) {
        if !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }
    categories
}

/// Case-insensitive name search within the chosen category tab.
pub fn filter_guide(entries: &[TestGuideEntry], filters: &TestGuideFilters) -> Vec<TestGuideEntry> {
    let search = filters
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());
    let category = filters
        .category
        .as_deref()
        .filter(|c| !c.is_empty() && *c != ALL_TEST_CATEGORIES);

    entries
        .iter()
        .filter(|entry| match &search {
            Some(term) => entry.name.to_lowercase().contains(term.as_str()),
            None => true,
        })
        .filter(|entry| match category {
            Some(category) => entry.category.as_deref() == Some(category),
            None => true,
        })
        .cloned()
        .collect()
}

pub struct ExaminationService {
    supabase: SupabaseClient,
}

impl ExaminationService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    pub async fn list_examinations(&self) -> Result<Vec<ExaminationCard>> {
        let query = Query::table(EXAMINATIONS_TABLE).order("id", Direction::Asc);
        let examinations: Vec<Examination> = self.supabase.select(&query).await?;
        Ok(examinations.into_iter().map(examination_card).collect())
    }

    pub async fn get_examination(&self, examination_id: i64) -> Result<ExaminationCard, CatalogError> {
        let query = Query::table(EXAMINATIONS_TABLE).eq("id", examination_id);
        self.supabase
            .select_one(&query)
            .await?
            .map(examination_card)
            .ok_or(CatalogError::NotFound("القسم غير موجود"))
    }

    pub async fn test_guide(&self, filters: &TestGuideFilters) -> Result<TestGuide> {
        let query = Query::table(TESTS_GUIDE_TABLE).order("category", Direction::Asc);
        let entries: Vec<TestGuideEntry> = self.supabase.select(&query).await?;
        debug!("Loaded {} test guide entries", entries.len());

        let tests = filter_guide(&entries, filters);
        Ok(TestGuide {
            categories: guide_categories(&entries),
            total: tests.len(),
            tests,
        })
    }

    pub async fn list_packages(&self) -> Result<Vec<MedicalPackage>> {
        let query = Query::table(PACKAGES_TABLE).order("id", Direction::Asc);
        self.supabase.select(&query).await
    }

    pub async fn get_package(&self, package_id: i64) -> Result<MedicalPackage, CatalogError> {
        let query = Query::table(PACKAGES_TABLE).eq("id", package_id);
        self.supabase
            .select_one(&query)
            .await?
            .ok_or(CatalogError::NotFound("الباقة غير موجودة"))
    }
}
