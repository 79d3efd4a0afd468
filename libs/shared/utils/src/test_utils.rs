use std::sync::Arc;
use serde_json::json;

use shared_config::{AppConfig, MatchingMode};

pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub matching_mode: MatchingMode,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
            matching_mode: MatchingMode::Strict,
        }
    }
}

impl TestConfig {
    /// Config pointed at a mock store, usually `MockServer::uri()`.
    pub fn with_url(url: &str) -> Self {
        Self {
            supabase_url: url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_anon_key: self.supabase_anon_key.clone(),
            port: shared_config::DEFAULT_PORT,
            matching_mode: self.matching_mode,
            checkout_redirect_delay_ms: shared_config::DEFAULT_CHECKOUT_REDIRECT_DELAY_MS,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct MockSupabaseResponses;

impl MockSupabaseResponses {
    pub fn doctor_response(id: i64, name: &str, category: &str, shift: Option<&str>) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "title": "استشاري",
            "category": category,
            "shift": shift,
            "clinic_id": null,
            "priority": id,
            "home_page_order": null,
            "work_days": "السبت، الاثنين، الأربعاء",
            "work_hours": "9:00 - 13:00",
            "qualifications": "بكالوريوس طب وجراحة، ماجستير",
            "image_url": null
        })
    }

    pub fn clinic_response(id: i64, name: &str, color: Option<&str>, icon_name: Option<&str>) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "clinic_number": id,
            "sort_order": id,
            "color": color,
            "icon_name": icon_name,
            "description": null
        })
    }

    pub fn named_record(id: i64, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name
        })
    }

    pub fn appointment_response(id: i64, patient_name: &str, service_name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "patient_name": patient_name,
            "patient_phone": "777000000",
            "service_name": service_name,
            "appointment_date": "2025-05-01",
            "appointment_time": "الفترة الصباحية (9:00 ص - 1:00 م)",
            "status": "pending"
        })
    }

    pub fn error_response(message: &str, code: &str) -> serde_json::Value {
        json!({
            "message": message,
            "code": code
        })
    }
}
