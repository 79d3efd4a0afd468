//! Radiology catalog.
//!
//! The scans page shows five fixed groups. Child procedures are matched to
//! scan rows by substring of the scan name; children with no matching row
//! are left out.

use anyhow::Result;
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_database::query::{Direction, Query};
use shared_database::supabase::SupabaseClient;

use crate::models::{
    CatalogError, EndoscopyProcedure, Equipment, Scan, ScanChild, ScanGroup, ScanGroupKind,
};

const SCANS_TABLE: &str = "scans";
const EQUIPMENTS_TABLE: &str = "equipments";
const ENDOSCOPY_TABLE: &str = "gastrointestinal_and_liver_endoscopy";
const IMAGE_BUCKET: &str = "equipment-images";

const XRAY_CHILDREN: &[&str] = &[
    "الاشعة السينية للعظام",
    "الاشعة السينية للصدر",
    "الاشعة السينية للبطن",
    "فحص الكلى بالصبغة I.V.U",
    "فحص القولون بصبغة الباريوم",
    "اشعة الصبغة للرحم وقنوات فالوب",
    "فحص البلعوم والمعده بصبغة الباريوم",
];

const ULTRASOUND_CHILDREN: &[&str] = &[
    "الموجات فوق الصوتية للبطن",
    "تصوير البروستات بالموجات فوق الصوتية",
    "تصوير الغدة الدرقية بالموجات فوق الصوتية",
    "تصوير الخصية بالموجات فوق الصوتية",
    "تصوير الاوعية الدمويه - الدوبلر",
    "إيكو القلب (Echo)",
];

const MAMMOGRAM_CHILDREN: &[&str] = &[
    "أشعة الماموجرام",
    "تخطيط كهربية القلب (ECG)",
    "تخطيط كهربية الدماغ (EEG)",
];

fn find_scan_id(scans: &[Scan], fragment: &str) -> Option<i64> {
    scans
        .iter()
        .find(|scan| scan.name.as_deref().is_some_and(|name| name.contains(fragment)))
        .map(|scan| scan.id)
}

fn resolved_children(scans: &[Scan], names: &[&str], first_word_fallback: bool) -> Vec<ScanChild> {
    names
        .iter()
        .filter_map(|name| {
            let id = find_scan_id(scans, name).or_else(|| {
                first_word_fallback
                    .then(|| name.split(' ').next())
                    .flatten()
                    .and_then(|word| find_scan_id(scans, word))
            })?;
            Some(ScanChild { name: name.to_string(), id: Some(id) })
        })
        .collect()
}

/// Builds the five display groups. `image_url` maps an object name in the
/// equipment image bucket to its public URL.
pub fn group_scans(
    scans: &[Scan],
    endoscopy: &[EndoscopyProcedure],
    image_url: impl Fn(&str) -> String,
) -> Vec<ScanGroup> {
    let ct_id = find_scan_id(scans, "الأشعة المقطعية").or_else(|| find_scan_id(scans, "المقطعية"));

    vec![
        ScanGroup {
            title: "الأشعة المقطعية",
            kind: ScanGroupKind::Single,
            id: ct_id,
            image: image_url("ct-scan.jpg.png"),
            children: Vec::new(),
        },
        ScanGroup {
            title: "مناظير الجهاز الهضمي والكبد",
            kind: ScanGroupKind::Parent,
            id: None,
            image: image_url("Gastrointestinal-and-Liver-Endoscopy.png"),
            children: endoscopy
                .iter()
                .map(|procedure| ScanChild { name: procedure.name.clone(), id: None })
                .collect(),
        },
        ScanGroup {
            title: "الأشعة السينية الرقمية",
            kind: ScanGroupKind::Parent,
            id: None,
            image: image_url("xray.jpg.png"),
            children: resolved_children(scans, XRAY_CHILDREN, false),
        },
        ScanGroup {
            title: "التصوير بالموجات فوق الصوتية",
            kind: ScanGroupKind::Parent,
            id: None,
            image: image_url("ultrasound.jpg.png"),
            children: resolved_children(scans, ULTRASOUND_CHILDREN, false),
        },
        ScanGroup {
            title: "أشعة الماموجرام وتخطيطات أخرى",
            kind: ScanGroupKind::Parent,
            id: None,
            image: image_url("mammogram.jpg.png"),
            children: resolved_children(scans, MAMMOGRAM_CHILDREN, true),
        },
    ]
}

pub struct ScanService {
    supabase: SupabaseClient,
}

impl ScanService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    pub async fn list_scans(&self) -> Result<Vec<Scan>> {
        let query = Query::table(SCANS_TABLE).order("id", Direction::Asc);
        self.supabase.select(&query).await
    }

    pub async fn list_equipments(&self) -> Result<Vec<Equipment>> {
        let query = Query::table(EQUIPMENTS_TABLE).order("id", Direction::Asc);
        self.supabase.select(&query).await
    }

    pub async fn list_endoscopy(&self) -> Result<Vec<EndoscopyProcedure>> {
        self.supabase.select(&Query::table(ENDOSCOPY_TABLE)).await
    }

    /// The scans page: grouped scans plus the equipment list. Each source
    /// degrades to empty on its own.
    pub async fn scans_page(&self) -> (Vec<ScanGroup>, Vec<Equipment>) {
        let (scans, equipments, endoscopy) = futures::join!(
            self.list_scans(),
            self.list_equipments(),
            self.list_endoscopy(),
        );

        let scans = scans.unwrap_or_else(|e| {
            error!("Error fetching scans: {}", e);
            Vec::new()
        });
        let equipments = equipments.unwrap_or_else(|e| {
            error!("Error fetching equipments: {}", e);
            Vec::new()
        });
        let endoscopy = endoscopy.unwrap_or_else(|e| {
            error!("Error fetching endoscopy procedures: {}", e);
            Vec::new()
        });

        debug!("Grouping {} scans and {} endoscopy procedures", scans.len(), endoscopy.len());
        let groups = if scans.is_empty() {
            Vec::new()
        } else {
            group_scans(&scans, &endoscopy, |object| self.supabase.get_public_url(IMAGE_BUCKET, object))
        };

        (groups, equipments)
    }

    pub async fn get_scan(&self, scan_id: i64) -> Result<Scan, CatalogError> {
        let query = Query::table(SCANS_TABLE).eq("id", scan_id);
        self.supabase
            .select_one(&query)
            .await?
            .ok_or(CatalogError::NotFound("الفحص غير موجود"))
    }

    pub async fn get_equipment(&self, equipment_id: i64) -> Result<Equipment, CatalogError> {
        let query = Query::table(EQUIPMENTS_TABLE).eq("id", equipment_id);
        self.supabase
            .select_one(&query)
            .await?
            .ok_or(CatalogError::NotFound("الجهاز غير موجود"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(id: i64, name: &str) -> Scan {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    fn url(object: &str) -> String {
        format!("https://store/{}", object)
    }

    #[test]
    fn groups_resolve_children_by_substring() {
        let scans = vec![
            scan(1, "الأشعة المقطعية 64 شريحة"),
            scan(2, "الاشعة السينية للصدر"),
            scan(3, "إيكو القلب (Echo)"),
            scan(4, "أشعة الماموجرام الرقمية"),
        ];
        let endoscopy = vec![EndoscopyProcedure { name: "منظار المعدة".to_string() }];

        let groups = group_scans(&scans, &endoscopy, url);
        assert_eq!(groups.len(), 5);

        assert_eq!(groups[0].kind, ScanGroupKind::Single);
        assert_eq!(groups[0].id, Some(1));
        assert_eq!(groups[0].image, "https://store/ct-scan.jpg.png");

        assert_eq!(groups[1].children, vec![ScanChild { name: "منظار المعدة".to_string(), id: None }]);
        assert_eq!(groups[2].children, vec![ScanChild { name: "الاشعة السينية للصدر".to_string(), id: Some(2) }]);
        assert_eq!(groups[3].children.len(), 1);
        assert_eq!(groups[4].children[0].id, Some(4));
    }

    #[test]
    fn mammogram_children_fall_back_to_first_word() {
        let scans = vec![scan(7, "تخطيط")];
        let groups = group_scans(&scans, &[], url);

        let names: Vec<&str> = groups[4].children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["تخطيط كهربية القلب (ECG)", "تخطيط كهربية الدماغ (EEG)"]);
        assert!(groups[2].children.is_empty());
    }

    #[test]
    fn unnamed_scans_never_match() {
        let scans: Vec<Scan> = serde_json::from_value(serde_json::json!([{ "id": 5, "name": null }])).unwrap();
        assert_eq!(find_scan_id(&scans, "المقطعية"), None);
    }
}
