// libs/doctor-cell/src/services/availability.rs

use chrono::{Datelike, Local, Weekday};

/// Arabic day names as staff write them in `work_days`, Sunday first.
const WEEKDAY_NAMES: [&str; 7] = [
    "الأحد", "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت",
];

pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_sunday() as usize]
}

/// Whether the free-text work-day list mentions the given day.
pub fn works_on(work_days: Option<&str>, weekday: Weekday) -> bool {
    match work_days {
        Some(days) => days.contains(weekday_name(weekday)),
        None => false,
    }
}

pub fn works_today(work_days: Option<&str>) -> bool {
    works_on(work_days, Local::now().weekday())
}

/// Splits the qualifications column on Arabic or Latin commas.
pub fn qualifications_list(qualifications: Option<&str>) -> Vec<String> {
    qualifications
        .map(|text| {
            text.split(|c: char| c == '،' || c == ',')
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_day_names() {
        let days = Some("السبت، الاثنين، الأربعاء");
        assert!(works_on(days, Weekday::Sat));
        assert!(works_on(days, Weekday::Mon));
        assert!(!works_on(days, Weekday::Fri));
        assert!(!works_on(None, Weekday::Mon));
    }

    #[test]
    fn weekday_names_start_on_sunday() {
        assert_eq!(weekday_name(Weekday::Sun), "الأحد");
        assert_eq!(weekday_name(Weekday::Sat), "السبت");
    }

    #[test]
    fn splits_qualifications() {
        assert_eq!(
            qualifications_list(Some("بكالوريوس طب وجراحة، ماجستير , ,زمالة")),
            vec!["بكالوريوس طب وجراحة", "ماجستير", "زمالة"]
        );
        assert!(qualifications_list(None).is_empty());
    }
}
