//! Fixed facts about the center shown across the site.

use crate::models::CenterInfo;

pub const CENTER_INFO: CenterInfo = CenterInfo {
    name: "مركز المدينة الطبي",
    address: "عدن، المنصورة - بجانب مستشفى 22 مايو",
    phone: "777552666",
    bank: "بنك القطيبي",
    bank_account: "123456",
};

/// Lab quality standards listed on the examinations page.
pub const QUALITY_STANDARDS: &[&str] = &[
    "توفر كفاءة في الاختصاصيين والفنيين",
    "دقة المحاليل الطبية المستخدمة",
    "الأجهزة الطبية المتطورة",
    "استخدام تكنولوجيا المعلومات الحديثة",
];

pub const SAFETY_RULES: &[&str] = &[
    "إبلاغ المسؤول عن كافة الإصابات، والحوادث، والكسور الناتجة عن الزجاج أو المعدات الموجودة.",
    "ربط الشعر، وتغطيته لتلافي تعرضه للهب.",
    "اختيار الألبسة والأحذية الملائمة لبيئة المختبر، والحذر من لمس الألبسة الفضفاضة للنار، أو المواد الكيميائية.",
    "اتباع كافة الإرشادات والتوجيهات التي يعطيها مشرف المختبر.",
    "تجنب الأكل، والشرب في المختبر في كل الأوقات.",
    "تجنب الجلوس على طاولات المختبر.",
    "عدم التخلص من المواد الصلبة في المغاسل.",
    "عدم تذوق أو شم أي مادة كيميائية.",
    "الالتزام باستخدام النظارات المخصصة للمختبرات لحماية العين عند تسخين المواد، أو التشريح، أو غير ذلك.",
    "تجنب إجراء التجارب غير المُصرَّح بها.",
    "الحفاظ على مكان العمل نظيفاً قبل مغادرة المختبر.",
    "تجنب رفع المحاليل الكيميائية، أو الأوعية الزجاجية، أو أي من الأجهزة فوق مستوى العين.",
];
