//! Display themes for clinics.
//!
//! Staff set `icon_name` and `color` as free text; anything unknown falls
//! back to a fixed default.

use shared_utils::lookup::LookupTable;

/// Lucide icon names.
pub const CLINIC_ICONS: LookupTable = LookupTable::new(
    &[
        ("Heart", "Heart"),
        ("Smile", "Smile"),
        ("Brain", "Brain"),
        ("Bone", "Bone"),
        ("Eye", "Eye"),
        ("Baby", "Baby"),
        ("Stethoscope", "Stethoscope"),
        ("Ear", "Ear"),
        ("Droplet", "Droplet"),
        ("Sparkles", "Sparkles"),
        ("Apple", "Apple"),
        ("Scissors", "Scissors"),
        ("Ribbon", "Ribbon"),
        ("Microscope", "Microscope"),
        ("Siren", "Siren"),
        ("Building2", "Building2"),
        ("Camera", "Camera"),
        ("Syringe", "Syringe"),
        ("Wind", "Wind"),
        ("HeartPulse", "HeartPulse"),
        ("Salad", "Salad"),
    ],
    "Stethoscope",
);

/// Card header gradients on the clinic list. Unknown colors use blue.
pub const LIST_GRADIENTS: LookupTable = LookupTable::new(
    &[
        ("green", "bg-gradient-to-r from-emerald-500 to-teal-400"),
        ("blue", "bg-gradient-to-r from-blue-600 to-blue-400"),
        ("red", "bg-gradient-to-r from-red-600 to-rose-400"),
        ("cyan", "bg-gradient-to-r from-cyan-500 to-blue-400"),
        ("pink", "bg-gradient-to-r from-pink-500 to-rose-400"),
        ("purple", "bg-gradient-to-r from-purple-600 to-violet-400"),
        ("yellow", "bg-gradient-to-r from-yellow-500 to-amber-400"),
        ("indigo", "bg-gradient-to-r from-indigo-600 to-blue-500"),
        ("rose", "bg-gradient-to-r from-rose-600 to-pink-500"),
        ("gray", "bg-gradient-to-r from-slate-600 to-slate-400"),
        ("orange", "bg-gradient-to-r from-orange-500 to-amber-400"),
        ("teal", "bg-gradient-to-r from-teal-600 to-emerald-400"),
    ],
    "bg-gradient-to-r from-blue-600 to-blue-400",
);

/// Hero gradients on the clinic detail page.
pub const DETAIL_GRADIENTS: LookupTable = LookupTable::new(
    &[
        ("green", "from-emerald-600 to-teal-500"),
        ("blue", "from-blue-700 to-blue-500"),
        ("red", "from-red-600 to-rose-500"),
        ("purple", "from-purple-700 to-violet-500"),
        ("orange", "from-orange-600 to-amber-500"),
    ],
    "from-blue-800 to-teal-500",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_icons_use_stethoscope() {
        assert_eq!(CLINIC_ICONS.resolve(Some("Heart")), "Heart");
        assert_eq!(CLINIC_ICONS.resolve(Some("Unicorn")), "Stethoscope");
        assert_eq!(CLINIC_ICONS.resolve(None), "Stethoscope");
    }

    #[test]
    fn list_and_detail_gradients_differ() {
        assert_eq!(LIST_GRADIENTS.resolve(Some("green")), "bg-gradient-to-r from-emerald-500 to-teal-400");
        assert_eq!(DETAIL_GRADIENTS.resolve(Some("green")), "from-emerald-600 to-teal-500");
    }

    #[test]
    fn missing_colors_fall_back() {
        assert_eq!(LIST_GRADIENTS.resolve(None), LIST_GRADIENTS.resolve(Some("blue")));
        assert_eq!(DETAIL_GRADIENTS.resolve(Some("teal")), "from-blue-800 to-teal-500");
    }
}
