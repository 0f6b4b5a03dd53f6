//! Tone palette
//!
//! Maps the core [`Tone`] tags onto Tailwind classes.

use quickcommerce::dashboard::Tone;

/// Tinted background with matching text, used for badges and panels
pub fn badge_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "bg-gradient-to-r from-teal-600 to-indigo-700 text-white",
        Tone::Secondary => "bg-indigo-100 text-indigo-800",
        Tone::Accent => "bg-teal-100 text-teal-800",
        Tone::Danger => "bg-rose-100 text-rose-800",
        Tone::Success => "bg-emerald-100 text-emerald-800",
        Tone::Warning => "bg-amber-100 text-amber-800",
    }
}

/// Left border accent for cards
pub fn border_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary | Tone::Secondary => "border-indigo-500",
        Tone::Accent => "border-teal-500",
        Tone::Danger => "border-rose-500",
        Tone::Success => "border-emerald-500",
        Tone::Warning => "border-amber-500",
    }
}

/// Heading text color
pub fn text_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary | Tone::Secondary => "text-indigo-700",
        Tone::Accent => "text-teal-700",
        Tone::Danger => "text-rose-700",
        Tone::Success => "text-emerald-700",
        Tone::Warning => "text-amber-700",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcommerce::dashboard::GroupKind;

    #[test]
    fn test_group_cards_get_distinct_borders() {
        let mut borders: Vec<_> = GroupKind::ALL
            .iter()
            .map(|kind| border_class(kind.tone()))
            .collect();
        borders.sort();
        borders.dedup();
        assert_eq!(borders.len(), GroupKind::ALL.len());
    }

    #[test]
    fn test_primary_badge_is_gradient() {
        assert!(badge_class(Tone::Primary).starts_with("bg-gradient-to-r"));
    }
}
