use std::collections::HashSet;

pub const MIGRATED: &str = "Sim";
pub const NOT_MIGRATED: &str = "Não";

pub(in crate::migration) const PREFIX: &str = "MCD";
const KIOSK_MARKER: &str = "KSK";

/// Short codes of the sites that were already migrated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MigrationCodes {
    restaurants: HashSet<String>,
    kiosks: HashSet<String>,
}

impl MigrationCodes {
    pub fn new(restaurants: HashSet<String>, kiosks: HashSet<String>) -> Self {
        MigrationCodes { restaurants, kiosks }
    }

    pub fn restaurants(&self) -> &HashSet<String> {
        &self.restaurants
    }

    pub fn kiosks(&self) -> &HashSet<String> {
        &self.kiosks
    }

    pub fn is_migrated(&self, name: Option<&str>) -> bool {
        let code = name.map(canonical_code).unwrap_or_default();
        !code.is_empty() && (self.restaurants.contains(&code) || self.kiosks.contains(&code))
    }

    /// `"Sim"` or `"Não"`.
    pub fn status(&self, name: Option<&str>) -> &'static str {
        if self.is_migrated(name) { MIGRATED } else { NOT_MIGRATED }
    }
}

/// Derives the site code a device name refers to.
///
/// `MCD_AB_01` belongs to restaurant `MCD_AB`, `MCD_AB_KSK1_01` to kiosk `MCD_AB_KSK1`.
/// Names outside the `MCD_` prefix have no code.
pub fn canonical_code(name: &str) -> String {
    let name = name.trim().to_uppercase();
    if name.strip_prefix(PREFIX).is_none_or(|rest| !rest.starts_with('_')) {
        return String::new();
    }

    let parts = name.split('_').collect::<Vec<_>>();
    match parts.as_slice() {
        [_, _, kiosk, ..] if kiosk.starts_with(KIOSK_MARKER) => parts[..3].join("_"),
        [_, _, ..] => parts[..2].join("_"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn codes(restaurants: &[&str], kiosks: &[&str]) -> MigrationCodes {
        MigrationCodes::new(
            restaurants.iter().map(|code| code.to_string()).collect(),
            kiosks.iter().map(|code| code.to_string()).collect(),
        )
    }

    #[rstest]
    #[case::restaurant("MCD_AB", "MCD_AB")]
    #[case::restaurant_with_suffix("MCD_AB_01", "MCD_AB")]
    #[case::lowercase_and_padded("  mcd_ab_mx01 ", "MCD_AB")]
    #[case::kiosk("MCD_AB_KSK1", "MCD_AB_KSK1")]
    #[case::kiosk_with_suffix("MCD_AB_KSK1_MX", "MCD_AB_KSK1")]
    #[case::marker_not_third("MCD_KSK1_AB", "MCD_KSK1")]
    #[case::only_prefix("MCD_", "MCD_")]
    #[case::no_underscore("MCDAB", "")]
    #[case::other_prefix("BK_AB", "")]
    #[case::prefix_not_at_start("X_MCD_AB", "")]
    #[case::empty("", "")]
    fn derives_the_canonical_code(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(canonical_code(name), expected);
    }

    #[rstest]
    #[case::restaurant("MCD_AB", "Sim")]
    #[case::restaurant_device("MCD_AB_MX01", "Sim")]
    #[case::kiosk("MCD_AB_KSK1", "Sim")]
    #[case::other_kiosk("MCD_AB_KSK2", "Não")]
    #[case::unknown_restaurant("MCD_CD", "Não")]
    #[case::outside_prefix("AB", "Não")]
    fn classifies_device_names(#[case] name: &str, #[case] expected: &str) {
        let codes = codes(&["MCD_AB"], &["MCD_AB_KSK1"]);
        assert_eq!(codes.status(Some(name)), expected);
    }

    #[test]
    fn kiosk_names_only_match_kiosk_codes() {
        let restaurants_only = codes(&["MCD_AB"], &[]);
        assert_eq!(restaurants_only.status(Some("MCD_AB_KSK1")), NOT_MIGRATED);

        let with_kiosk = codes(&["MCD_AB"], &["MCD_AB_KSK1"]);
        assert_eq!(with_kiosk.status(Some("MCD_AB_KSK1")), MIGRATED);
    }

    #[test]
    fn a_device_without_name_is_not_migrated() {
        let codes = codes(&["MCD_AB"], &["MCD_AB_KSK1"]);
        assert_eq!(codes.status(None), NOT_MIGRATED);
    }

    #[test]
    fn nothing_is_migrated_without_codes() {
        assert_eq!(MigrationCodes::default().status(Some("MCD_AB")), NOT_MIGRATED);
    }
}
