use std::collections::BTreeSet;

/// The six autonomous universities covered by the survey, with the acronym
/// shown in the table. Order matches the selector.
pub const KNOWN_INSTITUTIONS: [(&str, &str); 6] = [
    ("Nanyang Technological University", "NTU"),
    ("National University of Singapore", "NUS"),
    ("Singapore Institute of Technology", "SIT"),
    ("Singapore Management University", "SMU"),
    ("Singapore University of Social Sciences", "SUSS"),
    ("Singapore University of Technology and Design", "SUTD"),
];

/// Acronym for a full institution name. Unknown names have none.
pub fn acronym(full_name: &str) -> Option<&'static str> {
    KNOWN_INSTITUTIONS
        .iter()
        .find(|(name, _)| *name == full_name)
        .map(|(_, acr)| *acr)
}

/// Selector label, e.g. `"National University of Singapore (NUS)"`.
pub fn selector_label(full_name: &str) -> String {
    match acronym(full_name) {
        Some(acr) => format!("{full_name} ({acr})"),
        None => full_name.to_string(),
    }
}

/// Default selection: every known institution.
pub fn all_institutions() -> BTreeSet<String> {
    KNOWN_INSTITUTIONS
        .iter()
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acronyms_are_a_bijection() {
        let acronyms: BTreeSet<_> = KNOWN_INSTITUTIONS.iter().map(|(_, a)| *a).collect();
        assert_eq!(acronyms.len(), KNOWN_INSTITUTIONS.len());
        assert_eq!(acronym("Singapore University of Social Sciences"), Some("SUSS"));
        assert_eq!(acronym("Nanyang Technological University"), Some("NTU"));
    }

    #[test]
    fn unknown_institution_has_no_acronym() {
        assert_eq!(acronym("NUS"), None);
        assert_eq!(acronym(""), None);
        assert_eq!(selector_label("Elsewhere"), "Elsewhere");
    }

    #[test]
    fn default_selection_covers_all_six() {
        let all = all_institutions();
        assert_eq!(all.len(), 6);
        assert!(all.contains("Singapore Management University"));
    }
}
