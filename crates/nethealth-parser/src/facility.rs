use once_cell::sync::Lazy;
use regex::Regex;

static PWBK_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\*?PWBK\s+").expect("valid prefix pattern"));
static PWB_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\*?PWB\s+").expect("valid prefix pattern"));

/// Ordered variant-to-canonical rewrites. Matching is case-insensitive
/// substring containment of the left entry within the input; the first
/// matching entry wins.
const RENAMES: &[(&str, &str)] = &[
    ("Gilroy Healthcare & Rehab Cent", "Gilroy HC"),
    ("Grant Cuesta Nursing & Rehab H", "Morgan Hill HC"),
    ("Mountain View Healthcare Cente", "Mountain View HC"),
    ("Pacific Coast Manor", "Pac Coast PA"),
    ("Los Altos Sub-Acute & Rehab Ce", "Los Altos Post Acute"),
    ("Palo Alto Sub Acute", "Palo Alto Post Acute"),
    ("Eden Post Acute Care", "Eden HC"),
    ("Belmont Hills Health & Rehab", "Belmont HC"),
    ("Golden Harbor Nursing & Rehab", "Golden Harbor HC"),
    ("West Shore Post Acute", "West Shore PA"),
    ("Capital Post Acute", "Capital PA"),
    ("Bridgewood Post Acute", "Bridgewood PA"),
    ("Cedarwood Post Acute", "Cedarwood PA"),
    ("The Win Post Acute", "The Win Post Acute"),
    ("PAC Hills Post Acute", "PAC Hills Post Acute"),
    ("Camino Ridge Post Acute", "Camino Ridge Post Acute"),
    ("Manresa Healthcare Center", "Manresa HC"),
];

/// Map a raw facility name as it appears in a report to its canonical
/// spelling. Routing-code prefixes (`*PWBK `, `PWB `, ...) are stripped
/// first. Names with no catalog entry pass through trimmed and unchanged,
/// so a newly onboarded facility still shows up in the output.
pub fn normalize_facility_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = PWBK_PREFIX.replace(trimmed, "");
    let stripped = PWB_PREFIX.replace(&stripped, "");
    let name = stripped.trim();

    let lower = name.to_lowercase();
    for (variant, canonical) in RENAMES {
        if lower.contains(&variant.to_lowercase()) {
            return (*canonical).to_string();
        }
    }

    name.to_string()
}
