//! Known content licenses
//!
//! Licenses are recognized either by URI (`xlink:href` on the access
//! condition) or by a `CODE TYPE:` prefix in the access condition text
//! (e.g. `CC by-sa: ...`).

/// A recognized license
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct License {
    /// Canonical URI the display links to
    pub uri: &'static str,
    /// Human-readable license title
    pub description: &'static str,
    /// CSS class for the wrapping element (may be empty)
    pub class: &'static str,
}

const fn license(uri: &'static str, description: &'static str, class: &'static str) -> License {
    License {
        uri,
        description,
        class,
    }
}

/// Licenses keyed by their normalized URI
static URI_LICENSES: &[License] = &[
    license("https://creativecommons.org/licenses/by/4.0/", "CC-BY-4.0 Attribution International", "cc-by"),
    license("https://creativecommons.org/licenses/by-sa/4.0/", "CC-BY-SA-4.0 Attribution-Share Alike International", "cc-by-sa"),
    license("https://creativecommons.org/licenses/by-nd/4.0/", "CC-BY-ND-4.0 Attribution-No Derivatives International", "cc-by-nd"),
    license("https://creativecommons.org/licenses/by-nc/4.0/", "CC-BY-NC-4.0 Attribution-Non-Commercial International", "cc-by-nc"),
    license("https://creativecommons.org/licenses/by-nc-sa/4.0/", "CC-BY-NC-SA-4.0 Attribution-Non-Commercial-Share Alike International", "cc-by-nc-sa"),
    license("https://creativecommons.org/licenses/by-nc-nd/4.0/", "CC-BY-NC-ND-4.0 Attribution-Non-Commercial-No Derivatives International", "cc-by-nc-nd"),
    license("https://creativecommons.org/licenses/by/3.0/", "CC-BY-3.0 Attribution Unported", "cc-by"),
    license("https://creativecommons.org/licenses/by-sa/3.0/", "CC-BY-SA-3.0 Attribution-Share Alike Unported", "cc-by-sa"),
    license("https://creativecommons.org/licenses/by-nd/3.0/", "CC-BY-ND-3.0 Attribution-No Derivatives Unported", "cc-by-nd"),
    license("https://creativecommons.org/licenses/by-nc/3.0/", "CC-BY-NC-3.0 Attribution-Non-Commercial Unported", "cc-by-nc"),
    license("https://creativecommons.org/licenses/by-nc-sa/3.0/", "CC-BY-NC-SA-3.0 Attribution-Non-Commercial-Share Alike Unported", "cc-by-nc-sa"),
    license("https://creativecommons.org/licenses/by-nc-nd/3.0/", "CC-BY-NC-ND-3.0 Attribution-Non-Commercial-No Derivatives Unported", "cc-by-nc-nd"),
    license("https://creativecommons.org/publicdomain/zero/1.0/", "CC0 - 1.0", ""),
    license("https://creativecommons.org/publicdomain/mark/1.0/", "Public Domain Mark 1.0", "cc-pdm"),
    license("https://opendatacommons.org/licenses/pddl/1-0/", "ODC-PDDL-1.0 Public Domain Dedication and License", "odc-pddl"),
    license("https://opendatacommons.org/licenses/by/1-0/", "ODC-By-1.0 Attribution License", "odc-by"),
    license("https://opendatacommons.org/licenses/odbl/1-0/", "ODC-ODbL-1.0 Open Database License", "odc-odbl"),
];

/// Licenses keyed by `(code, type)` as written in access condition text
static CODE_LICENSES: &[(&str, &str, License)] = &[
    ("cc", "by", license("http://creativecommons.org/licenses/by/3.0/", "Creative Commons Attribution 3.0 Unported License", "cc-by")),
    ("cc", "by-sa", license("http://creativecommons.org/licenses/by-sa/3.0/", "Creative Commons Attribution-Share Alike 3.0 Unported License", "cc-by-sa")),
    ("cc", "by-nd", license("http://creativecommons.org/licenses/by-nd/3.0/", "Creative Commons Attribution-No Derivative Works 3.0 Unported License", "cc-by-nd")),
    ("cc", "by-nc", license("http://creativecommons.org/licenses/by-nc/3.0/", "Creative Commons Attribution-Noncommercial 3.0 Unported License", "cc-by-nc")),
    ("cc", "by-nc-sa", license("http://creativecommons.org/licenses/by-nc-sa/3.0/", "Creative Commons Attribution-Noncommercial-Share Alike 3.0 Unported License", "cc-by-nc-sa")),
    ("cc", "by-nc-nd", license("http://creativecommons.org/licenses/by-nc-nd/3.0/", "Creative Commons Attribution-Noncommercial-No Derivative Works 3.0 Unported License", "cc-by-nc-nd")),
    ("cc", "pdm", license("http://creativecommons.org/publicdomain/mark/1.0/", "Public Domain Mark 1.0", "cc-pdm")),
    ("odc", "pddl", license("http://opendatacommons.org/licenses/pddl/", "Open Data Commons Public Domain Dedication and License (PDDL)", "odc-pddl")),
    ("odc", "by", license("http://opendatacommons.org/licenses/by/", "Open Data Commons Attribution License", "odc-by")),
    ("odc", "odbl", license("http://opendatacommons.org/licenses/odbl/", "Open Data Commons Open Database License (ODbL)", "odc-odbl")),
];

/// Look up a license by URI.
///
/// `http` and `https`, a trailing `legalcode` (or `deed...`) segment and a
/// missing trailing slash all resolve to the same license.
pub fn find_by_uri(uri: &str) -> Option<&'static License> {
    let normalized = normalize_uri(uri);
    URI_LICENSES.iter().find(|license| license.uri == normalized)
}

/// Look up a license by its `CODE TYPE` pair (case-insensitive)
pub fn find_by_code(code: &str, kind: &str) -> Option<&'static License> {
    let code = code.to_lowercase();
    let kind = kind.to_lowercase();
    CODE_LICENSES
        .iter()
        .find(|(c, k, _)| *c == code && *k == kind)
        .map(|(_, _, license)| license)
}

fn normalize_uri(uri: &str) -> String {
    let uri = uri.trim();
    let mut normalized = match uri.strip_prefix("http://") {
        Some(rest) => format!("https://{}", rest),
        None => uri.to_string(),
    };

    if let Some(pos) = normalized.rfind('/') {
        let last = &normalized[pos + 1..];
        if last.starts_with("legalcode") || last.starts_with("deed") {
            normalized.truncate(pos + 1);
        }
    }

    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uri() {
        assert_eq!(
            normalize_uri("http://creativecommons.org/licenses/by-nd/4.0/legalcode"),
            "https://creativecommons.org/licenses/by-nd/4.0/"
        );
        assert_eq!(
            normalize_uri("https://creativecommons.org/publicdomain/zero/1.0"),
            "https://creativecommons.org/publicdomain/zero/1.0/"
        );
        assert_eq!(
            normalize_uri("https://creativecommons.org/licenses/by/4.0/deed.en"),
            "https://creativecommons.org/licenses/by/4.0/"
        );
    }

    #[test]
    fn test_find_by_uri() {
        let license = find_by_uri("https://creativecommons.org/licenses/by-nd/4.0/legalcode").unwrap();
        assert_eq!(license.class, "cc-by-nd");
        assert_eq!(license.description, "CC-BY-ND-4.0 Attribution-No Derivatives International");

        let cc0 = find_by_uri("https://creativecommons.org/publicdomain/zero/1.0/legalcode").unwrap();
        assert_eq!(cc0.class, "");

        assert!(find_by_uri("https://example.org/licenses/mine/").is_none());
    }

    #[test]
    fn test_find_by_code() {
        let license = find_by_code("CC", "by-sa").unwrap();
        assert_eq!(license.uri, "http://creativecommons.org/licenses/by-sa/3.0/");

        let odc = find_by_code("odc", "PDDL").unwrap();
        assert_eq!(odc.uri, "http://opendatacommons.org/licenses/pddl/");

        assert!(find_by_code("unknown", "something").is_none());
    }
}
