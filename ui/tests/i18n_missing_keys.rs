use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures every non‑fallback locale provides *at least* the keys present
/// in the fallback (en-US) `tidewater-ui.ftl`.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
/// - Does not attempt to parse multi-line pattern bodies (only keys)
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/tidewater-ui.ftl`
/// 2. Copy all keys from `en-US/tidewater-ui.ftl`
/// 3. Run `cargo test -p tidewater-ui` to confirm completeness.
#[test]
fn all_locales_have_all_fallback_keys() {
    // Embed the FTL sources at compile time.
    // (If you add a new locale, register it here.)
    const EN_US: &str = include_str!("../i18n/en-US/tidewater-ui.ftl");
    const ES_ES: &str = include_str!("../i18n/es-ES/tidewater-ui.ftl");
    const FR_FR: &str = include_str!("../i18n/fr-FR/tidewater-ui.ftl");

    let fallback_keys = extract_keys(EN_US);

    // Ensure fallback itself has no duplicates and at least one key.
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[
        ("es-ES", ES_ES),
        ("fr-FR", FR_FR),
        // Add new locales here.
    ];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let mut missing: BTreeSet<String> = BTreeSet::new();

        for k in &fallback_keys {
            if !keys.contains(k) {
                missing.insert(k.clone());
            }
        }

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Skip attribute or continuation lines (start with '.' or indent).
        if line.starts_with('.') {
            continue;
        }
        // Basic pattern: key [space]* '='
        if let Some(eq_pos) = line.find('=') {
            let (left, _right) = line.split_at(eq_pos);
            let key = left.trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                if !seen.insert(key.to_string()) {
                    dups.insert(format!("{key}  (line: \"{raw}\")"));
                }
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}

/// Every translation must use the same `$variables` as the fallback message,
/// otherwise `fl!` arguments silently stop showing up in that locale.
#[test]
fn placeables_match_fallback() {
    const EN_US: &str = include_str!("../i18n/en-US/tidewater-ui.ftl");
    const ES_ES: &str = include_str!("../i18n/es-ES/tidewater-ui.ftl");
    const FR_FR: &str = include_str!("../i18n/fr-FR/tidewater-ui.ftl");

    let fallback = variables_by_key(EN_US);
    let mut failures = Vec::new();

    for (locale, src) in [("es-ES", ES_ES), ("fr-FR", FR_FR)] {
        for (key, vars) in variables_by_key(src) {
            match fallback.get(&key) {
                Some(expected) if *expected != vars => failures.push(format!(
                    "{locale}: `{key}` uses {vars:?}, fallback uses {expected:?}"
                )),
                _ => {}
            }
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

/// Map each message key to the `$variables` referenced in its value,
/// including indented continuation lines (select expressions).
fn variables_by_key(src: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut map: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for line in src.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let indented = line.starts_with(' ') || line.starts_with('\t');
        let body = if indented {
            trimmed
        } else if let Some((key, value)) = trimmed.split_once('=') {
            let key = key.trim().to_string();
            map.entry(key.clone()).or_default();
            current = Some(key);
            value
        } else {
            continue;
        };

        if let Some(key) = &current {
            let vars = map.entry(key.clone()).or_default();
            let mut rest = body;
            while let Some(pos) = rest.find('$') {
                let tail = &rest[pos + 1..];
                let name: String = tail
                    .chars()
                    .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                    .collect();
                if !name.is_empty() {
                    vars.insert(name.clone());
                }
                rest = &tail[name.len()..];
            }
        }
    }

    map
}
