//! Era string parsing.

use serde::Deserialize;

use crate::model::{Era, EraConfig};

/// Entries of a JSON era list: bare names or `{ "name", "offset" }` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEra {
    Name(String),
    Full(Era),
}

/// Parse a free-form era string into an ordered [`EraConfig`].
///
/// Accepts comma-separated names (`"BE, SE"`) or a JSON array of names or
/// era objects. Names are trimmed, empty entries dropped, and repeats keep
/// their first position. Anything unparseable yields an empty config.
pub fn parse_era_config(raw: Option<&str>) -> EraConfig {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return EraConfig::default();
    };

    let candidates = if raw.starts_with('[') {
        match serde_json::from_str::<Vec<RawEra>>(raw) {
            Ok(entries) => entries
                .into_iter()
                .map(|entry| match entry {
                    RawEra::Name(name) => Era { name, offset: None },
                    RawEra::Full(era) => era,
                })
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, raw, "malformed era list, ignoring eras");
                return EraConfig::default();
            }
        }
    } else {
        raw.split(',')
            .map(|name| Era {
                name: name.to_string(),
                offset: None,
            })
            .collect::<Vec<_>>()
    };

    let mut eras: Vec<Era> = Vec::with_capacity(candidates.len());
    for mut era in candidates {
        era.name = era.name.trim().to_string();
        if era.name.is_empty() || eras.iter().any(|e| e.name == era.name) {
            continue;
        }
        eras.push(era);
    }
    EraConfig::new(eras)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_separated_names() {
        let eras = parse_era_config(Some("BE, SE"));
        assert_eq!(eras.names(), ["BE", "SE"]);
    }

    #[test]
    fn empty_entries_and_whitespace_are_dropped() {
        let eras = parse_era_config(Some(" ,Dawn,,  Age of Ash , ,"));
        assert_eq!(eras.names(), ["Dawn", "Age of Ash"]);
    }

    #[test]
    fn repeated_names_keep_first_position() {
        let eras = parse_era_config(Some("BE, SE, BE"));
        assert_eq!(eras.names(), ["BE", "SE"]);
    }

    #[test]
    fn json_array_of_names() {
        let eras = parse_era_config(Some(r#"["BE", " SE "]"#));
        assert_eq!(eras.names(), ["BE", "SE"]);
    }

    #[test]
    fn json_array_of_objects_with_offsets() {
        let eras = parse_era_config(Some(
            r#"[{"name": "BE", "offset": 0}, {"name": "SE", "offset": 1000}, "NE"]"#,
        ));

        assert_eq!(eras.names(), ["BE", "SE", "NE"]);
        assert_eq!(eras.offset(1), Some(1000));
        assert_eq!(eras.offset(2), None);
    }

    #[test]
    fn empty_or_malformed_input_yields_no_eras() {
        let cases = [
            None,
            Some(""),
            Some("   "),
            Some(" , , "),
            Some("[\"BE\", "),
            Some("[1, 2]"),
            Some("[]"),
        ];
        for raw in cases {
            assert!(parse_era_config(raw).is_empty(), "{raw:?}");
        }
    }
}
