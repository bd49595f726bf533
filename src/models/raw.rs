// ============================================================================
// Raw Availability Parsing
// ============================================================================
//
// The scraping collaborator extracts three JavaScript-held arrays from the
// scheduling page (people names, people ids, attendee ids per slot) plus the
// slot timestamps, and hands them over as one JSON payload. These functions
// parse that payload, accepting either our snake_case field names or the
// page's original global-variable names as aliases.

use crate::api::{Person, PersonId, RawAvailability};
use crate::error::EngineError;
use anyhow::{Context, Result};
use std::collections::HashSet;

#[derive(serde::Deserialize)]
struct AvailabilityInput {
    #[serde(alias = "TimeOfSlot")]
    timestamps: Vec<i64>,
    #[serde(alias = "AvailableAtSlot")]
    attendee_ids_per_slot: Vec<Vec<i64>>,
    /// Person table as `{id, name}` records.
    #[serde(default)]
    people: Vec<Person>,
    /// Person table as the page's parallel arrays, used when `people` is absent.
    #[serde(default, alias = "PeopleNames")]
    people_names: Vec<String>,
    #[serde(default, alias = "PeopleIDs")]
    people_ids: Vec<i64>,
}

/// Parse a raw availability payload from a JSON string.
///
/// The person table may arrive either as a `people` list of `{id, name}`
/// records or as the scraped page's parallel `PeopleNames`/`PeopleIDs`
/// arrays; the slot arrays accept the page's `TimeOfSlot`/`AvailableAtSlot`
/// names as aliases. The parsed payload is validated before it is returned.
pub fn parse_raw_availability_str(json: &str) -> Result<RawAvailability> {
    let input: AvailabilityInput =
        serde_json::from_str(json).context("Failed to deserialize availability JSON")?;

    let people = if !input.people.is_empty() {
        input.people
    } else {
        if input.people_names.len() != input.people_ids.len() {
            anyhow::bail!(
                "Person arrays disagree: {} names vs {} ids",
                input.people_names.len(),
                input.people_ids.len()
            );
        }
        input
            .people_names
            .into_iter()
            .zip(input.people_ids)
            .map(|(name, id)| Person {
                id: PersonId::new(id),
                name,
            })
            .collect()
    };

    let raw = RawAvailability {
        timestamps: input.timestamps,
        attendee_ids_per_slot: input
            .attendee_ids_per_slot
            .into_iter()
            .map(|ids| ids.into_iter().map(PersonId::new).collect())
            .collect(),
        people,
    };

    raw.validate()?;
    Ok(raw)
}

impl RawAvailability {
    /// Check structural consistency of the payload.
    ///
    /// Rejects mismatched slot-array lengths and duplicate person ids.
    /// Attendee ids without a person-table entry are left alone; the slot
    /// builder skips them when resolving names.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.timestamps.len() != self.attendee_ids_per_slot.len() {
            return Err(EngineError::invalid(format!(
                "{} timestamps but {} attendee lists",
                self.timestamps.len(),
                self.attendee_ids_per_slot.len()
            )));
        }

        let mut seen = HashSet::new();
        for person in &self.people {
            if !seen.insert(person.id) {
                return Err(EngineError::invalid(format!(
                    "duplicate person id {}",
                    person.id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snake_case_payload() {
        let json = r#"{
            "timestamps": [1000, 1900],
            "attendee_ids_per_slot": [[1, 2], [2]],
            "people": [
                {"id": 1, "name": "Alice"},
                {"id": 2, "name": "Bob"}
            ]
        }"#;
        let raw = parse_raw_availability_str(json).unwrap();
        assert_eq!(raw.timestamps, vec![1000, 1900]);
        assert_eq!(raw.attendee_ids_per_slot[0], vec![PersonId(1), PersonId(2)]);
        assert_eq!(raw.people[1].name, "Bob");
    }

    #[test]
    fn test_parse_page_variable_names() {
        let json = r#"{
            "TimeOfSlot": [1000],
            "AvailableAtSlot": [[7]],
            "PeopleNames": ["Carol"],
            "PeopleIDs": [7]
        }"#;
        let raw = parse_raw_availability_str(json).unwrap();
        assert_eq!(raw.people.len(), 1);
        assert_eq!(raw.people[0].id, PersonId(7));
        assert_eq!(raw.people[0].name, "Carol");
    }

    #[test]
    fn test_parse_rejects_person_array_mismatch() {
        let json = r#"{
            "TimeOfSlot": [],
            "AvailableAtSlot": [],
            "PeopleNames": ["Carol", "Dave"],
            "PeopleIDs": [7]
        }"#;
        assert!(parse_raw_availability_str(json).is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse_raw_availability_str("not json").is_err());
    }

    #[test]
    fn test_validate_rejects_slot_length_mismatch() {
        let raw = RawAvailability {
            timestamps: vec![1000, 1900],
            attendee_ids_per_slot: vec![vec![]],
            people: vec![],
        };
        let err = raw.validate().unwrap_err();
        assert!(err.to_string().contains("invalid schedule data"));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let raw = RawAvailability {
            timestamps: vec![],
            attendee_ids_per_slot: vec![],
            people: vec![
                Person {
                    id: PersonId(1),
                    name: "Alice".into(),
                },
                Person {
                    id: PersonId(1),
                    name: "Alicia".into(),
                },
            ],
        };
        assert!(raw.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_empty_payload() {
        let raw = RawAvailability {
            timestamps: vec![],
            attendee_ids_per_slot: vec![],
            people: vec![],
        };
        assert!(raw.validate().is_ok());
    }
}
