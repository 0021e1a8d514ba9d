use crate::domain::model::{Court, Person, ResultRecord};
use crate::utils::error::{FinderError, Result};

/// Returns the first court whose `types` contains the desired type.
///
/// The candidate list comes from the finder API already sorted by ascending
/// distance, so the first match is also the nearest match. Returns `None`
/// when no candidate carries the desired type.
pub fn nearest_matching_court<'a>(courts: &'a [Court], court_type: &str) -> Option<&'a Court> {
    courts
        .iter()
        .find(|court| court.types.iter().any(|t| t == court_type))
}

/// Joins one person with their nearest matching court.
///
/// Fails with `NoMatchingCourt` when none of the candidates offers the
/// desired court type; callers decide whether that ends the run or just
/// the row.
pub fn build_result_record(person: &Person, courts: &[Court]) -> Result<ResultRecord> {
    let court = nearest_matching_court(courts, &person.looking_for_court_type).ok_or_else(|| {
        FinderError::NoMatchingCourt {
            postcode: person.home_postcode.clone(),
            court_type: person.looking_for_court_type.clone(),
        }
    })?;

    Ok(ResultRecord {
        person_name: person.person_name.clone(),
        desired_court_type: person.looking_for_court_type.clone(),
        home_postcode: person.home_postcode.clone(),
        court_name: court.name.clone(),
        dx_number: court.dx_number.clone(),
        distance: court.distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn court(name: &str, distance: f64, types: &[&str]) -> Court {
        Court {
            name: name.to_string(),
            dx_number: None,
            distance,
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn person(court_type: &str) -> Person {
        Person {
            person_name: "Test Person".to_string(),
            home_postcode: "E14 4PU".to_string(),
            looking_for_court_type: court_type.to_string(),
        }
    }

    #[test]
    fn selector_skips_closer_courts_of_wrong_type() {
        let courts = vec![
            court("Close Court", 1.0, &["A"]),
            court("Far Court", 2.0, &["B"]),
        ];

        let matched = nearest_matching_court(&courts, "B").unwrap();
        assert_eq!(matched.name, "Far Court");
        assert_eq!(matched.distance, 2.0);
    }

    #[test]
    fn selector_returns_first_of_several_matches() {
        let courts = vec![
            court("First Tribunal", 1.29, &["Tribunal"]),
            court("Second Tribunal", 3.5, &["Tribunal"]),
        ];

        let matched = nearest_matching_court(&courts, "Tribunal").unwrap();
        assert_eq!(matched.name, "First Tribunal");
    }

    #[test]
    fn selector_returns_none_when_nothing_matches() {
        let courts = vec![court("Close Court", 1.0, &["A"])];
        assert!(nearest_matching_court(&courts, "B").is_none());
    }

    #[test]
    fn selector_handles_empty_list_and_empty_types() {
        assert!(nearest_matching_court(&[], "A").is_none());

        let courts = vec![court("Typeless Court", 1.0, &[])];
        assert!(nearest_matching_court(&courts, "A").is_none());
    }

    #[test]
    fn selector_matches_exact_type_only() {
        let courts = vec![court("County Court", 1.0, &["County Court"])];
        assert!(nearest_matching_court(&courts, "County").is_none());
        assert!(nearest_matching_court(&courts, "County Court").is_some());
    }

    #[test]
    fn builder_copies_fields_verbatim() {
        let mut candidate = court("Central London Employment Tribunal", 1.29, &["Tribunal"]);
        candidate.dx_number = Some("141420 Bloomsbury 7".to_string());
        let courts = vec![court("Wrong Court", 0.5, &["Crown Court"]), candidate];

        let record = build_result_record(&person("Tribunal"), &courts).unwrap();
        assert_eq!(record.person_name, "Test Person");
        assert_eq!(record.desired_court_type, "Tribunal");
        assert_eq!(record.home_postcode, "E14 4PU");
        assert_eq!(record.court_name, "Central London Employment Tribunal");
        assert_eq!(record.dx_number.as_deref(), Some("141420 Bloomsbury 7"));
        assert_eq!(record.distance, 1.29);
    }

    #[test]
    fn builder_keeps_missing_dx_number_absent() {
        let courts = vec![court("No DX Court", 2.0, &["Tribunal"])];
        let record = build_result_record(&person("Tribunal"), &courts).unwrap();
        assert!(record.dx_number.is_none());
    }

    #[test]
    fn builder_reports_no_match() {
        let courts = vec![court("Close Court", 1.0, &["Crown Court"])];
        let err = build_result_record(&person("Tribunal"), &courts).unwrap_err();

        match err {
            FinderError::NoMatchingCourt {
                postcode,
                court_type,
            } => {
                assert_eq!(postcode, "E14 4PU");
                assert_eq!(court_type, "Tribunal");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
