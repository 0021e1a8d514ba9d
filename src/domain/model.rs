use serde::{Deserialize, Serialize};

/// One row of the people CSV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub person_name: String,
    pub home_postcode: String,
    pub looking_for_court_type: String,
}

/// A court as returned by the courts and tribunals finder API.
///
/// The API returns many more fields (lat, lon, slug, address, areas_of_law, ...);
/// only the ones used downstream are kept and the rest are ignored on
/// deserialization. `dx_number` is not always returned and `types` can be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Court {
    pub name: String,
    #[serde(default)]
    pub dx_number: Option<String>,
    pub distance: f64,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Flat join of a person with their nearest court of the desired type.
/// Fields are copied verbatim from the two sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    pub person_name: String,
    pub desired_court_type: String,
    pub home_postcode: String,
    pub court_name: String,
    pub dx_number: Option<String>,
    pub distance: f64,
}

/// Per-person outcome. A failed lookup never aborts the batch; it is recorded
/// here and reported alongside the successful rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RowOutcome {
    Matched(ResultRecord),
    NoMatchFound { person: Person },
    FetchFailed { person: Person, message: String },
}

impl RowOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, RowOutcome::Matched(_))
    }

    pub fn person_name(&self) -> &str {
        match self {
            RowOutcome::Matched(record) => &record.person_name,
            RowOutcome::NoMatchFound { person } | RowOutcome::FetchFailed { person, .. } => {
                &person.person_name
            }
        }
    }
}

/// Transform output handed to the load phase.
#[derive(Debug, Clone)]
pub struct ReportBundle {
    pub outcomes: Vec<RowOutcome>,
    pub csv_output: String,
    pub text_output: String,
}

impl ReportBundle {
    pub fn matched_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_matched()).count()
    }
}
