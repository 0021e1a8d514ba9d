use crate::core::{
    ConfigProvider, CourtLookup, Person, Pipeline, ReportBundle, RowOutcome, Storage,
};
use crate::domain::services;
use crate::utils::error::{FinderError, Result};
use crate::utils::validation::validate_postcode;
use std::io::Write;
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};

pub struct CourtLookupPipeline<S: Storage, C: ConfigProvider, L: CourtLookup> {
    storage: S,
    config: C,
    lookup: L,
}

impl<S: Storage, C: ConfigProvider, L: CourtLookup> CourtLookupPipeline<S, C, L> {
    pub fn new(storage: S, config: C, lookup: L) -> Self {
        Self {
            storage,
            config,
            lookup,
        }
    }

    async fn resolve_person(&self, person: Person) -> RowOutcome {
        // 先驗證郵遞區號，省一次必然失敗的 API 呼叫
        if let Err(e) = validate_postcode("home_postcode", &person.home_postcode) {
            tracing::warn!(
                "Bad postcode '{}' for {}: {}",
                person.home_postcode,
                person.person_name,
                e
            );
            return RowOutcome::FetchFailed {
                person,
                message: e.to_string(),
            };
        }

        match self.lookup.nearest_courts(&person.home_postcode).await {
            Ok(courts) => match services::build_result_record(&person, &courts) {
                Ok(record) => RowOutcome::Matched(record),
                Err(FinderError::NoMatchingCourt { .. }) => {
                    tracing::warn!(
                        "No {} court near {} for {}",
                        person.looking_for_court_type,
                        person.home_postcode,
                        person.person_name
                    );
                    RowOutcome::NoMatchFound { person }
                }
                Err(e) => RowOutcome::FetchFailed {
                    person,
                    message: e.to_string(),
                },
            },
            Err(e) => {
                tracing::warn!(
                    "Lookup failed for {} ({}): {}",
                    person.person_name,
                    person.home_postcode,
                    e
                );
                RowOutcome::FetchFailed {
                    person,
                    message: e.to_string(),
                }
            }
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, L: CourtLookup> Pipeline for CourtLookupPipeline<S, C, L> {
    async fn extract(&self) -> Result<Vec<Person>> {
        tracing::debug!("Reading people file: {}", self.config.people_file());
        let raw = self.storage.read_file(self.config.people_file()).await?;

        let mut reader = csv::Reader::from_reader(raw.as_slice());
        let mut people = Vec::new();
        for row in reader.deserialize() {
            let person: Person = row?;
            people.push(person);
        }

        if people.is_empty() {
            tracing::warn!("People file {} has no data rows", self.config.people_file());
        }

        Ok(people)
    }

    async fn transform(&self, people: Vec<Person>) -> Result<ReportBundle> {
        let total = people.len();
        let mut outcomes = Vec::with_capacity(total);

        // 依序為每個人呼叫 API（回應列表已按距離排序）
        for (index, person) in people.into_iter().enumerate() {
            tracing::debug!(
                "Lookup {}/{}: {} ({})",
                index + 1,
                total,
                person.person_name,
                person.home_postcode
            );

            let outcome = self.resolve_person(person).await;
            outcomes.push(outcome);

            // 避免對公開端點的請求過於頻繁
            if index + 1 < total {
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            }
        }

        let csv_output = render_csv(&outcomes)?;
        let text_output = render_text(&outcomes);

        Ok(ReportBundle {
            outcomes,
            csv_output,
            text_output,
        })
    }

    async fn load(&self, bundle: ReportBundle) -> Result<String> {
        // 每人一個文字區塊，stdout 是主要輸出
        print!("{}", bundle.text_output);

        tracing::info!(
            "{}/{} people matched to a court",
            bundle.matched_count(),
            bundle.outcomes.len()
        );

        let report = serde_json::json!({
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "outcomes": bundle.outcomes,
        });

        // 打包 CSV 與 JSON 報告
        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            zip.start_file::<_, ()>("results.csv", FileOptions::default())?;
            zip.write_all(bundle.csv_output.as_bytes())?;

            zip.start_file::<_, ()>("results.json", FileOptions::default())?;
            let json_data = serde_json::to_string_pretty(&report)?;
            zip.write_all(json_data.as_bytes())?;

            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        let output_path = Path::new(self.config.output_path())
            .join("court_results.zip")
            .to_string_lossy()
            .to_string();

        tracing::debug!("Writing report bundle ({} bytes) to storage", zip_data.len());
        self.storage.write_file(&output_path, &zip_data).await?;

        Ok(output_path)
    }
}

/// Machine-readable report: one CSV row per matched person. Failed rows are
/// kept out of the CSV and reported in results.json instead.
fn render_csv(outcomes: &[RowOutcome]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for outcome in outcomes {
        if let RowOutcome::Matched(record) = outcome {
            writer.serialize(record)?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FinderError::ProcessingError {
            message: format!("CSV buffer error: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| FinderError::ProcessingError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

/// Human-readable report: one text block per person.
fn render_text(outcomes: &[RowOutcome]) -> String {
    let mut output = String::new();

    for outcome in outcomes {
        output.push_str("------------\n");
        match outcome {
            RowOutcome::Matched(record) => {
                output.push_str(&format!("Name: {}\n", record.person_name));
                output.push_str(&format!(
                    "Type of court desired: {}\n",
                    record.desired_court_type
                ));
                output.push_str(&format!("Home postcode: {}\n", record.home_postcode));
                output.push_str(&format!("Court Name: {}\n", record.court_name));
                output.push_str(&format!(
                    "dx_number: {}\n",
                    record.dx_number.as_deref().unwrap_or("N/A")
                ));
                output.push_str(&format!("Distance from home: {}\n", record.distance));
            }
            RowOutcome::NoMatchFound { person } => {
                output.push_str(&format!("Name: {}\n", person.person_name));
                output.push_str(&format!(
                    "Type of court desired: {}\n",
                    person.looking_for_court_type
                ));
                output.push_str(&format!("Home postcode: {}\n", person.home_postcode));
                output.push_str("No court of the desired type was found nearby\n");
            }
            RowOutcome::FetchFailed { person, message } => {
                output.push_str(&format!("Name: {}\n", person.person_name));
                output.push_str(&format!("Home postcode: {}\n", person.home_postcode));
                output.push_str(&format!("Lookup failed: {}\n", message));
            }
        }
        output.push_str("------------\n\n");
    }

    output
}
