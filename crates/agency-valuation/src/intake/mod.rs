mod mapping;
mod parser;

use crate::assessment::domain::AnswerSet;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum SurveyImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    ScoreOutOfRange { question_id: String, score: u8 },
}

impl std::fmt::Display for SurveyImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurveyImportError::Io(err) => write!(f, "failed to read survey export: {}", err),
            SurveyImportError::Csv(err) => write!(f, "invalid survey CSV data: {}", err),
            SurveyImportError::ScoreOutOfRange { question_id, score } => write!(
                f,
                "survey export scores {} at {} which is outside the 0-5 option scale",
                question_id, score
            ),
        }
    }
}

impl std::error::Error for SurveyImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurveyImportError::Io(err) => Some(err),
            SurveyImportError::Csv(err) => Some(err),
            SurveyImportError::ScoreOutOfRange { .. } => None,
        }
    }
}

impl From<std::io::Error> for SurveyImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for SurveyImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Outcome of a survey import: the usable answers plus the export rows
/// whose identifiers could not be mapped to a catalog question.
#[derive(Debug)]
pub struct SurveyImport {
    pub answers: AnswerSet,
    pub skipped: Vec<String>,
}

/// Hydrates an answer set from a survey-tool CSV export. Unknown question
/// ids are skipped (and reported) so exports carrying extra rows still
/// import; later rows for the same question win.
pub struct SurveyCsvImporter;

impl SurveyCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<SurveyImport, SurveyImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<SurveyImport, SurveyImportError> {
        let mut answers = AnswerSet::new();
        let mut skipped = Vec::new();

        for record in parser::parse_records(reader)? {
            let Some(question_id) = mapping::catalog_id_for(&record.question_id) else {
                skipped.push(record.question_id);
                continue;
            };

            // A row without a parseable score is an unanswered question.
            let Some(score) = record.score else {
                continue;
            };

            if score > 5 {
                return Err(SurveyImportError::ScoreOutOfRange {
                    question_id: question_id.to_string(),
                    score,
                });
            }

            answers.insert(question_id.to_string(), score);
        }

        Ok(SurveyImport { answers, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn importer_maps_legacy_ids_and_skips_unknown_rows() {
        let csv = "question_id,score\n\
ops_q1,4\n\
fin_recurring_revenue,3\n\
mystery_question,5\n";

        let import = SurveyCsvImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(
            import.answers.get("ops_process_documentation").copied(),
            Some(4)
        );
        assert_eq!(import.answers.get("fin_recurring_revenue").copied(), Some(3));
        assert_eq!(import.skipped, vec!["mystery_question".to_string()]);
    }

    #[test]
    fn importer_treats_blank_scores_as_unanswered() {
        let csv = "question_id,score\nops_q1,\nops_q2,2\n";
        let import = SurveyCsvImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert!(!import.answers.contains_key("ops_process_documentation"));
        assert_eq!(
            import.answers.get("ops_delivery_consistency").copied(),
            Some(2)
        );
    }

    #[test]
    fn importer_rejects_scores_above_the_option_scale() {
        let csv = "question_id,score\nops_q1,9\n";
        let error =
            SurveyCsvImporter::from_reader(Cursor::new(csv)).expect_err("expected range error");

        match error {
            SurveyImportError::ScoreOutOfRange { question_id, score } => {
                assert_eq!(question_id, "ops_process_documentation");
                assert_eq!(score, 9);
            }
            other => panic!("expected score range error, got {other:?}"),
        }
    }

    #[test]
    fn later_rows_win_for_duplicate_questions() {
        let csv = "question_id,score\nai_q1,1\nai_tool_adoption,4\n";
        let import = SurveyCsvImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(import.answers.get("ai_tool_adoption").copied(), Some(4));
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = SurveyCsvImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");
        match error {
            SurveyImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn score_parsing_tolerates_whitespace_and_garbage() {
        assert_eq!(parser::parse_score_for_tests(" 3 "), Some(3));
        assert_eq!(parser::parse_score_for_tests("three"), None);
    }

    #[test]
    fn mapping_recognizes_normalized_variants() {
        assert_eq!(
            mapping::lookup_for_tests("OPS_Q1"),
            Some("ops_process_documentation")
        );
        assert_eq!(
            mapping::lookup_for_tests("seo-q2"),
            Some("svc_seo_offer_evolution")
        );
        assert_eq!(mapping::lookup_for_tests("unknown"), None);
    }
}
