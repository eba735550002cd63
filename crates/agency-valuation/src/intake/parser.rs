use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct SurveyRecord {
    pub(crate) question_id: String,
    pub(crate) score: Option<u8>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<SurveyRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<SurveyRow>() {
        let row = record?;
        records.push(SurveyRecord {
            question_id: row.question_id,
            score: row.score.as_deref().and_then(parse_score),
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct SurveyRow {
    #[serde(rename = "Question ID", alias = "question_id", alias = "question")]
    question_id: String,
    #[serde(
        rename = "Score",
        alias = "score",
        alias = "answer",
        alias = "answer_score",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    score: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_score(value: &str) -> Option<u8> {
    value.trim().parse::<u8>().ok()
}

#[cfg(test)]
pub(crate) fn parse_score_for_tests(value: &str) -> Option<u8> {
    parse_score(value)
}
