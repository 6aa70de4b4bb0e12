use hindo_core::FrequencyObservation;
use hindo_lang_japanese::FrequencyLevel;
use serde::Serialize;

#[derive(Serialize)]
struct TermFrequencies<'a> {
    term: &'a str,
    frequencies: &'a [FrequencyObservation],
}

/// One tab separated line per observation
pub fn render_lines(term: &str, observations: &[FrequencyObservation]) -> Vec<String> {
    if observations.is_empty() {
        return vec![format!("{term}\t(no frequency data)")];
    }

    observations
        .iter()
        .map(|o| {
            let rank = o.rank.map_or_else(|| "-".to_string(), |r| r.to_string());
            let level = FrequencyLevel::from_rank(o.rank);
            format!(
                "{term}\t{}\t{}\t{}\t{rank}\t{} {}",
                o.source_dictionary_id,
                o.reading,
                o.display_text,
                level.as_str(),
                "★".repeat(level.stars() as usize),
            )
            .trim_end()
            .to_string()
        })
        .collect()
}

pub fn render_json(term: &str, observations: &[FrequencyObservation]) -> serde_json::Result<String> {
    serde_json::to_string(&TermFrequencies {
        term,
        frequencies: observations,
    })
}
