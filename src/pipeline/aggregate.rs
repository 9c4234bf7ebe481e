//! Result Aggregator: raw measurements to ranked records.

use super::RawWorkerResult;
use crate::error::Error;
use crate::snapshot::AnalysisRecord;

/// Parsed records, largest first, and the measurements that were dropped.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub records: Vec<AnalysisRecord>,
    pub dropped: Vec<Error>,
}

/// Parses every result for `language` and ranks the records by code lines.
///
/// A result that does not parse yields no record at all; its error is kept in
/// `dropped` for reporting. Records with equal code lines keep their relative
/// order.
pub fn aggregate(results: &[RawWorkerResult], language: &str) -> Aggregation {
    let mut aggregation = Aggregation::default();
    for result in results {
        match AnalysisRecord::from_report(&result.url, &result.raw_output, language) {
            Ok(record) => aggregation.records.push(record),
            Err(e) => aggregation.dropped.push(e),
        }
    }
    rank(&mut aggregation.records);
    aggregation
}

/// Sorts records by code lines, descending.
pub fn rank(records: &mut [AnalysisRecord]) {
    records.sort_by(|a, b| b.code_lines().cmp(&a.code_lines()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::fixtures::report;

    fn raw(url: &str, output: String) -> RawWorkerResult {
        RawWorkerResult {
            raw_output: output,
            url: url.to_string(),
        }
    }

    #[test]
    fn test_ranking_by_code_lines() {
        let results = vec![
            raw("https://github.com/a/ten", report("Kotlin", 10)),
            raw("https://github.com/a/five-hundred", report("Kotlin", 500)),
            raw("https://github.com/a/fifty", report("Kotlin", 50)),
        ];

        let aggregation = aggregate(&results, "Kotlin");

        let code: Vec<u64> = aggregation.records.iter().map(|r| r.code_lines()).collect();
        assert_eq!(code, vec![500, 50, 10]);
        assert!(aggregation.dropped.is_empty());
    }

    #[test]
    fn test_unparsable_results_are_dropped() {
        let results = vec![
            raw("https://github.com/a/good", report("Kotlin", 10)),
            raw("https://github.com/a/empty", String::new()),
            raw("https://github.com/a/java", report("Java", 99)),
        ];

        let aggregation = aggregate(&results, "Kotlin");

        assert_eq!(aggregation.records.len(), 1);
        assert_eq!(aggregation.records[0].url, "https://github.com/a/good");
        assert_eq!(aggregation.dropped.len(), 2);
        let messages: Vec<String> = aggregation.dropped.iter().map(|e| e.to_string()).collect();
        assert!(messages[0].contains("https://github.com/a/empty"));
        assert!(messages[1].contains("https://github.com/a/java"));
    }

    #[test]
    fn test_language_selects_stats() {
        let results = vec![raw("https://github.com/a/java", report("Java", 99))];
        let aggregation = aggregate(&results, "Java");
        assert_eq!(aggregation.records[0].code_lines(), 99);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let results = vec![
            raw("https://github.com/a/first", report("Kotlin", 5)),
            raw("https://github.com/a/second", report("Kotlin", 5)),
        ];
        let aggregation = aggregate(&results, "Kotlin");
        assert_eq!(aggregation.records[0].url, "https://github.com/a/first");
    }
}
