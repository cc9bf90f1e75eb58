use latency_breakdown::aggregator::{
    aggregate, average_by_timestamp, normalize, AggregatorConfig, DedupPolicy,
};
use latency_breakdown::parser::{parse_str, Record, Trace, TraceFormat};
use latency_breakdown::utils::config::STAGE_NAMES;
use latency_breakdown::utils::error::AggregateError;
use pretty_assertions::assert_eq;

fn breakdown_log(lines: usize) -> String {
    (1..=lines)
        .map(|i| {
            let i = i as f64;
            format!(
                "{}\t{}\t{}\t0\t0\t0\t0\t{}\n",
                i,
                i * 2.0,
                i * 0.5,
                1.0
            )
        })
        .collect()
}

#[test]
fn test_axis_length_and_bounds() {
    for n in [1, 2, 7, 50] {
        let trace = parse_str(&breakdown_log(n), TraceFormat::Breakdown { fields: 8 }).unwrap();
        let plot = aggregate(&trace, &AggregatorConfig::stage_breakdown()).unwrap();

        assert_eq!(plot.axis.len(), n);
        assert!(plot.axis[0] >= 0.0);
        assert_eq!(*plot.axis.last().unwrap(), 100.0);
        assert!(plot.axis.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_stage_series_sum_to_totals() {
    let trace = parse_str(&breakdown_log(10), TraceFormat::Breakdown { fields: 8 }).unwrap();
    let plot = aggregate(&trace, &AggregatorConfig::stage_breakdown()).unwrap();

    let totals = plot.totals();
    for (i, record) in trace.records().iter().enumerate() {
        assert_eq!(totals[i], record.total());
    }

    let bands = plot.stack_bands();
    assert_eq!(bands.len(), 8);
    assert_eq!(bands.last().unwrap().upper, totals);
    assert_eq!(bands[0].lower, vec![0.0; 10]);
    for pair in bands.windows(2) {
        assert_eq!(pair[0].upper, pair[1].lower);
    }
}

#[test]
fn test_stage_labels() {
    let trace = parse_str(&breakdown_log(2), TraceFormat::Breakdown { fields: 8 }).unwrap();
    let plot = aggregate(&trace, &AggregatorConfig::stage_breakdown()).unwrap();

    let labels: Vec<&str> = plot
        .series
        .iter()
        .filter_map(|s| s.label.as_deref())
        .collect();
    assert_eq!(labels, STAGE_NAMES.to_vec());

    let unlabelled = AggregatorConfig::stage_breakdown().with_stage_labels(false);
    let plot = aggregate(&trace, &unlabelled).unwrap();
    assert!(!plot.has_labels());
}

#[test]
fn test_averaging_deduplication() {
    let trace: Trace = vec![
        Record::new(1.0, vec![10.0]),
        Record::new(1.0, vec![20.0]),
        Record::new(2.0, vec![5.0]),
    ]
    .into_iter()
    .collect();

    let merged = average_by_timestamp(&trace);
    assert_eq!(merged.timestamps(), vec![1.0, 2.0]);

    let values: Vec<f64> = merged.records().iter().map(|r| r.values[0]).collect();
    assert_eq!(values, vec![15.0, 5.0]);
}

#[test]
fn test_timestamped_preset_end_to_end() {
    let trace = parse_str(
        "1\t10000\n1\t20000\n2\t5000\n",
        TraceFormat::Timestamped { divisor: 1000.0 },
    )
    .unwrap();
    let plot = aggregate(&trace, &AggregatorConfig::timestamped_latency()).unwrap();

    assert_eq!(plot.axis, vec![1.0, 2.0]);
    assert_eq!(plot.series.len(), 1);
    assert_eq!(plot.series[0].values, vec![15.0, 5.0]);
}

#[test]
fn test_normalization() {
    assert_eq!(
        normalize(&[1.0, 2.0, 3.0, 4.0], 100.0).unwrap(),
        vec![25.0, 50.0, 75.0, 100.0]
    );
}

#[test]
fn test_single_record_normalizes_to_scale() {
    let trace: Trace = vec![Record::new(1.0, vec![3.0])].into_iter().collect();
    let plot = aggregate(&trace, &AggregatorConfig::single_latency()).unwrap();
    assert_eq!(plot.axis, vec![100.0]);

    let plot = aggregate(&trace, &AggregatorConfig::median_blocks()).unwrap();
    assert_eq!(plot.axis, vec![300.0]);
}

#[test]
fn test_single_record_at_zero_fails() {
    let trace: Trace = vec![Record::new(0.0, vec![3.0])].into_iter().collect();
    let result = aggregate(&trace, &AggregatorConfig::single_latency());
    assert_eq!(result, Err(AggregateError::ZeroTimestamp));
}

#[test]
fn test_empty_trace_fails() {
    let result = aggregate(&Trace::new(), &AggregatorConfig::stage_breakdown());
    assert_eq!(result, Err(AggregateError::EmptyTrace));
}

#[test]
fn test_median_blocks_on_throughput_axis() {
    let input = "<<<\nMedian: 5\nMedian: 3\n>>>\n<<<\nMedian: 4\n>>>\n";
    let trace = parse_str(input, TraceFormat::MedianBlocks).unwrap();
    let plot = aggregate(&trace, &AggregatorConfig::median_blocks()).unwrap();

    assert_eq!(plot.axis, vec![150.0, 300.0]);
    assert_eq!(plot.series[0].values, vec![8.0, 4.0]);
}

#[test]
fn test_dedup_policy_on_breakdown() {
    let trace: Trace = vec![
        Record::new(1.0, vec![1.0, 3.0]),
        Record::new(1.0, vec![3.0, 5.0]),
    ]
    .into_iter()
    .collect();
    let config = AggregatorConfig::bottleneck_breakdown(2).with_dedup(DedupPolicy::AverageByTimestamp);
    let plot = aggregate(&trace, &config).unwrap();

    assert_eq!(plot.axis, vec![100.0]);
    assert_eq!(plot.series[0].values, vec![2.0]);
    assert_eq!(plot.series[1].values, vec![4.0]);
}
