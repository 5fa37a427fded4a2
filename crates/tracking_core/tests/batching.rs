use std::num::NonZeroUsize;

use pretty_assertions::assert_eq;
use tracking_core::{split_into_batches, split_with_size, BATCH_SIZE};

fn numbered_lines(count: usize) -> String {
    (0..count)
        .map(|i| format!("AA{i:09}BR"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn exactly_one_full_batch() {
    let batches = split_into_batches(&numbered_lines(1000));
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 1000);
}

#[test]
fn one_extra_line_spills_into_second_batch() {
    let batches = split_into_batches(&numbered_lines(1001));
    let sizes: Vec<_> = batches.iter().map(|b| b.len()).collect();
    assert_eq!(sizes, vec![1000, 1]);
    assert_eq!(batches[1].codes(), ["AA000001000BR".to_string()]);
}

#[test]
fn batch_count_is_ceiling_and_order_is_preserved() {
    for count in [1, 2, 999, 1000, 1001, 2500, 3000] {
        let content = numbered_lines(count);
        let batches = split_into_batches(&content);

        assert_eq!(batches.len(), count.div_ceil(BATCH_SIZE), "lines={count}");
        assert!(batches.iter().all(|b| b.len() <= BATCH_SIZE));

        let rebuilt: Vec<String> = batches.into_iter().flat_map(|b| b.into_codes()).collect();
        let original: Vec<String> = content.split('\n').map(str::to_owned).collect();
        assert_eq!(rebuilt, original);
    }
}

#[test]
fn trailing_newline_keeps_empty_line() {
    let batches = split_into_batches("AB1\nAB2\n");
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].codes(), ["AB1", "AB2", ""]);
}

#[test]
fn empty_content_is_one_empty_line() {
    let batches = split_into_batches("");
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].codes(), [""]);
}

#[test]
fn lines_are_not_trimmed() {
    let batches = split_into_batches(" AB1 \r\nAB2");
    assert_eq!(batches[0].codes(), [" AB1 \r", "AB2"]);
}

#[test]
fn custom_size_groups_contiguously() {
    let size = NonZeroUsize::new(2).unwrap();
    let batches = split_with_size("a\nb\nc\nd\ne", size);
    let grouped: Vec<Vec<String>> = batches.into_iter().map(|b| b.into_codes()).collect();
    assert_eq!(
        grouped,
        vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string()],
            vec!["e".to_string()],
        ]
    );
}
