use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const FOX: &str = "The quick brown fox jumps over the lazy dog.";
const WIZARDS: &str = "The five boxing wizards jump quickly.";

#[test]
fn test_template_overhead_matches_markers() {
    assert_eq!(TEMPLATE_OVERHEAD, 20);
    assert_eq!(char_len(&format_stdout_stderr("", "", 1000)), TEMPLATE_OVERHEAD);
}

#[test]
fn test_everything_fits() {
    let expected = format!("[stdout]\n{FOX}\n\n[stderr]\n{WIZARDS}");
    let actual = format_stdout_stderr(FOX, WIZARDS, 1000);
    assert_eq!(actual, expected);
    assert!(actual.len() < 1000);
}

#[test]
fn test_both_streams_trimmed_equally() {
    let actual = format_stdout_stderr(FOX, WIZARDS, 60);
    assert_eq!(
        actual,
        "[stdout]\ns over the lazy dog.\n\n[stderr]\nizards jump quickly."
    );
    assert_eq!(actual.len(), 60);
}

#[test]
fn test_stderr_borrows_from_short_stdout() {
    let actual = format_stdout_stderr("empty", WIZARDS, 40);
    assert_eq!(actual, "[stdout]\nempty\n\n[stderr]\ns jump quickly.");
    assert_eq!(actual.len(), 40);
}

#[test]
fn test_stdout_borrows_from_short_stderr() {
    let actual = format_stdout_stderr(FOX, "empty", 40);
    assert_eq!(actual, "[stdout]\nr the lazy dog.\n\n[stderr]\nempty");
    assert_eq!(actual.len(), 40);
}

#[test]
fn test_no_room_for_markers() {
    assert_eq!(format_stdout_stderr(FOX, WIZARDS, 4), "");
    assert_eq!(format_stdout_stderr(FOX, WIZARDS, 0), "");
    assert_eq!(format_stdout_stderr(FOX, WIZARDS, 18), "");
    assert_eq!(format_stdout_stderr(FOX, WIZARDS, TEMPLATE_OVERHEAD), "");
}

#[test]
fn test_empty_streams_yield_bare_template() {
    assert_eq!(format_stdout_stderr("", "", 1000), "[stdout]\n\n\n[stderr]\n");
    assert_eq!(
        format_stdout_stderr("", "", TEMPLATE_OVERHEAD + 1),
        "[stdout]\n\n\n[stderr]\n"
    );
}

#[test]
fn test_single_char_budget_goes_to_stdout() {
    assert_eq!(
        format_stdout_stderr(FOX, WIZARDS, TEMPLATE_OVERHEAD + 1),
        "[stdout]\n.\n\n[stderr]\n"
    );
}

#[test]
fn test_odd_budget_fills_exactly() {
    let actual = format_stdout_stderr(FOX, WIZARDS, 61);
    assert_eq!(actual.len(), 61);
    assert!(actual.starts_with("[stdout]\nps over the lazy dog.\n\n"));
}

#[test]
fn test_multibyte_content_counts_chars() {
    let stdout = "☕".repeat(30);
    let stderr = "é".repeat(30);
    let actual = format_stdout_stderr(&stdout, &stderr, 40);
    assert_eq!(char_len(&actual), 40);
    assert_eq!(
        actual,
        format!("[stdout]\n{}\n\n[stderr]\n{}", "☕".repeat(10), "é".repeat(10))
    );
}

#[test]
fn test_available_budget() {
    assert_eq!(available_budget(0), None);
    assert_eq!(available_budget(TEMPLATE_OVERHEAD), None);
    assert_eq!(available_budget(TEMPLATE_OVERHEAD + 1), Some(1));
    assert_eq!(available_budget(TELEMETRY_MESSAGE_MAX_LEN), Some(3180));
}

fn split_summary(summary: &str) -> (&str, &str) {
    let body = summary
        .strip_prefix(STDOUT_MARKER)
        .expect("summary starts with the stdout marker");
    body.split_once(STDERR_MARKER)
        .expect("summary contains the stderr marker")
}

proptest! {
    #[test]
    fn test_summary_never_exceeds_max_length(
        stdout in ".{0,200}",
        stderr in ".{0,200}",
        max_length in 0usize..500,
    ) {
        let summary = format_stdout_stderr(&stdout, &stderr, max_length);
        prop_assert!(char_len(&summary) <= max_length);
        if max_length <= TEMPLATE_OVERHEAD {
            prop_assert!(summary.is_empty());
        }
    }

    #[test]
    fn test_summary_keeps_suffixes(
        stdout in "[a-z \\n]{0,120}",
        stderr in "[a-z \\n]{0,120}",
        max_length in (TEMPLATE_OVERHEAD + 1)..300,
    ) {
        let summary = format_stdout_stderr(&stdout, &stderr, max_length);
        let (stdout_tail, stderr_tail) = split_summary(&summary);
        prop_assert!(stdout.ends_with(stdout_tail));
        prop_assert!(stderr.ends_with(stderr_tail));
    }

    #[test]
    fn test_untruncated_when_everything_fits(
        stdout in ".{0,100}",
        stderr in ".{0,100}",
        slack in 0usize..100,
    ) {
        let max_length = TEMPLATE_OVERHEAD + char_len(&stdout) + char_len(&stderr) + slack + 1;
        let summary = format_stdout_stderr(&stdout, &stderr, max_length);
        prop_assert_eq!(summary, format!("[stdout]\n{stdout}\n\n[stderr]\n{stderr}"));
    }

    #[test]
    fn test_full_budget_used_when_content_overflows(
        stdout in "[a-z]{0,150}",
        stderr in "[a-z]{0,150}",
        max_length in (TEMPLATE_OVERHEAD + 1)..200,
    ) {
        prop_assume!(TEMPLATE_OVERHEAD + stdout.len() + stderr.len() > max_length);
        let summary = format_stdout_stderr(&stdout, &stderr, max_length);
        prop_assert_eq!(summary.len(), max_length);
    }

    #[test]
    fn test_allocation_respects_budget_and_lengths(
        stdout_len in 0usize..1000,
        stderr_len in 0usize..1000,
        available in 0usize..1000,
    ) {
        let allocation = allocate(stdout_len, stderr_len, available);
        prop_assert!(allocation.total() <= available);
        prop_assert!(allocation.stdout <= stdout_len);
        prop_assert!(allocation.stderr <= stderr_len);
        prop_assert_eq!(allocation.total(), available.min(stdout_len + stderr_len));
    }
}
