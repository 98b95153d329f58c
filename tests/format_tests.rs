//! Formatting engine behavior across both input modes.

use remask::compile;

fn format(pattern: &str, raw: &str) -> String {
    compile(pattern).unwrap().format(raw)
}

// ---
// Contiguous mode
// ---

#[test]
fn inserts_separators_between_digit_runs() {
    assert_eq!(format("0{3}:-:0{2}", "123456"), "123-45");
}

#[test]
fn card_number_with_stray_spaces() {
    assert_eq!(
        format("0{4}:-:0{4}:-:0{4}:-:0{4}", "4111 1111 1111 1111"),
        "4111-1111-1111-1111"
    );
}

#[test]
fn separators_in_input_are_consumed_and_reinserted() {
    assert_eq!(format("0{3}:-:0{2}", "123-45"), "123-45");
    assert_eq!(format("0{2}: / :0{2}", "12 / 34"), "12 / 34");
}

#[test]
fn partial_input_yields_partial_prefix() {
    assert_eq!(format("0{3}:-:0{2}", "12"), "12");
    assert_eq!(format("0{3}:-:0{2}", "123"), "123");
    assert_eq!(format("0{3}:-:0{2}", "1234"), "123-4");
}

#[test]
fn no_dangling_separator_after_last_content() {
    // The second fragment produced nothing, so no separator is emitted.
    assert_eq!(format("0{3}:-:0{2}", "123"), "123");
}

#[test]
fn excess_input_is_dropped() {
    assert_eq!(format("0{3}:-:0{2}", "1234567890"), "123-45");
}

#[test]
fn stray_characters_are_skipped() {
    assert_eq!(format("0{3}:-:0{2}", "1a2b3c4d5"), "123-45");
}

#[test]
fn literal_interrupts_unbounded_run() {
    assert_eq!(format("0{+}x0{+}", "12x34"), "12x34");
}

#[test]
fn all_space_digit_mask_stays_contiguous() {
    assert_eq!(format("0{3}: :0{3}", "123456"), "123 456");
}

#[test]
fn empty_and_absent_input() {
    let formatter = compile("0{3}:-:0{2}").unwrap();
    assert_eq!(formatter.format(""), "");
    assert_eq!(formatter.format_opt(None), "");
    assert_eq!(formatter.format_opt(Some("123456")), "123-45");
}

// ---
// Quantifier bounds
// ---

#[test]
fn exact_quantifier_consumes_exactly_n() {
    assert_eq!(format("0{3}", "12345"), "123");
    assert_eq!(format("A{2}", "abcd"), "ab");
}

#[test]
fn unbounded_quantifier_consumes_maximal_run() {
    assert_eq!(format("0{+}", "1234567"), "1234567");
    assert_eq!(format("0{+}", "123ab"), "123");
}

// ---
// Groups
// ---

#[test]
fn longest_alternative_wins() {
    assert_eq!(format("[[0{2}|0{3}]]", "123"), "123");
    assert_eq!(format("[[0{3}|0{2}]]", "123"), "123");
}

#[test]
fn alternative_skipping_fewer_strays_wins() {
    // Both alternatives recognize exactly one character of "a50": the "5"
    // literal by skipping the stray "a", the letter class directly. The
    // letter alternative advanced less, so it wins and the digit node still
    // sees the "5".
    assert_eq!(format("[[5|A]]0", "a50"), "a5");
}

#[test]
fn satisfied_alternative_preferred_on_full_tie() {
    // Both alternatives stop at the separator after one digit; only the
    // single-digit one is satisfied, so the mask continues past the group.
    assert_eq!(format("[[0{2}|0]]:-:A", "5-x"), "5-x");
}

#[test]
fn group_choice_feeds_following_nodes() {
    assert_eq!(format("[[A{2}|0{2}]]-0", "ab-1"), "ab-1");
    assert_eq!(format("[[A{2}|0{2}]]-0", "12-3"), "12-3");
}

#[test]
fn nested_groups_match_recursively() {
    let formatter = compile("[[A[[0|x]]|0{2}]]").unwrap();
    assert_eq!(formatter.format("a5"), "a5");
    assert_eq!(formatter.format("ax"), "ax");
    assert_eq!(formatter.format("42"), "42");
}

// ---
// Manual-space mode
// ---

#[test]
fn words_are_aligned_with_fragments() {
    assert_eq!(format("A{+}: :A{+}", "John Smith"), "John Smith");
}

#[test]
fn word_internal_strays_are_dropped() {
    assert_eq!(format("A{+}: :A{+}", "John123 Smith"), "John Smith");
}

#[test]
fn trailing_whitespace_keeps_one_space() {
    assert_eq!(format("A{+}: :A{+}", "John "), "John ");
    assert_eq!(format("A{+}: :A{+}", "John   "), "John ");
    assert_eq!(format("A{+}: :A{+}", "John"), "John");
}

#[test]
fn stops_at_first_unsatisfied_word() {
    assert_eq!(format("A{3}: :A{3}", "Jo Smith"), "Jo");
}

#[test]
fn extra_words_are_dropped() {
    assert_eq!(format("A{+}: :A{+}", "one two three"), "one two");
}

#[test]
fn cyrillic_letters_match_the_letter_class() {
    assert_eq!(format("A{+}: :A{+}", "Иван Петров"), "Иван Петров");
}

// ---
// Properties
// ---

#[test]
fn formatting_is_idempotent_under_separator_round_trip() {
    let formatter = compile("0{3}:-:0{2}").unwrap();
    let masked = formatter.format("12345");
    assert_eq!(masked, "123-45");
    let stripped: String = masked.chars().filter(|c| *c != '-').collect();
    assert_eq!(formatter.format(&stripped), masked);
    assert_eq!(formatter.format(&masked), masked);
}

#[test]
fn same_pattern_compiles_to_same_behavior() {
    let a = compile("[[A|0]]{+}").unwrap_err();
    let b = compile("[[A|0]]{+}").unwrap_err();
    assert_eq!(a.message, b.message);

    let first = compile("0{2}:-:[[A|0]]").unwrap();
    let second = compile("0{2}:-:[[A|0]]").unwrap();
    for raw in ["12a", "123", "xy12-9", ""] {
        assert_eq!(first.format(raw), second.format(raw));
    }
}
