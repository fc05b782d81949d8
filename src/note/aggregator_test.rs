use super::*;

fn field(title: &str, content: &str, index: usize) -> Field {
    Field {
        title: title.to_string(),
        content: content.to_string(),
        index,
    }
}

#[test]
fn test_blank_fields_are_skipped_entirely() {
    let fields = vec![
        field("CC>", "", 0),
        field("PI>", "  ", 1),
        field("S>", "cough", 2),
    ];

    assert_eq!(recompute(&fields), "S> cough");
}

#[test]
fn test_fields_are_joined_in_index_order() {
    let fields = vec![
        field("CC>", "headache", 0),
        field("A>", "migraine", 1),
    ];

    assert_eq!(recompute(&fields), "CC> headache\n\nA> migraine");
}

#[test]
fn test_index_swap_changes_only_position() {
    let mut fields = vec![
        field("CC>", "headache", 0),
        field("A>", "migraine", 1),
    ];
    let before = recompute(&fields);

    fields[0].index = 1;
    fields[1].index = 0;
    let after = recompute(&fields);

    assert_eq!(before, "CC> headache\n\nA> migraine");
    assert_eq!(after, "A> migraine\n\nCC> headache");
}

#[test]
fn test_content_is_trimmed_per_field() {
    let fields = vec![field("P>", "  rest and fluids \n", 0)];

    assert_eq!(recompute(&fields), "P> rest and fluids");
}

#[test]
fn test_all_blank_yields_empty_preview() {
    let fields = vec![field("CC>", "", 0), field("PI>", "\n\t", 1)];

    assert_eq!(recompute(&fields), "");
}

#[test]
fn test_recompute_is_idempotent() {
    let fields = vec![
        field("CC>", "fever", 0),
        field("O>", "temp 38.5", 1),
    ];

    assert_eq!(recompute(&fields), recompute(&fields));
}
