use move_it::{ExtensionSet, matches};

const NAMES: &[&str] = &[
    "a.jpg", "B.JPG", "c.Jpeg", "notes.txt", "archive.tar.gz", "README", ".bashrc", "mixjpg",
];

#[test]
fn empty_set_matches_all_names() {
    let set = ExtensionSet::parse::<&str>(&[]);
    assert!(NAMES.iter().all(|n| matches(n, &set)));
}

#[test]
fn matches_iff_lowercase_name_ends_with_lowercase_member() {
    let raw = ["JPG", " gz ", "rc"];
    let set = ExtensionSet::parse(&raw);
    for name in NAMES {
        let lower = name.to_lowercase();
        let expected = raw
            .iter()
            .any(|e| lower.ends_with(e.trim().to_lowercase().as_str()));
        assert_eq!(matches(name, &set), expected, "mismatch for {name}");
    }
}

#[test]
fn filter_text_like_the_input_field() {
    let set = ExtensionSet::from_filter_text("jpg, mp3");
    assert!(matches("holiday.JPG", &set));
    assert!(matches("track.mp3", &set));
    assert!(!matches("track.wav", &set));
}

#[test]
fn dot_prefixed_member_excludes_partial_words() {
    let set = ExtensionSet::from_filter_text(".jpg");
    assert!(matches("a.jpg", &set));
    assert!(!matches("mixjpg", &set));
}

#[test]
fn trailing_blank_entry_matches_every_name() {
    let set = ExtensionSet::from_filter_text("jpg, ");
    assert!(NAMES.iter().all(|n| matches(n, &set)));
}
