use std::fs;

use assert_fs::prelude::*;
use assert_fs::TempDir;
use move_it::{Event, MoveEngine, MoveItError, MoveOutcome, MoveRequest, OperationSummary};

fn run_collect(req: &MoveRequest) -> (Result<OperationSummary, MoveItError>, Vec<Event>) {
    let engine = MoveEngine::new();
    let mut events = Vec::new();
    let res = engine.run(req, |e| events.push(e));
    (res, events)
}

fn outcomes(events: &[Event]) -> Vec<MoveOutcome> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::FileLogged { outcome } => Some(outcome.clone()),
            _ => None,
        })
        .collect()
}

fn progress(events: &[Event]) -> Vec<u8> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Progress { percent } => Some(*percent),
            _ => None,
        })
        .collect()
}

#[test]
fn moves_only_matching_extensions_case_insensitively() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    src.child("a.jpg").write_str("a").unwrap();
    src.child("b.txt").write_str("b").unwrap();
    src.child("c.JPG").write_str("c").unwrap();

    let req = MoveRequest::new(src.path(), dest.path(), "jpg");
    let (res, events) = run_collect(&req);
    let summary = res.expect("operation completes");

    assert_eq!(summary.total_matched, 2);
    assert_eq!(summary.moved_count, 2);
    assert!(summary.any_match_found);
    assert_eq!(
        outcomes(&events),
        vec![
            MoveOutcome::Moved {
                final_filename: "a.jpg".into()
            },
            MoveOutcome::Moved {
                final_filename: "c.JPG".into()
            },
        ]
    );
    assert!(src.child("b.txt").path().exists(), "b.txt must stay in source");
    assert_eq!(fs::read_to_string(dest.path().join("a.jpg")).unwrap(), "a");
    assert_eq!(fs::read_to_string(dest.path().join("c.JPG")).unwrap(), "c");
    assert!(!src.child("a.jpg").path().exists());
}

#[test]
fn rename_policy_keeps_existing_destination_file() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    dest.child("a.jpg").write_str("original").unwrap();
    src.child("a.jpg").write_str("incoming").unwrap();

    let req = MoveRequest::new(src.path(), dest.path(), "").overwrite(false);
    let (res, events) = run_collect(&req);
    assert_eq!(res.unwrap().moved_count, 1);

    assert_eq!(
        outcomes(&events),
        vec![MoveOutcome::Renamed {
            original_filename: "a.jpg".into(),
            final_filename: "a_1.jpg".into()
        }]
    );
    assert_eq!(fs::read_to_string(dest.path().join("a.jpg")).unwrap(), "original");
    assert_eq!(fs::read_to_string(dest.path().join("a_1.jpg")).unwrap(), "incoming");
}

#[test]
fn overwrite_policy_replaces_existing_destination_file() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    dest.child("a.jpg").write_str("original").unwrap();
    src.child("a.jpg").write_str("incoming").unwrap();

    let req = MoveRequest::new(src.path(), dest.path(), "").overwrite(true);
    let (res, events) = run_collect(&req);
    assert_eq!(res.unwrap().moved_count, 1);
    assert_eq!(
        outcomes(&events),
        vec![MoveOutcome::Moved {
            final_filename: "a.jpg".into()
        }]
    );
    assert_eq!(fs::read_to_string(dest.path().join("a.jpg")).unwrap(), "incoming");
    assert!(!dest.path().join("a_1.jpg").exists());
}

#[test]
fn nested_files_are_flattened_and_same_names_renamed() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    src.child("x/photo.png").write_str("x").unwrap();
    src.child("y/photo.png").write_str("y").unwrap();
    src.child("y/z/photo.png").write_str("z").unwrap();

    let req = MoveRequest::new(src.path(), dest.path(), "png");
    let (res, events) = run_collect(&req);
    let summary = res.unwrap();
    assert_eq!(summary.moved_count, 3);

    let finals: Vec<String> = outcomes(&events)
        .iter()
        .map(|o| o.final_filename().unwrap().to_string())
        .collect();
    assert_eq!(finals, vec!["photo.png", "photo_1.png", "photo_2.png"]);
    assert_eq!(fs::read_to_string(dest.path().join("photo.png")).unwrap(), "x");
    assert_eq!(fs::read_to_string(dest.path().join("photo_1.png")).unwrap(), "y");
    assert_eq!(fs::read_to_string(dest.path().join("photo_2.png")).unwrap(), "z");
    assert!(src.child("y/z").path().is_dir(), "source directories are left in place");
}

#[test]
fn n_files_reach_one_hundred_percent_monotonically() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    for i in 0..7 {
        src.child(format!("f{i}.dat")).write_str("d").unwrap();
    }

    let req = MoveRequest::new(src.path(), dest.path(), "").overwrite(true);
    let (res, events) = run_collect(&req);
    let summary = res.unwrap();
    assert_eq!(summary.total_matched, 7);
    assert_eq!(summary.moved_count, 7);
    assert!(outcomes(&events).iter().all(|o| matches!(o, MoveOutcome::Moved { .. })));

    let pct = progress(&events);
    assert_eq!(pct.len(), 7, "one progress event per processed file");
    assert!(pct.windows(2).all(|w| w[0] <= w[1]), "progress must not go backwards: {pct:?}");
    assert_eq!(pct.last(), Some(&100));
}

#[test]
fn no_match_completes_without_progress() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    src.child("a.txt").touch().unwrap();

    let req = MoveRequest::new(src.path(), dest.path(), "jpg");
    let (res, events) = run_collect(&req);
    let summary = res.unwrap();

    assert_eq!(
        summary,
        OperationSummary {
            total_matched: 0,
            moved_count: 0,
            any_match_found: false,
            ..Default::default()
        }
    );
    assert!(progress(&events).is_empty());
    assert_eq!(events, vec![Event::Completed { summary }]);
    assert!(src.child("a.txt").path().exists());
}

#[test]
fn identical_paths_are_rejected_without_side_effects() {
    let dir = TempDir::new().unwrap();
    dir.child("a.jpg").write_str("a").unwrap();

    let req = MoveRequest::new(dir.path(), dir.path(), "");
    for _ in 0..2 {
        let (res, events) = run_collect(&req);
        assert_eq!(res, Err(MoveItError::IdenticalPaths));
        assert_eq!(events.len(), 1);
        match &events[0] {
            Event::Rejected { reason } => assert!(reason.contains("identical paths"), "{reason}"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }
    assert!(dir.child("a.jpg").path().exists());
}

#[test]
fn each_validation_failure_has_a_distinct_reason() {
    let td = TempDir::new().unwrap();
    let existing = td.child("exists");
    existing.create_dir_all().unwrap();
    let missing = td.path().join("missing");

    let reqs = [
        MoveRequest::new("", existing.path(), ""),
        MoveRequest::new(existing.path(), existing.path(), ""),
        MoveRequest::new(&missing, existing.path(), ""),
        MoveRequest::new(existing.path(), &missing, ""),
    ];
    let mut reasons: Vec<String> = reqs
        .iter()
        .map(|r| {
            let (_, events) = run_collect(r);
            match events.into_iter().next() {
                Some(Event::Rejected { reason }) => reason,
                other => panic!("expected Rejected, got {other:?}"),
            }
        })
        .collect();
    reasons.sort();
    reasons.dedup();
    assert_eq!(reasons.len(), 4);
    assert!(!missing.exists(), "rejection must not create directories");
}

#[test]
fn per_file_failure_does_not_stop_the_batch() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    src.child("a.txt").write_str("a").unwrap();
    src.child("b.txt").write_str("b").unwrap();
    // A directory squatting on the destination name makes the overwrite of b.txt fail.
    dest.child("b.txt/keep").write_str("k").unwrap();
    src.child("c.txt").write_str("c").unwrap();

    let req = MoveRequest::new(src.path(), dest.path(), "txt").overwrite(true);
    let (res, events) = run_collect(&req);
    let summary = res.unwrap();

    assert_eq!(summary.total_matched, 3);
    assert_eq!(summary.moved_count, 2);
    assert_eq!(summary.failed_count, 1);
    let outs = outcomes(&events);
    assert!(matches!(&outs[1], MoveOutcome::Failed { filename, .. } if filename == "b.txt"));
    assert!(src.child("b.txt").path().exists(), "failed file stays at source");
    assert!(dest.path().join("c.txt").exists(), "files after the failure still move");
    assert_eq!(progress(&events), vec![33, 33, 67]);
}

#[test]
fn files_are_processed_in_traversal_order() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    src.child("b/2.log").write_str("").unwrap();
    src.child("a.log").touch().unwrap();
    src.child("b/1.log").write_str("").unwrap();
    src.child("c.log").touch().unwrap();

    let req = MoveRequest::new(src.path(), dest.path(), "log");
    let (_, events) = run_collect(&req);
    let names: Vec<String> = outcomes(&events)
        .iter()
        .map(|o| o.filename().to_string())
        .collect();
    assert_eq!(names, vec!["a.log", "1.log", "2.log", "c.log"]);
}

#[test]
fn blank_filter_entry_moves_every_file() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    src.child("a.jpg").write_str("a").unwrap();
    src.child("b.txt").write_str("b").unwrap();

    let req = MoveRequest::new(src.path(), dest.path(), "jpg, ");
    let (res, _) = run_collect(&req);
    let summary = res.unwrap();
    assert_eq!(summary.total_matched, 2);
    assert_eq!(summary.moved_count, 2);
    assert!(dest.path().join("b.txt").exists());
}
