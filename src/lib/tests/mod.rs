use super::errors::Error;
use super::helpers::*;
use super::rewriter::*;
use super::types::*;
use std::fs::{read, write, File};
use std::io::prelude::*;
use std::io::ErrorKind;
use std::path::Path;
use tempfile::tempdir;

const WRONG_ID: &str = "com.example.disruptonApp";
const RIGHT_ID: &str = "com.disrupton.app";

fn default_substitution() -> Substitution {
    Substitution::new(WRONG_ID, RIGHT_ID).unwrap()
}

#[test]
fn test_load_defaults() {
    let defaults = load_defaults().unwrap();

    assert_eq!(
        defaults.project_path,
        std::path::PathBuf::from("ios/Runner.xcodeproj/project.pbxproj")
    );
    assert_eq!(defaults.from, WRONG_ID);
    assert_eq!(defaults.to, RIGHT_ID);
}

#[test]
fn test_apply_correctness() {
    let (output, count) = default_substitution().apply(include_str!("project_test.pbxproj.in"));

    assert_eq!(count, 2);
    assert_eq!(output, include_str!("project_fixed.pbxproj.in"));
}

#[test]
fn test_apply_idempotent() {
    let substitution = default_substitution();
    let inputs = [
        include_str!("project_test.pbxproj.in"),
        "com.example.disruptonAppcom.example.disruptonApp",
        "",
        "nothing to see here",
    ];

    for input in inputs.iter() {
        let (once, _) = substitution.apply(input);
        let (twice, count) = substitution.apply(&once);
        assert_eq!(once, twice);
        assert_eq!(count, 0);
    }
}

#[test]
fn test_apply_leaves_no_occurrence() {
    let (output, _) = default_substitution().apply(&WRONG_ID.repeat(5));

    assert!(!output.contains(WRONG_ID));
    assert_eq!(output, RIGHT_ID.repeat(5));
}

#[test]
fn test_apply_preserves_surrounding_text() {
    let input = "a com.example.disruptonApp b\ncom.example.disruptonApp;c";
    let (output, count) = default_substitution().apply(input);

    assert_eq!(count, 2);
    assert_eq!(
        input.split(WRONG_ID).collect::<Vec<_>>(),
        output.split(RIGHT_ID).collect::<Vec<_>>()
    );
}

#[test]
fn test_apply_no_match_is_noop() {
    let input = "PRODUCT_BUNDLE_IDENTIFIER = com.other.app;\n";
    let (output, count) = default_substitution().apply(input);

    assert_eq!(count, 0);
    assert_eq!(output, input);
}

#[test]
fn test_apply_dots_are_literal() {
    let input = "comXexampleXdisruptonApp com-example-disruptonApp";
    let (output, count) = default_substitution().apply(input);

    assert_eq!(count, 0);
    assert_eq!(output, input);
}

#[test]
fn test_apply_replacement_is_literal() {
    let substitution = Substitution::new("com.example.app", "com.$1.${name}").unwrap();
    let (output, count) = substitution.apply("id = com.example.app;");

    assert_eq!(count, 1);
    assert_eq!(output, "id = com.$1.${name};");
}

#[test]
fn test_empty_pattern() {
    assert!(Substitution::new("", RIGHT_ID).is_err());
}

#[test]
fn test_substitution_getters() {
    let substitution = default_substitution();

    assert_eq!(substitution.from(), WRONG_ID);
    assert_eq!(substitution.to(), RIGHT_ID);
}

#[test]
fn test_io_error_kinds() {
    let path = Path::new("/src/app/ios/Runner.xcodeproj/project.pbxproj");

    let denied = std::io::Error::new(ErrorKind::PermissionDenied, "denied");
    match Error::from_io(path, &denied) {
        Error::PermissionDenied(msg) => {
            assert!(msg.contains("Runner.xcodeproj/project.pbxproj"));
            assert!(msg.contains("denied"));
        }
        other => panic!("Expected PermissionDenied, got {:?}", other),
    }
    match Error::from(denied) {
        Error::PermissionDenied(msg) => assert_eq!(msg, "denied"),
        other => panic!("Expected PermissionDenied, got {:?}", other),
    }

    for kind in [ErrorKind::Other, ErrorKind::WriteZero].iter() {
        let failed = std::io::Error::new(*kind, "no space left");
        match Error::from_io(path, &failed) {
            Error::Io(msg) => {
                assert!(msg.contains("Runner.xcodeproj/project.pbxproj"));
                assert!(msg.contains("no space left"));
            }
            other => panic!("Expected Io, got {:?}", other),
        }
        match Error::from(failed) {
            Error::Io(msg) => assert_eq!(msg, "no space left"),
            other => panic!("Expected Io, got {:?}", other),
        }
    }
}

#[test]
fn test_fix_bundle_id() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.pbxproj");

    write(&path, include_str!("project_test.pbxproj.in")).unwrap();

    let outcome = fix_bundle_id(&path, &default_substitution()).unwrap();

    assert_eq!(outcome.path, path);
    assert_eq!(outcome.replacements, 2);
    assert!(outcome.changed());

    let mut content = String::new();
    File::open(&path)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert_eq!(content, include_str!("project_fixed.pbxproj.in"));

    dir.close().unwrap();
}

#[test]
fn test_fix_bundle_id_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.pbxproj");

    write(&path, include_str!("project_fixed.pbxproj.in")).unwrap();

    let outcome = fix_bundle_id(&path, &default_substitution()).unwrap();

    assert_eq!(outcome.replacements, 0);
    assert!(!outcome.changed());
    assert_eq!(
        read(&path).unwrap(),
        include_str!("project_fixed.pbxproj.in").as_bytes()
    );

    dir.close().unwrap();
}

#[test]
fn test_read_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.pbxproj");

    match read_config(&path) {
        Err(Error::FileNotFound(msg)) => assert!(msg.contains("project.pbxproj")),
        other => panic!("Expected FileNotFound, got {:?}", other),
    }

    assert!(fix_bundle_id(&path, &default_substitution()).is_err());
    assert!(!path.exists());

    dir.close().unwrap();
}

#[test]
fn test_read_invalid_utf8() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.pbxproj");

    write(&path, b"fo\xff\xfeo").unwrap();

    match read_config(&path) {
        Err(Error::Decode(_)) => (),
        other => panic!("Expected Decode, got {:?}", other),
    }

    // Nothing may be written if reading failed
    assert!(fix_bundle_id(&path, &default_substitution()).is_err());
    assert_eq!(read(&path).unwrap(), b"fo\xff\xfeo".to_vec());

    dir.close().unwrap();
}

#[test]
fn test_write_config_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.pbxproj");

    write(&path, "a much longer piece of text than what follows").unwrap();

    write_config(&ConfigText {
        path: path.clone(),
        inner: "short".to_string(),
    })
    .unwrap();

    assert_eq!(read(&path).unwrap(), b"short".to_vec());

    dir.close().unwrap();
}

#[test]
fn test_write_config_missing_dir() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ios").join("project.pbxproj");

    let res = write_config(&ConfigText {
        path,
        inner: String::new(),
    });

    assert_eq!(
        std::mem::discriminant(&res.unwrap_err()),
        std::mem::discriminant(&Error::FileNotFound(String::new()))
    );

    dir.close().unwrap();
}

#[test]
fn test_rewriter_needs_read() {
    let mut rewriter = Rewriter::new("/nonexistent/project.pbxproj");

    assert!(rewriter.substitute(&default_substitution()).is_err());
    assert!(rewriter.write().is_err());
}

#[test]
fn test_rewriter_from_config_text() {
    let mut rewriter = Rewriter::from_config_text(ConfigText {
        path: "/nonexistent/project.pbxproj".into(),
        inner: "PRODUCT_BUNDLE_IDENTIFIER = com.example.disruptonApp;".to_string(),
    });

    rewriter.substitute(&default_substitution()).unwrap();

    assert_eq!(rewriter.replacements, Some(1));
    assert_eq!(
        rewriter.config_text.unwrap().inner,
        "PRODUCT_BUNDLE_IDENTIFIER = com.disrupton.app;"
    );
}
