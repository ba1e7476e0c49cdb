use s3_path_wrangler::{S3Path, S3PathError};

fn path(raw: &str) -> S3Path {
    S3Path::parse(raw).unwrap()
}

#[test]
fn test_absolute_path_properties() {
    let p = path("s3://bucket/folder/file.txt");
    assert_eq!(p.key().unwrap(), "folder/file.txt");
    assert_eq!(p.bucket().unwrap(), "bucket");
    assert_eq!(p.name(), "file.txt");
}

#[test]
fn test_parent_of_folder_and_bucket() {
    assert_eq!(path("s3://bucket/folder/").parent(), Some(path("s3://bucket/")));
    assert_eq!(path("s3://bucket/").parent(), None);
}

#[test]
fn test_relative_path_to_absolute() {
    let p = path("some/relative/path");
    assert!(!p.is_absolute());
    assert_eq!(p.to_absolute().unwrap().bucket().unwrap(), "some");

    assert!(matches!(
        path("file.txt").to_absolute(),
        Err(S3PathError::InvalidBucket(_))
    ));
}

#[test]
fn test_join_strips_leading_slash() {
    let joined = (path("s3://bucket/folder") / "/file.txt").unwrap();
    assert_eq!(joined, path("s3://bucket/folder/file.txt"));
}

#[test]
fn test_with_bucket_on_relative_path() {
    let p = path("some/relative/path").with_bucket("bucket").unwrap();
    assert_eq!(p, path("s3://bucket/some/relative/path"));
    assert_eq!(p, "s3://bucket/some/relative/path");
}

#[test]
fn test_with_bucket_replaces_bucket_of_absolute_path() {
    let p = path("s3://bucket/some/relative/path/file.txt");
    let replaced = p.with_bucket("new-bucket").unwrap();
    assert_eq!(replaced, format!("s3://new-bucket/{}", p.key().unwrap()));
}

#[test]
fn test_with_bucket_is_always_absolute() {
    for raw in ["a", "a/b", "s3://bucket", "s3://bucket/a/b"] {
        assert!(path(raw).with_bucket("other").unwrap().is_absolute());
    }
}

#[test]
fn test_from_parts_round_trip() {
    let examples: &[(&[&str], bool)] = &[
        (&["folder"], false),
        (&["folder", "file.txt"], false),
        (&["bucket"], true),
        (&["bucket", "a", "b.txt"], true),
    ];
    for (parts, absolute) in examples {
        let p = S3Path::from_parts(parts.iter().copied(), *absolute).unwrap();
        assert_eq!(p.parts(), *parts);
        assert_eq!(p.is_absolute(), *absolute);
    }
}

#[test]
fn test_rendering_is_stable() {
    for raw in ["s3://bucket/a/b", "a/b/c", "s3://bucket", "x"] {
        let p = path(raw);
        assert_eq!(path(&p.to_string()), p);
        assert_eq!(path(&format!("{}/", raw)), p);
        assert!(!p.to_string().ends_with('/'));
    }
}

#[test]
fn test_chained_joins_extend_parts() {
    for raw in ["s3://bucket/x", "x/y"] {
        let p = path(raw);
        let joined = ((&p / "a").unwrap() / "b").unwrap();
        let mut expected = p.parts().to_vec();
        expected.extend(["a".to_string(), "b".to_string()]);
        assert_eq!(joined.parts(), expected.as_slice());
        assert_eq!(joined.is_absolute(), p.is_absolute());
    }
}

#[test]
fn test_joining_absolute_path_fails() {
    let absolute = path("s3://bucket/some/relative/path/file.txt");
    for base in ["s3://bucket", "folder"] {
        assert!(matches!(
            &path(base) / &absolute,
            Err(S3PathError::AbsoluteJoin(_))
        ));
    }
}

#[test]
fn test_relative_paths_have_no_bucket_or_key() {
    for raw in ["a", "a/b/c"] {
        assert!(matches!(path(raw).bucket(), Err(S3PathError::UnknownBucket(_))));
        assert!(matches!(path(raw).key(), Err(S3PathError::UnknownBucket(_))));
    }
}

#[test]
fn test_prefix_characters_are_stripped_only_when_parsing_text() {
    assert_eq!(path("s3://sales/q1").bucket().unwrap(), "ales");
    assert_eq!(
        path("sales/q1").to_absolute().unwrap().bucket().unwrap(),
        "sales"
    );
    assert_eq!(
        path("q1").with_bucket("sales").unwrap().parts(),
        ["sales", "q1"]
    );
}
