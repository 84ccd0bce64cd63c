use fstab_reader::{Field, FstabEntry, FstabError, MountOption};

type NormalizationCase = (&'static str, &'static str);

const TRAILING_SEPARATOR_CASES: &[NormalizationCase] = &[
    ("", ""),
    ("/", "/"),
    ("/a", "/a"),
    ("/a/", "/a"),
    ("/a/b", "/a/b"),
    ("/a/b/", "/a/b"),
    ("/a//", "/a/"),
];

const WRONG_FIELD_COUNT_LINES: &[(&str, usize)] = &[
    ("", 0),
    ("/dev/sda1", 1),
    ("/dev/sda1 / ext4 defaults 0", 5),
    ("/dev/sda1 / ext4 defaults 0 1 extra", 7),
    ("/dev/sda1 / ext4 defaults,x 0 1 2 3", 8),
];

fn sample_entry() -> FstabEntry {
    FstabEntry::new("/dev/sda1", "/usr", "ext3", "defaults", 0, 0)
}

#[test]
fn parses_line_with_mixed_whitespace() {
    let entry = FstabEntry::parse("//server/share /mntpoint\t\t sometype foo=1,bar=2\t0 1\r\n\t", 0)
        .expect("line should parse");

    assert_eq!(entry.spec(), "//server/share");
    assert_eq!(entry.mount_point(), "/mntpoint");
    assert_eq!(entry.vfs_type(), "sometype");
    assert_eq!(entry.mount_options(), "foo=1,bar=2");
    assert_eq!(entry.dump_frequency(), 0);
    assert_eq!(entry.fsck_pass_number(), 1);
}

#[test]
fn parse_normalizes_trailing_separators() {
    let entry = FstabEntry::parse("//server/share/ /mnt/ cifs ro 0 0", 3).expect("line should parse");
    assert_eq!(entry.spec(), "//server/share");
    assert_eq!(entry.mount_point(), "/mnt");

    let root = FstabEntry::parse("/dev/sda1 / ext4 defaults 1 1", 3).expect("line should parse");
    assert_eq!(root.mount_point(), "/");
}

#[test]
fn new_strips_exactly_one_trailing_separator() {
    for (input, want) in TRAILING_SEPARATOR_CASES {
        let entry = FstabEntry::new(*input, *input, "none", "", 0, 0);
        assert_eq!(entry.spec(), *want, "spec normalization of {:?}", input);
        assert_eq!(entry.mount_point(), *want, "mount point normalization of {:?}", input);
    }
}

#[test]
fn new_leaves_other_fields_verbatim() {
    let entry = FstabEntry::new("/a/", "/", "ext4/", "opts/", -3, 40);
    assert_eq!(entry.spec(), "/a");
    assert_eq!(entry.mount_point(), "/");
    assert_eq!(entry.vfs_type(), "ext4/");
    assert_eq!(entry.mount_options(), "opts/");
    assert_eq!(entry.dump_frequency(), -3);
    assert_eq!(entry.fsck_pass_number(), 40);
}

#[test]
fn rejects_wrong_field_count() {
    for (line, found) in WRONG_FIELD_COUNT_LINES {
        let err = FstabEntry::parse(line, 7).expect_err("line should fail");
        assert_eq!(
            err,
            FstabError::WrongFieldCount { line: 7, found: *found },
            "unexpected error for {:?}",
            line
        );
        assert_eq!(err.line(), 7);
    }
}

#[test]
fn rejects_non_integer_dump_frequency() {
    let err = FstabEntry::parse("/dev/sda1 / ext4 defaults x 1", 2).expect_err("line should fail");
    match &err {
        FstabError::InvalidInteger { field, value, line, .. } => {
            assert_eq!(*field, Field::DumpFrequency);
            assert_eq!(value, "x");
            assert_eq!(*line, 2);
        }
        other => panic!("unexpected error {:?}", other),
    }
    let message = err.to_string();
    assert!(message.contains("fs_freq"), "message was {:?}", message);
    assert!(message.contains("'x'"), "message was {:?}", message);
    assert!(message.contains("line 2"), "message was {:?}", message);
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn rejects_out_of_range_fsck_pass_number() {
    let err = FstabEntry::parse("/dev/sda1 / ext4 defaults 0 32768", 9).expect_err("line should fail");
    assert!(matches!(
        err,
        FstabError::InvalidInteger { field: Field::FsckPassNumber, ref value, line: 9, .. } if value == "32768"
    ));
    assert!(err.to_string().contains("fs_passno"));
}

#[test]
fn accepts_sixteen_bit_bounds() {
    let entry = FstabEntry::parse("a b c d -32768 32767", 0).expect("bounds should parse");
    assert_eq!(entry.dump_frequency(), -32768);
    assert_eq!(entry.fsck_pass_number(), 32767);

    assert!(FstabEntry::parse("a b c d -32769 0", 0).is_err());
    assert!(FstabEntry::parse("a b c d 1.5 0", 0).is_err());
    assert!(FstabEntry::parse("a b c d 0x1 0", 0).is_err());
}

#[test]
fn has_vfs_type_matches_exactly() {
    let entry = sample_entry();
    assert!(entry.has_vfs_type(&["ext3", "ext4"]));
    assert!(entry.has_vfs_type(&[String::from("ext3")]));
    assert!(!entry.has_vfs_type(&["EXT3", "ext"]));
    assert!(!entry.has_vfs_type::<&str>(&[]));
}

#[test]
fn display_joins_fields_with_single_spaces() {
    let entry = FstabEntry::parse("  /dev/sda2\t/boot/   ext4  defaults,noatime   0\t\t2  ", 0)
        .expect("line should parse");
    assert_eq!(entry.to_string(), "/dev/sda2 /boot ext4 defaults,noatime 0 2");
}

#[test]
fn options_split_flags_and_key_values() {
    let entry = FstabEntry::new("//srv/share", "/mnt", "cifs", "ro,uid=1000,credentials=/etc/c=d", 0, 0);
    let options: Vec<MountOption<'_>> = entry.options().collect();
    assert_eq!(
        options,
        vec![
            MountOption::Flag("ro"),
            MountOption::KeyValue("uid", "1000"),
            MountOption::KeyValue("credentials", "/etc/c=d"),
        ]
    );
    assert!(options[0].is_flag());
    assert_eq!(options[1].name(), "uid");
    assert_eq!(entry.mount_options(), "ro,uid=1000,credentials=/etc/c=d");
}

#[test]
fn is_checked_follows_pass_number() {
    assert!(!sample_entry().is_checked());
    assert!(FstabEntry::new("/dev/sda1", "/", "ext4", "defaults", 0, 1).is_checked());
}
