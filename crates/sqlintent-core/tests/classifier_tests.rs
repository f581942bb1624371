// Integration tests for statement classifiers
use std::sync::Arc;
use std::thread;

use sqlintent_core::classifier::{
    Classification, ClassifierKind, NullClassifier, RegexClassifier, SqlClassifier,
};

fn setup_classifier() -> RegexClassifier {
    RegexClassifier::new().unwrap()
}

const STATEMENTS: &[&str] = &[
    "select foo from bar",
    "SELECT foo FROM bar",
    "/*c*/select foo from bar",
    "/*select foo from bar for update*/select foo from bar",
    "/* select */update foo set bar='5'",
    "select foo from bar for update",
    "select foo from bar for update    ",
    "select foo from bar for updateX",
    "select seq1.nextvaL from dual",
    "select myseq.Nextval from dual",
    "update foo set bar='5'",
    "insert into foo (a) values (1)",
    "delete from foo where a = 1",
    "create table foo (a int)",
    "commit",
    "",
    "select",
    "/* unterminated select foo from bar",
    "/* hint */ update foo set a = 1 where id in (/* ids */ select id from t)",
    "/* a */ delete from foo /* b */ select x from y",
    "select a from t\nwhere id = 1\nfor update",
    "select s.nextval\nfrom dual",
    "/* FindById\n v2 */\nselect a\nfrom t",
    "select\u{a0}foo from bar",
    "\u{2003}select foo from bar",
    "\u{17f}elect foo from bar",
];

// ========== Read Detection ==========

#[test]
fn test_plain_select_is_read() {
    let c = setup_classifier();
    assert!(c.is_read("select foo from bar"));
}

#[test]
fn test_for_update_is_not_read() {
    let c = setup_classifier();
    assert!(!c.is_read("select foo from bar for update"));
    assert!(!c.is_read("select foo from bar for update    "));
}

#[test]
fn test_for_update_needs_boundary() {
    let c = setup_classifier();
    assert!(c.is_read("select foo from bar for updateX"));
}

#[test]
fn test_nextval_is_not_read() {
    let c = setup_classifier();
    assert!(!c.is_read("select seq1.nextval from dual"));
    assert!(!c.is_read("select myseq.Nextval from dual"));
}

#[test]
fn test_nextval_needs_boundary() {
    let c = setup_classifier();
    assert!(c.is_read("select nextvalue from dual"));
    assert!(c.is_read("select seq.nextvalley from dual"));
}

#[test]
fn test_leading_comment_before_select() {
    let c = setup_classifier();
    assert!(c.is_read("/*c*/select foo from bar"));
    assert!(c.is_read("  /* FindById */ select foo from bar"));
    // Locking keywords inside the leading comment do not count
    assert!(c.is_read(
        "/*select foo from bar for update*/select foo from bar"
    ));
}

#[test]
fn test_leading_comment_before_update() {
    let c = setup_classifier();
    assert!(!c.is_read("/* select */update foo set bar='5'"));
    assert!(!c.is_read("/* for update */ update foo set bar='5'"));
}

#[test]
fn test_multiline_leading_comment() {
    let c = setup_classifier();
    assert_eq!(
        c.parse("/* Find\n ById */select foo from bar"),
        Classification::new(true, false)
    );
}

#[test]
fn test_comment_spans_cannot_hide_a_write() {
    let c = setup_classifier();
    for sql in [
        "/* hint */ update foo set a = 1 where id in (/* ids */ select id from t)",
        "/* a */ delete from foo /* b */ select x from y",
        "/* a */ /* b */ select x from y",
    ] {
        assert_eq!(c.parse(sql), Classification::new(false, true), "{:?}", sql);
        assert!(!c.is_read(sql), "{:?}", sql);
    }
}

#[test]
fn test_select_inside_comment_only() {
    let c = setup_classifier();
    assert!(!c.is_read("/* select foo from bar"));
}

#[test]
fn test_non_ascii_whitespace_and_folding_rejected() {
    let c = setup_classifier();
    for sql in [
        "select\u{a0}foo from bar",
        "\u{2003}select foo from bar",
        "\u{17f}elect foo from bar",
    ] {
        assert_eq!(c.parse(sql), Classification::new(false, true), "{:?}", sql);
    }
}

// ========== Parse ==========

#[test]
fn test_parse_plain_select() {
    let c = setup_classifier();
    assert_eq!(c.parse("select foo from bar"), Classification::READ);
}

#[test]
fn test_parse_locking_select() {
    let c = setup_classifier();
    assert_eq!(
        c.parse("select foo from bar where id = 1 for update"),
        Classification::new(true, true)
    );
    assert_eq!(
        c.parse("select seq1.nextval from dual"),
        Classification::new(true, true)
    );
}

#[test]
fn test_parse_multiline_locking_select() {
    let c = setup_classifier();
    let sql = "select a from t\nwhere id = 1\nfor update";
    assert_eq!(c.parse(sql), Classification::new(true, true));
    assert!(!c.is_read(sql));
    assert_eq!(
        c.parse("select s.nextval\nfrom dual"),
        Classification::new(true, true)
    );
    assert!(!c.is_read("select a\nfrom t\nfor update\nnowait"));
}

#[test]
fn test_parse_writes_and_ddl_are_conservative() {
    let c = setup_classifier();
    for sql in [
        "update foo set bar='5'",
        "/* select */update foo set bar='5'",
        "insert into foo (a) values (1)",
        "delete from foo where a = 1",
        "merge into foo using bar on (foo.a = bar.a) when matched then update set foo.b = bar.b",
        "create table foo (a int)",
        "drop table foo",
        "begin",
        "commit",
        "with x as (select 1 from dual) select * from x",
        "",
        "\u{0}\u{1}garbage",
    ] {
        assert_eq!(c.parse(sql), Classification::new(false, true), "{:?}", sql);
    }
}

#[test]
fn test_is_read_implies_select() {
    let c = setup_classifier();
    for sql in STATEMENTS {
        if c.is_read(sql) {
            assert!(c.parse(sql).is_select, "{:?}", sql);
        }
        assert_eq!(c.is_read(sql), c.parse(sql).is_read(), "{:?}", sql);
    }
}

// ========== Null Classifier ==========

#[test]
fn test_null_classifier_fixed_answer() {
    let c = NullClassifier::new();
    for sql in STATEMENTS {
        assert!(!c.is_read(sql), "{:?}", sql);
        assert_eq!(c.parse(sql), Classification::new(false, false), "{:?}", sql);
    }
}

#[test]
fn test_null_and_regex_disagree_on_unknown() {
    // Callers switching implementations get different transaction semantics
    let regex = setup_classifier();
    let null = NullClassifier::new();
    let sql = "update foo set bar='5'";
    assert!(regex.parse(sql).starts_transaction);
    assert!(!null.parse(sql).starts_transaction);
}

// ========== Construction & Sharing ==========

#[test]
fn test_kind_builds_each_variant() {
    let regex = ClassifierKind::Regex.build().unwrap();
    let null = ClassifierKind::Null.build().unwrap();
    assert!(regex.is_read("select 1 from dual"));
    assert!(!null.is_read("select 1 from dual"));
    assert_eq!(ClassifierKind::default(), ClassifierKind::Regex);
}

#[test]
fn test_shared_across_threads() {
    let c: Arc<dyn SqlClassifier> = Arc::new(setup_classifier());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let c = Arc::clone(&c);
            thread::spawn(move || {
                let read = format!("select col{} from t{}", i, i);
                let locking = format!("select col{} from t{} for update", i, i);
                (c.is_read(&read), c.is_read(&locking))
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (true, false));
    }
}
