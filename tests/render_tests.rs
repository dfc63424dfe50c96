use regex::Regex;
use serde_props::{
    props, DataSize, DataSizeUnit, Duration, DurationUnit, Error, Instance, Map, Record,
    RenderOptions, Renderer, Value, ValueKind,
};
use std::io;

fn render(value: &Value, options: RenderOptions) -> Result<String, Error> {
    let mut out = Vec::new();
    Renderer::new(&mut out, options).render_document(value)?;
    Ok(String::from_utf8(out).unwrap())
}

fn render_default(value: &Value) -> String {
    render(value, RenderOptions::default()).unwrap()
}

#[test]
fn null_renders_as_empty_assignment() {
    let tree = props!({ "a": { "b": 1, "c": null } });
    assert_eq!(render_default(&tree), "\n[a]\nb = 1\nc = \n");
}

#[test]
fn null_entries_can_be_omitted() {
    let tree = props!({ "a": { "b": 1, "c": null } });
    let options = RenderOptions::new().with_omit_null_values(true);
    assert_eq!(render(&tree, options).unwrap(), "\n[a]\nb = 1\n");
}

#[test]
fn omitted_nulls_disappear_at_every_level() {
    let tree = props!({ "a": null, "b": 1, "c": { "d": null } });
    let options = RenderOptions::new().with_omit_null_values(true);
    assert_eq!(render(&tree, options).unwrap(), "b = 1\n\n[c]\n");
}

#[test]
fn multi_word_key_stays_one_token() {
    let tree = props!({ "x y": "hello world" });
    assert_eq!(render_default(&tree), "x\\ y = hello world\n");
}

#[test]
fn scalar_root_is_rejected_without_output() {
    let mut out = Vec::new();
    let err = Renderer::new(&mut out, RenderOptions::default())
        .render_document(&Value::Int(42))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedRoot {
            kind: ValueKind::Int
        }
    ));
    assert!(out.is_empty(), "no bytes may be written on a root failure");
}

#[test]
fn list_root_is_rejected() {
    let err = render(&Value::List(vec![]), RenderOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedRoot {
            kind: ValueKind::List
        }
    ));
}

#[test]
fn duration_leaf_fails_naming_the_kind() {
    let mut tree = Record::new();
    tree.insert(
        "d".to_string(),
        Value::Duration(Duration::new(5.0, DurationUnit::Minutes)),
    );
    let err = render(&Value::Record(tree), RenderOptions::default()).unwrap_err();
    let message = err.to_string();
    assert!(matches!(
        err,
        Error::UnsupportedValue {
            kind: ValueKind::Duration,
            ..
        }
    ));
    assert!(message.contains("`Duration`"), "{message}");
    assert!(message.contains("5.min"), "{message}");
}

#[test]
fn every_non_renderable_kind_is_rejected() {
    let rejected = [
        (Value::List(vec![Value::Int(1)]), "List"),
        (Value::Set(vec![Value::Int(1)]), "Set"),
        (Value::Pair(Box::new((Value::Int(1), Value::Int(2)))), "Pair"),
        (
            Value::DataSize(DataSize::new(4.0, DataSizeUnit::Kilobytes)),
            "DataSize",
        ),
        (
            Value::Instance(Instance::new("Settings", Record::new())),
            "Instance",
        ),
        (Value::Module("app".to_string()), "Module"),
        (Value::Class("Settings".to_string()), "Class"),
        (Value::TypeAlias("Port".to_string()), "TypeAlias"),
        (Value::Regex(Regex::new("a+").unwrap()), "Regex"),
    ];

    for (value, kind_name) in rejected {
        let mut tree = Record::new();
        tree.insert("v".to_string(), value);
        let err = render(&Value::Record(tree), RenderOptions::default()).unwrap_err();
        let message = err.to_string();
        assert!(
            matches!(err, Error::UnsupportedValue { .. }),
            "expected UnsupportedValue for {kind_name}, got {message}"
        );
        assert!(
            message.contains(&format!("`{kind_name}`")),
            "message for {kind_name} was: {message}"
        );
    }
}

#[test]
fn nested_kind_failure_aborts_mid_render() {
    let tree = props!({ "ok": 1, "bad": { "inner": [1, 2] } });
    let mut out = Vec::new();
    let err = Renderer::new(&mut out, RenderOptions::default())
        .render_document(&tree)
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedValue { .. }));
    // entries before the failure were already flushed
    assert_eq!(String::from_utf8(out).unwrap(), "ok = 1\n\n[bad]\n");
}

#[test]
fn entry_order_is_insertion_order() {
    let tree = props!({ "z": 1, "a": 2, "m": { "q": 3, "b": 4 } });
    assert_eq!(render_default(&tree), "z = 1\na = 2\n\n[m]\nq = 3\nb = 4\n");
}

#[test]
fn section_paths_join_ancestor_keys_with_dots() {
    let tree = props!({ "a": { "b": { "c": 1 } } });
    assert_eq!(render_default(&tree), "\n[a]\n\n[a.b]\nc = 1\n");
}

#[test]
fn leaf_under_section_uses_local_key_only() {
    let tree = props!({ "outer": { "inner": { "leaf": "v" } } });
    let text = render_default(&tree);
    assert!(text.contains("\n[outer.inner]\nleaf = v\n"));
    assert!(!text.contains("outer.inner.leaf ="));
}

#[test]
fn empty_container_renders_header_only() {
    let tree = props!({ "empty": {} });
    assert_eq!(render_default(&tree), "\n[empty]\n");

    let root = Value::Record(Record::new());
    assert_eq!(render_default(&root), "");
}

#[test]
fn document_always_ends_with_newline() {
    let tree = props!({ "foo": { "bar": 0 } });
    for omit_null_values in [false, true] {
        for restrict_charset in [false, true] {
            let options = RenderOptions::new()
                .with_omit_null_values(omit_null_values)
                .with_restrict_charset(restrict_charset);
            let text = render(&tree, options).unwrap();
            assert!(text.ends_with('\n'), "{options:?}: {text:?}");
        }
    }
}

#[test]
fn map_keys_are_converted_like_leaf_values() {
    let mut map = Map::new();
    map.insert(Value::Int(1), Value::from("one"));
    map.insert(Value::Bool(true), Value::from("yes"));
    map.insert(Value::from("k"), Value::from("v"));
    assert_eq!(
        render_default(&Value::Map(map)),
        "1 = one\ntrue = yes\nk = v\n"
    );
}

#[test]
fn container_as_map_key_is_rejected() {
    let mut map = Map::new();
    map.insert(Value::Record(Record::new()), Value::from(1));
    let err = render(&Value::Map(map), RenderOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedValue {
            kind: ValueKind::Record,
            ..
        }
    ));
}

#[test]
fn nested_map_renders_as_section() {
    let mut inner = Map::new();
    inner.insert(Value::from("x"), Value::Int(1));
    let mut root = Record::new();
    root.insert("m".to_string(), Value::Map(inner));
    assert_eq!(render_default(&Value::Record(root)), "\n[m]\nx = 1\n");
}

#[test]
fn syntax_characters_are_escaped_in_keys_and_values() {
    let tree = props!({ "a=b": "c#d", "e:f": "g!h", "bs\\k": "v\\w" });
    assert_eq!(
        render_default(&tree),
        "a\\=b = c\\#d\ne\\:f = g\\!h\nbs\\\\k = v\\\\w\n"
    );
}

#[test]
fn value_leading_space_is_escaped() {
    let tree = props!({ "k": " padded value" });
    assert_eq!(render_default(&tree), "k = \\ padded value\n");
}

#[test]
fn newlines_in_values_are_escaped() {
    let tree = props!({ "k": "line1\nline2" });
    assert_eq!(render_default(&tree), "k = line1\\nline2\n");
}

#[test]
fn restricted_charset_escapes_non_ascii() {
    let tree = props!({ "greeting": "héllo", "emoji": "\u{1F600}" });

    let restricted = RenderOptions::new().with_restrict_charset(true);
    assert_eq!(
        render(&tree, restricted).unwrap(),
        "greeting = h\\u00E9llo\nemoji = \\uD83D\\uDE00\n"
    );

    assert_eq!(
        render_default(&tree),
        "greeting = héllo\nemoji = \u{1F600}\n"
    );
}

#[test]
fn float_leaves_use_shortest_round_trip_form() {
    let tree = props!({ "a": 1.5, "b": 0.1 });
    assert_eq!(render_default(&tree), "a = 1.5\nb = 0.1\n");
}

#[test]
fn render_value_writes_one_scalar_fragment() {
    let cases = [
        (Value::Null, ""),
        (Value::Bool(true), "true"),
        (Value::Int(-3), "-3"),
        (Value::Float(2.5), "2.5"),
        (Value::from("plain"), "plain"),
        (Value::from(" leading"), "\\ leading"),
    ];
    for (value, expected) in cases {
        let mut out = Vec::new();
        Renderer::new(&mut out, RenderOptions::default())
            .render_value(&value)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}

#[test]
fn render_value_rejects_containers_and_rich_kinds() {
    let rejected = [
        Value::Record(Record::new()),
        Value::Map(Map::new()),
        Value::List(vec![]),
        Value::Duration(Duration::new(1.0, DurationUnit::Seconds)),
    ];
    for value in rejected {
        let mut out = Vec::new();
        let err = Renderer::new(&mut out, RenderOptions::default())
            .render_value(&value)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedValue { .. }));
        assert!(out.is_empty());
    }
}

struct FailingSink;

impl io::Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_failure_surfaces_as_io_error() {
    let tree = props!({ "a": 1 });
    let err = Renderer::new(FailingSink, RenderOptions::default())
        .render_document(&tree)
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(err.to_string().contains("sink closed"));
}

#[test]
fn renderer_is_reusable_across_documents() {
    let mut out = Vec::new();
    let mut renderer = Renderer::new(&mut out, RenderOptions::default());
    renderer.render_document(&props!({ "a": 1 })).unwrap();
    renderer.render_document(&props!({ "b": 2 })).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a = 1\nb = 2\n");
}
