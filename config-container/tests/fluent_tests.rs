use config_container::{Configurable, FluentConfig, MergeOrder, Options, Value};

fn xyz() -> FluentConfig {
    let mut config = FluentConfig::new();
    config.set_config(Options::from_pairs([("x", 1), ("y", 2), ("z", 3)]).unwrap());
    config
}

fn incoming() -> Options {
    Options::from_pairs([("z", 4), ("i", 5)]).unwrap()
}

fn value(config: &FluentConfig, key: &str) -> Option<Value> {
    config.get_option(key).unwrap().cloned()
}

#[test]
fn merge_incoming_values_win() {
    let mut conf = xyz();
    let merged = conf.merge(incoming(), false).into_owned();

    assert_eq!(value(&merged, "x"), Some(Value::from(1)));
    assert_eq!(value(&merged, "y"), Some(Value::from(2)));
    assert_eq!(value(&merged, "z"), Some(Value::from(4)));
    assert_eq!(value(&merged, "i"), Some(Value::from(5)));
}

#[test]
fn inverted_merge_keeps_existing_values() {
    let mut conf = xyz();
    let merged = conf.merge(incoming(), true).into_owned();

    assert_eq!(value(&merged, "x"), Some(Value::from(1)));
    assert_eq!(value(&merged, "y"), Some(Value::from(2)));
    assert_eq!(value(&merged, "z"), Some(Value::from(3)));
    assert_eq!(value(&merged, "i"), Some(Value::from(5)));

    let explicit = conf.merge(incoming(), MergeOrder::Preserve).into_owned();
    assert_eq!(explicit, merged);
}

#[test]
fn merge_leaves_receiver_untouched() {
    let mut conf = xyz();
    let before = conf.clone();
    let _ = conf.merge(incoming(), false);
    assert_eq!(conf, before);
}

#[test]
fn discard_removes_named_options() {
    let mut conf = xyz();

    let discarded = conf.discard(["x"]).into_owned();
    assert!(!discarded.has_option("x"));
    assert!(discarded.has_option("y"));
    assert!(discarded.has_option("z"));

    let discarded = conf.discard(["x", "y"]).into_owned();
    assert!(!discarded.has_option("x"));
    assert!(!discarded.has_option("y"));
    assert!(discarded.has_option("z"));

    let untouched = conf.discard(["missing"]).into_owned();
    assert_eq!(untouched, conf);
}

#[test]
fn option_adds_and_overrides() {
    let mut conf = FluentConfig::new();
    conf.set_option("x", 1).unwrap();

    let added = conf.option("y", 2).unwrap().into_owned();
    assert!(added.has_option("x"));
    assert_eq!(value(&added, "y"), Some(Value::from(2)));

    let overridden = conf.option("x", 2).unwrap().into_owned();
    assert_eq!(value(&overridden, "x"), Some(Value::from(2)));
    assert_eq!(value(&conf, "x"), Some(Value::from(1)));
}

#[test]
fn invalid_names_are_rejected_before_any_edit() {
    let mut conf = xyz().with_preserve_instance(true);
    let before = conf.clone();

    assert!(conf.option("", 1).is_err());
    assert!(conf.append("", 1).is_err());
    assert!(conf.append_all("", 1, [2]).is_err());
    assert!(conf.push("", [1]).is_err());
    assert!(conf.pop("").is_err());
    assert!(conf.set_option("", 1).is_err());
    assert!(conf.get_option("").is_err());
    assert!(!conf.has_option(""));

    assert_eq!(conf, before);
}

#[test]
fn chained_operations_compose() {
    let mut conf = xyz();
    let result = conf
        .merge(incoming(), false)
        .discard(["x"])
        .option("y", "two")
        .and_then(|fluent| fluent.append("i", 6))
        .unwrap()
        .into_owned();

    let names: Vec<&str> = result.config().keys().map(|key| key.as_str()).collect();
    assert_eq!(names, ["y", "z", "i"]);
    assert_eq!(value(&result, "y"), Some(Value::from("two")));
    assert_eq!(value(&result, "i"), Some(Value::from(vec![5, 6])));
    assert_eq!(conf, xyz());
}
