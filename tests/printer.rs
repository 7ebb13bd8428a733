use minic45::prelude::*;


fn fit() -> C45Classifier {
    let sample = Sample::from_rows(vec![
        Row::from([("age", 30.0), ("risk", 0.0)]),
        Row::from([("age", 45.0), ("risk", 1.0)]),
        Row::from([("age", 50.0), ("risk", 1.0)]),
    ]);
    C45Builder::new()
        .build()
        .unwrap()
        .fit(&sample, &["age"], "risk")
        .unwrap()
}


const RENDERED: &str = "\
[age ≤ 37.5]
true:
   class: 0
false:
   class: 1
";


#[test]
fn render_plain_text() {
    let f = fit();
    assert_eq!(TreePrinter::new().render(f.root()), RENDERED);
    assert_eq!(f.to_string(), RENDERED);
}


#[test]
fn render_nested_tree() {
    let sample = Sample::from_rows(
        [0.0, 0.0, 1.0, 1.0, 0.0, 0.0].into_iter()
            .enumerate()
            .map(|(i, y)| Row::from([("x", (i + 1) as f64), ("y", y)]))
            .collect()
    );
    let f = C45Builder::new()
        .allow_attribute_reuse(true)
        .build()
        .unwrap()
        .fit(&sample, &["x"], "y")
        .unwrap();

    let expected = "\
[x ≤ 2.5]
true:
   class: 0
false:
   [x ≤ 4.5]
   true:
      class: 1
   false:
      class: 0
";
    assert_eq!(f.to_string(), expected);
}


#[test]
fn render_with_label_names() {
    let f = fit();
    let text = TreePrinter::new()
        .labels([("0", "low"), ("1", "high")])
        .render(f.root());

    assert!(text.contains("class: low"));
    assert!(text.contains("class: high"));
    assert!(!text.contains("class: 0"));
}


#[test]
fn colorized_output_has_escapes() {
    colored::control::set_override(true);
    let f = fit();
    let text = TreePrinter::new()
        .colorize(true)
        .render(f.root());

    assert!(text.contains("\x1b["));
    assert!(text.contains("age ≤ 37.5"));
}


#[test]
fn write_to_buffer() {
    let f = fit();
    let mut buf = Vec::new();
    TreePrinter::new().write(f.root(), &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), RENDERED);
}


#[test]
fn dot_format() {
    let f = fit();
    let dot = TreePrinter::new().to_dot(f.root());

    assert!(dot.starts_with("graph DecisionTree {"));
    assert!(dot.trim_end().ends_with('}'));
    assert!(dot.contains("age ≤ 37.5 ?"));
    assert!(dot.contains("node_0 -- node_1 [ label = \"true\" ]"));
    assert!(dot.contains("node_0 -- node_2 [ label = \"false\" ]"));
}


#[test]
fn dot_file() {
    let f = fit();
    let path = std::env::temp_dir().join("minic45_printer_test.dot");
    f.to_dot_file(&path).unwrap();

    let dot = std::fs::read_to_string(&path).unwrap();
    assert_eq!(dot, TreePrinter::new().to_dot(f.root()));
    std::fs::remove_file(&path).unwrap();
}


#[test]
fn dot_escapes_quotes_and_backslashes() {
    let sample = Sample::from_rows(vec![
        Row::from([(r#"say "hi"\now"#, 30.0), ("risk", 0.0)]),
        Row::from([(r#"say "hi"\now"#, 45.0), ("risk", 1.0)]),
    ]);
    let f = C45Builder::new()
        .build()
        .unwrap()
        .fit(&sample, &[r#"say "hi"\now"#], "risk")
        .unwrap();

    let dot = TreePrinter::new()
        .labels([("1", r#"the "high" one"#)])
        .to_dot(f.root());

    assert!(dot.contains(r#"label = "say \"hi\"\\now ≤ 37.5 ?""#));
    assert!(dot.contains(r#"label = "the \"high\" one""#));
    assert!(!dot.contains(r#""say "hi"#));
}
