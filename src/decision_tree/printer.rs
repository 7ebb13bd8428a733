use colored::Colorize;

use std::collections::HashMap;
use std::io;

use super::node::*;


const INDENT: &str = "   ";


/// Renders a tree for inspection.
/// The output is meant for humans, not for parsing.
///
/// ```text
/// [age ≤ 37.5]
/// true:
///    class: 0
/// false:
///    class: 1
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreePrinter {
    labels: HashMap<String, String>,
    colorize: bool,
}


impl TreePrinter {
    /// Construct a printer without label names or colors.
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the names shown for class labels,
    /// e.g., `"1" => "positive"`.
    /// Labels without a name are shown as they are.
    pub fn labels<I, K, V>(mut self, labels: I) -> Self
        where I: IntoIterator<Item = (K, V)>,
              K: Into<String>,
              V: Into<String>,
    {
        self.labels = labels.into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }


    /// Color the output with ANSI escapes.
    /// Default is `false`.
    pub fn colorize(mut self, flag: bool) -> Self {
        self.colorize = flag;
        self
    }


    /// Returns the indented text form of the tree rooted at `node`.
    pub fn render(&self, node: &Node) -> String {
        let mut buf = String::new();
        self.render_rec(node, 0, &mut buf);
        buf
    }


    /// Write the indented text form of the tree to `out`.
    pub fn write<W>(&self, node: &Node, out: &mut W) -> io::Result<()>
        where W: io::Write
    {
        out.write_all(self.render(node).as_bytes())
    }


    fn render_rec(&self, node: &Node, level: usize, buf: &mut String) {
        let indent = INDENT.repeat(level);
        match node {
            Node::Leaf(ref leaf) => {
                let label = self.label_name(leaf.label());
                let label = if self.colorize {
                    label.green().to_string()
                } else {
                    label.to_string()
                };
                buf.push_str(&format!("{indent}class: {label}\n"));
            },
            Node::Decision(ref branch) => {
                let test = format!(
                    "[{} ≤ {}]",
                    branch.attribute(),
                    branch.threshold(),
                );
                let test = if self.colorize {
                    test.as_str().bold().to_string()
                } else {
                    test
                };
                buf.push_str(&format!("{indent}{test}\n"));
                buf.push_str(&format!("{indent}true:\n"));
                self.render_rec(branch.left(), level + 1, buf);
                buf.push_str(&format!("{indent}false:\n"));
                self.render_rec(branch.right(), level + 1, buf);
            },
        }
    }


    #[inline]
    fn label_name<'a>(&'a self, label: &'a str) -> &'a str {
        self.labels.get(label)
            .map(|name| name.as_str())
            .unwrap_or(label)
    }


    /// Returns the tree rooted at `node` in Graphviz dot format.
    /// Colors are never applied.
    pub fn to_dot(&self, node: &Node) -> String {
        let mut dot = String::from("graph DecisionTree {\n");
        let info = self.to_dot_info(node, 0).0;
        info.into_iter()
            .for_each(|line| dot.push_str(&line));
        dot.push_str("}\n");
        dot
    }


    fn to_dot_info(&self, node: &Node, id: usize) -> (Vec<String>, usize) {
        match node {
            Node::Decision(b) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"{feat} ≤ {thr} ?\" ];\n",
                    feat = escape_dot(b.attribute()),
                    thr = b.threshold(),
                );

                let (l_info, next_id) = self.to_dot_info(b.left(), id + 1);
                let (mut r_info, ret_id) = self.to_dot_info(b.right(), next_id);

                let mut info = l_info;
                info.push(b_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "\tnode_{id} -- node_{l_id} [ label = \"true\" ];\n",
                    l_id = id + 1
                );
                let r_edge = format!(
                    "\tnode_{id} -- node_{r_id} [ label = \"false\" ];\n",
                    r_id = next_id
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{p}\", \
                     shape = box, \
                     ];\n",
                    p = escape_dot(self.label_name(l.label()))
                );

                (vec![info], id + 1)
            }
        }
    }
}


/// Escapes `s` for a double-quoted dot string.
fn escape_dot(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
