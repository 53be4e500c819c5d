//! Restricted indentation-grammar document parser.
//!
//! Parses the narrow YAML-like subset used by `.fanout.yml`: `key: value`
//! pairs, `- item` lists, nesting by indentation, `#` comments. Every value
//! is a string; quoting, escaping, multi-line scalars, anchors, and flow
//! collections are not supported. Content outside the subset yields whatever
//! the literal split-on-`:` produces (lenient, not YAML-compliant).
//!
//! Parsing is a single pass over the lines with an explicit stack of open
//! containers, one frame per nesting level. A line at indentation at or
//! below an open frame closes that frame.

use crate::error::{Error, Result};

/// A parsed document node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Scalar(String),
    /// Key/value pairs in document order. Duplicate keys are kept;
    /// lookups return the first occurrence.
    Map(Vec<(String, Node)>),
    List(Vec<Node>),
}

impl Node {
    /// Look up a key in a map node (first occurrence wins).
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Map(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }
}

enum Container {
    Map(Vec<(String, Node)>),
    List(Vec<Node>),
}

impl Container {
    fn into_node(self) -> Node {
        match self {
            Container::Map(pairs) => Node::Map(pairs),
            Container::List(items) => Node::List(items),
        }
    }
}

/// One open nesting level.
struct Frame {
    /// Indentation column of this container's entries.
    indent: usize,
    container: Container,
    /// Key this container attaches to when it closes; `None` for the root
    /// and for inline list-item objects (those attach to the list itself).
    key_in_parent: Option<String>,
}

/// Parse a document into its root map.
///
/// # Errors
///
/// Returns [`Error::Parse`] for lines that are neither blank, comment,
/// `key: value`, nor `- item`, and for indentation that does not resolve to
/// any open scope.
pub fn parse(text: &str) -> Result<Node> {
    let mut stack = vec![Frame {
        indent: 0,
        container: Container::Map(Vec::new()),
        key_in_parent: None,
    }];
    // A `key:` with an empty value waits for the next content line to decide
    // whether it opens a map, a list, or resolves to an empty scalar.
    let mut pending: Option<(String, usize)> = None;

    for (idx, raw) in text.lines().enumerate() {
        let lineno = idx + 1;
        let content = raw.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let indent = raw.len() - raw.trim_start().len();
        let item = list_item(content);

        let mut opened = false;
        if let Some((key, key_indent)) = pending.take() {
            if item.is_some() && indent >= key_indent {
                stack.push(Frame {
                    indent,
                    container: Container::List(Vec::new()),
                    key_in_parent: Some(key),
                });
                opened = true;
            } else if item.is_none() && indent > key_indent {
                stack.push(Frame {
                    indent,
                    container: Container::Map(Vec::new()),
                    key_in_parent: Some(key),
                });
                opened = true;
            } else {
                // Nothing nested under the key: it holds an empty scalar.
                attach_empty(&mut stack, key);
            }
        }

        if !opened {
            close_frames(&mut stack, indent, item.is_some());
        }

        match item {
            Some(body) => {
                // Column of the item body, used as the indent of an inline object.
                let offset = content.len() - body.len();
                insert_item(&mut stack, body, indent + offset, lineno, &mut pending)?;
            }
            None => insert_pair(&mut stack, content, indent, lineno, &mut pending)?,
        }
    }

    if let Some((key, _)) = pending.take() {
        attach_empty(&mut stack, key);
    }
    while stack.len() > 1 {
        pop_frame(&mut stack);
    }

    match stack.pop() {
        Some(root) => Ok(root.container.into_node()),
        None => Ok(Node::Map(Vec::new())),
    }
}

/// Returns the body after the `- ` marker when the line is a list item.
fn list_item(content: &str) -> Option<&str> {
    if content == "-" {
        return Some("");
    }
    content.strip_prefix("- ").map(str::trim_start)
}

/// Close every frame the current line's indentation has stepped out of.
/// A list also closes when a `key: value` line arrives at its own indent,
/// and a map when a list item does.
fn close_frames(stack: &mut Vec<Frame>, indent: usize, is_item: bool) {
    while stack.len() > 1 {
        let top = &stack[stack.len() - 1];
        let close = indent < top.indent
            || (indent == top.indent
                && match top.container {
                    Container::List(_) => !is_item,
                    Container::Map(_) => is_item,
                });
        if !close {
            break;
        }
        pop_frame(stack);
    }
}

fn pop_frame(stack: &mut Vec<Frame>) {
    let Some(frame) = stack.pop() else { return };
    let node = frame.container.into_node();
    if let Some(parent) = stack.last_mut() {
        match (&mut parent.container, frame.key_in_parent) {
            (Container::Map(pairs), Some(key)) => pairs.push((key, node)),
            (Container::List(items), _) => items.push(node),
            // Keyless frames under a map do not occur: inline objects only
            // open inside lists, keyed frames only inside maps.
            (Container::Map(_), None) => {}
        }
    }
}

/// Resolve a dangling `key:` as an empty scalar. The owning map is still the
/// top frame because pending keys are settled on the very next content line.
fn attach_empty(stack: &mut Vec<Frame>, key: String) {
    if let Some(frame) = stack.last_mut() {
        match &mut frame.container {
            Container::Map(pairs) => pairs.push((key, Node::Scalar(String::new()))),
            Container::List(items) => items.push(Node::Scalar(String::new())),
        }
    }
}

/// Insert a list item body into the open list, opening an inline object
/// frame for `- key: value` bodies so later deeper lines attach to it.
fn insert_item(
    stack: &mut Vec<Frame>,
    body: &str,
    body_indent: usize,
    lineno: usize,
    pending: &mut Option<(String, usize)>,
) -> Result<()> {
    let in_list = matches!(
        stack.last().map(|f| &f.container),
        Some(Container::List(_))
    );
    if !in_list {
        return Err(Error::Parse {
            line: lineno,
            message: "list item outside a list".to_string(),
        });
    }

    if inline_pair(body) {
        stack.push(Frame {
            indent: body_indent,
            container: Container::Map(Vec::new()),
            key_in_parent: None,
        });
        return insert_pair(stack, body, body_indent, lineno, pending);
    }

    if let Some(Frame {
        container: Container::List(items),
        ..
    }) = stack.last_mut()
    {
        items.push(Node::Scalar(body.to_string()));
    }
    Ok(())
}

/// Whether a list item body opens an inline object rather than a scalar.
///
/// Only `key: value` (colon-space) or a trailing colon counts; a bare `:`
/// keeps the body a scalar so rename entries like `NAME:ALIAS` survive.
fn inline_pair(body: &str) -> bool {
    if body.contains(": ") {
        return true;
    }
    matches!(body.strip_suffix(':'), Some(key) if !key.contains(':'))
}

/// Insert a `key: value` line into the open map. An empty value becomes a
/// pending key settled by the next content line.
fn insert_pair(
    stack: &mut Vec<Frame>,
    content: &str,
    indent: usize,
    lineno: usize,
    pending: &mut Option<(String, usize)>,
) -> Result<()> {
    let Some((key, value)) = content.split_once(':') else {
        return Err(Error::Parse {
            line: lineno,
            message: format!("expected `key: value` or `- item`, got `{content}`"),
        });
    };
    let key = key.trim().to_string();
    let value = value.trim();

    match stack.last_mut().map(|f| &mut f.container) {
        Some(Container::Map(pairs)) => {
            if value.is_empty() {
                *pending = Some((key, indent));
            } else {
                pairs.push((key, Node::Scalar(value.to_string())));
            }
            Ok(())
        }
        _ => Err(Error::Parse {
            line: lineno,
            message: format!("`{key}` does not line up with any open scope"),
        }),
    }
}
