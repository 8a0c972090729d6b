//! Inline content flattening.
//!
//! Every chunk value is built by walking a node's inline children and asking
//! one table what each child contributes. The table is the only place that
//! decides which inline kinds reach the output:
//!
//! | policy          | text, soft break | code    | link    | emphasis | image   | html, other  |
//! |-----------------|------------------|---------|---------|----------|---------|--------------|
//! | `DirectText`    | literal          | literal | skip    | skip     | skip    | skip         |
//! | `ParagraphText` | literal          | skip    | label   | skip     | skip    | skip         |
//! | `PlainText`     | literal          | literal | descend | descend  | skip    | descend/skip |
//! | `AltText`       | literal          | literal | descend | descend  | descend | descend/skip |
//!
//! `label` flattens the link's children with `DirectText`, so the URL is
//! always dropped. Raw HTML and hard breaks never contribute.

use comrak::nodes::AstNode;

use super::tags::{inline_kind, literal_text, InlineKind};

/// Which flattening rules apply to a node's inline children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlinePolicy {
    /// Literal-valued direct children only. Used for headings and link labels.
    DirectText,
    /// Text children plus link labels. Used for paragraphs.
    ParagraphText,
    /// Full plain-text rendering through formatting. Used for list items.
    PlainText,
    /// Like `PlainText`, also descending into nested images. Used for image
    /// descriptions.
    AltText,
}

/// What a single inline child adds to the flattened value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Contribution {
    /// The node's own literal text.
    Literal,
    /// The link label, flattened with `DirectText`.
    Label,
    /// The node's children, flattened with the same policy.
    Descend,
    Skip,
}

const fn contribution(policy: InlinePolicy, kind: InlineKind) -> Contribution {
    use Contribution::{Descend, Label, Literal, Skip};
    use InlinePolicy::{AltText, DirectText, ParagraphText, PlainText};

    match (policy, kind) {
        (_, InlineKind::Text | InlineKind::SoftBreak)
        | (DirectText | PlainText | AltText, InlineKind::Code) => Literal,
        (ParagraphText, InlineKind::Link) => Label,
        (PlainText | AltText, InlineKind::Link | InlineKind::Emphasis | InlineKind::Other)
        | (AltText, InlineKind::Image) => Descend,
        _ => Skip,
    }
}

/// Flatten a node's inline children to plain text under `policy`.
#[must_use]
pub fn flatten_children<'a>(node: &'a AstNode<'a>, policy: InlinePolicy) -> String {
    let mut out = String::new();
    push_children(node, policy, &mut out);
    out
}

fn push_children<'a>(node: &'a AstNode<'a>, policy: InlinePolicy, out: &mut String) {
    for child in node.children() {
        let data = child.data.borrow();
        match contribution(policy, inline_kind(&data.value)) {
            Contribution::Literal => {
                if let Some(text) = literal_text(&data.value) {
                    out.push_str(text);
                }
            }
            Contribution::Label => push_children(child, InlinePolicy::DirectText, out),
            Contribution::Descend => push_children(child, policy, out),
            Contribution::Skip => {}
        }
    }
}
