//! Controller augmentation engine.
//!
//! Splices a rendered endpoint method into an existing controller source
//! file without a language toolchain: the file's shape is determined by
//! lightweight text scanning (namespace keyword, brace depth, attribute
//! markers), an insertion point is resolved from it, and the snippet is
//! inserted at exactly one offset. The original content is never deleted;
//! malformed or truncated input degrades to a best-effort append instead
//! of aborting.

use std::fs;
use std::path::Path;

/// HTTP verb attributes that mark an already-generated endpoint method.
const ENDPOINT_MARKERS: &[&str] = &["[HttpPost]", "[HttpGet]", "[HttpPut]", "[HttpDelete]"];

/// How the target file declares its namespace.
///
/// Files without any namespace keyword are classified [`Declaration`]:
/// both end with members at the top nesting level, so they take the same
/// insertion path.
///
/// [`Declaration`]: NamespaceStyle::Declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceStyle {
    /// `namespace Foo.Bar;` — statement-terminated, members follow at top level.
    Declaration,
    /// `namespace Foo.Bar { ... }` — members are nested inside the brace pair.
    Block,
}

/// Where and how a snippet gets spliced into the file.
///
/// `apply` composes `text[..offset] + prefix + snippet + suffix + indent
/// + text[offset..]`; `indent` re-indents the displaced closing brace
/// when the snippet lands inside a class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionPlan {
    pub offset: usize,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub indent: &'static str,
}

/// Result of an augmentation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The endpoint was spliced in and the file rewritten.
    Added,
    /// The controller file does not exist; nothing was written.
    ControllerMissing,
}

/// Find the offset of the `}` matching the `{` at `open_index`.
///
/// Scans forward one byte at a time with a depth counter starting at 1.
/// Braces inside string literals and comments are counted like any other;
/// an accepted limitation, since the engine only ever targets
/// machine-generated controller files. Returns `None` when the input runs
/// out before the depth reaches zero.
pub fn find_matching_close(text: &str, open_index: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (i, b) in text.bytes().enumerate().skip(open_index + 1) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Classify the namespace style of a source file.
///
/// Looks at the first `namespace ` keyword only and at the single line it
/// sits on: a `;` on that line means declaration style. Generated
/// controller files declare their namespace on one line, so this is
/// enough.
pub fn detect_style(text: &str) -> NamespaceStyle {
    let Some(ns_start) = text.find("namespace ") else {
        // No namespace wrapper at all; same insertion path as declaration style.
        return NamespaceStyle::Declaration;
    };
    let line_end = text[ns_start..]
        .find('\n')
        .map(|i| ns_start + i)
        .unwrap_or(text.len());
    if text[ns_start..line_end].contains(';') {
        NamespaceStyle::Declaration
    } else {
        NamespaceStyle::Block
    }
}

/// Whether a block namespace body already contains generated endpoints.
///
/// Signature-marker search over the four verb attributes. This picks the
/// placement strategy; it does not deduplicate individual features.
pub fn has_existing_endpoints(interior: &str) -> bool {
    ENDPOINT_MARKERS.iter().any(|m| interior.contains(m))
}

/// Compute the insertion plan for a snippet, given the detected style.
///
/// Pure function of `(text, style)`:
///
/// - declaration style (or no namespace): before the last `}` of the file;
/// - block style, body has no endpoint markers: right after the
///   namespace's closing `}`, as a top-level sibling;
/// - block style, body has endpoint markers: inside the class body,
///   after the previously-last member's closing `}`;
/// - block style with a malformed or unclosed namespace: same fallback
///   as declaration style.
///
/// A file with no `}` anywhere degrades to an append at end of file.
pub fn resolve(text: &str, style: NamespaceStyle) -> InsertionPlan {
    if style == NamespaceStyle::Declaration {
        return before_last_brace(text);
    }

    let Some(ns_start) = text.find("namespace ") else {
        return before_last_brace(text);
    };
    let Some(ns_open) = text[ns_start..].find('{').map(|i| ns_start + i) else {
        // Namespace keyword but no opening brace; treat as malformed.
        return before_last_brace(text);
    };
    let Some(ns_close) = find_matching_close(text, ns_open) else {
        return before_last_brace(text);
    };

    if has_existing_endpoints(&text[ns_open + 1..ns_close]) {
        // The nearest `}` before the namespace close ends the last member;
        // the snippet becomes the new last member of the class body.
        let offset = text[..ns_close].rfind('}').unwrap_or(ns_close);
        InsertionPlan {
            offset,
            prefix: "",
            suffix: "\n",
            indent: "    ",
        }
    } else {
        // Fresh controller: place the member right after the namespace
        // close, preceded by a newline.
        InsertionPlan {
            offset: ns_close + 1,
            prefix: "\n",
            suffix: "",
            indent: "",
        }
    }
}

fn before_last_brace(text: &str) -> InsertionPlan {
    match text.rfind('}') {
        Some(last) => InsertionPlan {
            offset: last,
            prefix: "",
            suffix: "\n",
            indent: "",
        },
        // No closing brace anywhere: best-effort append at end of file.
        None => InsertionPlan {
            offset: text.len(),
            prefix: "",
            suffix: "",
            indent: "",
        },
    }
}

/// Splice `snippet` into `text` at the planned offset.
///
/// Pure string composition; nothing from the original text is removed.
pub fn apply(text: &str, plan: &InsertionPlan, snippet: &str) -> String {
    let mut out = String::with_capacity(
        text.len() + plan.prefix.len() + snippet.len() + plan.suffix.len() + plan.indent.len(),
    );
    out.push_str(&text[..plan.offset]);
    out.push_str(plan.prefix);
    out.push_str(snippet);
    out.push_str(plan.suffix);
    out.push_str(plan.indent);
    out.push_str(&text[plan.offset..]);
    out
}

/// Splice `snippet` into the controller file at `path`.
///
/// Reads the file fresh, detects the namespace style, resolves the
/// insertion point and overwrites the file in place with the full new
/// content. A missing file is an expected condition and returns
/// [`Outcome::ControllerMissing`] without creating it; read/write
/// failures propagate to the caller.
pub fn augment(path: &Path, snippet: &str) -> Result<Outcome, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Ok(Outcome::ControllerMissing);
    }

    let existing = fs::read_to_string(path)?;
    let style = detect_style(&existing);
    let plan = resolve(&existing, style);
    let updated = apply(&existing, &plan, snippet);
    fs::write(path, updated)?;

    Ok(Outcome::Added)
}
