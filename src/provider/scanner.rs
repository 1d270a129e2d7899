//! Directory scanner that builds a [`ClassRegistry`] from PHP sources.
//!
//! Scanning is a surface pass, not a PHP parse: a logos lexer splits
//! each file into just enough tokens (comments, strings, attributes,
//! a few keywords) to find class-like declarations and the doc comment
//! sitting in front of them. A doc comment stays attached across
//! modifiers, attributes, and plain comments; any other code between
//! the two detaches it, as reflection would see.
//!
//! Anonymous classes (`new class`) and the `Foo::class` constant are
//! recognized and skipped. Heredoc and nowdoc bodies are not treated
//! specially, so a declaration-shaped string inside one can fool the
//! scanner.

use std::fs;
use std::path::{Path, PathBuf};

use logos::Logos;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::base::ClassName;

use super::error::ScanError;
use super::registry::{ClassRecord, ClassRegistry};

/// Scans `.php` files for class declarations and their doc comments.
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceScanner;

impl SourceScanner {
    pub fn new() -> SourceScanner {
        SourceScanner
    }

    /// Scan a directory tree into a fresh registry.
    pub fn scan_directory(&self, root: impl AsRef<Path>) -> Result<ClassRegistry, ScanError> {
        let mut registry = ClassRegistry::new();
        self.scan_into(root, &mut registry)?;
        Ok(registry)
    }

    /// Scan a directory tree into an existing registry.
    ///
    /// Files are collected recursively, sorted by path, and scanned in
    /// parallel; results merge in path order so registration order is
    /// deterministic. Files that fail to read are reported together in
    /// [`ScanError::Failed`] after the readable ones have been merged.
    pub fn scan_into(
        &self,
        root: impl AsRef<Path>,
        registry: &mut ClassRegistry,
    ) -> Result<(), ScanError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.to_path_buf()));
        }

        let mut paths = Vec::new();
        collect_php_files(root, &mut paths)?;
        paths.sort();
        debug!(files = paths.len(), root = %root.display(), "scanning php sources");

        let scanned: Vec<_> = paths
            .par_iter()
            .map(|path| {
                fs::read_to_string(path)
                    .map(|source| scan_source_classes(&source, Some(path.as_path())))
                    .map_err(|e| format!("{}: {}", path.display(), e))
            })
            .collect();

        let mut details = Vec::new();
        for result in scanned {
            match result {
                Ok(classes) => {
                    for (name, record) in classes {
                        registry.insert(name, record);
                    }
                }
                Err(detail) => details.push(detail),
            }
        }

        if details.is_empty() {
            Ok(())
        } else {
            Err(ScanError::Failed {
                count: details.len(),
                details,
            })
        }
    }

    /// Scan one source text without touching the filesystem.
    pub fn scan_source(&self, source: &str) -> Vec<(ClassName, ClassRecord)> {
        scan_source_classes(source, None)
    }
}

fn collect_php_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), ScanError> {
    let entries = fs::read_dir(dir).map_err(|source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| ScanError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            collect_php_files(&path, out)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("php"))
        {
            out.push(path);
        }
    }
    Ok(())
}

/// Surface tokens: just enough PHP to find declarations and skip the
/// regions that could fake one.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum PhpToken {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    /// `/* ... */` and `/** ... */` alike; doc-ness is decided from the
    /// slice afterwards.
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    /// `#` line comment. `#[` is longer, so attributes win over this.
    #[regex(r"#([^\[\n][^\n]*)?")]
    HashComment,

    #[token("#[")]
    AttrOpen,

    #[regex(r"'([^'\\]|\\[\s\S])*'")]
    SingleQuoted,

    #[regex(r#""([^"\\]|\\[\s\S])*""#)]
    DoubleQuoted,

    #[token("namespace")]
    Namespace,
    #[token("class")]
    Class,
    #[token("interface")]
    Interface,
    #[token("trait")]
    Trait,
    #[token("enum")]
    Enum,
    #[token("final")]
    Final,
    #[token("abstract")]
    Abstract,
    #[token("readonly")]
    Readonly,
    #[token("new")]
    New,

    #[token("::")]
    DoubleColon,
    #[token("\\")]
    Backslash,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    #[regex(r"[a-zA-Z_\x{0080}-\x{10FFFF}][a-zA-Z0-9_\x{0080}-\x{10FFFF}]*")]
    Ident,

    #[regex(r".", priority = 0)]
    Other,
}

fn scan_source_classes(source: &str, file: Option<&Path>) -> Vec<(ClassName, ClassRecord)> {
    let mut classes = Vec::new();
    let mut lexer = PhpToken::lexer(source);

    let mut namespace: Option<String> = None;
    let mut pending_doc: Option<&str> = None;
    let mut after_new = false;
    let mut after_double_colon = false;

    while let Some(result) = lexer.next() {
        let token = result.unwrap_or(PhpToken::Other);
        match token {
            PhpToken::Whitespace | PhpToken::LineComment | PhpToken::HashComment => {}
            PhpToken::BlockComment => {
                let text = lexer.slice();
                // A later doc comment replaces an unconsumed earlier one
                if is_doc_comment(text) {
                    pending_doc = Some(text);
                }
            }
            PhpToken::AttrOpen => skip_attribute(&mut lexer),
            // Modifiers sit between a doc comment and its declaration
            PhpToken::Final | PhpToken::Abstract | PhpToken::Readonly => {}
            PhpToken::Namespace => {
                if let Some(declared) = read_namespace(&mut lexer) {
                    namespace = declared;
                }
                pending_doc = None;
                after_new = false;
                after_double_colon = false;
            }
            PhpToken::New => {
                pending_doc = None;
                after_new = true;
                after_double_colon = false;
            }
            PhpToken::DoubleColon => {
                pending_doc = None;
                after_double_colon = true;
                after_new = false;
            }
            PhpToken::Class | PhpToken::Interface | PhpToken::Trait | PhpToken::Enum => {
                // `new class` is anonymous, `Foo::class` is a constant
                let skip = token == PhpToken::Class && (after_new || after_double_colon);
                after_new = false;
                after_double_colon = false;
                if skip {
                    pending_doc = None;
                } else if let Some(name) = read_declared_name(&mut lexer) {
                    let qualified = qualify(namespace.as_deref(), name);
                    let doc = pending_doc.take();
                    trace!(class = %qualified, documented = doc.is_some(), "found declaration");
                    let mut record = match doc {
                        Some(text) => ClassRecord::documented(text),
                        None => ClassRecord::undocumented(),
                    };
                    if let Some(file) = file {
                        record = record.with_file(file);
                    }
                    classes.push((ClassName::from(qualified), record));
                } else {
                    pending_doc = None;
                }
            }
            _ => {
                pending_doc = None;
                after_new = false;
                after_double_colon = false;
            }
        }
    }

    classes
}

fn is_doc_comment(text: &str) -> bool {
    text.starts_with("/**") && text.len() > "/**/".len()
}

/// Consume a balanced `#[...]` attribute group.
fn skip_attribute(lexer: &mut logos::Lexer<'_, PhpToken>) {
    let mut depth = 1u32;
    while depth > 0 {
        let Some(result) = lexer.next() else { return };
        match result.unwrap_or(PhpToken::Other) {
            PhpToken::AttrOpen | PhpToken::LBracket => depth += 1,
            PhpToken::RBracket => depth -= 1,
            _ => {}
        }
    }
}

/// After a `namespace` keyword: `Some(ns)` when this was a declaration
/// (`ns` is `None` for the global `namespace { ... }` form), `None` for
/// the relative-namespace operator (`namespace\foo()`), which must not
/// disturb the current namespace.
fn read_namespace(lexer: &mut logos::Lexer<'_, PhpToken>) -> Option<Option<String>> {
    let mut name = String::new();
    loop {
        let Some(result) = lexer.next() else { break };
        match result.unwrap_or(PhpToken::Other) {
            PhpToken::Whitespace
            | PhpToken::LineComment
            | PhpToken::HashComment
            | PhpToken::BlockComment => {}
            PhpToken::Backslash if name.is_empty() => return None,
            PhpToken::Backslash => name.push('\\'),
            PhpToken::Ident => name.push_str(lexer.slice()),
            // `;`, `{`, anything else ends the declaration
            _ => break,
        }
    }
    Some((!name.is_empty()).then_some(name))
}

/// The identifier following a declaration keyword, if one is next.
fn read_declared_name<'s>(lexer: &mut logos::Lexer<'s, PhpToken>) -> Option<&'s str> {
    while let Some(result) = lexer.next() {
        match result.unwrap_or(PhpToken::Other) {
            PhpToken::Whitespace
            | PhpToken::LineComment
            | PhpToken::HashComment
            | PhpToken::BlockComment => {}
            PhpToken::Ident => return Some(lexer.slice()),
            _ => return None,
        }
    }
    None
}

fn qualify(namespace: Option<&str>, name: &str) -> String {
    match namespace {
        Some(ns) => format!("{ns}\\{name}"),
        None => name.to_string(),
    }
}
