//! Corpus discovery - finds every document the linter checks
//!
//! Each collection lives under a fixed subdirectory of the project root.
//! Skills, templates and docs are searched recursively; agents, chains and
//! prompts one level deep. A missing subdirectory is an empty collection.
//!
//! # Examples
//!
//! ```no_run
//! use workflow_lint::core::models::CollectionKind;
//! use workflow_lint::corpus::Corpus;
//!
//! let corpus = Corpus::discover(".").unwrap();
//! for doc in corpus.collection(CollectionKind::Skills) {
//!     println!("{}", doc.relative_path());
//! }
//! ```

use std::cell::OnceCell;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;
use walkdir::WalkDir;

use crate::core::models::CollectionKind;
use crate::paths;

/// Errors that abort a run before or during validation
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Project root does not exist
    #[error("project root does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Project root is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A discovered document could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// The document that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error walking a collection directory
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// A markdown document in the corpus
///
/// Content is read on first access and cached.
#[derive(Debug)]
pub struct Document {
    path: PathBuf,
    relative: String,
    content: OnceCell<String>,
}

impl Document {
    /// Create a document at `path`, identified relative to `root`
    #[must_use]
    pub fn new(root: &Path, path: PathBuf) -> Self {
        let relative = paths::relative_to(root, &path);
        Self {
            path,
            relative,
            content: OnceCell::new(),
        }
    }

    /// Identity: path relative to the corpus root, `/`-separated
    #[must_use]
    pub fn relative_path(&self) -> &str {
        &self.relative
    }

    /// Final path segment, e.g. `spec-writer.md`
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.relative.rsplit_once('/').map_or(self.relative.as_str(), |(_, name)| name)
    }

    /// File name without the `.md` extension, e.g. `spec-writer`
    #[must_use]
    pub fn stem(&self) -> &str {
        let name = self.file_name();
        name.rsplit_once('.').map_or(name, |(stem, _)| stem)
    }

    /// README documents are exempt from metadata checks
    #[must_use]
    pub fn is_readme(&self) -> bool {
        self.file_name().eq_ignore_ascii_case("readme.md")
    }

    /// Document text, read once
    pub fn content(&self) -> Result<&str, CorpusError> {
        if let Some(content) = self.content.get() {
            return Ok(content);
        }
        let text = read_text(&self.path)?;
        Ok(self.content.get_or_init(|| text))
    }
}

/// Read a file as UTF-8, falling back to Latin-1 when it is not valid UTF-8
pub fn read_text(path: &Path) -> Result<String, CorpusError> {
    let bytes = fs::read(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8(bytes).unwrap_or_else(|err| {
        warn!("{} is not valid UTF-8, decoding as Latin-1", path.display());
        decode_latin1(err.as_bytes())
    }))
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Lookup tables for resolving references against one collection
#[derive(Debug, Clone, Default)]
pub struct CollectionIndex {
    paths: HashSet<String>,
    stems: HashSet<String>,
}

impl CollectionIndex {
    /// Whether a document with this root-relative path exists
    #[must_use]
    pub fn has_path(&self, relative: &str) -> bool {
        self.paths.contains(relative)
    }

    /// Whether any document has this file stem
    #[must_use]
    pub fn has_stem(&self, stem: &str) -> bool {
        self.stems.contains(stem)
    }
}

/// All discovered documents of a project
#[derive(Debug)]
pub struct Corpus {
    root: PathBuf,
    manifest: Option<Document>,
    collections: BTreeMap<CollectionKind, Vec<Document>>,
}

impl Corpus {
    /// Discover every collection under `root`
    pub fn discover(root: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let root = root.as_ref().to_path_buf();

        if !root.exists() {
            return Err(CorpusError::RootNotFound(root));
        }
        if !root.is_dir() {
            return Err(CorpusError::NotADirectory(root));
        }

        let mut collections = BTreeMap::new();
        for kind in CollectionKind::ALL {
            let documents = discover_collection(&root, kind)?;
            debug!("discovered {} {kind}", documents.len());
            collections.insert(kind, documents);
        }

        let manifest_path = paths::manifest(&root);
        let manifest = manifest_path.is_file().then(|| Document::new(&root, manifest_path));

        Ok(Self {
            root,
            manifest,
            collections,
        })
    }

    /// The root manifest, if present
    #[must_use]
    pub const fn manifest(&self) -> Option<&Document> {
        self.manifest.as_ref()
    }

    /// Documents of one collection, sorted by relative path
    #[must_use]
    pub fn collection(&self, kind: CollectionKind) -> &[Document] {
        self.collections.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Build path and stem lookups for one collection
    #[must_use]
    pub fn index(&self, kind: CollectionKind) -> CollectionIndex {
        let docs = self.collection(kind);
        CollectionIndex {
            paths: docs.iter().map(|d| d.relative_path().to_string()).collect(),
            stems: docs.iter().map(|d| d.stem().to_string()).collect(),
        }
    }

    /// Whether a root-relative path exists on disk
    #[must_use]
    pub fn exists(&self, relative: &str) -> bool {
        paths::join_relative(&self.root, relative).exists()
    }

    /// Number of documents scanned: every collection plus the root manifest
    #[must_use]
    pub fn files_checked(&self) -> usize {
        self.collections.values().map(Vec::len).sum::<usize>() + 1
    }
}

fn discover_collection(root: &Path, kind: CollectionKind) -> Result<Vec<Document>, CorpusError> {
    let dir = paths::join_relative(root, kind.dir());
    if !dir.is_dir() {
        debug!("{} not found, {kind} collection is empty", dir.display());
        return Ok(Vec::new());
    }

    let walker = WalkDir::new(&dir).follow_links(true);
    let walker = if kind.is_recursive() { walker } else { walker.max_depth(1) };

    let mut documents = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_dangling_non_document(&err) => {
                warn!("skipping {err}");
                continue;
            },
            Err(err) => return Err(err.into()),
        };
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            documents.push(Document::new(root, entry.into_path()));
        }
    }

    // Sort for deterministic output
    documents.sort_by(|a, b| a.relative.cmp(&b.relative));
    Ok(documents)
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// A broken symlink that could never have been a document
fn is_dangling_non_document(err: &walkdir::Error) -> bool {
    let not_found = err.io_error().is_some_and(|io| io.kind() == ErrorKind::NotFound);
    not_found && err.path().is_some_and(|path| !is_markdown(path))
}
