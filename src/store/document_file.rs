// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::host::Host;
use crate::model::{
    ContainerKind, Id, ContainerNode, Document, DocumentError, FontName, IdError, LeafKind, LeafNode,
    LetterSpacing, LineHeight, NodeId, RegisteredStyle, RunLengthMismatch, SceneNode, StyleId,
    TextAlignHorizontal, TextAlignVertical, TextCase, TextDecoration, TextNode, TextRun,
};

const DOCUMENT_FILE_VERSION: u32 = 1;
const DEFAULT_PAGE_ID: &str = "0:1";

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    UnsupportedVersion { path: PathBuf, version: u32 },
    InvalidId { field: &'static str, value: String, source: IdError },
    InvalidRuns { node_id: NodeId, source: RunLengthMismatch },
    InvalidDocument { path: PathBuf, source: DocumentError },
    SymlinkRefused { path: PathBuf },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::UnsupportedVersion { path, version } => {
                write!(f, "unsupported document file version {version} at {path:?}")
            }
            Self::InvalidId { field, value, source } => {
                write!(f, "invalid {field} '{value}': {source}")
            }
            Self::InvalidRuns { node_id, source } => {
                write!(f, "invalid text runs on node {node_id}: {source}")
            }
            Self::InvalidDocument { path, source } => {
                write!(f, "invalid document at {path:?}: {source}")
            }
            Self::SymlinkRefused { path } => write!(f, "refusing to write through symlink {path:?}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::InvalidRuns { source, .. } => Some(source),
            Self::InvalidDocument { source, .. } => Some(source),
            Self::UnsupportedVersion { .. } | Self::SymlinkRefused { .. } => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Writes a temp file and renames it into place, without fsync.
    #[default]
    BestEffort,

    /// Also syncs the file contents and, on unix, the containing directory.
    Durable,
}

/// A document persisted as a single JSON file.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    path: PathBuf,
    durability: WriteDurability,
}

impl DocumentFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), durability: WriteDurability::default() }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document, or starts an empty one (single page, empty catalog) when the file
    /// does not exist yet. Nothing is written until the first save.
    pub fn load_or_init(&self) -> Result<Document, StoreError> {
        match fs::metadata(&self.path) {
            Ok(_) => self.load(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let name = self
                    .path
                    .file_stem()
                    .map_or_else(|| "Untitled".to_owned(), |stem| stem.to_string_lossy().into_owned());
                let page_id = parse_id("page.id", DEFAULT_PAGE_ID)?;
                Ok(Document::new(name, page_id))
            }
            Err(source) => Err(StoreError::Io { path: self.path.clone(), source }),
        }
    }

    pub fn load(&self) -> Result<Document, StoreError> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })?;
        let json = serde_json::from_str::<DocumentFileJson>(&raw)
            .map_err(|source| StoreError::Json { path: self.path.clone(), source })?;
        if json.version != DOCUMENT_FILE_VERSION {
            return Err(StoreError::UnsupportedVersion {
                path: self.path.clone(),
                version: json.version,
            });
        }
        document_from_json(json, &self.path)
    }

    pub fn save(&self, document: &Document) -> Result<(), StoreError> {
        let json = document_to_json(document);
        let mut contents = serde_json::to_vec_pretty(&json)
            .map_err(|source| StoreError::Json { path: self.path.clone(), source })?;
        contents.push(b'\n');
        write_atomic(&self.path, &contents, self.durability)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct DocumentFileJson {
    version: u32,
    name: String,
    page: ContainerJson,
    #[serde(default)]
    styles: Vec<StyleJson>,
    #[serde(default)]
    selection: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    font_library: Option<Vec<FontName>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
enum NodeJson {
    Container(ContainerJson),
    Text(TextJson),
    Leaf(LeafJson),
}

#[derive(Debug, Serialize, Deserialize)]
struct ContainerJson {
    id: String,
    name: String,
    kind: ContainerKind,
    #[serde(default)]
    children: Vec<NodeJson>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LeafJson {
    id: String,
    name: String,
    kind: LeafKind,
}

#[derive(Debug, Serialize, Deserialize)]
struct TextJson {
    id: String,
    name: String,
    characters: String,
    #[serde(default)]
    runs: Vec<TextRunJson>,
    #[serde(default)]
    text_align_horizontal: TextAlignHorizontal,
    #[serde(default)]
    text_align_vertical: TextAlignVertical,
    #[serde(default)]
    paragraph_spacing: f64,
    #[serde(default)]
    paragraph_indent: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct TextRunJson {
    len: usize,
    font_name: FontName,
    font_size: f64,
    #[serde(default)]
    line_height: LineHeight,
    #[serde(default)]
    letter_spacing: LetterSpacing,
    #[serde(default)]
    text_case: TextCase,
    #[serde(default)]
    text_decoration: TextDecoration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    style_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StyleJson {
    id: String,
    name: String,
    font_name: FontName,
    font_size: f64,
    #[serde(default)]
    line_height: LineHeight,
    #[serde(default)]
    letter_spacing: LetterSpacing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_align_horizontal: Option<TextAlignHorizontal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_align_vertical: Option<TextAlignVertical>,
    #[serde(default)]
    text_case: TextCase,
    #[serde(default)]
    text_decoration: TextDecoration,
    #[serde(default)]
    paragraph_spacing: f64,
    #[serde(default)]
    paragraph_indent: f64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    remote: bool,
}

fn parse_id<T>(field: &'static str, value: &str) -> Result<Id<T>, StoreError> {
    Id::new(value).map_err(|source| StoreError::InvalidId {
        field,
        value: value.to_owned(),
        source,
    })
}

fn document_to_json(document: &Document) -> DocumentFileJson {
    DocumentFileJson {
        version: DOCUMENT_FILE_VERSION,
        name: document.name().to_owned(),
        page: container_to_json(document.page()),
        styles: document.styles().iter().map(style_to_json).collect(),
        selection: document.selection().into_iter().map(NodeId::into_string).collect(),
        font_library: document.font_library().map(|library| library.iter().cloned().collect()),
    }
}

fn document_from_json(json: DocumentFileJson, path: &Path) -> Result<Document, StoreError> {
    let page = container_from_json(json.page)?;
    let styles = json.styles.into_iter().map(style_from_json).collect::<Result<Vec<_>, _>>()?;
    let selection = json
        .selection
        .iter()
        .map(|node_id| parse_id("selection", node_id))
        .collect::<Result<Vec<_>, _>>()?;
    let font_library = json.font_library.map(|fonts| fonts.into_iter().collect::<BTreeSet<_>>());

    Document::from_parts(json.name, page, styles, selection, font_library)
        .map_err(|source| StoreError::InvalidDocument { path: path.to_path_buf(), source })
}

fn node_to_json(node: &SceneNode) -> NodeJson {
    match node {
        SceneNode::Container(container) => NodeJson::Container(container_to_json(container)),
        SceneNode::Text(text) => NodeJson::Text(text_to_json(text)),
        SceneNode::Leaf(leaf) => NodeJson::Leaf(LeafJson {
            id: leaf.id().to_string(),
            name: leaf.name().to_owned(),
            kind: leaf.kind(),
        }),
    }
}

fn node_from_json(json: NodeJson) -> Result<SceneNode, StoreError> {
    Ok(match json {
        NodeJson::Container(container) => SceneNode::Container(container_from_json(container)?),
        NodeJson::Text(text) => SceneNode::Text(text_from_json(text)?),
        NodeJson::Leaf(leaf) => {
            SceneNode::Leaf(LeafNode::new(parse_id("node.id", &leaf.id)?, leaf.name, leaf.kind))
        }
    })
}

fn container_to_json(container: &ContainerNode) -> ContainerJson {
    ContainerJson {
        id: container.id().to_string(),
        name: container.name().to_owned(),
        kind: container.kind(),
        children: container.children().iter().map(node_to_json).collect(),
    }
}

fn container_from_json(json: ContainerJson) -> Result<ContainerNode, StoreError> {
    let children = json.children.into_iter().map(node_from_json).collect::<Result<Vec<_>, _>>()?;
    Ok(ContainerNode::new(parse_id("node.id", &json.id)?, json.name, json.kind)
        .with_children(children))
}

fn text_to_json(text: &TextNode) -> TextJson {
    TextJson {
        id: text.id().to_string(),
        name: text.name().to_owned(),
        characters: text.characters().to_owned(),
        runs: text
            .runs()
            .iter()
            .map(|run| TextRunJson {
                len: run.len,
                font_name: run.font_name.clone(),
                font_size: run.font_size,
                line_height: run.line_height,
                letter_spacing: run.letter_spacing,
                text_case: run.text_case,
                text_decoration: run.text_decoration,
                style_id: run.style_id.as_ref().map(ToString::to_string),
            })
            .collect(),
        text_align_horizontal: text.text_align_horizontal().into_uniform().unwrap_or_default(),
        text_align_vertical: text.text_align_vertical().into_uniform().unwrap_or_default(),
        paragraph_spacing: text.paragraph_spacing().into_uniform().unwrap_or_default(),
        paragraph_indent: text.paragraph_indent().into_uniform().unwrap_or_default(),
    }
}

fn text_from_json(json: TextJson) -> Result<TextNode, StoreError> {
    let node_id: NodeId = parse_id("node.id", &json.id)?;
    let runs = json
        .runs
        .into_iter()
        .map(|run| {
            let style_id = run
                .style_id
                .as_deref()
                .map(|style_id| parse_id("run.style_id", style_id))
                .transpose()?;
            let mut text_run = TextRun::new(run.len, run.font_name, run.font_size)
                .with_line_height(run.line_height)
                .with_style_id(style_id);
            text_run.letter_spacing = run.letter_spacing;
            text_run.text_case = run.text_case;
            text_run.text_decoration = run.text_decoration;
            Ok(text_run)
        })
        .collect::<Result<Vec<_>, StoreError>>()?;

    let placeholder = FontName::new("Inter", "Regular");
    let mut node = TextNode::new(node_id.clone(), json.characters, placeholder, 12.0)
        .with_name(json.name)
        .with_runs(runs)
        .map_err(|source| StoreError::InvalidRuns { node_id, source })?;
    node.set_text_align_horizontal(json.text_align_horizontal);
    node.set_text_align_vertical(json.text_align_vertical);
    node.set_paragraph_spacing(json.paragraph_spacing);
    node.set_paragraph_indent(json.paragraph_indent);
    Ok(node)
}

fn style_to_json(style: &RegisteredStyle) -> StyleJson {
    StyleJson {
        id: style.id().to_string(),
        name: style.name().to_owned(),
        font_name: style.font_name().clone(),
        font_size: style.font_size(),
        line_height: style.line_height(),
        letter_spacing: style.letter_spacing(),
        text_align_horizontal: style.text_align_horizontal(),
        text_align_vertical: style.text_align_vertical(),
        text_case: style.text_case(),
        text_decoration: style.text_decoration(),
        paragraph_spacing: style.paragraph_spacing(),
        paragraph_indent: style.paragraph_indent(),
        remote: style.is_remote(),
    }
}

fn style_from_json(json: StyleJson) -> Result<RegisteredStyle, StoreError> {
    let style_id: StyleId = parse_id("style.id", &json.id)?;
    let mut style = RegisteredStyle::new(style_id, json.name)
        .with_font(json.font_name, json.font_size)
        .with_line_height(json.line_height);
    style.set_letter_spacing(json.letter_spacing);
    style.set_text_align_horizontal(json.text_align_horizontal);
    style.set_text_align_vertical(json.text_align_vertical);
    style.set_text_case(json.text_case);
    style.set_text_decoration(json.text_decoration);
    style.set_paragraph_spacing(json.paragraph_spacing);
    style.set_paragraph_indent(json.paragraph_indent);
    style.set_remote(json.remote);
    Ok(style)
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

fn write_atomic(path: &Path, contents: &[u8], durability: WriteDurability) -> Result<(), StoreError> {
    match fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => {
            return Err(StoreError::SymlinkRefused { path: path.to_path_buf() });
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => return Err(StoreError::Io { path: path.to_path_buf(), source }),
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::Other, "path has no file name"),
        });
    };

    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    let tmp_path =
        parent.join(format!(".stylesweep.tmp.{}.{}", file_name.to_string_lossy(), nanos));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;
    file.write_all(contents)
        .map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;
    if durability == WriteDurability::Durable {
        file.sync_all().map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;
    }
    drop(file);

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: path.to_path_buf(), source });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent)
                .map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;
            dir.sync_all()
                .map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;
        }
    }

    Ok(())
}
