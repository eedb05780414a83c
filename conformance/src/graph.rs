//! Read-only RDF graph access.
//!
//! Ontology files are parsed with the `sophia` parsers (RDF/XML, Turtle,
//! N-Triples) and copied into an [`OntologyGraph`]: a sorted, deduplicated set
//! of owned triples. The checks only ever see the [`GraphQuery`] trait, so they
//! are independent of the parser.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use reqwest::Url;
use sophia_api::graph::Graph;
use sophia_api::parser::TripleParser;
use sophia_api::serializer::{Stringifier, TripleSerializer};
use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple as _;
use sophia_inmem::graph::LightGraph;
use sophia_iri::Iri;
use sophia_turtle::parser::{nt, turtle::TurtleParser};
use sophia_xml::parser::RdfXmlParser;
use sophia_xml::serializer::RdfXmlSerializer;
use tracing::debug;

use crate::error::{Error, Result};

/// An RDF literal: lexical value plus optional language tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// Lexical form.
    pub value: String,
    /// Language tag, if any (`en`, `de`, ...).
    pub language: Option<String>,
}

impl Literal {
    /// A plain literal without language tag.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
        }
    }

    /// A language-tagged literal.
    pub fn tagged(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
        }
    }
}

/// A subject or object of a triple.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
    /// An IRI.
    Iri(String),
    /// A blank node, identified by its label.
    Blank(String),
    /// A literal.
    Literal(Literal),
}

impl Node {
    /// Shorthand for [`Node::Iri`].
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    /// The smallest node in the derived ordering.
    fn lowest() -> Self {
        Self::Iri(String::new())
    }

    /// The IRI, blank node label or literal value.
    pub fn lexical(&self) -> &str {
        match self {
            Node::Iri(iri) => iri,
            Node::Blank(label) => label,
            Node::Literal(lit) => &lit.value,
        }
    }

    /// The language tag of a literal; `None` for untagged literals and non-literals.
    pub fn language(&self) -> Option<&str> {
        match self {
            Node::Literal(lit) => lit.language.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexical())
    }
}

impl From<Literal> for Node {
    fn from(lit: Literal) -> Self {
        Node::Literal(lit)
    }
}

/// Triple-pattern queries needed by the style guide checks.
pub trait GraphQuery {
    /// All objects `o` of triples `(subject, predicate, o)`.
    fn objects(&self, subject: &Node, predicate: &str) -> Vec<&Node>;

    /// All subjects `s` of triples `(s, predicate, object)`.
    fn subjects(&self, predicate: &str, object: &Node) -> Vec<&Node>;
}

/// One statement of an [`OntologyGraph`]. Predicates are always IRIs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    /// Subject.
    pub subject: Node,
    /// Predicate IRI.
    pub predicate: String,
    /// Object.
    pub object: Node,
}

/// In-memory set of triples.
///
/// Triples are kept sorted by subject and additionally indexed by
/// `(predicate, object, subject)`, so both [`GraphQuery`] lookups are range
/// scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OntologyGraph {
    triples: BTreeSet<Triple>,
    by_object: BTreeSet<(String, Node, Node)>,
}

impl OntologyGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple. Duplicates are ignored.
    pub fn insert(&mut self, subject: Node, predicate: impl Into<String>, object: Node) {
        let predicate = predicate.into();
        self.by_object
            .insert((predicate.clone(), object.clone(), subject.clone()));
        self.triples.insert(Triple {
            subject,
            predicate,
            object,
        });
    }

    /// Number of distinct triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// True if the graph holds no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates over all triples in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Parses a document held in memory. Relative IRIs are rejected, as there
    /// is no base to resolve them against.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if the document does not parse in `format`.
    pub fn parse_str(content: &str, format: RdfFormat) -> Result<Self> {
        let graph = parse_light(content, format, None, format.name())?;
        Ok(Self::from_light(&graph))
    }

    /// Reads and parses an ontology file. Relative IRIs resolve against the
    /// file's own `file://` IRI.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::MalformedInput`] if it does not parse in `format`.
    pub fn load(path: &Path, format: RdfFormat) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let base = file_base(path)?;
        let graph = parse_light(&content, format, Some(base), &path.display().to_string())?;
        let graph = Self::from_light(&graph);
        debug!(path = %path.display(), format = format.name(), triples = graph.len(), "loaded ontology");
        Ok(graph)
    }

    fn from_light(light: &LightGraph) -> Self {
        let mut graph = Self::new();
        for triple in light.triples().flatten() {
            let (Some(subject), Some(predicate), Some(object)) = (
                node_from_term(triple.s()),
                triple.p().iri().map(|iri| iri.as_str().to_owned()),
                node_from_term(triple.o()),
            ) else {
                continue;
            };
            graph.insert(subject, predicate, object);
        }
        graph
    }
}

impl GraphQuery for OntologyGraph {
    fn objects(&self, subject: &Node, predicate: &str) -> Vec<&Node> {
        let start = Triple {
            subject: subject.clone(),
            predicate: predicate.to_owned(),
            object: Node::lowest(),
        };
        self.triples
            .range(start..)
            .take_while(|t| &t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
            .collect()
    }

    fn subjects(&self, predicate: &str, object: &Node) -> Vec<&Node> {
        let start = (predicate.to_owned(), object.clone(), Node::lowest());
        self.by_object
            .range(start..)
            .take_while(|(p, o, _)| p == predicate && o == object)
            .map(|(_, _, s)| s)
            .collect()
    }
}

/// Converts a parsed term; variables and quoted triples are dropped.
fn node_from_term<T: Term>(term: T) -> Option<Node> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Node::Iri(iri.as_str().to_owned())),
        TermKind::BlankNode => term.bnode_id().map(|id| Node::Blank(id.as_str().to_owned())),
        TermKind::Literal => term.lexical_form().map(|value| {
            Node::Literal(Literal {
                value: value.to_string(),
                language: term.language_tag().map(|tag| tag.as_str().to_owned()),
            })
        }),
        _ => None,
    }
}

/// RDF serialization formats accepted for ontology files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// RDF/XML.
    RdfXml,
    /// Turtle 1.1.
    Turtle,
    /// N-Triples.
    NTriples,
}

impl RdfFormat {
    /// Canonical short name.
    pub const fn name(self) -> &'static str {
        match self {
            RdfFormat::RdfXml => "xml",
            RdfFormat::Turtle => "turtle",
            RdfFormat::NTriples => "nt",
        }
    }

    /// Guesses the format from a file extension, defaulting to RDF/XML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("ttl") | Some("n3") => RdfFormat::Turtle,
            Some("nt") => RdfFormat::NTriples,
            _ => RdfFormat::RdfXml,
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RdfFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xml" | "rdfxml" | "rdf/xml" | "rdf" | "owl" | "application/rdf+xml" => {
                Ok(RdfFormat::RdfXml)
            }
            "turtle" | "ttl" | "n3" | "text/turtle" => Ok(RdfFormat::Turtle),
            "nt" | "ntriples" | "n-triples" | "application/n-triples" => Ok(RdfFormat::NTriples),
            _ => Err(Error::malformed_input(
                s,
                "unsupported RDF serialization format (expected xml, turtle or nt)",
            )),
        }
    }
}

/// Parses `path` in `format` and re-serializes it as RDF/XML.
///
/// Relative IRIs are resolved against the file's `file://` IRI first, so the
/// output only holds absolute IRIs.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and
/// [`Error::MalformedInput`] if it cannot be parsed or serialized.
pub fn to_rdf_xml(path: &Path, format: RdfFormat) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let input = path.display().to_string();
    let graph = parse_light(&content, format, Some(file_base(path)?), &input)?;
    let mut serializer = RdfXmlSerializer::new_stringifier();
    serializer
        .serialize_graph(&graph)
        .map_err(|e| Error::malformed_input(input.as_str(), e))?;
    Ok(serializer.as_str().to_owned())
}

/// The `file://` IRI of the canonical `path`.
fn file_base(path: &Path) -> Result<Iri<String>> {
    let canonical = path.canonicalize().map_err(|e| Error::io(path, e))?;
    let input = path.display().to_string();
    let url = Url::from_file_path(&canonical).map_err(|()| {
        Error::malformed_input(input.as_str(), "path cannot be expressed as a file IRI")
    })?;
    Iri::new(url.to_string()).map_err(|e| Error::malformed_input(input.as_str(), e))
}

// N-Triples only allows absolute IRIs, so `base` is not used there.
fn parse_light(
    content: &str,
    format: RdfFormat,
    base: Option<Iri<String>>,
    input: &str,
) -> Result<LightGraph> {
    let parsed: std::result::Result<LightGraph, String> = match format {
        RdfFormat::RdfXml => RdfXmlParser { base }
            .parse_str(content)
            .collect_triples()
            .map_err(|e| e.to_string()),
        RdfFormat::Turtle => TurtleParser { base }
            .parse_str(content)
            .collect_triples()
            .map_err(|e| e.to_string()),
        RdfFormat::NTriples => nt::parse_str(content)
            .collect_triples()
            .map_err(|e| e.to_string()),
    };
    parsed.map_err(|reason| Error::malformed_input(input, reason))
}
