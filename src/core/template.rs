/// Story templates — parsing, loading, validation and rendering.

use rustc_hash::FxHashSet;
use std::path::Path;
use thiserror::Error;

use crate::schema::slot::Slot;
use crate::schema::story::SlotValues;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("template parse error: {0}")]
    Parse(String),
    #[error("unknown placeholder '{{{0}}}'")]
    UnknownPlaceholder(String),
}

#[derive(Debug, Error)]
pub enum TemplateLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("template {index}: {source}")]
    Template {
        index: usize,
        #[source]
        source: FormatError,
    },
}

/// The templates the game ships with.
pub const DEFAULT_TEMPLATES: [&str; 8] = [
    "The {adj} {noun} decided to {verb} because it was feeling {mood}.",
    "Once upon a time, a {adj} {noun} wanted to {verb} while feeling {mood}.",
    "In a {adj} world, a {noun} chose to {verb} because it was {mood}.",
    "A {noun} that was {adj} wanted to {verb} to express its {mood} feelings.",
    "The {adj} {noun} and its friend decided to {verb} together, feeling very {mood}.",
    "On a {adj} day, a {noun} wanted to {verb} to show its {mood} side.",
    "In a magical land, a {noun} that was {adj} decided to {verb} because it felt {mood}.",
    "A {adj} {noun} went on an adventure to {verb} and spread {mood} vibes everywhere.",
];

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSegment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// Named placeholder: `{noun}`, `{verb}`, `{adj}`, `{mood}`.
    Placeholder(String),
}

/// A parsed template — the source text plus its segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub source: String,
    pub segments: Vec<TemplateSegment>,
}

impl Template {
    /// Parse a template string into a sequence of segments.
    ///
    /// Syntax:
    /// - `{name}` → `Placeholder`
    /// - `{{` / `}}` → literal `{` / `}`
    /// - Everything else → `Literal`
    ///
    /// Placeholder names are not checked here; see [`Template::render`] and
    /// [`Template::unknown_placeholders`].
    pub fn parse(input: &str) -> Result<Template, FormatError> {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let mut i = 0;

        while i < len {
            match chars[i] {
                '{' if i + 1 < len && chars[i + 1] == '{' => {
                    literal_buf.push('{');
                    i += 2;
                }
                '{' => {
                    if !literal_buf.is_empty() {
                        segments.push(TemplateSegment::Literal(std::mem::take(&mut literal_buf)));
                    }

                    let start = i + 1;
                    let mut end = start;
                    while end < len && chars[end] != '}' {
                        if chars[end] == '{' {
                            return Err(FormatError::Parse(
                                "nested braces are not allowed".to_string(),
                            ));
                        }
                        end += 1;
                    }
                    if end == len {
                        return Err(FormatError::Parse("unclosed brace".to_string()));
                    }

                    let name: String = chars[start..end].iter().collect();
                    if name.is_empty() {
                        return Err(FormatError::Parse("empty braces".to_string()));
                    }
                    segments.push(TemplateSegment::Placeholder(name));
                    i = end + 1;
                }
                '}' if i + 1 < len && chars[i + 1] == '}' => {
                    literal_buf.push('}');
                    i += 2;
                }
                '}' => {
                    return Err(FormatError::Parse(
                        "unmatched closing brace".to_string(),
                    ));
                }
                c => {
                    literal_buf.push(c);
                    i += 1;
                }
            }
        }

        if !literal_buf.is_empty() {
            segments.push(TemplateSegment::Literal(literal_buf));
        }

        Ok(Template {
            source: input.to_string(),
            segments,
        })
    }

    /// Distinct placeholder names referenced by this template.
    pub fn placeholders(&self) -> FxHashSet<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                TemplateSegment::Placeholder(name) => Some(name.as_str()),
                TemplateSegment::Literal(_) => None,
            })
            .collect()
    }

    /// Slots this template never mentions.
    pub fn missing_slots(&self) -> Vec<Slot> {
        let used = self.placeholders();
        Slot::ALL
            .into_iter()
            .filter(|slot| !used.contains(slot.placeholder()))
            .collect()
    }

    /// Placeholder names that are not one of the four slots, sorted.
    pub fn unknown_placeholders(&self) -> Vec<&str> {
        let mut unknown: Vec<&str> = self
            .placeholders()
            .into_iter()
            .filter(|name| Slot::from_placeholder(name).is_none())
            .collect();
        unknown.sort_unstable();
        unknown
    }

    /// Substitute every placeholder with its slot value.
    pub fn render(&self, values: &SlotValues) -> Result<String, FormatError> {
        let mut output = String::with_capacity(self.source.len() + 32);
        for segment in &self.segments {
            match segment {
                TemplateSegment::Literal(text) => output.push_str(text),
                TemplateSegment::Placeholder(name) => {
                    let slot = Slot::from_placeholder(name)
                        .ok_or_else(|| FormatError::UnknownPlaceholder(name.clone()))?;
                    output.push_str(&values.get(slot).value);
                }
            }
        }
        Ok(output)
    }
}

/// An ordered set of story templates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateSet {
    pub templates: Vec<Template>,
}

impl TemplateSet {
    /// The eight built-in templates.
    pub fn builtin() -> Result<TemplateSet, TemplateLoadError> {
        Self::from_sources(DEFAULT_TEMPLATES)
    }

    /// Parse each source string in order.
    pub fn from_sources<I, S>(sources: I) -> Result<TemplateSet, TemplateLoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let templates = sources
            .into_iter()
            .enumerate()
            .map(|(index, source)| {
                Template::parse(source.as_ref())
                    .map_err(|source| TemplateLoadError::Template { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TemplateSet { templates })
    }

    /// Load a template set from a RON file holding a list of strings.
    pub fn load_from_ron(path: &Path) -> Result<TemplateSet, TemplateLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a template set from a RON list of strings.
    pub fn parse_ron(input: &str) -> Result<TemplateSet, TemplateLoadError> {
        let raw: Vec<String> = ron::from_str(input)?;
        Self::from_sources(raw)
    }

    /// Append the templates of another set after this one's.
    pub fn merge(&mut self, other: TemplateSet) {
        self.templates.extend(other.templates);
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
