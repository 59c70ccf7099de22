//! Marker templates such as `--- FILE-START: {{.FilePath}} ---`

use std::fmt;

use crate::error::TemplateError;

/// Values available to a marker template for one file.
#[derive(Debug, Clone, Copy)]
pub struct TemplateData<'a> {
    pub file_path: &'a str,
    pub file_ext: &'a str,
    pub file_name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    FilePath,
    FileExt,
    FileName,
}

/// A compiled marker template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Compile a template. `{{.FilePath}}`, `{{.FileExt}}` and `{{.FileName}}`
    /// are substituted; whitespace inside the braces is allowed.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Text(rest[..open].to_string()));
            }
            let after_open = &rest[open + 2..];
            let close = after_open.find("}}").ok_or(TemplateError::Unclosed {
                position: offset + open,
            })?;

            let field = after_open[..close].trim();
            segments.push(match field.strip_prefix('.').unwrap_or(field) {
                "FilePath" => Segment::FilePath,
                "FileExt" => Segment::FileExt,
                "FileName" => Segment::FileName,
                other => return Err(TemplateError::UnknownField(other.to_string())),
            });

            let consumed = open + 2 + close + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// A template that renders `text` verbatim, with no substitution.
    pub fn literal(text: &str) -> Self {
        Self {
            source: text.to_string(),
            segments: vec![Segment::Text(text.to_string())],
        }
    }

    pub fn render(&self, data: &TemplateData<'_>) -> String {
        let mut out = String::with_capacity(self.source.len() + data.file_path.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::FilePath => out.push_str(data.file_path),
                Segment::FileExt => out.push_str(data.file_ext),
                Segment::FileName => out.push_str(data.file_name),
            }
        }
        out
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
