//! Submission Draft
//!
//! Editable state of the submission form and the multipart payload built from it.
//! Generic over the file handle so the logic does not depend on the DOM.

use crate::error::ApiError;
use crate::models::SubmitResponse;

/// Multipart key of the optional attachment
pub const FILE_FIELD: &str = "file";

/// One of the three required text inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Text1,
    Text2,
    Text3,
}

impl TextField {
    pub const ALL: [TextField; 3] = [TextField::Text1, TextField::Text2, TextField::Text3];

    /// Multipart key and input name
    pub fn name(&self) -> &'static str {
        match self {
            TextField::Text1 => "text1",
            TextField::Text2 => "text2",
            TextField::Text3 => "text3",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            TextField::Text1 => "Text 1",
            TextField::Text2 => "Text 2",
            TextField::Text3 => "Text 3",
        }
    }
}

/// Form values owned by the submission view
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft<F> {
    text1: String,
    text2: String,
    text3: String,
    file: Option<F>,
}

impl<F> Default for FormDraft<F> {
    fn default() -> Self {
        Self {
            text1: String::new(),
            text2: String::new(),
            text3: String::new(),
            file: None,
        }
    }
}

impl<F> FormDraft<F> {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Text1 => &self.text1,
            TextField::Text2 => &self.text2,
            TextField::Text3 => &self.text3,
        }
    }

    /// Replace one text value, keeping the others.
    pub fn update_text_field(&mut self, field: TextField, value: impl Into<String>) {
        let slot = match field {
            TextField::Text1 => &mut self.text1,
            TextField::Text2 => &mut self.text2,
            TextField::Text3 => &mut self.text3,
        };
        *slot = value.into();
    }

    /// Keep the first file of a non-empty selection. An empty selection
    /// leaves the current file in place.
    pub fn select_file(&mut self, files: impl IntoIterator<Item = F>) {
        if let Some(first) = files.into_iter().next() {
            self.file = Some(first);
        }
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }
}

impl<F: Clone> FormDraft<F> {
    /// Snapshot of the draft as multipart parts, in send order.
    pub fn to_payload(&self) -> MultipartPayload<F> {
        let mut parts: Vec<Part<F>> = TextField::ALL
            .iter()
            .map(|field| Part {
                name: field.name(),
                value: PartValue::Text(self.text(*field).to_string()),
            })
            .collect();

        if let Some(file) = &self.file {
            parts.push(Part {
                name: FILE_FIELD,
                value: PartValue::File(file.clone()),
            });
        }

        MultipartPayload { parts }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartValue<F> {
    Text(String),
    File(F),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Part<F> {
    pub name: &'static str,
    pub value: PartValue<F>,
}

/// Ordered multipart body
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPayload<F> {
    parts: Vec<Part<F>>,
}

impl<F> MultipartPayload<F> {
    pub fn parts(&self) -> &[Part<F>] {
        &self.parts
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.parts.iter().map(|p| p.name).collect()
    }

    /// Append every part to `sink` in order, stopping at the first error.
    pub fn write_to<S: PartSink<F>>(&self, sink: &mut S) -> Result<(), S::Error> {
        for part in &self.parts {
            match &part.value {
                PartValue::Text(text) => sink.append_text(part.name, text)?,
                PartValue::File(file) => sink.append_file(part.name, file)?,
            }
        }
        Ok(())
    }
}

/// Destination for multipart parts, e.g. a browser `FormData`
pub trait PartSink<F> {
    type Error;

    fn append_text(&mut self, name: &str, value: &str) -> Result<(), Self::Error>;
    fn append_file(&mut self, name: &str, file: &F) -> Result<(), Self::Error>;
}

/// What the user sees once the creation call settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blocking alert with the server's message
    Notify(String),
    /// Inline error under the form
    Failed(String),
}

impl SubmitOutcome {
    pub fn from_result(result: Result<SubmitResponse, ApiError>) -> Self {
        match result {
            Ok(response) => SubmitOutcome::Notify(response.message),
            Err(e) => SubmitOutcome::Failed(e.to_string()),
        }
    }
}
