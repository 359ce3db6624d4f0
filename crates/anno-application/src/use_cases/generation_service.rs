//! AI annotation generation service
//!
//! Builds one prompt embedding the verbatim document and code content,
//! sends a single chat completion request, and validates the returned
//! text against the expected categories shape. The generated annotation
//! is returned to the caller without being inserted into the annotation
//! store; persisting it requires an explicit create or save call.

use anno_domain::error::{Error, Result};
use anno_domain::ids::new_id;
use anno_domain::ports::{ChatCompletionProvider, CodeFileStore, DocumentStore};
use anno_domain::{Annotation, AnnotationCategory, CodeFile, Document};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Fixed system role for the chat completion request
const SYSTEM_PROMPT: &str = "You are a code documentation annotation assistant, skilled at \
     analyzing the correspondences between code and the documents that describe it.";

/// The shape the model is asked to answer with.
///
/// Parsing the response through this type is the only validation the
/// model output receives; anything that does not deserialize becomes a
/// generation failure.
#[derive(Debug, Deserialize)]
struct GeneratedCategories {
    categories: BTreeMap<String, AnnotationCategory>,
}

/// AI annotation generation service
pub struct GenerationService {
    documents: Arc<dyn DocumentStore>,
    code_files: Arc<dyn CodeFileStore>,
    chat: Arc<dyn ChatCompletionProvider>,
}

impl GenerationService {
    /// Create a new generation service with injected stores and provider
    pub fn new(
        documents: Arc<dyn DocumentStore>,
        code_files: Arc<dyn CodeFileStore>,
        chat: Arc<dyn ChatCompletionProvider>,
    ) -> Self {
        Self {
            documents,
            code_files,
            chat,
        }
    }

    /// Ask the model to propose an annotation for a document/code pair.
    ///
    /// Both identifiers must resolve in their stores. The returned
    /// annotation carries a fresh identifier and is NOT stored.
    pub async fn generate(&self, document_id: &str, code_id: &str) -> Result<Annotation> {
        let document = self.documents.get(document_id).await?;
        let code = self.code_files.get(code_id).await?;

        let prompt = build_prompt(&document, &code);
        debug!(
            provider = self.chat.provider_name(),
            document_id = %document.id,
            code_id = %code.id,
            "requesting annotation from chat provider"
        );

        let content = self.chat.complete(SYSTEM_PROMPT, &prompt).await?;
        let generated: GeneratedCategories = serde_json::from_str(&content)
            .map_err(|e| Error::generation(format!("malformed model output: {e}")))?;

        let annotation = Annotation {
            id: new_id(),
            document_id: document.id,
            code_id: code.id,
            categories: generated.categories,
        };
        info!(
            annotation_id = %annotation.id,
            categories = annotation.categories.len(),
            "generated annotation proposal"
        );
        Ok(annotation)
    }
}

/// Build the user prompt embedding both sources verbatim
fn build_prompt(document: &Document, code: &CodeFile) -> String {
    format!(
        r#"Analyze the following document and code and identify the correspondences between them.

Document content:
{document_content}

Code content:
{code_content}

Answer with a JSON object of the following shape:
{{
    "categories": {{
        "category_name": {{
            "name": "category name",
            "document_ranges": [
                {{ "start": 0, "end": 10, "content": "text from the document" }}
            ],
            "code_ranges": [
                {{ "start": 0, "end": 10, "content": "text from the code" }}
            ]
        }}
    }}
}}"#,
        document_content = document.content,
        code_content = code.content,
    )
}

#[cfg(test)]
mod tests {
    use super::build_prompt;
    use anno_domain::{CodeFile, Document};

    #[test]
    fn prompt_embeds_both_sources_verbatim() {
        let document = Document {
            id: "d".to_string(),
            name: "widget.md".to_string(),
            content: "the widget frobnicates".to_string(),
        };
        let code = CodeFile {
            id: "c".to_string(),
            name: "widget.rs".to_string(),
            content: "fn frobnicate() {}".to_string(),
        };
        let prompt = build_prompt(&document, &code);
        assert!(prompt.contains("the widget frobnicates"));
        assert!(prompt.contains("fn frobnicate() {}"));
        assert!(prompt.contains("\"categories\""));
    }
}
