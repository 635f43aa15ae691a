// All LLM prompt text for the profile module, plus the pure functions that
// assemble it. Nothing in here touches the network.

use std::collections::HashSet;

use crate::models::document::{is_descriptive_key, render_value, ChunkMetadata, FILE_TYPE_KEY};

/// Separator placed between consecutive document chunks.
pub const CHUNK_SEPARATOR: &str = "\n\n";

/// Opens the profile prompt; the declared document-type list follows it.
pub const DOC_TYPES_HEADER: &str =
    "You have been provided with the following types of documents for your analysis:\n";

/// Source-discipline rules that follow the declared document-type list.
pub const SOURCE_RULES: &str = "Use all and only the documents and data provided by the user. \
    You must only reference the document types listed above. \
    Do not invent or assume the existence of other data sources. \
    If a type of data (e.g., 'Coaching Notes') is not present in the provided documents, do not reference it.\n\n\
    For each section of your analysis, make a good faith effort to use and reference insights from all of the provided documents. \n\n";

pub const PROFILE_REQUEST: &str =
    "Based on the following leadership documents, generate a comprehensive leadership profile:\n\n";

/// Section list, formatting rules and the worked example of the expected output.
pub const PROFILE_FORMAT_INSTRUCTIONS: &str = r#"IMPORTANT FORMATTING INSTRUCTIONS:
- For 'Key Strengths', 'Potential Derailers', 'Roles That Would Fit', and 'Roles That Would Not Fit' sections, ALWAYS format the content as a numbered list (1., 2., 3., etc.)
- Insert a blank line between each numbered item (double line break)
- Each point should be focused on a single strength, derailer, or role fit
- Limit each enumerated list to a maximum of 5 items
- For 'Profile Summary' and 'Leadership Style' sections, use paragraph format
- Do not use markdown formatting or special characters that might interfere with JSON

Sections:
1. Profile Summary
2. Key Strengths
3. Potential Derailers
4. Leadership Style
5. Roles That Would Fit
6. Roles That Would Not Fit

Example output:
[
  {"section": "Profile Summary", "content": "Jane Doe is a strategic leader with...", "sources": "Hogan, 360"},
  {"section": "Key Strengths", "content": "1. Strong analytical thinking and problem-solving skills\n\n2. Excellent communication and stakeholder management\n\n3. Resilient under pressure", "sources": "360, CV"},
  {"section": "Potential Derailers", "content": "1. Can become overly focused on details\n\n2. May struggle with delegating effectively\n\n3. Sometimes avoids necessary conflict", "sources": "Hogan, 360"},
  {"section": "Leadership Style", "content": "Jane demonstrates a collaborative, outcomes-focused leadership approach...", "sources": "360"},
  {"section": "Roles That Would Fit", "content": "1. Strategic leadership roles\n\n2. Cross-functional team leadership\n\n3. Change management initiatives", "sources": "Hogan, CV"},
  {"section": "Roles That Would Not Fit", "content": "1. Highly operational roles with repetitive tasks\n\n2. Positions requiring extensive detailed analysis\n\n3. Roles with limited stakeholder interaction", "sources": "Hogan, 360"}
]

"#;

/// Closes the profile prompt, after the document context.
pub const PROFILE_CLOSING: &str = "Return only the JSON array, with no extra commentary or explanation.\n\
    Remember to format 'Key Strengths', 'Potential Derailers', 'Roles That Would Fit', and \
    'Roles That Would Not Fit' as numbered lists with proper line breaks between items.";

pub const QUESTION_REQUEST: &str =
    "Based on the following leadership documents, answer this special question:";

pub const QUESTION_CLOSING: &str = "Please provide a detailed, evidence-based answer, \
    referencing the relevant data from the documents.";

/// Distinct `file_type` values across all metadata, in first-seen order.
/// A `null` file type declares nothing. Values are compared by their rendered
/// text, so `1` and `"1"` are the same type.
pub fn declared_document_types(metadata: Option<&[ChunkMetadata]>) -> Vec<String> {
    let mut seen = HashSet::new();
    metadata
        .unwrap_or_default()
        .iter()
        .filter_map(|meta| meta.get(FILE_TYPE_KEY))
        .filter(|value| !value.is_null())
        .map(render_value)
        .filter(|doc_type| seen.insert(doc_type.clone()))
        .collect()
}

/// Joins chunks with exactly one blank line between neighbours.
pub fn build_context<S: AsRef<str>>(chunks: &[S]) -> String {
    chunks
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(CHUNK_SEPARATOR)
}

/// Renders every field except `file_type`/`filename` as a `key: value` line,
/// chunk by chunk.
pub fn render_metadata(metadata: Option<&[ChunkMetadata]>) -> String {
    metadata
        .unwrap_or_default()
        .iter()
        .flat_map(|meta| meta.iter())
        .filter(|(key, _)| is_descriptive_key(key))
        .map(|(key, value)| format!("{key}: {}", render_value(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the full profile-generation prompt.
pub fn build_profile_prompt<S: AsRef<str>>(
    chunks: &[S],
    metadata: Option<&[ChunkMetadata]>,
) -> String {
    let doc_type_list = declared_document_types(metadata)
        .iter()
        .map(|doc_type| format!("- {doc_type}"))
        .collect::<Vec<_>>()
        .join("\n");
    let metadata_text = render_metadata(metadata);
    let context = build_context(chunks);

    let mut prompt = String::with_capacity(
        PROFILE_FORMAT_INSTRUCTIONS.len() + context.len() + metadata_text.len() + 2048,
    );
    prompt.push_str(DOC_TYPES_HEADER);
    prompt.push_str(&doc_type_list);
    prompt.push_str("\n\n");
    prompt.push_str(SOURCE_RULES);
    prompt.push_str(PROFILE_REQUEST);
    prompt.push_str("Person Information:\n");
    prompt.push_str(&metadata_text);
    prompt.push_str("\n\n");
    prompt.push_str(PROFILE_FORMAT_INSTRUCTIONS);
    prompt.push_str(&context);
    prompt.push_str("\n\n");
    prompt.push_str(PROFILE_CLOSING);
    prompt
}

/// Builds the free-form question prompt. The question is embedded verbatim.
pub fn build_question_prompt<S: AsRef<str>>(chunks: &[S], question: &str) -> String {
    let context = build_context(chunks);
    format!("{QUESTION_REQUEST}\n\n{context}\n\nQuestion: {question}\n\n{QUESTION_CLOSING}")
}
