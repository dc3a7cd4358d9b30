use crate::llm::{improve_system_prompt, AnthropicClient, LlmError};
use crate::models::DraftKind;

/// Rewrite a follow-up email or call script through the model.
///
/// Unlike transcript analysis there is no canned fallback here; a
/// missing credential or failed call surfaces to the caller. An empty
/// model reply returns the original draft unchanged.
pub async fn improve_draft(
    client: &AnthropicClient,
    content: &str,
    kind: DraftKind,
) -> Result<String, LlmError> {
    let improved = client
        .send_message(improve_system_prompt(kind), content)
        .await?;

    Ok(or_original(improved, content))
}

fn or_original(improved: String, original: &str) -> String {
    if improved.trim().is_empty() {
        original.to_string()
    } else {
        improved
    }
}
