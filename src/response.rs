use serde::Serialize;

/// Output envelope every hook emits. The host reads the `result` field, not
/// the process exit code.
#[derive(Debug, Serialize)]
pub struct HookResponse {
    pub result: &'static str,
    #[serde(
        rename = "additionalContextForSession",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_context: Option<String>,
}

impl HookResponse {
    /// Continue with context text injected into the session.
    pub fn continue_with(context: impl Into<String>) -> Self {
        Self {
            result: "continue",
            additional_context: Some(context.into()),
        }
    }

    /// Bare acknowledgement.
    pub fn acknowledge() -> Self {
        Self {
            result: "continue",
            additional_context: None,
        }
    }

    /// Serialize to the single stdout line. Serialization of this shape
    /// cannot fail; the fallback keeps the never-fail contract anyway.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"result":"continue"}"#.to_string())
    }
}
