use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

const MODEL: &str = "gemini-2.0-flash";

/// Bilingual scope restriction: the model only answers Hajj/Umrah questions.
const SYSTEM_INSTRUCTIONS: &str = r#"
You are an Islamic scholar assistant specialized exclusively in matters related to:
- Hajj (الحج)
- Umrah (العمرة)
- Islamic rituals (العبادات الإسلامية)
- Related fiqh (الفقه المتعلق بالحج والعمرة)
- Islamic ethics (الأخلاق الإسلامية)

Your responsibilities:
1. Only answer questions about Hajj, Umrah, and directly related Islamic matters
2. Provide authentic information based on Quran and Sunnah
3. Clearly state if something is an opinion from a specific madhab
4. Refuse to answer any questions outside your scope politely
5. Respond in the same language the question was asked in (Arabic or English)
6. For Arabic responses, use proper Islamic terminology (المصطلحات الشرعية)
7. Keep answers concise but comprehensive

If asked about other topics, respond with:
English: "I specialize only in Hajj, Umrah, and related Islamic matters. Please ask about those topics."
Arabic: "أنا متخصص فقط في أمور الحج والعمرة وما يتعلق بهما من أمور إسلامية. الرجاء السؤال في هذه المواضيع."
"#;

const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: i32,
    max_output_tokens: i32,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentRequest {
    /// A fresh single-turn conversation: no history, fixed decoding
    /// parameters, all safety categories unblocked.
    fn single_turn(message: &str) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTIONS.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: message.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.5,
                top_p: 1.0,
                top_k: 32,
                max_output_tokens: 1024,
            },
            safety_settings: SAFETY_CATEGORIES
                .into_iter()
                .map(|category| SafetySetting {
                    category,
                    threshold: "BLOCK_NONE",
                })
                .collect(),
        }
    }
}

impl GenerateContentResponse {
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        Some(
            content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<String>(),
        )
    }
}

/// Client for the Gemini generateContent REST API. Cheap to clone, shared
/// through app state.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, String> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Send a single user message and return the model's reply text. Every
    /// failure mode (network, non-2xx, safety block, empty reply) collapses
    /// into a descriptive error string.
    pub async fn generate(&self, message: &str) -> Result<String, String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, MODEL
        );
        let body = GenerateContentRequest::single_turn(message);

        let resp = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Gemini request failed: {}", e))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(format!("Gemini API error ({}): {}", status, detail));
        }

        let parsed: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| format!("Failed to parse Gemini response: {}", e))?;

        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            return Err(format!("Prompt blocked by safety filters: {}", reason));
        }

        parsed.text().ok_or_else(|| {
            match parsed
                .candidates
                .first()
                .and_then(|c| c.finish_reason.as_deref())
            {
                Some(reason) => format!("Gemini returned no text (finish reason: {})", reason),
                None => "Gemini returned no candidates".to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_turn_request_wire_format() {
        let req = GenerateContentRequest::single_turn("What is Umrah?");
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["contents"].as_array().unwrap().len(), 1);
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "What is Umrah?");

        let config = &json["generationConfig"];
        assert_eq!(config["temperature"], 0.5);
        assert_eq!(config["topP"], 1.0);
        assert_eq!(config["topK"], 32);
        assert_eq!(config["maxOutputTokens"], 1024);

        let settings = json["safetySettings"].as_array().unwrap();
        assert_eq!(settings.len(), 4);
        assert!(settings.iter().all(|s| s["threshold"] == "BLOCK_NONE"));

        // System instruction carries no role and is not part of the history.
        let system = &json["systemInstruction"];
        assert!(system.get("role").is_none());
        assert!(
            system["parts"][0]["text"]
                .as_str()
                .unwrap()
                .contains("Hajj")
        );
    }

    #[test]
    fn response_text_concatenates_parts() {
        let resp: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Umrah is "}, {"text": "a pilgrimage."}]
                },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();

        assert_eq!(resp.text().as_deref(), Some("Umrah is a pilgrimage."));
    }

    #[test]
    fn response_without_candidates_has_no_text() {
        let resp: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(resp.text().is_none());
    }

    #[test]
    fn response_with_empty_parts_has_no_text() {
        let resp: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": []},
                "finishReason": "SAFETY"
            }]
        }))
        .unwrap();
        assert!(resp.text().is_none());
        assert_eq!(
            resp.candidates[0].finish_reason.as_deref(),
            Some("SAFETY")
        );
    }
}
