#[derive(Clone, Debug)]
pub struct LlmRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
}

pub(crate) fn default_temperature() -> f32 {
    0.4
}

impl LlmRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature: default_temperature(),
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[derive(Clone, Debug)]
pub struct LlmResponse {
    pub content: String,
}
