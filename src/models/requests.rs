use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub amount: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default = "default_speak")]
    pub speak: bool,
}

fn default_voice() -> String {
    "bf_heather".to_string()
}

fn default_speak() -> bool {
    false
}
