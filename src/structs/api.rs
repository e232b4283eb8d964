use serde::Deserialize;

/// Body of `POST /pessoas`.
///
/// Required fields are optional here so that a missing `apelido` is reported
/// as a validation failure rather than a decoding one.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePersonBody {
    #[serde(rename(deserialize = "apelido"), default)]
    pub nickname: Option<String>,
    #[serde(rename(deserialize = "nome"), default)]
    pub name: Option<String>,
    #[serde(rename(deserialize = "nascimento"), default)]
    pub birth_date: Option<String>,
    #[serde(rename(deserialize = "stack"), default)]
    pub stacks: Option<Vec<String>>,
}
