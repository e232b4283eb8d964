use tracing::{info, instrument};

use crate::errors::ApiError;
use crate::store::PersonStore;
use crate::structs::api::CreatePersonBody;
use crate::validation;

#[derive(Clone, Debug, Default)]
pub struct PersonService {
    store: PersonStore,
}

impl PersonService {
    pub fn new(store: PersonStore) -> PersonService {
        PersonService { store }
    }

    pub fn store(&self) -> &PersonStore {
        &self.store
    }

    /// Decodes, validates and stores a person from a raw JSON body.
    ///
    /// Nothing is written unless every check passes and the nickname is free.
    #[instrument(name = "create_person", skip_all, fields(nickname))]
    pub fn create_person(&self, body: &[u8]) -> Result<(), ApiError> {
        let body: CreatePersonBody = serde_json::from_slice(body)?;
        let person = validation::validate(body)?;
        tracing::Span::current().record("nickname", person.nickname.as_str());

        let nickname = person.nickname.clone();
        if !self.store.try_insert(person) {
            return Err(ApiError::DuplicateNickname(nickname));
        }
        info!("person created");
        Ok(())
    }
}
