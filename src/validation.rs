use crate::errors::{ApiError, FieldViolation, Rule};
use crate::structs::{api::CreatePersonBody, person::Person};

pub const NICKNAME_MAX_LEN: usize = 32;
pub const NAME_MAX_LEN: usize = 100;
pub const STACK_ITEM_MAX_LEN: usize = 32;

/// Checks a decoded body and turns it into a [`Person`].
///
/// Checks run in a fixed order and the first failing stage wins: required
/// fields and lengths, then the birth date pattern, then stack items.
pub fn validate(body: CreatePersonBody) -> Result<Person, ApiError> {
    let mut violations = Vec::new();
    check_field("apelido", body.nickname.as_deref(), Some(NICKNAME_MAX_LEN), &mut violations);
    check_field("nome", body.name.as_deref(), Some(NAME_MAX_LEN), &mut violations);
    check_field("nascimento", body.birth_date.as_deref(), None, &mut violations);
    let (Some(nickname), Some(name), Some(birth_date)) =
        (body.nickname, body.name, body.birth_date)
    else {
        return Err(ApiError::ValidationError(violations));
    };
    if !violations.is_empty() {
        return Err(ApiError::ValidationError(violations));
    }

    if !is_date_pattern(&birth_date) {
        return Err(ApiError::InvalidDateFormat(birth_date));
    }

    if let Some(stacks) = &body.stacks {
        check_stacks(stacks)?;
    }

    Ok(Person {
        nickname,
        name,
        birth_date,
        stacks: body.stacks,
    })
}

fn check_field(
    field: &'static str,
    value: Option<&str>,
    max_len: Option<usize>,
    violations: &mut Vec<FieldViolation>,
) {
    match value {
        None | Some("") => violations.push(FieldViolation { field, rule: Rule::Required }),
        Some(value) => {
            if let Some(max) = max_len {
                if value.chars().count() > max {
                    violations.push(FieldViolation { field, rule: Rule::MaxLength(max) });
                }
            }
        }
    }
}

/// `\d{4}-\d{2}-\d{2}`, ASCII digits only. Calendar validity is not checked.
fn is_date_pattern(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn check_stacks(stacks: &[String]) -> Result<(), ApiError> {
    match stacks
        .iter()
        .enumerate()
        .find(|(_, item)| item.is_empty() || item.chars().count() > STACK_ITEM_MAX_LEN)
    {
        Some((index, value)) => Err(ApiError::InvalidStackItem {
            index,
            value: value.clone(),
        }),
        None => Ok(()),
    }
}
