/// A validated person, as kept in the store. Never mutated after insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub nickname: String,
    pub name: String,
    pub birth_date: String,
    pub stacks: Option<Vec<String>>,
}
