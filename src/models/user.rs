//! Signed-in user and role.

/// Which dashboard a user lands on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Host,
    #[default]
    Student,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Host => "Host",
            Role::Student => "Student",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}
