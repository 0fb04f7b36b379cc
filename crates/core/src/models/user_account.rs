use super::normalize;
use crate::types::Role;
use serde::{Deserialize, Serialize};

/// Login account managed under `/usuarios`.
///
/// Unlike the session [`User`](crate::types::User), which is rebuilt from the
/// token, this is the backend's account record. Defaults: `id` 0, `username`
/// and `name` empty, `role` estudiante, `active` true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(
        rename = "id",
        alias = "Id",
        alias = "idUsuario",
        alias = "IdUsuario",
        default,
        deserialize_with = "normalize::id"
    )]
    pub id: i64,

    #[serde(
        rename = "usuario",
        alias = "Usuario",
        alias = "username",
        alias = "nombreUsuario",
        default,
        deserialize_with = "normalize::text"
    )]
    pub username: String,

    #[serde(
        rename = "nombre",
        alias = "Nombre",
        default,
        deserialize_with = "normalize::text"
    )]
    pub name: String,

    #[serde(
        rename = "correo",
        alias = "Correo",
        alias = "email",
        alias = "Email",
        default,
        deserialize_with = "normalize::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,

    #[serde(rename = "rol", alias = "Rol", alias = "role", default = "default_role")]
    pub role: Role,

    #[serde(
        rename = "estudianteId",
        alias = "EstudianteId",
        alias = "idEstudiante",
        alias = "IdEstudiante",
        default,
        deserialize_with = "normalize::opt_id"
    )]
    pub student_id: Option<i64>,

    #[serde(
        rename = "activo",
        alias = "Activo",
        default = "active_by_default",
        deserialize_with = "normalize::flag"
    )]
    pub active: bool,
}

fn default_role() -> Role {
    Role::Estudiante
}

fn active_by_default() -> bool {
    true
}

impl Default for UserAccount {
    fn default() -> Self {
        Self {
            id: 0,
            username: String::new(),
            name: String::new(),
            email: None,
            role: default_role(),
            student_id: None,
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_role_and_defaults() {
        let account: UserAccount = serde_json::from_value(json!({
            "IdUsuario": 1,
            "Usuario": "admin",
            "Rol": "ADMIN"
        }))
        .unwrap();
        assert_eq!(account.role, Role::Admin);
        assert!(account.active);
        assert_eq!(account.student_id, None);

        let bare: UserAccount = serde_json::from_value(json!({})).unwrap();
        assert_eq!(bare, UserAccount::default());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = serde_json::from_value::<UserAccount>(json!({"rol": "decano"}));
        assert!(result.is_err());
    }
}
