use serde::{Deserialize, Serialize};

/// Request body for account registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response returned after registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub status: &'static str,
    pub status_code: u16,
    pub user_id: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
    pub status_code: u16,
    pub user_id: String,
    pub role: String,
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_deserializes_wire_shape() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"username":"bob","password":"hunter2","email":"bob@example.com"}"#,
        )
        .expect("deserialize");
        assert_eq!(req.username, "bob");
        assert_eq!(req.email, "bob@example.com");
    }

    #[test]
    fn login_response_serializes_all_fields() {
        let response = LoginResponse {
            status: "Login successful",
            status_code: 200,
            user_id: "7".into(),
            role: "user".into(),
            access_token: "ey.j.wt".into(),
        };
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&response).unwrap()).unwrap();
        assert_eq!(json["user_id"], "7");
        assert_eq!(json["role"], "user");
        assert_eq!(json["access_token"], "ey.j.wt");
        assert_eq!(json["status_code"], 200);
    }
}
