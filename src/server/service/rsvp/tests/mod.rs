use huddle_test_utils::prelude::*;

use crate::server::model::auth::Identity;


fn identity(email: &str) -> Identity {
    Identity {
        subject: format!("user_{}", email),
        email: email.to_string(),
        name: None,
        avatar_url: None,
    }
}
