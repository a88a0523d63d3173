// src/usecase/authenticate.rs
//! Login/session flow.
//!
//! The current product grants any submitted email and role a session; there
//! is no credential verification here. Logging in as an engineer also
//! registers the engineer on the roster when the email is new.

use anyhow::Result;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::model::log::{LogSeverity, LogType, NewLogEntry};
use crate::domain::model::user::{Engineer, EngineerPresence, User, UserRole};
use crate::repository::engineer_store::EngineerStore;
use crate::repository::log_store::LogStore;
use crate::repository::session_store::SessionStore;

pub async fn login(
    session: &SessionStore,
    engineers: &EngineerStore,
    logs: &LogStore,
    role: UserRole,
    email: &str,
) -> Result<User> {
    let name = match role {
        UserRole::Admin => "Admin Engineer",
        _ => "New Engineer",
    };

    let user = User {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        avatar: None,
        last_login: Some(Utc::now()),
        ip_address: Some("127.0.0.1".to_string()),
    };

    session.set_session(&user).await?;

    if role == UserRole::Engineer {
        let engineer = Engineer {
            user: user.clone(),
            status: EngineerPresence::Online,
            current_task: "Initial security walkthrough".to_string(),
            assigned_tenants: Vec::new(),
            shift_start: Some(Utc::now()),
        };
        engineers.add_if_absent(engineer).await?;
    }

    logs.append(NewLogEntry::simple(
        LogType::Security,
        LogSeverity::Info,
        user.name.clone(),
        "Account login authorized.",
    ))
    .await?;
    info!(email = %user.email, role = ?role, "session granted");

    Ok(user)
}

pub async fn logout(session: &SessionStore, logs: &LogStore, user_name: &str) -> Result<()> {
    logs.append(NewLogEntry::simple(
        LogType::Security,
        LogSeverity::Info,
        user_name,
        "Session terminated by user.",
    ))
    .await?;
    session.clear_session().await?;
    info!(user = %user_name, "session cleared");
    Ok(())
}
