use crate::error::{KeynavError, Result};
use crate::keynav_error;
use std::collections::HashMap;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Переменные окружения, которые нужны утилитам оконного менеджера.
///
/// При запуске через sudo сессионные переменные пользователя теряются,
/// поэтому восстанавливаем `XDG_RUNTIME_DIR` по uid из `SUDO_USER`.
fn build_env_overrides() -> HashMap<String, String> {
    let mut env_vars = HashMap::new();

    if std::env::var("USER").unwrap_or_default() == "root" {
        if let Ok(sudo_user) = std::env::var("SUDO_USER") {
            if let Ok(output) = std::process::Command::new("id").args(["-u", &sudo_user]).output() {
                if let Ok(uid_str) = String::from_utf8(output.stdout) {
                    let uid = uid_str.trim();
                    let user_runtime_dir = format!("/run/user/{}", uid);

                    debug!("Подставляем переменные окружения для пользователя {}: uid={}", sudo_user, uid);
                    env_vars.insert("XDG_RUNTIME_DIR".to_string(), user_runtime_dir);
                    env_vars.insert("USER".to_string(), sudo_user);
                }
            }
        }
    }

    for key in ["DISPLAY", "SWAYSOCK", "WAYLAND_DISPLAY"] {
        if let Ok(value) = std::env::var(key) {
            env_vars.insert(key.to_string(), value);
        }
    }

    env_vars
}

/// Создать команду; под sudo она выполняется от имени исходного пользователя
pub fn create_command(program: &str, args: &[&str]) -> Command {
    let sudo_user = std::env::var("SUDO_USER").ok();
    let mut cmd = command_as(program, args, sudo_user.as_deref());

    for (key, value) in build_env_overrides() {
        cmd.env(key, value);
    }

    cmd
}

fn command_as(program: &str, args: &[&str], sudo_user: Option<&str>) -> Command {
    let mut cmd = match sudo_user {
        Some(user) => {
            let mut cmd = Command::new("sudo");
            cmd.args(["-E", "-u", user, program]);
            cmd
        }
        None => Command::new(program),
    };
    cmd.args(args);
    cmd.kill_on_drop(true);
    cmd
}

/// Выполнить команду и вернуть stdout. Ненулевой код возврата - ошибка.
pub async fn run_command(program: &str, args: &[&str], timeout: Duration) -> Result<String> {
    debug!("Выполняем: {} {}", program, args.join(" "));
    execute(create_command(program, args), program, timeout).await
}

async fn execute(mut cmd: Command, program: &str, timeout: Duration) -> Result<String> {
    let output = tokio::time::timeout(timeout, cmd.output())
        .await
        .map_err(|_| keynav_error!(timeout, "{} не ответил за {:?}", program, timeout))?
        .map_err(|e| keynav_error!(service_unavailable, "{} не найден: {}", program, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!("{} вернул ошибку: {}", program, stderr);
        return Err(KeynavError::command_failed(program, stderr));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
