use tracing::debug;

/// Тип графической сессии, под которой запущен keynav
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Sway,
    X11,
    Unknown,
}

/// Определить сессию по переменным окружения
pub fn detect_session() -> SessionKind {
    detect_session_from(|key| std::env::var(key).ok())
}

fn detect_session_from<F>(var: F) -> SessionKind
where
    F: Fn(&str) -> Option<String>,
{
    let is_set = |key: &str| var(key).is_some_and(|value| !value.is_empty());

    if is_set("SWAYSOCK") {
        debug!("Найден SWAYSOCK - сессия sway");
        return SessionKind::Sway;
    }

    if let Some(desktop) = var("XDG_CURRENT_DESKTOP") {
        if desktop.to_lowercase().contains("sway") {
            return SessionKind::Sway;
        }
    }

    // Под Wayland DISPLAY указывает на XWayland, его окна нам не помогут
    if var("XDG_SESSION_TYPE").as_deref() == Some("wayland") {
        debug!("Wayland-сессия без sway");
        return SessionKind::Unknown;
    }

    if is_set("DISPLAY") {
        return SessionKind::X11;
    }

    SessionKind::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn detect(vars: &[(&str, &str)]) -> SessionKind {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        detect_session_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_sway_detected_by_socket() {
        assert_eq!(detect(&[("SWAYSOCK", "/run/user/1000/sway-ipc.sock")]), SessionKind::Sway);
        assert_eq!(detect(&[("XDG_CURRENT_DESKTOP", "sway")]), SessionKind::Sway);
    }

    #[test]
    fn test_x11_detected_by_display() {
        assert_eq!(detect(&[("DISPLAY", ":0"), ("XDG_SESSION_TYPE", "x11")]), SessionKind::X11);
    }

    #[test]
    fn test_other_wayland_is_unknown() {
        assert_eq!(
            detect(&[("DISPLAY", ":0"), ("XDG_SESSION_TYPE", "wayland")]),
            SessionKind::Unknown
        );
        assert_eq!(detect(&[]), SessionKind::Unknown);
    }
}
