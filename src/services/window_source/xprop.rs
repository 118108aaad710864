use crate::error::Result;
use crate::model::WindowFlags;
use crate::utils::run_command;
use smallvec::SmallVec;
use std::time::Duration;

/// Свойства окна из `xprop`, нужные для фильтрации
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XpropInfo {
    pub window_types: SmallVec<[String; 2]>,
    pub states: SmallVec<[String; 4]>,
    /// `Normal`, `Iconic` или `Withdrawn`
    pub wm_state: Option<String>,
}

impl XpropInfo {
    fn has_type(&self, suffix: &str) -> bool {
        self.window_types
            .iter()
            .any(|atom| atom.strip_prefix("_NET_WM_WINDOW_TYPE_") == Some(suffix))
    }

    fn has_state(&self, suffix: &str) -> bool {
        self.states
            .iter()
            .any(|atom| atom.strip_prefix("_NET_WM_STATE_") == Some(suffix))
    }

    /// Перевести свойства в флаги. Рабочий стол определяется отдельно.
    pub fn to_flags(&self, on_current_desktop: bool) -> WindowFlags {
        let iconic = self.wm_state.as_deref() == Some("Iconic");
        let withdrawn = self.wm_state.as_deref() == Some("Withdrawn");

        WindowFlags {
            // Окна из _NET_CLIENT_LIST всегда управляются WM
            override_redirect: false,
            is_dock: self.has_type("DOCK"),
            is_desktop: self.has_type("DESKTOP"),
            skip_taskbar_or_pager: self.has_state("SKIP_TASKBAR") || self.has_state("SKIP_PAGER"),
            shaded: self.has_state("SHADED"),
            minimized: self.has_state("HIDDEN") || iconic,
            mapped: !withdrawn,
            viewable: !iconic && !withdrawn,
            on_current_desktop,
        }
    }
}

pub struct XpropClient {
    timeout: Duration,
}

impl XpropClient {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub async fn window_info(&self, id: u64) -> Result<XpropInfo> {
        let id = format!("0x{:x}", id);
        let output = run_command(
            "xprop",
            &["-id", &id, "_NET_WM_WINDOW_TYPE", "_NET_WM_STATE", "WM_STATE"],
            self.timeout,
        )
        .await?;
        Ok(parse_xprop(&output))
    }
}

fn parse_atoms(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|atom| !atom.is_empty())
        .map(str::to_string)
}

/// Разобрать вывод xprop. Отсутствующие свойства ("not found") просто пустые.
pub(crate) fn parse_xprop(output: &str) -> XpropInfo {
    let mut info = XpropInfo::default();

    for line in output.lines() {
        let line = line.trim();

        if let Some(value) = line.strip_prefix("_NET_WM_WINDOW_TYPE(ATOM) =") {
            info.window_types.extend(parse_atoms(value));
        } else if let Some(value) = line.strip_prefix("_NET_WM_STATE(ATOM) =") {
            info.states.extend(parse_atoms(value));
        } else if let Some(value) = line.strip_prefix("window state:") {
            info.wm_state = Some(value.trim().to_string());
        }
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normal_window() {
        let output = "_NET_WM_WINDOW_TYPE(ATOM) = _NET_WM_WINDOW_TYPE_NORMAL\n\
                      _NET_WM_STATE(ATOM) = _NET_WM_STATE_MAXIMIZED_VERT, _NET_WM_STATE_MAXIMIZED_HORZ\n\
                      WM_STATE(WM_STATE):\n\
                      \t\twindow state: Normal\n\
                      \t\ticon window: 0x0\n";
        let info = parse_xprop(output);

        assert_eq!(info.window_types.as_slice(), ["_NET_WM_WINDOW_TYPE_NORMAL".to_string()]);
        assert_eq!(info.states.len(), 2);
        assert_eq!(info.wm_state.as_deref(), Some("Normal"));
        assert_eq!(info.to_flags(true), WindowFlags::default());
    }

    #[test]
    fn test_parse_dock_without_state() {
        let output = "_NET_WM_WINDOW_TYPE(ATOM) = _NET_WM_WINDOW_TYPE_DOCK\n\
                      _NET_WM_STATE:  not found.\n\
                      WM_STATE:  not found.\n";
        let flags = parse_xprop(output).to_flags(true);

        assert!(flags.is_dock);
        assert!(flags.mapped && flags.viewable);
    }

    #[test]
    fn test_minimized_and_skip_taskbar() {
        let output = "_NET_WM_STATE(ATOM) = _NET_WM_STATE_HIDDEN, _NET_WM_STATE_SKIP_PAGER\n\
                      WM_STATE(WM_STATE):\n\
                      \t\twindow state: Iconic\n";
        let flags = parse_xprop(output).to_flags(false);

        assert!(flags.minimized);
        assert!(flags.skip_taskbar_or_pager);
        assert!(!flags.viewable);
        assert!(!flags.on_current_desktop);
    }

    #[test]
    fn test_shaded_and_desktop() {
        let output = "_NET_WM_WINDOW_TYPE(ATOM) = _NET_WM_WINDOW_TYPE_DESKTOP\n\
                      _NET_WM_STATE(ATOM) = _NET_WM_STATE_SHADED\n";
        let flags = parse_xprop(output).to_flags(true);

        assert!(flags.is_desktop);
        assert!(flags.shaded);
    }
}
