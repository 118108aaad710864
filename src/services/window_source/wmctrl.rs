use crate::error::Result;
use crate::keynav_error;
use crate::model::{Rectangle, ScreenBounds};
use crate::utils::run_command;
use std::time::Duration;

/// Строка `wmctrl -l -G`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WmctrlWindow {
    pub id: u64,
    /// -1 для окон, закреплённых на всех рабочих столах
    pub desktop: i64,
    pub rect: Rectangle,
    pub title: String,
}

/// Текущий рабочий стол из `wmctrl -d`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmctrlDesktop {
    pub index: i64,
    pub geometry: ScreenBounds,
}

pub struct WmctrlClient {
    timeout: Duration,
}

impl WmctrlClient {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub async fn current_desktop(&self) -> Result<WmctrlDesktop> {
        let output = run_command("wmctrl", &["-d"], self.timeout).await?;
        parse_current_desktop(&output)
    }

    pub async fn windows(&self) -> Result<Vec<WmctrlWindow>> {
        let output = run_command("wmctrl", &["-l", "-G"], self.timeout).await?;
        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(parse_window_line)
            .collect()
    }
}

fn parse_hex(value: &str) -> Option<u64> {
    u64::from_str_radix(value.trim_start_matches("0x"), 16).ok()
}

/// `0x03e00003  0 1920 27   1280 996  host Title with spaces`
pub(crate) fn parse_window_line(line: &str) -> Result<WmctrlWindow> {
    let mut parts = line.split_whitespace();
    let mut next = |field: &str| {
        parts
            .next()
            .ok_or_else(|| keynav_error!(parse, "wmctrl: нет поля {} в строке '{}'", field, line))
    };

    let id_str = next("id")?;
    let id = parse_hex(id_str).ok_or_else(|| keynav_error!(parse, "wmctrl: неверный id '{}'", id_str))?;

    let mut number = |field: &str| -> Result<i64> {
        let value = next(field)?;
        value
            .parse::<i64>()
            .map_err(|_| keynav_error!(parse, "wmctrl: неверное значение {} '{}'", field, value))
    };

    let desktop = number("desktop")?;
    let x = number("x")?;
    let y = number("y")?;
    let width = number("width")?;
    let height = number("height")?;

    // Хост и заголовок; заголовок может отсутствовать или содержать пробелы
    let title = line
        .split_whitespace()
        .skip(7)
        .collect::<Vec<_>>()
        .join(" ");

    Ok(WmctrlWindow {
        id,
        desktop,
        rect: Rectangle::new(
            x.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            y.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            width.clamp(0, i64::from(u32::MAX)) as u32,
            height.clamp(0, i64::from(u32::MAX)) as u32,
        ),
        title,
    })
}

/// `0  * DG: 3840x1080  VP: 0,0  WA: 0,27 3840x1053  Workspace 1`
pub(crate) fn parse_current_desktop(output: &str) -> Result<WmctrlDesktop> {
    let line = output
        .lines()
        .find(|line| line.split_whitespace().nth(1) == Some("*"))
        .ok_or_else(|| keynav_error!(parse, "wmctrl -d: нет активного рабочего стола"))?;

    let mut parts = line.split_whitespace();
    let index = parts
        .next()
        .and_then(|value| value.parse::<i64>().ok())
        .ok_or_else(|| keynav_error!(parse, "wmctrl -d: неверный номер в '{}'", line))?;

    let geometry = parts
        .skip_while(|part| *part != "DG:")
        .nth(1)
        .and_then(|size| size.split_once('x'))
        .and_then(|(w, h)| Some(ScreenBounds::new(w.parse().ok()?, h.parse().ok()?)))
        .ok_or_else(|| keynav_error!(parse, "wmctrl -d: нет геометрии DG в '{}'", line))?;

    Ok(WmctrlDesktop { index, geometry })
}
